use std::cmp::Ordering;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::{AppRecord, Genre, SortKey};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Whoops! You can only sort by either \"app\" or \"rating\". You tried to sort by \"{0}\"")]
    InvalidSort(String),

    #[error("Whoops! Searchable genres are: Action, Puzzle, Strategy, Casual, Arcade, and Card. You must choose only one genre. However, you tried to search \"{0}\".")]
    InvalidGenre(String),
}

impl ValidationError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Validates, filters and sorts catalog queries.
pub struct QueryProcessor;

impl QueryProcessor {
    /// Run a query against the dataset.
    ///
    /// `sort` is validated before `genre`. Missing and empty parameters are
    /// both treated as absent. The returned vector is always freshly built,
    /// so sorting never reorders `dataset`.
    pub fn process<'a>(
        sort: Option<&str>,
        genre: Option<&str>,
        dataset: &'a [AppRecord],
    ) -> Result<Vec<&'a AppRecord>, ValidationError> {
        let sort = Self::validate_sort(sort)?;
        let genre = Self::validate_genre(genre)?;

        let mut results = Self::filter(dataset, genre);
        if let Some(key) = sort {
            Self::sort(&mut results, key);
        }
        Ok(results)
    }

    pub fn validate_sort(sort: Option<&str>) -> Result<Option<SortKey>, ValidationError> {
        present(sort).map(str::parse::<SortKey>).transpose()
    }

    pub fn validate_genre(genre: Option<&str>) -> Result<Option<Genre>, ValidationError> {
        present(genre).map(str::parse::<Genre>).transpose()
    }

    /// Records carrying `genre`, in dataset order. `None` keeps everything.
    pub fn filter(dataset: &[AppRecord], genre: Option<Genre>) -> Vec<&AppRecord> {
        match genre {
            Some(genre) => dataset.iter().filter(|r| r.has_genre(genre)).collect(),
            None => dataset.iter().collect(),
        }
    }

    /// Stable ascending sort; equal keys keep their relative order.
    pub fn sort(records: &mut [&AppRecord], key: SortKey) {
        records.sort_by(|a, b| compare(a, b, key));
    }
}

fn present(param: Option<&str>) -> Option<&str> {
    param.filter(|p| !p.is_empty())
}

fn compare(a: &AppRecord, b: &AppRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::App => a.app.cmp(&b.app),
        // NaN never comes out of JSON, but treat incomparable ratings as ties.
        SortKey::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn record(app: &str, rating: f64, genres: &[&str]) -> AppRecord {
        AppRecord {
            app: app.to_string(),
            rating,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            extra: Map::new(),
        }
    }

    fn dataset() -> Vec<AppRecord> {
        vec![
            record("Subway Surfers", 4.5, &["Arcade"]),
            record("Block Puzzle", 4.6, &["Puzzle"]),
            record("Clash Royale", 4.6, &["Strategy"]),
            record("Angry Birds", 4.4, &["Arcade", "Action"]),
            record("Sudoku", 4.1, &["Puzzle", "Casual"]),
            record("Shadow Fight", 4.6, &["Action"]),
        ]
    }

    fn names(records: &[&AppRecord]) -> Vec<String> {
        records.iter().map(|r| r.app.clone()).collect()
    }

    #[test]
    fn test_invalid_sort_message() {
        let data = dataset();
        let err = QueryProcessor::process(Some("title"), None, &data).unwrap_err();

        assert_eq!(err, ValidationError::InvalidSort("title".to_string()));
        assert_eq!(
            err.to_string(),
            r#"Whoops! You can only sort by either "app" or "rating". You tried to sort by "title""#
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_genre_message() {
        let data = dataset();
        let err = QueryProcessor::process(None, Some("Adventure"), &data).unwrap_err();

        assert_eq!(
            err.to_string(),
            r#"Whoops! Searchable genres are: Action, Puzzle, Strategy, Casual, Arcade, and Card. You must choose only one genre. However, you tried to search "Adventure"."#
        );
    }

    #[test]
    fn test_sort_checked_before_genre() {
        let data = dataset();
        let err = QueryProcessor::process(Some("price"), Some("Adventure"), &data).unwrap_err();

        assert_eq!(err, ValidationError::InvalidSort("price".to_string()));
    }

    #[test]
    fn test_genre_is_case_sensitive() {
        let data = dataset();
        let err = QueryProcessor::process(None, Some("action"), &data).unwrap_err();

        assert_eq!(err, ValidationError::InvalidGenre("action".to_string()));
    }

    #[test]
    fn test_empty_params_are_absent() {
        let data = dataset();
        let results = QueryProcessor::process(Some(""), Some(""), &data).unwrap();

        assert_eq!(results.len(), data.len());
    }

    #[test]
    fn test_no_params_returns_all_in_order() {
        let data = dataset();
        let results = QueryProcessor::process(None, None, &data).unwrap();

        let expected: Vec<&AppRecord> = data.iter().collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let data = dataset();
        let results = QueryProcessor::process(Some("rating"), None, &data).unwrap();

        assert_eq!(
            names(&results),
            vec![
                "Sudoku",
                "Angry Birds",
                "Subway Surfers",
                "Block Puzzle",
                "Clash Royale",
                "Shadow Fight",
            ]
        );
    }

    #[test]
    fn test_sort_by_app() {
        let data = dataset();
        let results = QueryProcessor::process(Some("app"), None, &data).unwrap();

        assert_eq!(
            names(&results),
            vec![
                "Angry Birds",
                "Block Puzzle",
                "Clash Royale",
                "Shadow Fight",
                "Subway Surfers",
                "Sudoku",
            ]
        );
    }

    #[test]
    fn test_filter_preserves_dataset_order() {
        let data = dataset();
        let results = QueryProcessor::process(None, Some("Action"), &data).unwrap();

        assert_eq!(names(&results), vec!["Angry Birds", "Shadow Fight"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let data = dataset();
        let results = QueryProcessor::process(Some("rating"), Some("Puzzle"), &data).unwrap();

        assert_eq!(names(&results), vec!["Sudoku", "Block Puzzle"]);
    }

    #[test]
    fn test_sort_does_not_reorder_dataset() {
        let data = dataset();
        let before = data.clone();

        QueryProcessor::process(Some("app"), None, &data).unwrap();
        let unsorted = QueryProcessor::process(None, None, &data).unwrap();

        assert_eq!(data, before);
        assert_eq!(names(&unsorted)[0], "Subway Surfers");
    }

    #[test]
    fn test_unknown_genre_in_data_never_matches() {
        let data = vec![record("Mahjong", 4.3, &["Board"])];
        let results = QueryProcessor::process(None, Some("Card"), &data).unwrap();

        assert!(results.is_empty());
    }
}
