use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::query::ValidationError;

/// One entry of the Play Store catalog.
///
/// Only `app`, `rating` and `Genres` are inspected; every other field is kept
/// as-is and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    pub app: String,
    pub rating: f64,
    #[serde(rename = "Genres")]
    pub genres: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppRecord {
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.iter().any(|g| g == genre.as_str())
    }
}

/// Field a result set can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    App,
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::App => "app",
            SortKey::Rating => "rating",
        }
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(SortKey::App),
            "rating" => Ok(SortKey::Rating),
            other => Err(ValidationError::InvalidSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Genres that can be searched. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Action,
    Puzzle,
    Strategy,
    Casual,
    Arcade,
    Card,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Puzzle,
        Genre::Strategy,
        Genre::Casual,
        Genre::Arcade,
        Genre::Card,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Puzzle => "Puzzle",
            Genre::Strategy => "Strategy",
            Genre::Casual => "Casual",
            Genre::Arcade => "Arcade",
            Genre::Card => "Card",
        }
    }
}

impl FromStr for Genre {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for `GET /apps`.
///
/// A parameter given more than once is joined with `,` so the value still
/// goes through validation and fails with the usual message.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AppsQuery {
    pub sort: Option<String>,
    pub genre: Option<String>,
}

impl AppsQuery {
    /// Build from raw query pairs. Unknown parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut sort: Vec<String> = Vec::new();
        let mut genre: Vec<String> = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "sort" => sort.push(value),
                "genre" => genre.push(value),
                _ => {}
            }
        }
        Self {
            sort: join(sort),
            genre: join(genre),
        }
    }
}

fn join(values: Vec<String>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
