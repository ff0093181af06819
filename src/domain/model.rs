use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Course identifier as the API hands it out: either a JSON string or a
/// JSON number. Numbers keep their JSON form, so unsigned ids past
/// `i64::MAX` and float ids such as `2.0` round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Number(n) => write!(f, "{}", n),
            CourseId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        CourseId::Number(value.into())
    }
}

impl From<i32> for CourseId {
    fn from(value: i32) -> Self {
        CourseId::Number(value.into())
    }
}

impl From<u64> for CourseId {
    fn from(value: u64) -> Self {
        CourseId::Number(value.into())
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        CourseId::Text(value)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub provider: String,
    pub category: String,
}

impl Course {
    pub fn new(
        id: impl Into<CourseId>,
        title: impl Into<String>,
        provider: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            provider: provider.into(),
            category: category.into(),
        }
    }

    /// Route of the course detail page under `prefix`.
    pub fn detail_route(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded {
        count: usize,
        at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// One page of the filtered catalog, ready for presentation.
#[derive(Debug, Clone)]
pub struct CatalogPage<'a> {
    pub courses: &'a [Course],
    pub current_page: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub has_previous: bool,
    pub has_next: bool,
}
