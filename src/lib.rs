pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpCourseSource;
pub use config::AppConfig;
pub use crate::core::{catalog::CatalogState, loader::CourseLoader};
pub use domain::model::{Course, CourseId, LoadStatus};
pub use utils::error::{CatalogError, Result};
