pub mod catalog;
pub mod categories;
pub mod filter;
pub mod loader;
pub mod paginator;

pub use crate::domain::model::{CatalogPage, Course, CourseId, LoadStatus};
pub use crate::domain::ports::{ConfigProvider, CourseSource};
pub use crate::utils::error::Result;
