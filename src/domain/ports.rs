use crate::domain::model::Course;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where the raw course listing comes from.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<Course>>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn page_size(&self) -> usize;
    fn detail_route_prefix(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
