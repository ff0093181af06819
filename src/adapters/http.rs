use crate::domain::model::Course;
use crate::domain::ports::{ConfigProvider, CourseSource};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Course source backed by a single `GET` to a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpCourseSource {
    endpoint: String,
    client: Client,
}

impl HttpCourseSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            endpoint: config.endpoint().to_string(),
            client: builder.build()?,
        })
    }
}

/// Keeps every array element that deserializes as a course. Anything else
/// is logged and skipped; a body that is not an array is an error.
pub fn parse_courses(body: serde_json::Value) -> Result<Vec<Course>> {
    let items = match body {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(CatalogError::PayloadError {
                message: format!("expected a JSON array, got {}", json_kind(&other)),
            })
        }
    };

    let total = items.len();
    let mut courses = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Course>(item) {
            Ok(course) => courses.push(course),
            Err(e) => tracing::warn!("Skipping course record #{}: {}", index, e),
        }
    }

    if courses.len() < total {
        tracing::warn!(
            "Skipped {} of {} course records with missing or invalid fields",
            total - courses.len(),
            total
        );
    }

    Ok(courses)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait]
impl CourseSource for HttpCourseSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::HttpStatusError {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        parse_courses(body)
    }
}
