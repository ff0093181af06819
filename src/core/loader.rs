use crate::core::catalog::{CatalogState, LoadOutcome, LoadTicket};
use crate::domain::model::Course;
use crate::domain::ports::CourseSource;
use crate::utils::error::{CatalogError, Result};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Runs the single course fetch of a session.
#[derive(Clone)]
pub struct CourseLoader {
    source: Arc<dyn CourseSource>,
}

impl CourseLoader {
    pub fn new(source: impl CourseSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Starts the fetch on a background task. The caller stays free to
    /// mutate `state` while the request is in flight, and must hand the
    /// finished outcome back through [`CatalogState::finish_load`].
    pub fn start(&self, state: &mut CatalogState) -> PendingLoad {
        let ticket = state.begin_load();
        let source = Arc::clone(&self.source);
        tracing::debug!("Starting course fetch");
        let handle = tokio::spawn(async move { source.fetch_courses().await });
        PendingLoad { ticket, handle }
    }

    /// Fetches and applies in one step. Failures are logged and recorded in
    /// the load status; they never propagate.
    pub async fn load(&self, state: &mut CatalogState) -> bool {
        let outcome = self.start(state).await;
        state.finish_load(outcome)
    }
}

/// An in-flight fetch. Dropping it aborts the request.
pub struct PendingLoad {
    ticket: LoadTicket,
    handle: JoinHandle<Result<Vec<Course>>>,
}

impl Future for PendingLoad {
    type Output = LoadOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let ticket = self.ticket;
        Pin::new(&mut self.handle).poll(cx).map(|joined| LoadOutcome {
            ticket,
            result: joined.unwrap_or_else(|e| {
                Err(CatalogError::LoadAborted {
                    message: e.to_string(),
                })
            }),
        })
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StaticSource {
        courses: Vec<Course>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CourseSource for StaticSource {
        async fn fetch_courses(&self) -> Result<Vec<Course>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.courses.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CourseSource for FailingSource {
        async fn fetch_courses(&self) -> Result<Vec<Course>> {
            Err(CatalogError::PayloadError {
                message: "expected a JSON array".to_string(),
            })
        }
    }

    struct SlowSource;

    #[async_trait]
    impl CourseSource for SlowSource {
        async fn fetch_courses(&self) -> Result<Vec<Course>> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(vec![Course::new(1, "Slow", "P", "Math")])
        }
    }

    #[tokio::test]
    async fn test_load_issues_one_fetch_and_seeds_filtered() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CourseLoader::new(StaticSource {
            courses: vec![
                Course::new(1, "Intro to AI", "Uni", "Tech"),
                Course::new(2, "Sketching", "Studio", "Art"),
            ],
            calls: Arc::clone(&calls),
        });
        let mut state = CatalogState::default();

        assert!(loader.load(&mut state).await);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!state.is_loading());
        assert_eq!(state.raw(), state.filtered());
        assert_eq!(state.filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_clears_loading_flag() {
        let loader = CourseLoader::new(FailingSource);
        let mut state = CatalogState::default();

        assert!(loader.load(&mut state).await);

        assert!(!state.is_loading());
        assert!(state.raw().is_empty());
        assert!(state.status().failure().is_some());
    }

    #[tokio::test]
    async fn test_state_stays_usable_while_fetch_in_flight() {
        let loader = CourseLoader::new(SlowSource);
        let mut state = CatalogState::default();

        let pending = loader.start(&mut state);
        assert!(state.is_loading());
        state.set_search("slow");

        let outcome = pending.await;
        assert!(state.finish_load(outcome));
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filter().search(), "slow");
    }

    #[tokio::test]
    async fn test_teardown_discards_in_flight_response() {
        let loader = CourseLoader::new(SlowSource);
        let mut state = CatalogState::default();

        let pending = loader.start(&mut state);
        state.tear_down();

        let outcome = pending.await;
        assert!(!state.finish_load(outcome));
        assert!(state.raw().is_empty());
    }
}
