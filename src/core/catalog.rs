use crate::core::categories::{category_options, distinct_categories, CategoryOption};
use crate::core::filter::CourseFilter;
use crate::core::paginator::Paginator;
use crate::domain::model::{CatalogPage, Course, LoadStatus};
use crate::utils::error::Result;
use chrono::Utc;

/// Generation number of a load. Only the newest ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Result of a finished fetch, tagged with the ticket that started it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub result: Result<Vec<Course>>,
}

/// Owner of everything the course listing shows.
///
/// The filtered dataset and the page cursor are derived state: every setter
/// that changes the raw dataset, the search text or the category recomputes
/// the filtered dataset and moves back to page 1.
#[derive(Debug)]
pub struct CatalogState {
    raw: Vec<Course>,
    filter: CourseFilter,
    filtered: Vec<Course>,
    pager: Paginator,
    status: LoadStatus,
    generation: u64,
    torn_down: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Paginator::default().page_size())
    }
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            raw: Vec::new(),
            filter: CourseFilter::default(),
            filtered: Vec::new(),
            pager: Paginator::new(page_size),
            status: LoadStatus::Idle,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn with_courses(page_size: usize, courses: Vec<Course>) -> Self {
        let mut state = Self::new(page_size);
        state.set_courses(courses);
        state
    }

    fn recompute(&mut self) {
        self.filtered = if self.filter.is_unrestricted() {
            self.raw.clone()
        } else {
            self.filter.apply(&self.raw)
        };
        self.pager.reset();
        tracing::debug!(
            search = self.filter.search(),
            category = self.filter.category(),
            matches = self.filtered.len(),
            "Recomputed filtered courses"
        );
    }

    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.raw = courses;
        self.recompute();
    }

    /// Unchanged input leaves the current page alone.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search == self.filter.search() {
            return;
        }
        self.filter.set_search(search);
        self.recompute();
    }

    /// Unchanged input leaves the current page alone.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category == self.filter.category() {
            return;
        }
        self.filter.set_category(category);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        if self.filter == CourseFilter::default() {
            return;
        }
        self.filter = CourseFilter::default();
        self.recompute();
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next(self.filtered.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous()
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.pager.go_to(page, self.filtered.len())
    }

    pub fn raw(&self) -> &[Course] {
        &self.raw
    }

    pub fn filtered(&self) -> &[Course] {
        &self.filtered
    }

    pub fn filter(&self) -> &CourseFilter {
        &self.filter
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered.len())
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Derived from the raw dataset on every call.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.raw)
    }

    pub fn category_options(&self) -> Vec<CategoryOption> {
        category_options(&self.raw)
    }

    pub fn page(&self) -> CatalogPage<'_> {
        let len = self.filtered.len();
        CatalogPage {
            courses: self.pager.slice(&self.filtered),
            current_page: self.pager.current_page(),
            page_count: self.pager.page_count(len),
            total_matches: len,
            has_previous: self.pager.has_previous(),
            has_next: self.pager.has_next(len),
        }
    }

    /// Marks the state as loading and hands out the ticket for the new load.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a finished load. Returns false when the outcome was stale
    /// (a newer load started, or the state was torn down) and got dropped.
    pub fn finish_load(&mut self, outcome: LoadOutcome) -> bool {
        if self.torn_down || outcome.ticket != LoadTicket(self.generation) {
            tracing::debug!(
                ticket = outcome.ticket.0,
                current = self.generation,
                torn_down = self.torn_down,
                "Discarding stale course response"
            );
            return false;
        }

        match outcome.result {
            Ok(courses) => {
                tracing::info!("Loaded {} courses", courses.len());
                self.status = LoadStatus::Loaded {
                    count: courses.len(),
                    at: Utc::now(),
                };
                self.set_courses(courses);
            }
            Err(e) => {
                tracing::error!("Error fetching courses: {}", e);
                tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
                self.status = LoadStatus::Failed {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// After teardown no pending load can modify the state.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
        if self.status.is_loading() {
            self.status = LoadStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;

    /// 10 Math courses followed by 5 Art courses, ids 1..=15.
    fn math_and_art() -> Vec<Course> {
        (1..=15)
            .map(|i| {
                let category = if i <= 10 { "Math" } else { "Art" };
                Course::new(i, format!("Course {i}"), "Provider", category)
            })
            .collect()
    }

    fn page_ids(state: &CatalogState) -> Vec<String> {
        state.page().courses.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_math_and_art() {
        let mut state = CatalogState::with_courses(12, math_and_art());

        state.set_category("Math");
        assert_eq!(state.filtered().len(), 10);
        assert_eq!(state.page_count(), 1);

        state.set_category("all");
        assert_eq!(state.filtered().len(), 15);
        assert_eq!(state.page_count(), 2);
        let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        assert_eq!(page_ids(&state), expected);

        assert!(state.next_page());
        assert_eq!(page_ids(&state), vec!["13", "14", "15"]);
        let page = state.page();
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let courses: Vec<Course> = (1..=80)
            .map(|i| Course::new(i, format!("Course {i}"), "Provider", "Math"))
            .collect();
        let mut state = CatalogState::with_courses(12, courses);
        state.go_to_page(5);
        assert_eq!(state.current_page(), 5);

        state.set_search("course");
        assert_eq!(state.current_page(), 1);

        state.go_to_page(5);
        state.set_category("Math");
        assert_eq!(state.current_page(), 1);

        state.go_to_page(5);
        state.clear_filters();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_same_search_keeps_page() {
        let mut state = CatalogState::with_courses(12, math_and_art());
        state.set_search("course");
        state.next_page();
        state.set_search("course");
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_categories_ignore_filter() {
        let mut state = CatalogState::with_courses(12, math_and_art());
        state.set_category("Art");
        assert_eq!(state.categories(), vec!["Math", "Art"]);
        assert_eq!(state.category_options()[0].value, "all");
    }

    #[test]
    fn test_categories_follow_replaced_dataset() {
        let mut state = CatalogState::new(12);
        state.set_courses(math_and_art());
        assert_eq!(state.categories(), vec!["Math", "Art"]);

        state.set_courses(vec![
            Course::new(20, "Networking", "Cisco", "Tech"),
            Course::new(21, "Jazz Piano", "Berklee", "Music"),
            Course::new(22, "Kubernetes", "CNCF", "Tech"),
        ]);
        assert_eq!(state.categories(), vec!["Tech", "Music"]);

        let values: Vec<String> = state
            .category_options()
            .into_iter()
            .map(|option| option.value)
            .collect();
        assert_eq!(values, vec!["all", "Tech", "Music"]);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let mut state = CatalogState::with_courses(12, math_and_art());
        state.set_search("nothing matches this");
        let page = state.page();
        assert!(page.courses.is_empty());
        assert_eq!(page.page_count, 0);
        assert!(!page.has_previous);
        assert!(!page.has_next);
        assert!(!state.next_page());
    }

    #[test]
    fn test_successful_load_clears_loading() {
        let mut state = CatalogState::default();
        let ticket = state.begin_load();
        assert!(state.is_loading());

        let applied = state.finish_load(LoadOutcome {
            ticket,
            result: Ok(math_and_art()),
        });

        assert!(applied);
        assert!(!state.is_loading());
        assert_eq!(state.raw().len(), 15);
        assert_eq!(state.filtered().len(), 15);
        assert!(matches!(state.status(), LoadStatus::Loaded { count: 15, .. }));
    }

    #[test]
    fn test_failed_load_keeps_prior_data() {
        let mut state = CatalogState::with_courses(12, math_and_art());
        let ticket = state.begin_load();

        state.finish_load(LoadOutcome {
            ticket,
            result: Err(CatalogError::HttpStatusError {
                endpoint: "https://example.com".to_string(),
                status: 500,
            }),
        });

        assert!(!state.is_loading());
        assert_eq!(state.raw().len(), 15);
        assert!(state.status().failure().unwrap().contains("500"));
    }

    #[test]
    fn test_failed_first_load_leaves_empty_dataset() {
        let mut state = CatalogState::default();
        let ticket = state.begin_load();
        state.finish_load(LoadOutcome {
            ticket,
            result: Err(CatalogError::PayloadError {
                message: "not an array".to_string(),
            }),
        });
        assert!(state.raw().is_empty());
        assert!(state.page().courses.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = CatalogState::default();
        let old = state.begin_load();
        let new = state.begin_load();

        assert!(!state.finish_load(LoadOutcome {
            ticket: old,
            result: Ok(math_and_art()),
        }));
        assert!(state.raw().is_empty());
        assert!(state.is_loading());

        assert!(state.finish_load(LoadOutcome {
            ticket: new,
            result: Ok(vec![Course::new(1, "Only", "P", "Math")]),
        }));
        assert_eq!(state.raw().len(), 1);
    }

    #[test]
    fn test_response_after_teardown_is_discarded() {
        let mut state = CatalogState::default();
        let ticket = state.begin_load();
        state.tear_down();
        assert!(!state.is_loading());
        assert!(!state.finish_load(LoadOutcome {
            ticket,
            result: Ok(math_and_art()),
        }));
        assert!(state.raw().is_empty());
    }

    #[test]
    fn test_filters_set_before_load_apply_to_loaded_data() {
        let mut state = CatalogState::default();
        state.set_category("Art");
        let ticket = state.begin_load();
        state.finish_load(LoadOutcome {
            ticket,
            result: Ok(math_and_art()),
        });
        assert_eq!(state.filtered().len(), 5);
    }
}
