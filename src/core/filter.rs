use crate::domain::model::Course;

/// Category value that means "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Search text and category selection applied to the raw dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    search: String,
    needle: String,
    category: String,
}

impl CourseFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        let mut filter = Self::default();
        filter.set_search(search);
        filter.set_category(category);
        filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.needle = self.search.to_lowercase();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// True when neither input restricts the result.
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && self.category_is_unrestricted()
    }

    fn category_is_unrestricted(&self) -> bool {
        self.category.is_empty() || self.category == ALL_CATEGORIES
    }

    pub fn matches(&self, course: &Course) -> bool {
        let text_match = course.title.to_lowercase().contains(&self.needle)
            || course.provider.to_lowercase().contains(&self.needle);

        text_match && (self.category_is_unrestricted() || course.category == self.category)
    }

    /// Matching courses in their original relative order.
    pub fn apply(&self, courses: &[Course]) -> Vec<Course> {
        courses
            .iter()
            .filter(|course| self.matches(course))
            .cloned()
            .collect()
    }
}
