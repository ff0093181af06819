use crate::core::filter::ALL_CATEGORIES;
use crate::domain::model::Course;
use std::collections::HashSet;

pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// A selectable entry of the category dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// Distinct categories of `courses` in first-seen order.
pub fn distinct_categories(courses: &[Course]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = Vec::new();
    for course in courses {
        if seen.insert(course.category.as_str()) {
            categories.push(course.category.clone());
        }
    }
    categories
}

/// "All Categories" followed by every distinct category.
pub fn category_options(courses: &[Course]) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
    })
    .chain(distinct_categories(courses).into_iter().map(|category| CategoryOption {
        value: category.clone(),
        label: category,
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_first_seen_order() {
        let courses = vec![
            Course::new(1, "a", "p", "Math"),
            Course::new(2, "b", "p", "Art"),
            Course::new(3, "c", "p", "Math"),
            Course::new(4, "d", "p", "Tech"),
            Course::new(5, "e", "p", "Art"),
        ];
        assert_eq!(distinct_categories(&courses), vec!["Math", "Art", "Tech"]);
    }

    #[test]
    fn test_options_start_with_all() {
        let courses = vec![Course::new(1, "a", "p", "Math")];
        let options = category_options(&courses);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].label, "All Categories");
        assert_eq!(options[1].value, "Math");
    }

    #[test]
    fn test_empty_dataset_only_offers_all() {
        assert!(distinct_categories(&[]).is_empty());
        assert_eq!(category_options(&[]).len(), 1);
    }
}
