//! Text rendering of the course listing page.

use crate::core::catalog::CatalogState;
use crate::core::categories::{CategoryOption, ALL_CATEGORIES_LABEL};
use crate::core::filter::ALL_CATEGORIES;
use crate::domain::model::{Course, CourseId};
use chrono::{Datelike, Utc};
use serde::Serialize;
use std::fmt::Write;

pub const BRAND: &str = "FreeCourseHive";
pub const LOADING_MESSAGE: &str = "Loading courses...";
pub const EMPTY_MESSAGE: &str = "No courses found. Try adjusting your search or filter.";
pub const RELOAD_HINT: &str = "Reload to try again.";

const RULE_WIDTH: usize = 60;

fn rule(out: &mut String, ch: char) {
    out.extend(std::iter::repeat(ch).take(RULE_WIDTH));
    out.push('\n');
}

pub fn render_header(out: &mut String) {
    rule(out, '=');
    let _ = writeln!(out, "{}  |  Discover Free Online Courses", BRAND);
    rule(out, '=');
}

pub fn render_footer(out: &mut String) {
    rule(out, '-');
    let _ = writeln!(
        out,
        "(c) {} {}. All rights reserved.",
        Utc::now().year(),
        BRAND
    );
}

fn render_filter_line(out: &mut String, state: &CatalogState) {
    let filter = state.filter();
    let search = if filter.search().is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", filter.search())
    };
    let category = match filter.category() {
        "" | ALL_CATEGORIES => ALL_CATEGORIES_LABEL,
        other => other,
    };
    let _ = writeln!(out, "Search: {}   Category: {}", search, category);
}

fn render_card(out: &mut String, course: &Course, detail_prefix: &str) {
    let _ = writeln!(out, "* {}", course.title);
    let _ = writeln!(out, "    Provider: {}", course.provider);
    let _ = writeln!(out, "    Category: {}", course.category);
    let _ = writeln!(out, "    View Course: {}", course.detail_route(detail_prefix));
}

/// Pagination bar. Disabled controls are shown in parentheses; with zero
/// pages the bar is suppressed.
pub fn render_pagination(
    out: &mut String,
    current_page: usize,
    page_count: usize,
    has_previous: bool,
    has_next: bool,
) {
    if page_count == 0 {
        return;
    }
    let previous = if has_previous { "[< Previous]" } else { "(< Previous)" };
    let next = if has_next { "[Next >]" } else { "(Next >)" };
    let _ = writeln!(
        out,
        "{}  Page {} of {}  {}",
        previous, current_page, page_count, next
    );
}

/// The whole listing section for the current state.
pub fn render_listing(state: &CatalogState, detail_prefix: &str) -> String {
    let mut out = String::new();
    render_filter_line(&mut out, state);
    out.push('\n');
    let _ = writeln!(out, "Available Courses");
    rule(&mut out, '-');

    if let Some(message) = state.status().failure() {
        let _ = writeln!(out, "! Could not load courses: {}", message);
        let _ = writeln!(out, "! {}", RELOAD_HINT);
        out.push('\n');
    }

    if state.is_loading() {
        let _ = writeln!(out, "{}", LOADING_MESSAGE);
        return out;
    }

    let page = state.page();
    if page.courses.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_MESSAGE);
        return out;
    }

    for course in page.courses {
        render_card(&mut out, course, detail_prefix);
    }
    out.push('\n');
    render_pagination(
        &mut out,
        page.current_page,
        page.page_count,
        page.has_previous,
        page.has_next,
    );
    out
}

pub fn render_page(state: &CatalogState, detail_prefix: &str) -> String {
    let mut out = String::new();
    render_header(&mut out);
    out.push_str(&render_listing(state, detail_prefix));
    render_footer(&mut out);
    out
}

pub fn render_categories(options: &[CategoryOption]) -> String {
    let mut out = String::new();
    for option in options {
        if option.value == option.label {
            let _ = writeln!(out, "{}", option.label);
        } else {
            let _ = writeln!(out, "{} ({})", option.label, option.value);
        }
    }
    out
}

#[derive(Debug, Serialize)]
pub struct CourseCard<'a> {
    pub id: &'a CourseId,
    pub title: &'a str,
    pub provider: &'a str,
    pub category: &'a str,
    pub detail_route: String,
}

/// Machine-readable form of the current page.
#[derive(Debug, Serialize)]
pub struct PageDocument<'a> {
    pub search: &'a str,
    pub category: &'a str,
    pub categories: Vec<String>,
    pub current_page: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub error: Option<&'a str>,
    pub courses: Vec<CourseCard<'a>>,
}

impl<'a> PageDocument<'a> {
    pub fn from_state(state: &'a CatalogState, detail_prefix: &str) -> Self {
        let page = state.page();
        Self {
            search: state.filter().search(),
            category: state.filter().category(),
            categories: state.categories(),
            current_page: page.current_page,
            page_count: page.page_count,
            total_matches: page.total_matches,
            has_previous: page.has_previous,
            has_next: page.has_next,
            error: state.status().failure(),
            courses: page
                .courses
                .iter()
                .map(|course| CourseCard {
                    id: &course.id,
                    title: &course.title,
                    provider: &course.provider,
                    category: &course.category,
                    detail_route: course.detail_route(detail_prefix),
                })
                .collect(),
        }
    }
}
