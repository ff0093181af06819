pub const DEFAULT_PAGE_SIZE: usize = 12;

/// 1-indexed page cursor over a sequence of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.page_count(len)
    }

    /// Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Returns whether the page changed.
    pub fn next(&mut self, len: usize) -> bool {
        if !self.has_next(len) {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Jumps to `page`, clamped into `1..=max(page_count, 1)`.
    pub fn go_to(&mut self, page: usize, len: usize) -> usize {
        let last = self.page_count(len).max(1);
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    /// The half-open slice `[(page-1)*size, page*size)`, clamped to the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(items.len());
        let end = self
            .current_page
            .saturating_mul(self.page_size)
            .min(items.len());
        &items[start..end]
    }
}
