use crate::categories::TrendCategory;
use crate::config::PAGE_SIZE;
use std::ops::Range;

/// 1-indexed page cursor over a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    len: usize,
}

impl Pagination {
    pub fn new(len: usize) -> Self {
        Self::with_page_size(len, PAGE_SIZE)
    }

    fn with_page_size(len: usize, page_size: usize) -> Self {
        Pagination {
            page: 1,
            page_size: page_size.max(1),
            len,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Never less than one, so an empty list still has a page to sit on.
    pub fn page_count(&self) -> usize {
        ((self.len + self.page_size - 1) / self.page_size).max(1)
    }

    /// Swaps in a new list length and returns to page one.
    pub fn reset(self, len: usize) -> Self {
        Pagination { page: 1, len, ..self }
    }

    pub fn go_to(self, page: usize) -> Self {
        Pagination {
            page: page.clamp(1, self.page_count()),
            ..self
        }
    }

    pub fn next(self) -> Self {
        self.go_to(self.page + 1)
    }

    pub fn prev(self) -> Self {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Index window of the current page, clipped to the list.
    pub fn window(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let window = self.window();
        let end = window.end.min(items.len());
        &items[window.start.min(end)..end]
    }

    pub fn caption(&self) -> String {
        let window = self.window();
        if self.len == 0 {
            return "No transactions".to_string();
        }
        format!(
            "Showing {}-{} of {} transactions",
            window.start + 1,
            window.end,
            self.len
        )
    }
}

/// Which series the trend chart draws on top of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    All,
    TotalOnly,
    Category(TrendCategory),
}

impl Default for Overlay {
    fn default() -> Self {
        Overlay::All
    }
}

impl Overlay {
    pub fn from_key(key: &str) -> Overlay {
        match key {
            "all" => Overlay::All,
            "none" => Overlay::TotalOnly,
            other => TrendCategory::from_key(other)
                .map(Overlay::Category)
                .unwrap_or(Overlay::All),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Overlay::All => "all",
            Overlay::TotalOnly => "none",
            Overlay::Category(category) => category.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Overlay::All => "All Categories",
            Overlay::TotalOnly => "Total Only",
            Overlay::Category(category) => category.label(),
        }
    }

    pub fn options() -> Vec<Overlay> {
        let mut options = vec![Overlay::All, Overlay::TotalOnly];
        options.extend(TrendCategory::all().iter().copied().map(Overlay::Category));
        options
    }

    /// `All` stacks every category and drops the separate total line.
    pub fn shows_total(&self) -> bool {
        !matches!(self, Overlay::All)
    }

    pub fn stacked_categories(&self) -> Vec<TrendCategory> {
        match self {
            Overlay::All => TrendCategory::all().to_vec(),
            Overlay::TotalOnly => Vec::new(),
            Overlay::Category(category) => vec![*category],
        }
    }
}

/// Hover focus shared by a chart and its legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight(Option<usize>);

impl Highlight {
    pub fn focus(index: usize) -> Self {
        Highlight(Some(index))
    }

    pub fn clear() -> Self {
        Highlight(None)
    }

    pub fn active(&self) -> Option<usize> {
        self.0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn opacity(&self, index: usize) -> f64 {
        match self.0 {
            Some(active) if active != index => 0.3,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_items_split_over_two_pages() {
        let items: Vec<usize> = (1..=14).collect();
        let pages = Pagination::new(items.len());
        assert_eq!(pages.page_count(), 2);
        assert_eq!(pages.slice(&items), &items[0..10]);
        assert!(!pages.has_prev());

        let second = pages.next();
        assert_eq!(second.slice(&items), &[11, 12, 13, 14]);
        assert!(!second.has_next());
        assert_eq!(second.caption(), "Showing 11-14 of 14 transactions");
    }

    #[test]
    fn page_requests_clamp_to_bounds() {
        let pages = Pagination::new(14);
        assert_eq!(pages.go_to(3).page(), 2);
        assert_eq!(pages.go_to(0).page(), 1);
        assert_eq!(pages.prev().page(), 1);
        assert_eq!(pages.next().next().page(), 2);
    }

    #[test]
    fn new_data_returns_to_the_first_page() {
        let on_second = Pagination::new(14).next();
        assert_eq!(on_second.page(), 2);

        let reset = on_second.reset(5);
        assert_eq!(reset.page(), 1);
        assert_eq!(reset.window(), 0..5);
        assert_eq!(reset.page_count(), 1);
        assert!(!reset.has_next());
        assert_eq!(reset.caption(), "Showing 1-5 of 5 transactions");
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let pages = Pagination::new(0);
        assert_eq!(pages.page_count(), 1);
        assert_eq!(pages.window(), 0..0);
        assert!(pages.slice::<u8>(&[]).is_empty());
        assert!(!pages.has_next());
    }

    #[test]
    fn overlay_keys_round_through_options() {
        assert_eq!(Overlay::from_key("none"), Overlay::TotalOnly);
        assert_eq!(Overlay::from_key("food"), Overlay::Category(TrendCategory::Food));
        assert_eq!(Overlay::from_key("yachts"), Overlay::All);
        assert_eq!(Overlay::options().len(), 2 + TrendCategory::all().len());
    }

    #[test]
    fn overlay_selects_series() {
        assert!(!Overlay::All.shows_total());
        assert_eq!(Overlay::All.stacked_categories().len(), 9);
        assert!(Overlay::TotalOnly.shows_total());
        assert!(Overlay::TotalOnly.stacked_categories().is_empty());
        let medical = Overlay::Category(TrendCategory::Medical);
        assert!(medical.shows_total());
        assert_eq!(medical.stacked_categories(), vec![TrendCategory::Medical]);
    }

    #[test]
    fn highlight_dims_everything_else() {
        let none = Highlight::clear();
        assert_eq!(none.opacity(3), 1.0);
        let focused = Highlight::focus(2);
        assert_eq!(focused.opacity(2), 1.0);
        assert_eq!(focused.opacity(0), 0.3);
        assert!(focused.is_active(2));
    }
}
