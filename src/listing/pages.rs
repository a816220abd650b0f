//! Client-side pagination

use std::num::NonZeroUsize;

use smallvec::SmallVec;

/// Most page buttons shown at once.
pub const WINDOW_SIZE: usize = 5;

/// Page numbers to render as buttons.
pub type PageWindow = SmallVec<[usize; WINDOW_SIZE]>;

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// Clamp a 1-based page request into `1..=page_count`.
///
/// An empty listing still has a current page of 1.
pub fn clamp_page(requested: usize, page_count: usize) -> usize {
    requested.clamp(1, page_count.max(1))
}

/// Up to [`WINDOW_SIZE`] consecutive page numbers around `current`.
///
/// The window starts at page 1 near the front, ends at the last page near the
/// back and is centred on `current` everywhere else.
pub fn page_window(current: usize, page_count: usize) -> PageWindow {
    if page_count <= WINDOW_SIZE {
        return (1..=page_count).collect();
    }

    let current = clamp_page(current, page_count);
    let half = WINDOW_SIZE / 2;

    let first = if current <= half + 1 {
        1
    } else if current + half >= page_count {
        page_count + 1 - WINDOW_SIZE
    } else {
        current - half
    };

    (first..first + WINDOW_SIZE).collect()
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,

    /// Current page, 1-based and already clamped
    pub number: usize,

    /// Total number of pages
    pub page_count: usize,

    /// Number of items across all pages
    pub total_items: usize,

    /// Page numbers to offer as buttons
    pub window: PageWindow,
}

impl<T> Page<T> {
    /// Slice `items` into the requested page, clamping the page number.
    pub fn paginate(items: Vec<T>, requested: usize, page_size: NonZeroUsize) -> Self {
        let total_items = items.len();
        let page_count = page_count(total_items, page_size);
        let number = clamp_page(requested, page_count);
        let start = (number - 1).saturating_mul(page_size.get());

        let items = items
            .into_iter()
            .skip(start)
            .take(page_size.get())
            .collect();

        Page {
            items,
            number,
            page_count,
            total_items,
            window: page_window(number, page_count),
        }
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.number < self.page_count
    }

    /// Whether pagination controls are worth showing.
    pub fn is_paginated(&self) -> bool {
        self.page_count > 1
    }

    /// Map the items of the page, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            page_count: self.page_count,
            total_items: self.total_items,
            window: self.window,
        }
    }
}
