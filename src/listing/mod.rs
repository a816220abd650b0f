//! Listings
//!
//! Catalog and admin views share the same pipeline over a fetched product
//! list: filter, sort by name, then paginate on the client.

use std::{num::NonZeroUsize, str::FromStr};

use thiserror::Error;

use crate::{
    collation::{compare_names, contains_folded},
    products::Product,
};

mod pages;
mod stats;

pub use pages::{Page, PageWindow, WINDOW_SIZE, clamp_page, page_count, page_window};
pub use stats::InventoryStats;

const fn page_size(size: usize) -> NonZeroUsize {
    match NonZeroUsize::new(size) {
        Some(size) => size,
        None => NonZeroUsize::MIN,
    }
}

/// Products per page in the shopper catalog.
pub const CATALOG_PAGE_SIZE: NonZeroUsize = page_size(50);

/// Products per page in the admin panel.
pub const ADMIN_PAGE_SIZE: NonZeroUsize = page_size(150);

/// Errors raised while parsing listing options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// Unknown status filter name.
    #[error("unknown status filter: {0}")]
    UnknownStatus(String),
}

/// Visibility filter applied by the admin listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every product
    #[default]
    All,

    /// Only active products
    Active,

    /// Only inactive products
    Inactive,
}

impl StatusFilter {
    /// Whether a product passes the filter.
    pub fn matches(self, product: &Product) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => product.active,
            StatusFilter::Inactive => !product.active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todos" | "all" => Ok(StatusFilter::All),
            "ativos" | "active" => Ok(StatusFilter::Active),
            "inativos" | "inactive" => Ok(StatusFilter::Inactive),
            other => Err(ListingError::UnknownStatus(other.to_string())),
        }
    }
}

/// Listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Name search term; empty matches everything
    pub search: String,

    /// Visibility filter
    pub status: StatusFilter,

    /// Requested 1-based page
    pub page: usize,

    /// Page size
    pub page_size: NonZeroUsize,
}

impl ListingQuery {
    /// Shopper catalog query: active products only.
    pub fn catalog(search: impl Into<String>, page: usize) -> Self {
        Self {
            search: search.into(),
            status: StatusFilter::Active,
            page,
            page_size: CATALOG_PAGE_SIZE,
        }
    }

    /// Admin panel query.
    pub fn admin(search: impl Into<String>, status: StatusFilter, page: usize) -> Self {
        Self {
            search: search.into(),
            status,
            page,
            page_size: ADMIN_PAGE_SIZE,
        }
    }

    /// Whether a product passes the search and status filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.status.matches(product) && contains_folded(&product.name, &self.search)
    }
}

/// Filter and sort products by name.
pub fn filter_and_sort<'a>(products: &'a [Product], query: &ListingQuery) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|product| query.matches(product))
        .collect();

    filtered.sort_by(|left, right| compare_names(&left.name, &right.name));

    filtered
}

/// Run the whole pipeline and return the requested page.
pub fn list<'a>(products: &'a [Product], query: &ListingQuery) -> Page<&'a Product> {
    Page::paginate(filter_and_sort(products, query), query.page, query.page_size)
}
