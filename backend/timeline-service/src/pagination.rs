//! Page slicing and count labels.
//!
//! Pagination is independent of the feed: anything that yields an ordered
//! `Vec` can be paged, and callers render controls from `total_pages`.

use crate::error::{AppError, Result};
use serde::Serialize;

/// One 1-indexed page of an ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_entries: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice `items` to `[(page-1)*per_page, page*per_page)`.
///
/// Pages past the end are empty rather than an error.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Result<Page<T>> {
    if page < 1 {
        return Err(AppError::InvalidArgument(format!(
            "page must be at least 1, got {}",
            page
        )));
    }
    if per_page < 1 {
        return Err(AppError::InvalidArgument(format!(
            "per_page must be at least 1, got {}",
            per_page
        )));
    }

    let total_entries = items.len();
    let total_pages = total_entries.div_ceil(per_page);

    let offset = (page - 1).saturating_mul(per_page);
    let items: Vec<T> = items.into_iter().skip(offset).take(per_page).collect();

    Ok(Page {
        items,
        page,
        per_page,
        total_entries,
        total_pages,
    })
}

/// "1 micropost", "0 microposts", "2 microposts"
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

pub fn micropost_label(count: usize) -> String {
    pluralize(count, "micropost", "microposts")
}
