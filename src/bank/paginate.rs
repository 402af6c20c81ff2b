use std::num::NonZeroUsize;
use std::ops::Range;

use crate::error::TriviaError;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// One page of an ordered sequence: `[(page - 1) * size, page * size)`.
///
/// Both numbers are at least 1 by construction; the request layer decides what to do with
/// anything else before a window exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: NonZeroUsize,
    size: NonZeroUsize,
}

impl PageWindow {
    pub fn new(page: NonZeroUsize, size: NonZeroUsize) -> Self {
        Self { page, size }
    }

    pub fn first(size: NonZeroUsize) -> Self {
        Self::new(NonZeroUsize::MIN, size)
    }

    /// Builds a window from an optional requested page number.
    ///
    /// Absent means page 1. Zero and negative numbers are rejected.
    pub fn from_requested(page: Option<i64>, size: NonZeroUsize) -> Result<Self, TriviaError> {
        let Some(requested) = page else {
            return Ok(Self::first(size));
        };
        usize::try_from(requested)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(|page| Self::new(page, size))
            .ok_or(TriviaError::InvalidPage(requested))
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Half-open index range clamped to `len`. Empty when the page starts past the end.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.page() - 1).saturating_mul(self.size()).min(len);
        let end = start.saturating_add(self.size()).min(len);
        start..end
    }
}

/// Returns the page of `items` selected by `window`; never fails on out-of-range pages.
pub fn paginate<T>(items: &[T], window: PageWindow) -> &[T] {
    &items[window.range(items.len())]
}
