//! Page planning.

use std::num::NonZeroU32;

use quakefetch_types::{DateRange, PageBatch, PageRequest, QuakeError, ResponseFormat, Result};

use crate::url::INITIAL_OFFSET;

/// Most pages a single batch may be planned with.
pub const MAX_PAGES: u64 = 100_000;

/// Returns the number of pages needed to cover `total_count` records.
#[must_use]
pub const fn page_count(total_count: u64, page_size: NonZeroU32) -> u64 {
    total_count.div_ceil(page_size.get() as u64)
}

/// Returns the page count for `total_count`, refusing counts that would
/// plan more than [`MAX_PAGES`] pages.
///
/// # Errors
///
/// Returns [`QuakeError::TooManyPages`] above the ceiling.
pub fn checked_page_count(total_count: u64, page_size: NonZeroU32) -> Result<u64> {
    let pages = page_count(total_count, page_size);
    if pages > MAX_PAGES {
        return Err(QuakeError::TooManyPages {
            pages,
            max: MAX_PAGES,
        });
    }
    Ok(pages)
}

/// Plans the pages for a query, starting at the service's first offset.
///
/// Produces `ceil(total_count / page_size)` GeoJSON page requests whose
/// offsets start at [`INITIAL_OFFSET`] and grow by `page_size`. A zero
/// count produces an empty batch.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use quakefetch_fetch::build_pages;
/// use quakefetch_types::DateRange;
///
/// let range = DateRange::parse("2017-10-01", "2017-10-31").unwrap();
/// let batch = build_pages(range, 25_000, NonZeroU32::new(20_000).unwrap());
/// let offsets: Vec<u64> = batch.iter().map(|page| page.offset).collect();
/// assert_eq!(offsets, vec![1, 20_001]);
/// ```
#[must_use]
pub fn build_pages(range: DateRange, total_count: u64, page_size: NonZeroU32) -> PageBatch {
    build_pages_from(range, total_count, page_size, INITIAL_OFFSET)
}

/// Plans the pages for a query starting at `initial_offset`.
///
/// Allocates every page up front; callers holding an untrusted count go
/// through [`checked_page_count`] first.
#[must_use]
pub fn build_pages_from(
    range: DateRange,
    total_count: u64,
    page_size: NonZeroU32,
    initial_offset: u64,
) -> PageBatch {
    let step = u64::from(page_size.get());
    let pages = (0..page_count(total_count, page_size))
        .map(|i| {
            PageRequest::new(
                ResponseFormat::GeoJson,
                range,
                page_size,
                initial_offset + i * step,
            )
        })
        .collect();
    PageBatch::new(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange::parse("2017-10-01", "2017-10-31").unwrap()
    }

    fn size(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, size(20_000)), 0);
        assert_eq!(page_count(1, size(20_000)), 1);
        assert_eq!(page_count(20_000, size(20_000)), 1);
        assert_eq!(page_count(20_001, size(20_000)), 2);
        assert_eq!(page_count(25_000, size(20_000)), 2);
        assert_eq!(page_count(7, size(1)), 7);
    }

    #[test]
    fn test_checked_page_count() {
        assert_eq!(checked_page_count(25_000, size(20_000)).unwrap(), 2);
        assert_eq!(checked_page_count(MAX_PAGES, size(1)).unwrap(), MAX_PAGES);
        assert!(matches!(
            checked_page_count(MAX_PAGES + 1, size(1)),
            Err(QuakeError::TooManyPages { pages, max: MAX_PAGES }) if pages == MAX_PAGES + 1
        ));
        assert!(matches!(
            checked_page_count(u64::MAX, size(20_000)),
            Err(QuakeError::TooManyPages { .. })
        ));
    }

    #[test]
    fn test_two_pages_for_25000() {
        let batch = build_pages(range(), 25_000, size(20_000));
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.pages()[0].offset, 1);
        assert_eq!(batch.pages()[1].offset, 20_001);
        assert!(batch.iter().all(|p| p.limit == size(20_000)));
        assert!(batch.iter().all(|p| p.format == ResponseFormat::GeoJson));
        assert!(batch.iter().all(|p| p.range == range()));
    }

    #[test]
    fn test_zero_count_is_empty() {
        let batch = build_pages(range(), 0, size(20_000));
        assert!(batch.is_empty());
    }

    #[test]
    fn test_offsets_strictly_increase_by_page_size() {
        let cases = [(1u64, 1u32), (99, 10), (100, 10), (101, 10), (45_123, 20_000)];
        for (total, page_size) in cases {
            let batch = build_pages(range(), total, size(page_size));
            assert_eq!(batch.len() as u64, total.div_ceil(u64::from(page_size)));
            assert_eq!(batch.pages()[0].offset, INITIAL_OFFSET);
            for pair in batch.pages().windows(2) {
                assert_eq!(pair[1].offset - pair[0].offset, u64::from(page_size));
            }
        }
    }

    #[test]
    fn test_custom_initial_offset() {
        let batch = build_pages_from(range(), 30, size(10), 0);
        let offsets: Vec<u64> = batch.iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![0, 10, 20]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build_pages(range(), 123_456, size(20_000));
        let b = build_pages(range(), 123_456, size(20_000));
        assert_eq!(a, b);
    }
}
