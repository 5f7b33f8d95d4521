//! Synthetic fixtures for quakefetch benchmarks.
//!
//! Run with: `cargo bench --package quakefetch-bench`

use quakefetch_lib::{Feature, FeatureCollection, Geometry, PageMetadata, Properties};

/// Builds a page of `len` features, every `skip_every`-th one without a magnitude.
///
/// A `skip_every` of zero keeps every magnitude.
pub fn synthetic_page(len: usize, skip_every: usize) -> FeatureCollection {
    let features = (0..len)
        .map(|i| {
            let missing = skip_every != 0 && i % skip_every == 0;
            Feature {
                id: Some(format!("ev{i}")),
                properties: Properties {
                    mag: (!missing).then(|| (i % 90) as f64 / 10.0),
                    time: Some(1_506_827_015_220 + i as i64),
                },
                geometry: Some(Geometry {
                    coordinates: vec![
                        Some(-118.0 + (i % 100) as f64 / 100.0),
                        Some(35.0),
                        Some((i % 30) as f64),
                    ],
                }),
            }
        })
        .collect();

    FeatureCollection {
        metadata: Some(PageMetadata {
            count: Some(len as u64),
            ..Default::default()
        }),
        features,
    }
}

/// Builds a settled batch of `pages` pages, with every `failed_every`-th page absent.
pub fn synthetic_batch(
    pages: usize,
    page_len: usize,
    failed_every: usize,
) -> Vec<Option<FeatureCollection>> {
    (0..pages)
        .map(|i| {
            if failed_every != 0 && i % failed_every == failed_every - 1 {
                None
            } else {
                Some(synthetic_page(page_len, 7))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_page() {
        let page = synthetic_page(14, 7);
        assert_eq!(page.features.len(), 14);
        assert_eq!(page.features.iter().filter(|f| f.properties.mag.is_none()).count(), 2);
    }

    #[test]
    fn test_synthetic_batch() {
        let batch = synthetic_batch(6, 3, 3);
        assert_eq!(batch.iter().filter(|p| p.is_none()).count(), 2);
        assert!(batch[2].is_none());
    }
}
