//! Object metadata aggregation for audited buckets.
use crate::provider::StorageProvider;
use crate::types::AuditResult;

/// Object totals gathered from a single bucket listing.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ObjectTotals {
    pub count: u64,
    pub bytes: u64,
}

/// Aggregates object count and byte totals for a bucket.
///
/// An empty bucket (or a listing with no entries) yields zero totals
/// rather than an error; only the listing call itself can fail. Sizes
/// are accumulated in raw bytes, with unit conversion deferred to the
/// report boundary.
pub async fn aggregate<P: StorageProvider>(provider: &P, bucket: &str) -> AuditResult<ObjectTotals> {
    let sizes = provider.object_sizes(bucket).await?;

    Ok(ObjectTotals {
        count: sizes.len() as u64,
        bytes: sizes.iter().sum(),
    })
}

/// Converts a byte total to megabytes, rounded to 2 decimal places.
pub fn to_megabytes(bytes: u64) -> f64 {
    const MEGABYTE: f64 = 1_048_576.0;

    (bytes as f64 / MEGABYTE * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {

    #[test]
    fn converting_bytes_to_megabytes() {
        assert_eq!(super::to_megabytes(0), 0.0);
        assert_eq!(super::to_megabytes(10240), 0.01);
        assert_eq!(super::to_megabytes(377487), 0.36);
        assert_eq!(super::to_megabytes(1048576), 1.0);
    }

    #[test]
    fn defaulting_totals_to_zero() {
        let totals = super::ObjectTotals::default();

        assert_eq!(totals.count, 0);
        assert_eq!(totals.bytes, 0);
    }
}
