//! Core audit pipeline driving enumeration, inspection and reporting.
//!
//! An audit run is a single linear pass: the provider enumerates the
//! account's buckets, each bucket is inspected for public access and
//! object metadata, and the resulting records are handed off to the
//! report writer. Buckets are processed in enumeration order and the
//! report mirrors that order.
use crate::provider::StorageProvider;
use crate::types::AuditResult;

pub mod access;
pub mod metadata;
pub mod report;

use self::access::AccessStatus;
use self::metadata::ObjectTotals;

/// Audit results for a single bucket.
///
/// One record is created for every enumerated bucket, even when the
/// inspection calls fail; a failure degrades the status field rather
/// than dropping the record from the report.
#[derive(Debug, PartialEq)]
pub struct BucketRecord {
    pub name: String,
    pub status: AccessStatus,
    pub object_count: u64,
    pub total_size_bytes: u64,
}

impl BucketRecord {
    /// Retrieves the total size converted to megabytes.
    pub fn total_size_mb(&self) -> f64 {
        metadata::to_megabytes(self.total_size_bytes)
    }
}

/// Executes a full audit run and returns the ordered bucket records.
///
/// Failure to enumerate buckets is fatal and propagates immediately;
/// there is nothing to audit without a bucket list. Failures against
/// a single bucket are absorbed into that bucket's record and logged,
/// leaving the remaining buckets unaffected.
pub async fn exec<P: StorageProvider>(provider: &P) -> AuditResult<Vec<BucketRecord>> {
    // enumerate all buckets owned by the caller
    let buckets = provider.list_buckets().await?;

    // one record per bucket, in enumeration order
    let mut records = Vec::with_capacity(buckets.len());

    for bucket in buckets {
        // inspect the bucket, degrading the record on any failure
        let (status, totals) = match inspect(provider, &bucket).await {
            Ok(pair) => pair,
            Err(err) => {
                error!("{}: inspection failed: {}", bucket, err);
                (AccessStatus::Unknown, ObjectTotals::default())
            }
        };

        // log out a progress line for the operator
        info!(
            "{}: {}, {} objects, {}",
            bucket,
            status,
            totals.count,
            report::convert_bytes(totals.bytes)
        );

        // store the record for the report phase
        records.push(BucketRecord {
            name: bucket,
            status,
            object_count: totals.count,
            total_size_bytes: totals.bytes,
        });
    }

    Ok(records)
}

/// Inspects a single bucket for access status and object totals.
async fn inspect<P: StorageProvider>(
    provider: &P,
    bucket: &str,
) -> AuditResult<(AccessStatus, ObjectTotals)> {
    let status = access::check(provider, bucket).await?;
    let totals = metadata::aggregate(provider, bucket).await?;

    Ok((status, totals))
}
