//! Storage provider abstraction over the S3 management APIs.
//!
//! The audit pipeline only needs three capabilities from the provider:
//! listing buckets, fetching the ACL grants of a bucket, and listing
//! the sizes of the objects inside a bucket. Keeping these behind a
//! narrow trait means the pipeline can be driven by an in-memory fake
//! in tests, without any network access.
use async_trait::async_trait;
use rusoto_s3::*;

use crate::types::AuditResult;

/// Capability surface required from a storage provider.
///
/// Grants are exposed as flat principal identifiers (a group URI, a
/// canonical user ID, or an email address) rather than provider SDK
/// structures, so the access checks above this trait stay portable.
#[async_trait]
pub trait StorageProvider {
    /// Lists the names of all buckets owned by the caller, in the
    /// order the provider returned them.
    async fn list_buckets(&self) -> AuditResult<Vec<String>>;

    /// Fetches the principal identifiers granted access to a bucket.
    async fn bucket_grants(&self, bucket: &str) -> AuditResult<Vec<String>>;

    /// Fetches the byte sizes of the objects stored in a bucket.
    async fn object_sizes(&self, bucket: &str) -> AuditResult<Vec<u64>>;
}

/// Live provider implementation backed by an S3 client.
pub struct AmazonProvider {
    s3: S3Client,
}

impl AmazonProvider {
    /// Constructs a new `AmazonProvider` around an `S3Client`.
    pub fn new(s3: S3Client) -> AmazonProvider {
        AmazonProvider { s3 }
    }
}

/// Provider implementation delegating to Rusoto.
#[async_trait]
impl StorageProvider for AmazonProvider {
    /// Lists bucket names via the ListBuckets API.
    ///
    /// The API returns the full set in a single response, so there is
    /// no pagination to deal with on this call.
    async fn list_buckets(&self) -> AuditResult<Vec<String>> {
        // execute the request and await the response (blocking)
        let response = self.s3.list_buckets().await?;

        // flatten out the names, skipping any unnamed entries
        Ok(response
            .buckets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|bucket| bucket.name)
            .collect())
    }

    /// Fetches bucket grants via the GetBucketAcl API.
    async fn bucket_grants(&self, bucket: &str) -> AuditResult<Vec<String>> {
        // create a request for the bucket ACL
        let request = GetBucketAclRequest {
            bucket: bucket.to_string(),
            ..GetBucketAclRequest::default()
        };

        // execute the request and await the response (blocking)
        let response = self.s3.get_bucket_acl(request).await?;

        // map each grantee down to its principal identifier
        Ok(response
            .grants
            .unwrap_or_default()
            .into_iter()
            .filter_map(|grant| grant.grantee)
            .filter_map(principal_of)
            .collect())
    }

    /// Fetches object sizes via the ListObjectsV2 API.
    ///
    /// Only the first page of the listing is fetched; buckets holding
    /// more objects than a single page are truncated (see README).
    async fn object_sizes(&self, bucket: &str) -> AuditResult<Vec<u64>> {
        // create a request to list objects
        let request = ListObjectsV2Request {
            bucket: bucket.to_string(),
            ..ListObjectsV2Request::default()
        };

        // execute the request and await the response (blocking)
        let response = self.s3.list_objects_v2(request).await?;

        // pull out each object size, treating absence as empty
        Ok(response
            .contents
            .unwrap_or_default()
            .iter()
            .map(|object| object.size.unwrap_or(0) as u64)
            .collect())
    }
}

/// Retrieves the principal identifier of a `Grantee`.
///
/// Group grantees carry a URI, canonical users an ID, and email
/// grantees an address; whichever is present identifies the principal.
fn principal_of(grantee: Grantee) -> Option<String> {
    grantee.uri.or(grantee.id).or(grantee.email_address)
}

#[cfg(test)]
mod tests {
    use rusoto_s3::Grantee;

    #[test]
    fn extracting_group_principals() {
        let grantee = Grantee {
            type_: "Group".to_string(),
            uri: Some("http://acs.amazonaws.com/groups/global/AllUsers".to_string()),
            ..Grantee::default()
        };

        let principal = super::principal_of(grantee);

        assert_eq!(
            principal,
            Some("http://acs.amazonaws.com/groups/global/AllUsers".to_string())
        );
    }

    #[test]
    fn extracting_canonical_principals() {
        let grantee = Grantee {
            type_: "CanonicalUser".to_string(),
            id: Some("79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be".to_string()),
            display_name: Some("owner".to_string()),
            ..Grantee::default()
        };

        let principal = super::principal_of(grantee);

        assert_eq!(
            principal,
            Some("79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be".to_string())
        );
    }

    #[test]
    fn extracting_missing_principals() {
        let grantee = Grantee {
            type_: "Group".to_string(),
            ..Grantee::default()
        };

        assert_eq!(super::principal_of(grantee), None);
    }
}
