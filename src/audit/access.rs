//! Public access classification based on bucket ACL grants.
//!
//! Classification is a deliberate under-approximation: only bucket
//! ACL grants to the well-known AWS group principals are inspected.
//! Bucket policies, cross-account grants and object-level ACLs can
//! all expose data without tripping this check (see README).
use crate::provider::StorageProvider;
use crate::types::AuditResult;

use std::fmt::{self, Display, Formatter};

/// Group URI granting access to anyone on the internet.
pub const ALL_USERS: &str = "http://acs.amazonaws.com/groups/global/AllUsers";

/// Group URI granting access to anyone holding AWS credentials.
pub const ALL_AUTHENTICATED_USERS: &str =
    "http://acs.amazonaws.com/groups/global/AuthenticatedUsers";

/// Access classification of an audited bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessStatus {
    Private,
    Public,
    Unknown,
}

/// Display implementation for `AccessStatus`.
impl Display for AccessStatus {
    /// Formats an `AccessStatus` using the report markers.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AccessStatus::Private => write!(f, "Private"),
            AccessStatus::Public => write!(f, "Public (WARNING)"),
            AccessStatus::Unknown => write!(f, "Unknown (ERROR)"),
        }
    }
}

/// Checks the access status of a bucket via its ACL grants.
///
/// A fetch failure bubbles up to the caller, which decides how to
/// degrade the record; this module never maps errors to `Unknown`
/// itself so the cause stays available for logging.
pub async fn check<P: StorageProvider>(provider: &P, bucket: &str) -> AuditResult<AccessStatus> {
    let grants = provider.bucket_grants(bucket).await?;

    Ok(classify(&grants))
}

/// Classifies a set of grant principals as public or private.
pub fn classify(principals: &[String]) -> AccessStatus {
    let public = principals
        .iter()
        .any(|principal| principal == ALL_USERS || principal == ALL_AUTHENTICATED_USERS);

    if public {
        AccessStatus::Public
    } else {
        AccessStatus::Private
    }
}

#[cfg(test)]
mod tests {
    use super::AccessStatus;

    #[test]
    fn classifying_all_users_grants() {
        let principals = vec![
            "79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be".to_string(),
            super::ALL_USERS.to_string(),
        ];

        assert_eq!(super::classify(&principals), AccessStatus::Public);
    }

    #[test]
    fn classifying_authenticated_users_grants() {
        let principals = vec![super::ALL_AUTHENTICATED_USERS.to_string()];

        assert_eq!(super::classify(&principals), AccessStatus::Public);
    }

    #[test]
    fn classifying_specific_grants() {
        let principals = vec![
            "79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be".to_string(),
            "admin@example.com".to_string(),
        ];

        assert_eq!(super::classify(&principals), AccessStatus::Private);
    }

    #[test]
    fn classifying_empty_grants() {
        assert_eq!(super::classify(&[]), AccessStatus::Private);
    }

    #[test]
    fn formatting_status_markers() {
        assert_eq!(AccessStatus::Private.to_string(), "Private");
        assert_eq!(AccessStatus::Public.to_string(), "Public (WARNING)");
        assert_eq!(AccessStatus::Unknown.to_string(), "Unknown (ERROR)");
    }
}
