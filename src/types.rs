//! Types module for the main runtime, exposing error and result types.
//!
//! Most code in this module is based around coercion of error types into
//! a common error type, to be used as the general "Error" of this crate.
use logger::SetLoggerError;
use quick_xml::events::Event;
use quick_xml::Reader;
use rusoto_core::request;

use std::fmt::{self, Debug, Display, Formatter};
use std::io;

/// Public type alias for a result with an `AuditError` error type.
pub type AuditResult<T> = Result<T, AuditError>;

/// Delegating error wrapper for errors raised during an audit run.
///
/// The internal `String` representation enables cheap coercion from
/// other error types by binding their error messages through. This
/// is somewhat similar to the `failure` crate, but minimal.
pub struct AuditError(String);

/// Debug implementation for `AuditError`.
impl Debug for AuditError {
    /// Formats an `AuditError` by delegating to `Display`.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Display implementation for `AuditError`.
impl Display for AuditError {
    /// Formats an `AuditError` by writing out the inner representation.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Macro to implement `From` for provided types.
macro_rules! derive_from {
    ($type:ty) => {
        impl<'a> From<$type> for AuditError {
            fn from(t: $type) -> AuditError {
                AuditError(t.to_string())
            }
        }
    };
}

// Easy derivations of derive_from.
derive_from!(&'a str);
derive_from!(io::Error);
derive_from!(clap::Error);
derive_from!(SetLoggerError);
derive_from!(request::TlsError);
derive_from!(String);

/// Macro to implement `From` for Rusoto types.
macro_rules! derive_from_rusoto {
    ($type:ty) => {
        impl From<rusoto_core::RusotoError<$type>> for AuditError {
            /// Converts a Rusoto error to an `AuditError`.
            fn from(err: rusoto_core::RusotoError<$type>) -> AuditError {
                // grab the raw conversion
                let msg = err.to_string();

                // XML, look for a message!
                if msg.starts_with("<?xml") {
                    // create an XML reader and buffer
                    let mut reader = Reader::from_str(&msg);
                    let mut buffer = Vec::new();

                    loop {
                        // parse through each XML node event
                        match reader.read_event(&mut buffer) {
                            // end, or error, just give up
                            Ok(Event::Eof) | Err(_) => break,

                            // if we find a message tag, we'll use that as the error
                            Ok(Event::Start(ref e)) if e.name() == b"Message" => {
                                return AuditError(
                                    reader
                                        .read_text(b"Message", &mut Vec::new())
                                        .expect("Cannot decode text value"),
                                )
                            }

                            // skip
                            _ => (),
                        }
                        // empty buffers
                        buffer.clear();
                    }
                }

                // default msg
                AuditError(msg)
            }
        }
    };
}

// derive error display for all used rusoto_s3 types
derive_from_rusoto!(rusoto_s3::GetBucketAclError);
derive_from_rusoto!(rusoto_s3::ListBucketsError);
derive_from_rusoto!(rusoto_s3::ListObjectsV2Error);
