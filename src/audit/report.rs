//! Report serialization and operator-facing formatting.
//!
//! The CSV layout in this module is an external contract: column
//! names, column order, and one row per audited bucket must stay
//! stable for downstream consumers. The progress formatting helpers
//! are operator-facing only and carry no such guarantee.
use pretty_bytes::converter::convert;

use std::fs::File;
use std::io::{self, Write};

use super::BucketRecord;
use crate::types::AuditResult;

/// Column headers of the report artifact, in contract order.
pub const COLUMNS: [&str; 4] = [
    "Bucket Name",
    "Public Access",
    "Object Count",
    "Total Size (MB)",
];

/// Writes the report for a set of records to an output stream.
///
/// The header row is always written, even for an empty record set.
pub fn write<W: Write>(records: &[BucketRecord], writer: &mut W) -> io::Result<()> {
    // header row comes first
    writeln!(writer, "{}", COLUMNS.join(", "))?;

    // then exactly one row per audited bucket
    for record in records {
        writeln!(
            writer,
            "{}, {}, {}, {:.2}",
            record.name,
            record.status,
            record.object_count,
            record.total_size_mb()
        )?;
    }

    Ok(())
}

/// Exports the report to a file path, replacing any previous report.
pub fn export(records: &[BucketRecord], path: &str) -> AuditResult<()> {
    let mut file = File::create(path)?;

    write(records, &mut file)?;

    Ok(())
}

/// Converts a byte count to a `String` representation.
pub fn convert_bytes(bytes: u64) -> String {
    convert(bytes as f64).replacen(' ', "", 1)
}

#[cfg(test)]
mod tests {
    use crate::audit::access::AccessStatus;
    use crate::audit::BucketRecord;

    #[test]
    fn writing_the_header_row() {
        let mut buffer = Vec::new();

        super::write(&[], &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Bucket Name, Public Access, Object Count, Total Size (MB)\n"
        );
    }

    #[test]
    fn writing_record_rows() {
        let records = vec![
            BucketRecord {
                name: "logs".to_string(),
                status: AccessStatus::Private,
                object_count: 3,
                total_size_bytes: 1048576,
            },
            BucketRecord {
                name: "assets".to_string(),
                status: AccessStatus::Public,
                object_count: 0,
                total_size_bytes: 0,
            },
        ];

        let mut buffer = Vec::new();
        super::write(&records, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Bucket Name, Public Access, Object Count, Total Size (MB)\n\
             logs, Private, 3, 1.00\n\
             assets, Public (WARNING), 0, 0.00\n"
        );
    }

    #[test]
    fn converting_bytes_to_string() {
        let bval = 512_u64;
        let kval = bval * 512_u64;
        let mval = kval * 512_u64;
        let gval = mval * 512_u64;

        assert_eq!(super::convert_bytes(bval), "512B");
        assert_eq!(super::convert_bytes(kval), "262.14kB");
        assert_eq!(super::convert_bytes(mval), "134.22MB");
        assert_eq!(super::convert_bytes(gval), "68.72GB");
    }
}
