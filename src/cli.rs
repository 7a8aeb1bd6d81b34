//! CLI bindings for the audit entry point.
//!
//! This module contains the command line definition and the `exec`
//! entry which wires the S3 client into the audit pipeline. All
//! metadata is fetched dynamically from Cargo and shouldn't require
//! to be updated (ever).
use clap::{App, Arg, ArgMatches};
use rusoto_s3::S3Client;

use crate::audit;
use crate::audit::report;
use crate::provider::AmazonProvider;
use crate::types::AuditResult;

/// Constructs a new CLI application using Clap.
pub fn build<'a, 'b>() -> App<'a, 'b> {
    App::new("")
        .name(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .args(&[
            Arg::with_name("output")
                .help("File to write the CSV report into")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value("s3-audit.csv"),
            Arg::with_name("quiet")
                .help("Only prints errors during execution")
                .short("q")
                .long("quiet"),
        ])
}

/// Executes the audit and returns an `AuditResult` to indicate success.
///
/// The provided `S3Client` is wrapped into the provider abstraction
/// before being handed to the pipeline, so nothing below this layer
/// talks to Rusoto directly.
pub async fn exec(s3: S3Client, args: &ArgMatches<'_>) -> AuditResult<()> {
    // output path always has a default value
    let output = args.value_of("output").unwrap();

    // run the full audit against the live provider
    let provider = AmazonProvider::new(s3);
    let records = audit::exec(&provider).await?;

    // persist the report to the output artifact
    report::export(&records, output)?;

    // confirm the artifact location to the operator
    info!("Report written to {}", output);

    Ok(())
}
