//! Audit public access and storage usage across your S3 buckets.
//!
//! This tool walks every bucket owned by the authenticated account,
//! flags any which are readable by the public via their ACL grants,
//! and tallies object counts and storage usage into a CSV report.
//!
//! Credentials must be provided via guidelines in the [AWS Documentation]
//! (https://docs.aws.amazon.com/cli/latest/userguide/cli-environment.html).
#[macro_use]
extern crate log as logger;

use rusoto_core::{credential::ChainProvider, region::Region, HttpClient};
use rusoto_s3::S3Client;

use std::time::Duration;

mod audit;
mod cli;
mod log;
mod provider;
mod types;

#[tokio::main]
async fn main() -> types::AuditResult<()> {
    // build the CLI and grab all arguments
    let args = cli::build().get_matches();

    // initialize logging
    log::init(&args)?;

    // create client options
    let client = HttpClient::new()?;
    let region = Region::default();

    // create provider with timeout
    let mut chain = ChainProvider::new();
    chain.set_timeout(Duration::from_millis(500));

    // create the new S3 client
    let s3 = S3Client::new_with(client, chain, region);

    // delegate to the cli mod
    cli::exec(s3, &args).await
}
