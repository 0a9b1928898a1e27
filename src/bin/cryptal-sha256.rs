#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::expect_used, clippy::unwrap_used))]

use std::io;

use anyhow::Result;
use clap::Parser;

use cryptal_sha256::cli::{Args, run};
use cryptal_sha256::logging::init_tracing;

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    run(&args, io::stdin().lock(), &mut io::stdout().lock())
}
