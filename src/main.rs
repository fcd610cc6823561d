//! Express OpenAPI Generator - Command-line tool for generating OpenAPI documentation.
//!
//! This binary provides a command-line interface for automatically generating OpenAPI 3.0
//! documentation from Express-style projects. It statically analyzes the `controllers/`
//! and `routes/` source trees to infer endpoints, parameters, schemas, and tags, then
//! writes a complete OpenAPI document.
//!
//! # Usage
//!
//! ```bash
//! openapi-from-express [OPTIONS] <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! Generate the default artifact (public/swagger.json under the project):
//! ```bash
//! openapi-from-express ./my-express-app
//! ```
//!
//! Generate YAML documentation to an explicit path:
//! ```bash
//! openapi-from-express ./my-express-app -f yaml -o openapi.yaml
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! openapi-from-express ./my-express-app -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use openapi_from_express::cli;

fn main() -> Result<()> {
    // The logger level comes from the verbose flag, so parse before init
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Express OpenAPI Generator starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("OpenAPI document generation completed successfully");

    Ok(())
}
