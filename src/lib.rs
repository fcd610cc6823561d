//! Express OpenAPI Generator - Automatic OpenAPI documentation from Express projects.
//!
//! This library generates OpenAPI 3.0 documentation by statically analyzing an
//! Express-style project layout: a `controllers/` directory of handler modules and a
//! `routes/` directory organized as `{public|private}/{Feature}/*.js`. No code is
//! executed; everything is inferred from the source tree at rest.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`scanner`] - Discovers controller files and route files, deriving each route
//!    file's path prefix and feature name from its position in the tree
//! 2. [`parser`] - Tokenizes JavaScript-flavoured source and locates handler
//!    functions and `router.<verb>(...)` registrations
//! 3. [`annotation`] - Parses `@enum`-family documentation tags from comment blocks
//! 4. [`enums`] - Collects scoped enum rules (controller/method/route/endpoint)
//! 5. [`schema_generator`] - Synthesizes entity schemas and tags from the folder layout
//! 6. [`analyzer`] - Infers endpoint descriptors and binds them to registered routes
//! 7. [`openapi_builder`] - Assembles the complete OpenAPI document
//! 8. [`serializer`] - Serializes the document to JSON or YAML and persists it atomically
//! 9. [`generator`] - The one-shot pipeline entry point shared by the CLI and embedders
//!
//! # Example Usage
//!
//! ```no_run
//! use openapi_from_express::generator::{generate, GenerateOptions};
//! use std::path::PathBuf;
//!
//! let options = GenerateOptions::new(PathBuf::from("./my-express-app"));
//! let artifact = generate(&options).unwrap();
//! println!("wrote {}", artifact.display());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod scanner;
pub mod parser;
pub mod annotation;
pub mod enums;
pub mod analyzer;
pub mod schema_generator;
pub mod openapi_builder;
pub mod serializer;
pub mod generator;
pub mod error;
