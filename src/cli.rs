use crate::generator::{self, GenerateOptions, OutputFormat};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Express OpenAPI Generator - Automatically generate OpenAPI documentation from Express projects
#[derive(Parser, Debug)]
#[command(name = "openapi-from-express")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Express project directory
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Output format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormatArg,

    /// Output file path (default: public/swagger.{json|yaml} under the project)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long = "stdout")]
    pub to_stdout: bool,

    /// Controllers directory (default: <project>/controllers)
    #[arg(long = "controllers", value_name = "DIR")]
    pub controllers_dir: Option<PathBuf>,

    /// Routes directory (default: <project>/routes)
    #[arg(long = "routes", value_name = "DIR")]
    pub routes_dir: Option<PathBuf>,

    /// API title for the info section
    #[arg(long = "title", default_value = "API Documentation")]
    pub title: String,

    /// API version for the info section
    #[arg(long = "api-version", default_value = "1.0.0")]
    pub api_version: String,

    /// Server port in the document's server URL
    #[arg(long = "port", default_value_t = 3000)]
    pub port: u16,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }
    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output format: {:?}", args.output_format);
    if args.to_stdout {
        info!("Output: stdout");
    } else if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: default artifact location");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Starting OpenAPI document generation...");

    let mut options = GenerateOptions::new(args.project_path.clone());
    options.controllers_dir = args.controllers_dir.clone();
    options.routes_dir = args.routes_dir.clone();
    options.output_path = args.output_path.clone();
    options.format = args.output_format.into();
    options.title = args.title.clone();
    options.version = args.api_version.clone();
    options.port = args.port;

    if args.to_stdout {
        let document = generator::build_document(&options)?;
        let content = generator::render(&document, options.format)?;
        println!("{}", content);
    } else {
        let artifact = generator::generate(&options)?;
        info!("Generation complete: {}", artifact.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(project: PathBuf) -> CliArgs {
        CliArgs {
            project_path: project,
            output_format: OutputFormatArg::Json,
            output_path: None,
            to_stdout: false,
            controllers_dir: None,
            routes_dir: None,
            title: "API Documentation".to_string(),
            api_version: "1.0.0".to_string(),
            port: 3000,
            verbose: false,
        }
    }

    #[test]
    fn test_validation_rejects_missing_project() {
        let args = args_for(PathBuf::from("/nonexistent/project"));
        assert!(parse_args_from_parsed(args).is_err());
    }

    #[test]
    fn test_validation_rejects_file_as_project() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, "").unwrap();
        let args = args_for(file);
        assert!(parse_args_from_parsed(args).is_err());
    }

    #[test]
    fn test_run_empty_project_produces_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(temp_dir.path().to_path_buf());
        run(args).unwrap();
        let artifact = temp_dir.path().join("public/swagger.json");
        assert!(artifact.exists());
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(artifact).unwrap()).unwrap();
        assert_eq!(parsed["info"]["title"], "API Documentation");
    }
}
