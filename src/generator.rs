use crate::analyzer::ApiAnalyzer;
use crate::openapi_builder::{OpenApiBuilder, OpenApiDocument};
use crate::schema_generator::SchemaGenerator;
use crate::serializer;
use anyhow::{Context, Result};
use log::info;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::Mutex;

/// One-shot generation pipeline shared by the CLI and embedding processes.
///
/// A run scans the source tree, assembles the document in memory, and only
/// then persists it. Runs are serialized through a process-wide lock: two
/// overlapping triggers (say, a startup hook and a manual invocation) cannot
/// interleave their writes.

/// Serialization format of the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project root; default directory layout is resolved against it
    pub project_path: PathBuf,
    /// Controllers directory, `<project>/controllers` when unset
    pub controllers_dir: Option<PathBuf>,
    /// Routes directory, `<project>/routes` when unset
    pub routes_dir: Option<PathBuf>,
    /// Artifact path, `<project>/public/swagger.{json|yaml}` when unset
    pub output_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub title: String,
    pub version: String,
    /// Port in the document's server URL
    pub port: u16,
}

impl GenerateOptions {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            controllers_dir: None,
            routes_dir: None,
            output_path: None,
            format: OutputFormat::Json,
            title: "API Documentation".to_string(),
            version: "1.0.0".to_string(),
            port: 3000,
        }
    }

    pub fn controllers_dir(&self) -> PathBuf {
        self.controllers_dir
            .clone()
            .unwrap_or_else(|| self.project_path.join("controllers"))
    }

    pub fn routes_dir(&self) -> PathBuf {
        self.routes_dir
            .clone()
            .unwrap_or_else(|| self.project_path.join("routes"))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            let name = match self.format {
                OutputFormat::Json => "swagger.json",
                OutputFormat::Yaml => "swagger.yaml",
            };
            self.project_path.join("public").join(name)
        })
    }
}

static GENERATION_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Assembles the full document without persisting it.
pub fn build_document(options: &GenerateOptions) -> Result<OpenApiDocument> {
    let controllers_dir = options.controllers_dir();
    let routes_dir = options.routes_dir();
    info!("Scanning route structure: {}", routes_dir.display());

    let mut schema_generator = SchemaGenerator::new();
    schema_generator.scan_route_structure(&routes_dir);
    schema_generator.generate_schemas_from_structure();
    schema_generator.generate_tags_from_structure();

    info!("Analyzing controllers: {}", controllers_dir.display());
    let mut analyzer = ApiAnalyzer::new();
    analyzer.set_folders(schema_generator.folders().to_vec());
    analyzer.analyze_controllers(&controllers_dir);
    analyzer.analyze_routes(&routes_dir, &controllers_dir);

    let results = analyzer.results();
    info!(
        "Summary: {} feature folders, {} endpoints, {} paths, {} schemas",
        schema_generator.folders().len(),
        results.endpoints.len(),
        results.paths.len(),
        schema_generator.schemas().len()
    );

    let document = OpenApiBuilder::new()
        .with_info(options.title.clone(), options.version.clone(), None)
        .with_port(options.port)
        .with_schemas(schema_generator.schemas().clone())
        .with_tags(schema_generator.tags().to_vec())
        .with_paths(results.paths.clone())
        .build();
    Ok(document)
}

/// Runs one full generation pass and writes the artifact.
///
/// Returns the artifact path. Holds the generation lock for the whole run.
///
/// # Errors
///
/// Returns an error if serialization or the final write fails; a previously
/// written artifact is left untouched in that case.
pub fn generate(options: &GenerateOptions) -> Result<PathBuf> {
    let _guard = GENERATION_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let document = build_document(options)?;
    let content = render(&document, options.format)?;

    let output_path = options.output_path();
    serializer::write_atomic(&content, &output_path)
        .with_context(|| format!("Failed to write artifact: {}", output_path.display()))?;
    info!("Wrote OpenAPI document to {}", output_path.display());
    Ok(output_path)
}

/// Serializes a document in the requested format.
pub fn render(document: &OpenApiDocument, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Json => serializer::serialize_json(document)?,
        OutputFormat::Yaml => serializer::serialize_yaml(document)?,
    };
    Ok(content)
}
