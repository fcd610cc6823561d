use crate::analyzer::{Operation, PathMap};
use crate::schema_generator::{Schema, Tag};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// OpenAPI document builder - assembles the final 3.0 envelope from the
/// schema generator's schemas/tags and the analyzer's path map.
///
/// Operations arrive with `$ref` strings that may still use the legacy
/// `#/definitions/` namespace; the builder rewrites them to
/// `#/components/schemas/` in request bodies and response contents. The
/// rewrite is idempotent, so refs already in the target form pass through.
pub struct OpenApiBuilder {
    info: Info,
    port: u16,
    paths: PathMap,
    schemas: BTreeMap<String, Schema>,
    tags: Vec<Tag>,
}

/// OpenAPI Info object
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Server {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,
    pub scheme: String,
    #[serde(rename = "bearerFormat")]
    pub bearer_format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Components {
    #[serde(rename = "securitySchemes")]
    pub security_schemes: BTreeMap<String, SecurityScheme>,
    pub schemas: BTreeMap<String, Schema>,
}

/// Complete OpenAPI document
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub components: Components,
    pub tags: Vec<Tag>,
    pub paths: PathMap,
}

impl OpenApiBuilder {
    pub fn new() -> Self {
        debug!("Initializing OpenApiBuilder");
        Self {
            info: Info {
                title: "API Documentation".to_string(),
                description: Some(
                    "API documentation generated from the project source tree".to_string(),
                ),
                version: "1.0.0".to_string(),
                contact: None,
            },
            port: 3000,
            paths: BTreeMap::new(),
            schemas: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_info(mut self, title: String, version: String, description: Option<String>) -> Self {
        self.info = Info {
            title,
            description,
            version,
            contact: self.info.contact,
        };
        self
    }

    pub fn with_contact(mut self, name: String, email: String) -> Self {
        self.info.contact = Some(Contact { name, email });
        self
    }

    /// Port for the single localhost server entry.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_schemas(mut self, schemas: BTreeMap<String, Schema>) -> Self {
        self.schemas = schemas;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Adds the analyzer's path map, rewriting legacy refs as they land.
    pub fn with_paths(mut self, paths: PathMap) -> Self {
        self.paths = paths;
        for operations in self.paths.values_mut() {
            for operation in operations.values_mut() {
                rewrite_operation_refs(operation);
            }
        }
        self
    }

    /// Builds the final document.
    pub fn build(self) -> OpenApiDocument {
        debug!(
            "Building OpenAPI document: {} paths, {} schemas, {} tags",
            self.paths.len(),
            self.schemas.len(),
            self.tags.len()
        );
        let mut security_schemes = BTreeMap::new();
        security_schemes.insert(
            "bearerAuth".to_string(),
            SecurityScheme {
                scheme_type: "http".to_string(),
                scheme: "bearer".to_string(),
                bearer_format: "JWT".to_string(),
            },
        );

        OpenApiDocument {
            openapi: "3.0.0".to_string(),
            info: self.info,
            servers: vec![Server {
                url: format!("http://localhost:{}", self.port),
                description: Some("Development server".to_string()),
            }],
            components: Components {
                security_schemes,
                schemas: self.schemas,
            },
            tags: self.tags,
            paths: self.paths,
        }
    }
}

impl Default for OpenApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates a legacy `#/definitions/` ref to the components namespace.
/// Refs already in the target form are returned unchanged.
pub fn rewrite_ref(reference: &str) -> String {
    match reference.strip_prefix("#/definitions/") {
        Some(name) => format!("#/components/schemas/{}", name),
        None => reference.to_string(),
    }
}

fn rewrite_schema_ref(schema: &mut Schema) {
    if let Some(reference) = &schema.reference {
        schema.reference = Some(rewrite_ref(reference));
    }
}

fn rewrite_operation_refs(operation: &mut Operation) {
    if let Some(body) = &mut operation.request_body {
        for media_type in body.content.values_mut() {
            rewrite_schema_ref(&mut media_type.schema);
        }
    }
    for response in operation.responses.values_mut() {
        if let Some(content) = &mut response.content {
            for media_type in content.values_mut() {
                rewrite_schema_ref(&mut media_type.schema);
            }
        }
    }
}
