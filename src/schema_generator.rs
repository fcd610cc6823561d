use log::{debug, info};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Schema generator - synthesizes component schemas and tags from the route
/// directory layout.
///
/// Every feature folder (a directory under the route tree that is not the
/// transparent `public`/`private` split) yields four schemas: the base entity,
/// a create payload, an update payload, and a paginated list envelope. A fixed
/// set of common schemas (registration, login, success/error envelopes) is
/// present in every document regardless of what was discovered.
#[derive(Debug, Default)]
pub struct SchemaGenerator {
    folders: Vec<FeatureFolder>,
    schemas: BTreeMap<String, Schema>,
    tags: Vec<Tag>,
}

/// One resource directory discovered under the route tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFolder {
    /// Directory name, original case - drives schema naming
    pub folder_name: String,
    /// Tag grouping endpoints in the final document
    pub tag_name: String,
    /// Lower-cased URL segment
    pub route_segment: String,
}

/// A documentation tag.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Tag {
    pub name: String,
    pub description: String,
}

/// OpenAPI schema value. One recursive shape covers objects, arrays,
/// primitives, and `$ref` nodes; absent fields are omitted from the output.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

impl Schema {
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Default::default()
        }
    }

    pub fn string() -> Self {
        Self::of_type("string")
    }

    pub fn integer() -> Self {
        Self::of_type("integer")
    }

    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("#/components/schemas/{}", name)),
            ..Default::default()
        }
    }

    pub fn array_of(items: Schema) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    pub fn object(properties: BTreeMap<String, Schema>) -> Self {
        Self {
            schema_type: Some("object".to_string()),
            properties: Some(properties),
            ..Default::default()
        }
    }

    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_enum(mut self, values: Vec<String>) -> Self {
        self.enum_values = Some(values);
        self
    }

    pub fn with_required(mut self, required: Vec<String>) -> Self {
        self.required = Some(required);
        self
    }
}

/// Minimal pluralization inverse: `ies` -> `y`, else a trailing `s` is
/// stripped, else unchanged. No irregular-plural table; already-singular
/// names pass through as-is.
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if let Some(stem) = name.strip_suffix('s') {
        return stem.to_string();
    }
    name.to_string()
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers feature folders under the route tree.
    ///
    /// `public` and `private` are transparent; every other directory, at any
    /// nesting depth below them, is recorded once in discovery order. Folders
    /// named `Auth`/`Authentication` are not features - their endpoints group
    /// under the unconditional Authentication tag and their payload schemas are
    /// part of the common set. Missing directory contributes nothing.
    pub fn scan_route_structure(&mut self, dir: &Path) {
        if !dir.is_dir() {
            debug!("Routes directory missing: {}", dir.display());
            return;
        }
        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.path() == dir {
                    return true;
                }
                let name = e.file_name().to_string_lossy();
                !name.starts_with('.') && name != "node_modules"
            })
            .filter_map(|e| e.ok())
        {
            if !entry.path().is_dir() || entry.path() == dir {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name == "public" || name == "private" {
                continue;
            }
            if name == "Auth" || name == "Authentication" {
                continue;
            }
            if self.folders.iter().any(|f| f.folder_name == name) {
                continue;
            }
            debug!("Discovered feature folder: {}", name);
            self.folders.push(FeatureFolder {
                tag_name: name.clone(),
                route_segment: name.to_lowercase(),
                folder_name: name,
            });
        }
        info!("Discovered {} feature folders", self.folders.len());
    }

    /// Builds the full component-schema set for the discovered folders plus
    /// the fixed common schemas.
    pub fn generate_schemas_from_structure(&mut self) {
        for folder in self.folders.clone() {
            self.generate_entity_schemas(&folder);
        }
        self.generate_common_schemas();
        info!("Generated {} schemas", self.schemas.len());
    }

    /// Four schemas per feature: base, create, update, paginated list.
    fn generate_entity_schemas(&mut self, folder: &FeatureFolder) {
        let singular = singularize(&folder.folder_name);
        debug!("Generating schemas for {} ({})", folder.folder_name, singular);

        let (fields, required) = entity_fields(&singular);

        let mut base_props = fields.clone();
        base_props.insert("id".to_string(), Schema::integer().with_example(json!(1)));
        base_props.insert(
            "created_at".to_string(),
            Schema::string().with_format("date-time"),
        );
        base_props.insert(
            "updated_at".to_string(),
            Schema::string().with_format("date-time"),
        );
        self.schemas
            .insert(singular.clone(), Schema::object(base_props));

        self.schemas.insert(
            format!("{}Create", singular),
            Schema::object(fields.clone()).with_required(required),
        );
        // Update payload: same fields, everything optional
        self.schemas
            .insert(format!("{}Update", singular), Schema::object(fields));

        let mut pagination = BTreeMap::new();
        pagination.insert("page".to_string(), Schema::integer().with_example(json!(1)));
        pagination.insert("limit".to_string(), Schema::integer().with_example(json!(10)));
        pagination.insert("total".to_string(), Schema::integer());
        pagination.insert("totalPages".to_string(), Schema::integer());

        let mut data = BTreeMap::new();
        data.insert(
            folder.route_segment.clone(),
            Schema::array_of(Schema::reference(&singular)),
        );
        data.insert("pagination".to_string(), Schema::object(pagination));

        let mut paginated = BTreeMap::new();
        paginated.insert(
            "status".to_string(),
            Schema::string().with_example(json!("success")),
        );
        paginated.insert("data".to_string(), Schema::object(data));
        self.schemas.insert(
            format!("Paginated{}", folder.folder_name),
            Schema::object(paginated),
        );
    }

    /// Schemas present in every document, independent of discovery.
    fn generate_common_schemas(&mut self) {
        let mut registration = BTreeMap::new();
        registration.insert(
            "name".to_string(),
            Schema::string().with_example(json!("John Doe")),
        );
        registration.insert(
            "email".to_string(),
            Schema::string()
                .with_format("email")
                .with_example(json!("john@example.com")),
        );
        registration.insert(
            "password".to_string(),
            Schema::string().with_format("password"),
        );
        registration.insert(
            "confirmPassword".to_string(),
            Schema::string().with_format("password"),
        );
        self.schemas.insert(
            "UserRegistration".to_string(),
            Schema::object(registration).with_required(vec![
                "name".to_string(),
                "email".to_string(),
                "password".to_string(),
                "confirmPassword".to_string(),
            ]),
        );

        let mut login = BTreeMap::new();
        login.insert(
            "email".to_string(),
            Schema::string()
                .with_format("email")
                .with_example(json!("john@example.com")),
        );
        login.insert("password".to_string(), Schema::string().with_format("password"));
        self.schemas.insert(
            "UserLogin".to_string(),
            Schema::object(login)
                .with_required(vec!["email".to_string(), "password".to_string()]),
        );

        let mut login_data = BTreeMap::new();
        login_data.insert("token".to_string(), Schema::string());
        login_data.insert("user".to_string(), Schema::reference("User"));
        let mut login_response = BTreeMap::new();
        login_response.insert(
            "status".to_string(),
            Schema::string().with_example(json!("success")),
        );
        login_response.insert("message".to_string(), Schema::string());
        login_response.insert("data".to_string(), Schema::object(login_data));
        self.schemas
            .insert("LoginResponse".to_string(), Schema::object(login_response));

        let mut success = BTreeMap::new();
        success.insert(
            "status".to_string(),
            Schema::string().with_example(json!("success")),
        );
        success.insert("message".to_string(), Schema::string());
        success.insert("data".to_string(), Schema::of_type("object"));
        self.schemas
            .insert("SuccessResponse".to_string(), Schema::object(success));

        let mut error = BTreeMap::new();
        error.insert(
            "status".to_string(),
            Schema::string().with_example(json!("error")),
        );
        error.insert("message".to_string(), Schema::string());
        error.insert("errors".to_string(), Schema::array_of(Schema::string()));
        self.schemas
            .insert("ErrorResponse".to_string(), Schema::object(error));
    }

    /// One Authentication tag, then one per folder in discovery order.
    pub fn generate_tags_from_structure(&mut self) {
        self.tags.push(Tag {
            name: "Authentication".to_string(),
            description: "User authentication endpoints".to_string(),
        });
        for folder in &self.folders {
            self.tags.push(Tag {
                name: folder.tag_name.clone(),
                description: format!("{} management endpoints", folder.tag_name),
            });
        }
    }

    pub fn schemas(&self) -> &BTreeMap<String, Schema> {
        &self.schemas
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn folders(&self) -> &[FeatureFolder] {
        &self.folders
    }
}

/// Entity-specific field table, keyed by singular name. Only `User` carries a
/// specialized shape; everything else gets the generic
/// name/description/status trio. Returns the fields and the required list for
/// the create payload.
fn entity_fields(singular: &str) -> (BTreeMap<String, Schema>, Vec<String>) {
    let mut fields = BTreeMap::new();
    match singular {
        "User" => {
            fields.insert(
                "name".to_string(),
                Schema::string().with_example(json!("John Doe")),
            );
            fields.insert(
                "email".to_string(),
                Schema::string()
                    .with_format("email")
                    .with_example(json!("john@example.com")),
            );
            fields.insert(
                "status".to_string(),
                Schema::string().with_enum(vec!["active".to_string(), "inactive".to_string()]),
            );
            fields.insert("phone".to_string(), Schema::string());
            fields.insert("bio".to_string(), Schema::string());
            fields.insert(
                "role".to_string(),
                Schema::string().with_enum(vec!["user".to_string(), "admin".to_string()]),
            );
            (fields, vec!["name".to_string(), "email".to_string()])
        }
        _ => {
            fields.insert(
                "name".to_string(),
                Schema::string().with_example(json!(format!("Example {}", singular))),
            );
            fields.insert("description".to_string(), Schema::string());
            fields.insert(
                "status".to_string(),
                Schema::string().with_enum(vec!["active".to_string(), "inactive".to_string()]),
            );
            (fields, vec!["name".to_string()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn generator_for(tree: &[&str]) -> SchemaGenerator {
        let temp_dir = TempDir::new().unwrap();
        for dir in tree {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }
        let mut generator = SchemaGenerator::new();
        generator.scan_route_structure(temp_dir.path());
        generator
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("Teachers"), "Teacher");
        assert_eq!(singularize("Designations"), "Designation");
        assert_eq!(singularize("Categories"), "Category");
        // No irregular-plural table: already-singular names pass through
        assert_eq!(singularize("Staff"), "Staff");
    }

    #[test]
    fn test_scan_skips_transparent_and_auth() {
        let generator = generator_for(&[
            "public/Auth",
            "private/Teachers",
            "private/Schools",
        ]);
        let names: Vec<&str> = generator
            .folders()
            .iter()
            .map(|f| f.folder_name.as_str())
            .collect();
        assert_eq!(names, vec!["Schools", "Teachers"]);
        assert_eq!(generator.folders()[0].route_segment, "schools");
    }

    #[test]
    fn test_scan_nested_feature_folders() {
        let generator = generator_for(&["private/Classes/Departments"]);
        let names: Vec<&str> = generator
            .folders()
            .iter()
            .map(|f| f.folder_name.as_str())
            .collect();
        assert_eq!(names, vec!["Classes", "Departments"]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let mut generator = SchemaGenerator::new();
        generator.scan_route_structure(Path::new("/nonexistent/routes"));
        assert!(generator.folders().is_empty());
    }

    #[test]
    fn test_entity_schema_quartet() {
        let mut generator = generator_for(&["private/Designations"]);
        generator.generate_schemas_from_structure();
        let schemas = generator.schemas();

        assert!(schemas.contains_key("Designation"));
        assert!(schemas.contains_key("DesignationCreate"));
        assert!(schemas.contains_key("DesignationUpdate"));
        assert!(schemas.contains_key("PaginatedDesignations"));

        let base = &schemas["Designation"];
        let props = base.properties.as_ref().unwrap();
        assert!(props.contains_key("id"));
        assert!(props.contains_key("created_at"));
        assert!(props.contains_key("updated_at"));
        assert!(props.contains_key("name"));

        let create = &schemas["DesignationCreate"];
        let props = create.properties.as_ref().unwrap();
        assert!(!props.contains_key("id"));
        assert_eq!(create.required.as_ref().unwrap(), &vec!["name".to_string()]);

        // Update makes everything optional
        assert!(schemas["DesignationUpdate"].required.is_none());
    }

    #[test]
    fn test_user_entity_specialized() {
        let mut generator = generator_for(&["private/Users"]);
        generator.generate_schemas_from_structure();
        let user = &generator.schemas()["User"];
        let props = user.properties.as_ref().unwrap();
        assert!(props.contains_key("email"));
        assert!(props.contains_key("role"));
        assert_eq!(
            props["role"].enum_values.as_ref().unwrap(),
            &vec!["user".to_string(), "admin".to_string()]
        );
    }

    #[test]
    fn test_paginated_schema_shape() {
        let mut generator = generator_for(&["private/Teachers"]);
        generator.generate_schemas_from_structure();
        let paginated = &generator.schemas()["PaginatedTeachers"];
        let data = &paginated.properties.as_ref().unwrap()["data"];
        let data_props = data.properties.as_ref().unwrap();
        let items = data_props["teachers"].items.as_ref().unwrap();
        assert_eq!(
            items.reference.as_deref(),
            Some("#/components/schemas/Teacher")
        );
        assert!(data_props.contains_key("pagination"));
    }

    #[test]
    fn test_common_schemas_always_present() {
        let mut generator = SchemaGenerator::new();
        generator.generate_schemas_from_structure();
        for name in [
            "UserRegistration",
            "UserLogin",
            "LoginResponse",
            "SuccessResponse",
            "ErrorResponse",
        ] {
            assert!(generator.schemas().contains_key(name), "missing {}", name);
        }
    }

    #[test]
    fn test_tags_authentication_first_then_discovery_order() {
        let mut generator = generator_for(&["private/Schools", "private/Teachers"]);
        generator.generate_tags_from_structure();
        let names: Vec<&str> = generator.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Authentication", "Schools", "Teachers"]);
        assert_eq!(
            generator.tags()[1].description,
            "Schools management endpoints"
        );
    }
}
