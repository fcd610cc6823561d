use openapi_from_express::{
    analyzer::ApiAnalyzer,
    generator::{build_document, generate, GenerateOptions},
    parser::HttpVerb,
    schema_generator::SchemaGenerator,
    serializer::serialize_json,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a temporary test project
fn create_test_project(files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for (path, content) in files {
        let file_path = temp_dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write test file");
    }

    temp_dir
}

fn document_json(temp_dir: &TempDir) -> Value {
    let options = GenerateOptions::new(temp_dir.path().to_path_buf());
    let document = build_document(&options).expect("Failed to build document");
    let json = serialize_json(&document).expect("Failed to serialize");
    serde_json::from_str(&json).expect("Generated document is not valid JSON")
}

/// Collects every `$ref` string anywhere in the document.
fn collect_refs(value: &Value, refs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                if key == "$ref" {
                    if let Value::String(reference) = nested {
                        refs.push(reference.clone());
                    }
                }
                collect_refs(nested, refs);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_refs(item, refs);
            }
        }
        _ => {}
    }
}

#[test]
fn test_generation_is_idempotent() {
    let temp_dir = create_test_project(vec![
        (
            "controllers/teacherController.js",
            r#"
const getAllTeachers = async (req, res) => {
  const sort = req.query.sort
  res.status(200).json({})
}
"#,
        ),
        (
            "routes/private/Teachers/index.js",
            r#"router.get("/list", authenticateToken, teacherController.getAllTeachers)"#,
        ),
    ]);

    let options = GenerateOptions::new(temp_dir.path().to_path_buf());
    let artifact = generate(&options).expect("First generation failed");
    let first = std::fs::read(&artifact).unwrap();
    generate(&options).expect("Second generation failed");
    let second = std::fs::read(&artifact).unwrap();

    assert_eq!(first, second, "Repeated runs must be byte-identical");
}

#[test]
fn test_every_ref_uses_components_namespace() {
    let temp_dir = create_test_project(vec![
        (
            "controllers/teacherController.js",
            r#"
const createTeacher = async (req, res) => {
  await executeQuery("INSERT INTO teachers (name) VALUES (?)")
  res.status(201).json({})
  res.status(400).json({})
}
"#,
        ),
        (
            "routes/private/Teachers/index.js",
            r#"
router.post("/", authenticateToken, teacherController.createTeacher)
router.get("/list", authenticateToken, teacherController.getAllTeachers)
"#,
        ),
        (
            "routes/public/Auth/index.js",
            r#"router.post("/login", authController.login)"#,
        ),
    ]);

    let document = document_json(&temp_dir);
    let mut refs = Vec::new();
    collect_refs(&document, &mut refs);

    assert!(!refs.is_empty(), "Expected schema references in the document");
    for reference in &refs {
        assert!(
            reference.starts_with("#/components/schemas/"),
            "Legacy ref leaked into the document: {}",
            reference
        );
        assert!(!reference.starts_with("#/definitions/"));
    }
}

#[test]
fn test_method_scope_overrides_controller_scope() {
    let temp_dir = create_test_project(vec![
        (
            "controllers/postController.js",
            r#"
/**
 * @queryEnum status: [active, inactive] - Record state
 */

const getAllPosts = async (req, res) => {
  const status = req.query.status
  res.status(200).json({})
}

/**
 * @queryEnum status: [draft, published, archived] - Post lifecycle
 */
const getDrafts = async (req, res) => {
  const status = req.query.status
  res.status(200).json({})
}
"#,
        ),
        (
            "routes/private/Posts/index.js",
            r#"
router.get("/list", authenticateToken, postController.getAllPosts)
router.get("/drafts", authenticateToken, postController.getDrafts)
"#,
        ),
    ]);

    let document = document_json(&temp_dir);
    let status_enum = |path: &str| -> Vec<String> {
        document["paths"][path]["get"]["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "status")
            .and_then(|p| p["schema"]["enum"].as_array())
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.as_str().unwrap().to_string())
                    .collect()
            })
            .unwrap_or_default()
    };

    assert_eq!(
        status_enum("/api/v1/posts/drafts"),
        vec!["draft", "published", "archived"]
    );
    assert_eq!(
        status_enum("/api/v1/posts/list"),
        vec!["active", "inactive"]
    );
}

#[test]
fn test_path_param_rules_filtered_by_route_template() {
    let temp_dir = create_test_project(vec![
        (
            "controllers/settingsController.js",
            r#"
/**
 * @paramEnum key: [theme, locale, timezone] - Setting key
 */

const getAllSettings = async (req, res) => {
  res.status(200).json({})
}

const getSetting = async (req, res) => {
  res.status(200).json({})
}
"#,
        ),
        (
            "routes/private/Settings/index.js",
            r#"
router.get("/list", authenticateToken, settingsController.getAllSettings)
router.get("/:key", authenticateToken, settingsController.getSetting)
"#,
        ),
    ]);

    let document = document_json(&temp_dir);

    // The rule applies where the template carries the parameter
    let keyed = &document["paths"]["/api/v1/settings/{key}"]["get"]["parameters"];
    let key_param = keyed
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "key")
        .expect("key path parameter");
    assert_eq!(
        key_param["schema"]["enum"],
        serde_json::json!(["theme", "locale", "timezone"])
    );

    // No :key segment on /list, so the rule must not leak in
    let list = &document["paths"]["/api/v1/settings/list"]["get"]["parameters"];
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["name"] != "key"));
}

#[test]
fn test_verb_inference_from_name_and_body() {
    let temp_dir = create_test_project(vec![(
        "controllers/teacherController.js",
        r#"
const createTeacher = async (req, res) => {
  await executeQuery("INSERT INTO teachers (name) VALUES (?)")
  res.status(201).json({})
}

const getAllTeachers = async (req, res) => {
  const rows = await executeQuery("SELECT * FROM teachers")
  res.status(200).json({ rows })
}
"#,
    )]);

    let mut analyzer = ApiAnalyzer::new();
    analyzer.analyze_controllers(&temp_dir.path().join("controllers"));

    assert_eq!(
        analyzer.endpoints()["createTeacher"].verb.verb,
        HttpVerb::Post
    );
    assert_eq!(
        analyzer.endpoints()["getAllTeachers"].verb.verb,
        HttpVerb::Get
    );
}

#[test]
fn test_feature_discovery_round_trip() {
    let temp_dir = create_test_project(vec![
        (
            "routes/private/Teachers/index.js",
            r#"router.get("/list", authenticateToken, teacherController.getAllTeachers)"#,
        ),
        (
            "routes/private/Schools/index.js",
            r#"router.get("/list", authenticateToken, schoolController.getAllSchools)"#,
        ),
    ]);

    let document = document_json(&temp_dir);

    let tag_names: Vec<&str> = document["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(tag_names, vec!["Authentication", "Schools", "Teachers"]);

    assert_eq!(
        document["paths"]["/api/v1/teachers/list"]["get"]["tags"],
        serde_json::json!(["Teachers"])
    );
    assert_eq!(
        document["paths"]["/api/v1/schools/list"]["get"]["tags"],
        serde_json::json!(["Schools"])
    );
}

#[test]
fn test_schema_singularization() {
    let mut generator = SchemaGenerator::new();
    let temp_dir = create_test_project(vec![(
        "routes/private/Designations/index.js",
        r#"router.get("/list", designationController.getAllDesignations)"#,
    )]);
    generator.scan_route_structure(&temp_dir.path().join("routes"));
    generator.generate_schemas_from_structure();

    for name in [
        "Designation",
        "DesignationCreate",
        "DesignationUpdate",
        "PaginatedDesignations",
    ] {
        assert!(
            generator.schemas().contains_key(name),
            "Missing schema: {}",
            name
        );
    }
}

#[test]
fn test_missing_controllers_directory_tolerated() {
    let temp_dir = create_test_project(vec![(
        "routes/private/Teachers/index.js",
        r#"router.get("/list", authenticateToken, teacherController.getAllTeachers)"#,
    )]);

    // No controllers/ directory exists at all
    let document = document_json(&temp_dir);

    for name in [
        "UserRegistration",
        "UserLogin",
        "LoginResponse",
        "SuccessResponse",
        "ErrorResponse",
    ] {
        assert!(
            document["components"]["schemas"][name].is_object(),
            "Missing common schema: {}",
            name
        );
    }
    assert_eq!(document["tags"][0]["name"], "Authentication");
    // The unresolved handler still yields a (minimal) documented operation
    assert!(document["paths"]["/api/v1/teachers/list"]["get"].is_object());
}
