use crate::enums::{EnumExtractor, EnumRule, ParamKind};
use crate::parser::{HttpVerb, SourceFile, Token, TokenKind};
use crate::scanner;
use crate::schema_generator::{singularize, FeatureFolder, Schema};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

/// API analyzer - infers one endpoint descriptor per controller handler, then
/// binds route registrations to those descriptors and emits the path-item map.
///
/// Descriptors are derived purely from lexical analysis of handler bodies.
/// A descriptor with no registered route is expected (dead handlers); a route
/// whose handler reference matches no descriptor degrades to a minimal
/// synthesized operation rather than being dropped.

/// What decided an inferred HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbEvidence {
    /// A token in the handler name (`create`, `update`, ...)
    NameToken,
    /// A `res.status(201)` call in the body
    StatusCode,
    /// An SQL statement inside a string or template literal
    SqlStatement,
    /// Nothing matched; GET assumed
    Default,
}

/// An inferred verb together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbInference {
    pub verb: HttpVerb,
    pub evidence: VerbEvidence,
}

/// What decided an auth requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvidence {
    /// The body reads the authenticated-user object (`req.user`)
    UserObject,
    /// The authentication middleware is referenced by name
    Middleware,
    /// No auth reference found
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthInference {
    pub required: bool,
    pub evidence: AuthEvidence,
}

/// The analyzer's model of one handler function.
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    /// `controller.method`
    pub handler_id: String,
    /// Bare method name, the route-binding key
    pub method_name: String,
    pub verb: VerbInference,
    pub summary: String,
    pub description: String,
    /// Distinct `req.query.<name>` accesses, in first-seen order
    pub query_params: Vec<String>,
    /// Literal status codes passed to `res.status(...)`
    pub responses: Vec<u16>,
    pub auth: AuthInference,
}

/// One operation in the final document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<String, Response>,
    /// Always serialized: an empty list means "explicitly public"
    pub security: Vec<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub schema: Schema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestBody {
    pub required: bool,
    pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MediaType {
    pub schema: Schema,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaType>>,
}

/// Paths keyed by normalized URL template, operations keyed by lower-case verb.
pub type PathMap = BTreeMap<String, BTreeMap<String, Operation>>;

/// Borrowed snapshot of a completed analysis, ready for document assembly.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisResults<'a> {
    pub endpoints: &'a BTreeMap<String, EndpointDescriptor>,
    pub paths: &'a PathMap,
}

const API_PREFIX: &str = "/api/v1";

/// Query names documented on any verb, not just GET.
const CROSS_CUTTING_QUERY: [&str; 6] = ["page", "limit", "sort", "sortBy", "format", "status"];

#[derive(Debug, Default)]
pub struct ApiAnalyzer {
    folders: Vec<FeatureFolder>,
    extractor: EnumExtractor,
    /// Descriptors keyed by bare method name; a later controller shadowing an
    /// earlier one's name wins, matching the by-name route binding
    endpoints: BTreeMap<String, EndpointDescriptor>,
    paths: PathMap,
}

impl ApiAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects the schema generator's folder table so tags and schema names
    /// resolve consistently.
    pub fn set_folders(&mut self, folders: Vec<FeatureFolder>) {
        self.folders = folders;
    }

    pub fn endpoints(&self) -> &BTreeMap<String, EndpointDescriptor> {
        &self.endpoints
    }

    pub fn paths(&self) -> &PathMap {
        &self.paths
    }

    /// Everything the analysis produced, as one snapshot.
    pub fn results(&self) -> AnalysisResults<'_> {
        AnalysisResults {
            endpoints: &self.endpoints,
            paths: &self.paths,
        }
    }

    /// Builds an endpoint descriptor for every handler in the directory.
    pub fn analyze_controllers(&mut self, dir: &Path) {
        let files = scanner::controller_files(dir);
        for path in &files {
            let source = match SourceFile::parse(path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping controller {}: {}", path.display(), e);
                    continue;
                }
            };
            let controller = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            for handler in source.handlers() {
                let descriptor = describe_handler(&controller, &handler.name, handler.doc.as_deref(), &handler.body_tokens);
                debug!(
                    "Endpoint {}: {} ({:?})",
                    descriptor.handler_id,
                    descriptor.verb.verb.as_str(),
                    descriptor.verb.evidence
                );
                self.endpoints
                    .insert(descriptor.method_name.clone(), descriptor);
            }
        }
        info!(
            "Analyzed {} controller files, {} endpoints",
            files.len(),
            self.endpoints.len()
        );
    }

    /// Binds every route registration to a descriptor and emits path items.
    ///
    /// Runs a fresh enum-extraction pass over both trees first, so rules from
    /// a previous run cannot leak in. Files whose path mentions `health` or
    /// `metrics` are intentionally undocumented and skipped.
    pub fn analyze_routes(&mut self, routes_dir: &Path, controllers_dir: &Path) {
        self.extractor.clear();
        self.extractor.extract_from_controllers(controllers_dir);
        self.extractor.extract_from_routes(routes_dir);

        let mut bound = 0usize;
        for route_file in scanner::route_files(routes_dir) {
            let path_str = route_file.path.to_string_lossy();
            if path_str.contains("health") || path_str.contains("metrics") {
                debug!("Skipping operational route file: {}", path_str);
                continue;
            }
            let source = match SourceFile::parse(&route_file.path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping route file {}: {}", route_file.path.display(), e);
                    continue;
                }
            };

            // Auth routes collapse onto the Authentication group
            let is_auth = route_file.schema_name.as_deref() == Some("Auth")
                || route_file.schema_name.as_deref() == Some("Authentication");
            let (prefix, schema_name) = if is_auth {
                ("/auth".to_string(), "Authentication".to_string())
            } else {
                (
                    route_file.prefix.clone(),
                    route_file.schema_name.clone().unwrap_or_default(),
                )
            };

            for call in source.route_calls() {
                let full_path = normalize_path(&prefix, &call.path);
                let operation = self.build_operation(&route_file.route_name, &schema_name, &call.path, &full_path, call.verb, call.handler_ref.as_deref());
                self.paths
                    .entry(full_path)
                    .or_default()
                    .insert(call.verb.key().to_string(), operation);
                bound += 1;
            }
        }
        info!("Bound {} route registrations into {} paths", bound, self.paths.len());
    }

    /// Enum rules applicable to one concrete operation.
    ///
    /// Performs the four-level precedence merge, then drops rules the
    /// operation cannot honor: path rules whose parameter is not in this
    /// route's own template, query rules on non-GET verbs (unless the name is
    /// cross-cutting), body rules on verbs without a request body.
    pub fn scoped_enums_for_endpoint(
        &self,
        path_template: &str,
        verb: HttpVerb,
        handler_ref: Option<&str>,
        route_name: &str,
    ) -> BTreeMap<(ParamKind, String), EnumRule> {
        let endpoint_key = format!("{}:{} {}", route_name, verb.as_str(), path_template);
        let merged = self
            .extractor
            .resolved_for(handler_ref, route_name, &endpoint_key);
        merged
            .into_iter()
            .filter(|((kind, name), _)| match kind {
                ParamKind::Path => template_has_param(path_template, name),
                ParamKind::Query => {
                    verb == HttpVerb::Get || CROSS_CUTTING_QUERY.contains(&name.as_str())
                }
                ParamKind::Body => verb.has_request_body(),
            })
            .collect()
    }

    fn build_operation(
        &self,
        route_name: &str,
        schema_name: &str,
        raw_path: &str,
        full_path: &str,
        verb: HttpVerb,
        handler_ref: Option<&str>,
    ) -> Operation {
        let method_name = handler_ref
            .and_then(|r| r.rsplit('.').next())
            .unwrap_or("")
            .to_string();
        let descriptor = self.endpoints.get(&method_name);
        if descriptor.is_none() && handler_ref.is_some() {
            debug!(
                "No descriptor for {}, synthesizing minimal operation",
                handler_ref.unwrap_or_default()
            );
        }

        let tag = self.tag_for_schema(schema_name);
        let rules = self.scoped_enums_for_endpoint(raw_path, verb, handler_ref, route_name);

        let (summary, description) = match descriptor {
            Some(d) => (d.summary.clone(), d.description.clone()),
            None => (
                humanize(&method_name),
                format!("Auto-generated endpoint for {}", method_name),
            ),
        };

        let parameters = self.build_parameters(raw_path, descriptor, &rules);
        let request_body = if verb.has_request_body() {
            Some(self.build_request_body(&method_name, &tag, schema_name, verb))
        } else {
            None
        };
        let responses = self.build_responses(descriptor, &tag, schema_name, raw_path);

        let requires_auth = match descriptor {
            Some(d) => d.auth.required,
            None => needs_authentication(full_path, &method_name),
        };
        let security = if requires_auth {
            let mut requirement = BTreeMap::new();
            requirement.insert("bearerAuth".to_string(), Vec::new());
            vec![requirement]
        } else {
            Vec::new()
        };

        Operation {
            tags: vec![tag],
            summary,
            description,
            parameters,
            request_body,
            responses,
            security,
        }
    }

    fn build_parameters(
        &self,
        raw_path: &str,
        descriptor: Option<&EndpointDescriptor>,
        rules: &BTreeMap<(ParamKind, String), EnumRule>,
    ) -> Vec<Parameter> {
        let mut parameters = Vec::new();

        for name in path_params(raw_path) {
            let mut schema = if name.contains("id") {
                Schema::integer().with_example(json!(1))
            } else {
                Schema::string().with_example(json!(format!("example-{}", name)))
            };
            if let Some(rule) = rules.get(&(ParamKind::Path, name.clone())) {
                schema.enum_values = Some(rule.values.clone());
                schema.example = rule.values.first().map(|v| json!(v));
                schema.schema_type = Some("string".to_string());
            }
            parameters.push(Parameter {
                name: name.clone(),
                location: "path".to_string(),
                required: true,
                schema,
                description: Some(format!("{} identifier", capitalize(&name))),
            });
        }

        // List endpoints are always paginated
        let lower = raw_path.to_lowercase();
        if lower.contains("list") || lower.contains("all") {
            let mut page = Schema::integer();
            page.default = Some(json!(1));
            page.minimum = Some(1);
            parameters.push(Parameter {
                name: "page".to_string(),
                location: "query".to_string(),
                required: false,
                schema: page,
                description: Some("Page number".to_string()),
            });
            let mut limit = Schema::integer();
            limit.default = Some(json!(10));
            limit.minimum = Some(1);
            limit.maximum = Some(100);
            parameters.push(Parameter {
                name: "limit".to_string(),
                location: "query".to_string(),
                required: false,
                schema: limit,
                description: Some("Items per page".to_string()),
            });
        }

        if let Some(descriptor) = descriptor {
            for name in &descriptor.query_params {
                if parameters.iter().any(|p| &p.name == name) {
                    continue;
                }
                let mut schema = Schema::string();
                let mut description = None;
                if let Some(rule) = rules.get(&(ParamKind::Query, name.clone())) {
                    schema.enum_values = Some(rule.values.clone());
                    schema.example = rule.values.first().map(|v| json!(v));
                    description = Some(rule.description.clone());
                }
                parameters.push(Parameter {
                    name: name.clone(),
                    location: "query".to_string(),
                    required: false,
                    schema,
                    description,
                });
            }
        }

        // Query rules with no observed accessor still become parameters
        for ((kind, name), rule) in rules {
            if *kind != ParamKind::Query || parameters.iter().any(|p| &p.name == name) {
                continue;
            }
            let mut schema = Schema::string().with_enum(rule.values.clone());
            schema.example = rule.values.first().map(|v| json!(v));
            parameters.push(Parameter {
                name: name.clone(),
                location: "query".to_string(),
                required: false,
                schema,
                description: Some(rule.description.clone()),
            });
        }

        parameters
    }

    fn build_request_body(
        &self,
        method_name: &str,
        tag: &str,
        schema_name: &str,
        verb: HttpVerb,
    ) -> RequestBody {
        let lower = method_name.to_lowercase();
        let ref_name = if lower.contains("register") {
            "UserRegistration".to_string()
        } else if lower.contains("login") {
            "UserLogin".to_string()
        } else {
            let singular = self
                .folders
                .iter()
                .find(|f| f.folder_name == schema_name)
                .map(|f| singularize(&f.folder_name))
                .unwrap_or_else(|| singularize(schema_name));
            if tag == "Authentication" || singular.is_empty() {
                // Auth payloads outside register/login have no entity schema
                "UserLogin".to_string()
            } else if lower.contains("update") || lower.contains("edit") || verb == HttpVerb::Put || verb == HttpVerb::Patch {
                format!("{}Update", singular)
            } else {
                format!("{}Create", singular)
            }
        };

        let mut content = BTreeMap::new();
        content.insert(
            "application/json".to_string(),
            MediaType {
                schema: definitions_ref(&ref_name),
            },
        );
        RequestBody {
            required: true,
            content,
        }
    }

    fn build_responses(
        &self,
        descriptor: Option<&EndpointDescriptor>,
        tag: &str,
        schema_name: &str,
        raw_path: &str,
    ) -> BTreeMap<String, Response> {
        let codes: Vec<u16> = match descriptor {
            Some(d) => d.responses.clone(),
            None => vec![200, 400, 401, 500],
        };

        let mut responses = BTreeMap::new();
        for code in codes {
            let schema = if (200..300).contains(&code) {
                self.success_schema(tag, schema_name, raw_path)
            } else {
                definitions_ref("ErrorResponse")
            };
            let mut content = BTreeMap::new();
            content.insert("application/json".to_string(), MediaType { schema });
            responses.insert(
                code.to_string(),
                Response {
                    description: status_text(code).to_string(),
                    content: Some(content),
                },
            );
        }
        responses
    }

    /// Success payload reference: login envelope for auth, the entity for a
    /// known feature, a paginated envelope for list paths, generic otherwise.
    fn success_schema(&self, tag: &str, schema_name: &str, raw_path: &str) -> Schema {
        if tag == "Authentication" {
            return definitions_ref("LoginResponse");
        }
        let Some(folder) = self.folders.iter().find(|f| f.folder_name == schema_name) else {
            return definitions_ref("SuccessResponse");
        };
        let lower = raw_path.to_lowercase();
        if lower.contains("list") || lower.contains("all") {
            definitions_ref(&format!("Paginated{}", folder.folder_name))
        } else {
            definitions_ref(&singularize(&folder.folder_name))
        }
    }

    /// Tag resolution: Auth collapses to Authentication, known folders use
    /// their tag, anything else passes through raw (or General when empty).
    fn tag_for_schema(&self, schema_name: &str) -> String {
        if schema_name == "Auth" || schema_name == "Authentication" {
            return "Authentication".to_string();
        }
        if let Some(folder) = self.folders.iter().find(|f| f.folder_name == schema_name) {
            return folder.tag_name.clone();
        }
        if schema_name.is_empty() {
            return "General".to_string();
        }
        schema_name.to_string()
    }
}

/// Builds a descriptor from one handler's name, doc comment, and body tokens.
fn describe_handler(
    controller: &str,
    name: &str,
    doc: Option<&str>,
    body: &[Token],
) -> EndpointDescriptor {
    let responses = status_codes(body);
    EndpointDescriptor {
        handler_id: format!("{}.{}", controller, name),
        method_name: name.to_string(),
        verb: infer_verb(name, body, &responses),
        summary: humanize(name),
        description: doc
            .and_then(doc_first_line)
            .unwrap_or_else(|| format!("Auto-generated endpoint for {}", name)),
        query_params: query_accesses(body),
        responses: if responses.is_empty() {
            vec![200, 400, 500]
        } else {
            responses
        },
        auth: infer_auth(body),
    }
}

// Statement-leading keywords only. Word boundaries keep column names like
// updated_at and clauses like OFFSET from registering as write statements.
static INSERT_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bINSERT\s+INTO\b").expect("statement pattern is valid"));
static UPDATE_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bUPDATE\s+\S+\s+SET\b").expect("statement pattern is valid"));
static DELETE_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bDELETE\s+FROM\b").expect("statement pattern is valid"));

/// Name-token heuristics, overridden by body evidence. SQL is only looked for
/// inside string and template literals, so a comment mentioning INSERT cannot
/// flip the verb.
fn infer_verb(name: &str, body: &[Token], status_codes: &[u16]) -> VerbInference {
    let sql_upper: String = body
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Str(s) | TokenKind::Template(s) => Some(s.to_uppercase()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    if status_codes.contains(&201) {
        return VerbInference {
            verb: HttpVerb::Post,
            evidence: VerbEvidence::StatusCode,
        };
    }
    if INSERT_STMT.is_match(&sql_upper) {
        return VerbInference {
            verb: HttpVerb::Post,
            evidence: VerbEvidence::SqlStatement,
        };
    }
    if UPDATE_STMT.is_match(&sql_upper) {
        return VerbInference {
            verb: HttpVerb::Put,
            evidence: VerbEvidence::SqlStatement,
        };
    }
    if DELETE_STMT.is_match(&sql_upper) {
        return VerbInference {
            verb: HttpVerb::Delete,
            evidence: VerbEvidence::SqlStatement,
        };
    }

    let lower = name.to_lowercase();
    let by_name = if ["create", "register", "add"].iter().any(|t| lower.contains(t)) {
        Some(HttpVerb::Post)
    } else if ["update", "edit", "modify"].iter().any(|t| lower.contains(t)) {
        Some(HttpVerb::Put)
    } else if ["delete", "remove"].iter().any(|t| lower.contains(t)) {
        Some(HttpVerb::Delete)
    } else if ["get", "find", "list"].iter().any(|t| lower.contains(t)) {
        Some(HttpVerb::Get)
    } else {
        None
    };
    match by_name {
        Some(verb) => VerbInference {
            verb,
            evidence: VerbEvidence::NameToken,
        },
        None => VerbInference {
            verb: HttpVerb::Get,
            evidence: VerbEvidence::Default,
        },
    }
}

fn infer_auth(body: &[Token]) -> AuthInference {
    for window in body.windows(3) {
        if let (TokenKind::Ident(a), TokenKind::Punct('.'), TokenKind::Ident(b)) =
            (&window[0].kind, &window[1].kind, &window[2].kind)
        {
            if a == "req" && b == "user" {
                return AuthInference {
                    required: true,
                    evidence: AuthEvidence::UserObject,
                };
            }
        }
    }
    let references_middleware = body
        .iter()
        .any(|t| matches!(&t.kind, TokenKind::Ident(w) if w == "authenticateToken"));
    if references_middleware {
        return AuthInference {
            required: true,
            evidence: AuthEvidence::Middleware,
        };
    }
    AuthInference {
        required: false,
        evidence: AuthEvidence::Absent,
    }
}

/// Distinct `req.query.<name>` accesses in first-seen order.
fn query_accesses(body: &[Token]) -> Vec<String> {
    let mut names = Vec::new();
    for window in body.windows(5) {
        if let (
            TokenKind::Ident(req),
            TokenKind::Punct('.'),
            TokenKind::Ident(query),
            TokenKind::Punct('.'),
            TokenKind::Ident(name),
        ) = (
            &window[0].kind,
            &window[1].kind,
            &window[2].kind,
            &window[3].kind,
            &window[4].kind,
        ) {
            if req == "req" && query == "query" && !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

/// Literal codes in `res.status(<n>)` calls, in source order, deduplicated.
fn status_codes(body: &[Token]) -> Vec<u16> {
    let mut codes = Vec::new();
    for window in body.windows(3) {
        if let (TokenKind::Ident(word), TokenKind::Punct('('), TokenKind::Number(num)) =
            (&window[0].kind, &window[1].kind, &window[2].kind)
        {
            if word == "status" {
                if let Ok(code) = num.parse::<u16>() {
                    if !codes.contains(&code) {
                        codes.push(code);
                    }
                }
            }
        }
    }
    codes
}

/// First non-tag text line of a doc comment.
fn doc_first_line(doc: &str) -> Option<String> {
    doc.lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .find(|line| !line.is_empty() && !line.starts_with('@'))
        .map(|line| line.to_string())
}

/// `getAllTeachers` -> `Get all teachers`.
fn humanize(name: &str) -> String {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in name.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(current.to_lowercase());
            current = String::new();
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    capitalize(&words.join(" "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Fixed status-code description table.
fn status_text(code: u16) -> &'static str {
    match code {
        200 => "Success",
        201 => "Created successfully",
        400 => "Bad Request - Invalid input",
        401 => "Unauthorized - Authentication required",
        403 => "Forbidden - Insufficient permissions",
        404 => "Not Found - Resource does not exist",
        409 => "Conflict - Resource already exists",
        500 => "Internal Server Error",
        _ => "Response",
    }
}

/// Public auth endpoints are the only operations assumed open when no
/// descriptor says otherwise.
fn needs_authentication(full_path: &str, method_name: &str) -> bool {
    if full_path.contains("/auth") {
        let public = [
            "login",
            "register",
            "forgotPassword",
            "resetPassword",
            "verifyEmail",
        ];
        return !public.contains(&method_name);
    }
    true
}

/// `/api/v1` + prefix + path, slashes collapsed, `:param` segments converted
/// to `{param}`. A bare `/` path contributes nothing.
fn normalize_path(prefix: &str, raw_path: &str) -> String {
    let tail = if raw_path == "/" { "" } else { raw_path };
    let joined = format!("{}{}{}", API_PREFIX, prefix, tail);
    let mut out = String::with_capacity(joined.len());
    for segment in joined.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        if let Some(name) = segment.strip_prefix(':') {
            out.push('{');
            out.push_str(name);
            out.push('}');
        } else {
            out.push_str(segment);
        }
    }
    if out.is_empty() {
        "/".to_string()
    } else {
        out
    }
}

/// Parameter names in a route template, `:name` or `{name}` style.
fn path_params(template: &str) -> Vec<String> {
    template
        .split('/')
        .filter_map(|segment| {
            segment.strip_prefix(':').map(|s| s.to_string()).or_else(|| {
                segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .map(|s| s.to_string())
            })
        })
        .collect()
}

fn template_has_param(template: &str, name: &str) -> bool {
    template.contains(&format!(":{}", name)) || template.contains(&format!("{{{}}}", name))
}

fn definitions_ref(name: &str) -> Schema {
    // Legacy namespace; the document builder rewrites it
    Schema {
        reference: Some(format!("#/definitions/{}", name)),
        ..Default::default()
    }
}
