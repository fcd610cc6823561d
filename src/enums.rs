use crate::annotation::{parse_tags, TagKind};
use crate::parser::{SourceFile, Token, TokenKind};
use crate::scanner;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// Scoped enum-rule extraction from controller and route sources.
///
/// Rules come from two places: annotation tags (the `@enum` family, see
/// [`crate::annotation`]) and two inline validation idioms commonly found in
/// handler bodies (`const allowedXxx = [...]` arrays and
/// `if (![...].includes(param))` guards).
///
/// All rules live in one table keyed by `(scope, scope key, kind, name)`.
/// Resolution for a concrete endpoint overlays the four scopes in precedence
/// order: endpoint > route > method > controller, overwriting per field.

/// Precedence scope of a rule, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnumScope {
    Controller,
    Method,
    Route,
    Endpoint,
}

/// Where the constrained value appears in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamKind {
    Path,
    Query,
    Body,
}

/// Table key for one rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnumKey {
    pub scope: EnumScope,
    /// Controller name, `controller.method`, route name, or endpoint id
    pub scope_key: String,
    pub kind: ParamKind,
    /// Parameter or field name
    pub name: String,
}

/// One discovered set of permitted values.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumRule {
    pub values: Vec<String>,
    pub description: String,
    pub scope: EnumScope,
    pub scope_key: String,
    pub kind: ParamKind,
}

/// Extractor state: one table, rebuilt per generation run.
#[derive(Debug, Default)]
pub struct EnumExtractor {
    rules: BTreeMap<EnumKey, EnumRule>,
}

impl EnumExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the table. Call before re-scanning a source tree so rules from a
    /// previous pass cannot leak into the next one.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// The full rule table.
    pub fn rules(&self) -> &BTreeMap<EnumKey, EnumRule> {
        &self.rules
    }

    /// Scans controller files for controller- and method-scoped rules.
    ///
    /// A comment block is controller-level if it appears before the first
    /// handler in the file; every other annotation is attributed to the handler
    /// whose doc comment or body contains it. Missing directory is a no-op.
    pub fn extract_from_controllers(&mut self, dir: &Path) {
        for path in scanner::controller_files(dir) {
            let source = match SourceFile::parse(&path) {
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

            for comment in source.leading_block_comments() {
                for tag in parse_tags(&comment) {
                    let Some(kind) = controller_tag_kind(tag.kind) else {
                        continue;
                    };
                    self.insert(EnumScope::Controller, &controller, kind, &tag.field, tag.values, tag.description);
                }
            }

            for handler in source.handlers() {
                let scope_key = format!("{}.{}", controller, handler.name);
                let mut annotated = handler.doc.clone().unwrap_or_default();
                annotated.push('\n');
                annotated.push_str(&handler.body_text);
                for tag in parse_tags(&annotated) {
                    let Some(kind) = controller_tag_kind(tag.kind) else {
                        continue;
                    };
                    self.insert(EnumScope::Method, &scope_key, kind, &tag.field, tag.values, tag.description);
                }
                self.extract_inline(&handler.body_tokens, &handler.body_text, &scope_key);
            }
        }
    }

    /// Scans route files for route- and endpoint-scoped rules.
    ///
    /// `@routeEnum` applies to every operation in the file; `@endpointEnum`
    /// only to the registration whose nearest preceding comment block carries
    /// the tag. Path-vs-query classification checks the path template: the
    /// whole file's for route scope, the registration's own for endpoint scope.
    pub fn extract_from_routes(&mut self, dir: &Path) {
        for route_file in scanner::route_files(dir) {
            let source = match SourceFile::parse(&route_file.path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping route file {}: {}", route_file.path.display(), e);
                    continue;
                }
            };

            for token in &source.tokens {
                let TokenKind::BlockComment(body) = &token.kind else {
                    continue;
                };
                for tag in parse_tags(body) {
                    if tag.kind != TagKind::RouteEnum {
                        continue;
                    }
                    let kind = template_param_kind(&source.text, &tag.field);
                    self.insert(EnumScope::Route, &route_file.route_name, kind, &tag.field, tag.values, tag.description);
                }
            }

            for call in source.route_calls() {
                let Some(doc) = &call.doc else { continue };
                let endpoint_key =
                    format!("{}:{} {}", route_file.route_name, call.verb.as_str(), call.path);
                for tag in parse_tags(doc) {
                    if tag.kind != TagKind::EndpointEnum {
                        continue;
                    }
                    let kind = template_param_kind(&call.path, &tag.field);
                    self.insert(EnumScope::Endpoint, &endpoint_key, kind, &tag.field, tag.values, tag.description);
                }
            }
        }
    }

    /// Resolves the rules applicable to one endpoint, in precedence order.
    ///
    /// Returns a map from `(kind, name)` to the winning rule. The merge is a
    /// per-field shallow overwrite: endpoint over route over method over
    /// controller.
    pub fn resolved_for(
        &self,
        handler_ref: Option<&str>,
        route_name: &str,
        endpoint_key: &str,
    ) -> BTreeMap<(ParamKind, String), EnumRule> {
        let mut merged = BTreeMap::new();

        if let Some(handler_ref) = handler_ref {
            if let Some((controller, _)) = handler_ref.split_once('.') {
                self.overlay(&mut merged, EnumScope::Controller, controller);
            }
            self.overlay(&mut merged, EnumScope::Method, handler_ref);
        }
        self.overlay(&mut merged, EnumScope::Route, route_name);
        self.overlay(&mut merged, EnumScope::Endpoint, endpoint_key);

        merged
    }

    fn overlay(
        &self,
        merged: &mut BTreeMap<(ParamKind, String), EnumRule>,
        scope: EnumScope,
        scope_key: &str,
    ) {
        for (key, rule) in &self.rules {
            if key.scope == scope && key.scope_key == scope_key {
                merged.insert((key.kind, key.name.clone()), rule.clone());
            }
        }
    }

    fn insert(
        &mut self,
        scope: EnumScope,
        scope_key: &str,
        kind: ParamKind,
        name: &str,
        values: Vec<String>,
        description: String,
    ) {
        debug!(
            "Enum rule {:?}/{} {:?} {} = {:?}",
            scope, scope_key, kind, name, values
        );
        self.rules.insert(
            EnumKey {
                scope,
                scope_key: scope_key.to_string(),
                kind,
                name: name.to_string(),
            },
            EnumRule {
                values,
                description,
                scope,
                scope_key: scope_key.to_string(),
                kind,
            },
        );
    }

    /// Lower-confidence rules inferred from validation idioms in a handler body.
    fn extract_inline(&mut self, body_tokens: &[Token], body_text: &str, scope_key: &str) {
        self.extract_allowed_arrays(body_tokens, scope_key);
        self.extract_includes_guards(body_tokens, body_text, scope_key);
    }

    /// `const allowedKeys = ["a", "b"]` - the identifier tail names the field,
    /// with a trailing `keys` collapsed to `key`.
    fn extract_allowed_arrays(&mut self, tokens: &[Token], scope_key: &str) {
        let mut i = 0;
        while i + 3 < tokens.len() {
            let is_match = matches!(&tokens[i].kind, TokenKind::Ident(w) if w == "const")
                && matches!(&tokens[i + 2].kind, TokenKind::Punct('='))
                && matches!(&tokens[i + 3].kind, TokenKind::Punct('['));
            if !is_match {
                i += 1;
                continue;
            }
            let TokenKind::Ident(name) = &tokens[i + 1].kind else {
                i += 1;
                continue;
            };
            if !name.to_lowercase().starts_with("allowed") || name.len() <= "allowed".len() {
                i += 1;
                continue;
            }

            let values = collect_string_array(&tokens[i + 4..]);
            if !values.is_empty() {
                let field = name["allowed".len()..]
                    .to_lowercase()
                    .replacen("keys", "key", 1);
                let description = format!("Allowed {} values", field);
                self.insert(EnumScope::Method, scope_key, ParamKind::Path, &field, values, description);
            }
            i += 4;
        }
    }

    /// `if (!["a", "b"].includes(param))` guards.
    fn extract_includes_guards(&mut self, tokens: &[Token], body_text: &str, scope_key: &str) {
        let mut i = 0;
        while i + 1 < tokens.len() {
            let is_open = matches!(&tokens[i].kind, TokenKind::Punct('!'))
                && matches!(&tokens[i + 1].kind, TokenKind::Punct('['));
            if !is_open {
                i += 1;
                continue;
            }
            let values = collect_string_array(&tokens[i + 2..]);
            // Locate the closing bracket, then expect `.includes(<ident>)`
            let Some(close) = tokens[i + 1..]
                .iter()
                .position(|t| t.kind == TokenKind::Punct(']'))
                .map(|p| p + i + 1)
            else {
                i += 1;
                continue;
            };
            let tail = &tokens[close + 1..];
            let param = match (tail.first(), tail.get(1), tail.get(2), tail.get(3), tail.get(4)) {
                (
                    Some(dot),
                    Some(includes),
                    Some(open_paren),
                    Some(arg),
                    Some(close_paren),
                ) if matches!(dot.kind, TokenKind::Punct('.'))
                    && matches!(&includes.kind, TokenKind::Ident(w) if w == "includes")
                    && matches!(open_paren.kind, TokenKind::Punct('('))
                    && matches!(close_paren.kind, TokenKind::Punct(')')) =>
                {
                    match &arg.kind {
                        TokenKind::Ident(name) => Some(name.clone()),
                        _ => None,
                    }
                }
                _ => None,
            };

            if let Some(param) = param {
                if !values.is_empty() {
                    let kind = if body_text.contains(&format!("req.params.{}", param))
                        || body_text.contains(&format!("/:{}", param))
                        || body_text.contains(&format!("/{{{}}}", param))
                    {
                        ParamKind::Path
                    } else {
                        ParamKind::Query
                    };
                    let description = format!("Valid {} values", param);
                    self.insert(EnumScope::Method, scope_key, kind, &param, values, description);
                }
            }
            i = close + 1;
        }
    }
}

fn controller_tag_kind(tag: TagKind) -> Option<ParamKind> {
    match tag {
        TagKind::Enum => Some(ParamKind::Body),
        TagKind::ParamEnum => Some(ParamKind::Path),
        TagKind::QueryEnum => Some(ParamKind::Query),
        // Route- and endpoint-scoped tags have no meaning in controllers
        TagKind::RouteEnum | TagKind::EndpointEnum => None,
    }
}

/// Path-kind when the template mentions the field as `/:name` or `{name}`.
fn template_param_kind(template: &str, field: &str) -> ParamKind {
    if template.contains(&format!(":{}", field)) || template.contains(&format!("{{{}}}", field)) {
        ParamKind::Path
    } else {
        ParamKind::Query
    }
}

/// String literals up to the closing `]` of an array literal.
fn collect_string_array(tokens: &[Token]) -> Vec<String> {
    let mut values = Vec::new();
    for token in tokens {
        match &token.kind {
            TokenKind::Str(value) => {
                if !value.is_empty() {
                    values.push(value.clone());
                }
            }
            TokenKind::Punct(',') => {}
            TokenKind::Punct(']') => break,
            // Anything else means this is not a plain string array
            _ => return Vec::new(),
        }
    }
    values
}
