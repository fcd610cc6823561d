use once_cell::sync::Lazy;
use regex::Regex;

/// The `@enum`-family annotation grammar.
///
/// Inside a `/** ... */` block, one tag per line:
///
/// ```text
/// @<kind> <fieldName>: [val1, val2, ...] - <human description>
/// ```
///
/// where `<kind>` is one of `enum`, `paramEnum`, `queryEnum`, `routeEnum`,
/// `endpointEnum`. Values are comma-separated and optionally quoted. A line
/// that does not fully match the grammar (unbalanced brackets, missing
/// description separator) is skipped; it never aborts the scan.

/// Which annotation tag introduced a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `@enum` - a body field constraint
    Enum,
    /// `@paramEnum` - a path parameter constraint
    ParamEnum,
    /// `@queryEnum` - a query parameter constraint
    QueryEnum,
    /// `@routeEnum` - applies to every operation in the route file
    RouteEnum,
    /// `@endpointEnum` - applies to a single registration
    EndpointEnum,
}

impl TagKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "enum" => Some(Self::Enum),
            "paramEnum" => Some(Self::ParamEnum),
            "queryEnum" => Some(Self::QueryEnum),
            "routeEnum" => Some(Self::RouteEnum),
            "endpointEnum" => Some(Self::EndpointEnum),
            _ => None,
        }
    }
}

/// One parsed annotation tag.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumTag {
    pub kind: TagKind,
    pub field: String,
    pub values: Vec<String>,
    pub description: String,
}

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Bracket contents stay on one line; `-` separates values from description.
    Regex::new(r"@(enum|paramEnum|queryEnum|routeEnum|endpointEnum)\s+(\w+)\s*:\s*\[([^\]\n]*)\]\s*-\s*(.*)")
        .expect("tag pattern is valid")
});

/// Parses every well-formed tag in a comment body (or any text).
pub fn parse_tags(text: &str) -> Vec<EnumTag> {
    TAG_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let kind = TagKind::from_name(&caps[1])?;
            let values = split_values(&caps[3]);
            if values.is_empty() {
                return None;
            }
            Some(EnumTag {
                kind,
                field: caps[2].to_string(),
                values,
                description: caps[4].trim().to_string(),
            })
        })
        .collect()
}

/// Splits a bracketed value list: comma-separated, trimmed, quotes stripped,
/// empty tokens discarded.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
