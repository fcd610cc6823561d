use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Tokenizer and pattern matcher for JavaScript-flavoured source files.
///
/// Controller and route files are plain JavaScript, so they are scanned with a
/// hand-written lexer rather than a full ECMAScript parser: the output is a flat
/// stream of tagged tokens (comments, string/template literals, identifiers,
/// numbers, punctuation) over which brace-depth matching locates the two shapes
/// the generator cares about:
///
/// - handler functions: `const name = async (req, res) => { ... }`
/// - route registrations: `router.<verb>("<path>", ...middleware, controller.method)`
///
/// String, template, and regex literals are consumed as single tokens, so braces
/// or slashes inside them can never confuse the depth tracking.
///
/// # Example
///
/// ```no_run
/// use openapi_from_express::parser::SourceFile;
/// use std::path::Path;
///
/// let source = SourceFile::parse(Path::new("controllers/userController.js")).unwrap();
/// println!("found {} handlers", source.handlers().len());
/// ```
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the source file
    pub path: PathBuf,
    /// Full file text
    pub text: String,
    /// Token stream produced by the lexer
    pub tokens: Vec<Token>,
}

/// One lexical token with its byte span in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Token variants. Literal contents are stored with delimiters stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `/* ... */` comment body
    BlockComment(String),
    /// `// ...` comment body
    LineComment(String),
    /// Single- or double-quoted string contents
    Str(String),
    /// Backtick template literal raw contents, interpolations included verbatim
    Template(String),
    /// Regex literal, contents not needed downstream
    Regex,
    Ident(String),
    Number(String),
    Punct(char),
}

/// HTTP verbs recognized in `router.<verb>(...)` registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpVerb {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            _ => None,
        }
    }

    /// Upper-case wire form, e.g. `GET`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Lower-case form used as the operation key in a path item.
    pub fn key(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
        }
    }

    /// Whether requests with this verb carry a body.
    pub fn has_request_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

/// A handler function found in a controller file.
#[derive(Debug, Clone)]
pub struct Handler {
    /// The bound constant's name, e.g. `getAllTeachers`
    pub name: String,
    /// Block comment immediately preceding the binding, if any
    pub doc: Option<String>,
    /// Body text including the outer braces
    pub body_text: String,
    /// Tokens of the body, outer braces excluded
    pub body_tokens: Vec<Token>,
    /// Byte offset where the `const` keyword starts
    pub start: usize,
}

/// A `router.<verb>(path, ...)` registration found in a route file.
#[derive(Debug, Clone)]
pub struct RouteCall {
    pub verb: HttpVerb,
    /// The literal path argument, e.g. `/:id`
    pub path: String,
    /// Trailing `controller.method` reference from the argument list
    pub handler_ref: Option<String>,
    /// Nearest preceding block comment, if only comments separate it from the call
    pub doc: Option<String>,
}

impl SourceFile {
    /// Reads and tokenizes a source file.
    ///
    /// Tokenization itself cannot fail; only the file read can.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn parse(path: &Path) -> Result<SourceFile> {
        debug!("Tokenizing file: {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::from_text(path.to_path_buf(), text))
    }

    /// Tokenizes already-loaded source text.
    pub fn from_text(path: PathBuf, text: String) -> SourceFile {
        let tokens = tokenize(&text);
        SourceFile { path, text, tokens }
    }

    /// Parses many files, skipping unreadable ones with a warning.
    pub fn parse_files(paths: &[PathBuf]) -> Vec<SourceFile> {
        paths
            .iter()
            .filter_map(|path| match Self::parse(path) {
                Ok(source) => Some(source),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .collect()
    }

    /// Finds every top-level `const name = async (...) => { ... }` binding.
    pub fn handlers(&self) -> Vec<Handler> {
        let mut handlers = Vec::new();
        let toks = &self.tokens;
        let mut depth = 0i32;
        let mut i = 0;
        while i < toks.len() {
            match &toks[i].kind {
                TokenKind::Punct('{') => depth += 1,
                TokenKind::Punct('}') => depth -= 1,
                TokenKind::Ident(word) if depth == 0 && word == "const" => {
                    if let Some(handler) = self.match_handler_at(i) {
                        // Skip past the body so nested arrows are not re-matched
                        let next = handler.1;
                        handlers.push(handler.0);
                        i = next;
                        continue;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        handlers
    }

    /// Tries to match a handler binding starting at the `const` token.
    /// Returns the handler and the token index just past its closing brace.
    fn match_handler_at(&self, const_idx: usize) -> Option<(Handler, usize)> {
        let toks = &self.tokens;
        let sig = significant_from(toks, const_idx);
        // const <name> = async ( ... ) => {
        let name = match &toks[*sig.get(1)?].kind {
            TokenKind::Ident(name) => name.clone(),
            _ => return None,
        };
        if !matches!(toks[*sig.get(2)?].kind, TokenKind::Punct('=')) {
            return None;
        }
        match &toks[*sig.get(3)?].kind {
            TokenKind::Ident(word) if word == "async" => {}
            _ => return None,
        }
        let open_paren = *sig.get(4)?;
        if !matches!(toks[open_paren].kind, TokenKind::Punct('(')) {
            return None;
        }
        let close_paren = matching(toks, open_paren, '(', ')')?;
        // => {
        let after = significant_from(toks, close_paren + 1);
        if !matches!(toks[*after.first()?].kind, TokenKind::Punct('='))
            || !matches!(toks[*after.get(1)?].kind, TokenKind::Punct('>'))
        {
            return None;
        }
        let open_brace = *after.get(2)?;
        if !matches!(toks[open_brace].kind, TokenKind::Punct('{')) {
            return None;
        }
        let close_brace = matching(toks, open_brace, '{', '}')?;

        let body_text = self.text[toks[open_brace].start..toks[close_brace].end].to_string();
        let body_tokens = toks[open_brace + 1..close_brace].to_vec();
        let doc = preceding_block_comment(toks, const_idx);

        Some((
            Handler {
                name,
                doc,
                body_text,
                body_tokens,
                start: toks[const_idx].start,
            },
            close_brace + 1,
        ))
    }

    /// Finds every `router.<verb>("<path>", ...)` registration.
    pub fn route_calls(&self) -> Vec<RouteCall> {
        let toks = &self.tokens;
        let mut calls = Vec::new();
        let mut i = 0;
        while i + 4 < toks.len() {
            let matched = match (&toks[i].kind, &toks[i + 1].kind, &toks[i + 2].kind) {
                (TokenKind::Ident(obj), TokenKind::Punct('.'), TokenKind::Ident(verb))
                    if obj == "router" =>
                {
                    HttpVerb::from_name(verb)
                }
                _ => None,
            };
            let Some(verb) = matched else {
                i += 1;
                continue;
            };
            if !matches!(toks[i + 3].kind, TokenKind::Punct('(')) {
                i += 1;
                continue;
            }
            let TokenKind::Str(path) = &toks[i + 4].kind else {
                i += 1;
                continue;
            };
            let Some(close) = matching(toks, i + 3, '(', ')') else {
                i += 1;
                continue;
            };
            let handler_ref = last_dotted_ref(&toks[i + 5..close]);
            let doc = preceding_block_comment(toks, i);
            calls.push(RouteCall {
                verb,
                path: path.clone(),
                handler_ref,
                doc,
            });
            i = close + 1;
        }
        calls
    }

    /// Block comments positioned before the first handler binding.
    ///
    /// These carry controller-level annotations. The first handler's own doc
    /// block is excluded: it belongs to the handler, not the controller. A file
    /// with no handlers contributes all of its block comments.
    pub fn leading_block_comments(&self) -> Vec<String> {
        let first_handler = self.handlers().first().map(|h| h.start);
        let Some(first_start) = first_handler else {
            return self
                .tokens
                .iter()
                .filter_map(|t| match &t.kind {
                    TokenKind::BlockComment(body) => Some(body.clone()),
                    _ => None,
                })
                .collect();
        };
        let doc_idx = self
            .tokens
            .iter()
            .position(|t| t.start == first_start)
            .and_then(|i| preceding_block_comment_idx(&self.tokens, i));
        self.tokens
            .iter()
            .enumerate()
            .filter(|(i, t)| t.start < first_start && Some(*i) != doc_idx)
            .filter_map(|(_, t)| match &t.kind {
                TokenKind::BlockComment(body) => Some(body.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Indices of the next few non-comment tokens starting at `from` (inclusive).
fn significant_from(toks: &[Token], from: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(8);
    let mut i = from;
    while i < toks.len() && out.len() < 8 {
        match toks[i].kind {
            TokenKind::BlockComment(_) | TokenKind::LineComment(_) => {}
            _ => out.push(i),
        }
        i += 1;
    }
    out
}

/// Index of the punct matching the opener at `open_idx`, by depth counting.
fn matching(toks: &[Token], open_idx: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0i32;
    for (i, tok) in toks.iter().enumerate().skip(open_idx) {
        match tok.kind {
            TokenKind::Punct(c) if c == open => depth += 1,
            TokenKind::Punct(c) if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// The last `a.b` identifier pair in an argument token slice.
///
/// Middleware arguments may also contain dotted references (e.g.
/// `validate(schemas.update)`), so the trailing pair is taken: the bound
/// handler is conventionally the final argument.
fn last_dotted_ref(args: &[Token]) -> Option<String> {
    let mut found = None;
    let mut i = 0;
    while i + 2 < args.len() {
        if let (TokenKind::Ident(a), TokenKind::Punct('.'), TokenKind::Ident(b)) =
            (&args[i].kind, &args[i + 1].kind, &args[i + 2].kind)
        {
            found = Some(format!("{}.{}", a, b));
            i += 3;
            continue;
        }
        i += 1;
    }
    found
}

/// Nearest block comment before token `idx`, provided only comments intervene.
///
/// This is the documented nearest-preceding-block attribution: a comment block
/// shared by two registrations is attributed to the first one only, because the
/// first registration's tokens sit between the comment and the second call.
fn preceding_block_comment(toks: &[Token], idx: usize) -> Option<String> {
    let i = preceding_block_comment_idx(toks, idx)?;
    match &toks[i].kind {
        TokenKind::BlockComment(body) => Some(body.clone()),
        _ => None,
    }
}

/// Token index of the comment returned by [`preceding_block_comment`].
fn preceding_block_comment_idx(toks: &[Token], idx: usize) -> Option<usize> {
    for (i, tok) in toks[..idx].iter().enumerate().rev() {
        match &tok.kind {
            TokenKind::LineComment(_) => continue,
            TokenKind::BlockComment(_) => return Some(i),
            _ => return None,
        }
    }
    None
}

/// Tokenizes source text. Never fails: unrecognized bytes become punctuation.
pub fn tokenize(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    // Last non-comment token kind, for the regex-vs-division decision
    let mut prev: Option<TokenKind> = None;

    while i < bytes.len() {
        let c = bytes[i] as char;
        let start = i;

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if c == '/' && i + 1 < bytes.len() {
            match bytes[i + 1] as char {
                '/' => {
                    let end = memchr_from(bytes, i + 2, b'\n').unwrap_or(bytes.len());
                    tokens.push(Token {
                        kind: TokenKind::LineComment(text[i + 2..end].to_string()),
                        start,
                        end,
                    });
                    i = end;
                    continue;
                }
                '*' => {
                    let end = find_subslice(bytes, i + 2, b"*/")
                        .map(|p| p + 2)
                        .unwrap_or(bytes.len());
                    let body_end = end.saturating_sub(2).max(i + 2);
                    tokens.push(Token {
                        kind: TokenKind::BlockComment(text[i + 2..body_end].to_string()),
                        start,
                        end,
                    });
                    i = end;
                    continue;
                }
                _ => {}
            }
        }

        if c == '"' || c == '\'' {
            let (value, end) = scan_quoted(text, i, c);
            let kind = TokenKind::Str(value);
            prev = Some(kind.clone());
            tokens.push(Token { kind, start, end });
            i = end;
            continue;
        }

        if c == '`' {
            let (value, end) = scan_template(text, i);
            let kind = TokenKind::Template(value);
            prev = Some(kind.clone());
            tokens.push(Token { kind, start, end });
            i = end;
            continue;
        }

        if c == '/' && regex_can_follow(&prev) {
            let end = scan_regex(bytes, i);
            prev = Some(TokenKind::Regex);
            tokens.push(Token {
                kind: TokenKind::Regex,
                start,
                end,
            });
            i = end;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' || c == '$' {
            let mut end = i + 1;
            while end < bytes.len() {
                let b = bytes[end] as char;
                if b.is_ascii_alphanumeric() || b == '_' || b == '$' {
                    end += 1;
                } else {
                    break;
                }
            }
            let kind = TokenKind::Ident(text[i..end].to_string());
            prev = Some(kind.clone());
            tokens.push(Token { kind, start, end });
            i = end;
            continue;
        }

        if c.is_ascii_digit() {
            let mut end = i + 1;
            while end < bytes.len()
                && ((bytes[end] as char).is_ascii_alphanumeric() || bytes[end] == b'.')
            {
                end += 1;
            }
            let kind = TokenKind::Number(text[i..end].to_string());
            prev = Some(kind.clone());
            tokens.push(Token { kind, start, end });
            i = end;
            continue;
        }

        let kind = TokenKind::Punct(c);
        prev = Some(kind.clone());
        tokens.push(Token {
            kind,
            start,
            end: i + c.len_utf8(),
        });
        i += c.len_utf8();
    }

    tokens
}

/// Whether a `/` in this position starts a regex literal rather than division.
fn regex_can_follow(prev: &Option<TokenKind>) -> bool {
    match prev {
        None => true,
        Some(TokenKind::Punct(c)) => !matches!(c, ')' | ']' | '}'),
        Some(TokenKind::Ident(word)) => matches!(
            word.as_str(),
            "return" | "typeof" | "case" | "in" | "of" | "new" | "delete" | "void" | "instanceof"
        ),
        _ => false,
    }
}

fn scan_quoted(text: &str, open: usize, quote: char) -> (String, usize) {
    let bytes = text.as_bytes();
    let mut i = open + 1;
    let mut value = String::new();
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c == '\\' && i + 1 < bytes.len() {
            // The escaped character may be multi-byte; consume it whole
            let esc = text[i + 1..].chars().next().unwrap_or('\\');
            value.push(esc);
            i += 1 + esc.len_utf8();
            continue;
        }
        if c == quote {
            return (value, i + 1);
        }
        // Unterminated on newline: give back what was collected
        if c == '\n' {
            return (value, i);
        }
        let ch = text[i..].chars().next().unwrap_or(c);
        value.push(ch);
        i += ch.len_utf8();
    }
    (value, bytes.len())
}

/// Scans a backtick template literal, keeping `${...}` interpolations verbatim.
/// Braces inside interpolations are depth-counted so a nested `}` cannot end
/// the interpolation early; strings inside interpolations are skipped whole.
fn scan_template(text: &str, open: usize) -> (String, usize) {
    let bytes = text.as_bytes();
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => {
                return (text[open + 1..i].to_string(), i + 1);
            }
            b'$' if i + 1 < bytes.len() && bytes[i + 1] == b'{' => {
                let mut depth = 1;
                i += 2;
                while i < bytes.len() && depth > 0 {
                    match bytes[i] as char {
                        '{' => {
                            depth += 1;
                            i += 1;
                        }
                        '}' => {
                            depth -= 1;
                            i += 1;
                        }
                        '"' | '\'' => {
                            let (_, end) = scan_quoted(text, i, bytes[i] as char);
                            i = end;
                        }
                        _ => i += 1,
                    }
                }
            }
            _ => i += 1,
        }
    }
    (text[open + 1..].to_string(), bytes.len())
}

fn scan_regex(bytes: &[u8], open: usize) -> usize {
    let mut i = open + 1;
    let mut in_class = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => {
                // Trailing flags
                i += 1;
                while i < bytes.len() && (bytes[i] as char).is_ascii_alphabetic() {
                    i += 1;
                }
                return i;
            }
            b'\n' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn memchr_from(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == needle).map(|p| p + from)
}

fn find_subslice(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &str) -> SourceFile {
        SourceFile::from_text(PathBuf::from("test.js"), text.to_string())
    }

    #[test]
    fn test_tokenize_strings_and_comments() {
        let tokens = tokenize(r#"const x = "hello"; // tail
/* block */ const y = 'it\'s';"#);
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Str("hello".to_string())));
        assert!(tokens
            .iter()
            .any(|t| matches!(&t.kind, TokenKind::LineComment(c) if c.contains("tail"))));
        assert!(tokens
            .iter()
            .any(|t| matches!(&t.kind, TokenKind::BlockComment(c) if c.contains("block"))));
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Str("it's".to_string())));
    }

    #[test]
    fn test_tokenize_string_with_escaped_multibyte_char() {
        let tokens = tokenize("const msg = 'caf\\é rating'");
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Str("café rating".to_string())));
    }

    #[test]
    fn test_tokenize_template_with_interpolation_braces() {
        let tokens = tokenize("const q = `UPDATE t SET ${fields.join(\", \")} WHERE id = ?`");
        let template = tokens
            .iter()
            .find_map(|t| match &t.kind {
                TokenKind::Template(body) => Some(body.clone()),
                _ => None,
            })
            .expect("template token");
        assert!(template.contains("UPDATE t SET"));
        assert!(template.contains("WHERE id = ?"));
    }

    #[test]
    fn test_tokenize_regex_literal_not_division() {
        let tokens = tokenize("const re = /ab{2}\\/c/g; const half = total / 2;");
        let regex_count = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Regex)
            .count();
        assert_eq!(regex_count, 1);
        // Braces inside the regex must not appear as punct tokens
        let brace_count = tokens
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Punct('{') | TokenKind::Punct('}')))
            .count();
        assert_eq!(brace_count, 0);
    }

    #[test]
    fn test_handlers_extracted_with_doc() {
        let src = source(
            r#"
/**
 * Get all teachers
 */
const getAllTeachers = async (req, res) => {
  const rows = await executeQuery("SELECT * FROM teachers")
  res.status(200).json({ rows })
}

const helper = (x) => x + 1

/** Create one */
const createTeacher = async (req, res) => {
  await executeQuery("INSERT INTO teachers (name) VALUES (?)")
  res.status(201).json({})
}
"#,
        );
        let handlers = src.handlers();
        assert_eq!(handlers.len(), 2);
        assert_eq!(handlers[0].name, "getAllTeachers");
        assert!(handlers[0].doc.as_ref().unwrap().contains("Get all teachers"));
        assert_eq!(handlers[1].name, "createTeacher");
        assert!(handlers[1].body_text.contains("INSERT INTO"));
    }

    #[test]
    fn test_handler_body_with_nested_braces() {
        let src = source(
            r#"
const updateProfile = async (req, res) => {
  if (name !== undefined) {
    updateFields.push("name = ?")
  }
  res.json({ data: { nested: true } })
}
const after = async (req, res) => {
  res.json({})
}
"#,
        );
        let handlers = src.handlers();
        assert_eq!(handlers.len(), 2);
        assert!(handlers[0].body_text.ends_with('}'));
        assert!(handlers[0].body_text.contains("nested"));
        assert!(!handlers[0].body_text.contains("after"));
    }

    #[test]
    fn test_route_calls_take_trailing_reference() {
        let src = source(
            r#"
router.put("/profile", validate(schemas.updateTeacher), teacherController.updateProfile)
router.get("/list", authorize("admin"), teacherController.getAllTeachers)
"#,
        );
        let calls = src.route_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].verb, HttpVerb::Put);
        assert_eq!(calls[0].path, "/profile");
        assert_eq!(
            calls[0].handler_ref.as_deref(),
            Some("teacherController.updateProfile")
        );
        assert_eq!(
            calls[1].handler_ref.as_deref(),
            Some("teacherController.getAllTeachers")
        );
    }

    #[test]
    fn test_route_call_doc_attribution() {
        let src = source(
            r#"
/**
 * @endpointEnum status: [draft, published] - Lifecycle state
 */
router.get("/by-status/:status", ctrl.byStatus)
router.get("/list", ctrl.list)
"#,
        );
        let calls = src.route_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].doc.as_ref().unwrap().contains("endpointEnum"));
        // Shared blocks attach to the nearest following call only
        assert!(calls[1].doc.is_none());
    }

    #[test]
    fn test_leading_block_comments_stop_at_first_handler() {
        let src = source(
            r#"
/** @enum status: [active, inactive] - Controller wide */

/** Get the thing */
const getThing = async (req, res) => {
  res.json({})
}
/** @enum other: [a, b] - After a handler */
const updateThing = async (req, res) => {
  res.json({})
}
"#,
        );
        let leading = src.leading_block_comments();
        // The handler's own doc block is not controller-level
        assert_eq!(leading.len(), 1);
        assert!(leading[0].contains("Controller wide"));
    }

    #[test]
    fn test_nonexistent_file() {
        let result = SourceFile::parse(Path::new("/nonexistent/file.js"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file"));
    }

    #[test]
    fn test_parse_files_skips_unreadable() {
        let sources = SourceFile::parse_files(&[PathBuf::from("/nonexistent/a.js")]);
        assert!(sources.is_empty());
    }
}
