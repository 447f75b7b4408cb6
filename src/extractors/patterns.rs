//! Compiled regex patterns shared by the extractors.
//!
//! Every pattern is purely lexical and runs over the raw file text.

use regex::Regex;
use std::sync::OnceLock;

/// Identifiers accepted in front of a route verb (`app.get(...)`, `router.use(...)`).
pub const ROUTE_RECEIVERS: &[&str] = &["router", "app"];

/// Quote characters accepted around literals.
pub const QUOTES: &[char] = &['\'', '"', '`'];

/// `<receiver>.<verb>('<literal>'`, case-insensitive. Groups: receiver, verb, literal.
pub fn route_declaration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let verbs: Vec<&str> = super::routes::Verb::ALL.iter().map(|v| v.as_str()).collect();
        let pattern = format!(
            r#"(?i)({})\.({})\(['"`]([^'"`]+)['"`]"#,
            ROUTE_RECEIVERS.join("|"),
            verbs.join("|")
        );
        Regex::new(&pattern).expect("valid route regex")
    })
}

/// Any quoted literal that starts with `/` and holds no whitespace, quotes or `;`.
pub fn bare_path_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"['"`]/[^\s"'`;]+['"`]"#).expect("valid url regex"))
}

/// `req.headers['<name>']`
pub fn header_access() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"req\.headers\[['"`]([a-zA-Z0-9_-]+)['"`]\]"#).expect("valid header regex")
    })
}

/// `req.body.<name>` or `req.query['<name>']`. Groups: object, dotted name, bracket name.
pub fn parameter_access() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"req\.(body|query)(?:\.([a-zA-Z0-9_]+)|\[['"`]([a-zA-Z0-9_]+)['"`]\])"#)
            .expect("valid parameter regex")
    })
}

/// `const { a, b = 1 } = req.body`. Groups: brace contents, object.
pub fn parameter_destructure() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"const\s*\{\s*([^}]+)\s*\}\s*=\s*req\.(body|query)")
            .expect("valid destructure regex")
    })
}

/// `process.env.<NAME>`
pub fn env_access() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"process\.env\.([a-zA-Z0-9_]+)").expect("valid env regex"))
}

pub fn line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"//(.*)").expect("valid line comment regex"))
}

/// Non-greedy `/* ... */`, spanning newlines.
pub fn block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*(.*?)\*/").expect("valid block comment regex"))
}

/// `:name` segments inside a route template.
pub fn path_parameter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":([a-zA-Z0-9_]+)").expect("valid path parameter regex"))
}
