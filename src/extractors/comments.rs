//! Line and block comments.
//!
//! Neither pattern masks string literals, so `"http://host"` yields a line comment
//! starting at `//host`.

use super::patterns;

/// All line comments in order, then all block comments in order, each trimmed.
pub fn extract_comments(content: &str) -> Vec<String> {
    let line = patterns::line_comment()
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()));

    let block = patterns::block_comment()
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()));

    line.chain(block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comments_before_block_comments() {
        let content = r#"
/* Users API
 * v2 */
// list users
router.get('/users', list); // TODO paginate
/** create */
router.post('/users', create);
"#;
        assert_eq!(
            extract_comments(content),
            vec!["list users", "TODO paginate", "Users API\n * v2", "* create"]
        );
    }

    #[test]
    fn test_comment_marker_inside_string_is_reported() {
        let comments = extract_comments(r#"const url = "http://localhost:3000";"#);
        assert_eq!(comments, vec![r#"localhost:3000";"#]);
    }

    #[test]
    fn test_crlf_line_endings_trimmed() {
        let comments = extract_comments("// first\r\n// second\r\n");
        assert_eq!(comments, vec!["first", "second"]);
    }

    #[test]
    fn test_no_comments() {
        assert!(extract_comments("app.listen(3000);").is_empty());
    }
}
