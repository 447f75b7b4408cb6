//! Environment variable reads (`process.env.NAME`).

use super::patterns;

/// Names in order of appearance; duplicates are kept and collapsed by the scanner.
pub fn extract_env_vars(content: &str) -> Vec<String> {
    patterns::env_access()
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
