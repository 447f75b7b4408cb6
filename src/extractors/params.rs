//! Request header and body/query parameter accesses.

use super::patterns;
use crate::model::ParameterKind;
use crate::util::OrderedSet;

/// Body and query parameter names read in one file, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub body: OrderedSet<String>,
    pub query: OrderedSet<String>,
}

impl RequestParameters {
    fn insert(&mut self, kind: ParameterKind, name: &str) {
        match kind {
            ParameterKind::Body => self.body.insert(name.to_string()),
            ParameterKind::Query => self.query.insert(name.to_string()),
        };
    }
}

pub fn extract_headers(content: &str) -> OrderedSet<String> {
    patterns::header_access()
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Runs the direct/bracket access matcher first, then the destructuring matcher.
pub fn extract_parameters(content: &str) -> RequestParameters {
    let mut params = RequestParameters::default();

    for cap in patterns::parameter_access().captures_iter(content) {
        let Some(kind) = cap.get(1).and_then(|m| ParameterKind::from_object(m.as_str())) else {
            continue;
        };
        if let Some(name) = cap.get(2).or_else(|| cap.get(3)) {
            params.insert(kind, name.as_str());
        }
    }

    for cap in patterns::parameter_destructure().captures_iter(content) {
        let (Some(list), Some(kind)) = (
            cap.get(1),
            cap.get(2).and_then(|m| ParameterKind::from_object(m.as_str())),
        ) else {
            continue;
        };
        for name in destructured_names(list.as_str()) {
            params.insert(kind, name);
        }
    }

    params
}

/// `a, b = 1, c: alias` -> `a`, `b`, `c:`. Only the first whitespace-separated token survives.
fn destructured_names(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .filter_map(|item| item.split_whitespace().next())
}
