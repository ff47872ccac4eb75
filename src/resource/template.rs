//! URL templates with `:name` placeholders

use super::params::Params;

/// Characters left unescaped in a path segment on top of the RFC 3986
/// unreserved set.
const SEGMENT_SAFE: &[(&str, &str)] = &[
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%40", "@"),
    ("%3A", ":"),
    ("%24", "$"),
    ("%2C", ","),
    ("%3B", ";"),
    ("%26", "&"),
    ("%3D", "="),
    ("%2B", "+"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(String),
}

/// A parsed resource URL template such as `blogapp/api/_search/cars/:id`.
///
/// A placeholder is a colon followed by word characters. A colon followed
/// only by digits (a port number) is literal text, and `\:` escapes a colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTemplate {
    raw: String,
    tokens: Vec<Token>,
    placeholders: Vec<String>,
    strip_trailing_slashes: bool,
}

/// Result of filling a template: the relative path and the leftover
/// parameters as query-string pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedPath {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl ResourceTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        let raw = template.into();
        let tokens = tokenize(&raw);

        let mut placeholders: Vec<String> = Vec::new();
        for token in &tokens {
            if let Token::Param(name) = token {
                if !placeholders.contains(name) {
                    placeholders.push(name.clone());
                }
            }
        }

        Self {
            raw,
            tokens,
            placeholders,
            strip_trailing_slashes: true,
        }
    }

    /// Keep or strip trailing slashes after expansion (stripped by default)
    pub fn strip_trailing_slashes(mut self, strip: bool) -> Self {
        self.strip_trailing_slashes = strip;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of first appearance
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Fill placeholders from `params`; everything else becomes query pairs.
    ///
    /// An absent placeholder is removed and the slashes around it collapse to
    /// one, so `cars/:id` expands to `cars/`, which trailing-slash stripping
    /// turns into `cars`.
    pub fn expand(&self, params: &Params) -> ExpandedPath {
        let mut path = String::with_capacity(self.raw.len());

        for (idx, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Literal(text) => path.push_str(text),
                Token::Param(name) => match params.get(name) {
                    Some(values) => path.push_str(&encode_uri_segment(&values.join(","))),
                    None => {
                        let next = match self.tokens.get(idx + 1) {
                            Some(Token::Literal(text)) => text.chars().next(),
                            _ => None,
                        };
                        if path.ends_with('/') && matches!(next, Some('/') | Some('.')) {
                            path.pop();
                        }
                    }
                },
            }
        }

        if self.strip_trailing_slashes {
            while path.ends_with('/') {
                path.pop();
            }
        }

        let query = params
            .iter()
            .filter(|(key, _)| !self.placeholders.iter().any(|p| p == key))
            .flat_map(|(key, values)| {
                values
                    .iter()
                    .map(move |value| (key.to_string(), value.clone()))
            })
            .collect();

        ExpandedPath { path, query }
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn tokenize(template: &str) -> Vec<Token> {
    let chars: Vec<char> = template.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' && chars.get(i + 1) == Some(&':') {
            literal.push(':');
            i += 2;
            continue;
        }

        if c == ':' {
            let start = i + 1;
            let mut end = start;
            while end < chars.len() && is_word(chars[end]) {
                end += 1;
            }
            let name: String = chars[start..end].iter().collect();
            if !name.is_empty() && !name.chars().all(|c| c.is_ascii_digit()) {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Param(name));
                i = end;
                continue;
            }
        }

        literal.push(c);
        i += 1;
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tokens
}

/// Percent-encode a value for use as a single path segment
pub fn encode_uri_segment(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escaped, raw) in SEGMENT_SAFE {
        encoded = encoded.replace(escaped, raw);
    }
    encoded
}
