//! Literal `{{token}}` substitution for the article page template.

use std::collections::HashMap;

/// Placeholder tokens recognised in the article template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Title,
    Description,
    Category,
    Content,
    RelatedLinks,
    CanonicalUrl,
    Year,
}

impl Token {
    /// Every recognised token.
    pub const ALL: [Token; 7] = [
        Token::Title,
        Token::Description,
        Token::Category,
        Token::Content,
        Token::RelatedLinks,
        Token::CanonicalUrl,
        Token::Year,
    ];

    /// Name as written between the braces.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Category => "category",
            Self::Content => "content",
            Self::RelatedLinks => "relatedLinks",
            Self::CanonicalUrl => "canonicalUrl",
            Self::Year => "year",
        }
    }

    /// Look up a token by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Values to substitute for each token.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    values: HashMap<Token, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a token, replacing any previous one.
    pub fn with(mut self, token: Token, value: impl Into<String>) -> Self {
        self.values.insert(token, value.into());
        self
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.values.get(&token).map(String::as_str)
    }
}

/// Replace every `{{token}}` occurrence in `template` that has a value.
///
/// Unrecognised tokens and recognised tokens without a value are kept verbatim. Inserted
/// values are never scanned again, so a value containing `{{content}}` is emitted literally.
pub fn merge(template: &str, values: &TemplateValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        match Token::from_name(&after[..end]).and_then(|t| values.get(t)) {
            Some(value) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                // Step over one brace only; the next one may open a real token.
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}
