use super::{Document, NodeId};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Compound {
    Id(String),
    Tag(String),
    TagWithId { tag: String, id: String },
}

impl Compound {
    fn parse(raw: &str) -> Option<Self> {
        let valid = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        match raw.split_once('#') {
            Some(("", id)) if valid(id) => Some(Self::Id(id.to_string())),
            Some((tag, id)) if valid(tag) && valid(id) => Some(Self::TagWithId {
                tag: tag.to_ascii_lowercase(),
                id: id.to_string(),
            }),
            Some(_) => None,
            None if valid(raw) => Some(Self::Tag(raw.to_ascii_lowercase())),
            None => None,
        }
    }

    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(tag) = doc.tag_name(node) else {
            return false;
        };
        match self {
            Self::Id(id) => doc.attribute(node, "id") == Some(id.as_str()),
            Self::Tag(want) => tag == want.as_str(),
            Self::TagWithId { tag: want, id } => {
                tag == want.as_str() && doc.attribute(node, "id") == Some(id.as_str())
            }
        }
    }
}

/// Descendant-combinator selector: whitespace separated `tag`, `#id` or
/// `tag#id` parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let parts = raw
            .split_whitespace()
            .map(Compound::parse)
            .collect::<Option<Vec<_>>>()?;
        if parts.is_empty() {
            return None;
        }
        Some(Self { parts })
    }

    pub(crate) fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(doc, node) {
            return false;
        }
        let mut cursor = doc.parent(node);
        for part in ancestors.iter().rev() {
            loop {
                match cursor {
                    None => return false,
                    Some(at) => {
                        cursor = doc.parent(at);
                        if part.matches(doc, at) {
                            break;
                        }
                    }
                }
            }
        }
        true
    }
}
