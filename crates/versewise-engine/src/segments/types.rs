use serde::{Deserialize, Serialize};

/// One unit of parsed assistant content: either plain prose or a verse block.
///
/// Segments carry owned text rather than spans into the source because the
/// source they are parsed from (the revealed prefix) is re-built on every
/// reveal tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// A run of content outside any verse block, preserved verbatim.
    Text { value: String },
    /// Content enclosed in `[VERSE title="..."]...[/VERSE]`.
    /// `title` is the tag attribute; `value` is the body with
    /// leading/trailing whitespace trimmed.
    Verse { title: String, value: String },
}

impl Segment {
    pub fn text(value: impl Into<String>) -> Self {
        Segment::Text {
            value: value.into(),
        }
    }

    pub fn verse(title: impl Into<String>, value: impl Into<String>) -> Self {
        Segment::Verse {
            title: title.into(),
            value: value.into(),
        }
    }

    /// The segment's textual content (body text for verse segments).
    pub fn value(&self) -> &str {
        match self {
            Segment::Text { value } => value,
            Segment::Verse { value, .. } => value,
        }
    }

    pub fn is_verse(&self) -> bool {
        matches!(self, Segment::Verse { .. })
    }
}
