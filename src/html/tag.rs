use super::{LocalNameHash, TagKind};
use std::fmt::{self, Debug, Formatter};

/// Open element as seen by the scanner.
///
/// Only custom tags carry a name: known tags are fully described by their kind.
#[derive(Clone)]
pub enum Tag {
    Known(TagKind),
    Custom(String),
}

impl Tag {
    /// Classifies a tag name case-insensitively. Names that don't belong to the
    /// known tag set produce a custom tag which preserves the name verbatim.
    pub fn for_name(name: &str) -> Self {
        match TagKind::from_name_hash(LocalNameHash::from(name)) {
            TagKind::Custom => Tag::Custom(name.to_string()),
            kind => Tag::Known(kind),
        }
    }

    #[inline]
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Known(kind) => *kind,
            Tag::Custom(_) => TagKind::Custom,
        }
    }

    #[inline]
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Tag::Known(_) => None,
            Tag::Custom(name) => Some(name),
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.kind().is_void()
    }

    #[inline]
    pub fn can_contain(&self, child: &Tag) -> bool {
        self.kind().can_contain(child.kind())
    }
}

impl From<TagKind> for Tag {
    /// A custom kind produces a nameless custom tag.
    #[inline]
    fn from(kind: TagKind) -> Self {
        match kind {
            TagKind::Custom => Tag::default(),
            kind => Tag::Known(kind),
        }
    }
}

/// Placeholder for stack slots whose records didn't fit into the
/// serialized state. The empty name never equals a scanned tag.
impl Default for Tag {
    #[inline]
    fn default() -> Self {
        Tag::Custom(String::new())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Tag) -> bool {
        match (self, other) {
            (Tag::Known(k1), Tag::Known(k2)) => k1 == k2,
            (Tag::Custom(n1), Tag::Custom(n2)) => n1.eq_ignore_ascii_case(n2),
            _ => false,
        }
    }
}

impl Eq for Tag {}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Known(kind) => write!(f, "<{}>", kind.name().unwrap_or_default()),
            Tag::Custom(name) => write!(f, "<{name}> (custom)"),
        }
    }
}
