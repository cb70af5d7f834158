mod local_name_hash;
mod tag;
mod tag_kind;

pub use self::local_name_hash::LocalNameHash;
pub use self::tag::Tag;
pub use self::tag_kind::TagKind;
