use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from genre name to playlist id.  A later row
/// with a duplicate name overwrites the value but keeps the original
/// position.
pub type GenreMap = indexmap::IndexMap<GenreName, PlaylistId>;

#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    derive_more::From,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
pub struct GenreName(String);

/// The trailing segment of a playlist link, e.g. the `XYZ` of
/// `spotify:playlist:XYZ`.
#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    derive_more::From,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
pub struct PlaylistId(String);
