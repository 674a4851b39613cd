use serde::Deserialize;

/// How ids are assigned and resolved in a record collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Addressing {
    /// Ids come from a per-collection counter and are never reused.
    ///
    /// Replace and delete find the entry holding the id, whatever its
    /// current position.
    #[default]
    Stable,
    /// Legacy scheme: `id = len + 1` on create and `id - 1` is used as
    /// the position on replace and delete.
    ///
    /// Deleting anything but the last record shifts the entries after it,
    /// so ids handed out earlier stop matching their position.
    Positional,
}

impl Addressing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Positional => "positional",
        }
    }
}
