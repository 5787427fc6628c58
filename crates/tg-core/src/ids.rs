//! Strongly typed identifier wrappers.
//!
//! Asset references (`NarrationId`, `ArtworkId`) are opaque strings owned by
//! the host's content store; the engine only compares and forwards them.
//! `NarrationHandle` is an integer issued by an audio backend for one
//! playback of one narration.

use std::fmt;

/// Generate an opaque string identifier.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id! {
    /// Reference to a narration audio asset.
    pub struct NarrationId;
}

string_id! {
    /// Reference to an artwork in the host's catalogue.
    pub struct ArtworkId;
}

/// One playback of one narration, as issued by an audio backend.
///
/// Handles are never reused by the bundled backends, so a stale handle can
/// be told apart from the current one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrationHandle(pub u64);

impl fmt::Display for NarrationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NarrationHandle({})", self.0)
    }
}
