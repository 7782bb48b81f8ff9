//! Resource descriptors: what to load, and how to decode it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// The decoding strategy applied to a resource after transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// glTF 2.0 scene fragment (.gltf or .glb)
    Model,
    /// Image decoded to an RGBA8 pixel buffer
    Texture,
    /// Audio bytes decoded to a playable sound
    Audio,
    /// Typeface glyph-outline description
    Font,
    /// Structured key-value JSON document
    Document,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Model => "model",
            Self::Texture => "texture",
            Self::Audio => "audio",
            Self::Font => "font",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}

impl FromStr for ResourceKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model" | "gltf" => Ok(Self::Model),
            "texture" => Ok(Self::Texture),
            "audio" => Ok(Self::Audio),
            "font" => Ok(Self::Font),
            "document" | "json" => Ok(Self::Document),
            other => Err(LoadError::UnsupportedKind(other.to_string())),
        }
    }
}

/// One entry in the resource descriptor table. Immutable, defined before
/// load time; `name` is the unique key under which the decoded asset is
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,
    pub kind: ResourceKind,
    pub location: String,
}

impl ResourceDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: ResourceKind,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            ResourceKind::Model,
            ResourceKind::Texture,
            ResourceKind::Audio,
            ResourceKind::Font,
            ResourceKind::Document,
        ] {
            assert_eq!(kind.to_string().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "hologram".parse::<ResourceKind>().unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedKind(ref k) if k == "hologram"));
    }

    #[test]
    fn legacy_aliases_parse() {
        assert_eq!("gltf".parse::<ResourceKind>().unwrap(), ResourceKind::Model);
        assert_eq!("json".parse::<ResourceKind>().unwrap(), ResourceKind::Document);
    }
}
