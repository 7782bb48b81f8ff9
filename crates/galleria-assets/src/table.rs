//! The name-keyed resource table populated by a load

use std::collections::HashMap;

use crate::audio::AudioAsset;
use crate::descriptor::ResourceKind;
use crate::font::FontAsset;
use crate::model::ModelAsset;
use crate::texture::TextureAsset;

/// A decoded asset, tagged by the kind it was loaded as.
#[derive(Debug, Clone)]
pub enum Asset {
    Model(ModelAsset),
    Texture(TextureAsset),
    Audio(AudioAsset),
    Font(FontAsset),
    Document(serde_json::Value),
}

impl Asset {
    /// The kind this asset was decoded as.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Model(_) => ResourceKind::Model,
            Self::Texture(_) => ResourceKind::Texture,
            Self::Audio(_) => ResourceKind::Audio,
            Self::Font(_) => ResourceKind::Font,
            Self::Document(_) => ResourceKind::Document,
        }
    }

    pub fn as_model(&self) -> Option<&ModelAsset> {
        match self {
            Self::Model(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Document(d) => Some(d),
            _ => None,
        }
    }
}

/// Name-keyed store of decoded assets. A name appears at most once;
/// presence implies the load for that name completed successfully.
#[derive(Debug, Default)]
pub struct ResourceTable {
    entries: HashMap<String, Asset>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an asset under its descriptor name.
    pub(crate) fn insert(&mut self, name: impl Into<String>, asset: Asset) {
        self.entries.insert(name.into(), asset);
    }

    /// The stored asset, if that name's load completed.
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.entries.get(name)
    }

    /// Presence check; side-effect free.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The kind a name was loaded as, if present.
    pub fn kind_of(&self, name: &str) -> Option<ResourceKind> {
        self.entries.get(name).map(Asset::kind)
    }

    /// Names of all loaded resources.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stored asset.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
