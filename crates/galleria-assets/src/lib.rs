//! Galleria Assets - Resource descriptors and the async loading pipeline
//!
//! Provides the descriptor table (name + kind + location), one decoding
//! strategy per resource kind (glTF models, textures, audio, typeface
//! fonts, JSON documents), and a `ResourceLoader` that fans the whole batch
//! out concurrently, aggregates progress, and hands back a name-keyed
//! resource table.

mod audio;
mod descriptor;
mod error;
mod fetch;
mod font;
mod loader;
mod model;
mod progress;
mod table;
mod texture;

pub use audio::AudioAsset;
pub use descriptor::{ResourceDescriptor, ResourceKind};
pub use error::{LoadError, TransportError};
pub use fetch::Transport;
pub use font::{FontAsset, Glyph, OutlineCommand};
pub use loader::ResourceLoader;
pub use model::{MeshAsset, MeshPrimitive, ModelAsset, NodePlacement};
pub use progress::LoadProgress;
pub use table::{Asset, ResourceTable};
pub use texture::{TextureAsset, TextureFormat};
