//! Texture decoding to GPU-uploadable pixel buffers

use crate::descriptor::ResourceDescriptor;
use crate::error::LoadError;

/// Pixel format of a decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Rgba8,
}

/// A decoded texture with raw pixel data, ready for GPU upload.
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub format: TextureFormat,
}

/// Decode an image payload (PNG, JPEG, etc.) into an RGBA8 pixel buffer.
pub fn decode(descriptor: &ResourceDescriptor, bytes: &[u8]) -> Result<TextureAsset, LoadError> {
    let img = image::load_from_memory(bytes).map_err(|e| LoadError::Decode {
        name: descriptor.name.clone(),
        kind: descriptor.kind,
        detail: e.to_string(),
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TextureAsset {
        width,
        height,
        data: rgba.into_raw(),
        format: TextureFormat::Rgba8,
    })
}
