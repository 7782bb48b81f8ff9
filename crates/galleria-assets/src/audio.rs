//! Audio decoding via kira
//!
//! Audio loads in two stages: the transport stage fetches raw bytes, then
//! this module decodes them into a playable sound. The two failure modes
//! are reported separately in logs even though both surface to the caller
//! as a `LoadError`.

use std::fmt;
use std::io::Cursor;
use std::time::Duration;

use kira::sound::static_sound::StaticSoundData;
use tracing::warn;

use crate::descriptor::ResourceDescriptor;
use crate::error::LoadError;

/// A decoded, playable audio buffer.
#[derive(Clone)]
pub struct AudioAsset {
    pub sound: StaticSoundData,
}

impl AudioAsset {
    /// Length of the decoded audio.
    pub fn duration(&self) -> Duration {
        self.sound.duration()
    }
}

impl fmt::Debug for AudioAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioAsset")
            .field("duration", &self.duration())
            .finish()
    }
}

/// Decode fetched audio bytes (wav, ogg, mp3, flac) into a playable sound.
pub fn decode(descriptor: &ResourceDescriptor, bytes: Vec<u8>) -> Result<AudioAsset, LoadError> {
    let sound = StaticSoundData::from_cursor(Cursor::new(bytes)).map_err(|e| {
        warn!(
            "audio decode failed for '{}' (transport succeeded): {e}",
            descriptor.name
        );
        LoadError::Decode {
            name: descriptor.name.clone(),
            kind: descriptor.kind,
            detail: e.to_string(),
        }
    })?;

    Ok(AudioAsset { sound })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ResourceKind;

    #[test]
    fn malformed_payload_is_a_decode_error_not_transport() {
        let descriptor =
            ResourceDescriptor::new("ambience", ResourceKind::Audio, "ambience.ogg");
        let err = decode(&descriptor, b"definitely not audio".to_vec()).unwrap_err();
        match err {
            LoadError::Decode { name, kind, .. } => {
                assert_eq!(name, "ambience");
                assert_eq!(kind, ResourceKind::Audio);
            }
            other => panic!("expected Decode, got: {other:?}"),
        }
    }
}
