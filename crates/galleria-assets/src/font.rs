//! Typeface font decoding
//!
//! Fonts ship as typeface JSON: family metrics plus one outline command
//! string per glyph. The outline string is a token stream of `m`/`l`/`q`/`b`
//! path commands (move, line, quadratic, cubic) with end coordinates first,
//! followed by control points.

use std::collections::HashMap;

use galleria_core::Vec2;
use serde::Deserialize;

use crate::descriptor::ResourceDescriptor;
use crate::error::LoadError;

/// A decoded font: family metadata and per-glyph outlines.
#[derive(Debug, Clone)]
pub struct FontAsset {
    pub family: String,
    pub resolution: f32,
    pub ascender: f32,
    pub descender: f32,
    pub glyphs: HashMap<char, Glyph>,
}

impl FontAsset {
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }
}

/// One glyph: horizontal advance and its outline path.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub h_advance: f32,
    pub outline: Vec<OutlineCommand>,
}

/// A single path command in a glyph outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, end: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, end: Vec2 },
    Close,
}

#[derive(Deserialize)]
struct TypefaceDoc {
    #[serde(rename = "familyName")]
    family_name: String,
    resolution: f32,
    ascender: f32,
    descender: f32,
    glyphs: HashMap<String, TypefaceGlyph>,
}

#[derive(Deserialize)]
struct TypefaceGlyph {
    ho: f32,
    #[serde(default)]
    o: String,
}

/// Decode a typeface JSON payload into a `FontAsset`.
pub fn decode(descriptor: &ResourceDescriptor, bytes: &[u8]) -> Result<FontAsset, LoadError> {
    let decode_err = |detail: String| LoadError::Decode {
        name: descriptor.name.clone(),
        kind: descriptor.kind,
        detail,
    };

    let doc: TypefaceDoc =
        serde_json::from_slice(bytes).map_err(|e| decode_err(e.to_string()))?;

    let mut glyphs = HashMap::with_capacity(doc.glyphs.len());
    for (key, glyph) in doc.glyphs {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(decode_err(format!("glyph key '{key}' is not a single char")));
        };
        let outline = parse_outline(&glyph.o)
            .map_err(|detail| decode_err(format!("glyph '{c}': {detail}")))?;
        glyphs.insert(
            c,
            Glyph {
                h_advance: glyph.ho,
                outline,
            },
        );
    }

    Ok(FontAsset {
        family: doc.family_name,
        resolution: doc.resolution,
        ascender: doc.ascender,
        descender: doc.descender,
        glyphs,
    })
}

/// Parse an outline command token stream.
fn parse_outline(outline: &str) -> Result<Vec<OutlineCommand>, String> {
    let mut tokens = outline.split_whitespace();
    let mut commands = Vec::new();

    fn next_point<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Vec2, String> {
        let x = tokens.next().ok_or_else(|| "truncated outline".to_string())?;
        let y = tokens.next().ok_or_else(|| "truncated outline".to_string())?;
        let x: f32 = x.parse().map_err(|_| format!("bad coordinate '{x}'"))?;
        let y: f32 = y.parse().map_err(|_| format!("bad coordinate '{y}'"))?;
        Ok(Vec2::new(x, y))
    }

    while let Some(op) = tokens.next() {
        let command = match op {
            "m" => OutlineCommand::MoveTo(next_point(&mut tokens)?),
            "l" => OutlineCommand::LineTo(next_point(&mut tokens)?),
            // Typeface order: end point first, control point(s) after.
            "q" => {
                let end = next_point(&mut tokens)?;
                let ctrl = next_point(&mut tokens)?;
                OutlineCommand::QuadTo { ctrl, end }
            }
            "b" => {
                let end = next_point(&mut tokens)?;
                let ctrl1 = next_point(&mut tokens)?;
                let ctrl2 = next_point(&mut tokens)?;
                OutlineCommand::CubicTo { ctrl1, ctrl2, end }
            }
            "z" => OutlineCommand::Close,
            other => return Err(format!("unknown outline op '{other}'")),
        };
        commands.push(command);
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ResourceKind;

    fn descriptor() -> ResourceDescriptor {
        ResourceDescriptor::new("label-font", ResourceKind::Font, "helvetiker.typeface.json")
    }

    const SAMPLE: &str = r#"{
        "familyName": "Helvetiker",
        "resolution": 1000,
        "ascender": 1189,
        "descender": -32,
        "glyphs": {
            "a": { "ho": 1036, "o": "m 50 0 l 100 0 q 200 100 150 50" },
            "b": { "ho": 800, "o": "" }
        }
    }"#;

    #[test]
    fn decodes_family_and_glyphs() {
        let font = decode(&descriptor(), SAMPLE.as_bytes()).unwrap();
        assert_eq!(font.family, "Helvetiker");
        assert_eq!(font.resolution, 1000.0);
        assert_eq!(font.glyphs.len(), 2);

        let a = font.glyph('a').unwrap();
        assert_eq!(a.h_advance, 1036.0);
        assert_eq!(
            a.outline,
            vec![
                OutlineCommand::MoveTo(Vec2::new(50.0, 0.0)),
                OutlineCommand::LineTo(Vec2::new(100.0, 0.0)),
                OutlineCommand::QuadTo {
                    ctrl: Vec2::new(150.0, 50.0),
                    end: Vec2::new(200.0, 100.0),
                },
            ]
        );
        assert!(font.glyph('b').unwrap().outline.is_empty());
        assert!(font.glyph('x').is_none());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode(&descriptor(), b"{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn truncated_outline_is_a_decode_error() {
        let json = r#"{
            "familyName": "F", "resolution": 1000, "ascender": 1, "descender": 0,
            "glyphs": { "a": { "ho": 10, "o": "m 50" } }
        }"#;
        let err = decode(&descriptor(), json.as_bytes()).unwrap_err();
        match err {
            LoadError::Decode { detail, .. } => assert!(detail.contains("truncated")),
            other => panic!("expected Decode, got: {other:?}"),
        }
    }

    #[test]
    fn unknown_outline_op_is_rejected() {
        let err = parse_outline("m 1 2 w 3 4").unwrap_err();
        assert!(err.contains("unknown outline op"));
    }
}
