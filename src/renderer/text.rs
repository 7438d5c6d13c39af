//! Fonts: an optional TTF/OTF file with the built-in bitmap font as fallback
//!
//! Text is rasterised into small rectangles with a coverage value, which the
//! tessellator turns into quads. TTF glyphs produce one rect per covered
//! pixel; the bitmap font produces one rect per lit cell at full coverage.

use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{Font as _, FontVec, GlyphId, PxScale, ScaleFont as _, point};
use glam::Vec2;
use thiserror::Error;

use super::builtin_font;
use super::canvas::{TextStyle, Weight};
use crate::sim::layout::Rect;

/// Coverage below this is not drawn
const MIN_COVERAGE: f32 = 0.02;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a usable font file", .path.display())]
    Invalid { path: PathBuf },
}

pub enum Font {
    /// Built-in bold sans-serif bitmap font
    Builtin,
    Truetype { font: FontVec, path: PathBuf },
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Font::Builtin => write!(f, "Font::Builtin"),
            Font::Truetype { path, .. } => write!(f, "Font::Truetype({})", path.display()),
        }
    }
}

impl Font {
    pub fn builtin() -> Self {
        Font::Builtin
    }

    /// Load a TTF/OTF font from disk
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| FontError::Invalid {
            path: path.to_path_buf(),
        })?;
        Ok(Font::Truetype {
            font,
            path: path.to_path_buf(),
        })
    }

    /// Load a font, or fall back to the built-in one. Never fails.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(font) => {
                log::info!("Loaded font {}", path.display());
                font
            }
            Err(FontError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "Font file not found: {}; using built-in font",
                    path.display()
                );
                Font::Builtin
            }
            Err(e) => {
                log::warn!("{}; using built-in font", e);
                Font::Builtin
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin)
    }

    /// Synthetic emboldening offset for TTF glyphs
    fn bold_spread(style: TextStyle) -> f32 {
        match style.weight {
            Weight::Bold => (style.size / 24.0).max(1.0),
            Weight::Plain => 0.0,
        }
    }

    /// Advance width of `text`
    pub fn measure(&self, text: &str, style: TextStyle) -> f32 {
        match self {
            Font::Builtin => builtin_font::measure(text, style.size),
            Font::Truetype { font, .. } => {
                let scaled = font.as_scaled(PxScale::from(style.size));
                let mut width = 0.0;
                let mut prev: Option<GlyphId> = None;
                for c in text.chars() {
                    let id = font.glyph_id(c);
                    if let Some(p) = prev {
                        width += scaled.kern(p, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                if width > 0.0 {
                    width + Self::bold_spread(style)
                } else {
                    width
                }
            }
        }
    }

    /// Rasterise `text` with the baseline's left end at `origin`; calls `emit`
    /// with each covered rect and its coverage in (0, 1]
    pub fn rasterize(
        &self,
        text: &str,
        origin: Vec2,
        style: TextStyle,
        mut emit: impl FnMut(Rect, f32),
    ) {
        match self {
            Font::Builtin => {
                let bold = style.weight == Weight::Bold;
                for cell in builtin_font::cells(text, origin, style.size, bold) {
                    emit(cell, 1.0);
                }
            }
            Font::Truetype { font, .. } => {
                let scaled = font.as_scaled(PxScale::from(style.size));
                let spread = Self::bold_spread(style);
                let mut caret = origin.x;
                let mut prev: Option<GlyphId> = None;
                for c in text.chars() {
                    let id = font.glyph_id(c);
                    if let Some(p) = prev {
                        caret += scaled.kern(p, id);
                    }
                    let glyph = id.with_scale_and_position(style.size, point(caret, origin.y));
                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        outlined.draw(|x, y, coverage| {
                            if coverage >= MIN_COVERAGE {
                                emit(
                                    Rect::new(
                                        bounds.min.x + x as f32,
                                        bounds.min.y + y as f32,
                                        1.0 + spread,
                                        1.0,
                                    ),
                                    coverage.min(1.0),
                                );
                            }
                        });
                    }
                    caret += scaled.h_advance(id);
                    prev = Some(id);
                }
            }
        }
    }
}
