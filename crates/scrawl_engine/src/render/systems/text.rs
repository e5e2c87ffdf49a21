//! Bitmap-font text shaping
//!
//! Converts strings into positioned glyph quads (vertices + UVs) against a
//! grid-font atlas. The atlas is an ordinary [`SpriteSheet`] whose cells are
//! addressed by code point, the classic fixed-grid debug font layout.

use crate::foundation::color::Rgba;
use crate::foundation::math::{Vec2, Vec3};
use crate::render::api::TextureId;
use crate::render::primitives::{Mesh, Vertex};
use crate::sprite::SpriteSheet;

/// Grid-font atlas plus glyph metrics
///
/// Glyphs are uniform cells: every glyph is `cell_height` tall and
/// `cell_height * glyph_aspect` wide at layout time.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    sheet: SpriteSheet,
    glyph_aspect: f32,
}

impl BitmapFont {
    /// Create a font over a glyph-grid sprite sheet
    ///
    /// The conventional debug font is a 16x16 grid addressed by code point.
    pub fn new(sheet: SpriteSheet) -> Self {
        Self { sheet, glyph_aspect: 1.0 }
    }

    /// Override the width/height ratio of a rendered glyph
    pub fn with_glyph_aspect(mut self, glyph_aspect: f32) -> Self {
        self.glyph_aspect = glyph_aspect;
        self
    }

    /// Atlas texture to bind when drawing shaped text
    pub fn texture(&self) -> TextureId {
        self.sheet.texture()
    }

    /// Size of the block `layout_text` produces for this string
    ///
    /// x is the widest line's width, y the stacked line height.
    pub fn text_bounds(&self, text: &str, cell_height: f32) -> Vec2 {
        let glyph_width = cell_height * self.glyph_aspect;
        let mut widest = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            widest = widest.max(line.chars().count());
            lines += 1;
        }
        Vec2::new(widest as f32 * glyph_width, lines as f32 * cell_height)
    }

    /// Shape a string into glyph quads
    ///
    /// The block's top-left corner lands at the origin with +y up: line `n`
    /// occupies `y in [-(n+1)*cell_height, -n*cell_height]` and glyphs
    /// advance along +x. Each character emits 4 vertices and 6 indices;
    /// glyphs outside the atlas wrap by code point, so layout never faults.
    pub fn layout_text(&self, text: &str, cell_height: f32) -> Mesh {
        let glyph_width = cell_height * self.glyph_aspect;
        let mut mesh = Mesh::empty();

        for (line_number, line) in text.split('\n').enumerate() {
            let y_top = -(line_number as f32) * cell_height;
            let y_bottom = y_top - cell_height;
            let mut cursor_x = 0.0f32;

            for ch in line.chars() {
                let sprite = self.sheet.sprite(ch as usize);
                let base = mesh.vertices.len() as u32;
                let x_min = cursor_x;
                let x_max = cursor_x + glyph_width;

                // v = 0 is the top of the atlas, so the quad's top edge
                // takes uv_min.y
                mesh.vertices.extend_from_slice(&[
                    Vertex::from_position_uv(
                        Vec3::new(x_min, y_bottom, 0.0),
                        Rgba::WHITE,
                        Vec2::new(sprite.uv_min.x, sprite.uv_max.y),
                    ),
                    Vertex::from_position_uv(
                        Vec3::new(x_max, y_bottom, 0.0),
                        Rgba::WHITE,
                        Vec2::new(sprite.uv_max.x, sprite.uv_max.y),
                    ),
                    Vertex::from_position_uv(
                        Vec3::new(x_max, y_top, 0.0),
                        Rgba::WHITE,
                        Vec2::new(sprite.uv_max.x, sprite.uv_min.y),
                    ),
                    Vertex::from_position_uv(
                        Vec3::new(x_min, y_top, 0.0),
                        Rgba::WHITE,
                        Vec2::new(sprite.uv_min.x, sprite.uv_min.y),
                    ),
                ]);
                mesh.indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);

                cursor_x += glyph_width;
            }
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::api::TextureRegistry;
    use approx::assert_relative_eq;

    fn test_font() -> BitmapFont {
        let mut registry = TextureRegistry::new();
        let texture = registry.register("debug_font", 256, 256);
        BitmapFont::new(SpriteSheet::new(texture, 16, 16))
    }

    #[test]
    fn test_quad_counts() {
        let font = test_font();
        let mesh = font.layout_text("Hello", 10.0);
        assert_eq!(mesh.vertices.len(), 20); // 5 chars x 4 vertices
        assert_eq!(mesh.indices.len(), 30); // 5 chars x 6 indices
    }

    #[test]
    fn test_newline_starts_next_line_down() {
        let font = test_font();
        let mesh = font.layout_text("a\nb", 10.0);
        assert_eq!(mesh.vertices.len(), 8);

        // First glyph occupies y in [-10, 0], second in [-20, -10]
        assert_relative_eq!(mesh.vertices[0].position[1], -10.0);
        assert_relative_eq!(mesh.vertices[2].position[1], 0.0);
        assert_relative_eq!(mesh.vertices[4].position[1], -20.0);
        assert_relative_eq!(mesh.vertices[6].position[1], -10.0);

        // Both glyphs start at x = 0
        assert_relative_eq!(mesh.vertices[0].position[0], 0.0);
        assert_relative_eq!(mesh.vertices[4].position[0], 0.0);
    }

    #[test]
    fn test_glyph_uv_addresses_code_point_cell() {
        let font = test_font();
        // 'A' = 65 = cell (1, 4) in a 16x16 grid
        let mesh = font.layout_text("A", 8.0);
        let top_left_uv = mesh.vertices[3].uv;
        assert_relative_eq!(top_left_uv[0], 1.0 / 16.0);
        assert_relative_eq!(top_left_uv[1], 4.0 / 16.0);
    }

    #[test]
    fn test_bounds_match_layout() {
        let font = test_font();
        let bounds = font.text_bounds("abc\nlonger", 10.0);
        assert_relative_eq!(bounds.x, 60.0); // "longer" = 6 glyphs x 10 wide
        assert_relative_eq!(bounds.y, 20.0); // 2 lines x 10 tall

        let mesh = font.layout_text("abc\nlonger", 10.0);
        let max_x = mesh
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::NEG_INFINITY, f32::max);
        assert_relative_eq!(max_x, bounds.x);
    }
}
