//! Sprite sheet grid addressing
//!
//! A sprite sheet is an immutable grid layout over a texture: UVs for every
//! cell are computed once at construction. Rows are addressed top-to-bottom
//! (v = 0 at the top of the texture), and cells are indexed
//! `x + y * columns`.

use crate::foundation::math::Vec2;
use crate::render::api::TextureId;

/// UV rectangle for one sprite cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDefinition {
    /// Top-left UV corner
    pub uv_min: Vec2,

    /// Bottom-right UV corner
    pub uv_max: Vec2,
}

/// Immutable grid of sprites over a texture
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    texture: TextureId,
    columns: u32,
    rows: u32,
    sprites: Vec<SpriteDefinition>,
}

impl SpriteSheet {
    /// Create a sheet with `columns x rows` equally-sized cells
    ///
    /// Cell (0, 0) is the top-left of the texture; index increases across a
    /// row first, then down.
    pub fn new(texture: TextureId, columns: u32, rows: u32) -> Self {
        debug_assert!(columns > 0 && rows > 0, "sprite sheet must have at least one cell");

        let cell_width = 1.0 / columns as f32;
        let cell_height = 1.0 / rows as f32;

        let mut sprites = Vec::with_capacity((columns * rows) as usize);
        for y in 0..rows {
            for x in 0..columns {
                let uv_min = Vec2::new(x as f32 * cell_width, y as f32 * cell_height);
                let uv_max = Vec2::new(uv_min.x + cell_width, uv_min.y + cell_height);
                sprites.push(SpriteDefinition { uv_min, uv_max });
            }
        }

        Self { texture, columns, rows, sprites }
    }

    /// Texture this sheet addresses into
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Number of columns in the grid
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of sprite cells
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Sprite definition by linear index
    ///
    /// Out-of-range indices wrap around the sheet rather than panicking;
    /// callers feeding animation output through here never fault.
    pub fn sprite(&self, index: usize) -> &SpriteDefinition {
        &self.sprites[index % self.sprites.len()]
    }

    /// Sprite definition by grid coordinates
    pub fn sprite_at(&self, x: u32, y: u32) -> &SpriteDefinition {
        self.sprite((x + y * self.columns) as usize)
    }
}
