//! Texture handles and the texture registry
//!
//! Actual pixel data and GPU residency live behind the backend; this layer
//! only tracks opaque handles so debug objects and sprite sheets can name
//! the texture they want bound at draw time.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Opaque handle to a texture owned by the backend
    pub struct TextureId;
}

/// Metadata for a registered texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Human-readable name for logging and diagnostics
    pub name: String,

    /// Width in texels
    pub width: u32,

    /// Height in texels
    pub height: u32,
}

/// Registry mapping texture handles to their metadata
///
/// Handle-based so callers can copy `TextureId` freely without borrowing
/// the registry.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: SlotMap<TextureId, TextureDesc>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture and return its handle
    pub fn register(&mut self, name: impl Into<String>, width: u32, height: u32) -> TextureId {
        let desc = TextureDesc { name: name.into(), width, height };
        let id = self.textures.insert(desc);
        log::debug!("registered texture {:?} ({}x{})", id, width, height);
        id
    }

    /// Look up a texture's metadata
    pub fn get(&self, id: TextureId) -> Option<&TextureDesc> {
        self.textures.get(id)
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// True if no textures are registered
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
