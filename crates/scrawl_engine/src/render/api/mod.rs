//! Backend abstraction traits and resource handles

pub mod backend;
pub mod texture;

pub use backend::{
    CullMode, DepthTest, DrawCall, PolygonMode, RecordingBackend, RenderBackend,
};
pub use texture::{TextureDesc, TextureId, TextureRegistry};
