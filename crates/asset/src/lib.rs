//! Mesh construction: CPU geometry, materials, textures and ready-made primitives.

pub mod material;
pub mod mesh;
pub mod object;
pub mod primitives;
pub mod texture;

pub use material::{BasicMaterial, Color};
pub use mesh::{MeshData, MeshVertex};
pub use object::Mesh;
pub use texture::TextureData;
