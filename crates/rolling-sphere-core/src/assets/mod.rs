//! Built-in texture assets.

pub mod textures;
