//! Terrain synthesis: the per-voxel land/sea/ice classifier.

mod classifier;

pub use classifier::{classify_voxel, generate_terrain, TerrainParams};
