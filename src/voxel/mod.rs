//! Voxel data model and storage.
//!
//! Provides the material/color voxel type, the grid trait the generator
//! writes through, and the dense in-memory grid backing the CLI and tests.
//! The production renderer consumes the same material-tag/color field through
//! its own store; everything here stays behind the [`VoxelGrid`] seam.

mod grid;
mod volume;

pub use grid::{cube_coord, DenseGrid, Material, Voxel, VoxelGrid};
pub use volume::PlanetVolume;
