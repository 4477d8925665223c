//! Procedural voxel planet generator.
//!
//! Synthesizes a spherical planet inside a discrete voxel volume: a solid
//! terrain shell (land / water / ice) classified from fractal gradient noise,
//! overlaid with cyclone-distorted, noise-thresholded cloud shells. The
//! result is a material+color voxel field consumed by an external renderer.

pub mod clouds;
pub mod config;
pub mod export;
pub mod noise;
pub mod pipeline;
pub mod terrain;
pub mod voxel;

pub use clouds::{CloudParams, Cyclone, CycloneField};
pub use config::GeneratorConfig;
pub use pipeline::{CloudStage, GenerationStage, Pipeline, PipelineError, TerrainStage};
pub use terrain::TerrainParams;
pub use voxel::{DenseGrid, Material, PlanetVolume, Voxel, VoxelGrid};
