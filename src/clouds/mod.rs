//! Cloud synthesis: cyclone-distorted, noise-thresholded shell layers.

mod cyclone;
mod shell;

pub use cyclone::{rotate_about_axis, Cyclone, CycloneField};
pub use shell::{generate_cloud_shell, CloudParams};

/// Voxels per cloud-noise unit; shell coordinates are divided by this before
/// distortion and density sampling.
pub const CLOUD_SCALE: f32 = 8.0;
