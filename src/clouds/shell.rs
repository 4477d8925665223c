//! Cloud shell generation: nested-fbm density thresholded over a thin shell.

use glam::{IVec3, Vec3};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::cyclone::CycloneField;
use super::CLOUD_SCALE;
use crate::config::GeneratorConfig;
use crate::noise::{fbm, smoothstep};
use crate::voxel::{cube_coord, Material, Voxel, VoxelGrid};

/// Cloud albedo written over empty space and blended into terrain.
const CLOUD_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.8);

/// Attenuation applied to the cloud color when it shades an ice highlight.
const SHADOW_FACTOR: f32 = 0.2;

/// Run-scoped parameters for one cloud shell pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CloudParams {
    /// Outer radius of the shell; the pass covers `[radius - 1, radius)`.
    pub radius: i32,
    /// Density threshold a sample must exceed to deposit cloud.
    pub density: f32,
}

impl CloudParams {
    /// Samples the low-threshold inner shell, density in `[0.01, 0.03)`.
    pub fn inner(radius: i32, rng: &mut impl Rng) -> Self {
        Self {
            radius,
            density: 0.01 * (rng.random::<f32>() * 2.0 + 1.0),
        }
    }

    /// Samples the sparser outer shell, density in `[0.16, 0.18)`.
    pub fn outer(radius: i32, rng: &mut impl Rng) -> Self {
        Self {
            radius,
            density: 0.15 + 0.01 * (rng.random::<f32>() * 2.0 + 1.0),
        }
    }
}

/// Nested fbm: the inner result perturbs the coordinate of the outer call.
///
/// This domain warp is what gives the shells their streaky, turbulent look; a
/// single fbm call produces visibly blobbier cover and must not be
/// substituted.
fn warped_fbm(i: Vec3, offset: f32) -> f32 {
    fbm(i + Vec3::splat(fbm(i + Vec3::splat(offset))))
}

/// Computes the cloud update for one shell coordinate, if any.
fn cloud_update<G: VoxelGrid>(
    grid: &G,
    config: &GeneratorConfig,
    params: &CloudParams,
    field: &CycloneField,
    coord: IVec3,
) -> Option<(IVec3, Voxel)> {
    let r = params.radius as f32;
    let len = coord.as_vec3().length();
    if len < r - 1.0 || len >= r {
        return None;
    }

    let i = field.distort(coord.as_vec3() / CLOUD_SCALE);
    let d = warped_fbm(i, config.manual_seed);
    if d <= params.density {
        return None;
    }

    let existing = grid.get(coord);
    let voxel = match existing.material {
        Material::Empty => Voxel::new(Material::Land, CLOUD_COLOR),
        Material::Land | Material::Water => {
            // Independent reroll of the warp decides how opaque the cloud is
            // over this terrain voxel.
            let weight = smoothstep(0.0, 1.0, 5.0 * warped_fbm(i, d));
            Voxel::new(existing.material, existing.color.lerp(CLOUD_COLOR, weight))
        }
        Material::IceHighlight => {
            let weight = smoothstep(0.0, 1.0, 5.0 * warped_fbm(i, d));
            Voxel::new(
                existing.material,
                existing.color.lerp(SHADOW_FACTOR * CLOUD_COLOR, weight),
            )
        }
    };
    Some((coord, voxel))
}

/// Runs one cloud shell pass over `[radius - 1, radius)`.
///
/// Densities are evaluated in parallel against the read-only grid, then the
/// surviving updates are written back sequentially. Voxels below the
/// threshold, and everything outside the shell band, are left untouched: a
/// cloud pass never erases terrain.
pub fn generate_cloud_shell<G: VoxelGrid + Sync>(
    grid: &mut G,
    config: &GeneratorConfig,
    params: &CloudParams,
    field: &CycloneField,
) {
    let extent = params.radius;
    let side = (2 * extent) as usize;

    let updates: Vec<(IVec3, Voxel)> = {
        let grid = &*grid;
        (0..side * side * side)
            .into_par_iter()
            .filter_map(|idx| cloud_update(grid, config, params, field, cube_coord(idx, extent)))
            .collect()
    };

    for (coord, voxel) in updates {
        grid.set(coord, voxel);
    }
}
