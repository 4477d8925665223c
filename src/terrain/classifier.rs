//! Per-voxel terrain classification over the sphere volume.

use glam::{IVec3, Vec3};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::noise::{fbm, gradient_noise};
use crate::voxel::{cube_coord, Material, Voxel, VoxelGrid};

/// Voxels per terrain-noise lattice cell.
const NOISE_CELL_SIZE: f32 = 64.0;

/// Height band above sea level that freezes on the night side.
const COASTAL_BAND: f32 = 0.004;

/// Jittered polar deviation (degrees) past which ocean turns to cap ice.
const POLAR_CAP_THRESHOLD: f32 = 70.0;

/// Run-scoped terrain parameters, sampled once and held constant for a full
/// classifier pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Sphere radius in voxels.
    pub radius: i32,
    /// Height threshold separating ocean from land.
    pub sea_level: f32,
}

impl TerrainParams {
    /// Samples a sea level uniformly in `[0.01, 0.03)`.
    pub fn sample(radius: i32, rng: &mut impl Rng) -> Self {
        Self {
            radius,
            sea_level: 0.01 * (rng.random::<f32>() * 2.0 + 1.0),
        }
    }
}

/// Land palette as a cubic polynomial in effective latitude.
///
/// Green/brown near the equator trending to tan and white as `latitude`
/// grows; polar whitening comes from the polynomial tails, not a separate
/// branch.
fn land_color(latitude: f32) -> Vec3 {
    let n = latitude / 15.0;
    Vec3::new(
        0.5 - 0.5 * n + 0.145 * n * n - 0.005 * n * n * n,
        0.4 - 0.055 * n - 0.04 * n * n + 0.015 * n * n * n,
        0.2 + 0.16 * n - 0.2 * n * n + 0.04 * n * n * n,
    )
}

/// Classifies a single voxel coordinate, or `None` outside the sphere.
///
/// Voxels outside the sphere are skipped rather than written empty, so a
/// caller's surrounding field survives a terrain pass untouched.
pub fn classify_voxel(
    config: &GeneratorConfig,
    params: &TerrainParams,
    coord: IVec3,
) -> Option<Voxel> {
    let r = params.radius as f32;
    let pos = coord.as_vec3();
    if pos.length() >= r {
        return None;
    }

    // atan2(0, 0) is defined and the clamp keeps acos in domain, so the grid
    // origin classifies like any other voxel.
    let u = (pos.z / r).atan2(pos.x / r);
    let v = ((pos.y / r).clamp(-1.0, 1.0)).acos();

    let h = fbm(pos / NOISE_CELL_SIZE + config.noise_offset());
    let polar_deviation = (v.to_degrees() - 90.0).abs();
    let ridge = Vec3::new(u, v, 10.0 * h) * 4.0;

    if h < params.sea_level {
        let depth_color =
            (Vec3::new(0.12, 0.3, 0.6) * (h * 32.0).exp()).max(Vec3::new(0.02, 0.05, 0.1));
        let color = if polar_deviation + 10.0 * gradient_noise(ridge) > POLAR_CAP_THRESHOLD {
            Vec3::ONE
        } else {
            depth_color
        };
        Some(Voxel::new(Material::Water, color))
    } else if h < params.sea_level + COASTAL_BAND && config.light_direction().dot(pos) < 0.0 {
        // One noise sample drives both the green and blue channels.
        let g = gradient_noise(pos);
        Some(Voxel::new(
            Material::IceHighlight,
            Vec3::new(1.0, 0.8 + 0.2 * g, 0.4 + 0.1 * g),
        ))
    } else {
        let latitude = polar_deviation + 20.0 * fbm(ridge + Vec3::splat(fbm(ridge)));
        Some(Voxel::new(Material::Land, land_color(latitude)))
    }
}

/// Runs the terrain pass over the sphere's bounding cube.
///
/// Classification is computed with a flat parallel iteration (per-voxel work
/// is independent), then written back sequentially through the grid.
pub fn generate_terrain<G: VoxelGrid>(
    grid: &mut G,
    config: &GeneratorConfig,
    params: &TerrainParams,
) {
    let extent = params.radius;
    let side = (2 * extent) as usize;

    let writes: Vec<(IVec3, Voxel)> = (0..side * side * side)
        .into_par_iter()
        .filter_map(|idx| {
            let coord = cube_coord(idx, extent);
            classify_voxel(config, params, coord).map(|voxel| (coord, voxel))
        })
        .collect();

    for (coord, voxel) in writes {
        grid.set(coord, voxel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::DenseGrid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_params(radius: i32) -> TerrainParams {
        TerrainParams {
            radius,
            sea_level: 0.02,
        }
    }

    #[test]
    fn test_sample_sea_level_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            let params = TerrainParams::sample(64, &mut rng);
            assert!(params.sea_level >= 0.01 && params.sea_level < 0.03);
        }
    }

    #[test]
    fn test_outside_sphere_is_skipped() {
        let config = GeneratorConfig::default();
        let params = test_params(8);
        assert!(classify_voxel(&config, &params, IVec3::new(8, 0, 0)).is_none());
        assert!(classify_voxel(&config, &params, IVec3::new(5, 5, 5)).is_none());
    }

    #[test]
    fn test_origin_classifies_without_nan() {
        let config = GeneratorConfig::default();
        let params = test_params(8);
        let voxel = classify_voxel(&config, &params, IVec3::ZERO).unwrap();
        assert!(!voxel.material.is_empty());
        assert!(voxel.color.is_finite());
    }

    #[test]
    fn test_high_sea_level_floods_everything() {
        let config = GeneratorConfig::default();
        let params = TerrainParams {
            radius: 6,
            sea_level: 10.0,
        };
        for coord in [IVec3::ZERO, IVec3::new(3, 0, 0), IVec3::new(-2, 1, 4)] {
            let voxel = classify_voxel(&config, &params, coord).unwrap();
            assert_eq!(voxel.material, Material::Water);
        }
    }

    #[test]
    fn test_water_color_floor() {
        let config = GeneratorConfig::default();
        let params = test_params(8);
        for coord in [IVec3::new(1, 0, 0), IVec3::new(0, -3, 2), IVec3::new(-4, 2, 1)] {
            let voxel = classify_voxel(&config, &params, coord).unwrap();
            if voxel.material == Material::Water && voxel.color != Vec3::ONE {
                assert!(voxel.color.x >= 0.02);
                assert!(voxel.color.y >= 0.05);
                assert!(voxel.color.z >= 0.1);
            }
        }
    }

    #[test]
    fn test_land_color_at_equator() {
        let color = land_color(0.0);
        assert_eq!(color, Vec3::new(0.5, 0.4, 0.2));
    }

    #[test]
    fn test_terrain_pass_leaves_exterior_untouched() {
        let config = GeneratorConfig::default();
        let params = test_params(6);

        // Grid is wider than the sphere; pre-seed a sentinel outside it.
        let mut grid = DenseGrid::new(8);
        let sentinel_coord = IVec3::new(7, 0, 0);
        let sentinel = Voxel::new(Material::IceHighlight, Vec3::splat(0.5));
        grid.set(sentinel_coord, sentinel);

        generate_terrain(&mut grid, &config, &params);

        assert_eq!(grid.get(sentinel_coord), sentinel);
        // Corners of the bounding cube lie outside the sphere.
        assert_eq!(grid.get(IVec3::new(-6, -6, -6)), Voxel::EMPTY);
    }

    #[test]
    fn test_terrain_pass_is_deterministic() {
        let config = GeneratorConfig::default();
        let params = test_params(6);

        let mut a = DenseGrid::new(6);
        let mut b = DenseGrid::new(6);
        generate_terrain(&mut a, &config, &params);
        generate_terrain(&mut b, &config, &params);

        for ((ca, va), (cb, vb)) in a.iter().zip(b.iter()) {
            assert_eq!(ca, cb);
            assert_eq!(va, vb);
        }
    }

    #[test]
    fn test_terrain_pass_fills_sphere_interior() {
        let config = GeneratorConfig::default();
        let params = test_params(6);
        let mut grid = DenseGrid::new(6);
        generate_terrain(&mut grid, &config, &params);

        for (coord, voxel) in grid.iter() {
            let inside = coord.as_vec3().length() < 6.0;
            assert_eq!(
                !voxel.material.is_empty(),
                inside,
                "voxel at {:?} (inside={}) was {:?}",
                coord,
                inside,
                voxel.material
            );
        }
    }
}
