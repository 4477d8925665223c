//! Planet volume aggregate.

use super::grid::{DenseGrid, Material};

/// A planet's voxel volume: the dense grid plus the sphere radius the
/// generation stages operate against.
#[derive(Debug, Clone)]
pub struct PlanetVolume {
    radius: i32,
    pub grid: DenseGrid,
}

impl PlanetVolume {
    /// Creates an empty volume for a sphere of the given radius.
    ///
    /// The grid covers the sphere's bounding cube `[-radius, radius)^3`.
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            grid: DenseGrid::new(radius),
        }
    }

    /// Sphere radius in voxels.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Number of non-empty voxels.
    pub fn occupied_count(&self) -> usize {
        self.grid.cell_count() - self.grid.count_material(Material::Empty)
    }

    /// Fraction of grid cells holding a non-empty voxel.
    pub fn fill_ratio(&self) -> f32 {
        self.occupied_count() as f32 / self.grid.cell_count() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::{Voxel, VoxelGrid};
    use glam::{IVec3, Vec3};

    #[test]
    fn test_volume_creation() {
        let volume = PlanetVolume::new(8);
        assert_eq!(volume.radius(), 8);
        assert_eq!(volume.grid.extent(), 8);
        assert_eq!(volume.grid.cell_count(), 16 * 16 * 16);
        assert_eq!(volume.occupied_count(), 0);
    }

    #[test]
    fn test_fill_ratio() {
        let mut volume = PlanetVolume::new(2);
        volume
            .grid
            .set(IVec3::ZERO, Voxel::new(Material::Land, Vec3::ONE));
        assert_eq!(volume.occupied_count(), 1);
        assert!((volume.fill_ratio() - 1.0 / 64.0).abs() < 1e-6);
    }
}
