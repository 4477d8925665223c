//! Cyclone distortion field for cloud coordinates.

use glam::Vec3;
use rand::Rng;
use rand_distr::StandardNormal;

use super::CLOUD_SCALE;
use crate::noise::{hash_gradient, unit_cube_corner};

/// Base cyclone radius in cloud-space units.
const BASE_RADIUS: f32 = 3.0;

/// Standard deviation of the Gaussian radius jitter.
const RADIUS_JITTER: f32 = 2.0;

/// Rotates `v` by `theta` around the axis through the origin along unit
/// vector `k`, via Rodrigues' formula.
pub fn rotate_about_axis(v: Vec3, k: Vec3, theta: f32) -> Vec3 {
    let (sin, cos) = theta.sin_cos();
    v * cos + k.cross(v) * sin + k * k.dot(v) * (1.0 - cos)
}

/// A single rotation-based swirl centered on a point in cloud space.
#[derive(Debug, Clone, Copy)]
pub struct Cyclone {
    pub center: Vec3,
    pub radius: f32,
}

impl Cyclone {
    /// Swirls `i` if it falls within this cyclone's radius; returns `i`
    /// unchanged otherwise.
    ///
    /// The swirl angle grows logarithmically with distance from the center
    /// and its handedness follows the hemisphere of the center.
    pub fn distort(&self, i: Vec3) -> Vec3 {
        let d = i.distance(self.center);
        if d < self.radius {
            let theta = 2.0 * (2.0 * d).ln() * self.center.y.signum();
            rotate_about_axis(i, self.center.normalize(), -theta)
        } else {
            i
        }
    }
}

/// Eight cyclones hash-placed around a cloud shell.
#[derive(Debug, Clone)]
pub struct CycloneField {
    cyclones: Vec<Cyclone>,
}

impl CycloneField {
    pub fn new(cyclones: Vec<Cyclone>) -> Self {
        Self { cyclones }
    }

    /// Places one cyclone per unit-cube corner for a shell of the given
    /// radius: the hashed corner direction is pushed out to the shell's
    /// cloud-space distance, and each radius gets independent Gaussian
    /// jitter from the run RNG.
    pub fn seeded(shell_radius: i32, rng: &mut impl Rng) -> Self {
        let reach = shell_radius as f32 / CLOUD_SCALE;
        let cyclones = (0..8)
            .map(|n| {
                let jitter: f32 = rng.sample(StandardNormal);
                Cyclone {
                    center: hash_gradient(unit_cube_corner(n)).normalize() * reach,
                    radius: BASE_RADIUS + RADIUS_JITTER * jitter,
                }
            })
            .collect();
        Self { cyclones }
    }

    pub fn cyclones(&self) -> &[Cyclone] {
        &self.cyclones
    }

    /// Applies every cyclone to `i` in order. Distortions are cumulative: a
    /// sample inside several radii is swirled by each in sequence.
    pub fn distort(&self, i: Vec3) -> Vec3 {
        self.cyclones.iter().fold(i, |p, c| c.distort(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rotation_preserves_norm_and_axial_component() {
        let k = Vec3::new(0.2, -0.9, 0.4).normalize();
        let v = Vec3::new(3.0, 1.0, -2.0);
        let rotated = rotate_about_axis(v, k, 1.3);

        assert!((rotated.length() - v.length()).abs() < 1e-4);
        // Component along the axis is unchanged, so the distance from the
        // rotation axis is preserved.
        assert!((k.dot(rotated) - k.dot(v)).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_by_zero_is_identity() {
        let k = Vec3::Y;
        let v = Vec3::new(1.0, 2.0, 3.0);
        let rotated = rotate_about_axis(v, k, 0.0);
        assert!((rotated - v).length() < 1e-6);
    }

    #[test]
    fn test_distort_outside_radius_is_identity() {
        let cyclone = Cyclone {
            center: Vec3::new(8.0, 0.0, 0.0),
            radius: 2.0,
        };
        let i = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(cyclone.distort(i), i);
    }

    #[test]
    fn test_distort_inside_radius_moves_sample() {
        let cyclone = Cyclone {
            center: Vec3::new(1.0, 2.0, 0.0),
            radius: 4.0,
        };
        let i = Vec3::new(0.0, 1.0, 1.0);
        let distorted = cyclone.distort(i);
        assert_ne!(distorted, i);
        // Rotation about an origin axis preserves the sample's length.
        assert!((distorted.length() - i.length()).abs() < 1e-4);
    }

    #[test]
    fn test_seeded_field_is_reproducible() {
        let a = CycloneField::seeded(64, &mut ChaCha8Rng::seed_from_u64(5));
        let b = CycloneField::seeded(64, &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a.cyclones().len(), 8);
        for (ca, cb) in a.cyclones().iter().zip(b.cyclones()) {
            assert_eq!(ca.center, cb.center);
            assert_eq!(ca.radius, cb.radius);
        }
    }

    #[test]
    fn test_seeded_centers_sit_on_shell_reach() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let field = CycloneField::seeded(64, &mut rng);
        for cyclone in field.cyclones() {
            assert!((cyclone.center.length() - 8.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_field_distort_is_cumulative_fold() {
        let field = CycloneField::new(vec![
            Cyclone {
                center: Vec3::new(0.5, 1.0, 0.0),
                radius: 3.0,
            },
            Cyclone {
                center: Vec3::new(-0.5, -1.0, 0.5),
                radius: 3.0,
            },
        ]);
        let i = Vec3::new(0.3, 0.4, 0.5);
        let once = field.cyclones()[0].distort(i);
        let twice = field.cyclones()[1].distort(once);
        assert_eq!(field.distort(i), twice);
    }
}
