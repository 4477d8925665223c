//! Position hashing for per-lattice-point gradients.

use glam::Vec3;

/// Fixed non-orthogonal projection basis for the hash.
const HASH_BASIS: [Vec3; 3] = [
    Vec3::new(127.1, 311.7, 74.7),
    Vec3::new(269.5, 183.3, 246.1),
    Vec3::new(113.5, 271.9, 124.6),
];

/// Scale constant that spreads the sine output across many periods before the
/// fractional part is taken.
const HASH_SCALE: f32 = 43758.5453123;

/// Returns a deterministic pseudo-random direction for position `p`.
///
/// Projects `p` onto three fixed basis rows, pushes each projection through a
/// sine at high magnitude, and keeps the fractional part remapped to
/// `[-1, 1]`. Same input, same output; there is no hidden state, so the
/// whole noise field is reproducible.
pub fn hash_gradient(p: Vec3) -> Vec3 {
    let q = Vec3::new(p.dot(HASH_BASIS[0]), p.dot(HASH_BASIS[1]), p.dot(HASH_BASIS[2]));
    let s = Vec3::new(q.x.sin(), q.y.sin(), q.z.sin()) * HASH_SCALE;
    let fract = s - s.floor();
    -1.0 + 2.0 * fract
}

/// Returns corner `n` of the unit cube, for `n` in `0..8`.
///
/// Bit 0 selects x, bit 1 selects y, bit 2 selects z. Both the gradient-noise
/// corner loop and cyclone center placement enumerate corners this way.
pub fn unit_cube_corner(n: u32) -> Vec3 {
    Vec3::new((n & 1) as f32, ((n >> 1) & 1) as f32, ((n >> 2) & 1) as f32)
}
