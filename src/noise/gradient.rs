//! Gradient (Perlin-style) lattice noise.

use glam::Vec3;

use super::hash::{hash_gradient, unit_cube_corner};

/// Hermite smoothstep of `x` between `edge0` and `edge1`, clamped to `[0, 1]`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Samples continuous gradient noise at `p`, in approximately `[-1, 1]`.
///
/// Splits `p` into its lattice cell origin and fractional offset, takes the
/// dot product of a hashed gradient with the offset vector at each of the
/// eight cell corners, and blends the corner values trilinearly with
/// smoothstep easing. The interpolation collapses x first, then y, then z;
/// that nesting order and the smoothstep easing are part of the field's
/// definition; reordering them produces a different (still valid-looking)
/// field and breaks reproducibility under a fixed seed.
///
/// Exactly zero at integer lattice points.
pub fn gradient_noise(p: Vec3) -> f32 {
    let i = p.floor();
    let f = p - i;

    let mut corner = [0.0f32; 8];
    for n in 0..8 {
        let c = unit_cube_corner(n);
        corner[n as usize] = hash_gradient(i + c).dot(f - c);
    }

    let tx = smoothstep(0.0, 1.0, f.x);
    let ty = smoothstep(0.0, 1.0, f.y);
    let tz = smoothstep(0.0, 1.0, f.z);

    let x00 = lerp(corner[0], corner[1], tx);
    let x10 = lerp(corner[2], corner[3], tx);
    let x01 = lerp(corner[4], corner[5], tx);
    let x11 = lerp(corner[6], corner[7], tx);

    let y0 = lerp(x00, x10, ty);
    let y1 = lerp(x01, x11, ty);

    lerp(y0, y1, tz)
}
