//! Multi-octave fractal Brownian motion over the gradient-noise field.

use glam::Vec3;

use super::gradient::gradient_noise;

/// Octave count shared by every fbm consumer.
const OCTAVES: u32 = 8;

/// Sums 8 octaves of gradient noise at doubling frequency and halving
/// amplitude (0.5, 0.25, ...).
///
/// The amplitude series sums to just under 1, so the result stays within the
/// gradient-noise bound; it is not clamped. Both the terrain classifier and
/// the cloud shells sample this exact function: the height field and the
/// cloud density field have to stay statistically consistent, so callers must
/// not re-derive their own octave schedule.
pub fn fbm(p: Vec3) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut q = p;
    for _ in 0..OCTAVES {
        value += amplitude * gradient_noise(q);
        q *= 2.0;
        amplitude *= 0.5;
    }
    value
}
