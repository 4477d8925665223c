//! Noise primitives for planet synthesis.
//!
//! One gradient-noise field feeds both the terrain classifier and the cloud
//! shells; keeping a single implementation keeps the two stages statistically
//! consistent.

mod fractal;
mod gradient;
mod hash;

pub use fractal::fbm;
pub use gradient::{gradient_noise, smoothstep};
pub use hash::{hash_gradient, unit_cube_corner};
