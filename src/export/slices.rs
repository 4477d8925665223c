//! PNG cross-section export for voxel volumes.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use glam::IVec3;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Rgba};
use thiserror::Error;

use crate::voxel::{DenseGrid, VoxelGrid};

/// Errors that can occur during slice export.
#[derive(Error, Debug)]
pub enum SliceExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Slice index {index} outside grid extent {extent}")]
    InvalidSlice { index: i32, extent: i32 },
}

/// Axis perpendicular to the exported slice plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceAxis {
    X,
    Y,
    Z,
}

impl SliceAxis {
    /// Short name used in exported filenames.
    pub fn short_name(&self) -> &'static str {
        match self {
            SliceAxis::X => "x",
            SliceAxis::Y => "y",
            SliceAxis::Z => "z",
        }
    }

    /// Maps in-plane pixel coordinates plus the slice index to a voxel
    /// coordinate.
    fn voxel_coord(&self, a: i32, b: i32, index: i32) -> IVec3 {
        match self {
            SliceAxis::X => IVec3::new(index, a, b),
            SliceAxis::Y => IVec3::new(a, index, b),
            SliceAxis::Z => IVec3::new(a, b, index),
        }
    }
}

/// Options for slice export.
#[derive(Debug, Clone)]
pub struct SliceExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for SliceExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Exports one cross-section of the grid as an RGBA PNG.
///
/// Non-empty voxels map to their color at full alpha; empty cells are fully
/// transparent. The image spans the full grid side, with the slice taken at
/// the given coordinate along `axis`.
pub fn export_slice_png(
    grid: &DenseGrid,
    axis: SliceAxis,
    index: i32,
    path: &Path,
    options: &SliceExportOptions,
) -> Result<(), SliceExportError> {
    let extent = grid.extent();
    if index < -extent || index >= extent {
        return Err(SliceExportError::InvalidSlice { index, extent });
    }

    let side = (2 * extent) as u32;
    let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(side, side);

    for pb in 0..side {
        for pa in 0..side {
            let a = pa as i32 - extent;
            let b = pb as i32 - extent;
            let voxel = grid.get(axis.voxel_coord(a, b, index));
            let pixel = if voxel.material.is_empty() {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([
                    channel_to_u8(voxel.color.x),
                    channel_to_u8(voxel.color.y),
                    channel_to_u8(voxel.color.z),
                    255,
                ])
            };
            img.put_pixel(pa, pb, pixel);
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), side, side, image::ExtendedColorType::Rgba8)?;

    Ok(())
}

/// Exports every cross-section along `axis` into `dir`.
///
/// Files are named `{base_name}_{axis}{index:03}.png` with indices counted
/// from the negative face of the grid. Returns the number of files written.
pub fn export_volume_slices(
    grid: &DenseGrid,
    dir: &Path,
    base_name: &str,
    axis: SliceAxis,
    options: &SliceExportOptions,
) -> Result<usize, SliceExportError> {
    let extent = grid.extent();
    let mut written = 0;

    for index in -extent..extent {
        let filename = format!(
            "{}_{}{:03}.png",
            base_name,
            axis.short_name(),
            index + extent
        );
        export_slice_png(grid, axis, index, &dir.join(filename), options)?;
        written += 1;
    }

    Ok(written)
}
