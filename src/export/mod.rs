//! Export module for inspecting generated voxel volumes.
//!
//! The production renderer consumes the voxel field directly; these PNG
//! cross-sections exist for eyeballing a run without a renderer attached.

mod slices;

pub use slices::{
    export_slice_png, export_volume_slices, SliceAxis, SliceExportError, SliceExportOptions,
};
