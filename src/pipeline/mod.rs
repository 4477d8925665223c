//! Pipeline module orchestrating planet generation stages.
//!
//! Stages execute sequentially; the terrain/cloud ordering doubles as the
//! read-after-write barrier between the passes.

mod stage;

pub use stage::{
    CloudStage, GenerationStage, Pipeline, PipelineError, StageId, TerrainStage,
};
