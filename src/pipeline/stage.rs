//! Generation stage trait and pipeline orchestration.

use rand::Rng;
use thiserror::Error;

use crate::clouds::{generate_cloud_shell, CloudParams, CycloneField};
use crate::config::GeneratorConfig;
use crate::terrain::{generate_terrain, TerrainParams};
use crate::voxel::PlanetVolume;

/// Unique identifier for generation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Terrain shell classification.
    Terrain,
    /// Cloud shell deposition (run once per shell).
    Clouds,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Terrain => "terrain",
            StageId::Clouds => "clouds",
        }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
}

/// Trait for implementing generation stages.
///
/// Each stage transforms the voxel volume in place. Stages run strictly in
/// order, which gives the cloud stages their required barrier against the
/// terrain writes they read back.
pub trait GenerationStage: Send + Sync {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must be executed before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Executes the generation stage, modifying the volume in place.
    fn execute(&self, volume: &mut PlanetVolume, config: &GeneratorConfig)
        -> Result<(), PipelineError>;
}

/// Orchestrates generation stages into a complete pipeline.
pub struct Pipeline {
    stages: Vec<Box<dyn GenerationStage>>,
    config: GeneratorConfig,
}

impl Pipeline {
    /// Creates a new empty pipeline with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: GenerationStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Executes all stages in order on the given volume.
    pub fn run(&self, volume: &mut PlanetVolume) -> Result<(), PipelineError> {
        self.run_with_callbacks(volume, |_, _, _| {}, |_, _, _| {})
    }

    /// Executes all stages with progress callbacks.
    ///
    /// # Arguments
    /// * `volume` - The volume to generate into
    /// * `on_stage_start` - Called when each stage begins
    /// * `on_stage_complete` - Called when each stage finishes
    pub fn run_with_callbacks<F1, F2>(
        &self,
        volume: &mut PlanetVolume,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            on_stage_start(stage.name(), i, total);

            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            stage.execute(volume, &self.config)?;
            completed.push(stage.id());

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

/// Terrain classification stage.
pub struct TerrainStage {
    pub params: TerrainParams,
}

impl TerrainStage {
    pub fn new(params: TerrainParams) -> Self {
        Self { params }
    }
}

impl GenerationStage for TerrainStage {
    fn id(&self) -> StageId {
        StageId::Terrain
    }

    fn name(&self) -> &str {
        "Terrain Classification"
    }

    fn execute(
        &self,
        volume: &mut PlanetVolume,
        config: &GeneratorConfig,
    ) -> Result<(), PipelineError> {
        if self.params.radius > volume.grid.extent() {
            return Err(PipelineError::StageFailed(
                self.name().to_string(),
                format!(
                    "sphere radius {} exceeds grid extent {}",
                    self.params.radius,
                    volume.grid.extent()
                ),
            ));
        }
        generate_terrain(&mut volume.grid, config, &self.params);
        Ok(())
    }
}

/// Cloud shell deposition stage.
pub struct CloudStage {
    pub params: CloudParams,
    field: CycloneField,
}

impl CloudStage {
    /// Creates a cloud stage with an explicit cyclone field.
    pub fn new(params: CloudParams, field: CycloneField) -> Self {
        Self { params, field }
    }

    /// Creates a cloud stage whose cyclone field is drawn from the run RNG.
    pub fn seeded(params: CloudParams, rng: &mut impl Rng) -> Self {
        let field = CycloneField::seeded(params.radius, rng);
        Self { params, field }
    }
}

impl GenerationStage for CloudStage {
    fn id(&self) -> StageId {
        StageId::Clouds
    }

    fn name(&self) -> &str {
        "Cloud Shell"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Terrain]
    }

    fn execute(
        &self,
        volume: &mut PlanetVolume,
        config: &GeneratorConfig,
    ) -> Result<(), PipelineError> {
        if self.params.radius > volume.grid.extent() {
            return Err(PipelineError::StageFailed(
                self.name().to_string(),
                format!(
                    "shell radius {} exceeds grid extent {}",
                    self.params.radius,
                    volume.grid.extent()
                ),
            ));
        }
        generate_cloud_shell(&mut volume.grid, config, &self.params, &self.field);
        Ok(())
    }
}
