//! Planetgen CLI - Procedural voxel planet generator.
//!
//! Generates a noise-classified terrain sphere with layered cloud shells and
//! optionally exports PNG cross-sections for inspection.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use planetgen::clouds::CloudParams;
use planetgen::config::GeneratorConfig;
use planetgen::export::{export_volume_slices, SliceAxis, SliceExportOptions};
use planetgen::pipeline::{CloudStage, Pipeline, TerrainStage};
use planetgen::terrain::TerrainParams;
use planetgen::voxel::{Material, PlanetVolume, Voxel};

/// Procedural voxel planet generator.
#[derive(Parser)]
#[command(name = "planetgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new voxel planet.
    Generate {
        /// Sphere radius in voxels (e.g., 32, 64, 128).
        #[arg(short, long, default_value = "64")]
        radius: i32,

        /// Random seed for reproducible run parameters.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Scalar noise-domain seed (also steers the light direction).
        #[arg(long, default_value = "0.0")]
        manual_seed: f32,

        /// Override the sampled sea level.
        #[arg(long)]
        sea_level: Option<f32>,

        /// Skip both cloud shell passes.
        #[arg(long)]
        skip_clouds: bool,

        /// Export PNG cross-sections of the finished volume.
        #[arg(long)]
        export_slices: bool,

        /// Axis perpendicular to exported slices.
        #[arg(long, default_value = "z")]
        slice_axis: CliAxis,

        /// Output directory for exported files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "planet")]
        name: String,
    },

    /// Display information about a planet configuration.
    Info {
        /// Sphere radius in voxels.
        #[arg(short, long, default_value = "64")]
        radius: i32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CliAxis {
    X,
    Y,
    Z,
}

impl From<CliAxis> for SliceAxis {
    fn from(axis: CliAxis) -> Self {
        match axis {
            CliAxis::X => SliceAxis::X,
            CliAxis::Y => SliceAxis::Y,
            CliAxis::Z => SliceAxis::Z,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            radius,
            seed,
            manual_seed,
            sea_level,
            skip_clouds,
            export_slices,
            slice_axis,
            output,
            name,
        } => {
            run_generate(
                radius,
                seed,
                manual_seed,
                sea_level,
                skip_clouds,
                export_slices,
                slice_axis,
                output,
                name,
            );
        }
        Commands::Info { radius } => {
            run_info(radius);
        }
    }
}

fn run_generate(
    radius: i32,
    seed: Option<u64>,
    manual_seed: f32,
    sea_level: Option<f32>,
    skip_clouds: bool,
    export_slices: bool,
    slice_axis: CliAxis,
    output: PathBuf,
    name: String,
) {
    if !(8..=256).contains(&radius) {
        eprintln!("Error: Radius must be between 8 and 256");
        std::process::exit(1);
    }

    if let Some(level) = sea_level {
        if !(-1.0..=1.0).contains(&level) {
            eprintln!("Error: Sea level must be between -1.0 and 1.0");
            std::process::exit(1);
        }
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });

    println!("Planetgen - Procedural Voxel Planet Generator");
    println!("=============================================");
    println!("Radius: {} voxels", radius);
    println!("Seed: {}", seed);
    println!("Manual seed: {}", manual_seed);

    let start = Instant::now();

    let config = GeneratorConfig::new(manual_seed, seed);
    let mut rng = config.rng();

    // The terrain sphere sits one voxel inside the outer cloud shell.
    let mut terrain = TerrainParams::sample(radius - 1, &mut rng);
    if let Some(level) = sea_level {
        terrain.sea_level = level;
    }
    println!("Sea level: {:.4}", terrain.sea_level);

    let mut pipeline = Pipeline::new(config);
    pipeline.add_stage(TerrainStage::new(terrain));

    if !skip_clouds {
        let inner = CloudParams::inner(radius - 1, &mut rng);
        let outer = CloudParams::outer(radius, &mut rng);
        println!(
            "Cloud densities: inner {:.4}, outer {:.4}",
            inner.density, outer.density
        );
        pipeline.add_stage(CloudStage::seeded(inner, &mut rng));
        pipeline.add_stage(CloudStage::seeded(outer, &mut rng));
    } else {
        println!("Cloud shells: SKIPPED");
    }

    println!("\nRunning generation pipeline...");
    let mut volume = PlanetVolume::new(radius);

    pipeline
        .run_with_callbacks(
            &mut volume,
            |name, i, total| {
                println!("  [{}/{}] Starting: {}", i + 1, total, name);
            },
            |name, i, total| {
                println!("  [{}/{}] Completed: {}", i + 1, total, name);
            },
        )
        .unwrap_or_else(|e| {
            eprintln!("Error during generation: {}", e);
            std::process::exit(1);
        });

    let gen_time = start.elapsed();
    println!("Generation completed in {:.2?}", gen_time);

    println!("\nVolume statistics:");
    println!("  Solid (land/cloud): {:>10}", volume.grid.count_material(Material::Land));
    println!("  Water:              {:>10}", volume.grid.count_material(Material::Water));
    println!("  Ice highlight:      {:>10}", volume.grid.count_material(Material::IceHighlight));
    println!(
        "  Fill ratio:         {:>9.1}%",
        volume.fill_ratio() * 100.0
    );

    if export_slices {
        println!("\nExporting slices...");
        let export_start = Instant::now();

        std::fs::create_dir_all(&output).unwrap_or_else(|e| {
            eprintln!("Error creating output directory: {}", e);
            std::process::exit(1);
        });

        let options = SliceExportOptions::default();
        let written =
            export_volume_slices(&volume.grid, &output, &name, slice_axis.into(), &options)
                .unwrap_or_else(|e| {
                    eprintln!("Error exporting slices: {}", e);
                    std::process::exit(1);
                });

        println!(
            "  Exported {} slices: {}_{}*.png in {:.2?}",
            written,
            name,
            SliceAxis::from(slice_axis).short_name(),
            export_start.elapsed()
        );
    }

    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
}

fn run_info(radius: i32) {
    let side = (2 * radius) as u64;
    let total_voxels = side * side * side;
    let bytes_per_voxel = std::mem::size_of::<Voxel>() as u64;
    let bytes_grid = total_voxels * bytes_per_voxel;

    println!("Planetgen - Planet Configuration Info");
    println!("=====================================");
    println!();
    println!("Radius: {} voxels", radius);
    println!("Bounding cube: {0}x{0}x{0}", side);
    println!();
    println!("Cell counts:");
    println!("  Total:        {:>14}", total_voxels);
    println!(
        "  Sphere (est): {:>14}",
        (4.0 / 3.0 * std::f64::consts::PI * (radius as f64).powi(3)) as u64
    );
    println!();
    println!("Memory usage (in-memory):");
    println!(
        "  Dense grid: {:>12} bytes ({:.2} MB)",
        bytes_grid,
        bytes_grid as f64 / 1024.0 / 1024.0
    );
    println!();
    println!("Slice export:");
    println!("  {} PNG files of {}x{} RGBA", side, side, side);
}
