#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command line runner for the urban center identification pipeline.
//!
//! Reads a WGS84 boundary GeoJSON and one or more vendor POI CSV batches,
//! runs the full analysis, and writes the graded centers as GeoJSON plus
//! the location-quotient table as CSV.

mod export;
mod ingest;

use std::path::PathBuf;

use center_map_analytics_models::{Adjacency, AnalysisParams};
use center_map_spatial::{Boundary, Projection};
use clap::Parser;

#[derive(Parser)]
#[command(name = "center_map_cli", about = "Urban center identification from POI data")]
struct Cli {
    /// Study-area boundary GeoJSON in WGS84
    #[arg(long)]
    boundary: PathBuf,

    /// POI CSV batch; repeat for multiple files
    #[arg(long = "poi", required = true)]
    poi: Vec<PathBuf>,

    /// Fishnet cell size in meters (50-1000)
    #[arg(long, default_value_t = 500.0)]
    cell_size: f64,

    /// Contiguity for hotspot detection (queen or rook)
    #[arg(long, default_value = "queen")]
    adjacency: Adjacency,

    /// Significance threshold for center cells (0.01-0.05)
    #[arg(long, default_value_t = 0.01)]
    p_threshold: f64,

    /// Fraction of total activity below which a center is noise
    #[arg(long, default_value_t = 0.006)]
    noise_threshold: f64,

    /// Location-quotient bar for a specialized function (1.15-1.5)
    #[arg(long, default_value_t = 1.3)]
    mixed_use_threshold: f64,

    /// Central meridian of the planar projection, degrees east
    #[arg(long, default_value_t = 114.0)]
    central_meridian: f64,

    /// Output directory
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let params = AnalysisParams {
        cell_size: cli.cell_size,
        adjacency: cli.adjacency,
        p_threshold: cli.p_threshold,
        noise_threshold: cli.noise_threshold,
        mixed_use_threshold: cli.mixed_use_threshold,
    };

    let projection = Projection::new(cli.central_meridian);
    let raw_boundary = std::fs::read_to_string(&cli.boundary)?;
    let boundary = Boundary::from_geojson(&raw_boundary, &projection)?;

    let raws = ingest::read_batches(&cli.poi)?;
    let output = center_map_pipeline::run(
        &boundary,
        |lng, lat| projection.forward(lng, lat),
        raws,
        &params,
    )?;

    std::fs::create_dir_all(&cli.out)?;
    let stem = export::file_stem(&cli.boundary);
    let centers_path = cli.out.join(format!("{stem}_centers.geojson"));
    let quotients_path = cli.out.join(format!("{stem}_quotients.csv"));

    export::write_centers(&centers_path, &output.centers)?;
    export::write_quotients(&quotients_path, &output.quotients)?;

    log::info!(
        "Wrote {} centers to {} and {} location-quotient rows to {}",
        output.centers.len(),
        centers_path.display(),
        output.quotients.len(),
        quotients_path.display(),
    );

    Ok(())
}
