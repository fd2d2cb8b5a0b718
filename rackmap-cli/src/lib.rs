//! Command-line interface for the rackmap data pipeline.
#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rackmap_core::{FilterState, Marker, ParkingSpot, Placement, UnknownPlacementError};
use rackmap_data::fetch::{BlobPath, DirBlobSource, HttpBlobSource};
use rackmap_data::load::{DEFAULT_MAX_SPOTS, LoadError, LoadOptions, load_spots};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Blob name used when `--object` is not given.
const DEFAULT_OBJECT: &str = "Bicycle_Parking_Racks_20251116.geojson";

/// Run the rackmap CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration merging,
/// or the load pipeline fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Spots(args) => run_spots(args),
    }
}

fn run_spots(args: SpotsArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let spots = fetch_spots(&config)?;
    let mut filters = FilterState::new();
    for placement in &config.placements {
        if !filters.contains(*placement) {
            filters.toggle(*placement);
        }
    }
    let visible: Vec<&ParkingSpot> = filters.visible(&spots).collect();
    if config.markers {
        let markers: Vec<Marker> = visible.iter().map(|spot| Marker::for_spot(spot)).collect();
        emit(&markers)
    } else {
        emit(&visible)
    }
}

fn fetch_spots(config: &SpotsConfig) -> Result<Vec<ParkingSpot>, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let path = BlobPath::new(config.object.clone());
    let options = LoadOptions::new().with_max_spots(config.max_spots);
    let outcome = match &config.source {
        SpotSource::Url(base_url) => {
            let source = HttpBlobSource::new(base_url.clone());
            runtime.block_on(load_spots(&source, &path, options))
        }
        SpotSource::Dir(root) => {
            let source = DirBlobSource::new(root.clone());
            runtime.block_on(load_spots(&source, &path, options))
        }
    };
    outcome.map_err(CliError::Load)
}

fn emit<T: Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value).map_err(CliError::SerializeOutput)?;
    writeln!(handle).map_err(CliError::WriteOutput)
}

#[derive(Debug, Parser)]
#[command(
    name = "rackmap",
    about = "Fetch and inspect bicycle-parking data from object storage",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the GeoJSON blob and print the normalized parking spots.
    Spots(SpotsArgs),
}

/// CLI arguments for the `spots` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Fetch the parking dataset, normalize it, and print the \
                 visible records. Options can come from CLI flags, \
                 configuration files, or RACKMAP_* environment variables.",
    about = "Fetch and print normalized parking spots"
)]
#[ortho_config(prefix = "RACKMAP")]
struct SpotsArgs {
    /// Base URL of the bucket hosting the GeoJSON blob.
    #[arg(long = "source-url", value_name = "url")]
    #[serde(default)]
    source_url: Option<String>,
    /// Local directory holding a snapshot of the blob.
    #[arg(long = "source-dir", value_name = "path")]
    #[serde(default)]
    source_dir: Option<Utf8PathBuf>,
    /// Blob name within the source.
    #[arg(long, value_name = "name")]
    #[serde(default)]
    object: Option<String>,
    /// Placement categories to keep; repeat to select several.
    #[arg(long = "placement", value_name = "category")]
    #[serde(default)]
    placement: Vec<String>,
    /// Cap on the number of records returned.
    #[arg(long = "max-spots", value_name = "count")]
    #[serde(default)]
    max_spots: Option<usize>,
    /// Print map markers instead of raw records.
    #[arg(long)]
    #[serde(default)]
    markers: bool,
}

impl SpotsArgs {
    fn into_config(self) -> Result<SpotsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SpotsConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SpotSource {
    Url(String),
    Dir(Utf8PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SpotsConfig {
    source: SpotSource,
    object: String,
    placements: Vec<Placement>,
    max_spots: usize,
    markers: bool,
}

impl TryFrom<SpotsArgs> for SpotsConfig {
    type Error = CliError;

    fn try_from(args: SpotsArgs) -> Result<Self, Self::Error> {
        let source = match (args.source_url, args.source_dir) {
            (Some(url), None) => SpotSource::Url(url),
            (None, Some(dir)) => SpotSource::Dir(dir),
            (Some(_), Some(_)) => return Err(CliError::ConflictingSources),
            (None, None) => return Err(CliError::MissingSource),
        };
        let placements = args
            .placement
            .iter()
            .map(|value| value.parse::<Placement>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            source,
            object: args.object.unwrap_or_else(|| DEFAULT_OBJECT.to_owned()),
            placements,
            max_spots: args.max_spots.unwrap_or(DEFAULT_MAX_SPOTS),
            markers: args.markers,
        })
    }
}

/// Errors emitted by the rackmap CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Neither a source URL nor a source directory was supplied.
    #[error("missing blob source (set --source-url or --source-dir)")]
    MissingSource,
    /// Both source flavours were supplied at once.
    #[error("--source-url and --source-dir are mutually exclusive")]
    ConflictingSources,
    /// A `--placement` value is outside the vocabulary.
    #[error(transparent)]
    UnknownPlacement(#[from] UnknownPlacementError),
    /// The async runtime could not be started.
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The load pipeline failed.
    #[error("failed to load parking spots: {0}")]
    Load(#[from] LoadError),
    /// Serializing the output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
