//! Raster regridding tool.
//!
//! Resamples a 2-D Zarr raster to a new size and writes the result as a
//! chunked Zarr array, streaming bands of rows through the chunk writer.

use std::path::PathBuf;

use anyhow::Result;
use chunk_writer::{ChunkWriterConfig, ZarrCompression};
use clap::Parser;
use resampling::ResamplingConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use regrid::RegridOptions;

#[derive(Parser, Debug)]
#[command(name = "regrid")]
#[command(about = "Resample a Zarr raster onto a new grid")]
struct Args {
    /// Source Zarr array directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output Zarr array directory
    #[arg(short, long)]
    output: PathBuf,

    /// Target width in pixels
    #[arg(long)]
    width: usize,

    /// Target height in pixels
    #[arg(long)]
    height: usize,

    /// Resampling method (default: RESAMPLING_METHOD or BILINEAR_INTERPOLATION)
    #[arg(short, long)]
    method: Option<String>,

    /// Output chunk width (default: CHUNK_WIDTH or 512)
    #[arg(long)]
    chunk_width: Option<usize>,

    /// Output chunk height (default: CHUNK_HEIGHT or 512)
    #[arg(long)]
    chunk_height: Option<usize>,

    /// Output compression: none, blosc_lz4, blosc_zstd
    #[arg(long)]
    compression: Option<String>,

    /// Target rows resampled per write
    #[arg(long, env = "ROWS_PER_WRITE", default_value = "64")]
    rows_per_write: usize,

    /// Treat output rows as bottom-up
    #[arg(long)]
    y_flip: bool,

    /// Resample on all cores before writing
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    let options = build_options(args)?;
    info!(
        method = %options.method,
        chunk = ?(options.writer.chunk_width, options.writer.chunk_height),
        rows_per_write = options.rows_per_write,
        parallel = options.parallel,
        "Starting regrid tool"
    );

    let summary = regrid::run(&options)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Merge command-line arguments over the environment configuration.
fn build_options(args: Args) -> Result<RegridOptions> {
    let resampling = ResamplingConfig::from_env();
    let mut writer = ChunkWriterConfig::from_env();

    if let Some(width) = args.chunk_width {
        writer.chunk_width = width;
    }
    if let Some(height) = args.chunk_height {
        writer.chunk_height = height;
    }
    if let Some(name) = &args.compression {
        writer.zarr_compression = ZarrCompression::parse(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown compression '{}'", name))?;
    }
    writer.y_flipped |= args.y_flip;
    writer.validate().map_err(anyhow::Error::msg)?;

    Ok(RegridOptions {
        input: args.input,
        output: args.output,
        width: args.width,
        height: args.height,
        method: args
            .method
            .unwrap_or_else(|| resampling.method.name().to_string()),
        rows_per_write: args.rows_per_write,
        parallel: args.parallel || resampling.parallel,
        writer,
    })
}
