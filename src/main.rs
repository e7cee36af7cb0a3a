use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkhdr::models::{ConfigOverrides, ConvertConfig};
use inkhdr::rendering::{identifier_from_path, sanitize_identifier};
use inkhdr::services::{ConvertService, OutputPlan};
use mono_dither::KernelRegistry;

#[derive(Parser)]
#[command(name = "inkhdr")]
#[command(about = "Convert images into 1-bit bitmap C headers for monochrome displays")]
struct Cli {
    /// Input image (PNG, JPEG, GIF or BMP)
    #[arg(value_name = "INPUT", conflicts_with = "input_flag")]
    input: Option<PathBuf>,

    /// Output header file [default: <name>.h]
    #[arg(value_name = "OUTPUT", conflicts_with = "output_flag")]
    output: Option<PathBuf>,

    /// Input image, as an alternative to the positional argument
    #[arg(long = "in", value_name = "PATH")]
    input_flag: Option<PathBuf>,

    /// Output header, as an alternative to the positional argument
    #[arg(long = "out", value_name = "PATH")]
    output_flag: Option<PathBuf>,

    /// Array name [default: input file name without extension]
    #[arg(long)]
    name: Option<String>,

    /// Maximum output width in pixels [default: 296]
    #[arg(long)]
    max_width: Option<u32>,

    /// Maximum output height in pixels [default: 128]
    #[arg(long)]
    max_height: Option<u32>,

    /// Dither kernel (see --list-kernels) [default: burkes]
    #[arg(long)]
    dither: Option<String>,

    /// Fraction of quantization error to diffuse, 0.0 to 1.0 [default: 0.8]
    #[arg(long)]
    dither_error: Option<f32>,

    /// Percent of darkest and brightest samples ignored when stretching [default: 2]
    #[arg(long)]
    percentile: Option<u8>,

    /// Alternate the scan direction on every row
    #[arg(long, overrides_with = "no_serpentine")]
    serpentine: bool,

    /// Scan every row left to right, even if the config enables serpentine
    #[arg(long, overrides_with = "serpentine")]
    no_serpentine: bool,

    /// Also write a PNG preview next to the header
    #[arg(long)]
    out_image: bool,

    /// YAML file with default settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the available dither kernels and exit
    #[arg(long)]
    list_kernels: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkhdr=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let registry = KernelRegistry::builtin();

    if cli.list_kernels {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(input) = cli.input.clone().or_else(|| cli.input_flag.clone()) else {
        anyhow::bail!("No input image given (pass INPUT or --in <PATH>)");
    };

    let config = match &cli.config {
        Some(path) => ConvertConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConvertConfig::default(),
    };
    let config = config.with_overrides(ConfigOverrides {
        max_width: cli.max_width,
        max_height: cli.max_height,
        dither: cli.dither.clone(),
        dither_error: cli.dither_error,
        percentile: cli.percentile,
        serpentine: serpentine_override(cli.serpentine, cli.no_serpentine),
    });

    let plan = output_plan(&cli, &input);
    let service = ConvertService::from_config(&config, &registry)?;
    service
        .run(&input, &plan)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("Wrote {}", plan.header.display());
    if let Some(preview) = &plan.preview {
        println!("Wrote {}", preview.display());
    }
    Ok(())
}

/// `None` leaves the configured scan mode alone
fn serpentine_override(serpentine: bool, no_serpentine: bool) -> Option<bool> {
    match (serpentine, no_serpentine) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Resolve header path, array name and preview path from the arguments
fn output_plan(cli: &Cli, input: &std::path::Path) -> OutputPlan {
    let name = match &cli.name {
        Some(name) => sanitize_identifier(name),
        None => identifier_from_path(input),
    };

    let header = cli
        .output
        .clone()
        .or_else(|| cli.output_flag.clone())
        .unwrap_or_else(|| match &cli.name {
            Some(_) => PathBuf::from(format!("{name}.h")),
            None => input.with_extension("h"),
        });

    let preview = cli
        .out_image
        .then(|| OutputPlan::preview_path_for(&header));

    OutputPlan {
        header,
        name,
        preview,
    }
}
