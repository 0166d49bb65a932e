use anyhow::{Context, Result};
use clap::Parser;
use edgetrace_core::{replay, EdgePreset, OutputFormat, TraceConfig};
use log::info;

mod detection;
mod device;
mod thinning;
mod tracing;
mod export_svg;
mod export_dxf;
mod export_json;

/// Extract edges from an image and turn them into a replayable drag gesture
#[derive(Parser, Debug)]
#[command(name = "edgetrace")]
#[command(about = "Trace image edges as a pointer drag path", long_about = None)]
struct Args {
    /// Input image file path
    #[arg(short, long)]
    input: String,

    /// Output file path (without extension)
    #[arg(short, long, default_value = "output")]
    output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "all")]
    format: FormatArg,

    /// JSON configuration file; command-line flags take precedence
    #[arg(short, long)]
    config: Option<String>,

    /// Edge detection preset
    #[arg(short, long, value_enum)]
    preset: Option<PresetArg>,

    /// Canny low threshold (overrides the preset)
    #[arg(long)]
    low: Option<f32>,

    /// Canny high threshold (overrides the preset)
    #[arg(long)]
    high: Option<f32>,

    /// Input is already a binary edge mask: skip edge detection
    #[arg(short, long)]
    mask: bool,

    /// Luma above which a mask pixel counts as an edge (with --mask)
    #[arg(long, default_value = "127")]
    mask_threshold: u8,

    /// Skip thinning the edge image
    #[arg(long)]
    no_thin: bool,

    /// Draw pen-up jumps in the SVG output
    #[arg(long)]
    show_jumps: bool,

    /// Replay the plan on a logging pointer device
    #[arg(long)]
    dry_run: bool,

    /// Multiply every replay delay by this factor (with --dry-run)
    #[arg(long, default_value = "0")]
    pace: f64,

    /// Enable debug mode (save intermediate images)
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Svg,
    Dxf,
    Json,
    All,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Dxf => OutputFormat::Dxf,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::All => OutputFormat::All,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PresetArg {
    Sensitive,
    Medium,
    Strict,
}

impl From<PresetArg> for EdgePreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Sensitive => EdgePreset::Sensitive,
            PresetArg::Medium => EdgePreset::Medium,
            PresetArg::Strict => EdgePreset::Strict,
        }
    }
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(args: &Args) -> Result<TraceConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid config file {}", path))?
        }
        None => TraceConfig::default(),
    };

    if let Some(preset) = args.preset {
        config.edges.preset = preset.into();
    }
    if args.low.is_some() {
        config.edges.low_threshold = args.low;
    }
    if args.high.is_some() {
        config.edges.high_threshold = args.high;
    }
    if args.no_thin {
        config.thin = false;
    }
    if args.show_jumps {
        config.show_jumps = true;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = load_config(&args)?;
    let format: OutputFormat = args.format.into();

    info!("EdgeTrace - Edge to Drag Path");
    info!("=============================");
    info!("Input: {}", args.input);
    info!("Output: {}", args.output);
    info!("Format: {:?}", format);
    info!("Edges: {}", if args.mask { "precomputed mask".to_string() } else { config.edges.preset.to_string() });
    info!("Thinning: {}", config.thin);
    info!("Debug mode: {}", args.debug);

    // Step 1: Load the image
    info!("Step 1: Loading image...");
    let input_img = image::open(&args.input)
        .with_context(|| format!("Failed to open image {}", args.input))?;
    info!("  {}x{} pixels", input_img.width(), input_img.height());

    // Step 2: Edge mask
    let edges = if args.mask {
        info!("Step 2: Reading binary mask (threshold {})...", args.mask_threshold);
        detection::binarize(&input_img, args.mask_threshold)
    } else {
        let (low, high) = config.edges.thresholds();
        info!("Step 2: Detecting edges (Canny {}/{})...", low, high);
        detection::detect_edges(&input_img, &config.edges)
    };
    info!("  {} edge pixel(s)", detection::edge_pixel_count(&edges));

    if args.debug {
        let edges_path = format!("{}_edges.png", args.output);
        edges.save(&edges_path)?;
        info!("Saved edge image to: {}", edges_path);

        if !args.mask {
            let gray_path = format!("{}_grayscale.png", args.output);
            input_img.to_luma8().save(&gray_path)?;
            info!("Saved grayscale image to: {}", gray_path);

            for (preset, preset_edges) in detection::detect_preset_edges(&input_img) {
                let preset_path = format!("{}_edges_{}.png", args.output, preset.name());
                preset_edges.save(&preset_path)?;
                info!(
                    "Saved {} edge image to: {} ({} edge pixel(s))",
                    preset,
                    preset_path,
                    detection::edge_pixel_count(&preset_edges)
                );
            }
        }
    }

    // Step 3: Thin to 1-pixel strokes
    let skeleton = if config.thin {
        info!("Step 3: Thinning edges...");
        let thinned = thinning::thin(&edges);
        info!("  {} pixel(s) left after thinning", detection::edge_pixel_count(&thinned));
        if args.debug {
            let skeleton_path = format!("{}_skeleton.png", args.output);
            thinned.save(&skeleton_path)?;
            info!("Saved skeleton image to: {}", skeleton_path);
        }
        thinned
    } else {
        info!("Step 3: Thinning skipped");
        edges
    };

    // Step 4: Trace the path
    info!("Step 4: Tracing path...");
    let traced = tracing::trace_edges(&skeleton)?;

    // Step 5: Export
    info!("Step 5: Exporting...");
    if format.includes_svg() {
        export_svg::export_svg(&traced, &format!("{}.svg", args.output), config.show_jumps)?;
    }
    if format.includes_dxf() {
        export_dxf::export_dxf(&traced, &format!("{}.dxf", args.output))?;
    }
    if format.includes_json() {
        export_json::export_json(&traced, &format!("{}.json", args.output))?;
    }

    // Step 6: Optional dry-run replay
    if args.dry_run {
        let pacing = config.pacing.scaled(args.pace.max(0.0));
        info!(
            "Step 6: Dry-run replay (estimated {:.1}s at full pacing)...",
            config.pacing.estimate(&traced.plan).as_secs_f64()
        );
        let mut device = device::LoggingDevice::default();
        let stats = replay(&traced.plan, &mut device, &pacing)?;
        info!(
            "  {} move(s), {} press(es), {} release(s); {} unit(s) drawn, pointer offset {:?}",
            stats.moves, stats.presses, stats.releases, device.drawn, device.position
        );
    }

    info!("Done.");

    Ok(())
}
