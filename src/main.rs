use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomview::loader::{self, LoaderLimits};
use roomview::models::{AppConfig, PhotoInfo};
use roomview::rendering::write_indexed_png;
use roomview::services::RenderService;

const DEFAULT_CONFIG: &str = "rooms.yaml";

#[derive(Parser)]
#[command(name = "roomview")]
#[command(about = "Quantize room photos and render scrolling views to PNG")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize a photo file and write it as an indexed PNG
    Quantize {
        /// Photo file (5:6:5 pixels, bottom row first)
        photo: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Config file to take loader limits from
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Compose a room's view window at a scroll position and write it as PNG
    Render {
        /// Rooms config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Room name (defaults to the config's default_room)
        #[arg(short, long)]
        room: Option<String>,

        /// Left edge of the view in room coordinates
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        x: i32,

        /// Top edge of the view in room coordinates
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        y: i32,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print quantization statistics for a photo file
    Info {
        /// Photo file
        photo: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Quantize {
            photo,
            output,
            config,
        }) => {
            init_tracing();
            run_quantize_command(&photo, &output, config.as_deref())
        }
        Some(Commands::Render {
            config,
            room,
            x,
            y,
            output,
        }) => {
            init_tracing();
            run_render_command(&config, room.as_deref(), x, y, &output)
        }
        Some(Commands::Info { photo, json }) => {
            init_tracing();
            run_info_command(&photo, json)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomview=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn limits_from(config: Option<&Path>) -> LoaderLimits {
    match config {
        Some(path) => AppConfig::load_or_default(path).limits,
        None => LoaderLimits::default(),
    }
}

/// Quantize a photo file into an indexed PNG
fn run_quantize_command(
    photo: &Path,
    output: &Path,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let limits = limits_from(config);
    let quantized = loader::load_photo(photo, &limits)?;

    let mut palette = photo_quant::Palette::with_rgb222_sprites();
    palette.load_photo(quantized.palette());
    let indexed = quantized.photo();

    write_indexed_png(
        output,
        u32::try_from(indexed.width())?,
        u32::try_from(indexed.height())?,
        indexed.indices(),
        &palette,
    )?;

    let stats = quantized.stats();
    println!(
        "Quantized {}x{} photo to {} ({} fine buckets, {} coarse buckets)",
        indexed.width(),
        indexed.height(),
        output.display(),
        stats.fine_buckets_used,
        stats.coarse_buckets_used
    );
    Ok(())
}

/// Render one view window of a room to PNG
fn run_render_command(
    config_path: &Path,
    room: Option<&str>,
    x: i32,
    y: i32,
    output: &Path,
) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;
    let mut service = RenderService::new(config);
    service.enter_room(room)?;

    let png = service.render_png(x, y)?;
    std::fs::write(output, &png)?;

    let view = service.view();
    println!(
        "Rendered {}x{} view at ({x}, {y}) to {} ({} bytes)",
        view.width,
        view.height,
        output.display(),
        png.len()
    );
    Ok(())
}

/// Print histogram and palette statistics for a photo
fn run_info_command(photo: &Path, json: bool) -> anyhow::Result<()> {
    let raw = loader::read_photo(photo, &LoaderLimits::default())?;
    let info = PhotoInfo::analyze(&raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Photo:          {}", photo.display());
    println!("Size:           {}x{} ({} pixels)", info.width, info.height, info.pixels);
    println!("Fine buckets:   {} of 4096 used", info.fine_buckets_used);
    println!("Coarse buckets: {} of 64 used", info.coarse_buckets_used);
    println!(
        "Promoted:       {} pixels ({:.1}%)",
        info.promoted_pixels,
        info.promoted_ratio() * 100.0
    );

    if !info.promoted.is_empty() {
        println!("\nTop buckets:");
        for bucket in info.promoted.iter().take(8) {
            let [r, g, b] = bucket.color;
            println!(
                "  slot {:3}  key {:03x}  {:6} px  rgb({r}, {g}, {b})",
                bucket.slot, bucket.key, bucket.count
            );
        }
    }
    Ok(())
}

/// Print version, environment and commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let rust_log = std::env::var("RUST_LOG").ok();
    let config_exists = Path::new(DEFAULT_CONFIG).exists();

    println!("Roomview v{VERSION}");
    println!("Scrolling room viewer for 192-color indexed displays\n");

    println!("Environment Variables:");
    println!(
        "  RUST_LOG = {}",
        rust_log.as_deref().unwrap_or("roomview=warn (default)")
    );

    println!("\nConfig:");
    if config_exists {
        let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG));
        let rooms = config.rooms.len();
        println!(
            "  {DEFAULT_CONFIG} ({rooms} {}, view {}x{})",
            if rooms == 1 { "room" } else { "rooms" },
            config.view.width,
            config.view.height
        );
    } else {
        println!("  {DEFAULT_CONFIG} (not found)");
    }

    println!("\nCommands:");
    println!("  roomview quantize  Quantize a photo file to PNG");
    println!("  roomview render    Render a room view to PNG");
    println!("  roomview info      Print photo quantization statistics");
    println!("\nRun 'roomview --help' for more details.");
}
