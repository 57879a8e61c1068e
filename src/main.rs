//! wled - segment, effect and palette control for WLED LED controllers.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use wled::catalog::{ColorSlot, EffectInfo, effects};
use wled::cli::{self, Cli, Commands, PowerState};
use wled::client::{PanelEvent, WledClient};
use wled::color::{Rgb, SlotColor};
use wled::config::{self, PanelConfig};
use wled::device::{HttpTransport, SegmentPatch, Transport};
use wled::error::{Result, WledError};
use wled::logging;
use wled::output::{
    ConfigReport, LiveReport, Output, OutputMode, PaletteReport, SegmentReport, StatusReport,
};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> Option<&'static str> {
        option_env!("VERGEN_GIT_SHA")
    }

    pub fn build_timestamp() -> Option<&'static str> {
        option_env!("VERGEN_BUILD_TIMESTAMP")
    }
}

/// Everything a command needs besides its own arguments.
struct Context<'a> {
    cli: &'a Cli,
    mode: OutputMode,
    out: &'a dyn Output,
    config_path: PathBuf,
    config: PanelConfig,
}

impl Context<'_> {
    fn connect(&self) -> Result<WledClient<HttpTransport>> {
        let url = self.config.device_url(self.cli.url.as_deref())?;
        let transport = HttpTransport::new(&url)?;
        debug!(url = transport.base_url(), "Connecting");
        Ok(WledClient::with_staleness(transport, self.config.staleness()))
    }

    fn url_of(client: &WledClient<HttpTransport>) -> &str {
        client.transport().base_url()
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.robot, cli.verbose, cli.quiet);

    let mode = OutputMode::from_cli(&cli);
    let out = mode.into_output();

    if let Err(e) = run(&cli, mode, out.as_ref()).await {
        out.error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, mode: OutputMode, out: &dyn Output) -> Result<()> {
    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    // An explicitly named file must exist; the default location may not.
    let config = match (&cli.command, cli.config.is_some()) {
        (Some(Commands::Init(_)), _) => PanelConfig::default(),
        (_, true) => config::load_config(&config_path)?,
        (_, false) => config::load_or_default(&config_path)?,
    };
    let ctx = Context {
        cli,
        mode,
        out,
        config_path,
        config,
    };

    match &cli.command {
        None => print_quick_start(&ctx),
        Some(Commands::Status) => cmd_status(&ctx).await,
        Some(Commands::Power(args)) => cmd_power(&ctx, args).await,
        Some(Commands::Brightness(args)) => cmd_brightness(&ctx, args).await,
        Some(Commands::Segments) => cmd_segments(&ctx).await,
        Some(Commands::Segment(args)) => cmd_segment(&ctx, args).await,
        Some(Commands::AddSegment(args)) => cmd_add_segment(&ctx, args).await,
        Some(Commands::DeleteSegment(args)) => cmd_delete_segment(&ctx, args).await,
        Some(Commands::Palettes(args)) => cmd_palettes(&ctx, args).await,
        Some(Commands::Effects(args)) => cmd_effects(&ctx, args),
        Some(Commands::Live(args)) => cmd_live(&ctx, args).await,
        Some(Commands::Init(args)) => cmd_init(&ctx, args),
        Some(Commands::Config(args)) => cmd_config(&ctx, args),
        Some(Commands::Version) => cmd_version(&ctx),
        Some(Commands::Completions(args)) => cmd_completions(args),
    }
}

// === Quick Start (Robot Mode Optimized) ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    device: &'static str,
    commands: RobotCommands,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct RobotCommands {
    status: &'static str,
    segments: &'static str,
    change_segment: &'static str,
    palettes: &'static str,
    effects: &'static str,
    power: &'static str,
    live: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

fn print_quick_start(ctx: &Context<'_>) -> Result<()> {
    if ctx.mode.is_robot() {
        let help = RobotQuickStart {
            tool: "wled",
            version: build_info::VERSION,
            description: "Segment, effect and palette control for WLED controllers",
            device: "Pass --url <URL>, set WLED_URL, or run: wled init",
            commands: RobotCommands {
                status: "wled status --robot",
                segments: "wled segments --robot",
                change_segment: "wled segment <ID> --fx <EFFECT> --color1 <HEX> --custom-palette",
                palettes: "wled palettes <ID> --robot",
                effects: "wled effects --filter <TEXT> --robot",
                power: "wled power <on|off>",
                live: "wled live --frames 20 --output live.png",
            },
            output_modes: OutputModes {
                human: "--format=text (default)",
                robot: "--robot or --format=json",
                compact: "--format=json-compact",
            },
        };
        println!("{}", serde_json::to_string_pretty(&help)?);
        return Ok(());
    }

    println!(
        "{} {} - WLED control panel\n",
        style("wled").bold().cyan(),
        build_info::VERSION
    );
    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!("  {}  Point at a device", style("wled --url http://<ip> init").green());
    println!("  {}  Device summary", style("wled status").green());
    println!("  {}  Change a segment", style("wled segment 0 --fx fire").green());
    println!("  {}  Palettes for a segment", style("wled palettes 0").green());
    println!("  {}  Watch the LEDs", style("wled live").green());
    println!();
    println!("{}", style("ROBOT MODE").bold().underlined());
    println!();
    println!("  {}  JSON output", style("wled --robot <command>").cyan());
    println!();
    println!("Run {} for full help", style("wled --help").yellow());
    Ok(())
}

// === Device ===

async fn cmd_status(ctx: &Context<'_>) -> Result<()> {
    let client = ctx.connect()?;
    let status = client.refresh().await?;
    ctx.out
        .device_status(&StatusReport::from_status(Context::url_of(&client), &status));
    Ok(())
}

async fn cmd_power(ctx: &Context<'_>, args: &cli::PowerArgs) -> Result<()> {
    let client = ctx.connect()?;
    let on = matches!(args.state, PowerState::On);
    client.set_power(on).await?;
    ctx.out.power_set(on);
    Ok(())
}

async fn cmd_brightness(ctx: &Context<'_>, args: &cli::BrightnessArgs) -> Result<()> {
    let client = ctx.connect()?;
    client.set_brightness(args.level).await?;
    ctx.out.brightness_set(args.level);
    Ok(())
}

// === Segments ===

async fn cmd_segments(ctx: &Context<'_>) -> Result<()> {
    let client = ctx.connect()?;
    let status = client.refresh().await?;
    let reports: Vec<SegmentReport> = status
        .segments()
        .iter()
        .map(SegmentReport::from_view)
        .collect();
    ctx.out.segment_list(&reports);
    Ok(())
}

async fn cmd_segment(ctx: &Context<'_>, args: &cli::SegmentArgs) -> Result<()> {
    let client = ctx.connect()?;
    let status = client.refresh().await?;
    let view = status.require_segment(args.id)?;

    if !args.has_changes() {
        ctx.out.segment_detail(&SegmentReport::from_view(view));
        return Ok(());
    }

    let mut events = client.subscribe();
    let mut patch = args.plain_patch();

    if let Some(fx) = &args.fx {
        let index = resolve_effect(fx, status.effect_names())?;
        client.emit(PanelEvent::EffectSelected {
            segment: args.id,
            effect: index,
        });
        patch.fx = Some(index);
    }
    if let Some(pal) = args.palette.filter(|pal| *pal != view.palette_index()) {
        client.emit(PanelEvent::PaletteSelected {
            segment: args.id,
            palette: pal,
        });
    }

    // All color changes go out in one write so earlier slots are not
    // reverted by later ones.
    let requested = [&args.color1, &args.color2, &args.color3];
    if requested.iter().any(|c| c.is_some()) {
        let mut slots = view.manual_palette_colors();
        for (slot, input) in ColorSlot::ALL.into_iter().zip(requested) {
            let Some(input) = input else { continue };
            let color = parse_color_arg(input)?;
            client.emit(PanelEvent::ColorPicked {
                segment: args.id,
                slot,
                color,
            });
            slots[slot.index()] = SlotColor(color);
        }
        patch.col = Some(slots.to_vec());
    }

    if !patch.is_empty() {
        view.update(patch).await?;
    }

    if args.custom_palette || args.preset_palette {
        let status = client.refresh().await?;
        let view = status.require_segment(args.id)?;
        if args.custom_palette {
            view.select_best_custom_palette().await?;
        } else {
            view.select_best_preset_palette().await?;
        }
    }

    if !ctx.mode.is_robot() {
        while let Ok(event) = events.try_recv() {
            ctx.out.event(&event);
        }
    }

    let status = client.refresh().await?;
    ctx.out
        .segment_detail(&SegmentReport::from_view(status.require_segment(args.id)?));
    Ok(())
}

async fn cmd_add_segment(ctx: &Context<'_>, args: &cli::AddSegmentArgs) -> Result<()> {
    if args.stop <= args.start {
        return Err(WledError::InvalidArgument(format!(
            "stop ({}) must be greater than start ({})",
            args.stop, args.start
        )));
    }
    let client = ctx.connect()?;
    let id = client
        .add_segment(SegmentPatch {
            start: Some(args.start),
            stop: Some(args.stop),
            fx: args.fx,
            pal: args.palette,
            ..SegmentPatch::default()
        })
        .await?;
    info!(id, "Segment added");
    ctx.out.segment_added(id);
    Ok(())
}

async fn cmd_delete_segment(ctx: &Context<'_>, args: &cli::DeleteSegmentArgs) -> Result<()> {
    let client = ctx.connect()?;
    let status = client.ensure_fresh().await?;
    status.require_segment(args.id)?.delete().await?;
    ctx.out.segment_deleted(args.id);
    Ok(())
}

// === Catalogs ===

async fn cmd_palettes(ctx: &Context<'_>, args: &cli::PalettesArgs) -> Result<()> {
    let client = ctx.connect()?;
    if !args.no_gradients {
        // Previews fall back to built-in gradients when paging is unsupported.
        if let Err(e) = client.load_gradients().await {
            debug!(error = %e, "Gradient definitions unavailable");
        }
    }
    let status = client.ensure_fresh().await?;
    let view = status.require_segment(args.id)?;
    ctx.out.palette_list(args.id, &PaletteReport::for_segment(view));
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_effects(ctx: &Context<'_>, args: &cli::EffectsArgs) -> Result<()> {
    let mut list: Vec<&'static EffectInfo> = match &args.filter {
        Some(needle) => effects::search(needle).collect(),
        None => effects::EFFECTS.iter().collect(),
    };
    if args.showcase {
        list.retain(|e| e.showcase);
    }
    ctx.out.effect_list(&list);
    Ok(())
}

// === Live Preview ===

async fn cmd_live(ctx: &Context<'_>, args: &cli::LiveArgs) -> Result<()> {
    if args.frames == 0 {
        return Err(WledError::InvalidArgument("--frames must be at least 1".into()));
    }
    let client = ctx.connect()?;
    let mut live_config = ctx.config.live_config();
    if let Some(ms) = args.interval_ms {
        live_config.interval = Duration::from_millis(ms.max(1));
    }

    let live = client.live_preview(live_config);
    let mut frames = live.subscribe();
    live.set_enabled(true);

    let mut shown = 0;
    while shown < args.frames {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            () = tokio::time::sleep(live_config.interval * 10 + Duration::from_secs(1)) => {
                if !live.is_enabled() {
                    break;
                }
                continue;
            }
        }
        shown = *frames.borrow_and_update();
        if let Some(frame) = live.last_frame() {
            ctx.out.live_frame(shown, &frame.colors());
        }
    }
    live.set_enabled(false);

    if shown == 0 {
        return Err(WledError::DeviceCommunication(
            "live preview stopped before any frame arrived".to_string(),
        ));
    }

    let history = live.history();
    let saved_to = match &args.output {
        Some(path) => {
            let path = config::expand_home(path)?;
            live.save_history(&path, args.scale, args.filter)?;
            Some(path.display().to_string())
        }
        None => None,
    };
    let data_url = if args.data_url {
        Some(live.history_data_url()?)
    } else {
        None
    };

    ctx.out.live_summary(&LiveReport {
        captured_at: chrono::Utc::now(),
        frames: shown,
        width: history.width(),
        rows: history.len(),
        saved_to,
        data_url,
    });
    Ok(())
}

// === Configuration ===

fn cmd_init(ctx: &Context<'_>, args: &cli::InitArgs) -> Result<()> {
    config::init_config(&ctx.config_path, ctx.cli.url.clone(), args.force)?;
    info!(path = %ctx.config_path.display(), "Configuration initialized");
    ctx.out.config_created(&ctx.config_path);
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_config(ctx: &Context<'_>, args: &cli::ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", ctx.config_path.display());
        return Ok(());
    }
    let mut config = ctx.config.clone();
    if let Some(url) = &ctx.cli.url {
        config.device.url = Some(url.clone());
    }
    ctx.out.config_show(&ConfigReport {
        path: ctx.config_path.display().to_string(),
        exists: ctx.config_path.exists(),
        config,
    });
    Ok(())
}

// === Utilities ===

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_version(ctx: &Context<'_>) -> Result<()> {
    ctx.out.version_info(
        build_info::VERSION,
        build_info::git_sha(),
        build_info::build_timestamp(),
    );
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(args: &cli::CompletionsArgs) -> Result<()> {
    clap_complete::generate(args.shell, &mut Cli::command(), "wled", &mut io::stdout());
    Ok(())
}

// === Utility Functions ===

/// `none` clears a slot; anything else must be a hex color.
fn parse_color_arg(input: &str) -> Result<Option<Rgb>> {
    if input.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Rgb::from_hex_str(input).map(Some)
}

/// Numeric id, catalog name, or device-reported name.
fn resolve_effect(input: &str, device_names: &[String]) -> Result<u8> {
    if let Ok(index) = input.parse::<u8>() {
        return Ok(index);
    }
    if let Some(effect) = effects::search(input).next() {
        return Ok(effect.wled_index);
    }
    let needle = input.to_lowercase();
    device_names
        .iter()
        .position(|name| name.to_lowercase().contains(&needle))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| WledError::InvalidArgument(format!("no effect matches '{input}'")))
}
