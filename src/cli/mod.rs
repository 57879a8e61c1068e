//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::URL_ENV;
use crate::device::SegmentPatch;
use crate::image_ops::ScaleFilter;

/// wled - segment, effect and palette control for WLED LED controllers.
///
/// Robot Mode: Use --robot or --format json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "wled", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Device base URL, e.g. http://192.168.1.50
    #[arg(long, short = 'u', global = true, env = URL_ENV)]
    pub url: Option<String>,

    /// Configuration file (default: <config dir>/wled/config.toml)
    #[arg(long, short = 'c', global = true, env = "WLED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "WLED_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// More log output (-v debug, -vv trace, -vvv trace including HTTP)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Device ===
    /// Show device summary and segments
    Status,

    /// Turn the whole device on or off
    Power(PowerArgs),

    /// Set master brightness (0-255)
    Brightness(BrightnessArgs),

    // === Segments ===
    /// List segments
    Segments,

    /// Show or change one segment
    Segment(SegmentArgs),

    /// Create a segment with the next free id
    AddSegment(AddSegmentArgs),

    /// Delete a segment
    DeleteSegment(DeleteSegmentArgs),

    // === Catalogs ===
    /// List the palettes available to a segment, grouped
    Palettes(PalettesArgs),

    /// List known effects
    Effects(EffectsArgs),

    // === Live Preview ===
    /// Stream the LED colors the device is currently showing
    Live(LiveArgs),

    // === Configuration ===
    /// Write a default configuration file
    Init(InitArgs),

    /// Show current configuration
    Config(ConfigArgs),

    // === Utilities ===
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PowerState {
    On,
    Off,
}

#[derive(Parser, Debug)]
pub struct PowerArgs {
    pub state: PowerState,
}

#[derive(Parser, Debug)]
pub struct BrightnessArgs {
    /// Brightness level (0-255)
    pub level: u8,
}

/// Show a segment, or change it when any option is given.
///
/// # Examples
///
/// ```bash
/// # Fire effect with the heat palette chosen automatically
/// wled segment 0 --fx 66 --palette 0
///
/// # Two manual colors, then the best palette for them
/// wled segment 1 --color1 ff0000 --color2 0000ff --custom-palette
/// ```
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct SegmentArgs {
    /// Segment id
    pub id: u8,

    /// Effect: numeric id or (part of) a name
    #[arg(long, visible_alias = "effect")]
    pub fx: Option<String>,

    /// Effect speed (0-255)
    #[arg(long)]
    pub speed: Option<u8>,

    /// Effect intensity (0-255)
    #[arg(long)]
    pub intensity: Option<u8>,

    /// Palette id
    #[arg(long)]
    pub palette: Option<u8>,

    /// Pick the best palette for the manual colors
    #[arg(long, conflicts_with_all = ["palette", "preset_palette"])]
    pub custom_palette: bool,

    /// Switch back to the effect's automatic palette
    #[arg(long, conflicts_with = "palette")]
    pub preset_palette: bool,

    /// Segment brightness (0-255)
    #[arg(long)]
    pub brightness: Option<u8>,

    /// Primary color as hex; "none" clears the slot
    #[arg(long)]
    pub color1: Option<String>,

    /// Secondary color as hex; "none" clears the slot
    #[arg(long)]
    pub color2: Option<String>,

    /// Tertiary color as hex; "none" clears the slot
    #[arg(long)]
    pub color3: Option<String>,

    /// Switch the segment on
    #[arg(long, conflicts_with = "off")]
    pub on: bool,

    /// Switch the segment off
    #[arg(long)]
    pub off: bool,

    /// Mirror the effect
    #[arg(long, value_name = "BOOL")]
    pub mirror: Option<bool>,

    /// Reverse the effect direction
    #[arg(long, value_name = "BOOL")]
    pub reverse: Option<bool>,

    /// First LED
    #[arg(long)]
    pub start: Option<u16>,

    /// LED after the last one
    #[arg(long)]
    pub stop: Option<u16>,
}

impl SegmentArgs {
    /// Whether any change was requested.
    pub fn has_changes(&self) -> bool {
        self.fx.is_some()
            || self.custom_palette
            || self.preset_palette
            || self.color1.is_some()
            || self.color2.is_some()
            || self.color3.is_some()
            || !self.plain_patch().is_empty()
    }

    /// Fields that map directly onto the wire.
    pub fn plain_patch(&self) -> SegmentPatch {
        let on = if self.on {
            Some(true)
        } else if self.off {
            Some(false)
        } else {
            None
        };
        SegmentPatch {
            start: self.start,
            stop: self.stop,
            sx: self.speed,
            ix: self.intensity,
            pal: self.palette,
            bri: self.brightness,
            on,
            mi: self.mirror,
            rev: self.reverse,
            ..SegmentPatch::default()
        }
    }
}

#[derive(Parser, Debug)]
pub struct AddSegmentArgs {
    /// First LED
    #[arg(long)]
    pub start: u16,

    /// LED after the last one
    #[arg(long)]
    pub stop: u16,

    /// Effect id
    #[arg(long)]
    pub fx: Option<u8>,

    /// Palette id
    #[arg(long)]
    pub palette: Option<u8>,
}

#[derive(Parser, Debug)]
pub struct DeleteSegmentArgs {
    /// Segment id
    pub id: u8,
}

#[derive(Parser, Debug)]
pub struct PalettesArgs {
    /// Segment id
    #[arg(default_value = "0")]
    pub id: u8,

    /// Skip fetching gradient definitions from the device
    #[arg(long)]
    pub no_gradients: bool,
}

#[derive(Parser, Debug)]
pub struct EffectsArgs {
    /// Only effects whose name contains this text
    #[arg(long, short = 'F')]
    pub filter: Option<String>,

    /// Only the curated showcase effects
    #[arg(long)]
    pub showcase: bool,
}

#[derive(Parser, Debug)]
pub struct LiveArgs {
    /// Stop after this many frames
    #[arg(long, short = 'n', default_value = "50")]
    pub frames: u64,

    /// Save the frame history as a PNG
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Pixel size of each LED in the saved image (1-64)
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,

    /// Scaling filter for the saved image
    #[arg(long, default_value = "nearest")]
    pub filter: ScaleFilter,

    /// Include a PNG data URL of the history in the summary
    #[arg(long)]
    pub data_url: bool,

    /// Poll interval in milliseconds (overrides the config)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Only print the configuration file path
    #[arg(long)]
    pub path: bool,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_segment_plain_patch() {
        let cli = Cli::parse_from([
            "wled", "segment", "2", "--speed", "90", "--off", "--mirror", "true",
        ]);
        let Some(Commands::Segment(args)) = cli.command else {
            panic!("expected segment command");
        };
        assert!(args.has_changes());
        let patch = args.plain_patch();
        assert_eq!(patch.sx, Some(90));
        assert_eq!(patch.on, Some(false));
        assert_eq!(patch.mi, Some(true));
        assert_eq!(patch.ix, None);
    }

    #[test]
    fn test_segment_without_options_is_a_query() {
        let cli = Cli::parse_from(["wled", "segment", "0"]);
        let Some(Commands::Segment(args)) = cli.command else {
            panic!("expected segment command");
        };
        assert!(!args.has_changes());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["wled", "-vvv", "status"]);
        assert_eq!(cli.verbose, 3);
        assert!(!cli.use_json());
    }

    #[test]
    fn test_robot_implies_json() {
        let cli = Cli::parse_from(["wled", "--robot", "effects"]);
        assert!(cli.use_json());
        assert!(!cli.use_compact_json());
    }

    #[test]
    fn test_live_scale_is_bounded() {
        let cli = Cli::parse_from(["wled", "live", "--scale", "64"]);
        let Some(Commands::Live(args)) = cli.command else {
            panic!("expected live command");
        };
        assert_eq!(args.scale, 64);

        for scale in ["0", "65", "2000000000"] {
            assert!(Cli::try_parse_from(["wled", "live", "--scale", scale]).is_err());
        }
    }
}
