// Derive a palette from a base color, then export it as code or print
// its accessibility matrix:
//
//     color-harmony-tools --base '#3b82f6' --harmony triadic export -f css
//     color-harmony-tools --config palette.hjson check
//
// Set RUST_LOG=debug to follow the palette state transitions.

use std::{fs::File,
          io::{self, BufWriter, Write},
          path::PathBuf};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use color_harmony::{Color, HarmonyMode, PaletteRole, PaletteState, DEFAULT_BASE};
use color_harmony::contrast::AccessibilityReport;
use color_harmony::export::export;

mod config;
use config::{Config, Err, Format};

#[derive(Parser, Debug)]
#[command(name = "color-harmony-tools",
          about = "Derive a harmonious palette from a single base color")]
struct Cli {
    /// Hjson configuration file (command line options take precedence).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base color, `#rgb` or `#rrggbb` [default: #3b82f6].
    #[arg(short, long, global = true)]
    base: Option<Color>,

    /// analogous, complementary, split-complementary, triadic or
    /// monochromatic [default: analogous].
    #[arg(long, global = true)]
    harmony: Option<HarmonyMode>,

    /// Set a role by hand, e.g. `accent=#f59e0b`.  The role is locked
    /// against the harmony.  Repeatable.
    #[arg(long = "set", value_name = "ROLE=HEX", value_parser = parse_override,
          global = true)]
    overrides: Vec<(PaletteRole, Color)>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Write the palette as code (the default command).
    Export {
        /// tailwind, css, scss or json [default: tailwind].
        #[arg(short, long)]
        format: Option<Format>,
        /// Output file [default: standard output].
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the WCAG contrast of the palette.
    Check,
}

fn parse_override(s: &str) -> Result<(PaletteRole, Color), String> {
    let (role, hex) = s.split_once('=')
        .ok_or_else(|| format!("expected ROLE=HEX, got `{s}`"))?;
    let role = role.parse().map_err(|e| format!("{e}"))?;
    let color = hex.parse().map_err(|e| format!("{e}"))?;
    Ok((role, color))
}

fn build_palette(cli: &Cli, config: &Config) -> PaletteState {
    let base = cli.base.or(config.base).unwrap_or(DEFAULT_BASE);
    let harmony = cli.harmony.or(config.harmony).unwrap_or_default();
    debug!(%base, %harmony, "building palette");
    let mut palette = PaletteState::new(base, harmony);
    // Command line edits come last so they win over the file.
    for &(role, color) in config.overrides.iter().chain(&cli.overrides) {
        palette.set_color(role, color);
    }
    palette
}

fn render(palette: &PaletteState, format: Format) -> Result<String, Err> {
    Ok(match format {
        Format::Code(f) => export(palette, f),
        Format::Json => serde_json::to_string_pretty(palette)? + "\n",
    })
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let palette = build_palette(&cli, &config);

    match cli.command.unwrap_or(Command::Export { format: None, output: None }) {
        Command::Export { format, output } => {
            let format = format.or(config.format).unwrap_or_default();
            let text = render(&palette, format)?;
            match output {
                Some(path) => {
                    let mut fh = BufWriter::new(File::create(&path)?);
                    fh.write_all(text.as_bytes())?;
                    fh.flush()?;
                    info!(path = %path.display(), ?format, "palette written");
                }
                None => io::stdout().lock().write_all(text.as_bytes())?,
            }
        }
        Command::Check => print!("{}", AccessibilityReport::of(&palette)),
    }
    Ok(())
}
