use chordslide::config::{self, Overrides};
use chordslide::output;
use chordslide::parser::read_song;
use chordslide::render::{RenderOptions, render_song};
use chordslide::typeset::FontBackend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chordslide")]
#[command(about = "Render chord-annotated songs into one slide image per stanza")]
#[command(long_about = "\
Render chord-annotated songs into one slide image per stanza

Song files are plain text. Stanzas are separated by blank lines, chords are
written inline in square brackets, and {name: value} tags label stanzas:

  {title: Amazing Grace}            # header stanza, not rendered

  {comment: Verse 1}                # rendered, saved as 001-Verse-1.png
  A[G]mazing [G7]grace how [C]sweet the [G]sound
  That saved a wretch like [D]me

  {comment: Instrumental}           # chords only, sized to the slide on their own
  [G] [C] [G] [D]

  CCLI Song # 22025                 # end marker: the rest is ignored

Each stanza is sized to the largest font that fits the slide, and every chord
is drawn above the lyric character it was written in front of.

Run 'chordslide gen-config' to generate a documented chordslide.toml.")]
#[command(version)]
struct Cli {
    /// Config file (optional; stock defaults apply when missing)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Output directory for slide images
    #[arg(long, default_value = "slides", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every selected stanza of a song to an image
    Render {
        /// Song file
        song: PathBuf,

        /// Slide width in pixels (overrides the config file)
        #[arg(long)]
        width: Option<u32>,

        /// Slide height in pixels (overrides the config file)
        #[arg(long)]
        height: Option<u32>,

        /// Font file (overrides the config file)
        #[arg(long)]
        font: Option<PathBuf>,
    },
    /// Parse a song and list the stanzas that would be rendered
    Check {
        /// Song file
        song: PathBuf,
    },
    /// Dump the parsed song as JSON
    Parse {
        /// Song file
        song: PathBuf,
    },
    /// Print a stock chordslide.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            song,
            width,
            height,
            font,
        } => {
            let overrides = Overrides {
                width,
                height,
                font,
            };
            let config = config::load_config(&cli.config)?.with_overrides(&overrides)?;

            println!("==> Parsing {}", song.display());
            let parsed = read_song(&song, &config.parse_options())?;

            let backend = FontBackend::load(&config.font.path, config.palette())?;

            println!(
                "==> Rendering {}x{} slides \u{2192} {}",
                config.canvas.width,
                config.canvas.height,
                cli.output.display()
            );
            let report = render_song(
                &parsed,
                &cli.output,
                &RenderOptions::from_config(&config),
                &backend,
            )?;
            output::print_render_output(&report);

            if !report.is_success() {
                println!("==> Some slides failed");
                std::process::exit(1);
            }
            println!("==> Render complete: {}", cli.output.display());
        }
        Command::Check { song } => {
            let config = config::load_config(&cli.config)?;
            println!("==> Checking {}", song.display());
            let parsed = read_song(&song, &config.parse_options())?;
            output::print_check_output(&parsed, &config.song.selector_tag);
            println!("==> Song is valid");
        }
        Command::Parse { song } => {
            let config = config::load_config(&cli.config)?;
            let parsed = read_song(&song, &config.parse_options())?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
