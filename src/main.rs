use clap::{Parser, Subcommand};
use reel_folio::{compose, config, generate, output};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once; only called while building the CLI
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "reel-folio")]
#[command(about = "Single-page portfolio generator for embedded videos")]
#[command(long_about = "\
Single-page portfolio generator for embedded videos

One config document describes the whole page. Long video lists show a
featured subset on the home page and a \"see more\" gallery with everything.

Content structure:

  content/
  ├── config.json        # Page description (config.toml also accepted)
  └── assets/            # Copied to dist/assets/ (favicon, images)

Supported video links (\"type\" is case-insensitive):
  youtube       watch?v=, shorts/, embed/, youtu.be/ links or an 11-char ID
  gdrive/drive  drive.google.com/file/d/<id>/... share links
  vimeo         vimeo.com/<number> or the number
  dailymotion   dailymotion.com/video/<id> or the ID

Run 'reel-folio gen-config' to print a starter config.json.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page into the output directory
    Build,
    /// Validate the config and list every video's embed without writing
    Check,
    /// Print a starter config.json with every option
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let page = compose::compose(&site_config);
            output::print_check_output(&site_config, &page);
            let unavailable = generate::summarize_sections(&site_config, &page)
                .iter()
                .map(|s| s.unavailable)
                .sum::<usize>();
            if unavailable == 0 {
                println!("==> Content is valid");
            } else {
                println!("==> {} video(s) will show as unavailable", unavailable);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_json());
        }
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
