#![deny(unsafe_code)]
//! CLI binary for pixel-mosaic.
//!
//! Subcommands:
//! - `pixelate <input>` / `compress <input>`: block transform, write PNG
//! - `apply <input>`: transform described by a JSON params object
//! - `ascii <input>`: render as ASCII-art text
//! - `fit`: compute an aspect-preserving fitted size
//! - `list`: print available transforms and the default ramp

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use log::{debug, info};
use mosaic_core::transform::block_size_from_signed;
use mosaic_core::{
    fit_size, render_with_ramp, Divisor, Mode, Picture, Ramp, Transform, TransformKind,
    DEFAULT_RAMP,
};
use mosaic_io::snapshot::write_png;
use mosaic_io::text::{join_rows, write_text};
use mosaic_io::{load_picture, Bounds};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "mosaic", about = "Pixelate, compress, and ASCII-render images")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every command that loads an image.
#[derive(Args)]
struct InputArgs {
    /// Input image file.
    input: PathBuf,

    /// Shrink the image to fit this width before processing.
    #[arg(long, requires = "max_height")]
    max_width: Option<f64>,

    /// Shrink the image to fit this height before processing.
    #[arg(long, requires = "max_width")]
    max_height: Option<f64>,
}

impl InputArgs {
    fn bounds(&self) -> Option<Bounds> {
        match (self.max_width, self.max_height) {
            (Some(w), Some(h)) => Some(Bounds::new(w, h)),
            _ => None,
        }
    }

    fn load(&self) -> Result<Picture, CliError> {
        let picture = load_picture(&self.input, self.bounds())?;
        info!(
            "loaded {} ({}x{})",
            self.input.display(),
            picture.width(),
            picture.height()
        );
        Ok(picture)
    }
}

/// Options for the block transforms.
#[derive(Args)]
struct BlockArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Block size in pixels.
    #[arg(short = 'k', long, default_value_t = 8, allow_negative_numbers = true)]
    block_size: i64,

    /// Divide edge blocks by the nominal block area instead of the in-bounds count.
    #[arg(long)]
    nominal_divisor: bool,

    /// Output file path.
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Replace each k x k block with its average color (same size output).
    Pixelate(BlockArgs),
    /// Downsample so each k x k block becomes one pixel.
    Compress(BlockArgs),
    /// Run a transform described by a JSON params object.
    Apply {
        #[command(flatten)]
        input: InputArgs,

        /// Transform parameters, e.g. '{"mode":"compress","block_size":4}'.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Render the image as ASCII-art text.
    Ascii {
        #[command(flatten)]
        input: InputArgs,

        /// Glyph ramp, heaviest first.
        #[arg(long, default_value = DEFAULT_RAMP)]
        ramp: String,

        /// Output text file; prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the size an image would be fitted to inside a bounding box.
    Fit {
        /// Natural image width.
        width: f64,
        /// Natural image height.
        height: f64,
        /// Bounding box width.
        max_width: f64,
        /// Bounding box height.
        max_height: f64,
    },
    /// List available transforms and the default ramp.
    List,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run_transform(
    picture: &Picture,
    transform: &TransformKind,
    output: &Path,
    json: bool,
) -> Result<(), CliError> {
    debug!("applying {}", transform.params());
    let result = transform.apply(picture)?;
    write_png(&result, output)?;
    info!("wrote {}", output.display());

    if json {
        let info = serde_json::json!({
            "transform": transform.params(),
            "input_size": [picture.width(), picture.height()],
            "output_size": [result.width(), result.height()],
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "{} k={} ({}x{} -> {}x{}) -> {}",
            transform.name(),
            transform.block_size(),
            picture.width(),
            picture.height(),
            result.width(),
            result.height(),
            output.display()
        );
    }
    Ok(())
}

fn run_block(args: BlockArgs, mode: Mode, json: bool) -> Result<(), CliError> {
    let block_size = block_size_from_signed(args.block_size)?;
    let divisor = if args.nominal_divisor {
        Divisor::NominalArea
    } else {
        Divisor::InBounds
    };
    let transform = TransformKind::with_divisor(mode, block_size, divisor)?;
    let picture = args.input.load()?;
    run_transform(&picture, &transform, &args.output, json)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let transforms = TransformKind::list_transforms();
            if cli.json {
                let info = serde_json::json!({
                    "transforms": transforms,
                    "ramp": DEFAULT_RAMP,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Transforms:");
                for name in transforms {
                    println!("  {name}");
                }
                println!("Ramp:");
                println!("  \"{DEFAULT_RAMP}\"");
            }
        }
        Command::Pixelate(args) => run_block(args, Mode::Pixelate, cli.json)?,
        Command::Compress(args) => run_block(args, Mode::Compress, cli.json)?,
        Command::Apply {
            input,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let transform = TransformKind::from_json(&params)?;
            let picture = input.load()?;
            run_transform(&picture, &transform, &output, cli.json)?;
        }
        Command::Ascii {
            input,
            ramp,
            output,
        } => {
            let ramp = Ramp::new(&ramp)?;
            let picture = input.load()?;
            let rows = render_with_ramp(&picture, &ramp);
            match output {
                Some(path) => {
                    write_text(&rows, &path)?;
                    info!("wrote {} rows to {}", rows.len(), path.display());
                    if cli.json {
                        let info = serde_json::json!({
                            "rows": rows.len(),
                            "columns": picture.width(),
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    }
                }
                None if cli.json => {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                None => print!("{}", join_rows(&rows)),
            }
        }
        Command::Fit {
            width,
            height,
            max_width,
            max_height,
        } => {
            let fit = fit_size(width, height, max_width, max_height)?;
            let (w, h) = fit.to_pixels();
            if cli.json {
                let info = serde_json::json!({
                    "exact": fit,
                    "pixels": [w, h],
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{w}x{h}");
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_pixelate_with_block_size() {
        let cli = Cli::try_parse_from(["mosaic", "pixelate", "in.png", "-k", "4"]).unwrap();
        match cli.command {
            Command::Pixelate(args) => {
                assert_eq!(args.block_size, 4);
                assert_eq!(args.input.input, PathBuf::from("in.png"));
                assert!(args.input.bounds().is_none());
            }
            _ => panic!("expected pixelate"),
        }
    }

    #[test]
    fn negative_block_size_reaches_core_validation() {
        let cli = Cli::try_parse_from(["mosaic", "compress", "in.png", "-k", "-2"]).unwrap();
        let Command::Compress(args) = cli.command else {
            panic!("expected compress");
        };
        assert!(matches!(
            block_size_from_signed(args.block_size),
            Err(mosaic_core::MosaicError::InvalidBlockSize(-2))
        ));
    }

    #[test]
    fn bounds_require_both_dimensions() {
        let result = Cli::try_parse_from(["mosaic", "ascii", "in.png", "--max-width", "80"]);
        assert!(result.is_err());
        let cli = Cli::try_parse_from([
            "mosaic",
            "ascii",
            "in.png",
            "--max-width",
            "80",
            "--max-height",
            "40",
        ])
        .unwrap();
        let Command::Ascii { input, .. } = cli.command else {
            panic!("expected ascii");
        };
        assert_eq!(input.bounds(), Some(Bounds::new(80.0, 40.0)));
    }

    #[test]
    fn zero_block_size_is_transform_error() {
        let args = BlockArgs {
            input: InputArgs {
                input: PathBuf::from("unused.png"),
                max_width: None,
                max_height: None,
            },
            block_size: 0,
            nominal_divisor: false,
            output: PathBuf::from("unused_out.png"),
        };
        let err = run_block(args, Mode::Pixelate, false).err().unwrap();
        assert_eq!(err.exit_code(), 10);
    }
}
