use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use patterngen::units::{DEFAULT_MARGIN_MM, DEFAULT_PPI, DEFAULT_SQUARE_SIZE_MM};
use patterngen::{Checkerboard, Noise, PaperSize};

/// Generate checkerboard and noise test images.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Checkerboard with optional pixel or millimetre square size.
    Checker(CheckerArgs),
    /// Gaussian noise field.
    Noise(NoiseArgs),
}

#[derive(Debug, Args)]
struct CheckerArgs {
    /// Number of squares vertically.
    #[arg(long, default_value_t = 7)]
    rows: usize,

    /// Number of squares horizontally.
    #[arg(long, default_value_t = 11)]
    cols: usize,

    /// Square side in pixels.
    #[arg(long, conflicts_with_all = ["square_mm", "paper"])]
    square_px: Option<usize>,

    /// Square side in millimetres, converted with --ppi.
    #[arg(long)]
    square_mm: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_PPI, requires = "square_mm")]
    ppi: f64,

    /// Lay the board out on a page (A0..A6).
    #[arg(long, value_parser = PaperSize::lookup)]
    paper: Option<PaperSize>,

    #[arg(long, default_value_t = DEFAULT_MARGIN_MM, requires = "paper")]
    margin_mm: f64,

    #[arg(short, long, default_value = "checkerboard_px.png")]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct NoiseArgs {
    #[arg(long, default_value_t = 420)]
    height: usize,

    #[arg(long, default_value_t = 594)]
    width: usize,

    /// Single gray channel instead of RGB.
    #[arg(long)]
    mono: bool,

    /// Seed for reproducible output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, default_value = "noise_px.png")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = try_main(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn try_main(cli: Cli) -> patterngen::Result<()> {
    match cli.command {
        Command::Checker(args) => run_checker(args),
        Command::Noise(args) => run_noise(args),
    }
}

fn run_checker(args: CheckerArgs) -> patterngen::Result<()> {
    let board = Checkerboard::new(args.rows, args.cols)?;

    if let Some(paper) = args.paper {
        let square_mm = args.square_mm.unwrap_or(DEFAULT_SQUARE_SIZE_MM);
        return board.save_page(&args.output, paper, square_mm, args.margin_mm);
    }

    match (args.square_px, args.square_mm) {
        (_, Some(square_mm)) => board.save_mm(&args.output, square_mm, args.ppi),
        (Some(square_px), None) => board.save_raw(&args.output, square_px),
        (None, None) => board.save_raw_default(&args.output),
    }
}

fn run_noise(args: NoiseArgs) -> patterngen::Result<()> {
    let noise = match args.seed {
        Some(seed) => Noise::from_seed(args.height, args.width, args.mono, seed)?,
        None => Noise::from_entropy(args.height, args.width, args.mono)?,
    };

    noise.save_raw(&args.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn checker_defaults_match_sample_board() {
        let cli = Cli::try_parse_from(["patterngen", "checker"]).unwrap();
        match cli.command {
            Command::Checker(args) => {
                assert_eq!((args.rows, args.cols), (7, 11));
                assert_eq!(args.square_px, None);
                assert_eq!(args.output, PathBuf::from("checkerboard_px.png"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn paper_name_is_parsed() {
        let cli = Cli::try_parse_from(["patterngen", "checker", "--paper", "a4"]).unwrap();
        match cli.command {
            Command::Checker(args) => assert_eq!(args.paper, Some(PaperSize::A4)),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["patterngen", "checker", "--paper", "b5"]).is_err());
    }

    #[test]
    fn pixel_and_mm_sizes_conflict() {
        let res = Cli::try_parse_from([
            "patterngen", "checker", "--square-px", "10", "--square-mm", "36",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn noise_flags() {
        let cli = Cli::try_parse_from(["patterngen", "-vv", "noise", "--mono", "--seed", "9"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Noise(args) => {
                assert!(args.mono);
                assert_eq!(args.seed, Some(9));
                assert_eq!((args.height, args.width), (420, 594));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
