//! fidu CLI: 2D fiducial marker generator for MultiTaction displays.

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use fidu::{MarkerBuilder, DEFAULT_BLOCK_SIZE, DEFAULT_DIVISION};

#[derive(Parser, Debug)]
#[command(name = "fidu")]
#[command(about = "2D fiducial markers generator for MultiTaction displays")]
#[command(version, author = "Nuno Maia")]
struct Cli {
    /// Code value to generate, a 32-bit integer value.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    code: i32,

    /// Number of pixels per block, range from 16 to 32.
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    blocksize: u32,

    /// Number of blocks in X/Y directions, range from 3 to 8.
    #[arg(short, long, default_value_t = DEFAULT_DIVISION)]
    division: u32,

    /// Size of the marker in pixels; derives the block size and must be a multiple of division + 4.
    #[arg(short, long)]
    size: Option<u32>,

    /// Name of the output file, default 'code-[number].png'.
    #[arg(short, long, default_value = "")]
    filename: String,

    /// Leave the outer ring transparent instead of black.
    #[arg(long)]
    no_border: bool,

    /// Print a text preview of the code grid.
    #[arg(long)]
    preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new().filter_level(level).parse_default_env().try_init();
}

fn run(cli: Cli) -> fidu::MarkerResult<()> {
    let mut builder = MarkerBuilder::new(cli.code);
    builder.division(cli.division).block_size(cli.blocksize).border(!cli.no_border);
    if let Some(size) = cli.size {
        builder.size(size);
    }
    if !cli.filename.is_empty() {
        builder.name(cli.filename);
    }

    let marker = builder.build()?;
    if cli.preview {
        print!("{}", marker.to_str());
    }

    let path = marker.save()?;
    println!("Saved code to {}", path.display());

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
