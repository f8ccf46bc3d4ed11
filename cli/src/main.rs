use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

use tilegrid_core::{split, NameList, NameListMode, TileSpec};

#[derive(Parser)]
#[command(name = "tilegrid")]
#[command(about = "Split grid images into named 24-bit BMP tiles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a grid image into tiles
    Split {
        /// Source image path
        input: PathBuf,

        /// Output folder for the tiles
        output: PathBuf,

        /// Tile width in pixels
        tile_width: u32,

        /// Tile height in pixels
        tile_height: u32,

        /// Gap between adjacent tiles in pixels
        spacing: u32,

        /// Name list file (one name per line or per character)
        #[arg(short, long)]
        name_list: Option<PathBuf>,

        /// How to split the name list file
        #[arg(short = 'm', long, value_enum, default_value_t = SplitMode::Line)]
        name_list_mode: SplitMode,
    },

    /// Re-encode a single image as 24-bit BMP
    Convert {
        /// Source image path
        input: PathBuf,

        /// Output file path
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SplitMode {
    /// One name per line
    Line,
    /// One name per character
    Char,
}

impl From<SplitMode> for NameListMode {
    fn from(mode: SplitMode) -> Self {
        match mode {
            SplitMode::Line => NameListMode::Line,
            SplitMode::Char => NameListMode::Char,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output,
            tile_width,
            tile_height,
            spacing,
            name_list,
            name_list_mode,
        } => {
            run_split(
                &input,
                &output,
                tile_width,
                tile_height,
                spacing,
                name_list.as_deref(),
                name_list_mode.into(),
            )?;
        }
        Commands::Convert { input, output } => {
            run_convert(&input, &output)?;
        }
    }

    Ok(())
}

fn run_split(
    input: &Path,
    output: &Path,
    tile_width: u32,
    tile_height: u32,
    spacing: u32,
    name_list: Option<&Path>,
    mode: NameListMode,
) -> Result<()> {
    let spec = TileSpec::new(tile_width, tile_height, spacing)?;

    let names = match name_list {
        Some(path) => tilegrid_io::read_name_list(path, mode)?,
        None => NameList::default(),
    };

    let source = tilegrid_io::read_image(input)?;
    info!(
        "Splitting {} into {}x{} tiles with spacing {}",
        input.display(),
        tile_width,
        tile_height,
        spacing
    );

    let tiles = split(&source, &spec, names);
    let written = tilegrid_io::write_tiles(&tiles, output)?;

    println!("Saved {} tiles to {}", written, output.display());
    Ok(())
}

fn run_convert(input: &Path, output: &Path) -> Result<()> {
    tilegrid_io::convert_image(input, output)?;
    println!("Converted: {} -> {}", input.display(), output.display());
    Ok(())
}
