use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use jf_engine::{BdfFont, FontArchive, FontSet, NativeFont, ZipFontArchive, bdf, native};

#[derive(Parser)]
#[command(version, about = "Converts .jf game fonts to BDF and back.", long_about = None)]
pub struct Cli {
    #[arg(help = "Print debug output.", long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Export fonts of a .jf file or zip archive to BDF")]
    Export {
        #[arg(help = "A .jf font or a zip archive with .jf fonts.")]
        input: PathBuf,

        #[arg(help = "Output directory.", long, short, default_value = ".")]
        output: PathBuf,

        #[arg(help = "Only export this font (may be repeated).", long = "font")]
        fonts: Vec<String>,
    },

    #[command(about = "Encode BDF fonts into .jf fonts")]
    Import {
        #[arg(help = "BDF files to encode.", required = true)]
        inputs: Vec<PathBuf>,

        #[arg(help = "Output directory, or a .zip archive to add the fonts to.", long, short)]
        output: PathBuf,

        #[arg(help = "Don't compress the zip archive.", long, default_value_t = false)]
        store: bool,
    },

    #[command(about = "Show the glyph metrics of .jf fonts")]
    Info {
        #[arg(help = "A .jf font or a zip archive with .jf fonts.")]
        input: PathBuf,
    },
}

fn main() {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let _logger = match Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    };

    if let Err(err) = run(args.command) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Export { input, output, fonts } => export(&input, &output, &fonts),
        Commands::Import { inputs, output, store } => import(&inputs, &output, !store),
        Commands::Info { input } => info(&input),
    }
}

fn is_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn file_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .with_context(|| format!("{} has no file name", path.display()))
}

/// Load a single .jf file or the fonts of a zip archive. With no `names`
/// every .jf entry of the archive is loaded.
fn load_fonts(input: &Path, names: &[String]) -> anyhow::Result<FontSet> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let mut set = FontSet::new();
    if is_extension(input, native::EXTENSION) {
        set.push(NativeFont::from_bytes(&file_name(input)?, data)?);
        return Ok(set);
    }

    let archive = ZipFontArchive::read_archive(&data).with_context(|| format!("Failed to open archive {}", input.display()))?;
    let names: Vec<String> = if names.is_empty() {
        archive.entry_names().into_iter().filter(|name| is_extension(Path::new(name), native::EXTENSION)).collect()
    } else {
        names.to_vec()
    };
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    Ok(FontSet::load(&archive, &names)?)
}

fn export(input: &Path, output: &Path, fonts: &[String]) -> anyhow::Result<()> {
    let set = load_fonts(input, fonts)?;
    fs::create_dir_all(output).with_context(|| format!("Failed to create {}", output.display()))?;

    for font in set.iter() {
        let path = output.join(font.name()).with_extension(bdf::EXTENSION);
        font.to_bdf().save(&path).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("{} -> {}", font.name(), path.display());
    }
    Ok(())
}

fn import(inputs: &[PathBuf], output: &Path, compress: bool) -> anyhow::Result<()> {
    let mut set = FontSet::new();
    for input in inputs {
        let bdf = BdfFont::from_path(input).with_context(|| format!("Failed to load {}", input.display()))?;
        let font = NativeFont::from_bdf(&bdf).with_context(|| format!("Failed to encode {}", input.display()))?;
        log::info!("{} -> {}", input.display(), font.file_name()?);
        set.push(font);
    }

    if is_extension(output, "zip") {
        let mut archive = if output.exists() {
            ZipFontArchive::read_archive(&fs::read(output)?).with_context(|| format!("Failed to open archive {}", output.display()))?
        } else {
            ZipFontArchive::new()
        };
        set.store(&mut archive)?;
        fs::write(output, archive.to_archive(compress)?).with_context(|| format!("Failed to write {}", output.display()))?;
    } else {
        fs::create_dir_all(output).with_context(|| format!("Failed to create {}", output.display()))?;
        for font in set.iter() {
            let path = output.join(font.file_name()?);
            fs::write(&path, font.as_bytes()).with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }
    Ok(())
}

fn info(input: &Path) -> anyhow::Result<()> {
    let set = load_fonts(input, &[])?;

    for font in set.iter() {
        let size = font.size().map(|s| s.to_string()).unwrap_or_else(|| "?".to_string());
        let style = font.style().map(|s| s.to_string()).unwrap_or_else(|| "?".to_string());
        println!("{}: {size}pt {style}, {} bytes ({} bitmap)", font.name(), font.as_bytes().len(), font.heap().len());
        println!("  char  code  pos     w   h   x   y   dw");
        for glyph in font.glyphs() {
            let header = font.glyph_header(glyph.ch);
            let empty = if glyph.bitmap.is_empty() { "  (empty)" } else { "" };
            println!(
                "  {:<4}  {:>4}  {:>6}  {:>2}  {:>2}  {:>2}  {:>2}  {:>2}{empty}",
                format!("{:?}", glyph.ch),
                glyph.code,
                header.position,
                header.width,
                header.height,
                header.x_offset,
                header.y_offset,
                header.device_width
            );
        }
    }
    Ok(())
}
