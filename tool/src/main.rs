use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info, LevelFilter};
use retro_bitmaps::{check, lookup, symbols, Image, Shape, Symbol};
use simple_logger::SimpleLogger;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(about = "Inspect and export the retro-go logo bitmaps.")]
pub struct Options {
    #[structopt(short, long, parse(from_occurrences), help = "Log more (repeat for more detail)")]
    verbose: u64,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// List every symbol with its record shape, size and payload length.
    List,
    /// Run the integrity checks over the asset table.
    Check,
    /// Write the record a symbol belongs to, as header followed by payload.
    Export {
        symbol: String,
        #[structopt(short, long, parse(from_os_str))]
        output: PathBuf,
        #[structopt(long, help = "Write only the pixel payload")]
        raw: bool,
    },
    /// Parse a header-plus-payload file and report what it holds.
    Inspect {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
    },
}

fn log_level(verbose: u64) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn list() {
    let (major, minor, patch) = retro_bitmaps::VERSION;
    println!("asset table {}.{}.{}", major, minor, patch);
    for sym in symbols() {
        let img = sym.image();
        let shape = match sym.shape() {
            Shape::SelfDescribing => "self-describing",
            Shape::Split => "split",
        };
        let system = match sym {
            Symbol::Header(con) | Symbol::Pixels(con) => con.name(),
            Symbol::Logo(_) => "",
        };
        println!("{:<14} {:<15} {:>4}x{:<4} {:>5} bytes  {}",
                 sym.name(), shape, img.width(), img.height(), img.data().len(), system);
    }
}

fn export(symbol: &str, output: &Path, raw: bool) -> Result<()> {
    let sym = match lookup(symbol) {
        Some(sym) => sym,
        None => bail!("unknown symbol {:?}, see `list`", symbol),
    };
    let img = sym.image();
    let bytes = if raw {
        img.data().to_vec()
    } else {
        let mut buf = vec![0; img.flat_len()];
        img.write_flat(&mut buf)?;
        buf
    };
    fs::write(output, &bytes)
        .with_context(|| format!("could not write {}", output.display()))?;
    info!("wrote {} bytes of {} to {}", bytes.len(), sym.name(), output.display());
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let bytes = fs::read(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    let img = Image::from_flat(&bytes)
        .with_context(|| format!("{} is not an image record", path.display()))?;
    let (width, height) = img.header().size();
    println!("{}x{}, {} payload bytes", width, height, img.data().len());
    match symbols().find(|sym| sym.image() == img) {
        Some(Symbol::Logo(logo)) => println!("matches {}", logo.symbol()),
        // header and pixel symbols share one record
        Some(Symbol::Header(con)) | Some(Symbol::Pixels(con)) => {
            println!("matches {} ({}/{})", con.name(), con.header_symbol(), con.logo_symbol());
        }
        None => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Options::from_args();

    SimpleLogger::new().with_level(log_level(args.verbose)).init()
        .context("could not set up logging")?;

    match args.cmd {
        Command::List => list(),
        Command::Check => {
            check::check_all()?;
            println!("ok");
        }
        Command::Export { symbol, output, raw } => export(&symbol, &output, raw)?,
        Command::Inspect { path } => inspect(&path)?,
    }
    Ok(())
}
