//! Booster generator CLI
//!
//! Entry point for the `booster` command-line tool.

use clap::Parser;
use booster_generator::config::defaults::{DEFAULT_CONFIG_PATH, DEFAULT_INIT_BINARY, DEFAULT_OUTPUT};
use booster_generator::config::{select_document, CliOverrides, Resolver};
use booster_generator::{logging, ImageGenerator, PlanWriter};
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "booster")]
#[command(about = "Generate a booster initramfs image", version)]
struct Cli {
    /// Output initrd file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Overwrite existing initrd file
    #[arg(long)]
    force: bool,

    /// Booster 'init' binary location
    #[arg(long = "init-binary", alias = "initBinary", default_value = DEFAULT_INIT_BINARY)]
    init_binary: PathBuf,

    /// Output file compression ("zstd", "gzip", "none")
    #[arg(long, default_value = "")]
    compression: String,

    /// Linux kernel version to generate initramfs for
    #[arg(long = "kernel-version", alias = "kernelVersion", default_value = "")]
    kernel_version: String,

    /// Configuration file path (default: /etc/booster.yaml if present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Add wide range of modules/tools to allow this image boot at different machines
    #[arg(long)]
    universal: bool,

    /// Strip ELF binaries before adding them to the image
    #[arg(long)]
    strip: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output: self.output.clone(),
            force: self.force,
            init_binary: self.init_binary.clone(),
            compression: self.compression.clone(),
            kernel_version: self.kernel_version.clone(),
            debug: self.debug,
            universal: self.universal,
            strip: self.strip,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let overrides = cli.overrides();
    let document = select_document(cli.config, Path::new(DEFAULT_CONFIG_PATH))?;

    let config = Resolver::host().resolve(document.as_deref(), overrides)?;

    let mut generator = PlanWriter::new(io::stdout().lock());
    generator.generate(&config)?;
    Ok(())
}
