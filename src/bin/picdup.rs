use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{self, Context};
use picdup::{
    bin_common::{
        init::{init_eyre, init_logger},
        similarity::{SimiArgs, SimiCli},
    },
    dedup::{
        relocate::relocate,
        scan::{scan, ScanOutcome},
    },
    imghash::{self, PhashFingerprinter},
    utils::fsutils::{self, ExtensionFilter},
};

#[derive(Parser, Debug)]
#[command()]
/// Finds near-duplicate images.
///
/// This uses rayon, so the `RAYON_NUM_THREADS` environment variable might be
/// of interest.
struct Cli {
    #[command(flatten)]
    simi_args: SimiCli,

    /// Move duplicates into this folder after reporting
    #[arg(long, short = 'm')]
    move_duplicates: Option<PathBuf>,

    /// Fingerprints are this many bits, squared
    #[arg(long, default_value_t = imghash::DEFAULT_HASH_SIZE)]
    hash_size: u32,

    /// File extensions to recognize as images
    #[arg(long, num_args = 1.., default_values_t = fsutils::IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()))]
    extensions: Vec<String>,

    /// A file to additionally write the logs to
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Folders with images to find duplicates among
    #[arg(required = true, num_args = 1..)]
    dirs: Vec<PathBuf>,
}

fn cli_arguments() -> eyre::Result<Cli> {
    const ARGS_FILE: &str = ".picduprc";
    let mut args: Vec<OsString> = std::env::args_os().collect();

    if args.len() == 1 {
        if let Some(flags) = fsutils::read_optional_file(ARGS_FILE)
            .wrap_err_with(|| format!("Could not read config file at: {ARGS_FILE}"))?
        {
            args.extend(
                flags
                    .split_whitespace()
                    .map(|s| std::ffi::OsStr::new(s).to_owned()),
            );
        }
    }

    Ok(Cli::parse_from(args))
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = cli_arguments()?;
    init_logger(cli.logfile.as_deref())?;

    log::debug!("CLI arguments: {cli:#?}");

    for dir in &cli.dirs {
        if !dir.is_dir() {
            eyre::bail!("not a directory: {}", dir.display());
        }
    }

    log::info!("Finding all images in: {:?}", cli.dirs);
    let filter = ExtensionFilter::new(cli.extensions.iter().cloned());
    let files = fsutils::find_images(&cli.dirs, &filter);
    log::info!("Found {} image files", files.len());

    let simi = cli.simi_args.as_args();
    let fingerprinter = PhashFingerprinter::new(cli.hash_size);
    let outcome = scan(&files, &fingerprinter, &simi)
        .wrap_err("fingerprints of different widths within one run")?;

    report(&outcome, &simi);

    if let Some(quarantine) = &cli.move_duplicates {
        if outcome.duplicates.is_empty() {
            log::info!("Nothing to move");
        } else {
            let relocated = relocate(&outcome.duplicates, quarantine)
                .wrap_err_with(|| {
                    format!(
                        "failed to create the quarantine at: {}",
                        quarantine.display()
                    )
                })?;
            log::info!(
                "Moved {} files to '{}'",
                relocated.moved.len(),
                quarantine.display()
            );
            if !relocated.is_complete() {
                log::warn!(
                    "{} files could not be moved, see above",
                    relocated.failed.len()
                );
            }
        }
    }

    Ok(())
}

fn report(outcome: &ScanOutcome, simi: &SimiArgs) {
    if outcome.duplicates.is_empty() {
        log::info!("No duplicates detected");
    } else {
        log::info!(
            "Found {} potential duplicates (threshold <= {}):",
            outcome.duplicates.len(),
            simi.get_threshold()
        );
        for dup in &outcome.duplicates {
            log::info!(
                "[d={:2}] {}  ->  {}",
                dup.distance,
                dup.path.display(),
                dup.canonical.display()
            );
        }
    }

    log::info!(
        "Scanned {} files: {} distinct, {} duplicates, {} unreadable",
        outcome.total(),
        outcome.index.len(),
        outcome.duplicates.len(),
        outcome.unreadable.len()
    );
}
