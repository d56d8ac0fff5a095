use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use mta::{extract, ByteSource, ExtractedSample, ExtractionReport};

#[derive(Parser)]
#[command(version)]
/// Extracts the audio samples of an MTA file into WAV files
pub struct Args {
    #[arg(long)]
    /// Path to the input MTA file
    mta: PathBuf,
    #[arg(long, required_unless_present = "list")]
    /// Output directory for the extracted WAV files, created if it doesn't exist
    out: Option<PathBuf>,
    #[arg(short, long)]
    /// Report every extracted and skipped entry
    verbose: bool,
    #[arg(short, long)]
    /// Only print the samples in the file, don't write anything
    list: bool,
}

/// keeps ASCII alphanumerics, space, '_' and '-'
fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn file_name(sample: &ExtractedSample) -> String {
    let mut name = sanitize_name(&sample.display_name());
    if name.is_empty() {
        name = format!("sample_{}", sample.index);
    }
    format!("{:03}_{name}.wav", sample.index)
}

fn list(source: &ByteSource) -> anyhow::Result<()> {
    let extraction = extract(source).context("can't read MTA file")?;
    println!("DWAV section at {}", extraction.offsets().dwav_offset);
    for result in extraction {
        match result {
            Ok(sample) => println!(
                "{:03} {:<16} {:>6} Hz {} ch {:>9} bytes",
                sample.index,
                sample.display_name(),
                sample.sample_rate,
                sample.layout.channels(),
                sample.pcm_len()
            ),
            Err(failure) => println!("{:03} skipped: {}", failure.index, failure.error),
        }
    }
    Ok(())
}

fn extract_all(
    source: &ByteSource,
    out_dir: &Path,
    verbose: bool,
) -> anyhow::Result<ExtractionReport> {
    let extraction = extract(source).context("can't read MTA file")?;
    let mut report = ExtractionReport::default();
    let count = extraction.len();
    if count == 0 {
        warn!("no audio entries found in file");
        return Ok(report);
    }
    fs::create_dir_all(out_dir)
        .with_context(|| format!("couldn't create output directory {out_dir:?}"))?;
    for (i, result) in extraction.enumerate() {
        let sample = match result {
            Ok(sample) => sample,
            Err(failure) => {
                if verbose {
                    warn!("skipping {failure}");
                } else {
                    debug!("skipping {failure}");
                }
                report.record_failure(failure);
                continue;
            }
        };
        let name = file_name(&sample);
        let path = out_dir.join(&name);
        match fs::write(&path, &sample.wav) {
            Ok(()) => {
                debug!("[{}/{count}] extracted {name}", i + 1);
                report.record_success();
            }
            // the entry itself was fine, but it still didn't make it to disk
            Err(e) => {
                error!("couldn't write {path:?}: {e}");
                report.record_write_failure();
            }
        }
    }
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::init_from_env(Env::new().default_filter_or(default_level));

    let data = fs::read(&args.mta).with_context(|| format!("couldn't read {:?}", args.mta))?;
    let source = ByteSource::new(data);

    if args.list {
        return list(&source);
    }
    let out_dir = args.out.context("no output directory given")?;
    let report = extract_all(&source, &out_dir, args.verbose)?;
    info!(
        "extraction complete, {} files extracted to {out_dir:?}, {} entries skipped",
        report.extracted,
        report.total() - report.extracted
    );
    Ok(())
}
