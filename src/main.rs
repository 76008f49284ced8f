use pokedex_box_order::emit::Layout;
use pokedex_box_order::{run, CliOptions};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--output DIR] [--layout per-catalogue|combined] \
[--data-dir DIR] [--api-base URL]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" => {
                opts.output_dir = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a directory (e.g. --output output)")
                })?;
            }
            "--layout" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--layout requires per-catalogue or combined"))?;
                opts.layout = match val.to_ascii_lowercase().as_str() {
                    "per-catalogue" | "split" => Layout::PerCatalogue,
                    "combined" | "single" => Layout::Combined,
                    other => anyhow::bail!("Unknown layout {other} (use per-catalogue or combined)"),
                };
            }
            "--data-dir" => {
                opts.data_dir = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--data-dir requires a directory of dataset overrides")
                })?);
            }
            "--api-base" => {
                opts.api_base = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--api-base requires a URL"))?;
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let opts = parse_args()?;
    run(opts)
}
