use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use usbkeys::config::DEFAULT_INPUT;
use usbkeys::{decode_path, Error};

/// Recover typed text from USB HID keyboard reports.
///
/// Generate the input with:
///   tshark -r capture.pcap -Y "usb.endpoint_address.direction == 0x81 && usb.data_len == 8"
///          -T fields -e usb.capdata > usbkeystrok.txt
#[derive(Parser, Debug)]
#[command(name = "usbkeys", version)]
struct Cli {
    /// Hex report file, one report per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let decoded = decode_path(&cli.input)?;
    tracing::info!(
        reports = decoded.stats.reports,
        skipped = decoded.stats.skipped,
        chars = decoded.text.chars().count(),
        "decoded {}",
        cli.input.display()
    );

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(decoded.text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write decoded text")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // A missing input gets the bare message; anything else the full chain.
            match err.downcast_ref::<Error>() {
                Some(not_found) if matches!(not_found, Error::InputNotFound(_)) => {
                    eprintln!("{not_found}")
                }
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
