//! fos-settings - inspect how browser settings reach the engine
//!
//! Usage: fos-settings [--reverse] [--platform apple|other] <file>

use std::fs;

use anyhow::{Context, bail};
use fos_embed::{BrowserSettings, Platform, SettingsMapper, WebPreferences};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: fos-settings [--reverse] [--platform apple|other] <file>";

#[derive(Debug, PartialEq)]
struct Args {
    reverse: bool,
    platform: Platform,
    path: String,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Run(Args),
}

/// Parse the arguments that follow the program name
fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Command> {
    let mut reverse = false;
    let mut platform = Platform::current();
    let mut path = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--reverse" => reverse = true,
            "--platform" => {
                let name = args.next().context("--platform needs a value")?;
                platform = Platform::from_name(&name)
                    .with_context(|| format!("unknown platform '{}'", name))?;
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ if path.is_none() => path = Some(arg),
            _ => bail!("unexpected argument '{}'\n{}", arg, USAGE),
        }
    }

    let path = path.context(USAGE)?;
    Ok(Command::Run(Args {
        reverse,
        platform,
        path,
    }))
}

fn run(args: &Args) -> anyhow::Result<String> {
    let mapper = SettingsMapper::for_platform(args.platform);
    tracing::info!(
        "fos-settings {} (platform: {})",
        fos_embed::VERSION,
        args.platform.name()
    );

    let output = if args.reverse {
        let json = fs::read_to_string(&args.path)
            .with_context(|| format!("reading preferences from {}", args.path))?;
        let prefs: WebPreferences = serde_json::from_str(&json)
            .with_context(|| format!("parsing preferences in {}", args.path))?;
        mapper.to_settings(&prefs).to_json_pretty()?
    } else {
        let settings = BrowserSettings::load(&args.path)?;
        serde_json::to_string_pretty(&mapper.to_engine(&settings))?
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match parse_args(std::env::args().skip(1))? {
        Command::Help => println!("{}", USAGE),
        Command::Run(args) => println!("{}", run(&args)?),
    }
    Ok(())
}
