// SPDX-License-Identifier: MPL-2.0
use asset_deck::app::{self, config, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
asset_deck - media asset dashboard

USAGE:
    asset_deck [OPTIONS]

OPTIONS:
    -h, --help              Print this help and exit
    --lang <ID>             Interface language (e.g. en-US, fr)
    --config-dir <DIR>      Directory holding settings.toml
    --dump-config           Print the effective configuration and exit
    --init-config           Write the effective configuration and exit

ENVIRONMENT:
    ASSET_DECK_CONFIG_DIR   Config directory when --config-dir is absent
    RUST_LOG                Log filter (e.g. asset_deck=debug)
";

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let dump_config = args.contains("--dump-config");
    let init_config = args.contains("--init-config");
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    if dump_config || init_config {
        return handle_config_command(&flags, init_config);
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

/// Prints or writes the effective configuration.
fn handle_config_command(flags: &Flags, write: bool) -> ExitCode {
    let base_dir = flags.config_dir.as_ref().map(PathBuf::from);
    let (effective, warning) = config::load_with_override(base_dir.clone());
    if let Some(key) = warning {
        tracing::warn!(key = %key, "configuration could not be read, using defaults");
    }

    if write {
        return match config::save_with_override(&effective, base_dir) {
            Ok(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    match config::to_toml_string(&effective) {
        Ok(toml) => {
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
