// SPDX-License-Identifier: MPL-2.0
use skyboard::app::{self, paths, Flags};
use skyboard::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Skyboard - image gallery and to-do dashboard

USAGE:
  skyboard [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory holding state and todos
  --backend-root <DIR>   Root directory of the local storage backend
  --verbose              Log at debug level
  -h, --help             Print this help
";

struct Args {
    flags: Flags,
    overrides: paths::CliOverrides,
    verbose: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        verbose: args.contains("--verbose"),
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
        },
        overrides: paths::CliOverrides {
            config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
            data_dir: args.opt_value_from_str::<_, PathBuf>("--data-dir")?,
            backend_root: args.opt_value_from_str::<_, PathBuf>("--backend-root")?,
        },
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

/// `--verbose` wins, then `RUST_LOG`, then `[logging] level`, then `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let (config, _warning) = config::load();
            EnvFilter::try_new(config.logging.level())
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL))
        })
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    // Directory overrides must be in place before the config is read for the
    // log filter.
    paths::init_cli_overrides(args.overrides);
    init_tracing(args.verbose);

    app::run(args.flags)
}
