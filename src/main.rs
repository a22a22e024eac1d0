//! Desmin CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use desmin::cli::{Cli, Host};
use desmin::command::install_panic_hook;
use desmin::config::load_config;
use desmin::session::Session;
use desmin::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("desmin=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("desmin=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    install_panic_hook();

    tracing::debug!("Desmin starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let session = Session::from_env();

    let config = match load_config(cli.config.as_deref(), session.directory()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let output_mode = cli.output_mode().unwrap_or(config.settings.output);
    let mut ui = create_ui(cli.is_interactive(), output_mode);

    let mut host = match Host::new(config, session) {
        Ok(host) => host,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let stdin = io::stdin();
    match host.run(&cli, stdin.lock(), ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
