//! ExitLoad-rs: mutual fund exit load calculator.

use std::io::IsTerminal;

use exitload_cli::ui::print_error;
use exitload_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI args first; the log writer depends on the mode
    let config = config::AppConfig::parse();
    init_tracing(config.tui);

    if let Err(err) = app::run(&config) {
        if !errors::already_reported(&err) {
            print_error(&format!("{err:#}"));
        }
        std::process::exit(errors::handle_error(&err));
    }
}

/// Log to stderr, defaulting to `warn`. The dashboard owns the terminal, so
/// in TUI mode logs are dropped unless stderr is redirected.
fn init_tracing(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if tui && std::io::stderr().is_terminal() {
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
}
