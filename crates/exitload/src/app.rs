//! Application entry point and dispatch.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossbeam_channel::RecvTimeoutError;
use tracing::{info, warn};

use exitload_cli::output::write_to_file;
use exitload_cli::spinner::request_spinner;
use exitload_cli::{CliResultsPresenter, OutputMode};
use exitload_core::field::FieldId;
use exitload_core::sync::{FieldSet, FieldValues};
use exitload_orchestration::dispatcher::{Envelope, RecalcDispatcher};
use exitload_orchestration::http::HttpCalculationService;
use exitload_tui::{TuiApp, TuiMessage};

use crate::config::AppConfig;
use crate::errors::AppError;

/// How often the CLI wait loop checks for Ctrl+C.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Extra wait beyond the HTTP timeout before giving up on a response.
const RESPONSE_GRACE: Duration = Duration::from_secs(1);

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        exitload_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Handle TUI mode
    if config.tui {
        return run_tui(config);
    }

    // CLI mode
    run_cli(config)
}

/// Field values for a one-shot calculation: defaults, with each override
/// applied to its field. Overrides are committed (clamped into the slider
/// bounds) unless `raw` is set, in which case they are sent as typed.
pub fn field_values(config: &AppConfig) -> FieldValues {
    let mut fields = FieldSet::with_defaults(|_| {});
    fields.initial_sync();
    for id in FieldId::ALL {
        if let Some(text) = config.override_for(id) {
            let sync = fields.get_mut(id);
            if config.raw {
                sync.type_text(text);
            } else {
                sync.commit_text(text);
            }
        }
    }
    fields.values()
}

fn output_mode(config: &AppConfig) -> OutputMode {
    if config.quiet {
        OutputMode::Quiet
    } else if config.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let values = field_values(config);
    let service = HttpCalculationService::new(&config.service_config())?;
    let endpoint = service.url().to_string();
    let dispatcher = RecalcDispatcher::new(Arc::new(service));

    dispatcher.submit(&values).map_err(AppError::Input)?;

    let cancelled = Arc::new(AtomicBool::new(false));
    ctrlc_handler(Arc::clone(&cancelled));

    let mode = output_mode(config);
    let presenter = CliResultsPresenter::new(mode, config.details);
    let spinner = request_spinner(mode == OutputMode::Text, &endpoint);
    let envelope = wait_for_response(
        &dispatcher,
        &cancelled,
        config.timeout_duration() + RESPONSE_GRACE,
    );
    spinner.finish_and_clear();
    let envelope = envelope?;

    let failure = envelope.outcome.as_ref().err().cloned();
    dispatcher.deliver(envelope, &presenter);
    if let Some(err) = failure {
        return Err(AppError::Service(err).into());
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(report) = presenter.rendered() {
            write_to_file(Path::new(path), &report)
                .with_context(|| format!("failed to write report to {path}"))?;
        }
    }

    Ok(())
}

/// Wait for the single in-flight response, giving up after `limit` or on
/// Ctrl+C.
fn wait_for_response(
    dispatcher: &RecalcDispatcher,
    cancelled: &AtomicBool,
    limit: Duration,
) -> Result<Envelope, AppError> {
    let deadline = Instant::now() + limit;
    loop {
        if cancelled.load(Ordering::Relaxed) {
            return Err(AppError::Cancelled);
        }
        match dispatcher.recv_timeout(POLL_INTERVAL) {
            Ok(envelope) => return Ok(envelope),
            Err(RecvTimeoutError::Timeout) if Instant::now() < deadline => {}
            Err(_) => return Err(AppError::NoResponse(limit)),
        }
    }
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let service = HttpCalculationService::new(&config.service_config())?;
    info!(url = service.url(), "starting dashboard");
    let endpoint = service.url().to_string();
    let dispatcher = RecalcDispatcher::new(Arc::new(service));

    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let _ = tx.send(TuiMessage::Log(format!("calculation endpoint: {endpoint}")));

    let mut app = TuiApp::new(tx, rx)
        .with_dispatcher(dispatcher)
        .with_current_path(config.path.clone());
    app.start();

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}

fn ctrlc_handler(cancelled: Arc<AtomicBool>) {
    if let Err(e) = ctrlc::set_handler(move || {
        cancelled.store(true, Ordering::Relaxed);
    }) {
        warn!(error = %e, "failed to install Ctrl+C handler");
    }
}
