//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use exitload_core::field::FieldId;
use exitload_orchestration::http::{HttpServiceConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// ExitLoad-rs: mutual fund exit load calculator.
#[derive(Parser, Debug)]
#[command(name = "exitload", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Base URL of the calculation service.
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "EXITLOAD_ENDPOINT")]
    pub endpoint: String,

    /// Request timeout (e.g., "10s", "500ms", "1m").
    #[arg(long, default_value = "10s", env = "EXITLOAD_TIMEOUT")]
    pub timeout: String,

    /// Investment amount.
    #[arg(long, allow_hyphen_values = true)]
    pub investment: Option<String>,

    /// Exit load rate in percent.
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Redemption amount.
    #[arg(long, allow_hyphen_values = true)]
    pub redemption: Option<String>,

    /// Exit load period in years.
    #[arg(long, allow_hyphen_values = true)]
    pub period: Option<String>,

    /// NAV at purchase.
    #[arg(long, allow_hyphen_values = true)]
    pub purchase_nav: Option<String>,

    /// Current NAV.
    #[arg(long, allow_hyphen_values = true)]
    pub current_nav: Option<String>,

    /// Send overrides as typed instead of clamping them into the slider
    /// bounds. Negative values then suppress the request.
    #[arg(long)]
    pub raw: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Print the report as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode (only output the net redemption amount).
    #[arg(short, long)]
    pub quiet: bool,

    /// Include the redemption comparison series.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Current page path, used to mark the active navigation link.
    #[arg(long, default_value = "/exit-load-calculator")]
    pub path: String,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        parse_duration(&self.timeout).unwrap_or(DEFAULT_TIMEOUT)
    }

    /// HTTP client settings.
    #[must_use]
    pub fn service_config(&self) -> HttpServiceConfig {
        HttpServiceConfig {
            base_url: self.endpoint.clone(),
            timeout: self.timeout_duration(),
        }
    }

    /// Text given for `id` on the command line, if any.
    #[must_use]
    pub fn override_for(&self, id: FieldId) -> Option<&str> {
        let value = match id {
            FieldId::InvestmentAmount => &self.investment,
            FieldId::ExitLoadRate => &self.rate,
            FieldId::RedemptionAmount => &self.redemption,
            FieldId::ExitLoadPeriod => &self.period,
            FieldId::PurchaseNav => &self.purchase_nav,
            FieldId::CurrentNav => &self.current_nav,
        };
        value.as_deref()
    }
}

/// Parse a duration string like "10s", "1m", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
