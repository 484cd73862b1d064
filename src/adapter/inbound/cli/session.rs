//! Per-invocation context shared by the page handlers.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use super::output;
use crate::adapter::outbound::http::HttpBackend;
use crate::domain::Schema;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// The backend, schema and calendar day a command runs against.
pub struct Session<B> {
    pub backend: Arc<B>,
    pub schema: Schema,
    pub today: NaiveDate,
}

impl<B> Session<B> {
    pub fn new(backend: Arc<B>, schema: Schema, today: NaiveDate) -> Self {
        Self {
            backend,
            schema,
            today,
        }
    }
}

impl Session<HttpBackend> {
    /// Connect to the configured backend, dated today in local time.
    #[allow(clippy::result_large_err)]
    pub fn connect(config: &Config) -> Result<Self> {
        let backend = HttpBackend::new(config.base_url()?, config.timeout())?;
        Ok(Self::new(
            Arc::new(backend),
            config.schema()?,
            Local::now().date_naive(),
        ))
    }
}

/// Ask before a destructive action. `--yes` and JSON mode skip the prompt.
#[allow(clippy::result_large_err)]
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes || output::is_json() {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
