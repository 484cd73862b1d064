//! Miette diagnostics for configuration files.
//!
//! A TOML syntax or type error is rendered with the offending line of the
//! file and a label under the span the parser reported.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(opsdesk::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic from a TOML error, if it carries a span.
    #[must_use]
    pub fn from_toml(name: &str, content: &str, err: &toml::de::Error) -> Option<Self> {
        let span = err.span()?;
        Some(Self {
            message: err.message().to_string(),
            src: NamedSource::new(name, content.to_string()),
            span: (span.start, span.end.saturating_sub(span.start)).into(),
            help: None,
        })
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with miette's graphical handler, without colors when asked.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let theme = if color {
            miette::GraphicalTheme::unicode()
        } else {
            miette::GraphicalTheme::unicode_nocolor()
        };
        let mut out = String::new();
        match miette::GraphicalReportHandler::new_themed(theme).render_report(&mut out, self) {
            Ok(()) => out,
            Err(_) => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_the_bad_value() {
        let content = "[backend]\ntimeout_secs = \"ten\"\n";
        let err = toml::from_str::<crate::infrastructure::config::Config>(content).unwrap_err();

        let diagnostic = ConfigDiagnostic::from_toml("opsdesk.toml", content, &err)
            .unwrap()
            .with_help("timeout_secs is a whole number of seconds");
        let rendered = diagnostic.render(false);

        assert!(rendered.contains("opsdesk.toml"));
        assert!(rendered.contains("timeout_secs"));
        assert!(rendered.contains("whole number"));
    }
}
