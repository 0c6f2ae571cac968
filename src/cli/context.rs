//! Command execution context
//!
//! Loads config, applies CLI overrides and builds the API client so command
//! handlers start from a ready-to-use state.

use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::CirrusClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::models::Routes;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Authenticated API client
    pub client: Arc<CirrusClient>,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or no API token is set.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        config.validate_auth()?;

        if let Some(org) = opts.org_ref() {
            config.organization = Some(org.to_string());
        }
        if let Some(host) = opts.api_host_ref() {
            config.api_host = Some(host.to_string());
        }

        let format = resolve_format(opts.format, &config);
        let client = CirrusClient::with_host(
            config.api_token.clone(),
            Some(config.api_host().to_string()),
        )?;
        debug!("using API endpoint {}", client.endpoint());

        Ok(Self {
            config,
            client: Arc::new(client),
            format,
        })
    }

    /// Get the organization, returning an error if not set.
    pub fn require_organization(&self) -> Result<&str> {
        self.config
            .organization
            .as_deref()
            .ok_or_else(|| ConfigError::MissingOrganization.into())
    }

    /// Dashboard routes for the configured web host.
    pub fn routes(&self) -> Routes<'_> {
        Routes::new(self.config.web_host())
    }

    /// Default page size from preferences.
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }

    /// Spinner on stderr for pretty output in a terminal; `None` otherwise.
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.format != OutputFormat::Pretty || !std::io::stderr().is_terminal() {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    }
}

/// Flag/env first, then `preferences.format`, then pretty.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match config.preferences.format.as_deref().map(str::parse::<OutputFormat>) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            warn!("ignoring preferences.format: {}", e);
            OutputFormat::default()
        }
        None => OutputFormat::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &std::path::Path, contents: &str) -> String {
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_resolve_format_precedence() {
        let mut config = Config::default();
        assert_eq!(resolve_format(None, &config), OutputFormat::Pretty);

        config.preferences.format = Some("json".to_string());
        assert_eq!(resolve_format(None, &config), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some(OutputFormat::Table), &config),
            OutputFormat::Table
        );

        config.preferences.format = Some("xml".to_string());
        assert_eq!(resolve_format(None, &config), OutputFormat::Pretty);
    }

    #[test]
    fn test_context_applies_overrides() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "api_token: secret\norganization: from-config\npreferences:\n  page_size: 25\n",
        );

        let opts = GlobalOptions {
            org: Some("from-flag".to_string()),
            config: Some(path),
            api_host: Some("http://localhost:9999".to_string()),
            ..GlobalOptions::default()
        };
        let ctx = CommandContext::new(&opts).unwrap();

        assert_eq!(ctx.require_organization().unwrap(), "from-flag");
        assert_eq!(ctx.client.endpoint(), "http://localhost:9999/graphql");
        assert_eq!(ctx.page_size(), 25);
        assert_eq!(ctx.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_context_requires_token() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "organization: acme\n");

        let opts = GlobalOptions {
            config: Some(path),
            ..GlobalOptions::default()
        };
        assert!(CommandContext::new(&opts).is_err());
    }

    #[test]
    fn test_missing_organization() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "api_token: secret\n");

        let opts = GlobalOptions {
            config: Some(path),
            ..GlobalOptions::default()
        };
        let ctx = CommandContext::new(&opts).unwrap();
        let err = ctx.require_organization().unwrap_err();
        assert!(err.to_string().contains("cirrusop org set"));
    }

    #[test]
    fn test_no_spinner_for_machine_output() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "api_token: secret\n");

        let opts = GlobalOptions {
            config: Some(path),
            format: Some(OutputFormat::Json),
            ..GlobalOptions::default()
        };
        let ctx = CommandContext::new(&opts).unwrap();
        assert!(ctx.spinner("Loading...").is_none());
    }
}
