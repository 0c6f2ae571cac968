//! Build list display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{first_line, truncate_string};
use crate::cli::OutputFormat;
use crate::client::models::{Build, BuildStatus, Repository};
use crate::error::Result;
use crate::models::links::Routes;
use crate::models::status::{StatusColor, status_color, status_glyph, status_icon};
use crate::output::formatters::{format_duration, format_timestamp_local};
use crate::output::{Formattable, json, table};

/// Longest commit message shown in a table cell
const MESSAGE_WIDTH: usize = 50;

/// Build row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BuildDisplay {
    #[tabled(rename = "BUILD ID")]
    pub id: String,

    #[tabled(rename = "STATUS")]
    #[serde(skip)]
    pub status_label: String,

    #[tabled(skip)]
    pub status: BuildStatus,

    /// `branch#abcdef`
    #[tabled(rename = "CHANGE")]
    pub change: String,

    #[tabled(rename = "MESSAGE")]
    pub message: String,

    #[tabled(rename = "STARTED")]
    pub started: String,

    #[tabled(rename = "DURATION")]
    pub duration: String,

    /// When the change was pushed, local time
    #[tabled(skip)]
    pub pushed: String,

    #[tabled(skip)]
    pub color: StatusColor,

    #[tabled(skip)]
    pub icon: &'static str,

    #[tabled(skip)]
    pub url: String,
}

impl BuildDisplay {
    pub fn new(build: &Build, routes: &Routes<'_>) -> Self {
        Self {
            id: build.id.clone(),
            status_label: format!("{} {}", status_glyph(build.status), build.status),
            status: build.status,
            change: build.change_label(),
            message: truncate_string(first_line(&build.change_message), MESSAGE_WIDTH),
            started: format_timestamp_local(build.build_started_timestamp),
            duration: format_duration(build.duration_secs()),
            pushed: format_timestamp_local(build.change_timestamp),
            color: status_color(build.status),
            icon: status_icon(build.status),
            url: routes.build(&build.id),
        }
    }

    fn pretty_line(&self) -> String {
        let tint = self.color.terminal();
        format!(
            "{} {:<24} {}  {}\n    {} {} {}",
            status_glyph(self.status).color(tint),
            self.change.bold(),
            self.status.to_string().color(tint),
            self.message,
            self.started.dimmed(),
            self.duration.dimmed(),
            self.url.dimmed()
        )
    }
}

/// Builds of one repository, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryBuildsView {
    pub repository_id: String,
    pub full_name: String,
    pub settings_url: String,
    pub builds: Vec<BuildDisplay>,
}

impl RepositoryBuildsView {
    pub fn new(repository: &Repository, routes: &Routes<'_>) -> Self {
        Self {
            repository_id: repository.id.clone(),
            full_name: repository.full_name.clone(),
            settings_url: routes.repository_settings(&repository.id),
            // `builds(last:)` returns oldest first
            builds: repository
                .builds
                .edges
                .iter()
                .rev()
                .map(|e| BuildDisplay::new(&e.node, routes))
                .collect(),
        }
    }
}

impl Formattable for RepositoryBuildsView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(&self.builds)),
            OutputFormat::Pretty => {
                let mut out = format!(
                    "{}\n{} {}\n",
                    self.full_name.bold(),
                    "Settings:".dimmed(),
                    self.settings_url
                );
                if self.builds.is_empty() {
                    out.push_str(&format!("\n{}", "No builds yet.".dimmed()));
                }
                for build in &self.builds {
                    out.push_str(&format!("\n{}", build.pretty_line()));
                }
                Ok(out)
            }
        }
    }
}
