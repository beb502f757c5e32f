use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use ppinet_core::PpiConfig;
use ppinet_core::config::default_config_path;
use serde::Serialize;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Print only the config file location.
    #[arg(long)]
    pub path: bool,
}

#[derive(Debug, Serialize)]
struct ConfigReport {
    path: Option<PathBuf>,
    exists: bool,
    config: PpiConfig,
}

/// Print the effective configuration with the access key masked.
pub fn run_config(
    args: &ConfigArgs,
    explicit_path: Option<&Path>,
    config: &PpiConfig,
    output: OutputMode,
) -> Result<()> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .or_else(default_config_path);
    let report = ConfigReport {
        exists: path.as_deref().is_some_and(Path::exists),
        path,
        config: config.redacted(),
    };

    if args.path {
        let location = report
            .path
            .as_deref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
        return render_mode(
            output,
            &report.path,
            |_, w| writeln!(w, "{location}"),
            |_, w| writeln!(w, "{location}"),
        );
    }

    let body = toml::to_string_pretty(&report.config)?;
    render_mode(
        output,
        &report,
        |_, w| w.write_all(body.as_bytes()),
        |r, w| render_pretty(r, &body, w),
    )
}

fn render_pretty(report: &ConfigReport, body: &str, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Configuration")?;
    let location = report
        .path
        .as_deref()
        .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
    pretty_kv(w, "File", location)?;
    if !report.exists {
        pretty_kv(w, "Status", "not found, using defaults")?;
    }
    writeln!(w)?;
    w.write_all(body.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_marks_missing_file() {
        let report = ConfigReport {
            path: Some(PathBuf::from("/nonexistent/ppinet/config.toml")),
            exists: false,
            config: PpiConfig::default(),
        };
        let body = toml::to_string_pretty(&report.config).expect("toml");
        let mut buf = Vec::new();
        render_pretty(&report, &body, &mut buf).expect("render");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("not found, using defaults"));
        assert!(out.contains("species = 9606"));
        assert!(!out.contains("access_key"));
    }
}
