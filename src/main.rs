//! `songlink` - resolve song media links into player descriptors.
//!
//! Usage: songlink [--file PATH] [--format json|text] [--locale ru|en] [URL...]

use std::io::{self, Write};
use std::path::PathBuf;

use serde_json::Value;
use tracing_subscriber::EnvFilter;

use songlink::config::{Config, OutputFormat};
use songlink::error::{Error, Result};
use songlink::player::{Locale, Resolver};
use songlink::sources::{self, SourceEntry, SourceReport};

const USAGE: &str = "Usage: songlink [--file PATH] [--format json|text] [--locale ru|en] [URL...]";

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    locale: Option<Locale>,
    urls: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| Error::Msg(format!("{flag} needs a value. {USAGE}")))
        };
        match arg.as_str() {
            "--file" => parsed.file = Some(PathBuf::from(value("--file")?)),
            "--format" => parsed.format = Some(value("--format")?.parse().map_err(Error::Msg)?),
            "--locale" => parsed.locale = Some(value("--locale")?.parse().map_err(Error::Msg)?),
            _ => parsed.urls.push(arg),
        }
    }

    Ok(parsed)
}

/// One line of text output: position, service name and descriptor.
fn text_line(report: &SourceReport, resolver: &Resolver) -> String {
    let Some(resolved) = &report.resolved else {
        return format!("{:>3}. (nothing to render)", report.position);
    };
    let service = resolved.provider().display_name();
    match resolved.failure() {
        Some(reason) => format!(
            "{:>3}. {service}: {resolved} ({})",
            report.position,
            reason.message(resolver.locale())
        ),
        None => format!("{:>3}. {service}: {resolved}", report.position),
    }
}

fn print_reports(reports: &[SourceReport], format: OutputFormat, resolver: &Resolver) -> Result<()> {
    let mut out = io::stdout().lock();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(reports)
                .map_err(|e| Error::Msg(format!("Failed to serialize results: {e}")))?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}", text_line(report, resolver))?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.file.is_none() && args.urls.is_empty() {
        eprintln!("{USAGE}");
        return Ok(());
    }

    let config = Config::load()?;
    let locale = args.locale.unwrap_or(config.locale);
    let format = args.format.unwrap_or(config.format);
    tracing::debug!("{} {} (locale: {locale})", config.app_name(), config.app_version());

    let mut entries = match &args.file {
        Some(path) => sources::load_sources(path, &config.source_field)?,
        None => Vec::new(),
    };
    let offset = entries.len();
    entries.extend(args.urls.into_iter().enumerate().map(|(idx, url)| SourceEntry {
        position: offset + idx + 1,
        value: Value::String(url),
    }));

    let resolver = Resolver::new(locale);
    let reports = sources::resolve_entries(&resolver, &entries);
    let failed = reports
        .iter()
        .filter(|r| r.resolved.as_ref().is_some_and(|s| !s.is_renderable()))
        .count();
    if failed > 0 {
        tracing::warn!("{failed} of {} sources could not be resolved", reports.len());
    }

    print_reports(&reports, format, &resolver)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn test_parse_flags_and_urls() {
        let parsed = args(&["--format", "text", "https://youtu.be/x", "--locale", "en"]).unwrap();
        assert_eq!(parsed.format, Some(OutputFormat::Text));
        assert_eq!(parsed.locale, Some(Locale::En));
        assert_eq!(parsed.urls, ["https://youtu.be/x"]);
    }

    #[test]
    fn test_text_line_names_service() {
        let entries = [
            SourceEntry { position: 1, value: Value::String("https://youtu.be/dQw4w9WgXcQ".to_string()) },
            SourceEntry { position: 2, value: Value::String("https://drive.google.com/nope".to_string()) },
            SourceEntry { position: 3, value: Value::Null },
        ];
        let resolver = Resolver::new(Locale::En);
        let reports = sources::resolve_entries(&resolver, &entries);
        let lines: Vec<_> = reports.iter().map(|r| text_line(r, &resolver)).collect();

        assert!(lines[0].starts_with("  1. YouTube: [youtube] embed "), "{}", lines[0]);
        assert_eq!(
            lines[1],
            "  2. Google Drive: [google-drive] failure invalid-google-drive-link (Invalid Google Drive link)"
        );
        assert_eq!(lines[2], "  3. (nothing to render)");
    }

    #[test]
    fn test_flag_without_value() {
        assert!(matches!(args(&["--file"]), Err(Error::Msg(_))));
        assert!(matches!(args(&["--format", "yaml"]), Err(Error::Msg(_))));
    }
}
