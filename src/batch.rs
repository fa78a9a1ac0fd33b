//! Batch processing behind the `parse` and `check` commands
//!
//! Each definition is parsed on its own; a failure is reported and the batch
//! moves on, so every definition is seen before the command fails.

use crate::attribute::AttributeDescriptor;
use crate::config::{AttrgenConfig, OutputFormat};
use crate::output;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// Outcome of processing a batch of definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Turn failures into an error for the process exit status
    pub fn into_result(self) -> Result<()> {
        if self.failed > 0 {
            anyhow::bail!("{} of {} definitions failed to parse", self.failed, self.total);
        }
        info!("Parsed {} definitions", self.total);
        Ok(())
    }
}

/// Command-line definitions win over the config file's `fields`
pub fn select_definitions(cli: Vec<String>, config: &AttrgenConfig) -> Result<Vec<String>> {
    if !cli.is_empty() {
        return Ok(cli);
    }
    if config.fields.is_empty() {
        anyhow::bail!(
            "No field definitions given (pass them as arguments or list them in the config file)"
        );
    }
    debug!("Using {} definitions from config", config.fields.len());
    Ok(config.fields.clone())
}

/// `--format` overrides the configured output format
pub fn select_format(cli: Option<OutputFormat>, config: &AttrgenConfig) -> OutputFormat {
    cli.unwrap_or(config.output.format)
}

/// Print each parsed descriptor to `out` and each failure to `err`
pub fn parse_all<O: Write, E: Write>(
    definitions: &[String],
    format: OutputFormat,
    pretty: bool,
    out: &mut O,
    err: &mut E,
) -> Result<BatchSummary> {
    let mut failed = 0;

    for definition in definitions {
        match definition.parse::<AttributeDescriptor>() {
            Ok(attr) => {
                let rendered = output::render(&attr, format, pretty)
                    .with_context(|| format!("Failed to render {}", attr.name()))?;
                writeln!(out, "{}", rendered)?;
            }
            Err(e) => {
                writeln!(err, "error {}", e)?;
                failed += 1;
            }
        }
    }

    Ok(BatchSummary {
        total: definitions.len(),
        failed,
    })
}

/// Print `ok <name>` or the failure for each definition
pub fn check_all<O: Write>(definitions: &[String], out: &mut O) -> Result<BatchSummary> {
    let mut failed = 0;

    for definition in definitions {
        match definition.parse::<AttributeDescriptor>() {
            Ok(attr) => writeln!(out, "ok {}", attr.name())?,
            Err(e) => {
                writeln!(out, "error {}", e)?;
                failed += 1;
            }
        }
    }

    Ok(BatchSummary {
        total: definitions.len(),
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn config_with_fields(fields: &[&str]) -> AttrgenConfig {
        AttrgenConfig {
            fields: strings(fields),
            ..Default::default()
        }
    }

    #[test]
    fn test_cli_definitions_take_precedence() {
        let config = config_with_fields(&["from_config"]);
        let selected = select_definitions(strings(&["from_cli:int"]), &config).unwrap();
        assert_eq!(selected, vec!["from_cli:int"]);
    }

    #[test]
    fn test_config_fields_used_without_cli_definitions() {
        let config = config_with_fields(&["id:hkey", "age:int"]);
        let selected = select_definitions(Vec::new(), &config).unwrap();
        assert_eq!(selected, vec!["id:hkey", "age:int"]);
    }

    #[test]
    fn test_no_definitions_anywhere() {
        let err = select_definitions(Vec::new(), &AttrgenConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No field definitions"));
    }

    #[test]
    fn test_format_flag_overrides_config() {
        let mut config = AttrgenConfig::default();
        config.output.format = OutputFormat::Json;

        assert_eq!(select_format(None, &config), OutputFormat::Json);
        assert_eq!(
            select_format(Some(OutputFormat::Canonical), &config),
            OutputFormat::Canonical
        );
    }

    #[test]
    fn test_parse_all_processes_every_definition() {
        let definitions = strings(&["id:map:hkey", "age:int", "x:string:bogus_opt", "tags:sset"]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        let summary =
            parse_all(&definitions, OutputFormat::Canonical, false, &mut out, &mut err).unwrap();

        assert_eq!(summary, BatchSummary { total: 4, failed: 2 });
        assert_eq!(String::from_utf8(out).unwrap(), "age:integer\ntags:string_set\n");
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error Field id cannot be a hash key and be of type map\n\
             error You provided an invalid option for x: bogus_opt\n"
        );
        assert!(summary.into_result().is_err());
    }

    #[test]
    fn test_parse_all_success() {
        let definitions = strings(&["id:hkey"]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        let summary =
            parse_all(&definitions, OutputFormat::Json, false, &mut out, &mut err).unwrap();

        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["name"], "id");
        assert!(summary.into_result().is_ok());
    }

    #[test]
    fn test_check_all_reports_each_definition() {
        let definitions = strings(&["id:string:hkey,rkey", "age:int"]);
        let mut out = Vec::new();

        let summary = check_all(&definitions, &mut out).unwrap();

        assert_eq!(summary, BatchSummary { total: 2, failed: 1 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error Field id cannot be a range key and hash key simultaneously\nok age\n"
        );
    }
}
