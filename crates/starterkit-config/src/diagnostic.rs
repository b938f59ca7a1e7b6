// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics.
//!
//! Figment errors are turned into miette reports that point at the offending
//! line of `starterkit.toml`, name the dotted key, and suggest the closest
//! valid key for typos.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score above which a valid key is offered as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration problem, renderable as a miette report.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(code(starterkit::config::unknown_key))]
    UnknownKey {
        key: String,
        /// Closest valid key, when one is near enough.
        suggestion: Option<String>,
        /// Comma-separated keys accepted at that level.
        valid_keys: String,
        #[help]
        help: String,
        #[label("not a recognized key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` has the wrong type: found {found}, expected {expected}")]
    #[diagnostic(code(starterkit::config::invalid_type))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
        #[label("expected {expected}")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(starterkit::config::missing_key),
        help("add `{key} = <value>` to starterkit.toml")
    )]
    MissingKey { key: String },

    /// The value has the right TOML type but does not parse, such as a short
    /// address or a negative version index.
    #[error("`{key}` is not valid: {detail}")]
    #[diagnostic(code(starterkit::config::invalid_value))]
    InvalidValue {
        key: String,
        detail: String,
        #[help]
        hint: Option<String>,
        #[label("rejected here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("validation error: {message}")]
    #[diagnostic(code(starterkit::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(starterkit::config::other))]
    Other(String),
}

/// Expected format for keys whose values are parsed beyond their TOML type.
pub fn value_hint(key: &str) -> Option<&'static str> {
    match key {
        "rpc.from" | "plugin.address" | "website.address" => {
            Some("expected `0x` followed by 40 hex digits")
        }
        "website.version" => Some("expected a non-negative whole number, e.g. `0`"),
        "rpc.url" => Some("expected an http:// or https:// URL"),
        _ => None,
    }
}

/// Converts every error inside a `figment::Error` into a diagnostic.
///
/// `toml_sources` holds `(path, content)` pairs used to attach source spans.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let section: Vec<&str> = error.path.iter().map(String::as_str).collect();
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let suggestion = suggest_key(field, expected);
                    let valid_keys = expected.join(", ");
                    let help = match &suggestion {
                        Some(s) => format!("did you mean `{s}`? valid keys: {valid_keys}"),
                        None => format!("valid keys: {valid_keys}"),
                    };
                    let (span, src) = locate(&error, &section, field, toml_sources);
                    ConfigError::UnknownKey {
                        key: field.clone(),
                        suggestion,
                        valid_keys,
                        help,
                        span,
                        src,
                    }
                }
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: dotted(&section, field),
                },
                Kind::InvalidType(found, expected) => {
                    let (span, src) = locate_leaf(&error, &section, toml_sources);
                    ConfigError::InvalidType {
                        key: section.join("."),
                        found: found.to_string(),
                        expected: expected.clone(),
                        span,
                        src,
                    }
                }
                Kind::InvalidValue(_, _) | Kind::InvalidLength(_, _) | Kind::Message(_)
                    if !section.is_empty() =>
                {
                    let key = section.join(".");
                    let detail = match &error.kind {
                        Kind::Message(message) => message.clone(),
                        other => other.to_string(),
                    };
                    let (span, src) = locate_leaf(&error, &section, toml_sources);
                    ConfigError::InvalidValue {
                        hint: value_hint(&key).map(str::to_string),
                        key,
                        detail,
                        span,
                        src,
                    }
                }
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

fn dotted(section: &[&str], field: &str) -> String {
    section.iter().copied().chain([field]).collect::<Vec<_>>().join(".")
}

/// Locates the last path segment, which is the key whose value failed.
fn locate_leaf(
    error: &figment::error::Error,
    path: &[&str],
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    match path.split_last() {
        Some((field, section)) => locate(error, section, field, toml_sources),
        None => (None, None),
    }
}

/// Finds `field` under `section` in the file the error came from. Errors
/// without file metadata (inline strings) use the only source if there is
/// exactly one.
fn locate(
    error: &figment::error::Error,
    section: &[&str],
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    let source = match origin {
        Some(path) => toml_sources.iter().find(|(p, _)| *p == path),
        None if toml_sources.len() == 1 => toml_sources.first(),
        None => None,
    };

    let Some((path, content)) = source else {
        return (None, None);
    };
    match find_key_offset(content, section, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(path, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `field = ...` inside the `[section]` table of `content`.
///
/// Table headers are tracked line by line, so a key of the same name in a
/// different table is never matched. An empty `section` means top level.
pub fn find_key_offset(content: &str, section: &[&str], field: &str) -> Option<usize> {
    let wanted = section.join(".");
    let mut current = String::new();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(header) = trimmed.strip_prefix('[') {
            current = header
                .split(']')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
        } else if current == wanted
            && let Some(after) = trimmed.strip_prefix(field)
            && after.trim_start().starts_with('=')
        {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }

    None
}

/// Closest valid key to `unknown`.
///
/// Jaro-Winkler catches dropped or doubled letters; a Damerau-Levenshtein
/// distance of one catches swapped letters in short keys such as `ulr`.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    let by_similarity = valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key);

    by_similarity
        .or_else(|| {
            valid_keys
                .iter()
                .copied()
                .find(|key| strsim::damerau_levenshtein(unknown, key) <= 1)
        })
        .map(str::to_string)
}

/// Prints each error to stderr as a graphical miette report.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut out = String::new();
        match handler.render_report(&mut out, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{out}"),
            Err(_) => eprintln!("error: {error}"),
        }
    }
}
