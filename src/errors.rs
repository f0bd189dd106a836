// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for slcli.
//!
//! This module provides specialized error types for:
//! - Zone file parsing (syntax and record data problems)
//! - Classic infrastructure API calls (HTTP, transport and decoding failures)
//! - Zone import runs (the fail-fast taxonomy surfaced to the operator)
//! - Configuration loading
//!
//! Every variant carries enough context (file line, zone name, record host/type)
//! to tell which step of a run failed.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading a zone file.
///
/// Input that cannot be parsed is rejected here, before any record reaches the
/// import driver.
#[derive(Error, Debug)]
pub enum ZoneFileError {
    /// Reading from the underlying file failed part way through
    #[error("Failed to read zone file at line {line}: {source}")]
    Io {
        /// Line number reached when the read failed
        line: usize,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The line could not be tokenized or lacks mandatory fields
    #[error("Syntax error at line {line}: {reason}")]
    Syntax {
        /// Line number where the entry starts
        line: usize,
        /// Explanation of what is wrong
        reason: String,
    },

    /// The record data does not match its type
    #[error("Invalid {record_type} record at line {line}: {reason}")]
    InvalidRecord {
        /// Line number where the entry starts
        line: usize,
        /// The record type being parsed (e.g. "MX")
        record_type: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// A directive this reader does not implement
    #[error("Unsupported directive {directive} at line {line}")]
    UnsupportedDirective {
        /// Line number of the directive
        line: usize,
        /// The directive as written (e.g. "$INCLUDE")
        directive: String,
    },

    /// A relative name was used before any `$ORIGIN` was known
    #[error("Relative name '{name}' at line {line} used without an $ORIGIN")]
    MissingOrigin {
        /// Line number of the entry
        line: usize,
        /// The relative name
        name: String,
    },
}

impl ZoneFileError {
    /// Line number the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Io { line, .. }
            | Self::Syntax { line, .. }
            | Self::InvalidRecord { line, .. }
            | Self::UnsupportedDirective { line, .. }
            | Self::MissingOrigin { line, .. } => *line,
        }
    }
}

/// Errors returned by the classic infrastructure API client.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The API answered with a non-success status
    ///
    /// `code` is the provider exception name (e.g. `SoftLayer_Exception_ObjectNotFound`)
    /// when the body carried one.
    #[error("API request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// The request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Provider exception code, if any
        code: Option<String>,
        /// Error message from the response body
        message: String,
    },

    /// The request never produced a response (connection refused, timeout, TLS)
    #[error("API request to {url} failed: {reason}")]
    Transport {
        /// The request URL
        url: String,
        /// Reason for the failure
        reason: String,
    },

    /// The response body could not be decoded
    #[error("Failed to decode API response from {url}: {reason}")]
    Decode {
        /// The request URL
        url: String,
        /// Decoder error
        reason: String,
    },

    /// Lookup by name returned no zone with exactly that name
    #[error("Zone '{zone}' not found")]
    ZoneNotFound {
        /// The zone name that was looked up
        zone: String,
    },
}

impl ApiError {
    /// Returns true if the error means the requested object does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ZoneNotFound { .. } => true,
            Self::Http { status, code, .. } => {
                *status == 404
                    || code
                        .as_deref()
                        .is_some_and(|c| c.ends_with("ObjectNotFound"))
            }
            Self::Transport { .. } | Self::Decode { .. } => false,
        }
    }
}

/// Errors that abort a zone import run.
///
/// The import is fail-fast: the first error ends the run and nothing is retried
/// or rolled back.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The zone file cannot be opened
    #[error("Cannot open zone file '{}': {source}", .path.display())]
    SourceUnavailable {
        /// Path given on the command line
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The zone file contains an entry that cannot be parsed
    #[error("Cannot parse zone file '{}': {source}", .path.display())]
    InvalidZoneFile {
        /// Path given on the command line
        path: PathBuf,
        /// The parse error
        #[source]
        source: ZoneFileError,
    },

    /// The zone file holds no records, so no origin can be inferred
    #[error("Zone file '{}' contains no records", .path.display())]
    EmptyZoneFile {
        /// Path given on the command line
        path: PathBuf,
    },

    /// Both zone creation and lookup by name failed
    #[error("Failed to provision zone '{zone}': create failed ({source}); lookup by name failed ({lookup_error})")]
    ZoneProvisioningFailed {
        /// The origin that was being provisioned
        zone: String,
        /// The creation error
        #[source]
        source: ApiError,
        /// The lookup error that followed it
        lookup_error: ApiError,
    },

    /// The API refused a record; the run stops at this record
    #[error("Failed to create {record_type} record '{host}' in zone '{zone}' ({created} record(s) already created): {source}")]
    RecordRejected {
        /// The zone being imported
        zone: String,
        /// Relative host of the rejected record
        host: String,
        /// Record type of the rejected record
        record_type: String,
        /// Number of records created before this one
        created: usize,
        /// The API error
        #[source]
        source: ApiError,
    },
}

impl ImportError {
    /// Short name of the failed stage, used as a structured log field.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "SourceUnavailable",
            Self::InvalidZoneFile { .. } | Self::EmptyZoneFile { .. } => "InvalidZoneFile",
            Self::ZoneProvisioningFailed { .. } => "ZoneProvisioningFailed",
            Self::RecordRejected { .. } => "RecordRejected",
        }
    }
}

/// Errors raised while assembling the API configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required credential is not set anywhere
    #[error("Missing {name}: pass --{flag}, set {env}, or add it to the config file")]
    MissingCredential {
        /// Human readable setting name
        name: &'static str,
        /// CLI flag carrying the setting
        flag: &'static str,
        /// Environment variable carrying the setting
        env: &'static str,
    },

    /// The endpoint is not a usable URL
    #[error("Invalid API endpoint '{value}': {reason}")]
    InvalidEndpoint {
        /// The value as configured
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The config file exists but cannot be read or decoded
    #[error("Failed to load config file '{}': {reason}", .path.display())]
    File {
        /// Path of the config file
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
