// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone file import.
//!
//! Replays a zone file against the classic infrastructure DNS service in one
//! sequential pass:
//!
//! 1. Open the file and read the first record
//! 2. Infer the origin from its owner and provision the zone ([`origin`])
//! 3. Project every record, including the first, onto the provider shape ([`projector`])
//! 4. Send each accepted record, unless this is a dry run
//!
//! A dry run makes no provider call at all: the zone is reported as one that
//! would be created and every record as one that would be sent.
//!
//! The first failure ends the run. Records created before it stay created.
//!
//! # Example
//!
//! ```rust,no_run
//! use slcli::config::ApiConfig;
//! use slcli::import::{import_zone_file, ImportOptions};
//! use slcli::softlayer::SoftLayerClient;
//! use std::path::Path;
//!
//! # async fn example(config: ApiConfig) -> anyhow::Result<()> {
//! let client = SoftLayerClient::new(&config)?;
//! let report = import_zone_file(&client, Path::new("example.com.zone"), &ImportOptions::default()).await?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod origin;
pub mod projector;
pub mod types;

pub use types::{
    ImportContext, ImportEntry, ImportReport, Projection, ServiceRecord, SkipReason,
    TargetRecord, ZoneStatus,
};

use crate::errors::{ApiError, ImportError, ZoneFileError};
use crate::softlayer::DnsService;
use crate::zonefile::{ParsedRecord, ZoneFileReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Options for one import run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Report what would be created without creating the zone or any record
    pub dry_run: bool,
}

/// Import the zone file at `path`.
///
/// The file is held open for the duration of the run and closed on every exit path.
///
/// # Errors
///
/// Returns `ImportError::SourceUnavailable` if the file cannot be opened, and any
/// error of [`import_records`].
pub async fn import_zone_file<S>(
    service: &S,
    path: &Path,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError>
where
    S: DnsService + ?Sized,
{
    let reader = ZoneFileReader::open(path).map_err(|source| ImportError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), dry_run = options.dry_run, "Importing zone file");

    import_records(service, reader, path, options).await
}

/// Dry run of the zone file at `path`, without any provider.
///
/// # Errors
///
/// Returns `ImportError::SourceUnavailable`, `InvalidZoneFile` or `EmptyZoneFile`.
pub async fn preview_zone_file(path: &Path) -> Result<ImportReport, ImportError> {
    let reader = ZoneFileReader::open(path).map_err(|source| ImportError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Previewing zone file");

    drive(None::<&dyn DnsService>, reader, path).await
}

/// Import an already opened record stream; `path` is only used in errors.
///
/// # Errors
///
/// - `ImportError::InvalidZoneFile` if the stream yields a parse error
/// - `ImportError::EmptyZoneFile` if the stream holds no record
/// - `ImportError::ZoneProvisioningFailed` from zone provisioning
/// - `ImportError::RecordRejected` for the first record the API refuses
pub async fn import_records<S, I>(
    service: &S,
    records: I,
    path: &Path,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError>
where
    S: DnsService + ?Sized,
    I: IntoIterator<Item = Result<ParsedRecord, ZoneFileError>>,
{
    let service = (!options.dry_run).then_some(service);
    drive(service, records, path).await
}

/// One pass over `records`; without a service nothing is sent.
async fn drive<S, I>(
    service: Option<&S>,
    records: I,
    path: &Path,
) -> Result<ImportReport, ImportError>
where
    S: DnsService + ?Sized,
    I: IntoIterator<Item = Result<ParsedRecord, ZoneFileError>>,
{
    let invalid = |source: ZoneFileError| {
        warn!(line = source.line(), error = %source, "Zone file entry rejected");
        ImportError::InvalidZoneFile {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut records = records.into_iter();
    let first = match records.next() {
        Some(record) => record.map_err(invalid)?,
        None => {
            return Err(ImportError::EmptyZoneFile {
                path: path.to_path_buf(),
            })
        }
    };

    let context = match service {
        Some(service) => origin::provision_zone(service, &first.owner).await?,
        None => origin::preview_zone(&first.owner),
    };
    let mut report = ImportReport::new(&context, service.is_none());

    for record in std::iter::once(Ok(first)).chain(records) {
        let record = record.map_err(invalid)?;

        match projector::project(&context, &record) {
            Projection::Skip(reason) => {
                debug!(
                    line = record.line,
                    owner = %record.owner,
                    record_type = %record.type_name(),
                    reason = ?reason,
                    "Skipping record"
                );
                report.skipped += 1;
            }
            Projection::Record(target) => {
                let record_id = if let Some(service) = service {
                    let created = service
                        .create_record(&target)
                        .await
                        .map_err(|source| rejected(&context, &target, &report, source))?;
                    info!(host = %target.host, record_type = %target.record_type, data = %target.data, record_id = created.id, "Created record");
                    Some(created.id)
                } else {
                    info!(host = %target.host, record_type = %target.record_type, data = %target.data, "Would create record");
                    None
                };
                report.entries.push(ImportEntry::new(&target, record_id));
            }
            Projection::Service(service_record) => {
                let target = &service_record.record;
                let record_id = if let Some(service) = service {
                    let created = service
                        .create_service_record(&service_record)
                        .await
                        .map_err(|source| rejected(&context, target, &report, source))?;
                    info!(host = %target.host, data = %target.data, port = service_record.port, record_id = created.id, "Created service record");
                    Some(created.id)
                } else {
                    info!(host = %target.host, data = %target.data, port = service_record.port, "Would create service record");
                    None
                };
                report.entries.push(ImportEntry::new(target, record_id));
            }
        }
    }

    info!(
        zone = %report.zone,
        records = report.entries.len(),
        skipped = report.skipped,
        dry_run = report.dry_run,
        "Zone import finished"
    );
    Ok(report)
}

fn rejected(
    context: &ImportContext,
    target: &TargetRecord,
    report: &ImportReport,
    source: ApiError,
) -> ImportError {
    ImportError::RecordRejected {
        zone: context.zone.clone(),
        host: target.host.clone(),
        record_type: target.record_type.clone(),
        created: report.entries.len(),
        source,
    }
}
