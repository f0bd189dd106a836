// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Types shared by the zone import stages.

use hickory_proto::rr::Name;
use std::fmt;

/// How the target zone was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    /// The zone was created by this run
    Created,
    /// The zone already existed and was resolved by name
    Existing,
    /// Dry run: the zone does not exist yet and would be created
    WouldCreate,
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Existing => f.write_str("existing"),
            Self::WouldCreate => f.write_str("would be created"),
        }
    }
}

/// State of one import run, fixed once the zone has been provisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportContext {
    /// Fully-qualified zone apex
    pub origin: Name,
    /// Zone name as the provider knows it, without the trailing dot
    pub zone: String,
    /// Provider identifier of the zone (0 for a zone that would be created)
    pub zone_id: i64,
    /// How the zone was obtained
    pub zone_status: ZoneStatus,
}

impl ImportContext {
    /// Context for the zone whose apex is `origin`.
    #[must_use]
    pub fn new(origin: Name, zone_id: i64, zone_status: ZoneStatus) -> Self {
        Self {
            zone: super::origin::origin_from_owner(&origin),
            origin,
            zone_id,
            zone_status,
        }
    }
}

/// A record ready to be sent to the generic record creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRecord {
    /// Zone the record belongs to
    pub zone_id: i64,
    /// `@` for the apex, otherwise the label relative to the origin
    pub host: String,
    /// Uppercase type mnemonic
    pub record_type: String,
    /// TTL in seconds
    pub ttl: u32,
    /// Record data
    pub data: String,
    /// MX preference, only set for MX records
    pub mx_priority: Option<u16>,
}

/// An SRV record, sent to the dedicated service record call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Base fields; `data` holds the target host
    pub record: TargetRecord,
    /// SRV priority
    pub priority: u16,
    /// SRV weight
    pub weight: u16,
    /// SRV port
    pub port: u16,
    /// Service label (e.g. `_sip`) when the host has the `_service._proto` form
    pub service: Option<String>,
    /// Protocol label (e.g. `_tcp`) when the host has the `_service._proto` form
    pub protocol: Option<String>,
}

/// Why a parsed record produced no API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The provider manages the SOA record itself
    Soa,
    /// The provider manages apex name servers itself
    ApexNs,
}

/// Outcome of projecting one parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Send through the generic record call
    Record(TargetRecord),
    /// Send through the service record call
    Service(ServiceRecord),
    /// Do not send anything
    Skip(SkipReason),
}

/// One reported record of an import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    /// Relative host
    pub host: String,
    /// Record type
    pub record_type: String,
    /// TTL in seconds
    pub ttl: u32,
    /// Record data
    pub data: String,
    /// Provider id of the created record, `None` in dry-run mode
    pub record_id: Option<i64>,
}

impl ImportEntry {
    pub(crate) fn new(record: &TargetRecord, record_id: Option<i64>) -> Self {
        Self {
            host: record.host.clone(),
            record_type: record.record_type.clone(),
            ttl: record.ttl,
            data: record.data.clone(),
            record_id,
        }
    }
}

/// Result of a completed import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Zone name
    pub zone: String,
    /// Zone identifier
    pub zone_id: i64,
    /// How the zone was obtained
    pub zone_status: ZoneStatus,
    /// True if no record was actually sent
    pub dry_run: bool,
    /// Accepted records in file order
    pub entries: Vec<ImportEntry>,
    /// Number of records skipped (SOA, apex NS)
    pub skipped: usize,
}

impl ImportReport {
    pub(crate) fn new(context: &ImportContext, dry_run: bool) -> Self {
        Self {
            zone: context.zone.clone(),
            zone_id: context.zone_id,
            zone_status: context.zone_status,
            dry_run,
            entries: Vec::new(),
            skipped: 0,
        }
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone_status {
            ZoneStatus::WouldCreate => writeln!(f, "Zone {}: {}", self.zone, self.zone_status)?,
            _ => writeln!(f, "Zone {}: {} (id {})", self.zone, self.zone_status, self.zone_id)?,
        }

        let host_width = self
            .entries
            .iter()
            .map(|e| e.host.len())
            .max()
            .unwrap_or(0)
            .max(4);
        for entry in &self.entries {
            let action = match entry.record_id {
                Some(id) => format!("Created {id}"),
                None => "Would create".to_string(),
            };
            writeln!(
                f,
                "{action:<16} {:<host_width$} {:<6} {:>6} {}",
                entry.host, entry.record_type, entry.ttl, entry.data
            )?;
        }

        let verb = if self.dry_run {
            "would be created"
        } else {
            "created"
        };
        writeln!(
            f,
            "{} record(s) {verb}, {} skipped",
            self.entries.len(),
            self.skipped
        )
    }
}
