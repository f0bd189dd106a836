// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Maps parsed zone file records onto the provider's record shape.
//!
//! Every record becomes either a [`TargetRecord`], a [`ServiceRecord`] (SRV) or a
//! skip. Projection never fails: anything the reader accepted can be projected.

use super::types::{ImportContext, Projection, ServiceRecord, SkipReason, TargetRecord};
use crate::constants::{APEX_HOST, DEFAULT_RECORD_TTL_SECS};
use crate::zonefile::{ParsedRecord, RecordData};
use hickory_proto::rr::{Name, RData};
use tracing::warn;

/// Project one parsed record for the zone described by `context`.
#[must_use]
pub fn project(context: &ImportContext, record: &ParsedRecord) -> Projection {
    let host = relative_host(&record.owner, &context.origin);
    let base = |data: String, mx_priority: Option<u16>| TargetRecord {
        zone_id: context.zone_id,
        host: host.clone(),
        record_type: record.type_name(),
        ttl: effective_ttl(record.ttl),
        data,
        mx_priority,
    };

    let rdata = match &record.data {
        RecordData::Typed(rdata) => rdata,
        RecordData::Opaque(_) => return Projection::Record(base(other_data(record), None)),
    };
    match rdata {
        RData::SOA(_) => Projection::Skip(SkipReason::Soa),
        RData::NS(_) if host == APEX_HOST => Projection::Skip(SkipReason::ApexNs),
        RData::NS(ns) => Projection::Record(base(ns.0.to_string(), None)),
        RData::CNAME(cname) => Projection::Record(base(cname.0.to_string(), None)),
        RData::MX(mx) => {
            Projection::Record(base(mx.exchange().to_string(), Some(mx.preference())))
        }
        RData::TXT(txt) => {
            let strings: Vec<String> = txt
                .txt_data()
                .iter()
                .map(|s| String::from_utf8_lossy(s).into_owned())
                .collect();
            Projection::Record(base(txt_data(&strings), None))
        }
        RData::SRV(srv) => {
            let (service, protocol) = service_labels(&host);
            Projection::Service(ServiceRecord {
                record: base(srv.target().to_string(), None),
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                service,
                protocol,
            })
        }
        _ => Projection::Record(base(other_data(record), None)),
    }
}

/// Data of a record type without a dedicated mapping.
///
/// The first rdata field, or the whole presentation line when there is none.
fn other_data(record: &ParsedRecord) -> String {
    if record.data.field_count() == 0 {
        record.to_string()
    } else {
        record.data.field(1).unwrap_or_default()
    }
}

/// Host label of `owner` relative to `origin`.
///
/// Returns `@` for the apex and the leading labels for names inside the zone.
/// Owners outside the zone are returned whole, without the trailing dot.
#[must_use]
pub fn relative_host(owner: &Name, origin: &Name) -> String {
    if origin.zone_of(owner) {
        let depth = owner.iter().count() - origin.iter().count();
        if depth == 0 {
            return APEX_HOST.to_string();
        }
        let labels: Vec<String> = owner
            .iter()
            .take(depth)
            .map(|label| String::from_utf8_lossy(label).into_owned())
            .collect();
        return labels.join(".");
    }

    warn!(owner = %owner, origin = %origin, "Record owner is outside the zone origin");
    let text = owner.to_string();
    text.strip_suffix('.').unwrap_or(&text).to_string()
}

/// TXT data: strings joined by one space, then one layer of surrounding quotes removed.
#[must_use]
pub fn txt_data(strings: &[String]) -> String {
    let joined = strings.join(" ");
    match joined
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.to_string(),
        None => joined,
    }
}

/// TTL sent to the provider; zero means "unset" and falls back to the default.
#[must_use]
pub fn effective_ttl(ttl: u32) -> u32 {
    if ttl == 0 {
        DEFAULT_RECORD_TTL_SECS
    } else {
        ttl
    }
}

/// Split `_service._proto[.name]` hosts into their service and protocol labels.
fn service_labels(host: &str) -> (Option<String>, Option<String>) {
    let mut labels = host.split('.');
    match (labels.next(), labels.next()) {
        (Some(service), Some(protocol))
            if service.len() > 1
                && protocol.len() > 1
                && service.starts_with('_')
                && protocol.starts_with('_') =>
        {
            (Some(service.to_string()), Some(protocol.to_string()))
        }
        _ => (None, None),
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod projector_tests;
