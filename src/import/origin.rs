// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Origin inference and zone provisioning.
//!
//! The origin of an import is the owner of the first record in the file. The
//! zone is created optimistically; if creation fails (typically because the zone
//! already exists from an earlier run) it is resolved by name instead.

use super::types::{ImportContext, ZoneStatus};
use crate::errors::ImportError;
use crate::softlayer::DnsService;
use hickory_proto::rr::Name;
use tracing::{info, warn};

/// Zone name for a fully-qualified owner: the trailing dot removed.
#[must_use]
pub fn origin_from_owner(owner: &Name) -> String {
    let text = owner.to_string();
    match text.strip_suffix('.') {
        Some(zone) => zone.to_string(),
        None => text,
    }
}

/// Create the zone named after `owner`, or resolve it by name if creation fails.
///
/// Runs once per import and is never retried.
///
/// # Errors
///
/// Returns `ImportError::ZoneProvisioningFailed` carrying the creation error if
/// both creation and lookup fail.
pub async fn provision_zone<S>(service: &S, owner: &Name) -> Result<ImportContext, ImportError>
where
    S: DnsService + ?Sized,
{
    let zone = origin_from_owner(owner);

    match service.create_zone(&zone).await {
        Ok(created) => {
            info!(zone = %zone, zone_id = created.id, "Created zone");
            Ok(ImportContext::new(
                owner.clone(),
                created.id,
                ZoneStatus::Created,
            ))
        }
        Err(create_error) => {
            warn!(
                zone = %zone,
                error = %create_error,
                "Zone creation failed, looking up existing zone by name"
            );
            match service.get_zone_by_name(&zone).await {
                Ok(existing) => {
                    info!(zone = %zone, zone_id = existing.id, "Using existing zone");
                    Ok(ImportContext::new(
                        owner.clone(),
                        existing.id,
                        ZoneStatus::Existing,
                    ))
                }
                Err(lookup_error) => Err(ImportError::ZoneProvisioningFailed {
                    zone,
                    source: create_error,
                    lookup_error,
                }),
            }
        }
    }
}

/// Context of a dry run for the zone named after `owner`.
///
/// Nothing is sent to the provider: the zone is reported as
/// [`ZoneStatus::WouldCreate`] with id 0.
#[must_use]
pub fn preview_zone(owner: &Name) -> ImportContext {
    let context = ImportContext::new(owner.clone(), 0, ZoneStatus::WouldCreate);
    info!(zone = %context.zone, "Dry run, zone would be created");
    context
}

#[cfg(test)]
#[path = "origin_tests.rs"]
mod origin_tests;
