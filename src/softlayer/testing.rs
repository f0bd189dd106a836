// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory [`DnsService`] that records every call, for unit tests.

use super::{CreatedRecord, DnsService, Zone};
use crate::errors::ApiError;
use crate::import::{ServiceRecord, TargetRecord};
use async_trait::async_trait;
use std::sync::Mutex;

/// A call received by [`RecordingDnsService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateZone(String),
    GetZoneByName(String),
    CreateRecord(TargetRecord),
    CreateServiceRecord(ServiceRecord),
}

/// Fake provider with scripted zone behavior and record failures.
#[derive(Debug)]
pub(crate) struct RecordingDnsService {
    zone_id: i64,
    zone_exists: bool,
    lookup_fails: bool,
    fail_record_at: Option<usize>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingDnsService {
    /// Zone does not exist yet; creation succeeds with `zone_id`.
    pub(crate) fn new(zone_id: i64) -> Self {
        Self {
            zone_id,
            zone_exists: false,
            lookup_fails: false,
            fail_record_at: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Zone already exists: creation fails, lookup returns `zone_id`.
    pub(crate) fn existing_zone(mut self) -> Self {
        self.zone_exists = true;
        self
    }

    /// Lookup by name fails with a server error.
    pub(crate) fn failing_lookup(mut self) -> Self {
        self.lookup_fails = true;
        self
    }

    /// The `n`th record creation call (1-based, both kinds counted) fails.
    pub(crate) fn failing_record_at(mut self, n: usize) -> Self {
        self.fail_record_at = Some(n);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn created_records(&self) -> Vec<TargetRecord> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateRecord(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn created_service_records(&self) -> Vec<ServiceRecord> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateServiceRecord(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    fn record_call(&self, call: Call) -> Result<CreatedRecord, ApiError> {
        let mut calls = self.calls.lock().unwrap();
        let (host, record_type) = match &call {
            Call::CreateRecord(r) => (r.host.clone(), r.record_type.clone()),
            Call::CreateServiceRecord(r) => (r.record.host.clone(), r.record.record_type.clone()),
            _ => unreachable!("record_call only takes record creations"),
        };
        calls.push(call);
        let attempt = calls
            .iter()
            .filter(|c| matches!(c, Call::CreateRecord(_) | Call::CreateServiceRecord(_)))
            .count();

        if self.fail_record_at == Some(attempt) {
            return Err(ApiError::Http {
                url: "memory://record".to_string(),
                status: 400,
                code: Some("SoftLayer_Exception_Dns_InvalidRecord".to_string()),
                message: format!("record {host} rejected"),
            });
        }
        Ok(CreatedRecord {
            id: 1000 + i64::try_from(attempt).unwrap(),
            host: Some(host),
            record_type: Some(record_type.to_ascii_lowercase()),
        })
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Http {
        url: "memory://zone".to_string(),
        status: 500,
        code: Some("SoftLayer_Exception_Public".to_string()),
        message: message.to_string(),
    }
}

#[async_trait]
impl DnsService for RecordingDnsService {
    async fn create_zone(&self, name: &str) -> Result<Zone, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::CreateZone(name.to_string()));
        if self.zone_exists {
            return Err(server_error(&format!("{name} already exists")));
        }
        Ok(Zone {
            id: self.zone_id,
            name: name.to_string(),
            serial: None,
        })
    }

    async fn get_zone_by_name(&self, name: &str) -> Result<Zone, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::GetZoneByName(name.to_string()));
        if self.lookup_fails {
            return Err(server_error("lookup unavailable"));
        }
        if !self.zone_exists {
            return Err(ApiError::ZoneNotFound {
                zone: name.to_string(),
            });
        }
        Ok(Zone {
            id: self.zone_id,
            name: name.to_string(),
            serial: Some(2024010101),
        })
    }

    async fn create_record(&self, record: &TargetRecord) -> Result<CreatedRecord, ApiError> {
        self.record_call(Call::CreateRecord(record.clone()))
    }

    async fn create_service_record(
        &self,
        record: &ServiceRecord,
    ) -> Result<CreatedRecord, ApiError> {
        self.record_call(Call::CreateServiceRecord(record.clone()))
    }
}
