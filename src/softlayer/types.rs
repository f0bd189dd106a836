// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Wire types of the classic infrastructure REST API.

use crate::import::{ServiceRecord, TargetRecord};
use serde::{Deserialize, Serialize};

/// A DNS zone (`SoftLayer_Dns_Domain`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone identifier
    pub id: i64,
    /// Zone name without trailing dot
    pub name: String,
    /// SOA serial, when returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,
}

/// A created resource record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecord {
    /// Record identifier
    pub id: i64,
    /// Host label
    #[serde(default)]
    pub host: Option<String>,
    /// Record type, lowercase as the API stores it
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
}

/// Every API call takes its arguments wrapped in a `parameters` array.
#[derive(Debug, Serialize)]
pub(crate) struct Parameters<'a, T: Serialize> {
    pub parameters: [&'a T; 1],
}

impl<'a, T: Serialize> Parameters<'a, T> {
    pub(crate) fn new(value: &'a T) -> Self {
        Self { parameters: [value] }
    }
}

/// Template for `SoftLayer_Dns_Domain::createObject`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ZoneTemplate<'a> {
    pub name: &'a str,
    pub resource_records: Vec<ResourceRecordTemplate<'a>>,
}

/// Template for `SoftLayer_Dns_Domain_ResourceRecord::createObject`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResourceRecordTemplate<'a> {
    pub domain_id: i64,
    pub host: &'a str,
    pub data: &'a str,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<u16>,
}

impl<'a> From<&'a TargetRecord> for ResourceRecordTemplate<'a> {
    fn from(record: &'a TargetRecord) -> Self {
        Self {
            domain_id: record.zone_id,
            host: &record.host,
            data: &record.data,
            record_type: record.record_type.to_ascii_lowercase(),
            ttl: record.ttl,
            mx_priority: record.mx_priority,
        }
    }
}

/// Template for `SoftLayer_Dns_Domain_ResourceRecord_SrvType::createObject`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SrvRecordTemplate<'a> {
    #[serde(flatten)]
    pub base: ResourceRecordTemplate<'a>,
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<&'a str>,
}

impl<'a> From<&'a ServiceRecord> for SrvRecordTemplate<'a> {
    fn from(record: &'a ServiceRecord) -> Self {
        Self {
            base: ResourceRecordTemplate::from(&record.record),
            priority: record.priority,
            weight: record.weight,
            port: record.port,
            service: record.service.as_deref(),
            protocol: record.protocol.as_deref(),
        }
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}
