// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Classic infrastructure DNS API.
//!
//! [`DnsService`] is the set of calls a zone import needs from the provider.
//! [`SoftLayerClient`] implements it over the REST API:
//!
//! | Operation | REST call |
//! |-----------|-----------|
//! | `create_zone` | `POST SoftLayer_Dns_Domain/createObject` |
//! | `get_zone_by_name` | `GET SoftLayer_Dns_Domain/getByDomainName/{name}` |
//! | `create_record` | `POST SoftLayer_Dns_Domain_ResourceRecord/createObject` |
//! | `create_service_record` | `POST SoftLayer_Dns_Domain_ResourceRecord_SrvType/createObject` |

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::SoftLayerClient;
pub use types::{CreatedRecord, Zone};

use crate::errors::ApiError;
use crate::import::{ServiceRecord, TargetRecord};
use async_trait::async_trait;

/// DNS operations of the remote provider.
///
/// Every call is made once; implementations must not retry.
#[async_trait]
pub trait DnsService: Send + Sync {
    /// Create a zone named `name`.
    async fn create_zone(&self, name: &str) -> Result<Zone, ApiError>;

    /// Find the zone named exactly `name`.
    ///
    /// Returns `ApiError::ZoneNotFound` if there is no such zone.
    async fn get_zone_by_name(&self, name: &str) -> Result<Zone, ApiError>;

    /// Create any record except SRV.
    async fn create_record(&self, record: &TargetRecord) -> Result<CreatedRecord, ApiError>;

    /// Create an SRV record.
    async fn create_service_record(&self, record: &ServiceRecord)
        -> Result<CreatedRecord, ApiError>;
}
