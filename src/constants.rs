// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for slcli.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// Default REST endpoint of the classic infrastructure API
pub const DEFAULT_API_ENDPOINT: &str = "https://api.softlayer.com/rest/v3.1";

/// Service name for DNS zones (domains)
pub const SERVICE_DNS_DOMAIN: &str = "SoftLayer_Dns_Domain";

/// Service name for generic resource records
pub const SERVICE_RESOURCE_RECORD: &str = "SoftLayer_Dns_Domain_ResourceRecord";

/// Service name for SRV resource records
pub const SERVICE_SRV_RECORD: &str = "SoftLayer_Dns_Domain_ResourceRecord_SrvType";

/// Default timeout for a single API request
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// DNS Constants
// ============================================================================

/// Host label used for records at the zone apex
pub const APEX_HOST: &str = "@";

/// Default TTL for records that carry no usable TTL (1 hour)
pub const DEFAULT_RECORD_TTL_SECS: u32 = 3600;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Environment variable holding the API username
pub const ENV_USERNAME: &str = "SL_USERNAME";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "SL_API_KEY";

/// Environment variable overriding the API endpoint
pub const ENV_API_ENDPOINT: &str = "SL_API_ENDPOINT";

/// Environment variable overriding the request timeout in seconds
pub const ENV_API_TIMEOUT: &str = "SL_API_TIMEOUT";

/// Config file looked up in the user's home directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".slcli.yaml";
