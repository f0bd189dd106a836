// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # slcli - Classic infrastructure command-line client
//!
//! slcli drives the classic infrastructure REST API from the command line. Its
//! DNS family can import a standard zone file into a hosted zone.
//!
//! ## Overview
//!
//! A zone import reads the file once, in order:
//!
//! - The owner of the first record names the zone, which is created (or resolved
//!   by name when it already exists)
//! - Every record is projected onto the provider's record shape; SOA and apex NS
//!   records are skipped because the provider manages them
//! - SRV records go through the dedicated service record call
//! - The first API error aborts the run
//!
//! ## Modules
//!
//! - [`zonefile`] - Streaming RFC 1035 zone file reader
//! - [`import`] - Zone import driver, origin resolution and record projection
//! - [`softlayer`] - DNS service trait and REST client
//! - [`config`] - API configuration layering
//! - [`cli`] - Command-line definitions
//! - [`errors`] - Error types
//!
//! ## Example
//!
//! ```rust
//! use slcli::import::{projector, ImportContext, Projection, ZoneStatus};
//! use slcli::zonefile::ZoneFileReader;
//!
//! let zone = "example.com. 3600 IN TXT \"v=spf1\" \"include:x\" \"~all\"\n";
//! let record = ZoneFileReader::new(zone.as_bytes()).next().unwrap().unwrap();
//!
//! let context = ImportContext::new(record.owner.clone(), 42, ZoneStatus::Created);
//! match projector::project(&context, &record) {
//!     Projection::Record(target) => {
//!         assert_eq!(target.host, "@");
//!         assert_eq!(target.data, "v=spf1 include:x ~all");
//!     }
//!     other => panic!("unexpected projection {other:?}"),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod import;
pub mod softlayer;
pub mod zonefile;
