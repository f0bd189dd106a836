// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Parsed resource record values produced by the zone file reader.

use data_encoding::HEXLOWER;
use hickory_proto::rr::{Name, RData, RecordType};
use std::fmt;

/// Mnemonics that are valid in master files but unknown to hickory, with their type codes.
pub(crate) const LEGACY_RECORD_TYPES: &[(&str, u16)] = &[
    ("MB", 7),
    ("MG", 8),
    ("MR", 9),
    ("WKS", 11),
    ("MINFO", 14),
    ("RP", 17),
    ("AFSDB", 18),
    ("RT", 21),
    ("LOC", 29),
    ("KX", 36),
    ("A6", 38),
    ("DNAME", 39),
    ("APL", 42),
    ("IPSECKEY", 45),
    ("DHCID", 49),
    ("SMIMEA", 53),
    ("HIP", 55),
    ("SPF", 99),
    ("EUI48", 108),
    ("EUI64", 109),
    ("URI", 256),
    ("DLV", 32769),
];

/// Presentation mnemonic of a record type.
///
/// Legacy types keep their usual name; other codes hickory does not know are
/// written in the generic `TYPEnnn` form.
#[must_use]
pub fn type_mnemonic(record_type: RecordType) -> String {
    match record_type {
        RecordType::Unknown(code) => LEGACY_RECORD_TYPES
            .iter()
            .find(|(_, legacy)| *legacy == code)
            .map_or_else(|| format!("TYPE{code}"), |(name, _)| (*name).to_string()),
        known => known.to_string(),
    }
}

/// Record data of one resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// Rdata decoded by hickory, from presentation form or the generic `\#` form
    Typed(RData),
    /// Presentation fields of a type hickory cannot decode from text
    /// (legacy and unknown mnemonics, DNSSEC types)
    Opaque(Vec<String>),
}

impl RecordData {
    /// Number of rdata fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        match self {
            Self::Typed(RData::TXT(txt)) => txt.txt_data().len(),
            Self::Typed(RData::NULL(null) | RData::Unknown { rdata: null, .. }) => {
                usize::from(!null.anything().is_empty())
            }
            Self::Typed(rdata) => rdata.to_string().split_whitespace().count(),
            Self::Opaque(fields) => fields.len(),
        }
    }

    /// Rdata field `index`, counting from 1 as DNS tooling does.
    ///
    /// Field 1 is the first rdata field (the address of an A record, the
    /// preference of an MX record). Opaque binary data is one hex field.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<String> {
        let position = index.checked_sub(1)?;
        match self {
            Self::Typed(RData::TXT(txt)) => txt
                .txt_data()
                .get(position)
                .map(|s| String::from_utf8_lossy(s).into_owned()),
            Self::Typed(RData::NULL(null) | RData::Unknown { rdata: null, .. }) => {
                let bytes = null.anything();
                (position == 0 && !bytes.is_empty()).then(|| HEXLOWER.encode(bytes))
            }
            Self::Typed(rdata) => rdata
                .to_string()
                .split_whitespace()
                .nth(position)
                .map(str::to_string),
            Self::Opaque(fields) => fields.get(position).cloned(),
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed(RData::TXT(txt)) => {
                let quoted: Vec<String> = txt
                    .txt_data()
                    .iter()
                    .map(|s| {
                        let s = String::from_utf8_lossy(s);
                        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
                    })
                    .collect();
                f.write_str(&quoted.join(" "))
            }
            Self::Typed(RData::NULL(null) | RData::Unknown { rdata: null, .. }) => {
                let bytes = null.anything();
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " {}", HEXLOWER.encode(bytes))?;
                }
                Ok(())
            }
            Self::Typed(rdata) => write!(f, "{rdata}"),
            Self::Opaque(fields) => f.write_str(&fields.join(" ")),
        }
    }
}

/// One resource record as read from a zone file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Fully-qualified owner name, lowercase
    pub owner: Name,
    /// TTL in seconds after `$TTL` and inheritance rules are applied
    pub ttl: u32,
    /// Class mnemonic (almost always "IN")
    pub class: String,
    /// Record type; legacy mnemonics map to `RecordType::Unknown(code)`
    pub record_type: RecordType,
    /// Type-specific data
    pub data: RecordData,
    /// Line where the entry starts
    pub line: usize,
}

impl ParsedRecord {
    /// Uppercase type mnemonic, e.g. "MX", "SPF" or "TYPE65534".
    #[must_use]
    pub fn type_name(&self) -> String {
        type_mnemonic(self.record_type)
    }
}

impl fmt::Display for ParsedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.owner,
            self.ttl,
            self.class,
            self.type_name()
        )?;
        if self.data.field_count() > 0 {
            write!(f, "\t{}", self.data)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
