// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Streaming reader for RFC 1035 master (zone) files.
//!
//! [`ZoneFileReader`] yields [`ParsedRecord`] values in file order, one entry at a
//! time, so a caller can act on a record before the next one is read. It handles:
//!
//! - `;` comments and parenthesised multi-line entries
//! - Blank owners (inherit the previous owner) and `@`
//! - `$ORIGIN` and `$TTL` directives
//! - TTL and class in either order, with BIND time units (`1h30m`, `1w`)
//! - Generic `TYPEnnn` record types and RFC 3597 `\# <length> <hex>` rdata
//!
//! `$INCLUDE` and `$GENERATE` are rejected.
//!
//! Names are qualified and rdata is decoded with `hickory-proto`.
//!
//! # Example
//!
//! ```rust
//! use hickory_proto::rr::{Name, RData};
//! use slcli::zonefile::{RecordData, ZoneFileReader};
//!
//! let zone = "$ORIGIN example.com.\n@ 300 IN MX 10 mail\n";
//! let records: Vec<_> = ZoneFileReader::new(zone.as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(records[0].owner.to_string(), "example.com.");
//! match &records[0].data {
//!     RecordData::Typed(RData::MX(mx)) => {
//!         assert_eq!(mx.preference(), 10);
//!         assert_eq!(*mx.exchange(), Name::from_ascii("mail.example.com.").unwrap());
//!     }
//!     other => panic!("unexpected data {other:?}"),
//! }
//! ```

pub mod lexer;
pub mod record;

pub use lexer::{Lexer, Token};
pub use record::{type_mnemonic, ParsedRecord, RecordData};

use crate::constants::DEFAULT_RECORD_TTL_SECS;
use crate::errors::ZoneFileError;
use data_encoding::HEXLOWER_PERMISSIVE;
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinDecoder, Restrict};
use hickory_proto::serialize::txt::RDataParser;
use record::LEGACY_RECORD_TYPES;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;
use tracing::trace;

/// One logical entry: all tokens up to the closing parenthesis.
#[derive(Debug)]
struct Entry {
    line: usize,
    blank_owner: bool,
    tokens: Vec<Token>,
}

/// Lazy iterator over the records of a zone file.
///
/// Entry framing (owner, TTL, class, parentheses, directives) is read here so
/// records come out in file order. Names and rdata are decoded by hickory.
///
/// The iterator is fused on the first error: after yielding `Err` it yields `None`.
pub struct ZoneFileReader<R> {
    lines: Lines<R>,
    line_no: usize,
    origin: Option<Name>,
    default_ttl: Option<u32>,
    last_ttl: Option<u32>,
    last_owner: Option<Name>,
    last_class: Option<String>,
    failed: bool,
}

impl ZoneFileReader<BufReader<File>> {
    /// Open a zone file on disk.
    ///
    /// The file handle is owned by the reader and released when it is dropped.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ZoneFileReader<R> {
    /// Create a reader over any buffered source.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            origin: None,
            default_ttl: None,
            last_ttl: None,
            last_owner: None,
            last_class: None,
            failed: false,
        }
    }

    /// Read physical lines until one complete entry has been collected.
    fn next_entry(&mut self) -> Result<Option<Entry>, ZoneFileError> {
        let mut lexer = Lexer::default();
        let mut entry: Option<Entry> = None;

        loop {
            let Some(line) = self.lines.next() else {
                if lexer.in_group() {
                    return Err(ZoneFileError::Syntax {
                        line: entry.as_ref().map_or(self.line_no, |e| e.line),
                        reason: "unbalanced '(' at end of file".to_string(),
                    });
                }
                return Ok(entry);
            };
            self.line_no += 1;
            let line = line.map_err(|source| ZoneFileError::Io {
                line: self.line_no,
                source,
            })?;

            let current = entry.get_or_insert_with(|| Entry {
                line: self.line_no,
                blank_owner: line.starts_with(|c: char| c.is_whitespace()),
                tokens: Vec::new(),
            });
            lexer.tokenize_line(&line, self.line_no, &mut current.tokens)?;

            if current.tokens.is_empty() && !lexer.in_group() {
                // Blank or comment-only line
                entry = None;
                continue;
            }
            if !lexer.in_group() {
                return Ok(entry);
            }
        }
    }

    /// Apply a `$` directive.
    fn apply_directive(&mut self, entry: &Entry) -> Result<(), ZoneFileError> {
        let directive = entry.tokens[0].text.to_ascii_uppercase();
        let argument = entry.tokens.get(1).map(|t| t.text.as_str());

        match (directive.as_str(), argument) {
            ("$ORIGIN", Some(name)) => {
                let origin = self.absolute_name(name, entry.line)?;
                trace!(origin = %origin, line = entry.line, "Origin changed");
                self.origin = Some(origin);
                Ok(())
            }
            ("$TTL", Some(value)) => {
                let ttl = parse_ttl(value).ok_or_else(|| ZoneFileError::Syntax {
                    line: entry.line,
                    reason: format!("invalid $TTL value '{value}'"),
                })?;
                self.default_ttl = Some(ttl);
                Ok(())
            }
            ("$ORIGIN" | "$TTL", None) => Err(ZoneFileError::Syntax {
                line: entry.line,
                reason: format!("{directive} requires an argument"),
            }),
            _ => Err(ZoneFileError::UnsupportedDirective {
                line: entry.line,
                directive,
            }),
        }
    }

    /// Qualify `name` against the current origin; the result is lowercase.
    fn absolute_name(&self, name: &str, line: usize) -> Result<Name, ZoneFileError> {
        let missing_origin = || ZoneFileError::MissingOrigin {
            line,
            name: name.to_string(),
        };
        if name == "@" {
            return self.origin.clone().ok_or_else(missing_origin);
        }

        let parsed = Name::parse(name, self.origin.as_ref()).map_err(|e| ZoneFileError::Syntax {
            line,
            reason: format!("invalid name '{name}': {e}"),
        })?;
        if !parsed.is_fqdn() {
            return Err(missing_origin());
        }
        Ok(parsed.to_lowercase())
    }

    /// Turn a record entry into a [`ParsedRecord`].
    fn parse_record(&mut self, entry: Entry) -> Result<ParsedRecord, ZoneFileError> {
        let line = entry.line;
        let mut tokens = entry.tokens.into_iter().peekable();

        let owner = if entry.blank_owner {
            self.last_owner
                .clone()
                .ok_or_else(|| ZoneFileError::Syntax {
                    line,
                    reason: "entry has no owner and no previous owner to inherit".to_string(),
                })?
        } else {
            let token = tokens.next().ok_or_else(|| ZoneFileError::Syntax {
                line,
                reason: "empty entry".to_string(),
            })?;
            self.absolute_name(&token.text, line)?
        };

        let mut ttl = None;
        let mut class = None;
        while let Some(token) = tokens.peek() {
            let upper = token.text.to_ascii_uppercase();
            if class.is_none() && is_class(&upper) {
                class = Some(upper);
            } else if ttl.is_none() && token.text.starts_with(|c: char| c.is_ascii_digit()) {
                ttl = Some(parse_ttl(&token.text).ok_or_else(|| ZoneFileError::Syntax {
                    line,
                    reason: format!("invalid TTL '{}'", token.text),
                })?);
            } else {
                break;
            }
            tokens.next();
        }

        let type_token = tokens.next().ok_or_else(|| ZoneFileError::Syntax {
            line,
            reason: format!("missing record type for owner '{owner}'"),
        })?;
        let record_type = parse_record_type(&type_token.text).ok_or_else(|| {
            ZoneFileError::Syntax {
                line,
                reason: format!("unknown record type '{}'", type_token.text),
            }
        })?;
        if is_meta_type(record_type) {
            return Err(ZoneFileError::Syntax {
                line,
                reason: format!("{record_type} cannot appear in a zone file"),
            });
        }

        let fields: Vec<Token> = tokens.collect();
        let data = self.parse_rdata(record_type, &fields, line)?;

        let ttl = match ttl {
            Some(explicit) => {
                self.last_ttl = Some(explicit);
                explicit
            }
            None => self
                .default_ttl
                .or(self.last_ttl)
                .unwrap_or(DEFAULT_RECORD_TTL_SECS),
        };
        let class = class
            .or_else(|| self.last_class.clone())
            .unwrap_or_else(|| "IN".to_string());

        self.last_owner = Some(owner.clone());
        self.last_class = Some(class.clone());

        Ok(ParsedRecord {
            owner,
            ttl,
            class,
            record_type,
            data,
            line,
        })
    }

    /// Decode the rdata fields of a record of type `record_type`.
    fn parse_rdata(
        &self,
        record_type: RecordType,
        fields: &[Token],
        line: usize,
    ) -> Result<RecordData, ZoneFileError> {
        let invalid = |reason: String| ZoneFileError::InvalidRecord {
            line,
            record_type: type_mnemonic(record_type),
            reason,
        };

        if fields.first().is_some_and(|t| !t.quoted && t.text == "\\#") {
            return decode_generic(record_type, &fields[1..]).map_err(invalid);
        }
        if !is_text_parsable(record_type) {
            return Ok(RecordData::Opaque(
                fields.iter().map(|t| t.text.clone()).collect(),
            ));
        }
        if record_type == RecordType::TXT && fields.is_empty() {
            return Err(invalid("expected at least one string".to_string()));
        }

        // hickory does not know `@` inside rdata
        let origin_text = self.origin.as_ref().map(ToString::to_string);
        let tokens = fields.iter().map(|t| match &origin_text {
            Some(origin) if !t.quoted && t.text == "@" => origin.as_str(),
            _ => t.text.as_str(),
        });
        let rdata = RData::parse(record_type, tokens, self.origin.as_ref())
            .map_err(|e| invalid(e.to_string()))?;

        if let Some(target) = rdata_target(&rdata).filter(|name| !name.is_fqdn()) {
            return Err(ZoneFileError::MissingOrigin {
                line,
                name: target.to_string(),
            });
        }
        Ok(RecordData::Typed(rdata))
    }

    fn read_next(&mut self) -> Result<Option<ParsedRecord>, ZoneFileError> {
        loop {
            let Some(entry) = self.next_entry()? else {
                return Ok(None);
            };
            let is_directive = !entry.blank_owner
                && entry
                    .tokens
                    .first()
                    .is_some_and(|t| !t.quoted && t.text.starts_with('$'));
            if is_directive {
                self.apply_directive(&entry)?;
                continue;
            }
            return self.parse_record(entry).map(Some);
        }
    }
}

impl<R: BufRead> Iterator for ZoneFileReader<R> {
    type Item = Result<ParsedRecord, ZoneFileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_next() {
            Ok(record) => record.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse a TTL written as seconds or with BIND units (`s`, `m`, `h`, `d`, `w`).
///
/// Returns `None` for malformed values and values that overflow `u32`.
#[must_use]
pub fn parse_ttl(value: &str) -> Option<u32> {
    if value.is_empty() {
        return None;
    }
    if let Ok(seconds) = value.parse::<u32>() {
        return Some(seconds);
    }

    let mut total: u32 = 0;
    let mut current: Option<u32> = None;
    for c in value.chars() {
        if let Some(digit) = c.to_digit(10) {
            current = Some(current.unwrap_or(0).checked_mul(10)?.checked_add(digit)?);
            continue;
        }
        let multiplier = match c.to_ascii_lowercase() {
            's' => 1,
            'm' => 60,
            'h' => 3600,
            'd' => 86_400,
            'w' => 604_800,
            _ => return None,
        };
        total = total.checked_add(current.take()?.checked_mul(multiplier)?)?;
    }
    total.checked_add(current.unwrap_or(0))
}

/// Decode RFC 3597 generic rdata: `\# <length> <hex>...`.
fn decode_generic(record_type: RecordType, fields: &[Token]) -> Result<RecordData, String> {
    let (length, hex_fields) = fields
        .split_first()
        .ok_or_else(|| "generic rdata is missing its length".to_string())?;
    let length: u16 = length
        .text
        .parse()
        .map_err(|_| format!("invalid generic rdata length '{}'", length.text))?;

    let digits: String = hex_fields.iter().map(|t| t.text.as_str()).collect();
    let bytes = HEXLOWER_PERMISSIVE
        .decode(digits.as_bytes())
        .map_err(|e| format!("invalid generic rdata hex: {e}"))?;
    if bytes.len() != usize::from(length) {
        return Err(format!(
            "generic rdata length is {length} but {} byte(s) were given",
            bytes.len()
        ));
    }

    let mut decoder = BinDecoder::new(&bytes);
    RData::read(&mut decoder, record_type, Restrict::new(length))
        .map(RecordData::Typed)
        .map_err(|e| e.to_string())
}

/// Recognize a type mnemonic, the generic `TYPEnnn` form, or a legacy mnemonic.
fn parse_record_type(text: &str) -> Option<RecordType> {
    let upper = text.to_ascii_uppercase();
    if let Some(code) = upper.strip_prefix("TYPE").filter(|n| !n.is_empty()) {
        return code.parse::<u16>().ok().map(RecordType::from);
    }
    RecordType::from_str(&upper).ok().or_else(|| {
        LEGACY_RECORD_TYPES
            .iter()
            .find(|(name, _)| *name == upper)
            .map(|(_, code)| RecordType::Unknown(*code))
    })
}

/// Query and transfer types that never describe zone data.
fn is_meta_type(record_type: RecordType) -> bool {
    matches!(
        record_type,
        RecordType::ANY
            | RecordType::AXFR
            | RecordType::IXFR
            | RecordType::OPT
            | RecordType::TSIG
    )
}

/// Types hickory can decode from presentation form.
fn is_text_parsable(record_type: RecordType) -> bool {
    !matches!(record_type, RecordType::NULL | RecordType::Unknown(_)) && !record_type.is_dnssec()
}

/// Domain name an NS, CNAME, PTR, MX or SRV record points to.
fn rdata_target(rdata: &RData) -> Option<&Name> {
    match rdata {
        RData::NS(ns) => Some(&ns.0),
        RData::CNAME(cname) => Some(&cname.0),
        RData::PTR(ptr) => Some(&ptr.0),
        RData::MX(mx) => Some(mx.exchange()),
        RData::SRV(srv) => Some(srv.target()),
        _ => None,
    }
}

fn is_class(upper: &str) -> bool {
    // CS is obsolete and unknown to hickory, but still legal in master files
    upper == "CS" || DNSClass::from_str(upper).is_ok()
}
