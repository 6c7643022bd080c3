// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary normalization of upstream seat-map JSON.
//!
//! Upstream responses arrive in a few envelope variants (`{decks}`,
//! `{seatMap: {decks}}`, `{data: {seatMap: {decks}}}`). This module resolves
//! the envelope exactly once into a [`SeatmapData`]; nothing downstream ever
//! re-checks optional paths.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::model::SeatmapData;

#[derive(Debug)]
pub enum SeatmapParseError {
    /// Input is not JSON at all.
    InvalidJson { source: serde_json::Error },
    /// JSON null, or no recognized envelope carries a `decks` field.
    NoData,
    /// An envelope was found but its `decks` value is not an array.
    DecksNotArray,
    /// The decks array itself does not deserialize into the model.
    MalformedDecks { source: serde_json::Error },
}

impl fmt::Display for SeatmapParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson { source } => write!(f, "seat-map input is not valid JSON: {source}"),
            Self::NoData => f.write_str("no seat map data available"),
            Self::DecksNotArray => f.write_str("invalid seat map data: 'decks' is not an array"),
            Self::MalformedDecks { source } => {
                write!(f, "invalid seat map data: malformed decks: {source}")
            }
        }
    }
}

impl std::error::Error for SeatmapParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson { source } | Self::MalformedDecks { source } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SeatmapLoadError {
    Io { path: String, source: std::io::Error },
    Parse { path: String, source: SeatmapParseError },
}

impl fmt::Display for SeatmapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read seat map {path}: {source}"),
            Self::Parse { path, source } => write!(f, "failed to parse seat map {path}: {source}"),
        }
    }
}

impl std::error::Error for SeatmapLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Parses a seat map from raw JSON text.
pub fn parse_seatmap_str(text: &str) -> Result<SeatmapData, SeatmapParseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| SeatmapParseError::InvalidJson { source })?;
    parse_seatmap_value(&value)
}

/// Parses a seat map from an already-decoded JSON value, resolving the
/// envelope variants described in the module docs.
pub fn parse_seatmap_value(value: &Value) -> Result<SeatmapData, SeatmapParseError> {
    let envelope = resolve_envelope(value).ok_or(SeatmapParseError::NoData)?;

    // `resolve_envelope` guarantees the key exists.
    let decks = envelope.get("decks").expect("envelope has decks");
    if !decks.is_array() {
        return Err(SeatmapParseError::DecksNotArray);
    }

    serde_json::from_value(envelope.clone())
        .map_err(|source| SeatmapParseError::MalformedDecks { source })
}

/// Reads and parses a seat-map JSON file.
pub fn load_seatmap_file(path: impl AsRef<Path>) -> Result<SeatmapData, SeatmapLoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path)
        .map_err(|source| SeatmapLoadError::Io { path: display.clone(), source })?;
    parse_seatmap_str(&text).map_err(|source| SeatmapLoadError::Parse { path: display, source })
}

/// Picks the innermost object that carries a `decks` key. Checked in order:
/// the value itself, `seatMap`, `data.seatMap`, `data`.
fn resolve_envelope(value: &Value) -> Option<&Value> {
    let candidates = [
        Some(value),
        value.get("seatMap"),
        value.get("data").and_then(|data| data.get("seatMap")),
        value.get("data"),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_object() && candidate.get("decks").is_some())
}

#[cfg(test)]
mod tests {
    use super::{parse_seatmap_str, parse_seatmap_value, SeatmapParseError};

    #[test]
    fn parses_bare_decks_envelope() {
        let seatmap = parse_seatmap_str(
            r#"{ "decks": [ { "deckType": "MAIN", "seats": [ { "number": "10A" } ] } ] }"#,
        )
        .expect("seatmap");
        assert_eq!(seatmap.decks().len(), 1);
        assert_eq!(seatmap.decks()[0].seats()[0].number(), "10A");
    }

    #[test]
    fn parses_seat_map_and_data_envelopes() {
        for text in [
            r#"{ "seatMap": { "decks": [] } }"#,
            r#"{ "data": { "seatMap": { "decks": [] } } }"#,
            r#"{ "data": { "decks": [] } }"#,
        ] {
            let seatmap = parse_seatmap_str(text).expect("seatmap");
            assert!(seatmap.decks().is_empty(), "envelope variant failed: {text}");
        }
    }

    #[test]
    fn null_input_is_no_data_not_a_panic() {
        assert!(matches!(
            parse_seatmap_value(&serde_json::Value::Null),
            Err(SeatmapParseError::NoData)
        ));
    }

    #[test]
    fn missing_decks_is_no_data() {
        assert!(matches!(
            parse_seatmap_str(r#"{ "flights": [] }"#),
            Err(SeatmapParseError::NoData)
        ));
    }

    #[test]
    fn non_array_decks_is_invalid_data() {
        assert!(matches!(
            parse_seatmap_str(r#"{ "decks": "not-an-array" }"#),
            Err(SeatmapParseError::DecksNotArray)
        ));
    }

    #[test]
    fn invalid_json_reports_the_decode_error() {
        let err = parse_seatmap_str("{ nope").expect_err("parse error");
        assert!(matches!(err, SeatmapParseError::InvalidJson { .. }));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn flat_fallback_seats_survive_normalization() {
        let seatmap = parse_seatmap_str(
            r#"{
                "seatMap": {
                    "seats": [ { "number": "1A", "coordinates": { "x": 0, "y": 0 } } ],
                    "decks": [ { "deckType": "MAIN" } ]
                }
            }"#,
        )
        .expect("seatmap");
        assert_eq!(seatmap.fallback_seats().len(), 1);
        assert_eq!(seatmap.deck_seats(0)[0].number(), "1A");
    }
}
