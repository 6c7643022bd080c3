// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

/// Integer grid position of a seat within a deck.
///
/// `x` is the row offset and `y` the column offset. These are layout indices,
/// not the printed row number (a deck starting at printed row 10 has its first
/// row at `x = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coordinates {
    x: i32,
    y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// One characteristic entry attached to a seat.
///
/// Upstream data carries these either as bare code strings or as objects with
/// code/category/description; both collapse into this shape at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeatCharacteristic {
    code: Option<String>,
    category: Option<String>,
    description: Option<String>,
}

impl SeatCharacteristic {
    pub fn from_code(code: impl Into<String>) -> Self {
        Self { code: Some(code.into()), category: None, description: None }
    }

    pub fn new(
        code: Option<String>,
        category: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self { code, category, description }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this entry marks an exit-row seat: code `E`/`EXIT`, category
    /// `EXIT_ROW`, or a free-text description mentioning "exit".
    pub fn is_exit(&self) -> bool {
        if matches!(self.code(), Some(code) if code.eq_ignore_ascii_case("E") || code.eq_ignore_ascii_case("EXIT"))
        {
            return true;
        }
        if matches!(self.category(), Some(category) if category.eq_ignore_ascii_case("EXIT_ROW")) {
            return true;
        }
        matches!(self.description(), Some(description) if description.to_lowercase().contains("exit"))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelerPricing {
    seat_availability_status: Option<String>,
    price: Option<Price>,
}

impl TravelerPricing {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self { seat_availability_status: Some(status.into()), price: None }
    }

    pub fn seat_availability_status(&self) -> Option<&str> {
        self.seat_availability_status.as_deref()
    }

    pub fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Price {
    total: Option<String>,
    currency: Option<String>,
}

impl Price {
    pub fn new(total: impl Into<String>, currency: impl Into<String>) -> Self {
        Self { total: Some(total.into()), currency: Some(currency.into()) }
    }

    pub fn total(&self) -> Option<&str> {
        self.total.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }
}

/// Classified availability of a seat. There is no "unknown" bucket; anything
/// unrecognized classifies as `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    Available,
    Occupied,
    Blocked,
}

impl SeatStatus {
    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.eq_ignore_ascii_case("AVAILABLE") {
            Some(Self::Available)
        } else if code.eq_ignore_ascii_case("OCCUPIED") {
            Some(Self::Occupied)
        } else if code.eq_ignore_ascii_case("BLOCKED") {
            Some(Self::Blocked)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Blocked => "blocked",
        }
    }
}

/// One physical seat as received from upstream.
///
/// Immutable for the duration of a render; malformed fields degrade per field
/// at deserialization (bad coordinates become `None`, bad characteristic
/// entries are skipped) so a single odd seat never rejects the whole deck.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeatRecord {
    number: String,
    cabin: Option<String>,
    #[serde(deserialize_with = "lenient_characteristics")]
    characteristics: Vec<SeatCharacteristic>,
    #[serde(deserialize_with = "lenient_coordinates")]
    coordinates: Option<Coordinates>,
    availability_status: Option<String>,
    traveler_pricing: Vec<TravelerPricing>,
}

impl SeatRecord {
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: number.into(), ..Self::default() }
    }

    pub fn with_coordinates(mut self, x: i32, y: i32) -> Self {
        self.coordinates = Some(Coordinates::new(x, y));
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.availability_status = Some(status.into());
        self
    }

    pub fn with_cabin(mut self, cabin: impl Into<String>) -> Self {
        self.cabin = Some(cabin.into());
        self
    }

    pub fn with_characteristic(mut self, characteristic: SeatCharacteristic) -> Self {
        self.characteristics.push(characteristic);
        self
    }

    pub fn with_traveler_pricing(mut self, pricing: TravelerPricing) -> Self {
        self.traveler_pricing.push(pricing);
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn cabin(&self) -> Option<&str> {
        self.cabin.as_deref()
    }

    pub fn characteristics(&self) -> &[SeatCharacteristic] {
        &self.characteristics
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn availability_status(&self) -> Option<&str> {
        self.availability_status.as_deref()
    }

    pub fn traveler_pricing(&self) -> &[TravelerPricing] {
        &self.traveler_pricing
    }

    /// Classifies this seat: `availability_status` first, then the first
    /// traveler pricing entry's status, defaulting to `Available` when both
    /// are absent or unrecognized.
    pub fn status(&self) -> SeatStatus {
        if let Some(status) = self.availability_status.as_deref().and_then(SeatStatus::from_code) {
            return status;
        }
        self.traveler_pricing
            .first()
            .and_then(|pricing| pricing.seat_availability_status())
            .and_then(SeatStatus::from_code)
            .unwrap_or(SeatStatus::Available)
    }

    /// Exit classification is independent of availability; exit styling takes
    /// precedence in rendered cells while `status()` is unchanged.
    pub fn is_exit_row(&self) -> bool {
        self.characteristics.iter().any(SeatCharacteristic::is_exit)
    }

    /// Printed row number parsed from the leading digits of the seat number
    /// (`"14C"` → 14). Distinct from the coordinate row offset.
    pub fn row_number(&self) -> Option<u32> {
        let captures = row_prefix_regex().captures(&self.number)?;
        captures.get(1)?.as_str().parse().ok()
    }

    /// Seat letter: the first alphabetic character after the row digits.
    pub fn letter(&self) -> Option<char> {
        self.number.chars().find(|ch| ch.is_ascii_alphabetic())
    }
}

fn row_prefix_regex() -> &'static Regex {
    static ROW_PREFIX: OnceLock<Regex> = OnceLock::new();
    ROW_PREFIX.get_or_init(|| {
        // The pattern is a literal; it cannot fail to compile.
        Regex::new(r"^\s*(\d+)").expect("row prefix regex")
    })
}

fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coordinates_from_value))
}

fn coordinates_from_value(value: &serde_json::Value) -> Option<Coordinates> {
    let x = value.get("x")?.as_i64()?;
    let y = value.get("y")?.as_i64()?;
    Some(Coordinates::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

fn lenient_characteristics<'de, D>(deserializer: D) -> Result<Vec<SeatCharacteristic>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items.iter().filter_map(characteristic_from_value).collect())
}

fn characteristic_from_value(value: &serde_json::Value) -> Option<SeatCharacteristic> {
    match value {
        serde_json::Value::String(code) => Some(SeatCharacteristic::from_code(code.clone())),
        serde_json::Value::Object(fields) => {
            let text = |key: &str| fields.get(key).and_then(|v| v.as_str()).map(str::to_owned);
            let characteristic =
                SeatCharacteristic::new(text("code"), text("category"), text("description"));
            if characteristic.code.is_none()
                && characteristic.category.is_none()
                && characteristic.description.is_none()
            {
                None
            } else {
                Some(characteristic)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{SeatCharacteristic, SeatRecord, SeatStatus, TravelerPricing};

    #[test]
    fn status_prefers_availability_status_over_traveler_pricing() {
        let seat = SeatRecord::new("14C")
            .with_status("BLOCKED")
            .with_traveler_pricing(TravelerPricing::with_status("AVAILABLE"));
        assert_eq!(seat.status(), SeatStatus::Blocked);
    }

    #[test]
    fn status_falls_back_to_first_traveler_pricing_entry() {
        let seat =
            SeatRecord::new("14C").with_traveler_pricing(TravelerPricing::with_status("occupied"));
        assert_eq!(seat.status(), SeatStatus::Occupied);
    }

    #[test]
    fn status_defaults_to_available_without_any_source() {
        assert_eq!(SeatRecord::new("14C").status(), SeatStatus::Available);
    }

    #[test]
    fn status_defaults_to_available_for_unrecognized_codes() {
        let seat = SeatRecord::new("14C").with_status("ON_REQUEST");
        assert_eq!(seat.status(), SeatStatus::Available);
    }

    #[test]
    fn exit_row_matches_code_category_and_description() {
        let by_code = SeatRecord::new("11A").with_characteristic(SeatCharacteristic::from_code("E"));
        assert!(by_code.is_exit_row());

        let by_category = SeatRecord::new("11B").with_characteristic(SeatCharacteristic::new(
            None,
            Some("EXIT_ROW".to_owned()),
            None,
        ));
        assert!(by_category.is_exit_row());

        let by_description = SeatRecord::new("11C").with_characteristic(SeatCharacteristic::new(
            Some("CH".to_owned()),
            None,
            Some("Emergency Exit seat".to_owned()),
        ));
        assert!(by_description.is_exit_row());

        let plain = SeatRecord::new("11D").with_characteristic(SeatCharacteristic::from_code("W"));
        assert!(!plain.is_exit_row());
    }

    #[test]
    fn exit_does_not_change_underlying_status() {
        let seat = SeatRecord::new("11A")
            .with_status("OCCUPIED")
            .with_characteristic(SeatCharacteristic::new(None, Some("EXIT_ROW".to_owned()), None));
        assert!(seat.is_exit_row());
        assert_eq!(seat.status(), SeatStatus::Occupied);
    }

    #[test]
    fn row_number_and_letter_parse_from_seat_number() {
        let seat = SeatRecord::new("14C");
        assert_eq!(seat.row_number(), Some(14));
        assert_eq!(seat.letter(), Some('C'));

        assert_eq!(SeatRecord::new("7A").row_number(), Some(7));
        assert_eq!(SeatRecord::new("??").row_number(), None);
        assert_eq!(SeatRecord::new("??").letter(), None);
    }

    #[test]
    fn deserializes_upstream_camel_case_shape() {
        let seat: SeatRecord = serde_json::from_value(serde_json::json!({
            "number": "10A",
            "cabin": "M",
            "coordinates": { "x": 0, "y": 0 },
            "availabilityStatus": "AVAILABLE",
            "characteristics": [
                "W",
                { "code": "E", "category": "EXIT_ROW", "description": "Exit row seat" }
            ],
            "travelerPricing": [
                { "seatAvailabilityStatus": "AVAILABLE", "price": { "total": "25.00", "currency": "EUR" } }
            ]
        }))
        .expect("seat");

        assert_eq!(seat.number(), "10A");
        assert_eq!(seat.coordinates().map(|c| (c.x(), c.y())), Some((0, 0)));
        assert_eq!(seat.characteristics().len(), 2);
        assert!(seat.is_exit_row());
        assert_eq!(seat.traveler_pricing()[0].price().and_then(|p| p.total()), Some("25.00"));
    }

    #[test]
    fn malformed_coordinates_degrade_to_none() {
        let seat: SeatRecord = serde_json::from_value(serde_json::json!({
            "number": "10A",
            "coordinates": { "x": "zero", "y": 0 }
        }))
        .expect("seat");
        assert_eq!(seat.coordinates(), None);

        let seat: SeatRecord = serde_json::from_value(serde_json::json!({
            "number": "10B",
            "coordinates": null
        }))
        .expect("seat");
        assert_eq!(seat.coordinates(), None);
    }
}
