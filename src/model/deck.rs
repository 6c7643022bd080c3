// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Deserialize;

use super::seat::SeatRecord;

/// Per-deck layout parameters supplied by upstream data. Read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckConfiguration {
    start_seat_row: Option<u32>,
    end_seat_row: Option<u32>,
    width: Option<u32>,
    start_wings_row: Option<u32>,
    end_wings_row: Option<u32>,
}

impl DeckConfiguration {
    pub fn new(start_seat_row: u32, end_seat_row: u32, width: u32) -> Self {
        Self {
            start_seat_row: Some(start_seat_row),
            end_seat_row: Some(end_seat_row),
            width: Some(width),
            start_wings_row: None,
            end_wings_row: None,
        }
    }

    pub fn with_wings(mut self, start_wings_row: u32, end_wings_row: u32) -> Self {
        self.start_wings_row = Some(start_wings_row);
        self.end_wings_row = Some(end_wings_row);
        self
    }

    pub fn start_seat_row(&self) -> Option<u32> {
        self.start_seat_row
    }

    pub fn end_seat_row(&self) -> Option<u32> {
        self.end_seat_row
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn start_wings_row(&self) -> Option<u32> {
        self.start_wings_row
    }

    pub fn end_wings_row(&self) -> Option<u32> {
        self.end_wings_row
    }

    pub fn wing_rows(&self) -> Option<(u32, u32)> {
        Some((self.start_wings_row?, self.end_wings_row?))
    }
}

/// One seating level of an aircraft, with its own row/column grid.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Deck {
    deck_type: Option<String>,
    deck_configuration: Option<DeckConfiguration>,
    seats: Vec<SeatRecord>,
}

impl Deck {
    pub fn new(deck_type: impl Into<String>) -> Self {
        Self { deck_type: Some(deck_type.into()), ..Self::default() }
    }

    pub fn with_configuration(mut self, configuration: DeckConfiguration) -> Self {
        self.deck_configuration = Some(configuration);
        self
    }

    pub fn with_seat(mut self, seat: SeatRecord) -> Self {
        self.seats.push(seat);
        self
    }

    pub fn with_seats(mut self, seats: impl IntoIterator<Item = SeatRecord>) -> Self {
        self.seats.extend(seats);
        self
    }

    pub fn deck_type(&self) -> Option<&str> {
        self.deck_type.as_deref()
    }

    pub fn deck_configuration(&self) -> Option<&DeckConfiguration> {
        self.deck_configuration.as_ref()
    }

    pub fn seats(&self) -> &[SeatRecord] {
        &self.seats
    }
}

#[cfg(test)]
mod tests {
    use super::{Deck, DeckConfiguration};

    #[test]
    fn configuration_wing_rows_require_both_bounds() {
        let config = DeckConfiguration::new(10, 12, 6);
        assert_eq!(config.wing_rows(), None);
        assert_eq!(config.with_wings(11, 11).wing_rows(), Some((11, 11)));
    }

    #[test]
    fn deserializes_upstream_deck_shape() {
        let deck: Deck = serde_json::from_value(serde_json::json!({
            "deckType": "MAIN",
            "deckConfiguration": {
                "startSeatRow": 10,
                "endSeatRow": 12,
                "width": 6,
                "startWingsRow": 11,
                "endWingsRow": 12
            },
            "seats": [
                { "number": "10A", "coordinates": { "x": 0, "y": 0 } }
            ]
        }))
        .expect("deck");

        assert_eq!(deck.deck_type(), Some("MAIN"));
        let config = deck.deck_configuration().expect("configuration");
        assert_eq!(config.start_seat_row(), Some(10));
        assert_eq!(config.wing_rows(), Some((11, 12)));
        assert_eq!(deck.seats().len(), 1);
    }
}
