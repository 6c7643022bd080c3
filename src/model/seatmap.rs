// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Deserialize;

use super::deck::Deck;
use super::seat::SeatRecord;

/// Top-level seat-map envelope: a `decks` list plus an optional flat `seats`
/// list used as a fallback when a deck carries no seats of its own.
///
/// Built once at ingestion (see `format::seatmap_json`); everything downstream
/// consumes this normalized shape and never re-probes upstream JSON paths.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeatmapData {
    seats: Vec<SeatRecord>,
    decks: Vec<Deck>,
}

impl SeatmapData {
    pub fn new(decks: Vec<Deck>) -> Self {
        Self { seats: Vec::new(), decks }
    }

    pub fn with_fallback_seats(mut self, seats: impl IntoIterator<Item = SeatRecord>) -> Self {
        self.seats.extend(seats);
        self
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn fallback_seats(&self) -> &[SeatRecord] {
        &self.seats
    }

    /// The seat list a deck's layout operates on: the deck's own seats, else
    /// the seat map's flat fallback list.
    pub fn deck_seats(&self, deck_index: usize) -> &[SeatRecord] {
        match self.decks.get(deck_index) {
            Some(deck) if !deck.seats().is_empty() => deck.seats(),
            Some(_) => &self.seats,
            None => &[],
        }
    }

    pub fn seat_count(&self) -> usize {
        (0..self.decks.len()).map(|idx| self.deck_seats(idx).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::SeatmapData;
    use crate::model::{Deck, SeatRecord};

    #[test]
    fn deck_seats_fall_back_to_flat_list_when_deck_is_empty() {
        let seatmap = SeatmapData::new(vec![Deck::new("MAIN")])
            .with_fallback_seats([SeatRecord::new("10A").with_coordinates(0, 0)]);

        assert_eq!(seatmap.deck_seats(0).len(), 1);
        assert_eq!(seatmap.deck_seats(0)[0].number(), "10A");
        assert!(seatmap.deck_seats(7).is_empty());
    }

    #[test]
    fn deck_seats_prefer_deck_level_seats() {
        let deck = Deck::new("MAIN").with_seat(SeatRecord::new("20A").with_coordinates(0, 0));
        let seatmap = SeatmapData::new(vec![deck])
            .with_fallback_seats([SeatRecord::new("10A").with_coordinates(0, 0)]);

        assert_eq!(seatmap.deck_seats(0)[0].number(), "20A");
        assert_eq!(seatmap.seat_count(), 1);
    }
}
