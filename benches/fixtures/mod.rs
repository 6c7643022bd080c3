// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use cabinview::model::{
    Deck, DeckConfiguration, SeatCharacteristic, SeatRecord, SeatmapData, TravelerPricing,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    NarrowBody,
    WideBody,
    WideBodyTwoDecks,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::NarrowBody => "narrow_body",
            Self::WideBody => "wide_body",
            Self::WideBodyTwoDecks => "wide_body_two_decks",
        }
    }
}

pub fn fixture(case: Case) -> SeatmapData {
    match case {
        // 3-3 across 30 rows, one aisle.
        Case::NarrowBody => SeatmapData::new(vec![cabin_deck("MAIN", 10, 30, &[3], 14)]),
        // 3-4-3 across 60 rows, two aisles.
        Case::WideBody => SeatmapData::new(vec![cabin_deck("MAIN", 1, 60, &[3, 8], 30)]),
        Case::WideBodyTwoDecks => SeatmapData::new(vec![
            cabin_deck("MAIN", 1, 60, &[3, 8], 30),
            cabin_deck("UPPER", 70, 20, &[2], 75),
        ]),
    }
}

/// Builds one deck with `rows` rows starting at printed row `first_row`.
/// `aisles` lists column offsets left empty; `exit_row` gets exit-row
/// characteristics. Statuses cycle deterministically from the grid position.
fn cabin_deck(
    deck_type: &str,
    first_row: u32,
    rows: u32,
    aisles: &[i32],
    exit_row: u32,
) -> Deck {
    let width = match aisles.len() {
        1 => 7,
        _ => 12,
    };
    let letters = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K'];

    let mut deck = Deck::new(deck_type).with_configuration(
        DeckConfiguration::new(first_row, first_row + rows - 1, width)
            .with_wings(exit_row.saturating_sub(2), exit_row + 2),
    );

    for row_idx in 0..rows {
        let row = first_row + row_idx;
        let mut letter_idx = 0usize;
        for col in 0..width as i32 {
            if aisles.contains(&col) {
                continue;
            }
            let letter = letters[letter_idx.min(letters.len() - 1)];
            letter_idx += 1;

            let mut seat = SeatRecord::new(format!("{row}{letter}"))
                .with_coordinates(row_idx as i32, col)
                .with_cabin("M")
                .with_status(match (row as i32 + col) % 4 {
                    0 => "OCCUPIED",
                    1 => "BLOCKED",
                    _ => "AVAILABLE",
                })
                .with_traveler_pricing(TravelerPricing::with_status("AVAILABLE"));
            if row == exit_row {
                seat = seat.with_characteristic(SeatCharacteristic::new(
                    Some("E".to_owned()),
                    Some("EXIT_ROW".to_owned()),
                    Some("Exit row seat".to_owned()),
                ));
            }
            deck = deck.with_seat(seat);
        }
    }

    deck
}
