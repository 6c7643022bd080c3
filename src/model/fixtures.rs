// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::deck::{Deck, DeckConfiguration};
use super::seat::{SeatCharacteristic, SeatRecord};
use super::seatmap::SeatmapData;

/// A 3-row, 3-3 narrow-body deck: printed rows 10–12, column offsets 0–6 with
/// the aisle at offset 3, wings over row 11. Row 12 is an exit row.
pub(crate) fn deck_three_rows() -> Deck {
    let mut deck =
        Deck::new("MAIN").with_configuration(DeckConfiguration::new(10, 12, 7).with_wings(11, 11));

    for (row_idx, row) in [10u32, 11, 12].into_iter().enumerate() {
        for (col_idx, letter) in ['A', 'B', 'C', 'D', 'E', 'F'].into_iter().enumerate() {
            // Offsets 0..=2 sit left of the aisle (offset 3), 4..=6 right.
            let y = if col_idx < 3 { col_idx } else { col_idx + 1 } as i32;
            let mut seat = SeatRecord::new(format!("{row}{letter}"))
                .with_coordinates(row_idx as i32, y)
                .with_cabin("M")
                .with_status(match (row, letter) {
                    (10, 'B') => "OCCUPIED",
                    (10, 'C') => "BLOCKED",
                    (11, 'E') => "OCCUPIED",
                    _ => "AVAILABLE",
                });
            if row == 12 {
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

pub(crate) fn seatmap_three_rows() -> SeatmapData {
    SeatmapData::new(vec![deck_three_rows()])
}
