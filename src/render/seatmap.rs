// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::DeckLayoutError;
use crate::model::{Deck, SeatmapData};

use super::deck::{render_deck_unicode, DeckRenderError};
use super::RenderOptions;

/// Empty state shown when there is no seat map at all.
pub const NO_DATA_TEXT: &str = "No Seat Map Data Available";

/// Renders a whole seat map, one titled section per deck.
///
/// Never fails: a missing seat map, an empty decks list, or a deck without
/// any coordinate-valid seats all render as explicit empty-state text rather
/// than errors, matching the shallow error taxonomy of the upstream viewer.
pub fn render_seatmap_unicode(seatmap: Option<&SeatmapData>, options: &RenderOptions) -> String {
    let Some(seatmap) = seatmap else {
        return NO_DATA_TEXT.to_owned();
    };
    if seatmap.decks().is_empty() {
        return NO_DATA_TEXT.to_owned();
    }

    let mut sections = Vec::with_capacity(seatmap.decks().len());
    for (idx, deck) in seatmap.decks().iter().enumerate() {
        let seats = seatmap.deck_seats(idx);
        let body = match render_deck_unicode(seats, deck.deck_configuration(), options) {
            Ok(text) => text,
            Err(DeckRenderError::Layout(DeckLayoutError::NoValidCoordinates)) => {
                "No seats with valid coordinates".to_owned()
            }
            Err(err) => format!("Seat map could not be rendered: {err}"),
        };
        sections.push(format!("{}\n\n{body}", deck_title(deck, idx)));
    }

    sections.join("\n\n")
}

fn deck_title(deck: &Deck, index: usize) -> String {
    match deck.deck_type() {
        Some(deck_type) if !deck_type.trim().is_empty() => {
            format!("Deck {} ({deck_type})", index + 1)
        }
        _ => format!("Deck {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_seatmap_unicode, NO_DATA_TEXT};
    use crate::model::fixtures::seatmap_three_rows;
    use crate::model::{Deck, SeatRecord, SeatmapData};
    use crate::render::RenderOptions;

    #[test]
    fn missing_seatmap_renders_the_no_data_state() {
        assert_eq!(render_seatmap_unicode(None, &RenderOptions::default()), NO_DATA_TEXT);
        let empty = SeatmapData::new(Vec::new());
        assert_eq!(render_seatmap_unicode(Some(&empty), &RenderOptions::default()), NO_DATA_TEXT);
    }

    #[test]
    fn renders_titled_deck_sections() {
        let seatmap = seatmap_three_rows();
        let text = render_seatmap_unicode(Some(&seatmap), &RenderOptions::full());
        assert!(text.starts_with("Deck 1 (MAIN)\n\n"));
        assert!(text.contains("≡ 11 A B C    D e F  11 ≡"));
        assert!(text.contains("Availability:"));
    }

    #[test]
    fn coordinate_free_deck_renders_the_empty_state_section() {
        let deck = Deck::new("UPPER").with_seat(SeatRecord::new("80A"));
        let seatmap = SeatmapData::new(vec![deck]);
        let text = render_seatmap_unicode(Some(&seatmap), &RenderOptions::default());
        assert_eq!(text, "Deck 1 (UPPER)\n\nNo seats with valid coordinates");
    }
}
