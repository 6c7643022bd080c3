// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end: upstream JSON in, plain-text seat map out.

use cabinview::format::parse_seatmap_str;
use cabinview::render::{render_seatmap_unicode, RenderOptions, NO_DATA_TEXT};

/// The bare `{"decks": [...]}` shape for a three-row 3-3 deck with an aisle,
/// wings over row 11, and an exit row 12.
fn decks_json() -> serde_json::Value {
    let mut seats = Vec::new();
    for (x, row) in (10u32..=12).enumerate() {
        for (idx, letter) in ['A', 'B', 'C', 'D', 'E', 'F'].into_iter().enumerate() {
            let y = if idx < 3 { idx } else { idx + 1 };
            let status = match format!("{row}{letter}").as_str() {
                "10B" | "11E" => "OCCUPIED",
                "10C" => "BLOCKED",
                _ => "AVAILABLE",
            };
            let mut seat = serde_json::json!({
                "number": format!("{row}{letter}"),
                "cabin": "M",
                "coordinates": { "x": x, "y": y },
                "availabilityStatus": status,
            });
            if row == 12 {
                seat["characteristics"] = serde_json::json!([
                    { "code": "E", "category": "EXIT_ROW", "description": "Exit row seat" }
                ]);
            }
            seats.push(seat);
        }
    }

    serde_json::json!({
        "decks": [
            {
                "deckType": "MAIN",
                "deckConfiguration": {
                    "startSeatRow": 10,
                    "endSeatRow": 12,
                    "width": 7,
                    "startWingsRow": 11,
                    "endWingsRow": 11
                },
                "seats": seats
            }
        ]
    })
}

#[test]
fn renders_the_expected_grid_from_bare_json() {
    let seatmap = parse_seatmap_str(&decks_json().to_string()).expect("parse");
    let text = render_seatmap_unicode(Some(&seatmap), &RenderOptions::default());

    let expected = "\
Deck 1 (MAIN)

  10 A b #    D E F  10
≡ 11 A B C    D e F  11 ≡
  12 A B C    D E F  12";
    assert_eq!(text, expected);
}

#[test]
fn full_render_appends_legend_and_summary() {
    let seatmap = parse_seatmap_str(&decks_json().to_string()).expect("parse");
    let text = render_seatmap_unicode(Some(&seatmap), &RenderOptions::full());

    assert!(text.contains("A available · a occupied · # blocked · ≡ wing row"));
    assert!(text.contains("Exit rows: 12"));
    assert!(text.contains("Availability: 15/18 available (83%) · 2 occupied · 1 blocked"));
}

#[test]
fn wrapped_envelopes_parse_to_the_same_seatmap() {
    let bare = decks_json();
    let flat = parse_seatmap_str(&bare.to_string()).expect("bare");

    for wrapped in [
        serde_json::json!({ "seatMap": bare }),
        serde_json::json!({ "data": { "seatMap": bare } }),
        serde_json::json!({ "data": bare }),
    ] {
        let seatmap = parse_seatmap_str(&wrapped.to_string()).expect("wrapped");
        assert_eq!(seatmap, flat);
    }
}

#[test]
fn garbage_and_empty_inputs_degrade_cleanly() {
    assert!(parse_seatmap_str("not json").is_err());
    assert!(parse_seatmap_str("{\"unrelated\": true}").is_err());

    let empty = parse_seatmap_str("{\"decks\": []}").expect("empty decks");
    assert_eq!(render_seatmap_unicode(Some(&empty), &RenderOptions::default()), NO_DATA_TEXT);
    assert_eq!(render_seatmap_unicode(None, &RenderOptions::default()), NO_DATA_TEXT);
}

#[test]
fn coordinate_free_seats_render_an_empty_state_but_still_count() {
    let json = serde_json::json!({
        "decks": [
            {
                "deckType": "MAIN",
                "seats": [
                    { "number": "10A", "availabilityStatus": "AVAILABLE" },
                    { "number": "10B", "availabilityStatus": "OCCUPIED" }
                ]
            }
        ]
    });
    let seatmap = parse_seatmap_str(&json.to_string()).expect("parse");

    let text = render_seatmap_unicode(Some(&seatmap), &RenderOptions::full());
    assert!(text.contains("No seats with valid coordinates"));

    let summary = cabinview::query::availability_summary(seatmap.deck_seats(0));
    assert_eq!(summary.total, 2);
    assert_eq!(summary.available, 1);
    assert_eq!(summary.percentage, 50);
}
