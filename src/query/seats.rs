// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::SeatRecord;

/// Looks up a seat by number, case-insensitively.
pub fn find_seat<'a>(seats: &'a [SeatRecord], number: &str) -> Option<&'a SeatRecord> {
    let number = number.trim();
    seats.iter().find(|seat| seat.number().eq_ignore_ascii_case(number))
}

/// Distinct printed row numbers that contain at least one exit-row seat,
/// ascending.
pub fn exit_row_numbers(seats: &[SeatRecord]) -> Vec<u32> {
    seats
        .iter()
        .filter(|seat| seat.is_exit_row())
        .filter_map(SeatRecord::row_number)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fuzzy-matches seat numbers against a needle, best first. Exact and prefix
/// matches outrank pure similarity; zero-affinity seats are omitted.
pub fn fuzzy_seat_matches<'a>(seats: &'a [SeatRecord], needle: &str) -> Vec<(&'a SeatRecord, i64)> {
    let needle = needle.trim().to_ascii_uppercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&SeatRecord, i64)> = seats
        .iter()
        .filter_map(|seat| {
            let haystack = seat.number().to_ascii_uppercase();
            fuzzy_score(&needle, &haystack).map(|score| (seat, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.number().cmp(b.0.number())));
    scored
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64;

    if haystack == needle {
        score += 100_000;
    } else if haystack.starts_with(needle) {
        score += 10_000;
    } else if haystack.contains(needle) {
        score += 2_000;
    }

    if score == 0 {
        None
    } else {
        Some(score)
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_row_numbers, find_seat, fuzzy_seat_matches};
    use crate::model::fixtures::deck_three_rows;
    use crate::model::{SeatCharacteristic, SeatRecord};

    #[test]
    fn find_seat_is_case_insensitive() {
        let deck = deck_three_rows();
        assert_eq!(find_seat(deck.seats(), "11c").map(|seat| seat.number()), Some("11C"));
        assert_eq!(find_seat(deck.seats(), " 11C "), find_seat(deck.seats(), "11C"));
        assert!(find_seat(deck.seats(), "99Z").is_none());
    }

    #[test]
    fn exit_row_numbers_are_distinct_and_sorted() {
        let mut seats = deck_three_rows().seats().to_vec();
        seats.push(
            SeatRecord::new("8A")
                .with_coordinates(5, 0)
                .with_characteristic(SeatCharacteristic::from_code("EXIT")),
        );
        assert_eq!(exit_row_numbers(&seats), vec![8, 12]);
    }

    #[test]
    fn fuzzy_matches_rank_exact_before_prefix_before_similar() {
        let seats = vec![
            SeatRecord::new("11A"),
            SeatRecord::new("11B"),
            SeatRecord::new("1A"),
        ];
        let matches = fuzzy_seat_matches(&seats, "11a");
        assert_eq!(matches.first().map(|(seat, _)| seat.number()), Some("11A"));

        let matches = fuzzy_seat_matches(&seats, "11");
        assert!(matches.len() >= 2);
        assert!(matches[0].0.number().starts_with("11"));
    }

    #[test]
    fn empty_needle_matches_nothing() {
        let seats = vec![SeatRecord::new("11A")];
        assert!(fuzzy_seat_matches(&seats, "  ").is_empty());
    }
}
