// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::model::{DeckConfiguration, SeatRecord};

/// A column counts as an aisle when strictly fewer than this fraction of the
/// indexed rows have a seat physically present there.
pub const AISLE_ROW_FRACTION: f64 = 0.10;

/// Single-pass layout of one deck: indexed coordinates, aisle columns, printed
/// row numbers, wing placement, and any data-quality warnings.
///
/// Derived from the seat list on every pass and never cached; seats without
/// valid coordinates are excluded before indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckLayout<'a> {
    seats: &'a [SeatRecord],
    row_offsets: Vec<i32>,
    col_min: i32,
    col_max: i32,
    aisle_cols: BTreeSet<i32>,
    grid: BTreeMap<(i32, i32), usize>,
    printed_rows: Vec<Option<u32>>,
    wing_span: Option<(usize, usize)>,
    warnings: Vec<LayoutWarning>,
}

impl<'a> DeckLayout<'a> {
    pub fn seats(&self) -> &'a [SeatRecord] {
        self.seats
    }

    /// Distinct row offsets present in the deck, ascending.
    pub fn row_offsets(&self) -> &[i32] {
        &self.row_offsets
    }

    pub fn row_count(&self) -> usize {
        self.row_offsets.len()
    }

    pub fn col_min(&self) -> i32 {
        self.col_min
    }

    pub fn col_max(&self) -> i32 {
        self.col_max
    }

    pub fn columns(&self) -> std::ops::RangeInclusive<i32> {
        self.col_min..=self.col_max
    }

    pub fn is_aisle(&self, col: i32) -> bool {
        self.aisle_cols.contains(&col)
    }

    pub fn aisle_cols(&self) -> &BTreeSet<i32> {
        &self.aisle_cols
    }

    pub fn seat_at(&self, row_offset: i32, col: i32) -> Option<&'a SeatRecord> {
        self.grid.get(&(row_offset, col)).map(|&idx| &self.seats[idx])
    }

    /// First seat of a row-offset bucket (lowest column offset).
    pub fn first_seat_in_row(&self, row_index: usize) -> Option<&'a SeatRecord> {
        let row_offset = *self.row_offsets.get(row_index)?;
        self.grid
            .range((row_offset, self.col_min)..=(row_offset, self.col_max))
            .next()
            .map(|(_, &idx)| &self.seats[idx])
    }

    /// Printed row number for a row-offset bucket, parsed from the first
    /// seat's number prefix. Authoritative over the configured arithmetic
    /// mapping; disagreements are reported in [`DeckLayout::warnings`].
    pub fn printed_row(&self, row_index: usize) -> Option<u32> {
        self.printed_rows.get(row_index).copied().flatten()
    }

    /// Inclusive row-index span covered by the wings, when configured.
    pub fn wing_span(&self) -> Option<(usize, usize)> {
        self.wing_span
    }

    pub fn row_has_wing(&self, row_index: usize) -> bool {
        matches!(self.wing_span, Some((start, end)) if row_index >= start && row_index <= end)
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckLayoutError {
    /// Zero seats carry valid integer coordinates; callers render an explicit
    /// empty state instead of an empty grid.
    NoValidCoordinates,
}

impl fmt::Display for DeckLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValidCoordinates => f.write_str("no seats with valid coordinates"),
        }
    }
}

impl std::error::Error for DeckLayoutError {}

/// Non-fatal data-quality findings collected during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutWarning {
    /// The row number parsed from seat-number prefixes disagrees with the
    /// configured `start_seat_row + row_index` arithmetic.
    RowNumberMismatch { row_index: usize, parsed: u32, arithmetic: u32 },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowNumberMismatch { row_index, parsed, arithmetic } => write!(
                f,
                "row offset {row_index}: seat numbers say row {parsed}, configured bounds say row {arithmetic}"
            ),
        }
    }
}

/// Lays out one deck's seats.
///
/// One pass builds the coordinate grid (first occupant wins on duplicate
/// coordinates), then aisle columns are detected by row-presence sparsity and
/// wing rows are mapped from configured printed-row bounds.
pub fn layout_deck<'a>(
    seats: &'a [SeatRecord],
    config: Option<&DeckConfiguration>,
) -> Result<DeckLayout<'a>, DeckLayoutError> {
    let mut grid = BTreeMap::<(i32, i32), usize>::new();
    for (idx, seat) in seats.iter().enumerate() {
        if let Some(coordinates) = seat.coordinates() {
            grid.entry((coordinates.x(), coordinates.y())).or_insert(idx);
        }
    }

    if grid.is_empty() {
        return Err(DeckLayoutError::NoValidCoordinates);
    }

    let row_offsets: Vec<i32> =
        grid.keys().map(|&(x, _)| x).collect::<BTreeSet<_>>().into_iter().collect();
    // grid is non-empty, so min/max exist.
    let col_min = grid.keys().map(|&(_, y)| y).min().expect("non-empty grid");
    let col_max = grid.keys().map(|&(_, y)| y).max().expect("non-empty grid");

    let aisle_threshold = row_offsets.len() as f64 * AISLE_ROW_FRACTION;
    let mut aisle_cols = BTreeSet::new();
    for col in col_min..=col_max {
        let present = row_offsets.iter().filter(|&&row| grid.contains_key(&(row, col))).count();
        if (present as f64) < aisle_threshold {
            aisle_cols.insert(col);
        }
    }

    let mut layout = DeckLayout {
        seats,
        row_offsets,
        col_min,
        col_max,
        aisle_cols,
        grid,
        printed_rows: Vec::new(),
        wing_span: None,
        warnings: Vec::new(),
    };

    layout.printed_rows =
        (0..layout.row_count()).map(|idx| derive_printed_row(&layout, idx)).collect();

    let start_seat_row = config.and_then(|config| config.start_seat_row());
    if let Some(start) = start_seat_row {
        for (idx, printed) in layout.printed_rows.iter().enumerate() {
            let arithmetic = start.saturating_add(idx as u32);
            if let Some(parsed) = *printed {
                if parsed != arithmetic {
                    layout.warnings.push(LayoutWarning::RowNumberMismatch {
                        row_index: idx,
                        parsed,
                        arithmetic,
                    });
                }
            }
        }
    }

    if let Some((wings_start, wings_end)) = config.and_then(|config| config.wing_rows()) {
        layout.wing_span =
            map_wing_span(&layout.printed_rows, start_seat_row, wings_start, wings_end);
    }

    Ok(layout)
}

fn derive_printed_row(layout: &DeckLayout<'_>, row_index: usize) -> Option<u32> {
    layout.first_seat_in_row(row_index).and_then(SeatRecord::row_number)
}

/// Maps configured wing row *numbers* to row-offset indices by matching parsed
/// seat-number prefixes; falls back to `start_seat_row + index` arithmetic
/// when no bucket's prefix lands inside the bounds.
fn map_wing_span(
    printed_rows: &[Option<u32>],
    start_seat_row: Option<u32>,
    wings_start: u32,
    wings_end: u32,
) -> Option<(usize, usize)> {
    let in_bounds = |row: u32| row >= wings_start && row <= wings_end;

    let matched: Vec<usize> = printed_rows
        .iter()
        .enumerate()
        .filter_map(|(idx, printed)| printed.filter(|&row| in_bounds(row)).map(|_| idx))
        .collect();
    if let (Some(&first), Some(&last)) = (matched.first(), matched.last()) {
        return Some((first, last));
    }

    let start = start_seat_row?;
    let fallback: Vec<usize> = (0..printed_rows.len())
        .filter(|&idx| in_bounds(start.saturating_add(idx as u32)))
        .collect();
    match (fallback.first(), fallback.last()) {
        (Some(&first), Some(&last)) => Some((first, last)),
        _ => None,
    }
}
