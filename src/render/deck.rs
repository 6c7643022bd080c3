// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deck grid rendering.
//!
//! Rows outer, columns inner over the full indexed column range. Aisle
//! columns render as a wider fixed gap, holes stay blank, and each seat cell
//! is the seat letter, case/glyph-coded by availability (`A` available, `a`
//! occupied, `#` blocked). Printed row numbers sit in both gutters; wing rows
//! carry the `≡` marker.

use std::fmt;

use crate::layout::{layout_deck, DeckLayout, DeckLayoutError};
use crate::model::{DeckConfiguration, SeatRecord, SeatStatus};
use crate::query::{availability_summary, exit_row_numbers};

use super::text::canvas_to_string_trimmed;
use super::{
    AnnotatedRender, Canvas, CanvasError, RenderOptions, SeatSpanIndex, BLOCKED_GLYPH,
    UNKNOWN_LETTER_GLYPH, WING_MARKER,
};

const CELL_WIDTH: usize = 2;
const AISLE_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckRenderError {
    Layout(DeckLayoutError),
    Canvas(CanvasError),
}

impl fmt::Display for DeckRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "deck layout failed: {err}"),
            Self::Canvas(err) => write!(f, "deck canvas write failed: {err}"),
        }
    }
}

impl std::error::Error for DeckRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Canvas(err) => Some(err),
        }
    }
}

pub fn render_deck_unicode(
    seats: &[SeatRecord],
    config: Option<&DeckConfiguration>,
    options: &RenderOptions,
) -> Result<String, DeckRenderError> {
    render_deck_unicode_annotated(seats, config, options).map(|annotated| annotated.text)
}

pub fn render_deck_unicode_annotated(
    seats: &[SeatRecord],
    config: Option<&DeckConfiguration>,
    options: &RenderOptions,
) -> Result<AnnotatedRender, DeckRenderError> {
    let layout = layout_deck(seats, config).map_err(DeckRenderError::Layout)?;
    render_layout_annotated(&layout, options)
}

pub(crate) fn render_layout_annotated(
    layout: &DeckLayout<'_>,
    options: &RenderOptions,
) -> Result<AnnotatedRender, DeckRenderError> {
    let label_width = row_label_width(layout);
    let left_margin = 1 + 1 + label_width + 1;

    // Column x-positions over the full indexed range; aisles are wider.
    let mut col_x = Vec::with_capacity(layout.columns().count());
    let mut x = left_margin;
    for col in layout.columns() {
        col_x.push(x);
        x += if layout.is_aisle(col) { AISLE_WIDTH } else { CELL_WIDTH };
    }
    let cells_end = x;
    let right_label_x = cells_end + 1;
    let wing_x = right_label_x + label_width + 1;

    let mut canvas =
        Canvas::new(wing_x + 1, layout.row_count()).map_err(DeckRenderError::Canvas)?;
    let mut seat_index = SeatSpanIndex::new();

    for (row_idx, &row_offset) in layout.row_offsets().iter().enumerate() {
        let label = match layout.printed_row(row_idx) {
            Some(row) => format!("{row:>label_width$}"),
            None => format!("{UNKNOWN_LETTER_GLYPH:>label_width$}"),
        };
        canvas.put_str(2, row_idx, &label).map_err(DeckRenderError::Canvas)?;
        canvas.put_str(right_label_x, row_idx, &label).map_err(DeckRenderError::Canvas)?;

        if layout.row_has_wing(row_idx) {
            canvas.set(0, row_idx, WING_MARKER).map_err(DeckRenderError::Canvas)?;
            canvas.set(wing_x, row_idx, WING_MARKER).map_err(DeckRenderError::Canvas)?;
        }

        for (col_idx, col) in layout.columns().enumerate() {
            let Some(seat) = layout.seat_at(row_offset, col) else {
                // Aisle gaps and holes both stay blank; the aisle is simply
                // wider and consistent across all rows.
                continue;
            };
            let cell_x = col_x[col_idx];
            canvas.set(cell_x, row_idx, seat_glyph(seat)).map_err(DeckRenderError::Canvas)?;
            seat_index
                .entry(seat.number().to_owned())
                .or_default()
                .push((row_idx, cell_x, cell_x));
        }
    }

    let mut text = canvas_to_string_trimmed(&canvas);

    let mut footer = Vec::new();
    if options.show_legend {
        footer.push(format!(
            "A available · a occupied · {BLOCKED_GLYPH} blocked · {WING_MARKER} wing row"
        ));
        let exit_rows = exit_row_numbers(layout.seats());
        if !exit_rows.is_empty() {
            let rows: Vec<String> = exit_rows.iter().map(u32::to_string).collect();
            footer.push(format!("Exit rows: {}", rows.join(", ")));
        }
    }
    if options.show_summary {
        let summary = availability_summary(layout.seats());
        footer.push(format!(
            "Availability: {}/{} available ({}%) · {} occupied · {} blocked",
            summary.available, summary.total, summary.percentage, summary.occupied, summary.blocked
        ));
    }
    if !footer.is_empty() {
        text.push_str("\n\n");
        text.push_str(&footer.join("\n"));
    }

    Ok(AnnotatedRender { text, seat_index })
}

/// Availability is cell-coded: uppercase letter when available, lowercase
/// when occupied, `#` when blocked. Exit precedence is a styling concern and
/// lives in the TUI theme; plain text lists exit rows in the legend instead.
fn seat_glyph(seat: &SeatRecord) -> char {
    let letter = seat.letter().unwrap_or(UNKNOWN_LETTER_GLYPH);
    match seat.status() {
        SeatStatus::Available => letter.to_ascii_uppercase(),
        SeatStatus::Occupied => letter.to_ascii_lowercase(),
        SeatStatus::Blocked => BLOCKED_GLYPH,
    }
}

fn row_label_width(layout: &DeckLayout<'_>) -> usize {
    let max_digits = (0..layout.row_count())
        .filter_map(|idx| layout.printed_row(idx))
        .map(|row| row.to_string().len())
        .max()
        .unwrap_or(1);
    max_digits.max(2)
}
