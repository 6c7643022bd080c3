// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of seat maps to Unicode/ASCII text.
//!
//! Renderers produce plain text output as well as a stable seat index that the
//! TUI uses for cell-accurate seat selection and status coloring.

use std::collections::BTreeMap;
use std::fmt;

pub mod deck;
pub mod seatmap;
mod text;

pub use deck::{render_deck_unicode, render_deck_unicode_annotated, DeckRenderError};
pub use seatmap::{render_seatmap_unicode, NO_DATA_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub show_legend: bool,
    pub show_summary: bool,
}

impl RenderOptions {
    pub fn full() -> Self {
        Self { show_legend: true, show_summary: true }
    }
}

/// A contiguous span of cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive,
/// relative to the returned rendered text lines.
pub type LineSpan = (usize, usize, usize);

/// Mapping from seat numbers to the spans occupied by that seat's cell.
pub type SeatSpanIndex = BTreeMap<String, Vec<LineSpan>>;

/// Render output plus an index suitable for stable, cell-accurate UI styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRender {
    pub text: String,
    pub seat_index: SeatSpanIndex,
}

/// Gutter marker drawn on wing rows.
pub const WING_MARKER: char = '≡';
/// Cell glyph for a blocked seat.
pub const BLOCKED_GLYPH: char = '#';
/// Cell glyph for a seat whose number carries no letter.
pub const UNKNOWN_LETTER_GLYPH: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area {width}x{height} overflows")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "canvas write at ({x}, {y}) is outside {width}x{height}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

/// A fixed-size, bounds-checked character grid. Writes are last-writer-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len =
            width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![' '; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.cells[y * self.width + x] = ch;
        Ok(())
    }

    /// Writes `text` left-to-right starting at `(x, y)`.
    pub fn put_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        for (offset, ch) in text.chars().enumerate() {
            self.set(x + offset, y, ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError};

    #[test]
    fn canvas_is_bounds_checked() {
        let mut canvas = Canvas::new(2, 1).expect("canvas");
        canvas.set(1, 0, 'A').expect("set");
        assert_eq!(canvas.get(1, 0), Some('A'));
        assert_eq!(canvas.get(2, 0), None);
        assert_eq!(
            canvas.set(0, 1, 'B'),
            Err(CanvasError::OutOfBounds { x: 0, y: 1, width: 2, height: 1 })
        );
    }

    #[test]
    fn put_str_writes_consecutive_cells() {
        let mut canvas = Canvas::new(4, 1).expect("canvas");
        canvas.put_str(1, 0, "ab").expect("put_str");
        assert_eq!(canvas.get(1, 0), Some('a'));
        assert_eq!(canvas.get(2, 0), Some('b'));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(usize::MAX, 2),
            Err(CanvasError::AreaOverflow { .. })
        ));
    }
}
