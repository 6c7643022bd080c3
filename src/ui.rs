// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared UI state for cross-component coordination.
//!
//! Propagates the viewer's selection (active deck, selected seat) between the
//! interactive TUI and programmatic integrations (MCP).

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    rev: u64,
    active_deck: Option<usize>,
    selected_seat: Option<String>,
}

impl UiState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn active_deck(&self) -> Option<usize> {
        self.active_deck
    }

    pub fn selected_seat(&self) -> Option<&str> {
        self.selected_seat.as_deref()
    }

    pub fn set_selection(&mut self, active_deck: Option<usize>, selected_seat: Option<String>) {
        if self.active_deck == active_deck && self.selected_seat == selected_seat {
            return;
        }
        self.active_deck = active_deck;
        self.selected_seat = selected_seat;
        self.rev = self.rev.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::UiState;

    #[test]
    fn selection_changes_bump_the_rev_once() {
        let mut state = UiState::default();
        state.set_selection(Some(0), Some("11C".to_owned()));
        assert_eq!(state.rev(), 1);
        assert_eq!(state.active_deck(), Some(0));
        assert_eq!(state.selected_seat(), Some("11C"));

        state.set_selection(Some(0), Some("11C".to_owned()));
        assert_eq!(state.rev(), 1);
    }
}
