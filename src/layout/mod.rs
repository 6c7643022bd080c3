// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deck layout: coordinate indexing, aisle detection, wing placement.

pub mod deck;

pub use deck::{layout_deck, DeckLayout, DeckLayoutError, LayoutWarning, AISLE_ROW_FRACTION};
