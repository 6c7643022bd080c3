// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core seat-map data model.
//!
//! Seat maps contain decks; decks contain seat records with grid coordinates,
//! availability, and characteristics. All of it is received whole from
//! upstream and read-only for the duration of a render.

pub mod deck;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod seat;
pub mod seatmap;

pub use deck::{Deck, DeckConfiguration};
pub use seat::{
    Coordinates, Price, SeatCharacteristic, SeatRecord, SeatStatus, TravelerPricing,
};
pub use seatmap::SeatmapData;
