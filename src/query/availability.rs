// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{SeatRecord, SeatStatus};

/// Aggregate availability over a seat list.
///
/// Classification is exhaustive: `available + occupied + blocked == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailabilitySummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub blocked: usize,
    /// `round(available / total * 100)`; `0` when `total` is `0`.
    pub percentage: u8,
}

/// Reduces a seat list to availability counts.
///
/// Operates over exactly the list it is given; seats without coordinates
/// count too, even though the grid renderer excludes them. Pass a
/// pre-filtered slice for grid-consistent totals.
pub fn availability_summary(seats: &[SeatRecord]) -> AvailabilitySummary {
    let mut summary = AvailabilitySummary { total: seats.len(), ..AvailabilitySummary::default() };

    for seat in seats {
        match seat.status() {
            SeatStatus::Available => summary.available += 1,
            SeatStatus::Occupied => summary.occupied += 1,
            SeatStatus::Blocked => summary.blocked += 1,
        }
    }

    if summary.total > 0 {
        summary.percentage =
            ((summary.available as f64 / summary.total as f64) * 100.0).round() as u8;
    }

    summary
}
