// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over seat lists.

pub mod availability;
pub mod seats;

pub use availability::{availability_summary, AvailabilitySummary};
pub use seats::{exit_row_numbers, find_seat, fuzzy_seat_matches};
