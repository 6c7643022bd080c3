// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ingestion of upstream seat-map JSON.

pub mod seatmap_json;

pub use seatmap_json::{
    load_seatmap_file, parse_seatmap_str, parse_seatmap_value, SeatmapLoadError, SeatmapParseError,
};
