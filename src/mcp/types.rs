// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What the human viewer is currently looking at, attached to read responses
/// so agents can anchor their answers to the visible deck and seat.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadContext {
    pub active_deck: Option<u64>,
    pub selected_seat: Option<String>,
    pub ui_rev: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeatmapStat {
    pub source: Option<String>,
    pub decks: u64,
    pub seats: u64,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SeatmapLoadParams {
    /// Seat map JSON, either bare `{"decks": [...]}` or one of the wrapped
    /// upstream envelopes.
    pub json: String,
    /// Label reported back by `seatmap.stat`, e.g. a file name or route.
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SeatmapLoadFileParams {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeatmapLoadResponse {
    pub stat: SeatmapStat,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeatmapStatResponse {
    pub stat: SeatmapStat,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeckSummary {
    pub deck_index: u64,
    pub deck_type: Option<String>,
    pub seats: u64,
    pub rows: u64,
    pub start_seat_row: Option<u32>,
    pub end_seat_row: Option<u32>,
    pub start_wings_row: Option<u32>,
    pub end_wings_row: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeckListResponse {
    pub decks: Vec<DeckSummary>,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeckRenderTextParams {
    /// Zero-based deck index; defaults to the first deck.
    pub deck_index: Option<u64>,
    pub legend: Option<bool>,
    pub summary: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeckRenderTextResponse {
    pub text: String,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeckAvailabilityParams {
    pub deck_index: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpAvailability {
    pub total: u64,
    pub available: u64,
    pub occupied: u64,
    pub blocked: u64,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeckAvailabilityResponse {
    pub availability: McpAvailability,
    pub exit_rows: Vec<u32>,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SeatReadParams {
    pub number: String,
    /// Zero-based deck index; all decks are searched when omitted.
    pub deck_index: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpCoordinates {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpCharacteristic {
    pub code: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpPrice {
    pub total: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpSeat {
    pub number: String,
    pub deck_index: u64,
    pub cabin: Option<String>,
    pub status: String,
    pub exit_row: bool,
    pub coordinates: Option<McpCoordinates>,
    pub characteristics: Vec<McpCharacteristic>,
    pub price: Option<McpPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeatReadResponse {
    pub seat: McpSeat,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ViewReadStateResponse {
    pub context: ReadContext,
}
