// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::format::parse_seatmap_str;
use crate::layout::layout_deck;
use crate::model::{Deck, SeatRecord, SeatmapData};
use crate::query::{availability_summary, exit_row_numbers, find_seat, fuzzy_seat_matches};
use crate::render::{render_deck_unicode, RenderOptions};
use crate::ui::UiState;

use super::types::*;

const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Default)]
struct McpState {
    seatmap: Option<SeatmapData>,
    source: Option<String>,
}

#[derive(Clone)]
pub struct CabinviewMcp {
    state: Arc<Mutex<McpState>>,
    ui_state: Option<Arc<Mutex<UiState>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CabinviewMcp {
    pub fn new(seatmap: Option<SeatmapData>, source: Option<String>) -> Self {
        Self::new_with_ui_state(seatmap, source, None)
    }

    pub fn new_with_ui_state(
        seatmap: Option<SeatmapData>,
        source: Option<String>,
        ui_state: Option<Arc<Mutex<UiState>>>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(McpState { seatmap, source })),
            ui_state,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    async fn read_context(&self) -> ReadContext {
        let mut context = ReadContext { active_deck: None, selected_seat: None, ui_rev: None };
        if let Some(ui_state) = self.ui_state.as_ref() {
            let snapshot = ui_state.lock().await.clone();
            context.active_deck = snapshot.active_deck().map(|deck| deck as u64);
            context.selected_seat = snapshot.selected_seat().map(str::to_owned);
            context.ui_rev = Some(snapshot.rev());
        }
        context
    }

    /// Replace the loaded seat map with one parsed from JSON text; accepts the
    /// bare `{"decks": [...]}` shape and the wrapped upstream envelopes.
    #[tool(name = "seatmap.load")]
    async fn seatmap_load(
        &self,
        params: Parameters<SeatmapLoadParams>,
    ) -> Result<Json<SeatmapLoadResponse>, ErrorData> {
        let SeatmapLoadParams { json, source } = params.0;
        let seatmap = parse_seatmap_str(&json)
            .map_err(|err| ErrorData::invalid_params(format!("cannot parse seat map: {err}"), None))?;

        let mut state = self.state.lock().await;
        state.seatmap = Some(seatmap);
        state.source = source;
        let stat = seatmap_stat(&state);
        Ok(Json(SeatmapLoadResponse { stat }))
    }

    /// Replace the loaded seat map with one read from a JSON file on disk.
    #[tool(name = "seatmap.load_file")]
    async fn seatmap_load_file(
        &self,
        params: Parameters<SeatmapLoadFileParams>,
    ) -> Result<Json<SeatmapLoadResponse>, ErrorData> {
        let path = params.0.path;
        let seatmap = crate::format::load_seatmap_file(&path).map_err(|err| {
            ErrorData::invalid_params(
                format!("cannot load seat map: {err}"),
                Some(serde_json::json!({ "path": path.clone() })),
            )
        })?;

        let mut state = self.state.lock().await;
        state.seatmap = Some(seatmap);
        state.source = Some(path);
        let stat = seatmap_stat(&state);
        Ok(Json(SeatmapLoadResponse { stat }))
    }

    /// Summarize the loaded seat map: source label, deck and seat counts, and
    /// any data-quality warnings found during layout.
    #[tool(name = "seatmap.stat")]
    async fn seatmap_stat(&self) -> Result<Json<SeatmapStatResponse>, ErrorData> {
        let state = self.state.lock().await;
        let stat = seatmap_stat(&state);
        drop(state);
        let context = self.read_context().await;
        Ok(Json(SeatmapStatResponse { stat, context }))
    }

    /// List decks with their configured row bounds and wing placement.
    #[tool(name = "deck.list")]
    async fn deck_list(&self) -> Result<Json<DeckListResponse>, ErrorData> {
        let state = self.state.lock().await;
        let seatmap = require_seatmap(&state)?;
        let decks = seatmap
            .decks()
            .iter()
            .enumerate()
            .map(|(idx, deck)| deck_summary(seatmap, idx, deck))
            .collect();
        drop(state);
        let context = self.read_context().await;
        Ok(Json(DeckListResponse { decks, context }))
    }

    /// Render one deck as a plain-text grid, the same output as `--text` mode.
    #[tool(name = "deck.render_text")]
    async fn deck_render_text(
        &self,
        params: Parameters<DeckRenderTextParams>,
    ) -> Result<Json<DeckRenderTextResponse>, ErrorData> {
        let DeckRenderTextParams { deck_index, legend, summary } = params.0;
        let options = RenderOptions {
            show_legend: legend.unwrap_or(true),
            show_summary: summary.unwrap_or(true),
        };

        let state = self.state.lock().await;
        let seatmap = require_seatmap(&state)?;
        let deck_index = resolve_deck_index(seatmap, deck_index)?;
        let deck = &seatmap.decks()[deck_index];
        let text =
            render_deck_unicode(seatmap.deck_seats(deck_index), deck.deck_configuration(), &options)
                .map_err(|err| {
                    ErrorData::invalid_request(
                        format!("cannot render deck: {err}"),
                        Some(serde_json::json!({ "deck_index": deck_index as u64 })),
                    )
                })?;
        drop(state);
        let context = self.read_context().await;
        Ok(Json(DeckRenderTextResponse { text, context }))
    }

    /// Availability counts for one deck. Counts cover every seat record on the
    /// deck, including seats without grid coordinates.
    #[tool(name = "deck.availability")]
    async fn deck_availability(
        &self,
        params: Parameters<DeckAvailabilityParams>,
    ) -> Result<Json<DeckAvailabilityResponse>, ErrorData> {
        let state = self.state.lock().await;
        let seatmap = require_seatmap(&state)?;
        let deck_index = resolve_deck_index(seatmap, params.0.deck_index)?;
        let seats = seatmap.deck_seats(deck_index);
        let summary = availability_summary(seats);
        let availability = McpAvailability {
            total: summary.total as u64,
            available: summary.available as u64,
            occupied: summary.occupied as u64,
            blocked: summary.blocked as u64,
            percentage: summary.percentage,
        };
        let exit_rows = exit_row_numbers(seats);
        drop(state);
        let context = self.read_context().await;
        Ok(Json(DeckAvailabilityResponse { availability, exit_rows, context }))
    }

    /// Read one seat by number (case-insensitive). Unknown numbers fail with
    /// fuzzy suggestions in the error data.
    #[tool(name = "seat.read")]
    async fn seat_read(
        &self,
        params: Parameters<SeatReadParams>,
    ) -> Result<Json<SeatReadResponse>, ErrorData> {
        let SeatReadParams { number, deck_index } = params.0;

        let state = self.state.lock().await;
        let seatmap = require_seatmap(&state)?;
        let deck_range = match deck_index {
            Some(_) => {
                let idx = resolve_deck_index(seatmap, deck_index)?;
                idx..idx + 1
            }
            None => 0..seatmap.decks().len(),
        };

        let mut found = None;
        for idx in deck_range.clone() {
            if let Some(seat) = find_seat(seatmap.deck_seats(idx), &number) {
                found = Some((idx, seat));
                break;
            }
        }

        let Some((idx, seat)) = found else {
            let mut suggestions: Vec<String> = Vec::new();
            for idx in deck_range {
                for (seat, _) in fuzzy_seat_matches(seatmap.deck_seats(idx), &number) {
                    if !suggestions.iter().any(|existing| existing == seat.number()) {
                        suggestions.push(seat.number().to_owned());
                    }
                }
            }
            suggestions.truncate(SUGGESTION_LIMIT);
            return Err(ErrorData::resource_not_found(
                "seat not found",
                Some(serde_json::json!({ "number": number, "suggestions": suggestions })),
            ));
        };

        let seat = mcp_seat(idx, seat);
        drop(state);
        let context = self.read_context().await;
        Ok(Json(SeatReadResponse { seat, context }))
    }

    /// Read what the human viewer is looking at (active deck, selected seat).
    #[tool(name = "view.read_state")]
    async fn view_read_state(&self) -> Result<Json<ViewReadStateResponse>, ErrorData> {
        let context = self.read_context().await;
        Ok(Json(ViewReadStateResponse { context }))
    }
}

fn require_seatmap(state: &McpState) -> Result<&SeatmapData, ErrorData> {
    state.seatmap.as_ref().ok_or_else(|| {
        ErrorData::invalid_request(
            "no seat map loaded; call seatmap.load or seatmap.load_file first",
            None,
        )
    })
}

fn resolve_deck_index(
    seatmap: &SeatmapData,
    deck_index: Option<u64>,
) -> Result<usize, ErrorData> {
    let idx = deck_index.unwrap_or(0) as usize;
    if idx >= seatmap.decks().len() {
        return Err(ErrorData::resource_not_found(
            "deck not found",
            Some(serde_json::json!({
                "deck_index": idx as u64,
                "decks": seatmap.decks().len() as u64,
            })),
        ));
    }
    Ok(idx)
}

fn seatmap_stat(state: &McpState) -> SeatmapStat {
    let Some(seatmap) = state.seatmap.as_ref() else {
        return SeatmapStat {
            source: state.source.clone(),
            decks: 0,
            seats: 0,
            warnings: vec!["no seat map loaded".to_owned()],
        };
    };

    let mut warnings = Vec::new();
    for (idx, deck) in seatmap.decks().iter().enumerate() {
        match layout_deck(seatmap.deck_seats(idx), deck.deck_configuration()) {
            Ok(layout) => {
                for warning in layout.warnings() {
                    warnings.push(format!("deck {}: {warning}", idx + 1));
                }
            }
            Err(err) => warnings.push(format!("deck {}: {err}", idx + 1)),
        }
    }

    SeatmapStat {
        source: state.source.clone(),
        decks: seatmap.decks().len() as u64,
        seats: seatmap.seat_count() as u64,
        warnings,
    }
}

fn deck_summary(seatmap: &SeatmapData, idx: usize, deck: &Deck) -> DeckSummary {
    let seats = seatmap.deck_seats(idx);
    let rows = layout_deck(seats, deck.deck_configuration())
        .map(|layout| layout.row_count() as u64)
        .unwrap_or(0);
    let config = deck.deck_configuration();
    DeckSummary {
        deck_index: idx as u64,
        deck_type: deck.deck_type().map(str::to_owned),
        seats: seats.len() as u64,
        rows,
        start_seat_row: config.and_then(|config| config.start_seat_row()),
        end_seat_row: config.and_then(|config| config.end_seat_row()),
        start_wings_row: config.and_then(|config| config.start_wings_row()),
        end_wings_row: config.and_then(|config| config.end_wings_row()),
    }
}

fn mcp_seat(deck_index: usize, seat: &SeatRecord) -> McpSeat {
    McpSeat {
        number: seat.number().to_owned(),
        deck_index: deck_index as u64,
        cabin: seat.cabin().map(str::to_owned),
        status: seat.status().label().to_owned(),
        exit_row: seat.is_exit_row(),
        coordinates: seat
            .coordinates()
            .map(|coordinates| McpCoordinates { x: coordinates.x(), y: coordinates.y() }),
        characteristics: seat
            .characteristics()
            .iter()
            .map(|characteristic| McpCharacteristic {
                code: characteristic.code().map(str::to_owned),
                category: characteristic.category().map(str::to_owned),
                description: characteristic.description().map(str::to_owned),
            })
            .collect(),
        price: seat
            .traveler_pricing()
            .first()
            .and_then(|pricing| pricing.price())
            .map(|price| McpPrice {
                total: price.total().map(str::to_owned),
                currency: price.currency().map(str::to_owned),
            }),
    }
}

#[tool_handler]
impl ServerHandler for CabinviewMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Cabinview seat-map server (tools: seatmap.load, seatmap.load_file, seatmap.stat, deck.list, deck.render_text, deck.availability, seat.read, view.read_state)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
