// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cabinview — terminal seat-map viewer (layout engine + TUI + MCP).

pub mod format;
pub mod layout;
pub mod mcp;
pub mod model;
pub mod query;
pub mod render;
pub mod tui;
pub mod ui;
