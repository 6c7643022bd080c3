// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cabinview CLI entrypoint.
//!
//! By default this runs the interactive TUI and serves MCP over streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool
//! integrations), or `--text` to print the seat map once and exit.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tokio::sync::Mutex;

use cabinview::model::SeatmapData;
use cabinview::render::{render_seatmap_unicode, RenderOptions};

const DEFAULT_MCP_HTTP_PORT: u16 = 27461;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<seatmap.json>] [--mcp-http-port <port>]\n  {program} --demo [--mcp-http-port <port>]\n  {program} [<seatmap.json>] --mcp\n  {program} --demo --mcp\n  {program} [<seatmap.json>] --text\n  {program} --demo --text\n\nTUI mode (default) serves MCP over streamable HTTP at `http://127.0.0.1:<port>/mcp`.\n--mcp-http-port selects the port (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n\nIf seatmap.json is omitted the viewer starts empty; load data over MCP with\nseatmap.load or seatmap.load_file. Pass `-` to read JSON from stdin.\n--demo uses a built-in demo seat map and cannot be combined with a file.\n--text renders the seat map to stdout once and exits."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    demo: bool,
    text: bool,
    file: Option<String>,
    mcp_http_port: Option<u16>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--text" => {
                if options.text {
                    return Err(());
                }
                options.text = true;
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            "-" => {
                if options.file.is_some() {
                    return Err(());
                }
                options.file = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.file.is_some() {
                    return Err(());
                }
                options.file = Some(arg);
            }
        }
    }

    if options.demo && options.file.is_some() {
        return Err(());
    }

    if options.mcp && options.text {
        return Err(());
    }

    if (options.mcp || options.text) && options.mcp_http_port.is_some() {
        return Err(());
    }

    Ok(options)
}

fn load_seatmap(options: &CliOptions) -> Result<(Option<SeatmapData>, Option<String>), Box<dyn Error>> {
    if options.demo {
        return Ok((Some(cabinview::tui::demo_seatmap()), Some("demo".to_owned())));
    }
    match options.file.as_deref() {
        Some("-") => {
            let mut text = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut text)?;
            let seatmap = cabinview::format::parse_seatmap_str(&text)?;
            Ok((Some(seatmap), Some("stdin".to_owned())))
        }
        Some(file) => {
            let seatmap = cabinview::format::load_seatmap_file(file)?;
            Ok((Some(seatmap), Some(file.to_owned())))
        }
        None => Ok((None, None)),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "cabinview".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let (seatmap, source) = load_seatmap(&options)?;

        if options.text {
            println!("{}", render_seatmap_unicode(seatmap.as_ref(), &RenderOptions::full()));
            return Ok(());
        }

        if options.mcp {
            let mcp = cabinview::mcp::CabinviewMcp::new(seatmap, source);
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let ui_state = Arc::new(Mutex::new(cabinview::ui::UiState::default()));
        let mcp_http_port = options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT);

        let mcp = cabinview::mcp::CabinviewMcp::new_with_ui_state(
            seatmap.clone(),
            source.clone(),
            Some(ui_state.clone()),
        );

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", mcp_http_port)).await?;

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();
            let server_shutdown = shutdown_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service = {
                let mcp = mcp.clone();
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config)
            };

            let router = Router::new().nest_service("/mcp", mcp_service);
            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    server_shutdown.cancelled().await;
                });
                if let Err(err) = serve.await {
                    eprintln!("cabinview: MCP HTTP server error: {err}");
                }
            });

            let tui_ui_state = ui_state.clone();
            let tui_join = tokio::task::spawn_blocking(move || {
                cabinview::tui::run_with_ui_state(seatmap, source, Some(tui_ui_state))
                    .map_err(|err| err.to_string())
            })
            .await;

            shutdown_token.cancel();
            let _ = server_handle.await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(std::io::Error::new(std::io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("cabinview: {err}");
        std::process::exit(1);
    }
}
