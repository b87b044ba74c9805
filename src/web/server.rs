// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigDocument;
use crate::discord::commands::command_definitions;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use miette::IntoDiagnostic;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone)]
struct LivenessState {
	started_at: Instant,
	command_count: usize,
}

/// Response body for `/ping`, shaped for external uptime monitors.
#[derive(Serialize)]
struct PingStatus {
	status: &'static str,
	uptime: u64,
	commands: String,
}

pub async fn run_server_task(config: Arc<ConfigDocument>, started_at: Instant) {
	let task_result = run_server(config, started_at).await;
	if let Err(error) = task_result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
}

async fn run_server(config: Arc<ConfigDocument>, started_at: Instant) -> miette::Result<()> {
	let bind_addr = config
		.web_bind
		.clone()
		.unwrap_or_else(|| String::from(DEFAULT_BIND_ADDR));

	let state = LivenessState {
		started_at,
		command_count: command_definitions().len(),
	};

	let app = Router::new()
		.route("/", get(running_notice))
		.route("/ping", get(ping_status))
		.with_state(state);

	tracing::info!(address = %bind_addr, "Liveness server listening");
	let listener = TcpListener::bind(&bind_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

async fn running_notice(State(state): State<LivenessState>) -> String {
	format!("Guild Steward - all {} commands running", state.command_count)
}

async fn ping_status(State(state): State<LivenessState>) -> Json<PingStatus> {
	Json(PingStatus {
		status: "online",
		uptime: state.started_at.elapsed().as_secs(),
		commands: format!("{} loaded", state.command_count),
	})
}
