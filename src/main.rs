// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use guild_steward::config::parse_config;
use guild_steward::discord::{run_bot, set_up_client};
use guild_steward::web::run_server_task;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> miette::Result<()> {
	tracing_subscriber::fmt::init();

	let config = Arc::new(parse_config("config.kdl").await?);
	let started_at = Instant::now();
	let http_client = set_up_client(&config);

	tokio::spawn(run_server_task(Arc::clone(&config), started_at));

	run_bot(config, http_client, started_at).await
}
