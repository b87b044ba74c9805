// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::commands::{command_definitions, route_command};
use super::context::BotContext;
use super::events::handle_member_add;
use super::interactions::route_interaction;
use super::state::Stores;
use super::utils::authorization::{AuthorizationPolicy, NamedStewardPolicy};
use super::utils::responder::InteractionResponder;
use crate::config::ConfigDocument;
use miette::IntoDiagnostic;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::interval;
use twilight_cache_inmemory::{DefaultInMemoryCache, ResourceType};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt};
use twilight_http::client::Client;
use twilight_model::application::interaction::InteractionData;
use twilight_model::gateway::event::Event;
use twilight_model::gateway::payload::incoming::InteractionCreate;

const HEARTBEAT_LOG_INTERVAL: Duration = Duration::from_secs(300);

pub fn set_up_client(config: &ConfigDocument) -> Arc<Client> {
	Arc::new(Client::new(config.discord_token.clone()))
}

pub async fn run_bot(config: Arc<ConfigDocument>, http_client: Arc<Client>, started_at: Instant) -> miette::Result<()> {
	let intents = Intents::GUILDS | Intents::GUILD_MEMBERS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;

	let mut shard = Shard::new(ShardId::ONE, config.discord_token.clone(), intents);

	let cache = Arc::new(
		DefaultInMemoryCache::builder()
			.resource_types(ResourceType::all())
			.build(),
	);

	let application_id = {
		let application_response = http_client.current_user_application().await.into_diagnostic()?;
		application_response.model().await.into_diagnostic()?.id
	};

	let command_count = {
		let interaction_client = http_client.interaction(application_id);
		let commands = command_definitions();
		interaction_client
			.set_global_commands(&commands)
			.await
			.into_diagnostic()?;
		commands.len()
	};
	tracing::info!(count = command_count, "Registered the command catalog");

	let authorization: Arc<dyn AuthorizationPolicy> = Arc::new(NamedStewardPolicy::new(config.steward_name.clone()));
	let context = Arc::new(BotContext {
		http_client: Arc::clone(&http_client),
		application_id,
		cache: Arc::clone(&cache),
		stores: Stores::default(),
		authorization,
		config,
		started_at,
	});

	tokio::spawn(run_heartbeat_log(Arc::clone(&context), command_count));

	while let Some(event) = shard.next_event(EventTypeFlags::all()).await {
		let event = match event {
			Ok(event) => event,
			Err(error) => {
				tracing::warn!(source = ?error, "error receiving event");
				continue;
			}
		};
		cache.update(&event);

		tokio::spawn(handle_event(event, Arc::clone(&context)));
	}

	Ok(())
}

async fn handle_event(event: Event, context: Arc<BotContext>) {
	let event_result = handle_event_route(event, &context).await;
	if let Err(error) = event_result {
		tracing::error!(source = ?error, "An error occurred handling a gateway event");
	}
}

async fn handle_event_route(event: Event, context: &BotContext) -> miette::Result<()> {
	match event {
		Event::InteractionCreate(interaction) => handle_interaction(&interaction, context).await?,
		Event::MemberAdd(member_add) => handle_member_add(&member_add, context).await?,
		Event::Ready(ready) => {
			tracing::info!(user = %ready.user.name, "Discord gateway is ready");
		}
		_ => (),
	}
	Ok(())
}

/// Dispatches one interaction and owns its failure boundary: when a handler errors, the
/// error is logged and the invoker is told the command failed, through the initial
/// response if the handler hadn't used it yet and a follow-up if it had.
async fn handle_interaction(interaction: &InteractionCreate, context: &BotContext) -> miette::Result<()> {
	let mut responder = InteractionResponder::new(Arc::clone(&context.http_client), context.application_id, interaction);
	let handle_result = match &interaction.data {
		Some(InteractionData::ApplicationCommand(command_data)) => {
			route_command(interaction, command_data, &mut responder, context).await
		}
		Some(InteractionData::MessageComponent(interaction_data)) => {
			route_interaction(interaction, interaction_data, &mut responder, context).await
		}
		_ => Ok(()),
	};
	if let Err(error) = handle_result {
		tracing::error!(source = ?error, "An error occurred handling an interaction");
		responder.send_failure_notice().await;
	}
	Ok(())
}

async fn run_heartbeat_log(context: Arc<BotContext>, command_count: usize) {
	let mut heartbeat_interval = interval(HEARTBEAT_LOG_INTERVAL);
	// An interval's first tick happens right away.
	heartbeat_interval.tick().await;
	loop {
		heartbeat_interval.tick().await;
		let guild_count = context.cache.stats().guilds();
		tracing::info!(commands = command_count, guilds = guild_count, "Bot heartbeat");
	}
}
