// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::timestamp_from_id;
use miette::IntoDiagnostic;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::CommandBuilder;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

pub fn command_definition() -> Command {
	CommandBuilder::new("stats", "Show bot statistics", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.build()
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let uptime = context.started_at.elapsed();
	let uptime_hours = uptime.as_secs() / 3600;
	let uptime_minutes = (uptime.as_secs() % 3600) / 60;

	let cache_stats = context.cache.stats();
	let guild_count = cache_stats.guilds();
	let user_count = cache_stats.users();
	let command_count = super::command_definitions().len();

	let embed = EmbedBuilder::new()
		.color(0x00ff00)
		.title("Bot Statistics")
		.field(EmbedFieldBuilder::new("Uptime", format!("{}h {}m", uptime_hours, uptime_minutes)).inline())
		.field(EmbedFieldBuilder::new("Servers", guild_count.to_string()).inline())
		.field(EmbedFieldBuilder::new("Users", user_count.to_string()).inline())
		.field(EmbedFieldBuilder::new("Commands", format!("{} Total Commands", command_count)).inline())
		.footer(EmbedFooterBuilder::new(format!(
			"Guild Steward run by {}",
			context.config.steward_name
		)))
		.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?)
		.validate()
		.into_diagnostic()?
		.build();

	let response = InteractionResponseDataBuilder::new().embeds([embed]).build();
	responder.send(response).await
}
