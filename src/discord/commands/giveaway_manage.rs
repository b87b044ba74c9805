// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::timestamp_from_id;
use miette::{bail, IntoDiagnostic};
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::{CommandBuilder, StringBuilder};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

pub fn command_definition() -> Command {
	let action_option = StringBuilder::new("action", "What to do with the running giveaways")
		.required(true)
		.choices([("list", "list"), ("end", "end"), ("reroll", "reroll")])
		.build();
	CommandBuilder::new("giveaway-manage", "Manage running giveaways", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(action_option)
		.build()
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	command_data: &CommandData,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let mut action: Option<&str> = None;
	for option in &command_data.options {
		if option.name == "action" {
			if let CommandOptionValue::String(value) = &option.value {
				action = Some(value);
			}
		}
	}
	let Some(action) = action else {
		bail!("Giveaway management interaction is missing its action");
	};

	match action {
		"list" => {
			let giveaways = context.stores.giveaways.active().await;
			if giveaways.is_empty() {
				let response = InteractionResponseDataBuilder::new()
					.content("There are no giveaways running right now.")
					.flags(MessageFlags::EPHEMERAL)
					.build();
				responder.send(response).await?;
				return Ok(());
			}

			let mut embed = EmbedBuilder::new().color(0xff6b6b).title("Running Giveaways");
			for giveaway in giveaways.iter().take(25) {
				let summary = format!(
					"{} winner(s), {} entrant(s), ends <t:{}:R>",
					giveaway.winner_count,
					giveaway.entrants.len(),
					giveaway.end_time.timestamp()
				);
				embed = embed.field(EmbedFieldBuilder::new(&giveaway.prize, summary));
			}
			let embed = embed
				.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?)
				.validate()
				.into_diagnostic()?
				.build();
			let response = InteractionResponseDataBuilder::new().embeds([embed]).build();
			responder.send(response).await
		}
		"end" | "reroll" => {
			let response = InteractionResponseDataBuilder::new()
				.content(
					"Giveaways can't be ended or rerolled from here yet; they stay open until the bot restarts.",
				)
				.flags(MessageFlags::EPHEMERAL)
				.build();
			responder.send(response).await
		}
		_ => bail!("Giveaway management interaction has unknown action {}", action),
	}
}
