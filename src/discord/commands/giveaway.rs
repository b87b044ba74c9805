// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::interactions::giveaway_entry::entry_button_row;
use crate::discord::state::Giveaway;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::duration::parse_duration_millis;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::{datetime_millis_from_now, timestamp_from_id};
use miette::{bail, IntoDiagnostic};
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::{CommandBuilder, IntegerBuilder, StringBuilder};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

pub fn command_definition() -> Command {
	let prize_option = StringBuilder::new("prize", "What is the prize?").required(true).build();
	let duration_option = StringBuilder::new("duration", "How long? (e.g., 1h, 30m, 1d)")
		.required(true)
		.build();
	let winners_option = IntegerBuilder::new("winners", "Number of winners (1-10)")
		.required(true)
		.min_value(1)
		.max_value(10)
		.build();
	CommandBuilder::new("giveaway", "Create a giveaway", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(prize_option)
		.option(duration_option)
		.option(winners_option)
		.build()
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	command_data: &CommandData,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let Some(guild_id) = interaction.guild_id else {
		bail!("Giveaway command interaction has no guild");
	};
	let Some(channel) = &interaction.channel else {
		bail!("Giveaway command interaction has no channel");
	};
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let mut prize: Option<&str> = None;
	let mut duration: Option<&str> = None;
	let mut winner_count: Option<i64> = None;
	for option in &command_data.options {
		match option.name.as_str() {
			"prize" => {
				if let CommandOptionValue::String(value) = &option.value {
					prize = Some(value);
				}
			}
			"duration" => {
				if let CommandOptionValue::String(value) = &option.value {
					duration = Some(value);
				}
			}
			"winners" => {
				if let CommandOptionValue::Integer(value) = option.value {
					winner_count = Some(value);
				}
			}
			_ => (),
		}
	}
	let (Some(prize), Some(duration), Some(winner_count)) = (prize, duration, winner_count) else {
		bail!("Giveaway command interaction is missing its required options");
	};

	let embed = EmbedBuilder::new()
		.color(0xff6b6b)
		.title("GIVEAWAY")
		.description(format!("**Prize:** {}", prize))
		.field(EmbedFieldBuilder::new("Duration", duration).inline())
		.field(EmbedFieldBuilder::new("Winners", winner_count.to_string()).inline())
		.field(EmbedFieldBuilder::new("How to Enter", "Click the button below!"))
		.footer(EmbedFooterBuilder::new("Good luck to all participants!"))
		.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?)
		.validate()
		.into_diagnostic()?
		.build();
	let response = InteractionResponseDataBuilder::new().embeds([embed]).build();
	responder.send(response).await?;

	// The giveaway is keyed by the announcement message so the entry button can find it.
	// The button is only attached once the record is in the store.
	let interaction_client = context.http_client.interaction(context.application_id);
	let announcement_response = interaction_client.response(&interaction.token).await.into_diagnostic()?;
	let announcement = announcement_response.model().await.into_diagnostic()?;

	let end_time = datetime_millis_from_now(parse_duration_millis(duration));
	let giveaway = Giveaway {
		prize: String::from(prize),
		duration_display: String::from(duration),
		winner_count,
		end_time,
		entrants: Vec::new(),
		channel: channel.id,
		guild: guild_id,
	};
	context.stores.giveaways.create(announcement.id, giveaway).await;

	interaction_client
		.update_response(&interaction.token)
		.components(Some(&[entry_button_row()]))
		.await
		.into_diagnostic()?;

	Ok(())
}
