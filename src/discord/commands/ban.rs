// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::timestamp_from_id;
use crate::discord::utils::users::interaction_user;
use miette::{bail, IntoDiagnostic};
use twilight_http::request::AuditLogReason;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::{CommandBuilder, StringBuilder};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

pub fn command_definition() -> Command {
	let user_id_option = StringBuilder::new("userid", "User ID to ban").required(true).build();
	let reason_option = StringBuilder::new("reason", "Reason for the ban").required(true).build();
	CommandBuilder::new("ban", "Ban a user from the server", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(user_id_option)
		.option(reason_option)
		.build()
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	command_data: &CommandData,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let Some(guild_id) = interaction.guild_id else {
		bail!("Ban command interaction has no guild");
	};
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let mut user_id_value: Option<&str> = None;
	let mut reason: Option<&str> = None;
	for option in &command_data.options {
		match option.name.as_str() {
			"userid" => {
				if let CommandOptionValue::String(value) = &option.value {
					user_id_value = Some(value);
				}
			}
			"reason" => {
				if let CommandOptionValue::String(value) = &option.value {
					reason = Some(value);
				}
			}
			_ => (),
		}
	}
	let (Some(user_id_value), Some(reason)) = (user_id_value, reason) else {
		bail!("Ban command interaction is missing its required options");
	};

	let user_id: Option<Id<UserMarker>> = user_id_value.parse().ok().and_then(Id::new_checked);
	let Some(user_id) = user_id else {
		send_failure(responder, format!("{} isn't a valid user ID", user_id_value)).await?;
		return Ok(());
	};

	let target_user = match context.http_client.user(user_id).await {
		Ok(response) => match response.model().await {
			Ok(user) => user,
			Err(error) => {
				send_failure(responder, error).await?;
				return Ok(());
			}
		},
		Err(error) => {
			send_failure(responder, error).await?;
			return Ok(());
		}
	};

	let moderator = interaction_user(interaction)?;
	let audit_reason = format!("{} - Banned by {}", reason, moderator.name);
	if let Err(error) = context
		.http_client
		.create_ban(guild_id, user_id)
		.reason(&audit_reason)
		.await
	{
		send_failure(responder, error).await?;
		return Ok(());
	}

	let embed = EmbedBuilder::new()
		.color(0xff0000)
		.title("User Banned")
		.description(format!("Successfully banned {}", target_user.name))
		.field(EmbedFieldBuilder::new("Reason", reason))
		.field(EmbedFieldBuilder::new("Moderator", &moderator.name))
		.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?)
		.validate()
		.into_diagnostic()?
		.build();
	let response = InteractionResponseDataBuilder::new().embeds([embed]).build();
	responder.send(response).await
}

async fn send_failure(
	responder: &mut InteractionResponder,
	detail: impl std::fmt::Display,
) -> miette::Result<()> {
	let response = InteractionResponseDataBuilder::new()
		.content(format!("Failed to ban user: {}", detail))
		.flags(MessageFlags::EPHEMERAL)
		.build();
	responder.send(response).await
}
