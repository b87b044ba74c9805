// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::duration::parse_duration_millis;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::{timestamp_from_id, timestamp_millis_from_now};
use crate::discord::utils::users::interaction_user;
use miette::{bail, IntoDiagnostic};
use twilight_http::request::AuditLogReason;
use twilight_mention::fmt::Mention;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::channel::message::{AllowedMentions, MessageFlags};
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::{CommandBuilder, StringBuilder, UserBuilder};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

pub fn command_definition() -> Command {
	let user_option = UserBuilder::new("user", "User to time out").required(true).build();
	let duration_option = StringBuilder::new("duration", "How long? (e.g., 1h, 30m, 1d)")
		.required(true)
		.build();
	let reason_option = StringBuilder::new("reason", "Reason for the timeout").build();
	CommandBuilder::new("timeout", "Time out a user", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(user_option)
		.option(duration_option)
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
		bail!("Timeout command interaction has no guild");
	};
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let mut user_id: Option<Id<UserMarker>> = None;
	let mut duration: Option<&str> = None;
	let mut reason: Option<&str> = None;
	for option in &command_data.options {
		match option.name.as_str() {
			"user" => {
				if let CommandOptionValue::User(value) = option.value {
					user_id = Some(value);
				}
			}
			"duration" => {
				if let CommandOptionValue::String(value) = &option.value {
					duration = Some(value);
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
	let (Some(user_id), Some(duration)) = (user_id, duration) else {
		bail!("Timeout command interaction is missing its required options");
	};

	let moderator = interaction_user(interaction)?;
	let timeout_millis = parse_duration_millis(duration);
	let timeout_end = timestamp_millis_from_now(timeout_millis).into_diagnostic()?;
	let audit_reason = match reason {
		Some(reason) => format!("{} - Timed out by {}", reason, moderator.name),
		None => format!("Timed out by {}", moderator.name),
	};

	let timeout_result = context
		.http_client
		.update_guild_member(guild_id, user_id)
		.communication_disabled_until(Some(timeout_end))
		.reason(&audit_reason)
		.await;
	if let Err(error) = timeout_result {
		let response = InteractionResponseDataBuilder::new()
			.content(format!("Failed to time out user: {}", error))
			.flags(MessageFlags::EPHEMERAL)
			.build();
		responder.send(response).await?;
		return Ok(());
	}

	let mut embed = EmbedBuilder::new()
		.color(0xffa500)
		.title("Member Timed Out")
		.description(format!("Timed out {} for {}", user_id.mention(), duration));
	if let Some(reason) = reason {
		embed = embed.field(EmbedFieldBuilder::new("Reason", reason));
	}
	let embed = embed
		.field(EmbedFieldBuilder::new("Moderator", &moderator.name))
		.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?)
		.validate()
		.into_diagnostic()?
		.build();
	let response = InteractionResponseDataBuilder::new()
		.embeds([embed])
		.allowed_mentions(AllowedMentions::default())
		.build();
	responder.send(response).await
}
