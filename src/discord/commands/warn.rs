// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::state::Warning;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::timestamp_from_id;
use crate::discord::utils::users::interaction_user;
use chrono::Utc;
use miette::{bail, IntoDiagnostic};
use twilight_mention::fmt::Mention;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::channel::message::AllowedMentions;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::{CommandBuilder, StringBuilder, UserBuilder};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

pub fn command_definition() -> Command {
	let user_option = UserBuilder::new("user", "User to warn").required(true).build();
	let reason_option = StringBuilder::new("reason", "Reason for the warning")
		.required(true)
		.build();
	CommandBuilder::new("warn", "Warn a user", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(user_option)
		.option(reason_option)
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

	let mut user_id: Option<Id<UserMarker>> = None;
	let mut reason: Option<&str> = None;
	for option in &command_data.options {
		match option.name.as_str() {
			"user" => {
				if let CommandOptionValue::User(value) = option.value {
					user_id = Some(value);
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
	let (Some(user_id), Some(reason)) = (user_id, reason) else {
		bail!("Warn command interaction is missing its required options");
	};

	let moderator = interaction_user(interaction)?;
	let warning = Warning {
		reason: String::from(reason),
		moderator: moderator.name.clone(),
		warned_at: Utc::now(),
	};
	let warning_count = context.stores.warnings.add(user_id, warning).await;

	let embed = EmbedBuilder::new()
		.color(0xffcc00)
		.title("User Warned")
		.description(format!("{} has been warned", user_id.mention()))
		.field(EmbedFieldBuilder::new("Reason", reason))
		.field(EmbedFieldBuilder::new("Moderator", &moderator.name))
		.field(EmbedFieldBuilder::new("Total Warnings", warning_count.to_string()).inline())
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
