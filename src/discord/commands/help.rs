// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::responder::InteractionResponder;
use miette::IntoDiagnostic;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::CommandBuilder;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

struct CommandCategory {
	name: &'static str,
	commands: &'static [&'static str],
}

const COMMAND_CATEGORIES: [CommandCategory; 9] = [
	CommandCategory {
		name: "Moderation",
		commands: &[
			"ban",
			"quickban",
			"ultraban",
			"godban",
			"dmban",
			"timeout",
			"warn",
			"moderation",
		],
	},
	CommandCategory {
		name: "Giveaways",
		commands: &["giveaway", "giveaway-manage"],
	},
	CommandCategory {
		name: "Tickets",
		commands: &["make", "close", "tickets"],
	},
	CommandCategory {
		name: "Roles",
		commands: &["giverole", "roles"],
	},
	CommandCategory {
		name: "Info",
		commands: &["help", "stats", "membercount", "test", "setup"],
	},
	CommandCategory {
		name: "Config",
		commands: &["config", "welcome", "manualwelcome", "simulatejoin"],
	},
	CommandCategory {
		name: "Protection",
		commands: &["botprotection", "backup"],
	},
	CommandCategory {
		name: "Staff",
		commands: &["staffapplicationtext", "supporttickettext"],
	},
	CommandCategory {
		name: "Special",
		commands: &["artcontest", "valueupdate", "poll"],
	},
];

pub fn command_definition() -> Command {
	CommandBuilder::new("help", "Show all available commands", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.build()
}

pub async fn handle_command(responder: &mut InteractionResponder, context: &BotContext) -> miette::Result<()> {
	let command_count = super::command_definitions().len();
	let steward_name = &context.config.steward_name;

	let mut embed = EmbedBuilder::new()
		.color(0x0099ff)
		.title(format!("Guild Steward - All {} Commands", command_count))
		.description("Complete server management bot");
	for category in &COMMAND_CATEGORIES {
		let command_list = category
			.commands
			.iter()
			.map(|name| format!("/{}", name))
			.collect::<Vec<String>>()
			.join(", ");
		let field_name = format!("{} ({})", category.name, category.commands.len());
		embed = embed.field(EmbedFieldBuilder::new(field_name, command_list));
	}
	let embed = embed
		.footer(EmbedFooterBuilder::new(format!(
			"Bot managed by {0} | Only {0} and the server owner can use most commands",
			steward_name
		)))
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
	fn categories_list_every_registered_command_exactly_once() {
		let mut listed: Vec<&str> = COMMAND_CATEGORIES
			.iter()
			.flat_map(|category| category.commands.iter().copied())
			.collect();
		listed.sort_unstable();
		let duplicate_free_count = {
			let mut deduplicated = listed.clone();
			deduplicated.dedup();
			deduplicated.len()
		};
		assert_eq!(listed.len(), duplicate_free_count);

		let mut registered: Vec<String> = crate::discord::commands::command_definitions()
			.iter()
			.map(|definition| definition.name.clone())
			.collect();
		registered.sort_unstable();
		assert_eq!(listed, registered);
	}
}
