// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::responder::InteractionResponder;
use twilight_model::application::command::Command;
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::gateway::payload::incoming::InteractionCreate;

mod ban;
mod close;
mod echo;
mod giveaway;
mod giveaway_manage;
mod help;
mod make;
mod membercount;
mod stats;
mod timeout;
mod warn;
mod welcome;

/// The identity of a command in the bot's fixed catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandKind {
	Ban,
	Close,
	Giveaway,
	GiveawayManage,
	Help,
	Make,
	Membercount,
	Stats,
	Timeout,
	Warn,
	Welcome,
	Echo(&'static str),
}

impl CommandKind {
	/// Looks up the command registered under a name. Names outside the catalog have no
	/// command, so a command that was never registered can't be dispatched.
	pub fn from_name(name: &str) -> Option<Self> {
		let kind = match name {
			"ban" => Self::Ban,
			"close" => Self::Close,
			"giveaway" => Self::Giveaway,
			"giveaway-manage" => Self::GiveawayManage,
			"help" => Self::Help,
			"make" => Self::Make,
			"membercount" => Self::Membercount,
			"stats" => Self::Stats,
			"timeout" => Self::Timeout,
			"warn" => Self::Warn,
			"welcome" => Self::Welcome,
			_ => return echo::find_echo_command(name).map(Self::Echo),
		};
		Some(kind)
	}
}

/// Builds the full command catalog the bot registers with Discord on startup.
/// Registration replaces whatever command set was registered before.
pub fn command_definitions() -> Vec<Command> {
	let mut definitions = vec![
		ban::command_definition(),
		close::command_definition(),
		giveaway::command_definition(),
		giveaway_manage::command_definition(),
		help::command_definition(),
		make::command_definition(),
		membercount::command_definition(),
		stats::command_definition(),
		timeout::command_definition(),
		warn::command_definition(),
		welcome::command_definition(),
	];
	definitions.extend(echo::command_definitions());
	definitions
}

pub async fn route_command(
	interaction: &InteractionCreate,
	command_data: &CommandData,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let Some(kind) = CommandKind::from_name(&command_data.name) else {
		tracing::debug!(command = %command_data.name, "Ignoring a command that isn't in the catalog");
		return Ok(());
	};
	match kind {
		CommandKind::Ban => ban::handle_command(interaction, command_data, responder, context).await,
		CommandKind::Close => close::handle_command(interaction, responder, context).await,
		CommandKind::Giveaway => giveaway::handle_command(interaction, command_data, responder, context).await,
		CommandKind::GiveawayManage => {
			giveaway_manage::handle_command(interaction, command_data, responder, context).await
		}
		CommandKind::Help => help::handle_command(responder, context).await,
		CommandKind::Make => make::handle_command(interaction, command_data, responder, context).await,
		CommandKind::Membercount => membercount::handle_command(interaction, responder, context).await,
		CommandKind::Stats => stats::handle_command(interaction, responder, context).await,
		CommandKind::Timeout => timeout::handle_command(interaction, command_data, responder, context).await,
		CommandKind::Warn => warn::handle_command(interaction, command_data, responder, context).await,
		CommandKind::Welcome => welcome::handle_command(interaction, command_data, responder, context).await,
		CommandKind::Echo(echo_name) => echo::handle_command(echo_name, interaction, responder, context).await,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn catalog_names_are_unique() {
		let definitions = command_definitions();
		let names: HashSet<String> = definitions.iter().map(|definition| definition.name.clone()).collect();
		assert_eq!(names.len(), definitions.len());
	}

	#[test]
	fn every_catalog_command_has_a_route() {
		for definition in command_definitions() {
			assert!(
				CommandKind::from_name(&definition.name).is_some(),
				"{} doesn't route anywhere",
				definition.name
			);
		}
	}

	#[test]
	fn names_outside_the_catalog_have_no_route() {
		assert_eq!(CommandKind::from_name("not-a-command"), None);
		assert_eq!(CommandKind::from_name(""), None);
		assert_eq!(CommandKind::from_name("BAN"), None);
	}

	#[test]
	fn the_catalog_has_thirty_one_commands() {
		assert_eq!(command_definitions().len(), 31);
	}
}
