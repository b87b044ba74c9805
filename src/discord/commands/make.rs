// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::tickets::TicketKind;
use miette::{bail, IntoDiagnostic};
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::channel::message::component::{ActionRow, Component, SelectMenu, SelectMenuOption, SelectMenuType};
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::{CommandBuilder, SubCommandBuilder};

pub fn command_definition() -> Command {
	let staff_subcommand =
		SubCommandBuilder::new("staff-application-tickets", "Create staff application ticket system");
	let support_subcommand = SubCommandBuilder::new("support-tickets", "Create support ticket system");
	CommandBuilder::new("make", "Create ticket systems", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(staff_subcommand)
		.option(support_subcommand)
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

	let Some(subcommand) = command_data.options.first() else {
		bail!("Make command interaction has no subcommand");
	};
	let kind = match subcommand.name.as_str() {
		"staff-application-tickets" => TicketKind::StaffApplication,
		"support-tickets" => TicketKind::Support,
		_ => bail!("Make command interaction has unknown subcommand {}", subcommand.name),
	};
	if !matches!(subcommand.value, CommandOptionValue::SubCommand(_)) {
		bail!("Make command interaction has a malformed subcommand");
	}

	let embed = kind.menu_embed(&context.config.steward_name).into_diagnostic()?;

	let menu_options: Vec<SelectMenuOption> = kind
		.options()
		.iter()
		.map(|option| SelectMenuOption {
			default: false,
			description: Some(String::from(option.description)),
			emoji: None,
			label: String::from(option.label),
			value: String::from(option.value),
		})
		.collect();
	let menu = SelectMenu {
		kind: SelectMenuType::Text,
		custom_id: kind.menu_custom_id(),
		placeholder: Some(String::from(kind.menu_placeholder())),
		channel_types: None,
		default_values: None,
		disabled: false,
		min_values: None,
		max_values: None,
		options: Some(menu_options),
	};
	let menu_row = Component::ActionRow(ActionRow {
		components: vec![Component::SelectMenu(menu)],
	});

	let response = InteractionResponseDataBuilder::new()
		.embeds([embed])
		.components([menu_row])
		.build();
	responder.send(response).await
}
