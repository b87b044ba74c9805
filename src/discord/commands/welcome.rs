// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::state::WelcomeSetting;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::responder::InteractionResponder;
use miette::bail;
use twilight_mention::fmt::Mention;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::channel::ChannelType;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::{ChannelBuilder, CommandBuilder, StringBuilder, SubCommandBuilder};

pub fn command_definition() -> Command {
	let channel_option = ChannelBuilder::new("channel", "Channel the welcome messages are sent to")
		.channel_types([ChannelType::GuildText])
		.required(true)
		.build();
	let message_option = StringBuilder::new("message", "Welcome message; {user} and {server} are filled in")
		.required(true)
		.build();
	let setup_subcommand = SubCommandBuilder::new("setup", "Set up welcome messages for this server")
		.option(channel_option)
		.option(message_option);
	let disable_subcommand = SubCommandBuilder::new("disable", "Stop sending welcome messages");
	CommandBuilder::new("welcome", "Manage welcome messages", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.option(setup_subcommand)
		.option(disable_subcommand)
		.build()
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	command_data: &CommandData,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let Some(guild_id) = interaction.guild_id else {
		bail!("Welcome command interaction has no guild");
	};
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let Some(subcommand) = command_data.options.first() else {
		bail!("Welcome command interaction has no subcommand");
	};
	match subcommand.name.as_str() {
		"setup" => {
			let CommandOptionValue::SubCommand(setup_options) = &subcommand.value else {
				bail!("Welcome command interaction has a malformed subcommand");
			};
			let mut channel: Option<Id<ChannelMarker>> = None;
			let mut message: Option<&str> = None;
			for option in setup_options {
				match option.name.as_str() {
					"channel" => {
						if let CommandOptionValue::Channel(value) = option.value {
							channel = Some(value);
						}
					}
					"message" => {
						if let CommandOptionValue::String(value) = &option.value {
							message = Some(value);
						}
					}
					_ => (),
				}
			}
			let (Some(channel), Some(message)) = (channel, message) else {
				bail!("Welcome setup interaction is missing its required options");
			};

			let setting = WelcomeSetting {
				channel,
				message: String::from(message),
			};
			context.stores.welcome.set(guild_id, setting).await;

			let response = InteractionResponseDataBuilder::new()
				.content(format!("Welcome messages will be sent to {}.", channel.mention()))
				.build();
			responder.send(response).await
		}
		"disable" => {
			let had_setting = context.stores.welcome.disable(guild_id).await;
			let response = if had_setting {
				InteractionResponseDataBuilder::new()
					.content("Welcome messages are now disabled.")
					.build()
			} else {
				InteractionResponseDataBuilder::new()
					.content("This server doesn't have welcome messages set up.")
					.flags(MessageFlags::EPHEMERAL)
					.build()
			};
			responder.send(response).await
		}
		_ => bail!("Welcome command interaction has unknown subcommand {}", subcommand.name),
	}
}
