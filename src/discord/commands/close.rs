// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::responses::NOT_A_TICKET_CHANNEL;
use crate::discord::utils::tickets::is_ticket_channel_name;
use crate::discord::utils::timestamp::timestamp_from_id;
use miette::{bail, IntoDiagnostic};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use twilight_http::client::Client;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::CommandBuilder;
use twilight_util::builder::embed::EmbedBuilder;

const DELETE_DELAY: Duration = Duration::from_secs(10);

pub fn command_definition() -> Command {
	CommandBuilder::new("close", "Close the current ticket channel", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.build()
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let Some(channel) = &interaction.channel else {
		bail!("Close command interaction has no channel");
	};
	let channel_name = channel.name.as_deref().unwrap_or_default();
	if !is_ticket_channel_name(channel_name) {
		let response = InteractionResponseDataBuilder::new()
			.content(NOT_A_TICKET_CHANNEL)
			.flags(MessageFlags::EPHEMERAL)
			.build();
		responder.send(response).await?;
		return Ok(());
	}

	let embed = EmbedBuilder::new()
		.color(0xff0000)
		.title("Closing Ticket")
		.description("This ticket will be deleted in 10 seconds...")
		.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?)
		.validate()
		.into_diagnostic()?
		.build();
	let response = InteractionResponseDataBuilder::new().embeds([embed]).build();
	responder.send(response).await?;

	tokio::spawn(delete_ticket_channel(Arc::clone(&context.http_client), channel.id));

	Ok(())
}

/// Waits out the countdown announced by `/close`, then deletes the ticket channel. A
/// failed deletion is only logged; the announcement has already gone out.
async fn delete_ticket_channel(http_client: Arc<Client>, channel: Id<ChannelMarker>) {
	sleep(DELETE_DELAY).await;
	if let Err(error) = http_client.delete_channel(channel).await {
		tracing::warn!(source = ?error, "Failed to delete ticket channel");
	}
}
