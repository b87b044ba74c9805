// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::authorization::require_steward;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::responses::TICKET_CREATION_FAILED;
use crate::discord::utils::tickets::{ticket_channel_overwrites, TicketKind};
use crate::discord::utils::timestamp::timestamp_from_id;
use crate::discord::utils::users::interaction_user;
use miette::{bail, IntoDiagnostic};
use twilight_mention::fmt::Mention;
use twilight_model::application::interaction::message_component::MessageComponentInteractionData;
use twilight_model::channel::message::{AllowedMentions, MessageFlags};
use twilight_model::channel::ChannelType;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::InteractionResponseDataBuilder;

/// Handles a selection from one of the ticket menus by opening a channel only the
/// selecting user (and administrators) can see.
pub async fn handle_menu_selection(
	interaction: &InteractionCreate,
	interaction_data: &MessageComponentInteractionData,
	custom_id_path: &[String],
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let Some(kind_id) = custom_id_path.get(1) else {
		bail!("Ticket component interaction has malformed ID: {:?}", custom_id_path);
	};
	let Some(kind) = TicketKind::from_component_id(kind_id) else {
		bail!("Ticket component interaction has unknown kind {}", kind_id);
	};
	let Some(guild_id) = interaction.guild_id else {
		bail!("Ticket menu interaction has no guild");
	};
	if !require_steward(interaction, responder, context).await? {
		return Ok(());
	}

	let Some(choice) = interaction_data.values.first() else {
		bail!("Ticket menu interaction has no selected value");
	};
	if !kind.is_valid_choice(choice) {
		bail!("Ticket menu interaction has a value outside its menu: {}", choice);
	}
	let user = interaction_user(interaction)?;

	let channel_name = kind.channel_name(choice, &user.name);
	let permission_overwrites = ticket_channel_overwrites(guild_id, user.id);

	let channel_result = context
		.http_client
		.create_guild_channel(guild_id, &channel_name)
		.kind(ChannelType::GuildText)
		.permission_overwrites(&permission_overwrites)
		.position(999)
		.await;
	let channel = match channel_result {
		Ok(channel_response) => match channel_response.model().await {
			Ok(channel) => channel,
			Err(error) => {
				tracing::warn!(source = ?error, "Failed to read the created ticket channel");
				send_creation_failure(responder).await?;
				return Ok(());
			}
		},
		Err(error) => {
			tracing::warn!(source = ?error, "Failed to create ticket channel");
			send_creation_failure(responder).await?;
			return Ok(());
		}
	};

	let intro_embed = kind
		.intro_embed(choice, user.id, timestamp_from_id(interaction.id).into_diagnostic()?)
		.into_diagnostic()?;
	let intro_content = format!("{}", user.id.mention());
	let mut allowed_mentions = AllowedMentions::default();
	allowed_mentions.users.push(user.id);
	let intro_result = context
		.http_client
		.create_message(channel.id)
		.content(&intro_content)
		.embeds(&[intro_embed])
		.allowed_mentions(Some(&allowed_mentions))
		.await;
	if let Err(error) = intro_result {
		tracing::warn!(source = ?error, "Failed to post the ticket channel's intro message");
		send_creation_failure(responder).await?;
		return Ok(());
	}

	let response = InteractionResponseDataBuilder::new()
		.content(kind.created_reply(channel.id))
		.flags(MessageFlags::EPHEMERAL)
		.build();
	responder.send(response).await
}

async fn send_creation_failure(responder: &mut InteractionResponder) -> miette::Result<()> {
	let response = InteractionResponseDataBuilder::new()
		.content(TICKET_CREATION_FAILED)
		.flags(MessageFlags::EPHEMERAL)
		.build();
	responder.send(response).await
}
