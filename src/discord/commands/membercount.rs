// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::timestamp::{datetime_from_id, timestamp_from_id};
use miette::{bail, IntoDiagnostic};
use std::collections::HashMap;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::guild::Member;
use twilight_model::id::Id;
use twilight_model::id::marker::{GuildMarker, RoleMarker};
use twilight_util::builder::InteractionResponseDataBuilder;
use twilight_util::builder::command::CommandBuilder;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, ImageSource};

pub fn command_definition() -> Command {
	CommandBuilder::new("membercount", "Show server member statistics", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.build()
}

pub async fn handle_command(
	interaction: &InteractionCreate,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let Some(guild_id) = interaction.guild_id else {
		bail!("Member count interaction has no guild");
	};

	let guild_response = context
		.http_client
		.guild(guild_id)
		.with_counts(true)
		.await
		.into_diagnostic()?;
	let guild = guild_response.model().await.into_diagnostic()?;
	let total_members = guild.approximate_member_count.unwrap_or_default();
	let created_display = match datetime_from_id(guild_id) {
		Some(created_at) => created_at.format("%a %b %d %Y").to_string(),
		None => String::from("Unknown"),
	};

	let mut embed = EmbedBuilder::new()
		.color(0x00ff00)
		.title(format!("{} Statistics", guild.name))
		.field(EmbedFieldBuilder::new("Total Members", total_members.to_string()).inline())
		.field(EmbedFieldBuilder::new("Server Created", created_display).inline())
		.timestamp(timestamp_from_id(interaction.id).into_diagnostic()?);
	if let Some(icon) = guild.icon {
		let icon_url = format!("https://cdn.discordapp.com/icons/{}/{}.png", guild_id, icon);
		embed = embed.thumbnail(ImageSource::url(icon_url).into_diagnostic()?);
	}

	if let Some(steward) = find_steward_member(context, guild_id).await? {
		let roles_response = context.http_client.roles(guild_id).await.into_diagnostic()?;
		let guild_roles = roles_response.models().await.into_diagnostic()?;
		let role_data: HashMap<Id<RoleMarker>, (i64, String)> = guild_roles
			.into_iter()
			.map(|role| (role.id, (role.position, role.name)))
			.collect();

		let everyone_role: Id<RoleMarker> = guild_id.cast();
		let mut steward_roles: Vec<(i64, String)> = steward
			.roles
			.iter()
			.filter(|role_id| **role_id != everyone_role)
			.filter_map(|role_id| role_data.get(role_id).cloned())
			.collect();
		steward_roles.sort_by_key(|(position, _)| std::cmp::Reverse(*position));
		let role_names: Vec<String> = steward_roles
			.into_iter()
			.take(10)
			.map(|(_, name)| name)
			.collect();
		let role_list = if role_names.is_empty() {
			String::from("No roles")
		} else {
			role_names.join(", ")
		};

		embed = embed.field(EmbedFieldBuilder::new(
			format!("Co-Owner ({})", context.config.steward_name),
			format!("Roles: {}", role_list),
		));
	}

	let embed = embed.validate().into_diagnostic()?.build();
	let response = InteractionResponseDataBuilder::new().embeds([embed]).build();
	responder.send(response).await
}

/// Finds the steward's guild member data, matching the same names the authorization
/// policy accepts. The search endpoint does prefix matching, so the results are
/// narrowed to an exact name match.
async fn find_steward_member(context: &BotContext, guild_id: Id<GuildMarker>) -> miette::Result<Option<Member>> {
	let steward_name = context.config.steward_name.as_str();
	let search_response = context
		.http_client
		.search_guild_members(guild_id, steward_name)
		.limit(10)
		.await
		.into_diagnostic()?;
	let members = search_response.models().await.into_diagnostic()?;
	let steward = members.into_iter().find(|member| {
		member.nick.as_deref() == Some(steward_name)
			|| member.user.global_name.as_deref() == Some(steward_name)
			|| member.user.name == steward_name
	});
	Ok(steward)
}
