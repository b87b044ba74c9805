// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use miette::IntoDiagnostic;
use twilight_model::id::Id;
use twilight_model::id::marker::{GuildMarker, UserMarker};

/// Gets the name of a guild, preferring cached guild data over a request to Discord.
pub async fn guild_name(guild_id: Id<GuildMarker>, context: &BotContext) -> miette::Result<String> {
	if let Some(guild) = context.cache.guild(guild_id) {
		return Ok(guild.name().to_string());
	}
	let guild_response = context.http_client.guild(guild_id).await.into_diagnostic()?;
	let guild = guild_response.model().await.into_diagnostic()?;
	Ok(guild.name)
}

/// Gets the user ID of a guild's owner, preferring cached guild data over a request to Discord.
pub async fn guild_owner(guild_id: Id<GuildMarker>, context: &BotContext) -> miette::Result<Id<UserMarker>> {
	if let Some(guild) = context.cache.guild(guild_id) {
		return Ok(guild.owner_id());
	}
	let guild_response = context.http_client.guild(guild_id).await.into_diagnostic()?;
	let guild = guild_response.model().await.into_diagnostic()?;
	Ok(guild.owner_id)
}
