// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::guilds::guild_name;
use miette::IntoDiagnostic;
use twilight_mention::fmt::Mention;
use twilight_model::gateway::payload::incoming::MemberAdd;

/// Greets a member who joined a guild with a configured welcome message. Guilds without
/// a welcome setting stay quiet.
pub async fn handle_member_add(member_add: &MemberAdd, context: &BotContext) -> miette::Result<()> {
	let Some(setting) = context.stores.welcome.get(member_add.guild_id).await else {
		return Ok(());
	};

	let guild_name = guild_name(member_add.guild_id, context).await?;
	let user_mention = format!("{}", member_add.member.user.id.mention());
	let welcome_message = setting.render(&user_mention, &guild_name);

	context
		.http_client
		.create_message(setting.channel)
		.content(&welcome_message)
		.await
		.into_diagnostic()?;
	Ok(())
}
