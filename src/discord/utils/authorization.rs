// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::utils::guilds::guild_owner;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::responses::unauthorized_message;
use miette::bail;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;
use twilight_util::builder::InteractionResponseDataBuilder;

/// The identity data against which gated commands are authorized.
#[derive(Debug)]
pub struct RequestIdentity {
	pub user_id: Id<UserMarker>,
	pub username: String,
	pub global_name: Option<String>,
	pub nickname: Option<String>,
	pub guild_owner: Option<Id<UserMarker>>,
}

impl RequestIdentity {
	/// The name the user displays under in the guild: the guild nickname, falling back to the
	/// global display name, falling back to the username.
	pub fn display_name(&self) -> &str {
		self.nickname
			.as_deref()
			.or(self.global_name.as_deref())
			.unwrap_or(&self.username)
	}
}

/// Decides whether a user may run gated commands. Swap the implementation handed to the bot
/// context to change how users are authorized.
pub trait AuthorizationPolicy: Send + Sync {
	fn is_authorized(&self, identity: &RequestIdentity) -> bool;
}

/// Authorizes the single configured steward, matched by any of their names, along with the
/// guild owner. Anyone who renames themselves to the steward's name passes this check.
pub struct NamedStewardPolicy {
	steward_name: String,
}

impl NamedStewardPolicy {
	pub fn new(steward_name: impl Into<String>) -> Self {
		Self {
			steward_name: steward_name.into(),
		}
	}
}

impl AuthorizationPolicy for NamedStewardPolicy {
	fn is_authorized(&self, identity: &RequestIdentity) -> bool {
		let steward_name = self.steward_name.as_str();
		let is_owner = match identity.guild_owner {
			Some(owner_id) => owner_id == identity.user_id,
			None => false,
		};
		identity.display_name() == steward_name
			|| identity.global_name.as_deref() == Some(steward_name)
			|| identity.nickname.as_deref() == Some(steward_name)
			|| identity.username == steward_name
			|| is_owner
	}
}

/// Assembles the invoking user's identity from a guild interaction, including the guild owner
/// so that the policy can check ownership.
pub async fn request_identity(
	interaction: &InteractionCreate,
	context: &BotContext,
) -> miette::Result<RequestIdentity> {
	let Some(member) = &interaction.member else {
		bail!("Interaction wasn't sent from a guild member");
	};
	let Some(user) = &member.user else {
		bail!("Interaction member data has no associated user");
	};
	let guild_owner = match interaction.guild_id {
		Some(guild_id) => Some(guild_owner(guild_id, context).await?),
		None => None,
	};
	Ok(RequestIdentity {
		user_id: user.id,
		username: user.name.clone(),
		global_name: user.global_name.clone(),
		nickname: member.nick.clone(),
		guild_owner,
	})
}

/// Runs the authorization policy for a gated interaction. When the invoker isn't authorized,
/// sends them the refusal message and returns `false`; the caller should stop handling.
pub async fn require_steward(
	interaction: &InteractionCreate,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<bool> {
	let identity = request_identity(interaction, context).await?;
	if context.authorization.is_authorized(&identity) {
		return Ok(true);
	}
	let refusal = InteractionResponseDataBuilder::new()
		.content(unauthorized_message(&context.config.steward_name))
		.flags(MessageFlags::EPHEMERAL)
		.build();
	responder.send(refusal).await?;
	Ok(false)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn identity(
		username: &str,
		global_name: Option<&str>,
		nickname: Option<&str>,
		user_id: u64,
		owner_id: Option<u64>,
	) -> RequestIdentity {
		RequestIdentity {
			user_id: Id::new(user_id),
			username: String::from(username),
			global_name: global_name.map(String::from),
			nickname: nickname.map(String::from),
			guild_owner: owner_id.map(Id::new),
		}
	}

	#[test]
	fn steward_matches_by_username() {
		let policy = NamedStewardPolicy::new("shepherd");
		assert!(policy.is_authorized(&identity("shepherd", None, None, 10, Some(1))));
	}

	#[test]
	fn steward_matches_by_global_name() {
		let policy = NamedStewardPolicy::new("shepherd");
		assert!(policy.is_authorized(&identity("someone", Some("shepherd"), None, 10, Some(1))));
	}

	#[test]
	fn steward_matches_by_guild_nickname() {
		let policy = NamedStewardPolicy::new("shepherd");
		assert!(policy.is_authorized(&identity("someone", Some("other"), Some("shepherd"), 10, Some(1))));
	}

	#[test]
	fn guild_owner_is_authorized_under_any_name() {
		let policy = NamedStewardPolicy::new("shepherd");
		assert!(policy.is_authorized(&identity("someone", Some("other"), Some("unrelated"), 42, Some(42))));
	}

	#[test]
	fn other_members_are_refused() {
		let policy = NamedStewardPolicy::new("shepherd");
		assert!(!policy.is_authorized(&identity("someone", Some("other"), Some("unrelated"), 10, Some(1))));
		assert!(!policy.is_authorized(&identity("someone", None, None, 10, None)));
	}

	#[test]
	fn display_name_prefers_nickname_then_global_name() {
		let with_nickname = identity("user", Some("global"), Some("nick"), 10, None);
		assert_eq!(with_nickname.display_name(), "nick");
		let with_global_name = identity("user", Some("global"), None, 10, None);
		assert_eq!(with_global_name.display_name(), "global");
		let username_only = identity("user", None, None, 10, None);
		assert_eq!(username_only.display_name(), "user");
	}
}
