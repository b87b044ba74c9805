// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use tokio::sync::RwLock;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker};

/// Where and how a guild greets new members.
#[derive(Clone, Debug)]
pub struct WelcomeSetting {
	pub channel: Id<ChannelMarker>,
	pub message: String,
}

impl WelcomeSetting {
	/// Renders the configured message, substituting `{user}` with a mention of the new
	/// member and `{server}` with the guild's name.
	pub fn render(&self, user_mention: &str, guild_name: &str) -> String {
		self.message.replace("{user}", user_mention).replace("{server}", guild_name)
	}
}

/// Welcome message settings by guild. A guild has at most one setting at a time.
#[derive(Debug, Default)]
pub struct WelcomeStore {
	settings: RwLock<HashMap<Id<GuildMarker>, WelcomeSetting>>,
}

impl WelcomeStore {
	pub async fn set(&self, guild_id: Id<GuildMarker>, setting: WelcomeSetting) {
		let mut settings = self.settings.write().await;
		settings.insert(guild_id, setting);
	}

	/// Removes the guild's welcome setting. Returns whether a setting had been there to
	/// remove.
	pub async fn disable(&self, guild_id: Id<GuildMarker>) -> bool {
		let mut settings = self.settings.write().await;
		settings.remove(&guild_id).is_some()
	}

	pub async fn get(&self, guild_id: Id<GuildMarker>) -> Option<WelcomeSetting> {
		let settings = self.settings.read().await;
		settings.get(&guild_id).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn settings_replace_previous_settings_for_the_guild() {
		let store = WelcomeStore::default();
		store
			.set(
				Id::new(1),
				WelcomeSetting {
					channel: Id::new(10),
					message: String::from("Hi {user}"),
				},
			)
			.await;
		store
			.set(
				Id::new(1),
				WelcomeSetting {
					channel: Id::new(11),
					message: String::from("Welcome {user} to {server}!"),
				},
			)
			.await;

		let setting = store.get(Id::new(1)).await.unwrap();
		assert_eq!(setting.channel, Id::new(11));
		assert_eq!(setting.message, "Welcome {user} to {server}!");
	}

	#[tokio::test]
	async fn disabling_reports_whether_a_setting_existed() {
		let store = WelcomeStore::default();
		store
			.set(
				Id::new(1),
				WelcomeSetting {
					channel: Id::new(10),
					message: String::from("Hi {user}"),
				},
			)
			.await;

		assert!(store.disable(Id::new(1)).await);
		assert!(!store.disable(Id::new(1)).await);
		assert!(store.get(Id::new(1)).await.is_none());
	}

	#[test]
	fn rendering_substitutes_every_placeholder() {
		let setting = WelcomeSetting {
			channel: Id::new(10),
			message: String::from("Welcome {user} to {server}! Enjoy {server}."),
		};
		assert_eq!(
			setting.render("@newcomer", "The Meadow"),
			"Welcome @newcomer to The Meadow! Enjoy The Meadow."
		);
	}

	#[test]
	fn rendering_leaves_messages_without_placeholders_alone() {
		let setting = WelcomeSetting {
			channel: Id::new(10),
			message: String::from("A new member arrived."),
		};
		assert_eq!(setting.render("@newcomer", "The Meadow"), "A new member arrived.");
	}
}
