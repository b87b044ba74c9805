// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use twilight_mention::fmt::Mention;
use twilight_model::channel::message::Embed;
use twilight_model::channel::permission_overwrite::{PermissionOverwrite, PermissionOverwriteType};
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, UserMarker};
use twilight_model::util::datetime::Timestamp;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};
use twilight_validate::embed::EmbedValidationError;

/// An entry in a ticket menu. The value doubles as the middle segment of the created
/// channel's name.
pub struct TicketMenuOption {
	pub label: &'static str,
	pub value: &'static str,
	pub description: &'static str,
}

const STAFF_APPLICATION_OPTIONS: [TicketMenuOption; 5] = [
	TicketMenuOption {
		label: "Moderator",
		value: "moderator",
		description: "Help maintain server order",
	},
	TicketMenuOption {
		label: "Trade Helper",
		value: "trade_helper",
		description: "Assist with trading",
	},
	TicketMenuOption {
		label: "Scam Manager",
		value: "scam_manager",
		description: "Handle scam reports",
	},
	TicketMenuOption {
		label: "Stocker",
		value: "stocker",
		description: "Manage inventory",
	},
	TicketMenuOption {
		label: "Event Manager",
		value: "event_manager",
		description: "Organize events",
	},
];

const SUPPORT_OPTIONS: [TicketMenuOption; 4] = [
	TicketMenuOption {
		label: "Unjust Staff",
		value: "unjust_staff",
		description: "Report staff misconduct",
	},
	TicketMenuOption {
		label: "Report a Scam",
		value: "report_scam",
		description: "Report scammer activity",
	},
	TicketMenuOption {
		label: "Host a Giveaway",
		value: "host_giveaway",
		description: "Request giveaway hosting",
	},
	TicketMenuOption {
		label: "Claim a Giveaway Prize",
		value: "claim_prize",
		description: "Claim your winnings",
	},
];

/// The kinds of ticket systems the bot can post menus for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TicketKind {
	StaffApplication,
	Support,
}

impl TicketKind {
	/// The segment identifying this kind in ticket component custom IDs.
	pub fn as_component_id(&self) -> &'static str {
		match self {
			Self::StaffApplication => "staff",
			Self::Support => "support",
		}
	}

	pub fn from_component_id(id: &str) -> Option<Self> {
		match id {
			"staff" => Some(Self::StaffApplication),
			"support" => Some(Self::Support),
			_ => None,
		}
	}

	pub fn menu_custom_id(&self) -> String {
		format!("ticket/{}", self.as_component_id())
	}

	pub fn options(&self) -> &'static [TicketMenuOption] {
		match self {
			Self::StaffApplication => &STAFF_APPLICATION_OPTIONS,
			Self::Support => &SUPPORT_OPTIONS,
		}
	}

	pub fn is_valid_choice(&self, choice: &str) -> bool {
		self.options().iter().any(|option| option.value == choice)
	}

	pub fn color(&self) -> u32 {
		match self {
			Self::StaffApplication => 0x3498db,
			Self::Support => 0xe74c3c,
		}
	}

	pub fn menu_title(&self) -> &'static str {
		match self {
			Self::StaffApplication => "Staff Application System",
			Self::Support => "Support Ticket System",
		}
	}

	pub fn menu_description(&self) -> &'static str {
		match self {
			Self::StaffApplication => "Select a staff position to apply for:",
			Self::Support => "Need help? Select a support category:",
		}
	}

	pub fn menu_placeholder(&self) -> &'static str {
		match self {
			Self::StaffApplication => "Choose a staff position",
			Self::Support => "Choose a support category",
		}
	}

	pub fn menu_footer(&self, steward_name: &str) -> String {
		match self {
			Self::StaffApplication => format!("Applications reviewed by {}", steward_name),
			Self::Support => String::from("Support team will assist you"),
		}
	}

	/// The name for a new ticket channel opened from this menu.
	pub fn channel_name(&self, choice: &str, username: &str) -> String {
		match self {
			Self::StaffApplication => format!("staff-{}-{}", choice, username),
			Self::Support => format!("support-{}-{}", choice, username),
		}
	}

	pub fn intro_title(&self, choice: &str) -> String {
		match self {
			Self::StaffApplication => format!("Staff Application - {}", display_choice(choice)),
			Self::Support => format!("Support Ticket - {}", display_choice(choice)),
		}
	}

	pub fn intro_description(&self, choice: &str, user: Id<UserMarker>) -> String {
		match self {
			Self::StaffApplication => format!(
				"Welcome {}! Please answer the following questions for your {} application.",
				user.mention(),
				choice
			),
			Self::Support => format!(
				"Hello {}! How can we help you with {}?",
				user.mention(),
				choice.replace('_', " ")
			),
		}
	}

	pub fn created_reply(&self, channel: Id<ChannelMarker>) -> String {
		match self {
			Self::StaffApplication => format!("Created your staff application ticket: {}", channel.mention()),
			Self::Support => format!("Created your support ticket: {}", channel.mention()),
		}
	}

	/// Generates the embed posted alongside this kind's selection menu.
	pub fn menu_embed(&self, steward_name: &str) -> Result<Embed, EmbedValidationError> {
		let mut embed = EmbedBuilder::new()
			.color(self.color())
			.title(self.menu_title())
			.description(self.menu_description());
		for option in self.options() {
			embed = embed.field(EmbedFieldBuilder::new(option.label, option.description).inline());
		}
		let embed = embed
			.footer(EmbedFooterBuilder::new(self.menu_footer(steward_name)))
			.validate()?
			.build();
		Ok(embed)
	}

	/// Generates the introductory embed posted into a newly created ticket channel.
	pub fn intro_embed(
		&self,
		choice: &str,
		user: Id<UserMarker>,
		timestamp: Timestamp,
	) -> Result<Embed, EmbedValidationError> {
		let embed = EmbedBuilder::new()
			.color(self.color())
			.title(self.intro_title(choice))
			.description(self.intro_description(choice, user))
			.timestamp(timestamp)
			.validate()?
			.build();
		Ok(embed)
	}
}

/// The permission overwrites for a newly opened ticket channel: hidden from the guild at
/// large, visible and writable for the user who opened it.
pub fn ticket_channel_overwrites(guild_id: Id<GuildMarker>, opener: Id<UserMarker>) -> [PermissionOverwrite; 2] {
	[
		PermissionOverwrite {
			allow: Permissions::empty(),
			deny: Permissions::VIEW_CHANNEL,
			id: guild_id.cast(),
			kind: PermissionOverwriteType::Role,
		},
		PermissionOverwrite {
			allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
			deny: Permissions::empty(),
			id: opener.cast(),
			kind: PermissionOverwriteType::Member,
		},
	]
}

/// Whether a channel counts as a ticket channel for `/close`. Only the channel name is
/// consulted; the bot tracks no other record of which channels are tickets.
pub fn is_ticket_channel_name(name: &str) -> bool {
	name.contains("ticket")
}

fn display_choice(choice: &str) -> String {
	choice.replace('_', " ").to_uppercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn channel_names_follow_the_menu_prefix() {
		assert_eq!(
			TicketKind::StaffApplication.channel_name("moderator", "riley"),
			"staff-moderator-riley"
		);
		assert_eq!(
			TicketKind::Support.channel_name("report_scam", "riley"),
			"support-report_scam-riley"
		);
	}

	#[test]
	fn intro_titles_display_the_choice_in_uppercase() {
		assert_eq!(
			TicketKind::StaffApplication.intro_title("trade_helper"),
			"Staff Application - TRADE HELPER"
		);
		assert_eq!(
			TicketKind::Support.intro_title("claim_prize"),
			"Support Ticket - CLAIM PRIZE"
		);
	}

	#[test]
	fn component_ids_round_trip() {
		for kind in [TicketKind::StaffApplication, TicketKind::Support] {
			assert_eq!(TicketKind::from_component_id(kind.as_component_id()), Some(kind));
		}
		assert_eq!(TicketKind::from_component_id("giveaway"), None);
	}

	#[test]
	fn menu_choices_validate_against_their_own_kind() {
		assert!(TicketKind::StaffApplication.is_valid_choice("stocker"));
		assert!(!TicketKind::StaffApplication.is_valid_choice("report_scam"));
		assert!(TicketKind::Support.is_valid_choice("report_scam"));
	}

	#[test]
	fn ticket_channels_are_hidden_from_everyone_but_the_opener() {
		let overwrites = ticket_channel_overwrites(Id::new(500), Id::new(600));

		let everyone = &overwrites[0];
		assert_eq!(everyone.id.get(), 500);
		assert_eq!(everyone.kind, PermissionOverwriteType::Role);
		assert!(everyone.allow.is_empty());
		assert!(everyone.deny.contains(Permissions::VIEW_CHANNEL));

		let opener = &overwrites[1];
		assert_eq!(opener.id.get(), 600);
		assert_eq!(opener.kind, PermissionOverwriteType::Member);
		assert!(opener.allow.contains(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES));
		assert!(opener.deny.is_empty());
	}

	#[test]
	fn only_names_containing_ticket_count_as_ticket_channels() {
		assert!(is_ticket_channel_name("ticket-123"));
		assert!(is_ticket_channel_name("staff-ticket-alice"));
		assert!(!is_ticket_channel_name("general"));
		// Channels opened from the menus use the staff-/support- prefixes and don't
		// match, so /close can't remove them.
		assert!(!is_ticket_channel_name(
			&TicketKind::StaffApplication.channel_name("moderator", "riley")
		));
		assert!(!is_ticket_channel_name(
			&TicketKind::Support.channel_name("claim_prize", "riley")
		));
	}
}
