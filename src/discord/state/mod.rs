// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod giveaways;
mod warnings;
mod welcome;

pub use giveaways::{EntryOutcome, Giveaway, GiveawayStore, ResolveOutcome};
pub use warnings::{Warning, WarningStore};
pub use welcome::{WelcomeSetting, WelcomeStore};

/// All of the workflow state the bot keeps. Everything here lives in process memory
/// only and is lost on restart.
#[derive(Debug, Default)]
pub struct Stores {
	pub giveaways: GiveawayStore,
	pub warnings: WarningStore,
	pub welcome: WelcomeStore,
}
