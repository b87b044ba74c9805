// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use miette::bail;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::user::User;

/// Gets the user who invoked a guild interaction.
pub fn interaction_user(interaction: &InteractionCreate) -> miette::Result<&User> {
	let Some(member) = &interaction.member else {
		bail!("Interaction wasn't sent from a guild member");
	};
	let Some(user) = &member.user else {
		bail!("Interaction member data has no associated user");
	};
	Ok(user)
}
