// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub const COMMAND_FAILED: &str = "There was an error executing this command!";

pub const GIVEAWAY_GONE: &str = "This giveaway no longer exists!";
pub const GIVEAWAY_ALREADY_ENTERED: &str = "You are already entered in this giveaway!";
pub const GIVEAWAY_ENTERED: &str = "You have been entered into the giveaway! Good luck!";

pub const TICKET_CREATION_FAILED: &str = "Failed to create ticket channel.";
pub const NOT_A_TICKET_CHANNEL: &str = "This command can only be used in ticket channels.";

pub fn unauthorized_message(steward_name: &str) -> String {
	format!("Only {} and server owner can use this command.", steward_name)
}
