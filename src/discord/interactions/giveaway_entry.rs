// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::BotContext;
use crate::discord::state::EntryOutcome;
use crate::discord::utils::responder::InteractionResponder;
use crate::discord::utils::responses::{GIVEAWAY_ALREADY_ENTERED, GIVEAWAY_ENTERED, GIVEAWAY_GONE};
use crate::discord::utils::users::interaction_user;
use miette::bail;
use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_util::builder::InteractionResponseDataBuilder;

/// Builds the action row holding a giveaway's entry button.
pub fn entry_button_row() -> Component {
	let enter_button = Button {
		custom_id: Some(String::from("giveaway/enter")),
		disabled: false,
		emoji: None,
		label: Some(String::from("Enter Giveaway")),
		style: ButtonStyle::Primary,
		url: None,
		sku_id: None,
	};
	Component::ActionRow(ActionRow {
		components: vec![Component::Button(enter_button)],
	})
}

/// Handles a press of a giveaway entry button. Anyone may enter; each user counts once
/// no matter how many times they press the button.
pub async fn handle_entry(
	interaction: &InteractionCreate,
	custom_id_path: &[String],
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	if custom_id_path.get(1).map(|s| s.as_str()) != Some("enter") {
		bail!("Giveaway component interaction has malformed ID: {:?}", custom_id_path);
	}
	let Some(message) = &interaction.message else {
		bail!("Giveaway entry interaction has no message");
	};
	let user = interaction_user(interaction)?;

	let outcome = context.stores.giveaways.enter(message.id, user.id).await;
	let reply_content = match outcome {
		EntryOutcome::Entered => GIVEAWAY_ENTERED,
		EntryOutcome::AlreadyEntered => GIVEAWAY_ALREADY_ENTERED,
		EntryOutcome::NotFound => GIVEAWAY_GONE,
	};
	let response = InteractionResponseDataBuilder::new()
		.content(reply_content)
		.flags(MessageFlags::EPHEMERAL)
		.build();
	responder.send(response).await
}
