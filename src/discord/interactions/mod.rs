use crate::discord::context::BotContext;
use crate::discord::utils::responder::InteractionResponder;
use twilight_model::application::interaction::message_component::MessageComponentInteractionData;
use twilight_model::gateway::payload::incoming::InteractionCreate;

pub mod giveaway_entry;
pub mod ticket_menu;

pub async fn route_interaction(
	interaction: &InteractionCreate,
	interaction_data: &MessageComponentInteractionData,
	responder: &mut InteractionResponder,
	context: &BotContext,
) -> miette::Result<()> {
	let custom_id_path: Vec<String> = interaction_data.custom_id.split('/').map(|s| s.to_string()).collect();

	match custom_id_path.first().map(|s| s.as_str()) {
		Some("giveaway") => giveaway_entry::handle_entry(interaction, &custom_id_path, responder, context).await,
		Some("ticket") => {
			ticket_menu::handle_menu_selection(interaction, interaction_data, &custom_id_path, responder, context)
				.await
		}
		_ => {
			tracing::debug!(custom_id = %interaction_data.custom_id, "Ignoring a component interaction the bot doesn't recognize");
			Ok(())
		}
	}
}
