// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::COMMAND_FAILED;
use miette::IntoDiagnostic;
use std::sync::Arc;
use twilight_http::client::Client;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType};
use twilight_model::id::Id;
use twilight_model::id::marker::{ApplicationMarker, InteractionMarker};
use twilight_util::builder::InteractionResponseDataBuilder;

/// Sends the replies for a single interaction. An interaction accepts only one initial
/// response, so the first [send](Self::send) creates the interaction response and every
/// send after that becomes a follow-up message on the same token.
pub struct InteractionResponder {
	http_client: Arc<Client>,
	application_id: Id<ApplicationMarker>,
	interaction_id: Id<InteractionMarker>,
	interaction_token: String,
	responded: bool,
}

impl InteractionResponder {
	pub fn new(
		http_client: Arc<Client>,
		application_id: Id<ApplicationMarker>,
		interaction: &InteractionCreate,
	) -> Self {
		Self {
			http_client,
			application_id,
			interaction_id: interaction.id,
			interaction_token: interaction.token.clone(),
			responded: false,
		}
	}

	/// Whether the initial response for this interaction has already been used.
	pub fn responded(&self) -> bool {
		self.responded
	}

	pub async fn send(&mut self, data: InteractionResponseData) -> miette::Result<()> {
		let interaction_client = self.http_client.interaction(self.application_id);
		if self.responded {
			let mut followup = interaction_client.create_followup(&self.interaction_token);
			if let Some(content) = &data.content {
				followup = followup.content(content);
			}
			if let Some(embeds) = &data.embeds {
				followup = followup.embeds(embeds);
			}
			if let Some(components) = &data.components {
				followup = followup.components(components);
			}
			if let Some(flags) = data.flags {
				followup = followup.flags(flags);
			}
			followup
				.allowed_mentions(data.allowed_mentions.as_ref())
				.await
				.into_diagnostic()?;
			return Ok(());
		}

		let response = InteractionResponse {
			kind: InteractionResponseType::ChannelMessageWithSource,
			data: Some(data),
		};
		interaction_client
			.create_response(self.interaction_id, &self.interaction_token, &response)
			.await
			.into_diagnostic()?;
		self.responded = true;
		Ok(())
	}

	/// Tells the invoking user that their interaction failed. Sent as the initial response
	/// when one hasn't gone out yet and as a follow-up otherwise; if the notice itself can't
	/// be delivered, the failure is only logged.
	pub async fn send_failure_notice(&mut self) {
		let notice = InteractionResponseDataBuilder::new()
			.content(COMMAND_FAILED)
			.flags(MessageFlags::EPHEMERAL)
			.build();
		if let Err(error) = self.send(notice).await {
			tracing::debug!(source = ?error, "Failed to deliver an interaction failure notice");
		}
	}
}
