// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigDocument;
use crate::discord::state::Stores;
use crate::discord::utils::authorization::AuthorizationPolicy;
use std::sync::Arc;
use std::time::Instant;
use twilight_cache_inmemory::DefaultInMemoryCache;
use twilight_http::client::Client;
use twilight_model::id::Id;
use twilight_model::id::marker::ApplicationMarker;

/// The handles every interaction and event handler works with, assembled once when the
/// gateway connection starts.
pub struct BotContext {
	pub http_client: Arc<Client>,
	pub application_id: Id<ApplicationMarker>,
	pub cache: Arc<DefaultInMemoryCache>,
	pub stores: Stores,
	pub authorization: Arc<dyn AuthorizationPolicy>,
	pub config: Arc<ConfigDocument>,
	pub started_at: Instant,
}
