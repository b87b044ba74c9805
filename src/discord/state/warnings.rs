// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use twilight_model::id::Id;
use twilight_model::id::marker::UserMarker;

/// A single warning issued to a user.
#[derive(Clone, Debug)]
pub struct Warning {
	pub reason: String,
	pub moderator: String,
	pub warned_at: DateTime<Utc>,
}

/// Warnings issued to users, in the order they were issued. Records only accumulate;
/// there's no operation to clear them.
#[derive(Debug, Default)]
pub struct WarningStore {
	warnings: RwLock<HashMap<Id<UserMarker>, Vec<Warning>>>,
}

impl WarningStore {
	/// Appends a warning to the user's record and returns how many warnings the user
	/// now has.
	pub async fn add(&self, user_id: Id<UserMarker>, warning: Warning) -> usize {
		let mut warnings = self.warnings.write().await;
		let user_warnings = warnings.entry(user_id).or_default();
		user_warnings.push(warning);
		user_warnings.len()
	}

	pub async fn for_user(&self, user_id: Id<UserMarker>) -> Vec<Warning> {
		let warnings = self.warnings.read().await;
		warnings.get(&user_id).cloned().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn warning(reason: &str) -> Warning {
		Warning {
			reason: String::from(reason),
			moderator: String::from("shepherd"),
			warned_at: Utc::now(),
		}
	}

	#[tokio::test]
	async fn warnings_accumulate_per_user_in_order() {
		let store = WarningStore::default();
		assert_eq!(store.add(Id::new(1), warning("spam")).await, 1);
		assert_eq!(store.add(Id::new(1), warning("more spam")).await, 2);
		assert_eq!(store.add(Id::new(2), warning("rude")).await, 1);

		let first_user_warnings = store.for_user(Id::new(1)).await;
		assert_eq!(first_user_warnings.len(), 2);
		assert_eq!(first_user_warnings[0].reason, "spam");
		assert_eq!(first_user_warnings[1].reason, "more spam");
	}

	#[tokio::test]
	async fn users_without_warnings_have_an_empty_record() {
		let store = WarningStore::default();
		assert!(store.for_user(Id::new(5)).await.is_empty());
	}
}
