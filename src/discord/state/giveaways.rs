// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use rand::seq::index;
use std::collections::HashMap;
use tokio::sync::RwLock;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, MessageMarker, UserMarker};

/// A giveaway that's open for entries. Keyed in the store by the ID of the message
/// carrying its entry button.
#[derive(Clone, Debug)]
pub struct Giveaway {
	pub prize: String,
	pub duration_display: String,
	pub winner_count: i64,
	pub end_time: DateTime<Utc>,
	pub entrants: Vec<Id<UserMarker>>,
	pub channel: Id<ChannelMarker>,
	pub guild: Id<GuildMarker>,
}

/// What happened to an attempt to enter a giveaway.
#[derive(Debug, Eq, PartialEq)]
pub enum EntryOutcome {
	Entered,
	AlreadyEntered,
	NotFound,
}

/// What happened to an attempt to draw a giveaway's winners.
#[derive(Debug, Eq, PartialEq)]
pub enum ResolveOutcome {
	Winners(Vec<Id<UserMarker>>),
	NoEntrants,
	NotFound,
}

/// All giveaways that are open for entries. Nothing removes giveaways or draws their
/// winners on a schedule; they remain open until the process ends.
#[derive(Debug, Default)]
pub struct GiveawayStore {
	giveaways: RwLock<HashMap<Id<MessageMarker>, Giveaway>>,
}

impl GiveawayStore {
	pub async fn create(&self, message_id: Id<MessageMarker>, giveaway: Giveaway) {
		let mut giveaways = self.giveaways.write().await;
		giveaways.insert(message_id, giveaway);
	}

	/// Records a user's entry into the giveaway attached to the given message. The
	/// membership check and the insertion happen under a single write lock, so the same
	/// user can't enter twice no matter how entry events interleave.
	pub async fn enter(&self, message_id: Id<MessageMarker>, user_id: Id<UserMarker>) -> EntryOutcome {
		let mut giveaways = self.giveaways.write().await;
		let Some(giveaway) = giveaways.get_mut(&message_id) else {
			return EntryOutcome::NotFound;
		};
		if giveaway.entrants.contains(&user_id) {
			return EntryOutcome::AlreadyEntered;
		}
		giveaway.entrants.push(user_id);
		EntryOutcome::Entered
	}

	/// Snapshots every giveaway currently accepting entries, soonest ending first.
	pub async fn active(&self) -> Vec<Giveaway> {
		let giveaways = self.giveaways.read().await;
		let mut active: Vec<Giveaway> = giveaways.values().cloned().collect();
		active.sort_by_key(|giveaway| giveaway.end_time);
		active
	}

	/// Draws winners for the giveaway attached to the given message: up to its configured
	/// winner count of distinct entrants, picked uniformly. The giveaway stays in the
	/// store afterward, so it can be drawn again.
	pub async fn resolve(&self, message_id: Id<MessageMarker>) -> ResolveOutcome {
		let giveaways = self.giveaways.read().await;
		let Some(giveaway) = giveaways.get(&message_id) else {
			return ResolveOutcome::NotFound;
		};
		if giveaway.entrants.is_empty() {
			return ResolveOutcome::NoEntrants;
		}
		let draw_count = usize::try_from(giveaway.winner_count)
			.unwrap_or(1)
			.min(giveaway.entrants.len());
		let mut rng = rand::rng();
		let winners = index::sample(&mut rng, giveaway.entrants.len(), draw_count)
			.into_iter()
			.map(|entrant_index| giveaway.entrants[entrant_index])
			.collect();
		ResolveOutcome::Winners(winners)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::discord::utils::duration::parse_duration_millis;
	use crate::discord::utils::timestamp::datetime_millis_from_now;

	fn test_giveaway(winner_count: i64) -> Giveaway {
		Giveaway {
			prize: String::from("Gift"),
			duration_display: String::from("1h"),
			winner_count,
			end_time: datetime_millis_from_now(parse_duration_millis("1h")),
			entrants: Vec::new(),
			channel: Id::new(100),
			guild: Id::new(200),
		}
	}

	#[tokio::test]
	async fn created_giveaways_start_with_no_entrants() {
		let store = GiveawayStore::default();
		let created_at = Utc::now();
		store.create(Id::new(1), test_giveaway(2)).await;

		let active = store.active().await;
		assert_eq!(active.len(), 1);
		assert_eq!(active[0].prize, "Gift");
		assert_eq!(active[0].winner_count, 2);
		assert!(active[0].entrants.is_empty());
		let millis_until_end = (active[0].end_time - created_at).num_milliseconds();
		assert!((3_599_000..=3_601_000).contains(&millis_until_end));
	}

	#[tokio::test]
	async fn entering_twice_records_one_entry() {
		let store = GiveawayStore::default();
		store.create(Id::new(1), test_giveaway(1)).await;

		assert_eq!(store.enter(Id::new(1), Id::new(10)).await, EntryOutcome::Entered);
		assert_eq!(store.enter(Id::new(1), Id::new(10)).await, EntryOutcome::AlreadyEntered);
		assert_eq!(store.enter(Id::new(1), Id::new(11)).await, EntryOutcome::Entered);

		let active = store.active().await;
		assert_eq!(active[0].entrants.len(), 2);
	}

	#[tokio::test]
	async fn entering_an_unknown_giveaway_is_rejected() {
		let store = GiveawayStore::default();
		assert_eq!(store.enter(Id::new(404), Id::new(10)).await, EntryOutcome::NotFound);
	}

	#[tokio::test]
	async fn entering_becomes_possible_once_the_giveaway_is_registered() {
		let store = GiveawayStore::default();
		assert_eq!(store.enter(Id::new(1), Id::new(10)).await, EntryOutcome::NotFound);

		store.create(Id::new(1), test_giveaway(1)).await;
		assert_eq!(store.enter(Id::new(1), Id::new(10)).await, EntryOutcome::Entered);
	}

	#[tokio::test]
	async fn drawing_picks_distinct_entrants_up_to_the_winner_count() {
		let store = GiveawayStore::default();
		store.create(Id::new(1), test_giveaway(2)).await;
		for user in 10..15 {
			store.enter(Id::new(1), Id::new(user)).await;
		}

		let ResolveOutcome::Winners(winners) = store.resolve(Id::new(1)).await else {
			panic!("expected winners to be drawn");
		};
		assert_eq!(winners.len(), 2);
		assert_ne!(winners[0], winners[1]);

		// The giveaway can still be drawn again.
		assert!(matches!(store.resolve(Id::new(1)).await, ResolveOutcome::Winners(_)));
	}

	#[tokio::test]
	async fn drawing_more_winners_than_entrants_returns_everyone() {
		let store = GiveawayStore::default();
		store.create(Id::new(1), test_giveaway(10)).await;
		store.enter(Id::new(1), Id::new(10)).await;
		store.enter(Id::new(1), Id::new(11)).await;

		let ResolveOutcome::Winners(winners) = store.resolve(Id::new(1)).await else {
			panic!("expected winners to be drawn");
		};
		assert_eq!(winners.len(), 2);
	}

	#[tokio::test]
	async fn drawing_without_entrants_or_a_giveaway_reports_why() {
		let store = GiveawayStore::default();
		store.create(Id::new(1), test_giveaway(1)).await;

		assert_eq!(store.resolve(Id::new(1)).await, ResolveOutcome::NoEntrants);
		assert_eq!(store.resolve(Id::new(2)).await, ResolveOutcome::NotFound);
	}
}
