// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Duration, TimeZone, Utc};
use twilight_model::util::datetime::{Timestamp, TimestampParseError};
use twilight_util::snowflake::Snowflake;

/// Gets the timestamp from the ID snowflake. If any failures occur in the conversion, returns `None`.
pub fn datetime_from_id(id: impl Snowflake) -> Option<DateTime<Utc>> {
	let timestamp = id.timestamp();
	Utc.timestamp_millis_opt(timestamp).single()
}

/// Gets a [Timestamp] object from the ID snowflake.
pub fn timestamp_from_id(id: impl Snowflake) -> Result<Timestamp, TimestampParseError> {
	Timestamp::from_micros(id.timestamp() * 1000)
}

/// Gets the moment the given number of milliseconds from now. Offsets that would land
/// outside the representable date range fall back to one hour from now.
pub fn datetime_millis_from_now(millis: i64) -> DateTime<Utc> {
	let now = Utc::now();
	now.checked_add_signed(Duration::milliseconds(millis))
		.or_else(|| now.checked_add_signed(Duration::hours(1)))
		.unwrap_or(now)
}

/// Gets a [Timestamp] object for the moment the given number of milliseconds from now.
pub fn timestamp_millis_from_now(millis: i64) -> Result<Timestamp, TimestampParseError> {
	Timestamp::from_micros(datetime_millis_from_now(millis).timestamp_micros())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::discord::utils::duration::parse_duration_millis;

	#[test]
	fn offsets_within_range_land_the_expected_distance_away() {
		let before = Utc::now();
		let target = datetime_millis_from_now(3_600_000);
		let measured = (target - before).num_milliseconds();
		assert!((3_600_000..3_601_000).contains(&measured));
	}

	#[test]
	fn offsets_past_the_calendar_edge_fall_back_to_one_hour_from_now() {
		let before = Utc::now();
		for millis in [i64::MAX, -8_640_000_000_000_000, parse_duration_millis("100000000d")] {
			let target = datetime_millis_from_now(millis);
			let measured = (target - before).num_milliseconds();
			assert!((3_600_000..3_601_000).contains(&measured));
		}
		assert!(timestamp_millis_from_now(parse_duration_millis("100000000d")).is_ok());
	}
}
