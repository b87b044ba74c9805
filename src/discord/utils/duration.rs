// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parses a short duration token (e.g. "30m", "2h", "1d") into a number of milliseconds.
/// The final character picks the unit; the characters before it are the magnitude.
/// Tokens with an unrecognized unit, an unparsable magnitude, or a magnitude too large to
/// scale become one hour, so every input produces a usable duration.
pub fn parse_duration_millis(token: &str) -> i64 {
	let mut magnitude_chars = token.chars();
	let Some(unit) = magnitude_chars.next_back() else {
		return MILLIS_PER_HOUR;
	};
	let unit_millis = match unit.to_ascii_lowercase() {
		'm' => MILLIS_PER_MINUTE,
		'h' => MILLIS_PER_HOUR,
		'd' => MILLIS_PER_DAY,
		_ => return MILLIS_PER_HOUR,
	};
	let Ok(magnitude) = magnitude_chars.as_str().parse::<i64>() else {
		return MILLIS_PER_HOUR;
	};
	magnitude.checked_mul(unit_millis).unwrap_or(MILLIS_PER_HOUR)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn minutes_hours_and_days_scale_by_their_unit() {
		assert_eq!(parse_duration_millis("30m"), 30 * MILLIS_PER_MINUTE);
		assert_eq!(parse_duration_millis("2h"), 2 * MILLIS_PER_HOUR);
		assert_eq!(parse_duration_millis("1d"), MILLIS_PER_DAY);
		assert_eq!(parse_duration_millis("45M"), 45 * MILLIS_PER_MINUTE);
		assert_eq!(parse_duration_millis("7D"), 7 * MILLIS_PER_DAY);
	}

	#[test]
	fn unknown_units_become_one_hour() {
		assert_eq!(parse_duration_millis("30x"), MILLIS_PER_HOUR);
		assert_eq!(parse_duration_millis("15"), MILLIS_PER_HOUR);
	}

	#[test]
	fn garbled_magnitudes_become_one_hour() {
		assert_eq!(parse_duration_millis("m"), MILLIS_PER_HOUR);
		assert_eq!(parse_duration_millis("1.5h"), MILLIS_PER_HOUR);
		assert_eq!(parse_duration_millis("lots of m"), MILLIS_PER_HOUR);
	}

	#[test]
	fn magnitudes_too_large_to_scale_become_one_hour() {
		assert_eq!(parse_duration_millis("200000000000000000d"), MILLIS_PER_HOUR);
		assert_eq!(parse_duration_millis("-200000000000000000d"), MILLIS_PER_HOUR);
		assert_eq!(parse_duration_millis("9223372036854775807m"), MILLIS_PER_HOUR);
	}

	#[test]
	fn empty_tokens_become_one_hour() {
		assert_eq!(parse_duration_millis(""), MILLIS_PER_HOUR);
	}

	#[test]
	fn signed_magnitudes_parse_as_written() {
		assert_eq!(parse_duration_millis("-5m"), -5 * MILLIS_PER_MINUTE);
		assert_eq!(parse_duration_millis("+5m"), 5 * MILLIS_PER_MINUTE);
		assert_eq!(parse_duration_millis("0h"), 0);
	}
}
