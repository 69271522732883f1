use std::sync::OnceLock;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use ::uuid::{Builder, Uuid};

/// Supported UUID layouts.
///
/// Unrecognized version tags deserialize to [`UuidVersion::V4`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UuidVersion {
	/// Time-based, RFC 4122 timestamp + node layout.
	V1,
	/// Random-based.
	#[default]
	V4,
}

impl From<&str> for UuidVersion {
	fn from(tag: &str) -> Self {
		if tag.eq_ignore_ascii_case("v1") {
			UuidVersion::V1
		} else {
			if !tag.eq_ignore_ascii_case("v4") {
				debug!("unknown uuid version '{tag}', using v4");
			}
			UuidVersion::V4
		}
	}
}

impl From<String> for UuidVersion {
	fn from(tag: String) -> Self {
		Self::from(tag.as_str())
	}
}

/// UUID options as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UuidParams {
	pub version: Option<UuidVersion>,
}

/// Node id used for every v1 UUID of this process.
///
/// Random, with the multicast bit set so it can never collide with a real
/// IEEE 802 MAC address.
fn node_id() -> &'static [u8; 6] {
	static NODE_ID: OnceLock<[u8; 6]> = OnceLock::new();
	NODE_ID.get_or_init(|| {
		let mut id: [u8; 6] = rand::rng().random();
		id[0] |= 0x01;
		id
	})
}

/// Generates a canonical, lowercase, hyphenated UUID string.
///
/// - `V4` draws its 122 random bits from `rng`.
/// - `V1` uses the current time and the per-process node id; `rng` is unused.
pub fn generate_uuid<R: Rng + ?Sized>(version: UuidVersion, rng: &mut R) -> String {
	let uuid = match version {
		UuidVersion::V1 => Uuid::now_v1(node_id()),
		UuidVersion::V4 => Builder::from_random_bytes(rng.random()).into_uuid(),
	};
	uuid.hyphenated().to_string()
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;
	use rstest::rstest;

	use super::*;

	fn assert_canonical(uuid: &str, version: char) {
		assert_eq!(uuid.len(), 36, "{uuid}");
		for (i, c) in uuid.chars().enumerate() {
			match i {
				8 | 13 | 18 | 23 => assert_eq!(c, '-', "{uuid}"),
				_ => assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase(), "{uuid}"),
			}
		}
		assert_eq!(uuid.chars().nth(14), Some(version), "{uuid}");
		assert!(matches!(uuid.chars().nth(19), Some('8' | '9' | 'a' | 'b')), "{uuid}");
	}

	#[test]
	fn ten_thousand_v4_are_valid_and_unique() {
		let mut rng = ChaCha8Rng::seed_from_u64(2024);
		let mut seen = HashSet::new();
		for _ in 0..10_000 {
			let uuid = generate_uuid(UuidVersion::V4, &mut rng);
			assert_canonical(&uuid, '4');
			assert!(seen.insert(uuid));
		}
	}

	#[test]
	fn v1_has_time_layout() {
		let mut rng = ChaCha8Rng::seed_from_u64(1);
		let first = generate_uuid(UuidVersion::V1, &mut rng);
		let second = generate_uuid(UuidVersion::V1, &mut rng);
		assert_canonical(&first, '1');
		assert_canonical(&second, '1');
		assert_ne!(first, second);
		// same process, same node
		assert_eq!(first[24..], second[24..]);
	}

	#[rstest]
	#[case("v1", UuidVersion::V1)]
	#[case("V1", UuidVersion::V1)]
	#[case("v4", UuidVersion::V4)]
	#[case("v7", UuidVersion::V4)]
	#[case("", UuidVersion::V4)]
	fn version_tags_fall_back_to_v4(#[case] tag: &str, #[case] expected: UuidVersion) {
		assert_eq!(UuidVersion::from(tag), expected);
	}
}
