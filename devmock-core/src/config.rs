use serde::{Deserialize, Serialize};

use crate::generators::hash::HashAlgorithm;
use crate::generators::lorem::LoremOptions;
use crate::generators::password::PasswordOptions;
use crate::generators::uuid::UuidVersion;
use crate::locale::DEFAULT_LOCALE;

const MAX_PASSWORD_LENGTH: usize = 4096;
const MAX_LOREM_COUNT: usize = 500;

/// Every default applied to options a request leaves out.
///
/// Kept in one named object so that all call sites (HTTP routes, the
/// dispatcher, library users) agree. Every field is optional when
/// deserializing; missing ones keep their default.
///
/// # Defaults
/// - password: 16 characters, all four classes
/// - uuid: v4
/// - hash: SHA-256
/// - lorem: 3 paragraphs
/// - locale: US
/// - limits: passwords up to 4096 characters, lorem up to 500 units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
	pub password: PasswordOptions,
	pub uuid_version: UuidVersion,
	pub hash_algorithm: HashAlgorithm,
	pub lorem: LoremOptions,
	pub locale_code: String,
	/// Longest password a request may ask for.
	pub max_password_length: usize,
	/// Largest lorem `count` a request may ask for.
	pub max_lorem_count: usize,
}

impl Default for GeneratorDefaults {
	fn default() -> Self {
		Self {
			password: PasswordOptions::default(),
			uuid_version: UuidVersion::default(),
			hash_algorithm: HashAlgorithm::default(),
			lorem: LoremOptions::default(),
			locale_code: DEFAULT_LOCALE.to_owned(),
			max_password_length: MAX_PASSWORD_LENGTH,
			max_lorem_count: MAX_LOREM_COUNT,
		}
	}
}
