use log::debug;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::error::GenerationError;

/// Non-keyed digest algorithms.
///
/// Matching is case-insensitive; unrecognized names resolve to SHA-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum HashAlgorithm {
	Md5,
	Sha1,
	#[default]
	Sha256,
	Sha512,
}

impl HashAlgorithm {
	/// Length of the hex-encoded digest.
	pub fn hex_len(&self) -> usize {
		match self {
			HashAlgorithm::Md5 => 32,
			HashAlgorithm::Sha1 => 40,
			HashAlgorithm::Sha256 => 64,
			HashAlgorithm::Sha512 => 128,
		}
	}
}

impl From<&str> for HashAlgorithm {
	fn from(name: &str) -> Self {
		match name.to_ascii_uppercase().as_str() {
			"MD5" => HashAlgorithm::Md5,
			"SHA1" => HashAlgorithm::Sha1,
			"SHA256" => HashAlgorithm::Sha256,
			"SHA512" => HashAlgorithm::Sha512,
			other => {
				debug!("unknown hash algorithm '{other}', using SHA256");
				HashAlgorithm::Sha256
			}
		}
	}
}

impl From<String> for HashAlgorithm {
	fn from(name: String) -> Self {
		Self::from(name.as_str())
	}
}

/// Hash options as received on the wire.
///
/// `type` is accepted as an alias of `algorithm`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HashParams {
	#[serde(default)]
	pub text: String,
	#[serde(alias = "type")]
	pub algorithm: Option<HashAlgorithm>,
}

/// Digests the UTF-8 bytes of `text` and returns lowercase hex.
///
/// # Errors
/// Returns [`GenerationError::EmptyInput`] if `text` is empty.
pub fn generate_hash(text: &str, algorithm: HashAlgorithm) -> Result<String, GenerationError> {
	if text.is_empty() {
		return Err(GenerationError::EmptyInput { field: "text" });
	}
	let bytes = text.as_bytes();
	Ok(match algorithm {
		HashAlgorithm::Md5 => hex::encode(Md5::digest(bytes)),
		HashAlgorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
		HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
		HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
	})
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(HashAlgorithm::Md5, "900150983cd24fb0d6963f7d28e17f72")]
	#[case(HashAlgorithm::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d")]
	#[case(HashAlgorithm::Sha256, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")]
	#[case(
		HashAlgorithm::Sha512,
		"ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
	)]
	fn abc_test_vectors(#[case] algorithm: HashAlgorithm, #[case] expected: &str) {
		let digest = generate_hash("abc", algorithm).expect("digest");
		assert_eq!(digest, expected);
		assert_eq!(digest.len(), algorithm.hex_len());
	}

	#[test]
	fn empty_text_is_rejected() {
		assert_eq!(generate_hash("", HashAlgorithm::Md5), Err(GenerationError::EmptyInput { field: "text" }));
	}

	#[test]
	fn multibyte_text_is_hashed_as_utf8() {
		let digest = generate_hash("héllo", HashAlgorithm::Sha256).expect("digest");
		assert_eq!(digest.len(), 64);
		assert_ne!(digest, generate_hash("hello", HashAlgorithm::Sha256).expect("digest"));
	}

	#[rstest]
	#[case("md5", HashAlgorithm::Md5)]
	#[case("Sha1", HashAlgorithm::Sha1)]
	#[case("SHA512", HashAlgorithm::Sha512)]
	#[case("whirlpool", HashAlgorithm::Sha256)]
	fn algorithm_names_are_case_insensitive(#[case] name: &str, #[case] expected: HashAlgorithm) {
		assert_eq!(HashAlgorithm::from(name), expected);
	}
}
