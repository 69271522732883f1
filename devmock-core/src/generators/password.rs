use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// A named character class and its fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
	Lowercase,
	Uppercase,
	Numbers,
	Symbols,
}

impl CharClass {
	/// Every class, in pool order.
	pub const ALL: [CharClass; 4] = [CharClass::Lowercase, CharClass::Uppercase, CharClass::Numbers, CharClass::Symbols];

	/// Characters contributed by this class.
	pub fn alphabet(&self) -> &'static str {
		match self {
			CharClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
			CharClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
			CharClass::Numbers => "0123456789",
			CharClass::Symbols => "!@#$%^&*()_+~`|}{[]:;?><,./-=",
		}
	}
}

/// Ordered set of character classes making up a password pool.
///
/// # Invariants
/// - Classes appear in [`CharClass::ALL`] order.
/// - A class appears at most once.
///
/// Characters are not deduplicated across classes: a character present in
/// two alphabets would be sampled twice as often. The bundled alphabets are
/// disjoint, so this never happens with the built-in classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetSpec {
	classes: Vec<CharClass>,
}

impl CharsetSpec {
	/// Selects the classes enabled in `options`.
	pub fn from_options(options: &PasswordOptions) -> Self {
		let enabled = |class: &CharClass| match class {
			CharClass::Lowercase => options.lowercase,
			CharClass::Uppercase => options.uppercase,
			CharClass::Numbers => options.numbers,
			CharClass::Symbols => options.symbols,
		};
		Self { classes: CharClass::ALL.into_iter().filter(enabled).collect() }
	}

	pub fn classes(&self) -> &[CharClass] {
		&self.classes
	}

	/// Concatenates the alphabets of all selected classes.
	pub fn pool(&self) -> Vec<char> {
		self.classes.iter().flat_map(|class| class.alphabet().chars()).collect()
	}
}

/// Validated password options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
	pub length: usize,
	pub lowercase: bool,
	pub uppercase: bool,
	pub numbers: bool,
	pub symbols: bool,
}

impl Default for PasswordOptions {
	/// 16 characters drawn from all four classes.
	fn default() -> Self {
		Self { length: 16, lowercase: true, uppercase: true, numbers: true, symbols: true }
	}
}

/// Password options as received on the wire; absent fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordParams {
	pub length: Option<i64>,
	pub lowercase: Option<bool>,
	pub uppercase: Option<bool>,
	pub numbers: Option<bool>,
	pub symbols: Option<bool>,
}

impl PasswordParams {
	/// Merges the request with `defaults` and checks the length.
	///
	/// # Errors
	/// Returns [`GenerationError::InvalidOption`] if `length` is not in
	/// `1..=max_length`.
	pub fn resolve(&self, defaults: &PasswordOptions, max_length: usize) -> Result<PasswordOptions, GenerationError> {
		let length = match self.length {
			None => defaults.length,
			Some(length) => usize::try_from(length)
				.ok()
				.filter(|length| *length > 0)
				.ok_or_else(|| GenerationError::invalid("length", format!("must be at least 1, got {length}")))?,
		};
		if length > max_length {
			return Err(GenerationError::invalid("length", format!("must be at most {max_length}, got {length}")));
		}
		Ok(PasswordOptions {
			length,
			lowercase: self.lowercase.unwrap_or(defaults.lowercase),
			uppercase: self.uppercase.unwrap_or(defaults.uppercase),
			numbers: self.numbers.unwrap_or(defaults.numbers),
			symbols: self.symbols.unwrap_or(defaults.symbols),
		})
	}
}

/// Generates a password of exactly `options.length` characters.
///
/// Each character is drawn independently and uniformly from the pool, with
/// replacement.
///
/// # Errors
/// Returns [`GenerationError::InvalidOption`] if the length is zero or every
/// class is disabled.
pub fn generate_password<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> Result<String, GenerationError> {
	if options.length == 0 {
		return Err(GenerationError::invalid("length", "must be at least 1"));
	}
	let pool = CharsetSpec::from_options(options).pool();
	if pool.is_empty() {
		return Err(GenerationError::invalid("charset", "at least one character class must be enabled"));
	}

	Ok((0..options.length).filter_map(|_| pool.choose(rng).copied()).collect())
}
