use fake::Fake;
use fake::faker::lorem::raw::Word;
use fake::locales::EN;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

const SENTENCE_WORDS: (usize, usize) = (4, 12);
const PARAGRAPH_SENTENCES: (usize, usize) = (3, 6);
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Granularity of generated filler text.
///
/// Unrecognized units resolve to [`LoremUnit::Paragraphs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LoremUnit {
	Words,
	Sentences,
	#[default]
	Paragraphs,
}

impl From<&str> for LoremUnit {
	fn from(unit: &str) -> Self {
		match unit.to_ascii_lowercase().as_str() {
			"words" => LoremUnit::Words,
			"sentences" => LoremUnit::Sentences,
			"paragraphs" => LoremUnit::Paragraphs,
			other => {
				debug!("unknown lorem unit '{other}', using paragraphs");
				LoremUnit::Paragraphs
			}
		}
	}
}

impl From<String> for LoremUnit {
	fn from(unit: String) -> Self {
		Self::from(unit.as_str())
	}
}

/// Validated lorem options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoremOptions {
	pub count: usize,
	pub unit: LoremUnit,
}

impl Default for LoremOptions {
	/// Three paragraphs.
	fn default() -> Self {
		Self { count: 3, unit: LoremUnit::Paragraphs }
	}
}

/// Lorem options as received on the wire; `type` is an alias of `unit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoremParams {
	pub count: Option<i64>,
	#[serde(alias = "type")]
	pub unit: Option<LoremUnit>,
}

impl LoremParams {
	/// Merges the request with `defaults`.
	///
	/// # Errors
	/// Returns [`GenerationError::InvalidOption`] if `count` is not in
	/// `1..=max_count`.
	pub fn resolve(&self, defaults: &LoremOptions, max_count: usize) -> Result<LoremOptions, GenerationError> {
		let count = match self.count {
			None => defaults.count,
			Some(count) => usize::try_from(count)
				.ok()
				.filter(|count| *count > 0)
				.ok_or_else(|| GenerationError::invalid("count", format!("must be at least 1, got {count}")))?,
		};
		if count > max_count {
			return Err(GenerationError::invalid("count", format!("must be at most {max_count}, got {count}")));
		}
		Ok(LoremOptions { count, unit: self.unit.unwrap_or(defaults.unit) })
	}
}

fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
	Word(EN).fake_with_rng(rng)
}

fn words<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
	(0..count).map(|_| word(rng)).collect()
}

fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
	let count = rng.random_range(SENTENCE_WORDS.0..=SENTENCE_WORDS.1);
	let mut text = words(count, rng).join(" ");
	if let Some(first) = text.chars().next() {
		let upper: String = first.to_uppercase().collect();
		text.replace_range(..first.len_utf8(), &upper);
	}
	text.push('.');
	text
}

fn sentences<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
	(0..count).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}

fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
	let count = rng.random_range(PARAGRAPH_SENTENCES.0..=PARAGRAPH_SENTENCES.1);
	sentences(count, rng)
}

/// Generates `count` units of pseudo-Latin filler.
///
/// - words are separated by a single space,
/// - sentences are capitalized, end with a period and are separated by a space,
/// - paragraphs are separated by a blank line.
///
/// # Errors
/// Returns [`GenerationError::InvalidOption`] if `count` is zero.
pub fn generate_lorem<R: Rng + ?Sized>(options: &LoremOptions, rng: &mut R) -> Result<String, GenerationError> {
	if options.count == 0 {
		return Err(GenerationError::invalid("count", "must be at least 1"));
	}
	Ok(match options.unit {
		LoremUnit::Words => words(options.count, rng).join(" "),
		LoremUnit::Sentences => sentences(options.count, rng),
		LoremUnit::Paragraphs => (0..options.count)
			.map(|_| paragraph(rng))
			.collect::<Vec<_>>()
			.join(PARAGRAPH_SEPARATOR),
	})
}
