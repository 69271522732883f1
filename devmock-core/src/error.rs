//! Error types for the generators.
//!
//! Option validation failures are surfaced to the caller as
//! [`GenerationError`]. Locale data failures are reported as [`DataError`] and
//! never leave the address generator: they are folded into a degraded result.

use thiserror::Error;

use crate::locale::LocaleField;

/// Errors returned to callers when a request cannot be honoured.
///
/// A failed call never yields a partially-populated result: it is either a
/// complete value or one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
	/// A numeric or enumerated option is malformed or out of range.
	#[error("invalid option '{option}': {reason}")]
	InvalidOption {
		/// Wire name of the offending option.
		option: &'static str,
		/// Human-readable description of the problem.
		reason: String,
	},

	/// A required text input is missing or empty.
	#[error("'{field}' is required and must not be empty")]
	EmptyInput {
		/// Wire name of the missing field.
		field: &'static str,
	},

	/// The value was generated but could not be encoded for output.
	#[error("could not render result: {reason}")]
	Render {
		/// Underlying encoder error.
		reason: String,
	},
}

impl GenerationError {
	pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
		Self::InvalidOption { option, reason: reason.into() }
	}
}

/// Failures raised by a [`LocaleProvider`](crate::locale::LocaleProvider)
/// while sampling locale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
	/// The provider knows nothing about the requested locale.
	#[error("unsupported locale '{code}'")]
	UnsupportedLocale {
		/// Requested locale code.
		code: String,
	},

	/// The locale exists but cannot supply this field.
	#[error("locale '{code}' does not provide '{field}'")]
	MissingField {
		/// Locale code.
		code: String,
		/// Field that was requested.
		field: LocaleField,
	},

	/// The locale advertises the field but its table is empty.
	#[error("locale '{code}' has no data for '{field}'")]
	EmptyTable {
		/// Locale code.
		code: String,
		/// Field whose table is empty.
		field: LocaleField,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_option_formats_correctly() {
		let err = GenerationError::invalid("length", "must be at least 1");
		assert_eq!(err.to_string(), "invalid option 'length': must be at least 1");
	}

	#[test]
	fn empty_input_formats_correctly() {
		let err = GenerationError::EmptyInput { field: "text" };
		assert_eq!(err.to_string(), "'text' is required and must not be empty");
	}

	#[test]
	fn render_failure_formats_correctly() {
		let err = GenerationError::Render { reason: "buffer full".to_owned() };
		assert_eq!(err.to_string(), "could not render result: buffer full");
	}

	#[test]
	fn missing_field_formats_correctly() {
		let err = DataError::MissingField { code: "GB".to_owned(), field: LocaleField::State };
		assert_eq!(err.to_string(), "locale 'GB' does not provide 'state'");
	}

	#[test]
	fn unsupported_locale_formats_correctly() {
		let err = DataError::UnsupportedLocale { code: "XX".to_owned() };
		assert_eq!(err.to_string(), "unsupported locale 'XX'");
	}
}
