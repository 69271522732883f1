//! Locale data access for the address-producing generators.
//!
//! Generators never branch on a country code themselves. They ask a
//! [`LocaleProvider`] whether a field is available and, if so, to sample it.
//! Adding a locale is a matter of adding data to a provider.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::error::DataError;

/// The shipped provider, combining both sources below.
pub mod bundled;

/// Countries sampled from `fake` datasets.
pub mod faker_data;

/// Hand-kept tables for countries `fake` does not cover.
pub mod static_data;

pub use bundled::BundledLocales;
pub use faker_data::FakerLocaleData;
pub use static_data::StaticLocaleData;

/// Locale used when a request does not name one, or names an unknown one.
pub const DEFAULT_LOCALE: &str = "US";

/// Address sub-fields a locale may or may not be able to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocaleField {
	/// House number and street name.
	Street,
	/// City or town.
	City,
	/// Abbreviated state, province or region.
	State,
	/// Full state, province or region name.
	StateName,
	/// Postal code.
	Zip,
}

impl LocaleField {
	/// Wire-style name of the field.
	pub fn as_str(&self) -> &'static str {
		match self {
			LocaleField::Street => "street",
			LocaleField::City => "city",
			LocaleField::State => "state",
			LocaleField::StateName => "stateName",
			LocaleField::Zip => "zipCode",
		}
	}
}

impl fmt::Display for LocaleField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which optional address fields a locale's data can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
	pub state: bool,
	pub zip: bool,
}

/// Identity and capability set of one supported locale.
///
/// Profiles are looked up once per generator invocation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleProfile {
	/// Country code, e.g. `"US"`.
	pub code: &'static str,
	/// Human-readable country name used in rendered addresses.
	pub country_name: &'static str,
	pub capabilities: Capabilities,
}

/// Capability-queryable source of locale data.
///
/// # Contract
/// - `profile` returns `None` for locales the provider does not know.
/// - `supports` must return `false` for every field of an unknown locale.
/// - `sample` may fail for any reason; callers are expected to recover.
pub trait LocaleProvider {
	/// Looks up the profile of a locale by code (case-insensitive).
	fn profile(&self, code: &str) -> Option<LocaleProfile>;

	/// Returns whether the locale can supply `field`.
	fn supports(&self, code: &str, field: LocaleField) -> bool;

	/// Samples one value of `field` for the locale.
	///
	/// # Errors
	/// Returns a [`DataError`] if the locale is unknown, lacks the field,
	/// or its data is unusable.
	fn sample<R: Rng + ?Sized>(&self, code: &str, field: LocaleField, rng: &mut R) -> Result<String, DataError>;

	/// Lists every profile the provider can serve, in a stable order.
	fn profiles(&self) -> Vec<LocaleProfile>;
}
