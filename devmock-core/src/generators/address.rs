use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::locale::{DEFAULT_LOCALE, LocaleField, LocaleProvider};

/// Substituted when a locale cannot supply a state.
pub const STATE_PLACEHOLDER: &str = "N/A";
/// Substituted when a locale cannot supply a postal code.
pub const ZIP_PLACEHOLDER: &str = "00000";
/// Country label of the fallback address.
pub const FALLBACK_COUNTRY: &str = "Error (Fallback)";

/// A structured postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
	pub street: String,
	pub city: String,
	pub state: String,
	pub zip: String,
	pub country: String,
}

impl Address {
	/// Hardcoded address returned when locale sampling fails.
	pub fn fallback() -> Self {
		Self {
			street: "123 Main St".to_owned(),
			city: "New York".to_owned(),
			state: "NY".to_owned(),
			zip: "10001".to_owned(),
			country: FALLBACK_COUNTRY.to_owned(),
		}
	}

	/// `"{street}, {city}, {state} {zip}"`
	pub fn local_line(&self) -> String {
		format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
	}

	/// `"{street}, {city}, {state} {zip}, {country}"`
	pub fn full_line(&self) -> String {
		format!("{}, {}", self.local_line(), self.country)
	}
}

/// Whether a state is rendered as an abbreviation or a full name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateStyle {
	#[default]
	Abbreviated,
	Full,
}

impl StateStyle {
	fn field(&self) -> LocaleField {
		match self {
			StateStyle::Abbreviated => LocaleField::State,
			StateStyle::Full => LocaleField::StateName,
		}
	}
}

/// Validated address options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressOptions {
	pub locale_code: String,
	pub state_style: StateStyle,
}

impl AddressOptions {
	pub fn new(locale_code: impl Into<String>) -> Self {
		Self { locale_code: locale_code.into(), state_style: StateStyle::default() }
	}

	pub fn with_state_style(mut self, state_style: StateStyle) -> Self {
		self.state_style = state_style;
		self
	}
}

/// Address options as received on the wire; `countryCode` is an alias of
/// `localeCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressParams {
	#[serde(alias = "countryCode")]
	pub locale_code: Option<String>,
	pub state_style: Option<StateStyle>,
}

impl AddressParams {
	pub fn resolve(&self, default_locale: &str) -> AddressOptions {
		let locale_code = self.locale_code.as_deref().unwrap_or(default_locale);
		AddressOptions::new(locale_code).with_state_style(self.state_style.unwrap_or_default())
	}
}

/// Result of an address generation.
///
/// `Degraded` carries the fixed fallback address together with the failure
/// that forced it; callers may surface or log the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressOutcome {
	Generated(Address),
	Degraded { address: Address, reason: DataError },
}

impl AddressOutcome {
	pub fn address(&self) -> &Address {
		match self {
			AddressOutcome::Generated(address) | AddressOutcome::Degraded { address, .. } => address,
		}
	}

	pub fn into_address(self) -> Address {
		match self {
			AddressOutcome::Generated(address) | AddressOutcome::Degraded { address, .. } => address,
		}
	}

	pub fn is_degraded(&self) -> bool {
		matches!(self, AddressOutcome::Degraded { .. })
	}

	/// One-line rendering: with the country for generated addresses, without
	/// it for the fallback.
	pub fn line(&self) -> String {
		match self {
			AddressOutcome::Generated(address) => address.full_line(),
			AddressOutcome::Degraded { address, .. } => address.local_line(),
		}
	}
}

/// Address as returned to clients: a one-line rendering plus its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressCard {
	pub address: String,
	pub details: Address,
}

impl From<AddressOutcome> for AddressCard {
	fn from(outcome: AddressOutcome) -> Self {
		Self { address: outcome.line(), details: outcome.into_address() }
	}
}

/// Samples one field, or substitutes `placeholder` if the locale lacks it.
fn sample_or<P, R>(provider: &P, code: &str, field: LocaleField, placeholder: &str, rng: &mut R) -> Result<String, DataError>
where
	P: LocaleProvider + ?Sized,
	R: Rng + ?Sized,
{
	if provider.supports(code, field) {
		provider.sample(code, field, rng)
	} else {
		Ok(placeholder.to_owned())
	}
}

fn sample_address<P, R>(options: &AddressOptions, provider: &P, rng: &mut R) -> Result<Address, DataError>
where
	P: LocaleProvider + ?Sized,
	R: Rng + ?Sized,
{
	let requested = options.locale_code.as_str();
	let profile = provider
		.profile(requested)
		.or_else(|| {
			debug!("unknown locale '{requested}', using {DEFAULT_LOCALE}");
			provider.profile(DEFAULT_LOCALE)
		})
		.ok_or_else(|| DataError::UnsupportedLocale { code: requested.to_owned() })?;
	let code = profile.code;

	Ok(Address {
		street: provider.sample(code, LocaleField::Street, rng)?,
		city: provider.sample(code, LocaleField::City, rng)?,
		state: sample_or(provider, code, options.state_style.field(), STATE_PLACEHOLDER, rng)?,
		zip: sample_or(provider, code, LocaleField::Zip, ZIP_PLACEHOLDER, rng)?,
		country: profile.country_name.to_owned(),
	})
}

/// Generates an address for the requested locale.
///
/// # Behavior
/// - Unknown locale codes resolve to [`DEFAULT_LOCALE`].
/// - Fields the locale cannot supply get [`STATE_PLACEHOLDER`] or
///   [`ZIP_PLACEHOLDER`].
/// - Any sampling failure yields [`AddressOutcome::Degraded`] with
///   [`Address::fallback`]. The failure is logged, never returned.
pub fn generate_address<P, R>(options: &AddressOptions, provider: &P, rng: &mut R) -> AddressOutcome
where
	P: LocaleProvider + ?Sized,
	R: Rng + ?Sized,
{
	match sample_address(options, provider, rng) {
		Ok(address) => AddressOutcome::Generated(address),
		Err(reason) => {
			warn!("address generation for '{}' degraded: {reason}", options.locale_code);
			AddressOutcome::Degraded { address: Address::fallback(), reason }
		}
	}
}
