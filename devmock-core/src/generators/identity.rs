use chrono::{Datelike, Days, NaiveDate, Utc};
use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::{DomainSuffix, FreeEmailProvider, IPv4, MACAddress};
use fake::faker::job::raw::Title;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::error::GenerationError;
use crate::locale::{DEFAULT_LOCALE, LocaleProvider};
use super::address::{Address, AddressOptions, StateStyle, generate_address};
use super::password::{PasswordOptions, generate_password};

const GENDERS: [&str; 2] = ["female", "male"];
const USERNAME_SEPARATORS: [&str; 3] = [".", "_", ""];
const SSN_DIGITS: usize = 9;
const MIN_AGE_YEARS: u64 = 18;
const MAX_AGE_YEARS: u64 = 65;

/// Every attribute of a synthetic person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDetails {
	pub first_name: String,
	pub last_name: String,
	pub gender: String,
	pub birth_date: String,
	pub email: String,
	pub phone: String,
	pub username: String,
	pub password: String,
	pub ip: String,
	pub mac: String,
	pub company: String,
	pub job_title: String,
	pub website: String,
	/// Nine random digits; not a valid identifier of any kind.
	pub ssn: String,
	pub street: String,
	pub city: String,
	pub state: String,
	pub zip: String,
	pub country: String,
}

/// A synthetic person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
	pub name: String,
	/// `"{street}, {city}, {state} {zip}"`
	pub address: String,
	pub details: IdentityDetails,
}

/// Name and address parts of a [`NameAddress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAddressDetails {
	pub first_name: String,
	pub last_name: String,
	pub street: String,
	pub city: String,
	pub state: String,
	pub zip: String,
	pub country: String,
}

/// A person's name with a US postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAddress {
	pub name: String,
	/// `"{street}, {city}, {state} {zip}, {country}"`
	pub address: String,
	pub details: NameAddressDetails,
}

/// Lowercased name with whitespace removed, usable in emails and usernames.
fn handle(name: &str) -> String {
	name.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

fn digits<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
	(0..count).map(|_| char::from(b'0' + rng.random_range(0..10u8))).collect()
}

fn birth_date<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> String {
	let age_days = rng.random_range(MIN_AGE_YEARS * 365..=MAX_AGE_YEARS * 365);
	let date = today.checked_sub_days(Days::new(age_days)).unwrap_or(today);
	format!("{}/{}/{}", date.month(), date.day(), date.year())
}

fn email<R: Rng + ?Sized>(first: &str, last: &str, rng: &mut R) -> String {
	let provider: String = FreeEmailProvider(EN).fake_with_rng(rng);
	let suffix = rng.random_range(1..100u8);
	format!("{}.{}{suffix}@{provider}", handle(first), handle(last))
}

fn username<R: Rng + ?Sized>(first: &str, last: &str, rng: &mut R) -> String {
	let separator = USERNAME_SEPARATORS.choose(rng).copied().unwrap_or("");
	let suffix = rng.random_range(1..100u8);
	format!("{}{separator}{}{suffix}", handle(first), handle(last))
}

fn website<R: Rng + ?Sized>(rng: &mut R) -> String {
	let head: String = Word(EN).fake_with_rng(rng);
	let tail: String = Word(EN).fake_with_rng(rng);
	let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
	format!("{}{}.{suffix}", handle(&head), handle(&tail))
}

fn us_address<P, R>(style: StateStyle, provider: &P, rng: &mut R) -> Address
where
	P: LocaleProvider + ?Sized,
	R: Rng + ?Sized,
{
	let options = AddressOptions::new(DEFAULT_LOCALE).with_state_style(style);
	// A degraded address is still a complete one.
	generate_address(&options, provider, rng).into_address()
}

/// Generates a full synthetic identity in the US locale.
///
/// Every field is sampled independently except `email` and `username`,
/// which embed the generated first and last name. In particular `website`
/// has nothing to do with `company`.
///
/// # Errors
/// Returns [`GenerationError::InvalidOption`] if `password` options are
/// unusable.
pub fn generate_identity<P, R>(password: &PasswordOptions, provider: &P, rng: &mut R) -> Result<Identity, GenerationError>
where
	P: LocaleProvider + ?Sized,
	R: Rng + ?Sized,
{
	let first_name: String = FirstName(EN).fake_with_rng(rng);
	let last_name: String = LastName(EN).fake_with_rng(rng);
	let address = us_address(StateStyle::Abbreviated, provider, rng);
	let company: String = CompanyName(EN).fake_with_rng(rng);

	let details = IdentityDetails {
		gender: GENDERS.choose(rng).copied().unwrap_or("female").to_owned(),
		birth_date: birth_date(Utc::now().date_naive(), rng),
		email: email(&first_name, &last_name, rng),
		phone: PhoneNumber(EN).fake_with_rng(rng),
		username: username(&first_name, &last_name, rng),
		password: generate_password(password, rng)?,
		ip: IPv4(EN).fake_with_rng(rng),
		mac: MACAddress(EN).fake_with_rng(rng),
		website: website(rng),
		job_title: Title(EN).fake_with_rng(rng),
		company,
		ssn: digits(SSN_DIGITS, rng),
		first_name,
		last_name,
		street: address.street.clone(),
		city: address.city.clone(),
		state: address.state.clone(),
		zip: address.zip.clone(),
		country: address.country.clone(),
	};

	Ok(Identity {
		name: format!("{} {}", details.first_name, details.last_name),
		address: address.local_line(),
		details,
	})
}

/// Generates a name with a US address whose state is spelled out.
pub fn generate_name_address<P, R>(provider: &P, rng: &mut R) -> NameAddress
where
	P: LocaleProvider + ?Sized,
	R: Rng + ?Sized,
{
	let first_name: String = FirstName(EN).fake_with_rng(rng);
	let last_name: String = LastName(EN).fake_with_rng(rng);
	let address = us_address(StateStyle::Full, provider, rng);

	NameAddress {
		name: format!("{first_name} {last_name}"),
		address: address.full_line(),
		details: NameAddressDetails {
			first_name,
			last_name,
			street: address.street,
			city: address.city,
			state: address.state,
			zip: address.zip,
			country: address.country,
		},
	}
}
