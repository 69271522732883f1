use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StateName, StreetName, ZipCode};
use fake::faker::number::raw::NumberWithFormat;
use fake::locales::{DE_DE, Data, EN, FR_FR, IT_IT, PT_BR};
use fake::{Dummy, Fake};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::DataError;
use super::static_data::StreetFormat;
use super::{Capabilities, LocaleField, LocaleProfile, LocaleProvider};

/// `fake` locale a country samples its names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakerDataset {
	En,
	DeDe,
	FrFr,
	ItIt,
	PtBr,
}

/// Where a country's states come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSource {
	/// The dataset's own state and abbreviation lists.
	Dataset,
	/// `(abbreviation, full name)` pairs, for datasets without regions.
	Table(&'static [(&'static str, &'static str)]),
}

/// How postal codes are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostalFormat {
	/// The dataset's zip code formats.
	Dataset,
	/// A fixed pattern, `#` standing for a digit.
	Pattern(&'static str),
}

/// One country served from a `fake` dataset.
#[derive(Debug)]
pub struct FakerLocale {
	pub code: &'static str,
	pub country_name: &'static str,
	pub dataset: FakerDataset,
	pub street_format: StreetFormat,
	pub states: StateSource,
	pub postal: PostalFormat,
}

impl FakerLocale {
	fn profile(&self) -> LocaleProfile {
		LocaleProfile {
			code: self.code,
			country_name: self.country_name,
			capabilities: Capabilities { state: true, zip: true },
		}
	}

	fn sample<R: Rng + ?Sized>(&self, field: LocaleField, rng: &mut R) -> Result<String, DataError> {
		match self.dataset {
			FakerDataset::En => self.sample_from(EN, field, rng),
			FakerDataset::DeDe => self.sample_from(DE_DE, field, rng),
			FakerDataset::FrFr => self.sample_from(FR_FR, field, rng),
			FakerDataset::ItIt => self.sample_from(IT_IT, field, rng),
			FakerDataset::PtBr => self.sample_from(PT_BR, field, rng),
		}
	}

	fn sample_from<L, R>(&self, dataset: L, field: LocaleField, rng: &mut R) -> Result<String, DataError>
	where
		L: Data + Copy,
		String: Dummy<CityName<L>>,
		R: Rng + ?Sized,
	{
		Ok(match field {
			LocaleField::Street => {
				let name: String = StreetName(dataset).fake_with_rng(rng);
				let number: String = BuildingNumber(dataset).fake_with_rng(rng);
				match self.street_format {
					StreetFormat::NumberFirst => format!("{number} {name}"),
					StreetFormat::NameFirst => format!("{name} {number}"),
					StreetFormat::NameCommaNumber => format!("{name}, {number}"),
				}
			}
			LocaleField::City => CityName(dataset).fake_with_rng(rng),
			LocaleField::State | LocaleField::StateName => match self.states {
				StateSource::Dataset if field == LocaleField::StateName => StateName(dataset).fake_with_rng(rng),
				StateSource::Dataset => StateAbbr(dataset).fake_with_rng(rng),
				StateSource::Table(states) => {
					let (abbreviation, name) = states
						.choose(rng)
						.ok_or_else(|| DataError::EmptyTable { code: self.code.to_owned(), field })?;
					let value = if field == LocaleField::StateName { name } else { abbreviation };
					(*value).to_owned()
				}
			},
			LocaleField::Zip => match self.postal {
				PostalFormat::Dataset => ZipCode(dataset).fake_with_rng(rng),
				PostalFormat::Pattern(pattern) => NumberWithFormat(dataset, pattern).fake_with_rng(rng),
			},
		})
	}
}

/// [`LocaleProvider`] sampling names, streets and cities from `fake`.
///
/// The default instance serves US, DE, FR, IT and BR.
#[derive(Debug, Clone, Copy)]
pub struct FakerLocaleData {
	locales: &'static [FakerLocale],
}

impl FakerLocaleData {
	pub const fn new(locales: &'static [FakerLocale]) -> Self {
		Self { locales }
	}

	fn find(&self, code: &str) -> Option<&'static FakerLocale> {
		self.locales.iter().find(|locale| locale.code.eq_ignore_ascii_case(code))
	}
}

impl Default for FakerLocaleData {
	fn default() -> Self {
		Self::new(FAKER_LOCALES)
	}
}

impl LocaleProvider for FakerLocaleData {
	fn profile(&self, code: &str) -> Option<LocaleProfile> {
		self.find(code).map(FakerLocale::profile)
	}

	fn supports(&self, code: &str, _field: LocaleField) -> bool {
		self.find(code).is_some()
	}

	fn sample<R: Rng + ?Sized>(&self, code: &str, field: LocaleField, rng: &mut R) -> Result<String, DataError> {
		let locale = self.find(code).ok_or_else(|| DataError::UnsupportedLocale { code: code.to_owned() })?;
		locale.sample(field, rng)
	}

	fn profiles(&self) -> Vec<LocaleProfile> {
		self.locales.iter().map(FakerLocale::profile).collect()
	}
}

/// French regions; the `fake` French dataset has none.
const FRENCH_REGIONS: &[(&str, &str)] = &[
	("IDF", "Île-de-France"), ("ARA", "Auvergne-Rhône-Alpes"), ("PAC", "Provence-Alpes-Côte d'Azur"),
	("OCC", "Occitanie"), ("NAQ", "Nouvelle-Aquitaine"), ("HDF", "Hauts-de-France"),
	("BRE", "Bretagne"), ("GES", "Grand Est"), ("NOR", "Normandie"), ("PDL", "Pays de la Loire"),
	("BFC", "Bourgogne-Franche-Comté"), ("CVL", "Centre-Val de Loire"), ("COR", "Corse"),
];

pub static FAKER_LOCALES: &[FakerLocale] = &[
	FakerLocale {
		code: "US",
		country_name: "United States",
		dataset: FakerDataset::En,
		street_format: StreetFormat::NumberFirst,
		states: StateSource::Dataset,
		postal: PostalFormat::Pattern("#####"),
	},
	FakerLocale {
		code: "DE",
		country_name: "Germany",
		dataset: FakerDataset::DeDe,
		street_format: StreetFormat::NameFirst,
		states: StateSource::Dataset,
		postal: PostalFormat::Dataset,
	},
	FakerLocale {
		code: "FR",
		country_name: "France",
		dataset: FakerDataset::FrFr,
		street_format: StreetFormat::NumberFirst,
		states: StateSource::Table(FRENCH_REGIONS),
		postal: PostalFormat::Dataset,
	},
	FakerLocale {
		code: "IT",
		country_name: "Italy",
		dataset: FakerDataset::ItIt,
		street_format: StreetFormat::NameFirst,
		states: StateSource::Dataset,
		postal: PostalFormat::Dataset,
	},
	FakerLocale {
		code: "BR",
		country_name: "Brazil",
		dataset: FakerDataset::PtBr,
		street_format: StreetFormat::NameCommaNumber,
		states: StateSource::Dataset,
		postal: PostalFormat::Pattern("#####-###"),
	},
];

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;
	use rstest::{fixture, rstest};

	use super::*;

	#[fixture]
	fn data() -> FakerLocaleData {
		FakerLocaleData::default()
	}

	#[fixture]
	fn rng() -> ChaCha8Rng {
		ChaCha8Rng::seed_from_u64(11)
	}

	#[rstest]
	fn serves_five_locales(data: FakerLocaleData) {
		let codes: Vec<&str> = data.profiles().iter().map(|p| p.code).collect();
		assert_eq!(codes, ["US", "DE", "FR", "IT", "BR"]);
	}

	#[rstest]
	#[case("US", 5)]
	#[case("DE", 5)]
	#[case("FR", 5)]
	#[case("IT", 5)]
	#[case("BR", 9)]
	fn postal_codes_have_locale_length(data: FakerLocaleData, mut rng: ChaCha8Rng, #[case] code: &str, #[case] len: usize) {
		for _ in 0..50 {
			let zip = data.sample(code, LocaleField::Zip, &mut rng).expect("zip");
			assert_eq!(zip.chars().count(), len, "{code}: {zip}");
		}
	}

	#[rstest]
	fn us_states_come_in_both_styles(data: FakerLocaleData, mut rng: ChaCha8Rng) {
		for _ in 0..50 {
			let abbreviation = data.sample("US", LocaleField::State, &mut rng).expect("state");
			let name = data.sample("US", LocaleField::StateName, &mut rng).expect("state name");
			assert_eq!(abbreviation.len(), 2, "{abbreviation}");
			assert!(name.len() > 2, "{name}");
		}
	}

	#[rstest]
	fn french_regions_come_from_table(data: FakerLocaleData, mut rng: ChaCha8Rng) {
		let region = data.sample("fr", LocaleField::StateName, &mut rng).expect("region");
		assert!(FRENCH_REGIONS.iter().any(|(_, name)| *name == region), "{region}");
	}

	#[rstest]
	#[case("US")]
	#[case("DE")]
	#[case("FR")]
	#[case("IT")]
	#[case("BR")]
	fn streets_and_cities_are_non_empty(data: FakerLocaleData, mut rng: ChaCha8Rng, #[case] code: &str) {
		let street = data.sample(code, LocaleField::Street, &mut rng).expect("street");
		let city = data.sample(code, LocaleField::City, &mut rng).expect("city");
		assert!(street.chars().any(char::is_alphabetic), "{street}");
		assert!(street.chars().any(|c| c.is_ascii_digit()), "{street}");
		assert!(!city.trim().is_empty());
	}

	#[rstest]
	fn brazilian_street_puts_number_after_comma(data: FakerLocaleData, mut rng: ChaCha8Rng) {
		let street = data.sample("BR", LocaleField::Street, &mut rng).expect("street");
		assert!(street.contains(", "), "{street}");
	}

	#[rstest]
	fn unknown_code_is_unsupported(data: FakerLocaleData, mut rng: ChaCha8Rng) {
		assert!(!data.supports("GB", LocaleField::Street));
		assert_eq!(
			data.sample("GB", LocaleField::City, &mut rng),
			Err(DataError::UnsupportedLocale { code: "GB".to_owned() })
		);
	}
}
