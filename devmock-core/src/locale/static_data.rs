use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::DataError;
use super::{Capabilities, LocaleField, LocaleProfile, LocaleProvider};

/// Placement of the house number relative to the street name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetFormat {
	/// `"42 Maple Avenue"`
	NumberFirst,
	/// `"Hauptstraße 42"`
	NameFirst,
	/// `"Rua das Flores, 42"`
	NameCommaNumber,
}

/// Raw naming data of one locale.
///
/// Capabilities are derived from the data: a locale without `states`
/// does not supply a state, a locale with an empty `postal_pattern`
/// does not supply a postal code.
///
/// Postal patterns use `#` for a digit and `?` for an uppercase letter;
/// every other character is copied as-is.
#[derive(Debug)]
pub struct LocaleData {
	pub code: &'static str,
	pub country_name: &'static str,
	pub street_names: &'static [&'static str],
	pub street_format: StreetFormat,
	pub house_numbers: (u16, u16),
	pub cities: &'static [&'static str],
	/// `(abbreviation, full name)` pairs.
	pub states: &'static [(&'static str, &'static str)],
	pub postal_pattern: &'static str,
}

impl LocaleData {
	fn profile(&self) -> LocaleProfile {
		LocaleProfile {
			code: self.code,
			country_name: self.country_name,
			capabilities: Capabilities {
				state: !self.states.is_empty(),
				zip: !self.postal_pattern.is_empty(),
			},
		}
	}

	fn street<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, DataError> {
		let name = pick(self.code, LocaleField::Street, self.street_names, rng)?;
		let (low, high) = self.house_numbers;
		let number = rng.random_range(low..=high.max(low));
		Ok(match self.street_format {
			StreetFormat::NumberFirst => format!("{number} {name}"),
			StreetFormat::NameFirst => format!("{name} {number}"),
			StreetFormat::NameCommaNumber => format!("{name}, {number}"),
		})
	}

	fn state<R: Rng + ?Sized>(&self, field: LocaleField, rng: &mut R) -> Result<String, DataError> {
		let (abbreviation, name) = self.states.choose(rng).ok_or_else(|| DataError::MissingField {
			code: self.code.to_owned(),
			field,
		})?;
		let value = if field == LocaleField::StateName { name } else { abbreviation };
		Ok((*value).to_owned())
	}

	fn postal_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, DataError> {
		if self.postal_pattern.is_empty() {
			return Err(DataError::MissingField { code: self.code.to_owned(), field: LocaleField::Zip });
		}
		Ok(self.postal_pattern
			.chars()
			.map(|c| match c {
				'#' => char::from(b'0' + rng.random_range(0..10u8)),
				'?' => char::from(b'A' + rng.random_range(0..26u8)),
				other => other,
			})
			.collect())
	}
}

/// Chooses one entry of a naming table.
fn pick<R: Rng + ?Sized>(
	code: &str,
	field: LocaleField,
	table: &'static [&'static str],
	rng: &mut R,
) -> Result<&'static str, DataError> {
	table
		.choose(rng)
		.copied()
		.ok_or_else(|| DataError::EmptyTable { code: code.to_owned(), field })
}

/// In-memory [`LocaleProvider`] backed by `'static` tables.
///
/// The default instance serves CA, GB, ES and NL. Tables are read-only and
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocaleData {
	locales: &'static [LocaleData],
}

impl StaticLocaleData {
	/// Creates a provider over a custom set of tables.
	pub const fn new(locales: &'static [LocaleData]) -> Self {
		Self { locales }
	}

	fn find(&self, code: &str) -> Option<&'static LocaleData> {
		self.locales.iter().find(|locale| locale.code.eq_ignore_ascii_case(code))
	}
}

impl Default for StaticLocaleData {
	fn default() -> Self {
		Self::new(TABLE_LOCALES)
	}
}

impl LocaleProvider for StaticLocaleData {
	fn profile(&self, code: &str) -> Option<LocaleProfile> {
		self.find(code).map(LocaleData::profile)
	}

	fn supports(&self, code: &str, field: LocaleField) -> bool {
		match (self.profile(code), field) {
			(None, _) => false,
			(Some(_), LocaleField::Street | LocaleField::City) => true,
			(Some(profile), LocaleField::State | LocaleField::StateName) => profile.capabilities.state,
			(Some(profile), LocaleField::Zip) => profile.capabilities.zip,
		}
	}

	fn sample<R: Rng + ?Sized>(&self, code: &str, field: LocaleField, rng: &mut R) -> Result<String, DataError> {
		let locale = self.find(code).ok_or_else(|| DataError::UnsupportedLocale { code: code.to_owned() })?;
		match field {
			LocaleField::Street => locale.street(rng),
			LocaleField::City => pick(locale.code, field, locale.cities, rng).map(str::to_owned),
			LocaleField::State | LocaleField::StateName => locale.state(field, rng),
			LocaleField::Zip => locale.postal_code(rng),
		}
	}

	fn profiles(&self) -> Vec<LocaleProfile> {
		self.locales.iter().map(LocaleData::profile).collect()
	}
}

/// Tables for the countries `fake` has no dataset for.
pub static TABLE_LOCALES: &[LocaleData] = &[
	LocaleData {
		code: "CA",
		country_name: "Canada",
		street_names: &[
			"Maple Street", "King Street West", "Queen Street", "Yonge Street", "Rue Sainte-Catherine",
			"Granville Street", "Jasper Avenue", "Portage Avenue",
		],
		street_format: StreetFormat::NumberFirst,
		house_numbers: (1, 4999),
		cities: &[
			"Toronto", "Montreal", "Vancouver", "Calgary", "Edmonton", "Ottawa", "Winnipeg", "Halifax", "Quebec City",
		],
		states: &[
			("ON", "Ontario"), ("QC", "Quebec"), ("BC", "British Columbia"), ("AB", "Alberta"),
			("MB", "Manitoba"), ("NS", "Nova Scotia"), ("SK", "Saskatchewan"), ("NB", "New Brunswick"),
		],
		postal_pattern: "?#? #?#",
	},
	LocaleData {
		code: "GB",
		country_name: "United Kingdom",
		street_names: &[
			"High Street", "Church Road", "Station Road", "Victoria Road", "Park Lane",
			"Mill Lane", "King Street", "Queens Road",
		],
		street_format: StreetFormat::NumberFirst,
		house_numbers: (1, 250),
		cities: &[
			"London", "Manchester", "Birmingham", "Leeds", "Bristol", "Liverpool",
			"Sheffield", "Newcastle", "Nottingham", "Brighton",
		],
		states: &[],
		postal_pattern: "??# #??",
	},
	LocaleData {
		code: "ES",
		country_name: "Spain",
		street_names: &[
			"Calle Mayor", "Calle Real", "Avenida de la Constitución", "Plaza Mayor",
			"Calle del Sol", "Gran Vía", "Calle de Alcalá", "Paseo del Prado",
		],
		street_format: StreetFormat::NameCommaNumber,
		house_numbers: (1, 160),
		cities: &[
			"Madrid", "Barcelona", "Valencia", "Sevilla", "Málaga", "Bilbao", "Zaragoza", "Alicante", "Granada", "Murcia",
		],
		states: &[
			("M", "Madrid"), ("B", "Barcelona"), ("V", "Valencia"), ("SE", "Sevilla"),
			("MA", "Málaga"), ("BI", "Bizkaia"), ("Z", "Zaragoza"), ("A", "Alicante"),
		],
		postal_pattern: "#####",
	},
	LocaleData {
		code: "NL",
		country_name: "Netherlands",
		street_names: &[
			"Kerkstraat", "Dorpsstraat", "Schoolstraat", "Molenweg", "Stationsweg",
			"Julianalaan", "Wilhelminastraat", "Beukenlaan",
		],
		street_format: StreetFormat::NameFirst,
		house_numbers: (1, 300),
		cities: &[
			"Amsterdam", "Rotterdam", "Den Haag", "Utrecht", "Eindhoven", "Groningen",
			"Tilburg", "Almere", "Breda", "Nijmegen",
		],
		states: &[],
		postal_pattern: "#### ??",
	},
];

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;
	use rstest::{fixture, rstest};

	use super::*;

	#[fixture]
	fn data() -> StaticLocaleData {
		StaticLocaleData::default()
	}

	#[fixture]
	fn rng() -> ChaCha8Rng {
		ChaCha8Rng::seed_from_u64(7)
	}

	#[rstest]
	fn serves_four_locales(data: StaticLocaleData) {
		let codes: Vec<&str> = data.profiles().iter().map(|p| p.code).collect();
		assert_eq!(codes, ["CA", "GB", "ES", "NL"]);
	}

	#[rstest]
	fn lookup_is_case_insensitive(data: StaticLocaleData) {
		assert_eq!(data.profile("nl").map(|p| p.country_name), Some("Netherlands"));
	}

	#[rstest]
	#[case("CA", true)]
	#[case("GB", false)]
	#[case("NL", false)]
	#[case("ES", true)]
	fn state_capability_follows_data(data: StaticLocaleData, #[case] code: &str, #[case] expected: bool) {
		assert_eq!(data.supports(code, LocaleField::State), expected);
		assert_eq!(data.supports(code, LocaleField::StateName), expected);
	}

	#[rstest]
	fn unknown_locale_supports_nothing(data: StaticLocaleData) {
		assert!(!data.supports("XX", LocaleField::Street));
		assert!(!data.supports("XX", LocaleField::Zip));
	}

	#[rstest]
	fn unknown_locale_sampling_fails(data: StaticLocaleData, mut rng: ChaCha8Rng) {
		let result = data.sample("XX", LocaleField::City, &mut rng);
		assert_eq!(result, Err(DataError::UnsupportedLocale { code: "XX".to_owned() }));
	}

	#[rstest]
	fn missing_state_is_reported(data: StaticLocaleData, mut rng: ChaCha8Rng) {
		let result = data.sample("GB", LocaleField::State, &mut rng);
		assert_eq!(result, Err(DataError::MissingField { code: "GB".to_owned(), field: LocaleField::State }));
	}

	#[rstest]
	#[case("CA", "?#? #?#")]
	#[case("GB", "??# #??")]
	#[case("NL", "#### ??")]
	#[case("ES", "#####")]
	fn postal_codes_follow_pattern(data: StaticLocaleData, mut rng: ChaCha8Rng, #[case] code: &str, #[case] pattern: &str) {
		for _ in 0..50 {
			let zip = data.sample(code, LocaleField::Zip, &mut rng).expect("zip sampled");
			assert_eq!(zip.chars().count(), pattern.chars().count());
			for (c, p) in zip.chars().zip(pattern.chars()) {
				match p {
					'#' => assert!(c.is_ascii_digit(), "{zip} does not match {pattern}"),
					'?' => assert!(c.is_ascii_uppercase(), "{zip} does not match {pattern}"),
					literal => assert_eq!(c, literal),
				}
			}
		}
	}

	#[rstest]
	fn street_format_places_number(data: StaticLocaleData, mut rng: ChaCha8Rng) {
		let ca = data.sample("CA", LocaleField::Street, &mut rng).expect("street");
		assert!(ca.starts_with(|c: char| c.is_ascii_digit()), "{ca}");

		let nl = data.sample("NL", LocaleField::Street, &mut rng).expect("street");
		assert!(nl.ends_with(|c: char| c.is_ascii_digit()), "{nl}");

		let es = data.sample("ES", LocaleField::Street, &mut rng).expect("street");
		assert!(es.contains(", "), "{es}");
	}

	#[rstest]
	fn state_name_differs_from_abbreviation(data: StaticLocaleData, mut rng: ChaCha8Rng) {
		let abbreviation = data.sample("CA", LocaleField::State, &mut rng).expect("state");
		let name = data.sample("CA", LocaleField::StateName, &mut rng).expect("state name");
		assert_eq!(abbreviation.len(), 2);
		assert!(name.len() > 2);
	}

	#[test]
	fn empty_table_is_reported() {
		static BROKEN: &[LocaleData] = &[LocaleData {
			code: "ZZ",
			country_name: "Nowhere",
			street_names: &[],
			street_format: StreetFormat::NumberFirst,
			house_numbers: (1, 10),
			cities: &[],
			states: &[],
			postal_pattern: "",
		}];
		let data = StaticLocaleData::new(BROKEN);
		let mut rng = ChaCha8Rng::seed_from_u64(1);

		assert_eq!(
			data.sample("ZZ", LocaleField::City, &mut rng),
			Err(DataError::EmptyTable { code: "ZZ".to_owned(), field: LocaleField::City })
		);
		assert!(!data.supports("ZZ", LocaleField::Zip));
	}
}
