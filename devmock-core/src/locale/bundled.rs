use rand::Rng;

use crate::error::DataError;
use super::{FakerLocaleData, LocaleField, LocaleProfile, LocaleProvider, StaticLocaleData};

/// Every country the crate ships: `fake` datasets first, static tables for
/// the rest.
///
/// A code is answered entirely by the provider that knows it, so one
/// address never mixes sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLocales {
	faker: FakerLocaleData,
	tables: StaticLocaleData,
}

impl BundledLocales {
	pub const fn new(faker: FakerLocaleData, tables: StaticLocaleData) -> Self {
		Self { faker, tables }
	}
}

impl LocaleProvider for BundledLocales {
	fn profile(&self, code: &str) -> Option<LocaleProfile> {
		self.faker.profile(code).or_else(|| self.tables.profile(code))
	}

	fn supports(&self, code: &str, field: LocaleField) -> bool {
		if self.faker.profile(code).is_some() {
			self.faker.supports(code, field)
		} else {
			self.tables.supports(code, field)
		}
	}

	fn sample<R: Rng + ?Sized>(&self, code: &str, field: LocaleField, rng: &mut R) -> Result<String, DataError> {
		if self.faker.profile(code).is_some() {
			self.faker.sample(code, field, rng)
		} else {
			self.tables.sample(code, field, rng)
		}
	}

	fn profiles(&self) -> Vec<LocaleProfile> {
		let mut profiles = self.faker.profiles();
		profiles.extend(self.tables.profiles());
		profiles
	}
}
