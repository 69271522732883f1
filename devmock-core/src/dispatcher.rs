use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::GeneratorDefaults;
use crate::error::GenerationError;
use crate::generators::address::{AddressCard, AddressParams, generate_address};
use crate::generators::color::{Color, generate_color};
use crate::generators::hash::{HashParams, generate_hash};
use crate::generators::identity::{Identity, NameAddress, generate_identity, generate_name_address};
use crate::generators::lorem::{LoremParams, generate_lorem};
use crate::generators::password::{PasswordParams, generate_password};
use crate::generators::qr_code::{QrCodeParams, generate_qr_code};
use crate::generators::uuid::{UuidParams, generate_uuid};
use crate::locale::LocaleProvider;

/// Names of the available generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
	Password,
	Color,
	Uuid,
	Hash,
	Lorem,
	Address,
	Identity,
	NameAddress,
	QrCode,
}

impl GeneratorKind {
	pub const ALL: [GeneratorKind; 9] = [
		GeneratorKind::Password,
		GeneratorKind::Color,
		GeneratorKind::Uuid,
		GeneratorKind::Hash,
		GeneratorKind::Lorem,
		GeneratorKind::Address,
		GeneratorKind::Identity,
		GeneratorKind::NameAddress,
		GeneratorKind::QrCode,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			GeneratorKind::Password => "password",
			GeneratorKind::Color => "color",
			GeneratorKind::Uuid => "uuid",
			GeneratorKind::Hash => "hash",
			GeneratorKind::Lorem => "lorem",
			GeneratorKind::Address => "address",
			GeneratorKind::Identity => "identity",
			GeneratorKind::NameAddress => "name-address",
			GeneratorKind::QrCode => "qr-code",
		}
	}
}

impl fmt::Display for GeneratorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeneratorKind {
	type Err = GenerationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		GeneratorKind::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| GenerationError::invalid("kind", format!("unknown generator '{s}'")))
	}
}

/// One generation request: a kind and the options that kind understands.
///
/// On the wire: `{"kind": "password", "options": {"length": 12}}`. `options`
/// may be absent or null for every kind, meaning "all defaults"; kinds that
/// take no options ignore whatever is sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WireRequest")]
pub enum GenerationRequest {
	Password(PasswordParams),
	Color,
	Uuid(UuidParams),
	Hash(HashParams),
	Lorem(LoremParams),
	Address(AddressParams),
	Identity,
	NameAddress,
	QrCode(QrCodeParams),
}

#[derive(Deserialize)]
struct WireRequest {
	kind: String,
	#[serde(default)]
	options: Option<Value>,
}

fn options_or_default<T: DeserializeOwned + Default>(options: Option<Value>) -> Result<T, GenerationError> {
	match options {
		None | Some(Value::Null) => Ok(T::default()),
		Some(value) => serde_json::from_value(value).map_err(|e| GenerationError::invalid("options", e.to_string())),
	}
}

impl TryFrom<WireRequest> for GenerationRequest {
	type Error = GenerationError;

	fn try_from(wire: WireRequest) -> Result<Self, Self::Error> {
		let kind: GeneratorKind = wire.kind.parse()?;
		let options = wire.options;
		Ok(match kind {
			GeneratorKind::Password => GenerationRequest::Password(options_or_default(options)?),
			GeneratorKind::Uuid => GenerationRequest::Uuid(options_or_default(options)?),
			GeneratorKind::Hash => GenerationRequest::Hash(options_or_default(options)?),
			GeneratorKind::Lorem => GenerationRequest::Lorem(options_or_default(options)?),
			GeneratorKind::Address => GenerationRequest::Address(options_or_default(options)?),
			GeneratorKind::QrCode => GenerationRequest::QrCode(options_or_default(options)?),
			other => GenerationRequest::with_defaults(other),
		})
	}
}

impl GenerationRequest {
	pub fn kind(&self) -> GeneratorKind {
		match self {
			GenerationRequest::Password(_) => GeneratorKind::Password,
			GenerationRequest::Color => GeneratorKind::Color,
			GenerationRequest::Uuid(_) => GeneratorKind::Uuid,
			GenerationRequest::Hash(_) => GeneratorKind::Hash,
			GenerationRequest::Lorem(_) => GeneratorKind::Lorem,
			GenerationRequest::Address(_) => GeneratorKind::Address,
			GenerationRequest::Identity => GeneratorKind::Identity,
			GenerationRequest::NameAddress => GeneratorKind::NameAddress,
			GenerationRequest::QrCode(_) => GeneratorKind::QrCode,
		}
	}

	/// A request for `kind` with every option left to its default.
	pub fn with_defaults(kind: GeneratorKind) -> Self {
		match kind {
			GeneratorKind::Password => GenerationRequest::Password(PasswordParams::default()),
			GeneratorKind::Color => GenerationRequest::Color,
			GeneratorKind::Uuid => GenerationRequest::Uuid(UuidParams::default()),
			GeneratorKind::Hash => GenerationRequest::Hash(HashParams::default()),
			GeneratorKind::Lorem => GenerationRequest::Lorem(LoremParams::default()),
			GeneratorKind::Address => GenerationRequest::Address(AddressParams::default()),
			GeneratorKind::Identity => GenerationRequest::Identity,
			GeneratorKind::NameAddress => GenerationRequest::NameAddress,
			GeneratorKind::QrCode => GenerationRequest::QrCode(QrCodeParams::default()),
		}
	}
}

/// Output of a generator, serialized into the shape its route documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationResponse {
	/// Password, UUID, hash, lorem and QR code results: `{"result": "..."}`.
	Text { result: String },
	Color(Color),
	Address(AddressCard),
	Identity(Identity),
	NameAddress(NameAddress),
}

impl GenerationResponse {
	fn text(result: String) -> Self {
		GenerationResponse::Text { result }
	}
}

/// Runs the generator selected by `request`.
///
/// Options are resolved against `defaults` and validated by the generator;
/// the result is returned as produced. A degraded address is collapsed into
/// its fallback card; the address generator has already logged why.
///
/// # Errors
/// Propagates [`GenerationError`] from option validation and QR rendering.
pub fn generate<P, R>(
	request: &GenerationRequest,
	defaults: &GeneratorDefaults,
	provider: &P,
	rng: &mut R,
) -> Result<GenerationResponse, GenerationError>
where
	P: LocaleProvider + ?Sized,
	R: Rng + ?Sized,
{
	debug!("dispatching {} request", request.kind());
	Ok(match request {
		GenerationRequest::Password(params) => {
			let options = params.resolve(&defaults.password, defaults.max_password_length)?;
			GenerationResponse::text(generate_password(&options, rng)?)
		}
		GenerationRequest::Color => GenerationResponse::Color(generate_color(rng)),
		GenerationRequest::Uuid(params) => {
			let version = params.version.unwrap_or(defaults.uuid_version);
			GenerationResponse::text(generate_uuid(version, rng))
		}
		GenerationRequest::Hash(params) => {
			let algorithm = params.algorithm.unwrap_or(defaults.hash_algorithm);
			GenerationResponse::text(generate_hash(&params.text, algorithm)?)
		}
		GenerationRequest::Lorem(params) => {
			let options = params.resolve(&defaults.lorem, defaults.max_lorem_count)?;
			GenerationResponse::text(generate_lorem(&options, rng)?)
		}
		GenerationRequest::Address(params) => {
			let outcome = generate_address(&params.resolve(&defaults.locale_code), provider, rng);
			GenerationResponse::Address(AddressCard::from(outcome))
		}
		GenerationRequest::Identity => GenerationResponse::Identity(generate_identity(&defaults.password, provider, rng)?),
		GenerationRequest::NameAddress => GenerationResponse::NameAddress(generate_name_address(provider, rng)),
		GenerationRequest::QrCode(params) => GenerationResponse::text(generate_qr_code(&params.text)?),
	})
}
