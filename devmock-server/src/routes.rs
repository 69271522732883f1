//! HTTP routes.
//!
//! Every generator has its own `POST /api/generate/<name>` route taking the
//! generator's options as a JSON object; an empty body means "all defaults".
//! `POST /api/generate` takes a `{kind, options}` request instead, parsed by
//! [`GenerationRequest`]'s own deserializer.

use actix_web::{HttpResponse, get, post, web};
use devmock_core::generators::address::AddressParams;
use devmock_core::generators::hash::HashParams;
use devmock_core::generators::lorem::LoremParams;
use devmock_core::generators::password::PasswordParams;
use devmock_core::generators::qr_code::QrCodeParams;
use devmock_core::generators::uuid::UuidParams;
use devmock_core::{BundledLocales, GenerationRequest, GeneratorDefaults, GeneratorKind, LocaleProvider, generate};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Read-only state shared by every worker.
pub struct AppState {
	pub defaults: GeneratorDefaults,
	pub locales: BundledLocales,
}

impl AppState {
	pub fn new(defaults: GeneratorDefaults) -> Self {
		Self { defaults, locales: BundledLocales::default() }
	}

	fn respond(&self, request: &GenerationRequest) -> Result<HttpResponse, ApiError> {
		let response = generate(request, &self.defaults, &self.locales, &mut rand::rng())?;
		Ok(HttpResponse::Ok().json(response))
	}
}

fn parse_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(T::default());
	}
	Ok(serde_json::from_slice(body)?)
}

#[post("/api/generate/password")]
async fn password(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let params: PasswordParams = parse_or_default(&body)?;
	state.respond(&GenerationRequest::Password(params))
}

#[post("/api/generate/color")]
async fn color(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	state.respond(&GenerationRequest::Color)
}

#[post("/api/generate/uuid")]
async fn uuid(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let params: UuidParams = parse_or_default(&body)?;
	state.respond(&GenerationRequest::Uuid(params))
}

#[post("/api/generate/hash")]
async fn hash(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let params: HashParams = parse_or_default(&body)?;
	state.respond(&GenerationRequest::Hash(params))
}

#[post("/api/generate/lorem")]
async fn lorem(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let params: LoremParams = parse_or_default(&body)?;
	state.respond(&GenerationRequest::Lorem(params))
}

#[post("/api/generate/address")]
async fn address(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let params: AddressParams = parse_or_default(&body)?;
	state.respond(&GenerationRequest::Address(params))
}

#[post("/api/generate/identity")]
async fn identity(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	state.respond(&GenerationRequest::Identity)
}

#[post("/api/generate/nameaddress")]
async fn name_address(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	state.respond(&GenerationRequest::NameAddress)
}

#[post("/api/generate/qr-code")]
async fn qr_code(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let params: QrCodeParams = parse_or_default(&body)?;
	state.respond(&GenerationRequest::QrCode(params))
}

#[post("/api/generate")]
async fn any_kind(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let request: GenerationRequest = serde_json::from_slice(&body)?;
	state.respond(&request)
}

#[get("/api/kinds")]
async fn kinds() -> HttpResponse {
	HttpResponse::Ok().json(GeneratorKind::ALL)
}

#[get("/api/locales")]
async fn locales(state: web::Data<AppState>) -> HttpResponse {
	HttpResponse::Ok().json(state.locales.profiles())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(password)
		.service(color)
		.service(uuid)
		.service(hash)
		.service(lorem)
		.service(address)
		.service(identity)
		.service(name_address)
		.service(qr_code)
		.service(any_kind)
		.service(kinds)
		.service(locales);
}
