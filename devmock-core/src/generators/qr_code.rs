use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Luma};
use log::debug;
use qrcode::QrCode;
use serde::Deserialize;

use crate::error::GenerationError;

/// Pixels per QR module.
const MODULE_SIZE: u32 = 4;

/// QR code options as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QrCodeParams {
	#[serde(default)]
	pub text: String,
}

/// Encodes `text` as a QR code and returns it as a `data:image/png;base64,`
/// URL.
///
/// The image is a pure function of `text`; no randomness is involved.
///
/// # Errors
/// Returns [`GenerationError::EmptyInput`] if `text` is empty,
/// [`GenerationError::InvalidOption`] if it does not fit in a QR code and
/// [`GenerationError::Render`] if the PNG cannot be written.
pub fn generate_qr_code(text: &str) -> Result<String, GenerationError> {
	if text.is_empty() {
		return Err(GenerationError::EmptyInput { field: "text" });
	}
	let code = QrCode::new(text.as_bytes()).map_err(|e| GenerationError::invalid("text", e.to_string()))?;
	let image = code.render::<Luma<u8>>().module_dimensions(MODULE_SIZE, MODULE_SIZE).build();
	debug!("rendered {}x{} QR code for {} bytes", image.width(), image.height(), text.len());

	let mut png = Vec::new();
	image
		.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
		.map_err(|e| GenerationError::Render { reason: e.to_string() })?;
	Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

	fn decode(url: &str) -> Vec<u8> {
		let payload = url.strip_prefix("data:image/png;base64,").expect("png data url");
		STANDARD.decode(payload).expect("base64 payload")
	}

	#[rstest]
	#[case("hello")]
	#[case("https://example.com/some/path?query=1")]
	#[case("héllo wörld")]
	fn text_becomes_png_data_url(#[case] text: &str) {
		let url = generate_qr_code(text).expect("qr code");
		assert!(decode(&url).starts_with(PNG_SIGNATURE));
	}

	#[test]
	fn same_text_same_image() {
		assert_eq!(generate_qr_code("devmock").expect("qr code"), generate_qr_code("devmock").expect("qr code"));
	}

	#[test]
	fn longer_text_gives_larger_image() {
		let short = decode(&generate_qr_code("a").expect("qr code"));
		let long = decode(&generate_qr_code(&"a".repeat(500)).expect("qr code"));
		assert!(long.len() > short.len());
	}

	#[test]
	fn empty_text_is_rejected() {
		assert_eq!(generate_qr_code(""), Err(GenerationError::EmptyInput { field: "text" }));
	}

	#[test]
	fn oversized_text_is_invalid() {
		let result = generate_qr_code(&"x".repeat(8000));
		assert!(matches!(result, Err(GenerationError::InvalidOption { option: "text", .. })), "{result:?}");
	}
}
