use rand::Rng;
use serde::Serialize;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

/// A color in HSL space.
///
/// `hue` lies in `[0, 360)`, `saturation` and `lightness` are percentages in
/// `[0, 100]`. All three carry one decimal of precision when produced by
/// [`Rgb::to_hsl`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
	pub hue: f64,
	pub saturation: f64,
	pub lightness: f64,
}

/// Rounds to one decimal digit.
fn round1(value: f64) -> f64 {
	(value * 10.0).round() / 10.0
}

impl Rgb {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// `#rrggbb`, lowercase.
	pub fn to_hex(&self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// Converts to HSL with the min/max/delta method.
	///
	/// The hue is picked by which channel holds the maximum, scaled to
	/// degrees and shifted into `[0, 360)`.
	pub fn to_hsl(&self) -> Hsl {
		let r = f64::from(self.r) / 255.0;
		let g = f64::from(self.g) / 255.0;
		let b = f64::from(self.b) / 255.0;

		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let delta = max - min;

		let lightness = (max + min) / 2.0;
		let saturation = if delta == 0.0 { 0.0 } else { delta / (1.0 - (2.0 * lightness - 1.0).abs()) };

		let sector = if delta == 0.0 {
			0.0
		} else if max == r {
			((g - b) / delta) % 6.0
		} else if max == g {
			(b - r) / delta + 2.0
		} else {
			(r - g) / delta + 4.0
		};
		let mut hue = sector * 60.0;
		if hue < 0.0 {
			hue += 360.0;
		}
		// 359.96 rounds up to 360.0
		let mut hue = round1(hue);
		if hue >= 360.0 {
			hue -= 360.0;
		}

		Hsl {
			hue,
			saturation: round1(saturation * 100.0),
			lightness: round1(lightness * 100.0),
		}
	}
}

impl Hsl {
	/// Inverse conversion, rounding each channel to the nearest integer.
	pub fn to_rgb(&self) -> Rgb {
		let s = self.saturation / 100.0;
		let l = self.lightness / 100.0;
		let h = self.hue.rem_euclid(360.0) / 60.0;

		let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
		let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
		let m = l - chroma / 2.0;

		let (r, g, b) = match h {
			h if h < 1.0 => (chroma, x, 0.0),
			h if h < 2.0 => (x, chroma, 0.0),
			h if h < 3.0 => (0.0, chroma, x),
			h if h < 4.0 => (0.0, x, chroma),
			h if h < 5.0 => (x, 0.0, chroma),
			_ => (chroma, 0.0, x),
		};

		let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
		Rgb::new(channel(r), channel(g), channel(b))
	}
}

/// A generated color in every supported notation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
	pub hex: String,
	pub rgb: String,
	pub hsl: String,
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<Rgb> for Color {
	fn from(rgb: Rgb) -> Self {
		let hsl = rgb.to_hsl();
		Self {
			hex: rgb.to_hex(),
			rgb: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
			hsl: format!("hsl({}, {}%, {}%)", hsl.hue, hsl.saturation, hsl.lightness),
			r: rgb.r,
			g: rgb.g,
			b: rgb.b,
		}
	}
}

/// Samples each channel uniformly in `[0, 255]`.
pub fn generate_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
	Color::from(Rgb::new(rng.random(), rng.random(), rng.random()))
}
