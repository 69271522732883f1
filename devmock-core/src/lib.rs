//! Synthetic test-data generation library.
//!
//! This crate provides a set of independent generators including:
//! - Passwords from configurable character classes
//! - Random colors with exact HEX / HSL derivation
//! - Time-based and random UUIDs
//! - Non-keyed digests (MD5, SHA-1, SHA-256, SHA-512)
//! - Lorem ipsum filler text
//! - Locale-aware postal addresses with a degradation policy
//! - Composite identities built on the address generator
//! - QR codes as PNG data URLs
//!
//! Every generator takes its random source as a parameter, so a seeded RNG
//! makes output reproducible:
//!
//! ```
//! use devmock_core::config::GeneratorDefaults;
//! use devmock_core::dispatcher::{GenerationRequest, GeneratorKind, generate};
//! use devmock_core::locale::BundledLocales;
//!
//! let request = GenerationRequest::with_defaults(GeneratorKind::Password);
//! let response = generate(&request, &GeneratorDefaults::default(), &BundledLocales::default(), &mut rand::rng());
//! assert!(response.is_ok());
//! ```

/// Generator implementations and their option types.
pub mod generators;

/// Locale data providers used by the address generators.
pub mod locale;

/// Request routing from a [`GenerationRequest`](dispatcher::GenerationRequest)
/// to the matching generator.
pub mod dispatcher;

/// Named defaults for every option.
pub mod config;

/// Error types.
pub mod error;

pub use config::GeneratorDefaults;
pub use dispatcher::{GenerationRequest, GenerationResponse, GeneratorKind, generate};
pub use error::{DataError, GenerationError};
pub use locale::{BundledLocales, FakerLocaleData, LocaleProvider, StaticLocaleData};
