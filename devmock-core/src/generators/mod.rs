//! The generators themselves.
//!
//! Each generator is a stateless function from validated options and an
//! injected random source to a complete value. Wire-level `*Params` types
//! carry optional fields and are resolved against
//! [`GeneratorDefaults`](crate::config::GeneratorDefaults) before use.

/// Locale-aware postal addresses with placeholder and fallback policy.
pub mod address;

/// Random colors with HEX and HSL derivation.
pub mod color;

/// MD5 / SHA-1 / SHA-256 / SHA-512 digests.
pub mod hash;

/// Synthetic people built on top of the address generator.
pub mod identity;

/// Pseudo-Latin filler text.
pub mod lorem;

/// Charset assembly and password sampling.
pub mod password;

/// Text rendered as a PNG QR code data URL.
pub mod qr_code;

/// Time-based and random UUIDs.
pub mod uuid;
