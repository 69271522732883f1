use std::path::{Path, PathBuf};
use std::{fs, io};

use clap::Parser;
use devmock_core::GeneratorDefaults;
use thiserror::Error;

/// Command line of the HTTP server.
#[derive(Parser, Debug, Clone)]
#[command(name = "devmock-server")]
#[command(about = "HTTP API serving synthetic test data")]
pub struct ServerArgs {
	/// Address to bind
	#[arg(long, env = "DEVMOCK_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on
	#[arg(long, env = "PORT", default_value_t = 5000)]
	pub port: u16,

	/// TOML file overriding the generator defaults
	#[arg(long, env = "DEVMOCK_DEFAULTS", value_name = "FILE")]
	pub defaults: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("cannot read {}: {source}", path.display())]
	Io { path: PathBuf, source: io::Error },
	#[error("invalid defaults in {}: {source}", path.display())]
	Parse { path: PathBuf, source: toml::de::Error },
}

/// Parses generator defaults from TOML text. Absent keys keep their default.
pub fn parse_defaults(text: &str, path: &Path) -> Result<GeneratorDefaults, ConfigError> {
	toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Loads the defaults file if one was given, else the built-in defaults.
pub fn load_defaults(path: Option<&Path>) -> Result<GeneratorDefaults, ConfigError> {
	let Some(path) = path else {
		return Ok(GeneratorDefaults::default());
	};
	let text = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
	parse_defaults(&text, path)
}

#[cfg(test)]
mod tests {
	use devmock_core::generators::hash::HashAlgorithm;
	use devmock_core::generators::lorem::LoremUnit;
	use devmock_core::generators::uuid::UuidVersion;
	use rstest::rstest;

	use super::*;

	fn parse(text: &str) -> Result<GeneratorDefaults, ConfigError> {
		parse_defaults(text, Path::new("defaults.toml"))
	}

	#[test]
	fn empty_file_keeps_builtin_defaults() {
		assert_eq!(parse("").expect("valid"), GeneratorDefaults::default());
	}

	#[test]
	fn tables_override_single_fields() {
		let text = r#"
			uuid_version = "v1"
			hash_algorithm = "SHA512"
			locale_code = "DE"

			[password]
			length = 32
			symbols = false

			[lorem]
			count = 5
			unit = "words"
		"#;
		let defaults = parse(text).expect("valid");
		assert_eq!(defaults.uuid_version, UuidVersion::V1);
		assert_eq!(defaults.hash_algorithm, HashAlgorithm::Sha512);
		assert_eq!(defaults.locale_code, "DE");
		assert_eq!(defaults.password.length, 32);
		assert!(!defaults.password.symbols);
		assert!(defaults.password.lowercase);
		assert_eq!(defaults.lorem.count, 5);
		assert_eq!(defaults.lorem.unit, LoremUnit::Words);
	}

	#[rstest]
	#[case("password = 3")]
	#[case("[password]\nlength = -1")]
	#[case("locale_code = ")]
	fn malformed_files_are_rejected(#[case] text: &str) {
		assert!(matches!(parse(text), Err(ConfigError::Parse { .. })));
	}

	#[test]
	fn missing_file_is_io_error() {
		let result = load_defaults(Some(Path::new("/nonexistent/devmock/defaults.toml")));
		assert!(matches!(result, Err(ConfigError::Io { .. })));
	}

	#[test]
	fn no_file_means_builtin_defaults() {
		assert_eq!(load_defaults(None).expect("defaults"), GeneratorDefaults::default());
	}

	#[test]
	fn port_flag_is_parsed() {
		let args = ServerArgs::try_parse_from(["devmock-server", "--port", "8080"]).expect("valid args");
		assert_eq!(args.port, 8080);
		assert!(args.defaults.is_none());
	}
}
