use devmock_core::generators::address::{AddressOptions, StateStyle, generate_address};
use devmock_core::generators::color::generate_color;
use devmock_core::generators::hash::{HashAlgorithm, generate_hash};
use devmock_core::generators::identity::{generate_identity, generate_name_address};
use devmock_core::generators::lorem::{LoremOptions, LoremUnit, generate_lorem};
use devmock_core::generators::password::{PasswordOptions, generate_password};
use devmock_core::generators::qr_code::generate_qr_code;
use devmock_core::generators::uuid::{UuidVersion, generate_uuid};
use devmock_core::{BundledLocales, GenerationRequest, GeneratorDefaults, GeneratorKind, LocaleProvider, generate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Same seed, same output: every generator draws from this one source
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    // Bundled locales; any LocaleProvider can be used instead
    let locales = BundledLocales::default();

    // Passwords: 16 characters from all four classes by default
    let options = PasswordOptions::default();
    println!("Password: {}", generate_password(&options, &mut rng)?);

    // Only lowercase letters and digits
    let options = PasswordOptions { length: 10, uppercase: false, symbols: false, ..PasswordOptions::default() };
    println!("PIN-like password: {}", generate_password(&options, &mut rng)?);

    // Every class disabled is an error, not an empty password
    let options = PasswordOptions { lowercase: false, uppercase: false, numbers: false, symbols: false, ..options };
    match generate_password(&options, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty charset rejected: {e}"),
    }

    let color = generate_color(&mut rng);
    println!("Color: {} / {} / {}", color.hex, color.rgb, color.hsl);

    println!("UUID v4: {}", generate_uuid(UuidVersion::V4, &mut rng));
    println!("UUID v1: {}", generate_uuid(UuidVersion::V1, &mut rng));

    // Digests do not use the random source
    for algorithm in [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256, HashAlgorithm::Sha512] {
        println!("{algorithm:?}(\"hello\"): {}", generate_hash("hello", algorithm)?);
    }

    let options = LoremOptions { count: 2, unit: LoremUnit::Sentences };
    println!("Lorem: {}", generate_lorem(&options, &mut rng)?);

    // One address per bundled locale; locales without states get a placeholder
    for profile in locales.profiles() {
        let outcome = generate_address(&AddressOptions::new(profile.code), &locales, &mut rng);
        println!("Address ({}): {}", profile.code, outcome.line());
    }

    // Unknown locales fall back to US data
    let options = AddressOptions::new("XX").with_state_style(StateStyle::Full);
    println!("Address (XX): {}", generate_address(&options, &locales, &mut rng).line());

    let person = generate_identity(&PasswordOptions::default(), &locales, &mut rng)?;
    println!("Identity: {} <{}>, {}", person.name, person.details.email, person.address);

    let card = generate_name_address(&locales, &mut rng);
    println!("Name and address: {} / {}", card.name, card.address);

    // QR codes are deterministic and come back as a PNG data URL
    let url = generate_qr_code("https://example.com")?;
    println!("QR code: {}... ({} bytes)", url.get(..40).unwrap_or(&url), url.len());

    // The dispatcher resolves missing options against the defaults
    let defaults = GeneratorDefaults::default();
    for kind in GeneratorKind::ALL {
        let request = GenerationRequest::with_defaults(kind);
        match generate(&request, &defaults, &locales, &mut rng) {
            Ok(response) => println!("{kind}: {response:?}"),
            Err(e) => println!("{kind}: {e}"),
        }
    }

    Ok(())
}
