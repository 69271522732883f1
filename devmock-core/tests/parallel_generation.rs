//! Generators share no mutable state: parallel callers each get complete,
//! independent values.

use std::collections::HashSet;
use std::thread;

use devmock_core::{BundledLocales, GenerationRequest, GenerationResponse, GeneratorDefaults, GeneratorKind, generate};
use rstest::rstest;

const THREADS: usize = 8;
const CALLS: usize = 50;

fn run_parallel(kind: GeneratorKind) -> Vec<GenerationResponse> {
	let defaults = GeneratorDefaults::default();
	let locales = BundledLocales::default();
	let request = GenerationRequest::with_defaults(kind);
	thread::scope(|scope| {
		let workers: Vec<_> = (0..THREADS)
			.map(|_| {
				scope.spawn(|| {
					let mut rng = rand::rng();
					(0..CALLS)
						.map(|_| generate(&request, &defaults, &locales, &mut rng).expect("generated"))
						.collect::<Vec<_>>()
				})
			})
			.collect();
		workers.into_iter().flat_map(|worker| worker.join().expect("worker panicked")).collect()
	})
}

fn text(response: &GenerationResponse) -> &str {
	match response {
		GenerationResponse::Text { result } => result,
		other => panic!("expected text, got {other:?}"),
	}
}

#[test]
fn parallel_uuids_are_unique() {
	let responses = run_parallel(GeneratorKind::Uuid);
	let ids: HashSet<&str> = responses.iter().map(text).collect();
	assert_eq!(ids.len(), THREADS * CALLS);
}

#[test]
fn parallel_passwords_are_well_formed() {
	for response in run_parallel(GeneratorKind::Password) {
		let password = text(&response);
		assert_eq!(password.chars().count(), 16, "{password}");
	}
}

#[rstest]
#[case(GeneratorKind::Identity)]
#[case(GeneratorKind::Address)]
fn parallel_addresses_are_complete(#[case] kind: GeneratorKind) {
	for response in run_parallel(kind) {
		let value = serde_json::to_value(&response).expect("serializable");
		for field in ["street", "city", "state", "zip", "country"] {
			assert!(value["details"][field].as_str().is_some_and(|s| !s.is_empty()), "{kind}: {value}");
		}
		assert_ne!(value["details"]["country"], "Error (Fallback)", "{value}");
	}
}
