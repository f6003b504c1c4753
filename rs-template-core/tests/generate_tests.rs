use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_template_core::error::TemplateError;
use rs_template_core::model::builder::TemplateTreeBuilder;
use rs_template_core::model::generator::{
	TemplateGenerator, generate_template, generate_template_seeded,
};
use rs_template_core::model::record::GroupRecord;

/// Reference dataset: pronoun / adverb / verb sentence groups.
fn sentence_records() -> Vec<GroupRecord> {
	vec![
		GroupRecord::children(154, vec![234.into(), 124.into(), 36.into()]),
		GroupRecord::content(234, "I"),
		GroupRecord::content(234, "You"),
		GroupRecord::content(234, "We"),
		GroupRecord::content(124, "like to"),
		GroupRecord::content(124, "sometimes"),
		GroupRecord::content(36, "jog"),
		GroupRecord::children(36, vec![46.into(), 242.into()]),
		GroupRecord::content(46, "eat"),
		GroupRecord::content(242, "sandwiches"),
		GroupRecord::content(242, "eggs"),
	]
}

/// Dataset with a mixed node (group 36: own content and children).
fn mixed_node_records() -> Vec<GroupRecord> {
	vec![
		GroupRecord::children(0, vec![36.into()]),
		GroupRecord::content(36, "jog"),
		GroupRecord::children(36, vec![46.into(), 242.into()]),
		GroupRecord::content(46, "eat"),
		GroupRecord::content(242, "sandwiches"),
	]
}

// --- TESTS GENERATION ---
#[test]
fn test_children_iterate_in_declared_order() {
	// Single alternatives everywhere, so the output is fully determined
	let records = vec![
		GroupRecord::children(1, vec![2.into(), 3.into()]),
		GroupRecord::content(2, "A"),
		GroupRecord::content(3, "B"),
	];

	let mut rng = StdRng::seed_from_u64(0);
	for _ in 0..50 {
		let text = generate_template_seeded(1, &records, 0.5, &mut rng).unwrap();
		assert_eq!(text, "A B.");
	}
}

#[test]
fn test_output_is_trimmed_and_terminated() {
	let tree = TemplateTreeBuilder::build(&sentence_records()).unwrap();
	let generator = TemplateGenerator::new(&tree);
	let mut rng = StdRng::seed_from_u64(11);

	for _ in 0..100 {
		let text = generator.generate(&154.into(), &mut rng).unwrap();
		assert!(text.ends_with('.'), "missing terminal period: {:?}", text);
		assert!(!text.ends_with(".."), "double period: {:?}", text);
		assert_eq!(text, text.trim(), "unexpected surrounding whitespace: {:?}", text);
		assert!(!text.starts_with(' '));
	}
}

#[test]
fn test_seeded_generation_is_reproducible() {
	let tree = TemplateTreeBuilder::build(&sentence_records()).unwrap();
	let generator = TemplateGenerator::new(&tree);

	let mut first_run = Vec::new();
	let mut rng = StdRng::seed_from_u64(42);
	for _ in 0..20 {
		first_run.push(generator.generate(&154.into(), &mut rng).unwrap());
	}

	let mut second_run = Vec::new();
	let mut rng = StdRng::seed_from_u64(42);
	for _ in 0..20 {
		second_run.push(generator.generate(&154.into(), &mut rng).unwrap());
	}

	assert_eq!(first_run, second_run);
}

#[test]
fn test_threshold_one_always_emits_content() {
	let tree = TemplateTreeBuilder::build(&mixed_node_records()).unwrap();
	let mut generator = TemplateGenerator::new(&tree);
	generator.set_threshold(1.0).unwrap();

	let mut rng = StdRng::seed_from_u64(3);
	for _ in 0..100 {
		assert_eq!(generator.generate(&36.into(), &mut rng).unwrap(), "jog.");
	}
}

#[test]
fn test_threshold_zero_always_recurses() {
	let tree = TemplateTreeBuilder::build(&mixed_node_records()).unwrap();
	let mut generator = TemplateGenerator::new(&tree);
	generator.set_threshold(0.0).unwrap();

	let mut rng = StdRng::seed_from_u64(3);
	for _ in 0..100 {
		assert_eq!(
			generator.generate(&36.into(), &mut rng).unwrap(),
			"eat sandwiches."
		);
	}
}

#[test]
fn test_degenerate_leaf_produces_empty_template() {
	// Group 2 has neither contents nor children: empty production
	let records = vec![
		GroupRecord::children(1, vec![2.into()]),
		GroupRecord::children(2, vec![]),
	];
	let tree = TemplateTreeBuilder::build(&records).unwrap();
	let generator = TemplateGenerator::new(&tree);
	let mut rng = StdRng::seed_from_u64(0);

	assert_eq!(generator.generate(&2.into(), &mut rng).unwrap(), ".");
	assert_eq!(generator.generate(&1.into(), &mut rng).unwrap(), ".");
}

#[test]
fn test_generated_text_uses_known_alternatives() {
	let mut rng = StdRng::seed_from_u64(99);
	for _ in 0..50 {
		let text = generate_template_seeded(154, &sentence_records(), 0.5, &mut rng).unwrap();
		let body = text.trim_end_matches('.');
		for word in body.split_whitespace() {
			assert!(
				["I", "You", "We", "like", "to", "sometimes", "jog", "eat", "sandwiches", "eggs"]
					.contains(&word),
				"unknown word {:?} in {:?}",
				word,
				text
			);
		}
	}
}

#[test]
fn test_one_call_entry_point() {
	let text = generate_template(154, &sentence_records()).unwrap();
	assert!(text.ends_with('.'));
	let first = text.split_whitespace().next().unwrap();
	assert!(["I", "You", "We"].contains(&first), "unexpected start: {:?}", text);
}

// --- TESTS FAILURE CONDITIONS ---
#[test]
fn test_unknown_start_id() {
	let tree = TemplateTreeBuilder::build(&sentence_records()).unwrap();
	let generator = TemplateGenerator::new(&tree);
	let mut rng = StdRng::seed_from_u64(0);

	let result = generator.generate(&999.into(), &mut rng);
	assert_eq!(result, Err(TemplateError::UnknownIdentifier(999.into())));
}

#[test]
fn test_invalid_threshold_is_rejected() {
	let tree = TemplateTreeBuilder::build(&sentence_records()).unwrap();
	let mut generator = TemplateGenerator::new(&tree);

	assert_eq!(generator.set_threshold(1.5), Err(TemplateError::InvalidThreshold(1.5)));
	assert_eq!(generator.set_threshold(-0.1), Err(TemplateError::InvalidThreshold(-0.1)));
	// The generator keeps its previous threshold after a rejected update
	assert_eq!(generator.threshold(), 0.5);

	let mut rng = StdRng::seed_from_u64(0);
	let result = generate_template_seeded(154, &sentence_records(), 2.0, &mut rng);
	assert_eq!(result, Err(TemplateError::InvalidThreshold(2.0)));
}

#[test]
fn test_builder_errors_propagate_through_entry_point() {
	let result = generate_template(1, &[]);
	assert!(matches!(result, Err(TemplateError::MalformedInput { .. })));
}
