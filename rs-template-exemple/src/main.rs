use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_template_core::model::builder::TemplateTreeBuilder;
use rs_template_core::model::generator::{TemplateGenerator, generate_template};
use rs_template_core::model::record::{GroupRecord, parse_records};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Flat grouping records: the first record declares the root group,
    // consecutive records with the same id accumulate content alternatives
    let records = vec![
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
    ];

    // One-call entry point: builds the tree and samples one template
    // using the thread-local random source
    println!("One-shot: {}", generate_template(154, &records)?);

    // Build once, generate many times against the read-only tree
    let tree = TemplateTreeBuilder::build(&records)?;
    let mut generator = TemplateGenerator::new(&tree);

    // Threshold drives mixed nodes (group 36 carries "jog" AND children):
    // 1.0 always emits the node's own content, 0.0 always recurses
    generator.set_threshold(0.5)?;

    // Test invalid threshold values
    match generator.set_threshold(2.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Threshold 2.0 is invalid, must be between 0.0 and 1.0"),
    }

    // A seeded random source makes the output reproducible across runs
    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..10 {
        println!("Generated template {}: {}", i + 1, generator.generate(&154.into(), &mut rng)?);
    }

    // Starting from any registered group works, not only the root
    println!("From group 36: {}", generator.generate(&36.into(), &mut rng)?);

    // Asking for an unregistered group id
    match generator.generate(&999.into(), &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("This group (999) does not exist"),
    }

    // Records can also come from untyped JSON mappings
    let parsed = parse_records(
        r#"[
            {"group_id": "greeting", "children": ["hello", "who"]},
            {"group_id": "hello", "content": "Hi"},
            {"group_id": "hello", "content": "Hey"},
            {"group_id": "who", "content": "there"},
            {"group_id": "who", "content": "friend"}
        ]"#,
    )?;
    println!("From JSON: {}", generate_template("greeting", &parsed)?);

    Ok(())
}
