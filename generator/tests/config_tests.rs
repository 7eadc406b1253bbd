//! FILENAME: generator/tests/config_tests.rs

use ast_generator::{GeneratorConfig, NodeWeights, RandomAstGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shunting_yard::to_postfix;

#[test]
fn partial_json_config_falls_back_to_defaults() {
    let config: GeneratorConfig = serde_json::from_str(r#"{ "max_depth": 3 }"#).unwrap();

    assert_eq!(config.max_depth, 3);
    assert_eq!(config.max_number, 9);
    assert_eq!(config.weights, NodeWeights::default());
}

#[test]
fn config_survives_json() {
    let config = GeneratorConfig {
        max_depth: 4,
        max_number: 1000,
        weights: NodeWeights {
            power: 10,
            ..NodeWeights::default()
        },
    };

    let json = serde_json::to_string(&config).unwrap();
    let loaded: GeneratorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn custom_config_trees_round_trip() {
    let config: GeneratorConfig = serde_json::from_str(
        r#"{
            "max_depth": 6,
            "max_number": 123456,
            "weights": { "power": 8, "unary_minus": 4, "number": 5 }
        }"#,
    )
    .unwrap();

    let mut generator = RandomAstGenerator::with_config(config, StdRng::seed_from_u64(17)).unwrap();
    for _ in 0..200 {
        let tree = generator.generate();
        assert!(tree.depth() <= 7);
        assert_eq!(
            to_postfix(&tree.to_infix_string()).unwrap(),
            tree.to_postfix_string()
        );
    }
}
