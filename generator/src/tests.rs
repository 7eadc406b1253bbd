//! FILENAME: generator/src/tests.rs
//! PURPOSE: Unit tests for the generator configuration and node drawing.

use crate::config::{GeneratorConfig, NodeWeights};
use crate::error::GeneratorError;
use crate::generator::{NodeKind, RandomAstGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shunting_yard::{BuiltinFunction, Expression};

fn only(weights: NodeWeights) -> GeneratorConfig {
    GeneratorConfig {
        weights,
        ..GeneratorConfig::default()
    }
}

fn zero_weights() -> NodeWeights {
    NodeWeights {
        unary_minus: 0,
        unary_plus: 0,
        add: 0,
        subtract: 0,
        multiply: 0,
        divide: 0,
        power: 0,
        number: 0,
        function_call: 0,
    }
}

#[test]
fn default_config_matches_table() {
    let config = GeneratorConfig::default();
    assert_eq!(config.max_depth, 10);
    assert_eq!(config.max_number, 9);

    let weights: Vec<u32> = config.weights.table().iter().map(|(_, w)| *w).collect();
    assert_eq!(weights, vec![1, 1, 2, 2, 2, 2, 2, 7, 1]);
    assert_eq!(config.weights.total(), 20);
}

#[test]
fn all_zero_weights_are_rejected() {
    let result = RandomAstGenerator::with_config(only(zero_weights()), StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(GeneratorError::InvalidWeights(_))));
}

#[test]
fn depth_limit_zero_yields_single_digit() {
    let config = GeneratorConfig {
        max_depth: 0,
        ..GeneratorConfig::default()
    };
    let mut generator = RandomAstGenerator::with_config(config, StdRng::seed_from_u64(3)).unwrap();

    for _ in 0..100 {
        match generator.generate() {
            Expression::Number(n) => assert!(n <= 9),
            other => panic!("expected a number, got {:?}", other),
        }
    }
}

#[test]
fn number_only_weights_yield_numbers() {
    let weights = NodeWeights {
        number: 1,
        ..zero_weights()
    };
    let mut generator = RandomAstGenerator::with_config(only(weights), StdRng::seed_from_u64(5)).unwrap();

    for _ in 0..50 {
        assert_eq!(generator.draw_kind(), NodeKind::Number);
        assert_eq!(generator.generate().depth(), 1);
    }
}

#[test]
fn function_calls_use_builtin_arity() {
    let weights = NodeWeights {
        function_call: 1,
        ..zero_weights()
    };
    let config = GeneratorConfig {
        max_depth: 3,
        ..only(weights)
    };
    let mut generator = RandomAstGenerator::with_config(config, StdRng::seed_from_u64(11)).unwrap();

    for _ in 0..50 {
        let tree = generator.generate();
        match &tree {
            Expression::FunctionCall { name, args } => {
                let function = BuiltinFunction::from_name(name).unwrap();
                assert_eq!(args.len(), function.arity());
            }
            other => panic!("expected a call, got {:?}", other),
        }
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(tree.depth(), 4);
    }
}

#[test]
fn draws_follow_weights() {
    let mut generator = RandomAstGenerator::with_seed(2024).unwrap();
    let draws = 20_000;
    let numbers = (0..draws)
        .filter(|_| generator.draw_kind() == NodeKind::Number)
        .count();

    // expected 7/20 of all draws
    let share = numbers as f64 / draws as f64;
    assert!((0.30..0.40).contains(&share), "number share {}", share);
}

#[test]
fn same_seed_same_tree() {
    let mut a = RandomAstGenerator::with_seed(42).unwrap();
    let mut b = RandomAstGenerator::with_seed(42).unwrap();

    for _ in 0..20 {
        assert_eq!(a.generate(), b.generate());
    }
}
