// Copyright 2025 the knapsack-solvers developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! End to end tests exercising the three solvers against each other, a
//! brute force oracle, the instance files under `tests/resources`, and
//! the output contract of the command line adapter.

use std::{path::PathBuf, time::Duration};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use regex::Regex;

use knapsack::*;

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(id)
}

fn load(id: &str) -> Instance {
    Instance::from_file(locate(id)).expect("instance not found")
}

/// All solvers under test, value-only ones included.
fn solvers() -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(DynamicProgramming),
        Box::new(CompressedDynamicProgramming),
        Box::new(Backtracking),
        Box::new(BranchAndBound),
    ]
}

/// Independent oracle enumerating all `2^n` subsets; only usable for
/// small `n`.
fn brute_force(instance: &Instance) -> usize {
    let n = instance.nb_items();
    let mut best = 0_usize;
    for mask in 0_u64..(1 << n) {
        let mut weight = 0_usize;
        let mut value = 0_usize;
        for (i, item) in instance.items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                weight += item.weight;
                value += item.value;
            }
        }
        if weight <= instance.capacity && value > best {
            best = value;
        }
    }
    best
}

/// Random instances in the spirit of the ones the external generator
/// emits: weights in `1..=30`, values in `1..=100`.
fn random_instance(rng: &mut SmallRng, n: usize, capacity: usize) -> Instance {
    let items = (0..n)
        .map(|_| Item { weight: rng.gen_range(1..=30), value: rng.gen_range(1..=100) })
        .collect();
    Instance::new(capacity, items)
}

fn assert_feasible(instance: &Instance, solution: &Solution) {
    let chosen = solution.items.as_ref().expect("expected a reconstructed subset");
    let weight: usize = chosen.iter().map(|&i| instance.items[i].weight).sum();
    let value: usize = chosen.iter().map(|&i| instance.items[i].value).sum();
    assert!(weight <= instance.capacity);
    assert_eq!(solution.best_value, value);
    assert!(chosen.windows(2).all(|w| w[0] < w[1]), "indices must be ascending");
}

#[test]
fn all_solvers_agree_on_the_documented_example() {
    let instance = load("instancia_exemplo.txt");
    for solver in solvers() {
        assert_eq!(9, solver.solve(&instance).unwrap().best_value, "{}", solver.name());
    }
}

#[test]
fn a_zero_capacity_instance_is_worth_nothing() {
    let instance = load("instancia_capacidade_zero.txt");
    for solver in solvers() {
        assert_eq!(0, solver.solve(&instance).unwrap().best_value, "{}", solver.name());
    }
}

#[test]
fn a_weightless_item_is_taken_even_with_zero_capacity() {
    let instance = load("instancia_peso_zero.txt");
    for solver in solvers() {
        assert_eq!(5, solver.solve(&instance).unwrap().best_value, "{}", solver.name());
    }
}

#[test]
fn an_empty_instance_is_worth_nothing() {
    let instance = load("instancia_vazia.txt");
    for solver in solvers() {
        assert_eq!(0, solver.solve(&instance).unwrap().best_value, "{}", solver.name());
    }
}

#[test]
fn unit_weights_pack_the_five_best_values() {
    // Ten items of weight 1 valued 1..=10, capacity 5: 10+9+8+7+6.
    let instance = load("instancia_uniforme.txt");
    for solver in solvers() {
        assert_eq!(40, solver.solve(&instance).unwrap().best_value, "{}", solver.name());
    }
}

#[test]
fn a_truncated_instance_file_is_rejected() {
    let result = Instance::from_file(locate("instancia_truncada.txt"));
    assert!(matches!(result, Err(ParseError::ItemCount { expected: 3, found: 2 })));
}

#[test]
fn a_negative_value_in_the_file_is_rejected() {
    let result = Instance::from_file(locate("instancia_negativa.txt"));
    assert!(matches!(result, Err(ParseError::Negative { what: "value", .. })));
}

#[test]
fn all_solvers_agree_on_random_instances() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let n = rng.gen_range(0..=12);
        let capacity = rng.gen_range(0..=120);
        let instance = random_instance(&mut rng, n, capacity);

        let oracle = DynamicProgramming.solve(&instance).unwrap();
        for solver in solvers() {
            let solution = solver.solve(&instance).unwrap();
            assert_eq!(
                oracle.best_value, solution.best_value,
                "{} disagrees on {:?}", solver.name(), instance
            );
            if solution.items.is_some() {
                assert_feasible(&instance, &solution);
            }
        }
    }
}

#[test]
fn no_subset_beats_the_reported_optimum() {
    let mut rng = SmallRng::seed_from_u64(0xacc0);
    for _ in 0..20 {
        let n = rng.gen_range(1..=16);
        let capacity = rng.gen_range(10..=200);
        let instance = random_instance(&mut rng, n, capacity);
        let reported = DynamicProgramming.solve(&instance).unwrap().best_value;
        assert_eq!(brute_force(&instance), reported, "on {instance:?}");
    }
}

#[test]
fn growing_the_capacity_never_decreases_the_optimum() {
    let mut rng = SmallRng::seed_from_u64(0xcafe);
    let instance = random_instance(&mut rng, 10, 0);

    let mut previous = 0_usize;
    for capacity in 0..=150 {
        let wider = Instance::new(capacity, instance.items.clone());
        let value = DynamicProgramming.solve(&wider).unwrap().best_value;
        assert!(value >= previous, "optimum dropped at capacity {capacity}");
        previous = value;
    }
}

#[test]
fn a_weightless_item_is_always_in_the_reconstructed_subset() {
    let mut rng = SmallRng::seed_from_u64(0xbeef);
    for _ in 0..10 {
        let mut instance = random_instance(&mut rng, 8, 40);
        instance.items.push(Item { weight: 0, value: 1 });
        let free = instance.nb_items() - 1;

        for solver in solvers() {
            let solution = solver.solve(&instance).unwrap();
            if let Some(chosen) = &solution.items {
                assert!(chosen.contains(&free), "{} left the free item out", solver.name());
            }
        }
    }
}

#[test]
fn the_value_line_contract_holds_for_every_solver() {
    let instance = load("instancia_exemplo.txt");
    let contract = Regex::new(r"(?m)^Valor máximo: (\d+)$").unwrap();

    for solver in solvers() {
        let solution = solver.solve(&instance).unwrap();
        let block = cli::report(solver.name(), &solution, Duration::from_millis(1));

        let captures = contract.captures(&block).expect("value line missing");
        assert_eq!("9", &captures[1]);
    }
}
