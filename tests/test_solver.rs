use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use magicga::config::SolverConfiguration;
use magicga::fitness::FitnessEvaluator;
use magicga::progress::SharedProgress;
use magicga::rng::RandomNumberGenerator;
use magicga::solver::Solver;
use magicga::square::MagicSquare;

fn assert_valid_permutation(square: &MagicSquare) {
    let mut genes = square.chromosome().to_vec();
    genes.sort_unstable();
    let expected: Vec<u32> = (1..=genes.len() as u32).collect();
    assert_eq!(genes, expected);
}

#[test]
fn test_end_to_end_three_by_three() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let configuration = SolverConfiguration::builder()
        .max_generations(10_000)
        .population_size(200)
        .parent_pool_size(50)
        .crossover_probability(0.9)
        .mutation_probability(0.1)
        .tournament_size(10)
        .build()
        .unwrap();

    let solver = Solver::new(3, configuration).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);
    let result = solver.solve_with_rng(&mut rng).unwrap();

    assert!(result.generation <= 10_000);
    assert_eq!(result.square.size(), 3);
    assert_valid_permutation(&result.square);

    // The returned fitness must match a fresh evaluation of the square.
    let evaluator = FitnessEvaluator::new();
    assert_eq!(evaluator.evaluate(&result.square), result.fitness);
}

#[test]
fn test_classic_magic_square_scores_zero() {
    let evaluator = FitnessEvaluator::new();
    let magic = MagicSquare::from_chromosome(vec![2, 7, 6, 9, 5, 1, 4, 3, 8]).unwrap();
    assert_eq!(evaluator.evaluate(&magic), 0);
}

#[test]
fn test_canonical_square_scores_180() {
    let evaluator = FitnessEvaluator::new();
    let ordered = MagicSquare::ordered(3).unwrap();
    assert_eq!(evaluator.evaluate(&ordered), 180);
}

#[test]
fn test_progress_is_observable_while_solving() {
    let progress = SharedProgress::new();
    let configuration = SolverConfiguration::builder()
        .max_generations(500)
        .population_size(50)
        .parent_pool_size(20)
        .report_interval(10)
        .build()
        .unwrap();

    let solver = Solver::new(4, configuration)
        .unwrap()
        .with_progress(Arc::new(progress.clone()));
    let mut rng = RandomNumberGenerator::from_seed(42);
    let result = solver.solve_with_rng(&mut rng).unwrap();

    let snapshot = progress.latest().expect("at least one snapshot published");
    assert!(snapshot.generation <= result.generation);
    assert_valid_permutation(&snapshot.square);
    // Snapshots are owned copies, safe to keep after the solve finished.
    assert_eq!(snapshot.square.size(), 4);
}

#[test]
fn test_cancellation_stops_the_run() {
    // A 6x6 search with a huge generation budget would run for a long
    // time; the cancel flag has to stop it early with a best-so-far
    // result instead of an error.
    let configuration = SolverConfiguration::builder()
        .max_generations(usize::MAX)
        .population_size(100)
        .parent_pool_size(40)
        .build()
        .unwrap();

    let cancel = Arc::new(AtomicBool::new(false));
    let solver = Solver::new(6, configuration).unwrap().with_cancel(cancel.clone());

    let handle = std::thread::spawn(move || solver.solve());

    std::thread::sleep(Duration::from_millis(100));
    cancel.store(true, Ordering::Relaxed);

    let result = handle.join().unwrap().unwrap();
    assert_eq!(result.square.size(), 6);
    assert_valid_permutation(&result.square);
}

#[test]
fn test_symmetry_weight_still_terminates() {
    let configuration = SolverConfiguration::builder()
        .max_generations(100)
        .population_size(40)
        .parent_pool_size(20)
        .symmetry_weight(3.0)
        .build()
        .unwrap();

    let solver = Solver::new(4, configuration).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);
    let result = solver.solve_with_rng(&mut rng).unwrap();

    assert!(result.generation <= 100);
    assert_valid_permutation(&result.square);
}
