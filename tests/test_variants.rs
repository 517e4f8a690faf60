use magicga::config::{
    CrossoverKind, MutationKind, ParentSelectionKind, ReplacementKind, SolverConfiguration,
    SurvivorSelectionKind,
};
use magicga::rng::RandomNumberGenerator;
use magicga::solver::{Solver, SolverResult};
use magicga::Result;

fn run_variant(
    parent_selection: ParentSelectionKind,
    crossover: CrossoverKind,
    mutation: MutationKind,
    replacement: ReplacementKind,
    survivor_selection: SurvivorSelectionKind,
) -> Result<SolverResult> {
    let configuration = SolverConfiguration::builder()
        .max_generations(50)
        .population_size(60)
        .parent_pool_size(30)
        .tournament_size(5)
        .parent_selection(parent_selection)
        .crossover(crossover)
        .mutation(mutation)
        .replacement(replacement)
        .survivor_selection(survivor_selection)
        .build()?;

    let solver = Solver::new(4, configuration)?;
    let mut rng = RandomNumberGenerator::from_seed(42);
    solver.solve_with_rng(&mut rng)
}

fn assert_well_formed(result: &SolverResult) {
    assert!(result.generation <= 50);
    assert_eq!(result.square.size(), 4);

    let mut genes = result.square.chromosome().to_vec();
    genes.sort_unstable();
    let expected: Vec<u32> = (1..=16).collect();
    assert_eq!(genes, expected);
}

#[test]
fn test_every_parent_selection_variant_completes() {
    for parent_selection in [
        ParentSelectionKind::Elite,
        ParentSelectionKind::Roulette,
        ParentSelectionKind::EliteRoulette,
        ParentSelectionKind::Constrained,
        ParentSelectionKind::Panmixia,
    ] {
        let result = run_variant(
            parent_selection,
            CrossoverKind::Order,
            MutationKind::CompositeSwap,
            ReplacementKind::MergeAndTrim,
            SurvivorSelectionKind::Tournament,
        )
        .unwrap();
        assert_well_formed(&result);
    }
}

#[test]
fn test_every_crossover_and_mutation_variant_completes() {
    for crossover in [CrossoverKind::Order, CrossoverKind::Position] {
        for mutation in [
            MutationKind::GeneSwap,
            MutationKind::RowSwap,
            MutationKind::ColumnSwap,
            MutationKind::CompositeSwap,
        ] {
            let result = run_variant(
                ParentSelectionKind::EliteRoulette,
                crossover,
                mutation,
                ReplacementKind::MergeAndTrim,
                SurvivorSelectionKind::WorstFirst,
            )
            .unwrap();
            assert_well_formed(&result);
        }
    }
}

#[test]
fn test_full_replacement_with_roulette_pool() {
    // Roulette sampling draws with replacement, so the parent pool keeps
    // its configured size even after the first full replacement shrinks
    // the population to the number of children bred.
    let result = run_variant(
        ParentSelectionKind::EliteRoulette,
        CrossoverKind::Order,
        MutationKind::CompositeSwap,
        ReplacementKind::Full,
        SurvivorSelectionKind::Tournament,
    )
    .unwrap();
    assert_well_formed(&result);
}

#[test]
fn test_worst_first_trimming_never_loses_the_best() {
    let configuration = SolverConfiguration::builder()
        .max_generations(30)
        .population_size(40)
        .parent_pool_size(20)
        .parent_selection(ParentSelectionKind::Elite)
        .survivor_selection(SurvivorSelectionKind::WorstFirst)
        .build()
        .unwrap();

    let solver = Solver::new(3, configuration).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(7);
    let result = solver.solve_with_rng(&mut rng).unwrap();
    assert_well_formed_3(&result);
}

fn assert_well_formed_3(result: &SolverResult) {
    assert_eq!(result.square.size(), 3);
    let mut genes = result.square.chromosome().to_vec();
    genes.sort_unstable();
    let expected: Vec<u32> = (1..=9).collect();
    assert_eq!(genes, expected);
}
