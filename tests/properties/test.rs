use std::collections::HashSet;
use std::thread;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use lexi_simplex::{EnteringRule, LeavingRule, Objective, Observer, Options, Phase, Problem, Snapshot, SolveError, Solver, Status};
use lexi_simplex::{solve, solve_dual};

use super::{beale, covering, resource_allocation, with_redundant_row};

#[test]
fn known_optimum_primal() {
    let solution = solve(&resource_allocation(), None).unwrap();

    assert_eq!(solution.status(), Status::Optimal);
    assert_abs_diff_eq!(solution.objective().unwrap(), -16f64, epsilon = 1e-6);
    let x = solution.x().unwrap();
    assert_eq!(x.len(), 6);
    for (computed, expected) in x.iter().zip([2f64, 1f64, 3f64, 0f64, 0f64, 0f64]) {
        assert_abs_diff_eq!(*computed, expected, epsilon = 1e-6);
    }
    for (computed, expected) in solution.shadow_price().unwrap().iter().zip([-4f64 / 3f64, -1f64 / 3f64, -4f64 / 3f64]) {
        assert_abs_diff_eq!(*computed, expected, epsilon = 1e-6);
    }
    assert_eq!(solution.iterations(Phase::One), 3);
    assert_eq!(solution.iterations(Phase::Two), 0);
}

#[test]
fn known_optimum_from_inequalities() {
    let problem = Problem::from_inequalities(
        Objective::Minimize,
        vec![-3f64, -4f64, -2f64],
        vec![vec![2f64, 0f64, 0f64], vec![1f64, 0f64, 2f64], vec![0f64, 3f64, 1f64]],
        vec![4f64, 8f64, 6f64],
    ).unwrap();
    assert_eq!(problem, resource_allocation());

    // Starting from the slack basis skips the first phase
    let solution = solve(&problem, Some(&[3, 4, 5])).unwrap();
    assert_abs_diff_eq!(solution.objective().unwrap(), -16f64, epsilon = 1e-6);
    assert_eq!(solution.iterations(Phase::One), 0);
    assert_eq!(solution.iterations(Phase::Two), 3);
}

#[test]
fn known_optimum_dual() {
    let solution = solve_dual(&covering(), &[2, 3]).unwrap();
    assert_eq!(solution.status(), Status::Optimal);
    assert_abs_diff_eq!(solution.objective().unwrap(), 5f64, epsilon = 1e-6);
    assert_eq!(solution.basis(), Some(&[0, 1][..]));
    assert_eq!(solution.iterations(Phase::Dual), 2);

    // Both methods agree
    let primal = solve(&covering(), None).unwrap();
    assert_abs_diff_eq!(primal.objective().unwrap(), 5f64, epsilon = 1e-6);

    // An optimal basis is dual feasible, and no pivots are needed
    let solution = solve_dual(&resource_allocation(), &[0, 2, 1]).unwrap();
    assert_abs_diff_eq!(solution.objective().unwrap(), -16f64, epsilon = 1e-6);
    assert_eq!(solution.total_iterations(), 0);
}

#[test]
fn primal_iterates_are_feasible() {
    for problem in [resource_allocation(), beale(), covering(), with_redundant_row(true)] {
        let mut solver = Solver::<f64>::new().with_observer(|snapshot: &Snapshot<f64>| {
            assert!(
                snapshot.solution.iter().all(|&value| value >= -1e-9),
                "infeasible iterate in {}: {:?}", snapshot.phase, snapshot.solution,
            );
        });
        let solution = solver.solve(&problem, None).unwrap();
        assert_eq!(solution.status(), Status::Optimal);
    }
}

#[test]
fn dual_iterates_are_dual_feasible() {
    let mut snapshots = Vec::new();
    let mut solver = Solver::<f64>::new().with_observer(|snapshot: &Snapshot<f64>| snapshots.push(snapshot.clone()));
    let solution = solver.solve_dual(&covering(), &[2, 3]).unwrap();
    assert_eq!(solution.status(), Status::Optimal);
    drop(solver);

    assert_eq!(snapshots.len(), 3);
    for snapshot in &snapshots {
        assert_eq!(snapshot.phase, Phase::Dual);
        assert!(snapshot.reduced_costs.iter().all(|&z| z <= 1e-9));
    }
    // The dual objective increases towards the optimum
    let objectives = snapshots.iter().map(|snapshot| snapshot.objective).collect::<Vec<_>>();
    assert!(objectives.windows(2).all(|pair| pair[0] <= pair[1] + 1e-9));
    assert_abs_diff_eq!(objectives[2], 5f64, epsilon = 1e-9);
}

#[test]
fn lexicographic_rule_terminates_without_revisiting() {
    let mut seen = Vec::new();
    let mut solver = Solver::<f64>::new().with_observer(|snapshot: &Snapshot<f64>| {
        let mut basis = snapshot.basis.clone();
        basis.sort_unstable();
        seen.push(basis);
    });
    let solution = solver.solve(&beale(), Some(&[0, 1, 2])).unwrap();
    drop(solver);

    assert_eq!(solution.status(), Status::Optimal);
    assert_abs_diff_eq!(solution.objective().unwrap(), -1.25f64, epsilon = 1e-6);
    assert_eq!(seen.iter().collect::<HashSet<_>>().len(), seen.len());
    assert_eq!(solution.iterations(Phase::Two), 2);
}

#[test]
fn other_leaving_rules_cycle() {
    for rule in [LeavingRule::FirstMinimum, LeavingRule::SmallestIndex] {
        let mut solver = Solver::<f64>::new()
            .with_leaving_rule(rule)
            .with_iteration_limit(60);

        assert_eq!(solver.solve(&beale(), Some(&[0, 1, 2])), Err(SolveError::IterationLimit(60)));
    }
}

#[test]
fn blands_rule_terminates() {
    let solution = Solver::<f64>::new()
        .with_entering_rule(EnteringRule::FirstProfitable)
        .with_leaving_rule(LeavingRule::SmallestIndex)
        .solve(&beale(), Some(&[0, 1, 2]))
        .unwrap();

    assert_abs_diff_eq!(solution.objective().unwrap(), -1.25f64, epsilon = 1e-6);
    assert_eq!(solution.iterations(Phase::Two), 6);
}

#[derive(Default)]
struct PerPhase {
    one: usize,
    two: usize,
}

impl Observer<f64> for PerPhase {
    fn observe(&mut self, snapshot: &Snapshot<f64>) {
        match snapshot.phase {
            Phase::One => self.one += 1,
            Phase::Two => self.two += 1,
            Phase::Dual => {},
        }
    }
}

#[test]
fn observer_sees_every_iteration() {
    let options = Options { iteration_limit: Some(10), ..Options::default() };
    let mut solver = Solver::<f64>::new().with_options(options).with_observer(PerPhase::default());
    let solution = solver.solve(&resource_allocation(), None).unwrap();
    assert_eq!(solution.iterations(Phase::One), 3);

    // Once per pivot, and once for the final basis
    let observer = solver.into_observer();
    assert_eq!(observer.one, 4);
    assert_eq!(observer.two, 1);
}

#[test]
fn infeasible() {
    let problem = Problem::minimize(vec![1f64], vec![vec![1f64]], vec![-1f64]).unwrap();
    let solution = solve(&problem, None).unwrap();

    assert_eq!(solution.status(), Status::Infeasible);
    assert_eq!(solution.objective(), None);
    assert_eq!(solution.x(), None);

    // The dual method detects it from the only basis there is
    let problem = Problem::minimize(vec![1f64, 0f64], vec![vec![1f64, 1f64]], vec![-1f64]).unwrap();
    assert_eq!(solve_dual(&problem, &[1]).unwrap().status(), Status::Infeasible);
}

#[test]
fn unbounded() {
    let problem = Problem::maximize(vec![1f64, 1f64], vec![vec![1f64, 0f64]], vec![1f64]).unwrap();
    let solution = solve(&problem, None).unwrap();

    assert_eq!(solution.status(), Status::Unbounded);
    assert_eq!(solution.basis(), None);
}

#[test]
fn redundant_row_is_removed() {
    let solution = solve(&with_redundant_row(true), None).unwrap();
    let reference = solve(&with_redundant_row(false), None).unwrap();

    let optimum = solution.optimum().unwrap();
    assert_eq!(optimum.removed_rows, vec![0]);
    assert_eq!(optimum.basis.len(), 2);
    assert_eq!(optimum.shadow_price.len(), 3);
    assert_relative_eq!(optimum.objective, reference.objective().unwrap(), epsilon = 1e-9);
    assert_abs_diff_eq!(optimum.objective, -8f64, epsilon = 1e-6);
}

#[test]
fn maximization() {
    let problem = Problem::maximize(
        vec![3f64, 4f64, 2f64, 0f64, 0f64, 0f64],
        vec![
            vec![2f64, 0f64, 0f64, 1f64, 0f64, 0f64],
            vec![1f64, 0f64, 2f64, 0f64, 1f64, 0f64],
            vec![0f64, 3f64, 1f64, 0f64, 0f64, 1f64],
        ],
        vec![4f64, 8f64, 6f64],
    ).unwrap();
    let solution = solve(&problem, None).unwrap();

    assert_abs_diff_eq!(solution.objective().unwrap(), 16f64, epsilon = 1e-6);
    // The problem is never changed by solving
    assert_eq!(problem.cost(), &[3f64, 4f64, 2f64, 0f64, 0f64, 0f64]);
}

#[test]
fn invalid_input() {
    assert!(matches!(
        Problem::minimize(vec![1f64, 1f64], vec![vec![1f64]], vec![1f64]),
        Err(SolveError::Dimension(_)),
    ));
    assert!(matches!(
        Problem::minimize(vec![1f64], vec![vec![f64::INFINITY]], vec![1f64]),
        Err(SolveError::Dimension(_)),
    ));

    let problem = resource_allocation();
    assert_eq!(
        solve_dual(&problem, &[3, 4, 5]),
        Err(SolveError::InvalidInitialBasis("initial basis is not dual feasible".to_string())),
    );
    assert!(matches!(solve(&problem, Some(&[3, 3, 5])), Err(SolveError::InvalidInitialBasis(_))));
    assert_eq!(solve(&problem, Some(&[3, 1, 5])), Err(SolveError::SingularBasis(vec![3, 1, 5])));
}

#[test]
fn single_precision() {
    let problem = Problem::<f32>::minimize(
        vec![-3f32, -4f32, -2f32, 0f32, 0f32, 0f32],
        vec![
            vec![2f32, 0f32, 0f32, 1f32, 0f32, 0f32],
            vec![1f32, 0f32, 2f32, 0f32, 1f32, 0f32],
            vec![0f32, 3f32, 1f32, 0f32, 0f32, 1f32],
        ],
        vec![4f32, 8f32, 6f32],
    ).unwrap();
    let solution = Solver::new().with_tolerance(1e-5f32).solve(&problem, None).unwrap();

    assert_abs_diff_eq!(solution.objective().unwrap(), -16f32, epsilon = 1e-4);
}

#[test]
fn independent_solves_in_parallel() {
    let handles = (0..4)
        .map(|_| thread::spawn(|| solve(&resource_allocation(), None).map(|solution| solution.objective())))
        .collect::<Vec<_>>();

    for handle in handles {
        let objective = handle.join().unwrap().unwrap().unwrap();
        assert_abs_diff_eq!(objective, -16f64, epsilon = 1e-6);
    }
}
