//! # Properties of the simplex family
//!
//! Known optima, feasibility of every iterate, termination on degenerate problems and the
//! terminal statuses, all through the public interface.
use lexi_simplex::Problem;

/// # Execution
#[allow(missing_docs)]
mod test;

/// `min -3 x_0 - 4 x_1 - 2 x_2` subject to three inequalities, with slacks added explicitly.
fn resource_allocation() -> Problem<f64> {
    Problem::minimize(
        vec![-3f64, -4f64, -2f64, 0f64, 0f64, 0f64],
        vec![
            vec![2f64, 0f64, 0f64, 1f64, 0f64, 0f64],
            vec![1f64, 0f64, 2f64, 0f64, 1f64, 0f64],
            vec![0f64, 3f64, 1f64, 0f64, 0f64, 1f64],
        ],
        vec![4f64, 8f64, 6f64],
    ).unwrap()
}

/// Beale's cycling problem; cycles from the basis `[0, 1, 2]` under textbook rules.
fn beale() -> Problem<f64> {
    Problem::minimize(
        vec![0f64, 0f64, 0f64, -0.75f64, 20f64, -0.5f64, 6f64],
        vec![
            vec![1f64, 0f64, 0f64, 0.25f64, -8f64, -1f64, 9f64],
            vec![0f64, 1f64, 0f64, 0.5f64, -12f64, -0.5f64, 3f64],
            vec![0f64, 0f64, 1f64, 0f64, 0f64, 1f64, 0f64],
        ],
        vec![0f64, 0f64, 1f64],
    ).unwrap()
}

/// Covering problem with surplus columns; the surplus basis `[2, 3]` is dual feasible.
fn covering() -> Problem<f64> {
    Problem::minimize(
        vec![2f64, 3f64, 0f64, 0f64],
        vec![
            vec![-1f64, -1f64, 1f64, 0f64],
            vec![-1f64, -2f64, 0f64, 1f64],
        ],
        vec![-2f64, -3f64],
    ).unwrap()
}

/// Three rows of which the last is the sum of the first two.
fn with_redundant_row(include_redundant: bool) -> Problem<f64> {
    let mut constraints = vec![
        vec![1f64, 1f64, 1f64, 0f64],
        vec![1f64, -1f64, 0f64, 1f64],
    ];
    let mut b = vec![4f64, 2f64];
    if include_redundant {
        constraints.push(vec![2f64, 0f64, 1f64, 1f64]);
        b.push(6f64);
    }

    Problem::minimize(vec![-1f64, -2f64, 0f64, 0f64], constraints, b).unwrap()
}
