//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis in the primal method.
//!
//! All rules consider only columns with a relative cost above the tolerance: in a minimization,
//! entering such a column decreases the objective. The leaving row is selected independently of
//! the pivot rule, see the `ratio_test` module.
use std::ops::Range;

use crate::algorithm::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule<F> {
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column index together with its relative cost, or `None` if no column is profitable and
    /// the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Entering rule to use, see the implementors of `PivotRule`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnteringRule {
    /// See `Dantzig`.
    #[default]
    Dantzig,
    /// See `FirstProfitable`.
    FirstProfitable,
    /// See `FirstProfitableWithMemory`.
    FirstProfitableWithMemory,
}

impl EnteringRule {
    /// Create a fresh instance of the rule for a single phase.
    pub fn into_pivot_rule<F: OrderedField>(self) -> Box<dyn PivotRule<F>> {
        match self {
            EnteringRule::Dantzig => Box::new(Dantzig),
            EnteringRule::FirstProfitable => Box::new(FirstProfitable),
            EnteringRule::FirstProfitableWithMemory => Box::new(FirstProfitableWithMemory::default()),
        }
    }
}

/// Non basic columns that may enter and whose relative cost is above the tolerance, by increasing
/// index.
fn profitable<'t, F: OrderedField>(
    tableau: &'t Tableau<F>,
    to_consider: Range<usize>,
) -> impl Iterator<Item = (usize, F)> + 't {
    let tolerance = tableau.tolerance();
    to_consider
        .filter(move |&column| !tableau.is_in_basis(column))
        .map(move |column| (column, tableau.relative_cost(column)))
        .filter(move |&(_, cost)| cost > tolerance)
}

/// Pivot on the column with the largest relative cost, ties broken by the lowest index.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dantzig;
impl<F: OrderedField> PivotRule<F> for Dantzig {
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut largest: Option<(usize, F)> = None;
        for (j, cost) in profitable(tableau, tableau.entering_candidates()) {
            match largest {
                Some((_, existing_cost)) if cost <= existing_cost => {},
                _ => largest = Some((j, cost)),
            }
        }

        largest
    }
}

/// Simply pivot on the first column, which has a positive relative cost.
///
/// Combined with the `SmallestIndex` leaving rule, this is Bland's rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstProfitable;
impl<F: OrderedField> PivotRule<F> for FirstProfitable {
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        profitable(tableau, tableau.entering_candidates()).next()
    }
}

/// Small modification w.r.t. the `FirstProfitable` rule; it starts the search from the last
/// column selected.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstProfitableWithMemory {
    last_selected: Option<usize>,
}
impl<F: OrderedField> PivotRule<F> for FirstProfitableWithMemory {
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let candidates = tableau.entering_candidates();
        let find = |to_consider: Range<usize>| profitable(tableau, to_consider).next();

        let potential = match self.last_selected {
            None => find(candidates),
            Some(last) => find((last + 1)..candidates.end)
                .or_else(|| find(candidates.start..(last + 1))),
        };

        self.last_selected = potential.map(|(j, _)| j);
        potential
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::strategy::pivot_rule::{Dantzig, EnteringRule, FirstProfitable, FirstProfitableWithMemory, PivotRule};
    use crate::algorithm::tableau::Tableau;
    use crate::tests::problem_1;

    #[test]
    fn dantzig() {
        let instance = problem_1::standard_form();
        let tableau = Tableau::new(&instance, vec![3, 4, 5], 1e-9, 0).unwrap();

        // Relative costs 3, 4, 2
        assert_eq!(Dantzig.select_primal_pivot_column(&tableau), Some((1, 4f64)));
    }

    #[test]
    fn first_profitable() {
        let instance = problem_1::standard_form();
        let tableau = Tableau::new(&instance, vec![3, 4, 5], 1e-9, 0).unwrap();

        assert_eq!(FirstProfitable.select_primal_pivot_column(&tableau), Some((0, 3f64)));

        let mut rule = FirstProfitableWithMemory::default();
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((0, 3f64)));
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((1, 4f64)));
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((2, 2f64)));
        // Wraps around
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((0, 3f64)));
    }

    #[test]
    fn optimal() {
        let instance = problem_1::standard_form();
        let tableau = Tableau::new(&instance, vec![0, 2, 1], 1e-9, 0).unwrap();

        for rule in [EnteringRule::Dantzig, EnteringRule::FirstProfitable, EnteringRule::FirstProfitableWithMemory] {
            assert_eq!(rule.into_pivot_rule::<f64>().select_primal_pivot_column(&tableau), None);
        }
    }

    #[test]
    fn artificial_columns_are_skipped() {
        let instance = problem_1::standard_form();
        // Only column 0 may enter
        let tableau = Tableau::new(&instance, vec![3, 4, 5], 1e-9, 5).unwrap();

        assert_eq!(Dantzig.select_primal_pivot_column(&tableau), Some((0, 3f64)));
        assert_eq!(EnteringRule::default(), EnteringRule::Dantzig);
    }
}
