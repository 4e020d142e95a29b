use thiserror::Error;
/// eng
/// The module takes a reaction equation written as plain text, for instance
/// "Ca(OH)2 + H3PO4 = Ca3(PO4)2 + H2O", and produces the following data:
/// 1) atomic composition of every compound (parsing of nested brackets included)
/// 2) stoichiometric matrix of the reaction: one row per chemical element,
/// one column per compound, reactant entries positive, product entries negative
/// 3) vector of minimal positive integer coefficients balancing the reaction,
/// obtained by solving the homogeneous linear system over exact rational numbers
/// 4) molar masses of all compounds
///
/// Note:
/// 1) the coefficient of the first product is anchored to 1 before solving -
/// this is the normalization rule fixing the single degree of freedom of a
/// properly defined reaction; the anchored solution is then scaled to integers
/// 2) solving is carried out over exact rational arithmetic, floating point
/// appears only in the final molar mass summation
/// ----------------------------------------------------------------
/// # Examples
/// ```
/// use StoiKit::Balancer::balancer_api::BalanceTask;
/// let mut task = BalanceTask::balance("H2 + O2 = H2O").unwrap();
/// assert_eq!(task.coefficients, Some(vec![2, 1, 2]));
/// assert_eq!(task.balanced_equation().unwrap(), "2 H2 + 1 O2 = 2 H2O");
/// task.eval_molar_masses().unwrap();
/// task.pretty_print_report();
/// ```
pub mod balancer_api;
/// The module takes a chemical formula specified as a string and returns a
/// HashMap from element symbol to the number of atoms. Brackets with
/// multiplier suffixes are expanded in place, innermost group first, until the
/// formula is flat; nesting of arbitrary depth is allowed.
pub mod formula_parser;
/// Splitting of a full equation string into the reactant and the product side
pub mod equation_parser;
/// Construction of the stoichiometric matrix: rows are the lexicographically
/// sorted element symbols met anywhere in the reaction, columns are the
/// compounds in their original order, reactants first
pub mod stoichiometry;
/// Gaussian elimination over num_rational::BigRational with the first product
/// coefficient anchored to 1, then scaling of the rational solution to the
/// minimal positive integer vector
pub mod rational_solver;
/// Module to calculate the molar mass of a chemical formula. Atomic masses
/// come from an AtomicMassSource collaborator; the default one is a built-in
/// periodic table
pub mod molmass;
pub mod balancer_tests;

/// error types of the balancing pipeline
#[derive(Debug, Error, PartialEq)]
pub enum BalanceError {
    #[error("Equation format error: {0}")]
    Format(String),
    #[error("Formula parse error: {0}")]
    Parse(String),
    #[error("No consistent positive integer solution for this reaction")]
    NoSolution,
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}
