use crate::Balancer::BalanceError;
use crate::Balancer::formula_parser::parse_formula;
use nalgebra::DMatrix;
use std::collections::{HashMap, HashSet};

/// Stoichiometric matrix of one reaction. Rows are the lexicographically
/// sorted element symbols met anywhere in the equation (the sort fixes a
/// stable, reproducible row order), columns are the compounds - reactants
/// first, then products, in their original order. Reactant entries are
/// non-negative, product entries non-positive, 0 where the element is absent.
/// The matrix is never mutated after construction.
#[derive(Debug, Clone)]
pub struct StoichMatrix {
    pub matrix: DMatrix<i64>,
    pub elements: Vec<String>,
    pub compounds: Vec<String>,
    pub num_reactants: usize,
}

impl StoichMatrix {
    /// Parse every compound and build the signed element-count matrix
    pub fn build(reactants: &[String], products: &[String]) -> Result<Self, BalanceError> {
        let mut compositions = Vec::with_capacity(reactants.len() + products.len());
        for compound in reactants.iter().chain(products.iter()) {
            compositions.push(parse_formula(compound)?);
        }
        let compounds: Vec<String> = reactants.iter().chain(products.iter()).cloned().collect();
        Ok(Self::from_compositions(
            &compositions,
            compounds,
            reactants.len(),
        ))
    }

    /// Build the matrix from already parsed compositions. Columns follow the
    /// order of `compounds`, the first `num_reactants` of which are reactants.
    pub fn from_compositions(
        compositions: &[HashMap<String, usize>],
        compounds: Vec<String>,
        num_reactants: usize,
    ) -> Self {
        let mut element_set: HashSet<String> = HashSet::new();
        for composition in compositions {
            element_set.extend(composition.keys().cloned());
        }
        let mut elements: Vec<String> = element_set.into_iter().collect();
        elements.sort();

        let num_rows = elements.len();
        let num_cols = compositions.len();
        let mut matrix = DMatrix::zeros(num_rows, num_cols);
        for (j, composition) in compositions.iter().enumerate() {
            let sign: i64 = if j < num_reactants { 1 } else { -1 };
            for (i, element) in elements.iter().enumerate() {
                if let Some(&count) = composition.get(element) {
                    matrix[(i, j)] = sign * count as i64;
                }
            }
        }
        Self {
            matrix,
            elements,
            compounds,
            num_reactants,
        }
    }

    /// Check that the given coefficients balance every element row exactly
    pub fn is_balanced(&self, coefficients: &[i64]) -> bool {
        if coefficients.len() != self.compounds.len() {
            return false;
        }
        (0..self.matrix.nrows()).all(|i| {
            (0..self.matrix.ncols())
                .map(|j| self.matrix[(i, j)] * coefficients[j])
                .sum::<i64>()
                == 0
        })
    }
}
