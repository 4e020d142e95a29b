use crate::Balancer::BalanceError;
use crate::Balancer::equation_parser::split_equation;
use crate::Balancer::formula_parser::parse_formula;
use crate::Balancer::molmass::{AtomicMassSource, PeriodicTable, molar_mass_of_composition};
use crate::Balancer::rational_solver::solve;
use crate::Balancer::stoichiometry::StoichMatrix;
use log::info;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// THE STRUCT BalanceTask COLLECTS ALL THE INFORMATION ABOUT ONE REACTION
/// BALANCING REQUEST, so this is the API for the whole module.
///
/// The constructor splits the equation into compounds; the stepwise methods
/// fill the optional fields one after another:
/// 1) parse_compositions - atomic composition of every compound
/// 2) build_matrix - stoichiometric matrix with sorted element rows
/// 3) solve - minimal positive integer coefficients
/// 4) eval_molar_masses - molar mass of every compound
/// or balance() runs the whole pipeline at once. Every derived field is
/// recomputed per request, nothing is shared between tasks.
#[derive(Debug, Clone)]
pub struct BalanceTask {
    pub equation: String,                                // equation as entered by the user
    pub reactants: Vec<String>,                          // compound formulae, left side
    pub products: Vec<String>,                           // compound formulae, right side
    pub compositions: Option<Vec<HashMap<String, usize>>>, // composition per compound, reactants first
    pub stoich: Option<StoichMatrix>,                    // signed element-count matrix
    pub coefficients: Option<Vec<i64>>,                  // balancing coefficients, reactants first
    pub molar_masses: Option<Vec<f64>>,                  // g/mol per compound, reactants first
}

/// Serializable balancing result for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    pub equation: String,
    pub balanced: String,
    pub compounds: Vec<CompoundReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundReport {
    pub formula: String,
    pub coefficient: i64,
    pub molar_mass: f64,
}

impl BalanceTask {
    pub fn new(equation: &str) -> Result<Self, BalanceError> {
        let (reactants, products) = split_equation(equation)?;
        Ok(Self {
            equation: equation.trim().to_string(),
            reactants,
            products,
            compositions: None,
            stoich: None,
            coefficients: None,
            molar_masses: None,
        })
    }

    /// Run the whole pipeline with the built-in periodic table
    pub fn balance(equation: &str) -> Result<Self, BalanceError> {
        let mut task = Self::new(equation)?;
        task.parse_compositions()?;
        task.build_matrix()?;
        task.solve()?;
        Ok(task)
    }

    /// Parse every compound of the equation into its atomic composition
    pub fn parse_compositions(&mut self) -> Result<(), BalanceError> {
        let mut compositions = Vec::with_capacity(self.reactants.len() + self.products.len());
        for compound in self.reactants.iter().chain(self.products.iter()) {
            compositions.push(parse_formula(compound)?);
        }
        self.compositions = Some(compositions);
        Ok(())
    }

    /// Build the stoichiometric matrix from the parsed compositions
    pub fn build_matrix(&mut self) -> Result<(), BalanceError> {
        if self.compositions.is_none() {
            self.parse_compositions()?;
        }
        let compositions = self.compositions.as_ref().unwrap();
        let compounds: Vec<String> = self
            .reactants
            .iter()
            .chain(self.products.iter())
            .cloned()
            .collect();
        self.stoich = Some(StoichMatrix::from_compositions(
            compositions,
            compounds,
            self.reactants.len(),
        ));
        Ok(())
    }

    /// Solve the mass balance system for the coefficient vector
    pub fn solve(&mut self) -> Result<(), BalanceError> {
        if self.stoich.is_none() {
            self.build_matrix()?;
        }
        let stoich = self.stoich.as_ref().unwrap();
        let coefficients = solve(stoich)?;
        info!(
            "balanced '{}' with coefficients {:?}",
            self.equation, coefficients
        );
        self.coefficients = Some(coefficients);
        Ok(())
    }

    /// Molar mass of every compound with the built-in periodic table
    pub fn eval_molar_masses(&mut self) -> Result<(), BalanceError> {
        self.eval_molar_masses_with(&PeriodicTable)
    }

    /// Molar mass of every compound with a caller-provided mass source
    pub fn eval_molar_masses_with(
        &mut self,
        source: &impl AtomicMassSource,
    ) -> Result<(), BalanceError> {
        if self.compositions.is_none() {
            self.parse_compositions()?;
        }
        let compositions = self.compositions.as_ref().unwrap();
        let mut molar_masses = Vec::with_capacity(compositions.len());
        for composition in compositions {
            molar_masses.push(molar_mass_of_composition(composition, source)?);
        }
        self.molar_masses = Some(molar_masses);
        Ok(())
    }

    /// Balanced equation as text, e.g. "2 H2 + 1 O2 = 2 H2O".
    /// None until solve() has run.
    pub fn balanced_equation(&self) -> Option<String> {
        let coefficients = self.coefficients.as_ref()?;
        let (reactant_coeffs, product_coeffs) = coefficients.split_at(self.reactants.len());
        let render_side = |compounds: &[String], coeffs: &[i64]| -> String {
            compounds
                .iter()
                .zip(coeffs.iter())
                .map(|(compound, coeff)| format!("{} {}", coeff, compound))
                .collect::<Vec<String>>()
                .join(" + ")
        };
        Some(format!(
            "{} = {}",
            render_side(&self.reactants, reactant_coeffs),
            render_side(&self.products, product_coeffs)
        ))
    }

    /// (compound, coefficient, molar mass) triples for display, reactants
    /// first. None until solve() and eval_molar_masses() have run.
    pub fn mass_report(&self) -> Option<Vec<(String, i64, f64)>> {
        let coefficients = self.coefficients.as_ref()?;
        let molar_masses = self.molar_masses.as_ref()?;
        let compounds = self.reactants.iter().chain(self.products.iter());
        Some(
            compounds
                .zip(coefficients.iter())
                .zip(molar_masses.iter())
                .map(|((compound, &coeff), &mass)| (compound.clone(), coeff, mass))
                .collect(),
        )
    }

    /// Print the per-compound report as a console table
    pub fn pretty_print_report(&self) {
        let Some(report) = self.mass_report() else {
            println!("nothing to report yet: balance the equation first");
            return;
        };
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("compound"),
            Cell::new("coefficient"),
            Cell::new("molar mass, g/mol"),
        ]));
        for (compound, coefficient, mass) in report {
            table.add_row(Row::new(vec![
                Cell::new(&compound),
                Cell::new(&coefficient.to_string()),
                Cell::new(&format!("{:.3}", mass)),
            ]));
        }
        table.printstd();
    }

    /// Full result as a serializable structure
    pub fn report(&self) -> Option<BalanceReport> {
        let balanced = self.balanced_equation()?;
        let triples = self.mass_report()?;
        Some(BalanceReport {
            equation: self.equation.clone(),
            balanced,
            compounds: triples
                .into_iter()
                .map(|(formula, coefficient, molar_mass)| CompoundReport {
                    formula,
                    coefficient,
                    molar_mass,
                })
                .collect(),
        })
    }

    /// Full result as a serde_json Value
    pub fn to_json(&self) -> Option<Value> {
        self.report()
            .and_then(|report| serde_json::to_value(report).ok())
    }
}
