use crate::Balancer::BalanceError;
use crate::Balancer::formula_parser::parse_formula;
use std::collections::HashMap;

// Define a struct to hold element data
pub struct Element {
    pub symbol: &'static str,
    pub atomic_mass: f64,
}

// Standard atomic masses, g/mol, H through Og
pub const ELEMENTS: &[Element] = &[
    Element { symbol: "H", atomic_mass: 1.008 },
    Element { symbol: "He", atomic_mass: 4.0026 },
    Element { symbol: "Li", atomic_mass: 6.94 },
    Element { symbol: "Be", atomic_mass: 9.0122 },
    Element { symbol: "B", atomic_mass: 10.81 },
    Element { symbol: "C", atomic_mass: 12.011 },
    Element { symbol: "N", atomic_mass: 14.007 },
    Element { symbol: "O", atomic_mass: 15.999 },
    Element { symbol: "F", atomic_mass: 18.998 },
    Element { symbol: "Ne", atomic_mass: 20.18 },
    Element { symbol: "Na", atomic_mass: 22.99 },
    Element { symbol: "Mg", atomic_mass: 24.305 },
    Element { symbol: "Al", atomic_mass: 26.982 },
    Element { symbol: "Si", atomic_mass: 28.085 },
    Element { symbol: "P", atomic_mass: 30.974 },
    Element { symbol: "S", atomic_mass: 32.06 },
    Element { symbol: "Cl", atomic_mass: 35.45 },
    Element { symbol: "Ar", atomic_mass: 39.948 },
    Element { symbol: "K", atomic_mass: 39.098 },
    Element { symbol: "Ca", atomic_mass: 40.078 },
    Element { symbol: "Sc", atomic_mass: 44.956 },
    Element { symbol: "Ti", atomic_mass: 47.867 },
    Element { symbol: "V", atomic_mass: 50.942 },
    Element { symbol: "Cr", atomic_mass: 51.996 },
    Element { symbol: "Mn", atomic_mass: 54.938 },
    Element { symbol: "Fe", atomic_mass: 55.845 },
    Element { symbol: "Co", atomic_mass: 58.933 },
    Element { symbol: "Ni", atomic_mass: 58.693 },
    Element { symbol: "Cu", atomic_mass: 63.546 },
    Element { symbol: "Zn", atomic_mass: 65.38 },
    Element { symbol: "Ga", atomic_mass: 69.723 },
    Element { symbol: "Ge", atomic_mass: 72.63 },
    Element { symbol: "As", atomic_mass: 74.922 },
    Element { symbol: "Se", atomic_mass: 78.971 },
    Element { symbol: "Br", atomic_mass: 79.904 },
    Element { symbol: "Kr", atomic_mass: 83.798 },
    Element { symbol: "Rb", atomic_mass: 85.468 },
    Element { symbol: "Sr", atomic_mass: 87.62 },
    Element { symbol: "Y", atomic_mass: 88.906 },
    Element { symbol: "Zr", atomic_mass: 91.224 },
    Element { symbol: "Nb", atomic_mass: 92.906 },
    Element { symbol: "Mo", atomic_mass: 95.95 },
    Element { symbol: "Tc", atomic_mass: 98.0 },
    Element { symbol: "Ru", atomic_mass: 101.07 },
    Element { symbol: "Rh", atomic_mass: 102.91 },
    Element { symbol: "Pd", atomic_mass: 106.42 },
    Element { symbol: "Ag", atomic_mass: 107.87 },
    Element { symbol: "Cd", atomic_mass: 112.41 },
    Element { symbol: "In", atomic_mass: 114.82 },
    Element { symbol: "Sn", atomic_mass: 118.71 },
    Element { symbol: "Sb", atomic_mass: 121.76 },
    Element { symbol: "Te", atomic_mass: 127.6 },
    Element { symbol: "I", atomic_mass: 126.9 },
    Element { symbol: "Xe", atomic_mass: 131.29 },
    Element { symbol: "Cs", atomic_mass: 132.91 },
    Element { symbol: "Ba", atomic_mass: 137.33 },
    Element { symbol: "La", atomic_mass: 138.91 },
    Element { symbol: "Ce", atomic_mass: 140.12 },
    Element { symbol: "Pr", atomic_mass: 140.91 },
    Element { symbol: "Nd", atomic_mass: 144.24 },
    Element { symbol: "Pm", atomic_mass: 145.0 },
    Element { symbol: "Sm", atomic_mass: 150.36 },
    Element { symbol: "Eu", atomic_mass: 151.96 },
    Element { symbol: "Gd", atomic_mass: 157.25 },
    Element { symbol: "Tb", atomic_mass: 158.93 },
    Element { symbol: "Dy", atomic_mass: 162.5 },
    Element { symbol: "Ho", atomic_mass: 164.93 },
    Element { symbol: "Er", atomic_mass: 167.26 },
    Element { symbol: "Tm", atomic_mass: 168.93 },
    Element { symbol: "Yb", atomic_mass: 173.05 },
    Element { symbol: "Lu", atomic_mass: 174.97 },
    Element { symbol: "Hf", atomic_mass: 178.49 },
    Element { symbol: "Ta", atomic_mass: 180.95 },
    Element { symbol: "W", atomic_mass: 183.84 },
    Element { symbol: "Re", atomic_mass: 186.21 },
    Element { symbol: "Os", atomic_mass: 190.23 },
    Element { symbol: "Ir", atomic_mass: 192.22 },
    Element { symbol: "Pt", atomic_mass: 195.08 },
    Element { symbol: "Au", atomic_mass: 196.97 },
    Element { symbol: "Hg", atomic_mass: 200.59 },
    Element { symbol: "Tl", atomic_mass: 204.38 },
    Element { symbol: "Pb", atomic_mass: 207.2 },
    Element { symbol: "Bi", atomic_mass: 208.98 },
    Element { symbol: "Po", atomic_mass: 209.0 },
    Element { symbol: "At", atomic_mass: 210.0 },
    Element { symbol: "Rn", atomic_mass: 222.0 },
    Element { symbol: "Fr", atomic_mass: 223.0 },
    Element { symbol: "Ra", atomic_mass: 226.0 },
    Element { symbol: "Ac", atomic_mass: 227.0 },
    Element { symbol: "Th", atomic_mass: 232.04 },
    Element { symbol: "Pa", atomic_mass: 231.04 },
    Element { symbol: "U", atomic_mass: 238.03 },
    Element { symbol: "Np", atomic_mass: 237.0 },
    Element { symbol: "Pu", atomic_mass: 244.0 },
    Element { symbol: "Am", atomic_mass: 243.0 },
    Element { symbol: "Cm", atomic_mass: 247.0 },
    Element { symbol: "Bk", atomic_mass: 247.0 },
    Element { symbol: "Cf", atomic_mass: 251.0 },
    Element { symbol: "Es", atomic_mass: 252.0 },
    Element { symbol: "Fm", atomic_mass: 257.0 },
    Element { symbol: "Md", atomic_mass: 258.0 },
    Element { symbol: "No", atomic_mass: 259.0 },
    Element { symbol: "Lr", atomic_mass: 262.0 },
    Element { symbol: "Rf", atomic_mass: 267.0 },
    Element { symbol: "Db", atomic_mass: 268.0 },
    Element { symbol: "Sg", atomic_mass: 269.0 },
    Element { symbol: "Bh", atomic_mass: 270.0 },
    Element { symbol: "Hs", atomic_mass: 269.0 },
    Element { symbol: "Mt", atomic_mass: 278.0 },
    Element { symbol: "Ds", atomic_mass: 281.0 },
    Element { symbol: "Rg", atomic_mass: 282.0 },
    Element { symbol: "Cn", atomic_mass: 285.0 },
    Element { symbol: "Nh", atomic_mass: 286.0 },
    Element { symbol: "Fl", atomic_mass: 289.0 },
    Element { symbol: "Mc", atomic_mass: 290.0 },
    Element { symbol: "Lv", atomic_mass: 293.0 },
    Element { symbol: "Ts", atomic_mass: 294.0 },
    Element { symbol: "Og", atomic_mass: 294.0 },
];

/// Atomic mass lookup collaborator. The balancing core only needs
/// symbol -> mass; swapping the source in (for tests or for custom mass
/// tables) is a matter of implementing this trait.
pub trait AtomicMassSource {
    fn lookup(&self, symbol: &str) -> Option<f64>;
}

/// Built-in periodic table backed by the ELEMENTS constant
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicTable;

impl AtomicMassSource for PeriodicTable {
    fn lookup(&self, symbol: &str) -> Option<f64> {
        ELEMENTS
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.atomic_mass)
    }
}

// Any plain map works as a mass source too
impl AtomicMassSource for HashMap<String, f64> {
    fn lookup(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

/// Molar mass of a compound given its formula, summed over the parsed
/// composition. Unknown symbols surface here, not at parse time.
pub fn molar_mass(
    compound: &str,
    source: &impl AtomicMassSource,
) -> Result<f64, BalanceError> {
    let counts = parse_formula(compound)?;
    molar_mass_of_composition(&counts, source)
}

/// Molar mass of an already parsed composition
pub fn molar_mass_of_composition(
    counts: &HashMap<String, usize>,
    source: &impl AtomicMassSource,
) -> Result<f64, BalanceError> {
    let mut mass = 0.0;
    for (element, &count) in counts {
        let atomic_mass = source
            .lookup(element)
            .ok_or_else(|| BalanceError::UnknownElement(element.clone()))?;
        mass += atomic_mass * count as f64;
    }
    Ok(mass)
}
