use crate::Balancer::BalanceError;
use crate::Balancer::stoichiometry::StoichMatrix;
use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Solve the mass balance system of a reaction for the minimal positive
/// integer coefficient vector.
///
/// Every element row of the stoichiometric matrix is a homogeneous constraint
/// (the dot product of the row with the coefficient vector must be zero). The
/// homogeneous system alone keeps one degree of freedom, so one extra
/// equation is appended anchoring the coefficient of the first product to
/// exactly 1. Anchoring any nonzero coefficient would do for a connected
/// reaction; the first product is the documented tie-break, and changing it
/// may change which of several equally valid minimal solutions is returned.
///
/// The augmented system is eliminated over exact rational numbers, never
/// floating point - rounding would corrupt the integer-ratio recovery. The
/// rational solution is scaled by the least common multiple of its
/// denominators and reduced by the greatest common divisor, which yields
/// coefficients in lowest common ratio.
///
/// A column left without a pivot means a compound whose coefficient the
/// constraints do not determine, i.e. a disconnected or degenerate reaction;
/// this is reported as NoSolution rather than silently zeroed. Inconsistent
/// systems, non-positive coefficients and coefficients beyond the i64 range
/// are reported as NoSolution as well.
pub fn solve(stoich: &StoichMatrix) -> Result<Vec<i64>, BalanceError> {
    let n = stoich.compounds.len();
    let m = stoich.elements.len();
    let anchor_col = stoich.num_reactants;
    if n == 0 || anchor_col == 0 || anchor_col >= n {
        return Err(BalanceError::NoSolution);
    }

    // augmented matrix: one row per element with zero right-hand side,
    // plus the anchor row x[anchor_col] = 1
    let mut aug: Vec<Vec<BigRational>> = Vec::with_capacity(m + 1);
    for i in 0..m {
        let mut row: Vec<BigRational> = (0..n)
            .map(|j| BigRational::from_integer(BigInt::from(stoich.matrix[(i, j)])))
            .collect();
        row.push(BigRational::zero());
        aug.push(row);
    }
    let mut anchor_row = vec![BigRational::zero(); n + 1];
    anchor_row[anchor_col] = BigRational::one();
    anchor_row[n] = BigRational::one();
    aug.push(anchor_row);

    let pivots = gaussian_elimination(&mut aug, n);
    if pivots < n {
        debug!(
            "{} pivots for {} unknowns: disconnected or underdetermined reaction system",
            pivots, n
        );
        return Err(BalanceError::NoSolution);
    }
    // with a pivot in every column the rows below the triangle carry zero
    // coefficients; a nonzero right-hand side there means inconsistency
    for row in aug.iter().skip(n) {
        if !row[n].is_zero() {
            return Err(BalanceError::NoSolution);
        }
    }

    let x = back_substitute(&aug, n);

    // clear the denominators and reduce to lowest common ratio
    let mut lcm = BigInt::one();
    for xi in &x {
        lcm = lcm.lcm(xi.denom());
    }
    let lcm = BigRational::from_integer(lcm);
    let scaled: Vec<BigInt> = x.iter().map(|xi| (xi * &lcm).to_integer()).collect();
    if scaled.iter().any(|c| !c.is_positive()) {
        return Err(BalanceError::NoSolution);
    }
    let mut gcd = BigInt::zero();
    for c in &scaled {
        gcd = gcd.gcd(c);
    }
    let mut coefficients = Vec::with_capacity(n);
    for c in &scaled {
        let coeff =
            i64::try_from(c / &gcd).map_err(|_| BalanceError::NoSolution)?;
        coefficients.push(coeff);
    }
    if !stoich.is_balanced(&coefficients) {
        return Err(BalanceError::NoSolution);
    }
    Ok(coefficients)
}

/// Forward elimination with pivoting by largest absolute value. The matrix is
/// augmented: `n` unknown columns plus the right-hand side column. Returns
/// the number of pivot columns found.
fn gaussian_elimination(aug: &mut [Vec<BigRational>], n: usize) -> usize {
    let rows = aug.len();
    let mut row = 0;
    let mut pivots = 0;
    for col in 0..n {
        if row >= rows {
            break;
        }
        let mut i_max = row;
        for r in (row + 1)..rows {
            if aug[r][col].abs() > aug[i_max][col].abs() {
                i_max = r;
            }
        }
        if aug[i_max][col].is_zero() {
            // free column, no pivot here
            continue;
        }
        aug.swap(row, i_max);
        let pivot_row = aug[row].clone();
        for r in (row + 1)..rows {
            if aug[r][col].is_zero() {
                continue;
            }
            let factor = &aug[r][col] / &pivot_row[col];
            for c in col..=n {
                let updated = &aug[r][c] - &factor * &pivot_row[c];
                aug[r][c] = updated;
            }
        }
        row += 1;
        pivots += 1;
    }
    pivots
}

/// Read the solution off the triangular system. Only valid when every one of
/// the `n` columns received a pivot, so row `i` has its pivot at column `i`.
fn back_substitute(aug: &[Vec<BigRational>], n: usize) -> Vec<BigRational> {
    let mut x = vec![BigRational::zero(); n];
    for i in (0..n).rev() {
        let mut acc = aug[i][n].clone();
        for j in (i + 1)..n {
            acc = acc - &aug[i][j] * &x[j];
        }
        x[i] = acc / &aug[i][i];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stoich(reactants: &[&str], products: &[&str]) -> StoichMatrix {
        let reactants: Vec<String> = reactants.iter().map(|s| s.to_string()).collect();
        let products: Vec<String> = products.iter().map(|s| s.to_string()).collect();
        StoichMatrix::build(&reactants, &products).unwrap()
    }

    #[test]
    fn test_hydrogen_combustion() {
        let coefficients = solve(&stoich(&["H2", "O2"], &["H2O"])).unwrap();
        assert_eq!(coefficients, vec![2, 1, 2]);
    }

    #[test]
    fn test_phosphate_reaction() {
        let coefficients =
            solve(&stoich(&["Ca(OH)2", "H3PO4"], &["Ca3(PO4)2", "H2O"])).unwrap();
        assert_eq!(coefficients, vec![3, 2, 1, 6]);
    }

    #[test]
    fn test_iron_sulfate_hydroxide() {
        let coefficients =
            solve(&stoich(&["Fe2(SO4)3", "KOH"], &["K2SO4", "Fe(OH)3"])).unwrap();
        assert_eq!(coefficients, vec![1, 6, 3, 2]);
    }

    #[test]
    fn test_ethane_combustion() {
        let coefficients = solve(&stoich(&["C2H6", "O2"], &["CO2", "H2O"])).unwrap();
        assert_eq!(coefficients, vec![2, 7, 4, 6]);
    }

    #[test]
    fn test_large_coefficients_stay_exact() {
        let coefficients = solve(&stoich(
            &["KNO3", "C12H22O11"],
            &["N2", "CO2", "H2O", "K2CO3"],
        ))
        .unwrap();
        assert_eq!(coefficients, vec![48, 5, 24, 36, 55, 24]);
    }

    #[test]
    fn test_coefficients_are_in_lowest_common_ratio() {
        let equations: [(&[&str], &[&str]); 4] = [
            (&["H2", "O2"], &["H2O"]),
            (&["Al", "HCl"], &["AlCl3", "H2"]),
            (&["Na2CO3", "HCl"], &["NaCl", "H2O", "CO2"]),
            (&["C8H18", "O2"], &["CO2", "H2O"]),
        ];
        for (reactants, products) in equations {
            let s = stoich(reactants, products);
            let coefficients = solve(&s).unwrap();
            assert!(s.is_balanced(&coefficients));
            let gcd = coefficients
                .iter()
                .fold(0i64, |acc, &c| acc.gcd(&c));
            assert_eq!(gcd, 1);
        }
    }

    #[test]
    fn test_inconsistent_system() {
        // carbon would need coefficient 2 while hydrogen needs 3/2
        assert_eq!(
            solve(&stoich(&["CH4"], &["C2H6"])),
            Err(BalanceError::NoSolution)
        );
    }

    #[test]
    fn test_disconnected_system_is_rejected() {
        // two independent identities leave a free coefficient ratio
        assert_eq!(
            solve(&stoich(&["H2", "Na"], &["H2", "Na"])),
            Err(BalanceError::NoSolution)
        );
    }
}
