use crate::Balancer::BalanceError;

/// Split a reaction equation of the form "A + B = C + D" into the list of
/// reactant formulae and the list of product formulae. Exactly one '=' must
/// be present; compounds are separated by '+' and trimmed of whitespace.
pub fn split_equation(equation: &str) -> Result<(Vec<String>, Vec<String>), BalanceError> {
    let sides: Vec<&str> = equation.split('=').collect();
    if sides.len() != 2 {
        return Err(BalanceError::Format(format!(
            "expected exactly one '=' in '{}', found {}",
            equation.trim(),
            sides.len() - 1
        )));
    }
    let reactants = split_side(sides[0], "left")?;
    let products = split_side(sides[1], "right")?;
    Ok((reactants, products))
}

fn split_side(side: &str, side_name: &str) -> Result<Vec<String>, BalanceError> {
    let compounds: Vec<String> = side.split('+').map(|c| c.trim().to_string()).collect();
    if compounds.iter().any(|c| c.is_empty()) {
        return Err(BalanceError::Format(format!(
            "empty compound on the {} side of the equation",
            side_name
        )));
    }
    Ok(compounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_equation() {
        let (reactants, products) = split_equation("H2 + O2 = H2O").unwrap();
        assert_eq!(reactants, vec!["H2".to_string(), "O2".to_string()]);
        assert_eq!(products, vec!["H2O".to_string()]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let (reactants, products) =
            split_equation("  Ca(OH)2+ H3PO4   =Ca3(PO4)2 +  H2O ").unwrap();
        assert_eq!(
            reactants,
            vec!["Ca(OH)2".to_string(), "H3PO4".to_string()]
        );
        assert_eq!(
            products,
            vec!["Ca3(PO4)2".to_string(), "H2O".to_string()]
        );
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            split_equation("H2 + O2 -> H2O"),
            Err(BalanceError::Format(_))
        ));
    }

    #[test]
    fn test_repeated_separator() {
        assert!(matches!(
            split_equation("H2 = O2 = H2O"),
            Err(BalanceError::Format(_))
        ));
    }

    #[test]
    fn test_empty_side_or_compound() {
        assert!(matches!(
            split_equation("= H2O"),
            Err(BalanceError::Format(_))
        ));
        assert!(matches!(
            split_equation("H2 + = H2O"),
            Err(BalanceError::Format(_))
        ));
        assert!(matches!(
            split_equation("H2 + O2 ="),
            Err(BalanceError::Format(_))
        ));
    }
}
