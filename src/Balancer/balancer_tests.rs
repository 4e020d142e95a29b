/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Balancer::BalanceError;
    use crate::Balancer::balancer_api::BalanceTask;
    use crate::Balancer::molmass::PeriodicTable;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    #[test]
    fn test_hydrogen_combustion_end_to_end() {
        let mut task = BalanceTask::balance("H2 + O2 = H2O").unwrap();
        assert_eq!(task.reactants, vec!["H2".to_string(), "O2".to_string()]);
        assert_eq!(task.products, vec!["H2O".to_string()]);
        assert_eq!(task.coefficients, Some(vec![2, 1, 2]));
        assert_eq!(
            task.balanced_equation().unwrap(),
            "2 H2 + 1 O2 = 2 H2O"
        );

        task.eval_molar_masses().unwrap();
        let report = task.mass_report().unwrap();
        assert_eq!(report.len(), 3);
        let (compound, coeff, mass) = &report[2];
        assert_eq!(compound, "H2O");
        assert_eq!(*coeff, 2);
        assert_relative_eq!(*mass, 18.015, epsilon = 1e-2);
    }

    #[test]
    fn test_phosphate_reaction_end_to_end() {
        let task = BalanceTask::balance("Ca(OH)2 + H3PO4 = Ca3(PO4)2 + H2O").unwrap();
        assert_eq!(task.coefficients, Some(vec![3, 2, 1, 6]));
        assert_eq!(
            task.balanced_equation().unwrap(),
            "3 Ca(OH)2 + 2 H3PO4 = 1 Ca3(PO4)2 + 6 H2O"
        );
    }

    #[test]
    fn test_stepwise_pipeline_matches_one_shot() {
        let mut task = BalanceTask::new("Al + HCl = AlCl3 + H2").unwrap();
        task.parse_compositions().unwrap();
        task.build_matrix().unwrap();
        task.solve().unwrap();
        let one_shot = BalanceTask::balance("Al + HCl = AlCl3 + H2").unwrap();
        assert_eq!(task.coefficients, one_shot.coefficients);
        assert_eq!(task.coefficients, Some(vec![2, 6, 2, 3]));
    }

    #[test]
    fn test_every_element_is_balanced_exactly() {
        let equations = [
            "H2 + O2 = H2O",
            "Ca(OH)2 + H3PO4 = Ca3(PO4)2 + H2O",
            "Fe2(SO4)3 + KOH = K2SO4 + Fe(OH)3",
            "Na2CO3 + HCl = NaCl + H2O + CO2",
            "C8H18 + O2 = CO2 + H2O",
            "KNO3 + C12H22O11 = N2 + CO2 + H2O + K2CO3",
        ];
        for equation in equations {
            let task = BalanceTask::balance(equation).unwrap();
            let stoich = task.stoich.as_ref().unwrap();
            let coefficients = task.coefficients.as_ref().unwrap();
            assert!(
                stoich.is_balanced(coefficients),
                "unbalanced result for '{}'",
                equation
            );
            assert!(coefficients.iter().all(|&c| c > 0));
        }
    }

    #[test]
    fn test_format_errors() {
        assert!(matches!(
            BalanceTask::new("H2 + O2"),
            Err(BalanceError::Format(_))
        ));
        assert!(matches!(
            BalanceTask::new("H2 = O2 = H2O"),
            Err(BalanceError::Format(_))
        ));
        assert!(matches!(
            BalanceTask::new("H2 + = H2O"),
            Err(BalanceError::Format(_))
        ));
    }

    #[test]
    fn test_unknown_element_surfaces_at_mass_time_only() {
        // Xx is not a real element but the formula grammar accepts it
        let mut task = BalanceTask::balance("Xx2 + O2 = Xx2O2").unwrap();
        assert_eq!(task.coefficients, Some(vec![1, 1, 1]));
        let err = task.eval_molar_masses().unwrap_err();
        assert_eq!(err, BalanceError::UnknownElement("Xx".to_string()));
    }

    #[test]
    fn test_no_solution_is_reported() {
        assert!(matches!(
            BalanceTask::balance("CH4 = C2H6"),
            Err(BalanceError::NoSolution)
        ));
        assert!(matches!(
            BalanceTask::balance("H2 + Na = H2 + Na"),
            Err(BalanceError::NoSolution)
        ));
    }

    #[test]
    fn test_mass_report_with_custom_source() {
        let mut task = BalanceTask::balance("H2 + O2 = H2O").unwrap();
        let source = HashMap::from([("H".to_string(), 1.0), ("O".to_string(), 16.0)]);
        task.eval_molar_masses_with(&source).unwrap();
        let report = task.mass_report().unwrap();
        assert_relative_eq!(report[0].2, 2.0, epsilon = 1e-12);
        assert_relative_eq!(report[1].2, 32.0, epsilon = 1e-12);
        assert_relative_eq!(report[2].2, 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_json_export() {
        let mut task = BalanceTask::balance("H2 + O2 = H2O").unwrap();
        assert!(task.to_json().is_none()); // masses not evaluated yet
        task.eval_molar_masses_with(&PeriodicTable).unwrap();
        let json = task.to_json().unwrap();
        assert_eq!(json["equation"], "H2 + O2 = H2O");
        assert_eq!(json["balanced"], "2 H2 + 1 O2 = 2 H2O");
        assert_eq!(json["compounds"].as_array().unwrap().len(), 3);
        assert_eq!(json["compounds"][0]["formula"], "H2");
        assert_eq!(json["compounds"][0]["coefficient"], 2);
    }

    #[test]
    fn test_report_printing_does_not_panic() {
        let mut task = BalanceTask::balance("H2 + O2 = H2O").unwrap();
        task.pretty_print_report(); // masses missing, prints a hint
        task.eval_molar_masses().unwrap();
        task.pretty_print_report();
    }
}
