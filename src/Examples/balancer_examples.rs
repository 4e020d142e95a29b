use std::io::{self, Write};

pub fn balancer_examples(task: usize) {
    //

    match task {
        0 => {
            // BALANCING A SIMPLE COMBUSTION REACTION
            use crate::Balancer::balancer_api::BalanceTask;
            let mut task = BalanceTask::balance("H2 + O2 = H2O").unwrap();
            assert_eq!(task.coefficients, Some(vec![2, 1, 2]));
            println!("balanced: {}", task.balanced_equation().unwrap());

            task.eval_molar_masses().unwrap();
            task.pretty_print_report();
        }
        1 => {
            // BALANCING STEP BY STEP: compositions, matrix, coefficients
            use crate::Balancer::balancer_api::BalanceTask;
            let mut task = BalanceTask::new("Ca(OH)2 + H3PO4 = Ca3(PO4)2 + H2O").unwrap();
            task.parse_compositions().unwrap();
            println!("compositions: {:?}", task.compositions);

            task.build_matrix().unwrap();
            let stoich = task.stoich.as_ref().unwrap();
            println!("element rows: {:?}", stoich.elements);
            println!("stoichiometric matrix: {}", stoich.matrix);

            task.solve().unwrap();
            assert_eq!(task.coefficients, Some(vec![3, 2, 1, 6]));
            println!("balanced: {}", task.balanced_equation().unwrap());
        }
        2 => {
            // Calculation of atomic composition and molar masses
            use crate::Balancer::formula_parser::parse_formula;
            use crate::Balancer::molmass::{PeriodicTable, molar_mass};
            let atomic_composition = parse_formula("K4(ON(SO3)2)2").unwrap();
            println!("{:?}", atomic_composition);

            let vec_of_formulae = vec!["H2O", "NaCl", "C6H8O6", "Ca(NO3)2"];
            let expected_molar_masses = vec![18.015, 58.44, 176.12, 164.09];
            for (i, formula) in vec_of_formulae.iter().enumerate() {
                let mass = molar_mass(formula, &PeriodicTable).unwrap();
                println!("molar mass of {}: {:?} g/mol", formula, mass);
                assert!((mass - expected_molar_masses[i]).abs() < 1e-2);
            }
        }
        3 => {
            // error reporting: every failure kind is a value, not a panic
            use crate::Balancer::balancer_api::BalanceTask;
            use crate::Balancer::molmass::{PeriodicTable, molar_mass};
            println!("{:?}", BalanceTask::new("H2 + O2"));
            println!("{:?}", BalanceTask::balance("CH4 = C2H6"));
            println!("{:?}", molar_mass("Xx2O", &PeriodicTable));
        }
        _ => {
            println!("there is no such task");
        }
    }
}

pub fn examples_menu() {
    println!("\x1b[33m0. Balance a combustion reaction\x1b[0m");
    println!("\x1b[33m1. Balance step by step\x1b[0m");
    println!("\x1b[33m2. Compositions and molar masses\x1b[0m");
    println!("\x1b[33m3. Error reporting\x1b[0m");
    print!("\x1b[36mChoose an example: \x1b[0m");
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    match input.trim().parse::<usize>() {
        Ok(task) => balancer_examples(task),
        Err(_) => println!("Invalid choice. Please try again."),
    }
}
