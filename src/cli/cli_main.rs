use super::instructions::{INSTRUCTIONS_FILE, write_instructions_file};
use crate::Balancer::BalanceError;
use crate::Balancer::balancer_api::BalanceTask;
use crate::Balancer::molmass::{PeriodicTable, molar_mass};
use crate::Examples::balancer_examples::examples_menu;
use std::io::{self, Write};
use std::path::Path;

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => balance_menu(),
            "2" => molar_mass_menu(),
            "3" => examples_menu(),
            "4" => write_instructions(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options (1, 2, 0)

Cyan (\x1b[36m) - "Enter your choice:" prompt

Red (\x1b[31m) - error reports

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Wellcome to StoiKit: balancer of chemical equations\n
    and molar mass calculator \n
    (c) Gleb E. Zaslavsky, 2025 \n \x1b[0m"
    );
    println!("\x1b[33m1. Balance a chemical equation\x1b[0m");
    println!("\x1b[33m2. Molar mass of a formula\x1b[0m");
    println!("\x1b[33m3. Examples\x1b[0m");
    println!("\x1b[33m4. Write the instructions file\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}

/// Prompt for an equation, balance it and print the coefficients together
/// with the per-compound molar mass table. Every error kind is terminal for
/// the request: it is reported and the menu comes back.
fn balance_menu() {
    print!("\x1b[36mEnter a chemical equation (e.g. H2 + O2 = H2O): \x1b[0m");
    io::stdout().flush().unwrap();
    let equation = get_user_input();

    match BalanceTask::balance(equation.trim()) {
        Ok(mut task) => {
            println!("\nBalanced equation:");
            println!("\x1b[32m{}\x1b[0m", task.balanced_equation().unwrap());
            match task.eval_molar_masses() {
                Ok(()) => task.pretty_print_report(),
                Err(e) => report_error(&e),
            }
        }
        Err(e) => report_error(&e),
    }
}

fn molar_mass_menu() {
    print!("\x1b[36mEnter a chemical formula (e.g. Al2(SO4)3): \x1b[0m");
    io::stdout().flush().unwrap();
    let formula = get_user_input();

    match molar_mass(formula.trim(), &PeriodicTable) {
        Ok(mass) => println!("\x1b[32m{}: {:.3} g/mol\x1b[0m", formula.trim(), mass),
        Err(e) => report_error(&e),
    }
}

fn write_instructions() {
    match write_instructions_file(Path::new(INSTRUCTIONS_FILE)) {
        Ok(()) => println!("{} has been created", INSTRUCTIONS_FILE),
        Err(e) => println!("\x1b[31mFailed to write {}: {}\x1b[0m", INSTRUCTIONS_FILE, e),
    }
}

fn report_error(e: &BalanceError) {
    println!("\x1b[31mError: {}\x1b[0m", e);
}
