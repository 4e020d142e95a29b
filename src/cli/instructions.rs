use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const INSTRUCTIONS_FILE: &str = "instructions.txt";

/// One-shot generator of the user instructions file. Standalone tooling: the
/// balancing pipeline never reads or writes it.
pub fn write_instructions_file(path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "# All element symbols must be written correctly (e.g., copper is Cu, not CU or cu)"
    )?;
    writeln!(
        file,
        "# Reactants and products must be separated by +, and sides separated by ="
    )?;
    writeln!(
        file,
        "# Brackets with a multiplier are allowed and may be nested, e.g. Ca(OH)2 or K4(ON(SO3)2)2"
    )?;
    writeln!(file, "# Example input: Ca(OH)2 + H3PO4 = Ca3(PO4)2 + H2O")?;
    writeln!(file, "# Example output: 3 Ca(OH)2 + 2 H3PO4 = 1 Ca3(PO4)2 + 6 H2O")?;
    writeln!(file, "# Have fun learning chemistry with this simple app!")?;
    Ok(())
}
