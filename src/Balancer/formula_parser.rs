use crate::Balancer::BalanceError;
use regex::Regex;
use std::collections::HashMap;

/// Parse a chemical formula into a map from element symbol to atom count.
/// Bracketed groups with multiplier suffixes are allowed and may nest
/// arbitrarily, e.g. "Al2(SO4)3" or "K4(ON(SO3)2)2". A group without a
/// trailing number takes multiplier 1. Element symbols follow the
/// [A-Z][a-z]? grammar; whether a symbol denotes a real element is decided
/// later by the atomic mass lookup, not here.
///
/// # Examples
/// ```
/// use StoiKit::Balancer::formula_parser::parse_formula;
/// let counts = parse_formula("Ca(OH)2").unwrap();
/// assert_eq!(counts.get("Ca"), Some(&1));
/// assert_eq!(counts.get("O"), Some(&2));
/// assert_eq!(counts.get("H"), Some(&2));
/// ```
pub fn parse_formula(formula: &str) -> Result<HashMap<String, usize>, BalanceError> {
    let flat = expand_brackets(formula)?;
    tokenize_flat(&flat)
}

/// Rewrite the innermost bracketed group into a flat run of element/count
/// tokens until no brackets remain. Every rewrite removes one pair of
/// brackets, so the loop terminates.
fn expand_brackets(formula: &str) -> Result<String, BalanceError> {
    let mut formula = formula.trim().replace(" ", "");
    if formula.is_empty() {
        return Err(BalanceError::Parse("empty formula".to_string()));
    }
    let opening = formula.chars().filter(|&c| c == '(').count();
    let closing = formula.chars().filter(|&c| c == ')').count();
    if opening != closing {
        return Err(BalanceError::Parse(format!(
            "unbalanced brackets in '{}'",
            formula
        )));
    }
    // innermost group: bracket pair with no further brackets inside
    let group_re = Regex::new(r"\(([^()]*)\)(\d*)").unwrap();
    while formula.contains('(') {
        let caps = match group_re.captures(&formula) {
            Some(caps) => caps,
            None => {
                // equal bracket counts but no well-formed pair, e.g. ")Na("
                return Err(BalanceError::Parse(format!(
                    "malformed brackets in '{}'",
                    formula
                )));
            }
        };
        let whole = caps.get(0).unwrap();
        let inner = caps.get(1).unwrap().as_str();
        let multiplier_str = caps.get(2).unwrap().as_str();
        let multiplier: usize = if multiplier_str.is_empty() {
            1
        } else {
            multiplier_str.parse().map_err(|_| {
                BalanceError::Parse(format!("bad group multiplier '{}'", multiplier_str))
            })?
        };
        if multiplier == 0 {
            return Err(BalanceError::Parse(format!(
                "zero multiplier after group '({})'",
                inner
            )));
        }
        let expansion = expand_group_body(inner, multiplier)?;
        let range = whole.range();
        formula.replace_range(range, &expansion);
    }
    Ok(formula)
}

/// Multiply every element/count token of a bracket body by the group
/// multiplier and splice the result back as plain text
fn expand_group_body(inner: &str, multiplier: usize) -> Result<String, BalanceError> {
    let token_re = Regex::new(r"([A-Z][a-z]?)(\d*)").unwrap();
    let mut expansion = String::new();
    let mut consumed = 0;
    for caps in token_re.captures_iter(inner) {
        let whole = caps.get(0).unwrap();
        if whole.start() != consumed {
            return Err(BalanceError::Parse(format!(
                "unexpected characters '{}' inside group '({})'",
                &inner[consumed..whole.start()],
                inner
            )));
        }
        consumed = whole.end();
        let symbol = caps.get(1).unwrap().as_str();
        let count = parse_count(caps.get(2).unwrap().as_str(), symbol)?;
        expansion.push_str(symbol);
        expansion.push_str(&(count * multiplier).to_string());
    }
    if consumed != inner.len() {
        return Err(BalanceError::Parse(format!(
            "unexpected characters '{}' inside group '({})'",
            &inner[consumed..],
            inner
        )));
    }
    Ok(expansion)
}

/// Tokenize a bracket-free formula into element/count pairs and accumulate
/// counts, summing when an element occurs more than once (HOOH and H2O2 give
/// the same composition). Any character not consumed by a valid token is an
/// error - nothing is skipped silently.
fn tokenize_flat(flat: &str) -> Result<HashMap<String, usize>, BalanceError> {
    let token_re = Regex::new(r"([A-Z][a-z]?)(\d*)").unwrap();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut consumed = 0;
    for caps in token_re.captures_iter(flat) {
        let whole = caps.get(0).unwrap();
        if whole.start() != consumed {
            return Err(BalanceError::Parse(format!(
                "unexpected characters '{}' in formula '{}'",
                &flat[consumed..whole.start()],
                flat
            )));
        }
        consumed = whole.end();
        let symbol = caps.get(1).unwrap().as_str();
        let count = parse_count(caps.get(2).unwrap().as_str(), symbol)?;
        *counts.entry(symbol.to_string()).or_insert(0) += count;
    }
    if consumed != flat.len() {
        return Err(BalanceError::Parse(format!(
            "unexpected characters '{}' in formula '{}'",
            &flat[consumed..],
            flat
        )));
    }
    if counts.is_empty() {
        return Err(BalanceError::Parse(format!(
            "no element tokens in '{}'",
            flat
        )));
    }
    Ok(counts)
}

fn parse_count(digits: &str, symbol: &str) -> Result<usize, BalanceError> {
    if digits.is_empty() {
        return Ok(1);
    }
    let count: usize = digits
        .parse()
        .map_err(|_| BalanceError::Parse(format!("bad atom count '{}' after {}", digits, symbol)))?;
    if count == 0 {
        return Err(BalanceError::Parse(format!(
            "zero atom count after {}",
            symbol
        )));
    }
    Ok(count)
}
