use std::collections::HashSet;

use super::CompileErrorType::UndefinedNonterminal;
use super::{CompileError, CompileErrors, FileResult, LineRule};

// Every unquoted name in an alternative must be defined by some rule line.
// Quoted names are terminals and need no definition.
fn get_rule_undefined_symbols(rule: &LineRule, defined: &HashSet<&str>) -> CompileErrors {
    rule.alternatives.iter()
        .flatten()
        .filter(|rhs_symbol| !rhs_symbol.quoted && !defined.contains(rhs_symbol.name.as_str()))
        .map(|rhs_symbol| CompileError {
            location: rule.location.clone(),
            error: UndefinedNonterminal(rhs_symbol.name.clone()),
        })
        .collect()
}

pub fn verify_rules(rules: &[LineRule]) -> FileResult<()> {
    let defined: HashSet<&str> = rules.iter().map(|rule| rule.lhs.as_str()).collect();

    let errors: CompileErrors = rules.iter()
        .flat_map(|rule| get_rule_undefined_symbols(rule, &defined))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
