/*
    This module generates random sentences from a grammar
*/

use rand::prelude::*;

use crate::grammar::{Grammar, Symbol};

// Derives a random token sequence from the grammar's axiom. Under the
// derived-terminal model this cannot fail: a symbol that heads no rule is
// a terminal and simply emits its own name. Pathologically recursive
// grammars may recurse for a long time; that is the grammar's problem.
pub fn generate(grammar: &Grammar) -> Vec<String> {
    let mut tokens = Vec::new();
    expand_symbol(grammar, grammar.axiom(), &mut tokens);
    return tokens;
}

fn expand_symbol(grammar: &Grammar, symbol: &Symbol, tokens: &mut Vec<String>) {
    if !grammar.is_non_terminal(symbol) {
        tokens.push(symbol.name().to_string());
        return;
    }

    let rules: Vec<_> = grammar.rules_for(symbol.name()).collect();
    if let Some(rule) = rules.choose(&mut thread_rng()) {
        for rhs_symbol in rule.rhs() {
            expand_symbol(grammar, rhs_symbol, tokens);
        }
    }
}
