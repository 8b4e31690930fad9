/*
    This module is for storing and querying context-free grammars
*/

use std::collections::HashSet;
use std::fmt::Display;

use itertools::Itertools;

// The base unit of a grammar. Two symbols are the same symbol exactly when
// their names are equal; whether a symbol is a terminal is not a property
// of the symbol itself but of the grammar it is used in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Symbol {
        Symbol { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// A single production. The right-hand side may be empty (an epsilon rule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    lhs: Symbol,
    rhs: Vec<Symbol>,
}

impl Rule {
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Rule {
        Rule { lhs, rhs }
    }

    pub fn lhs(&self) -> &Symbol {
        &self.lhs
    }

    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rhs.is_empty() {
            write!(f, "{} -> ε", self.lhs)
        } else {
            write!(f, "{} -> {}", self.lhs, self.rhs.iter().join(" "))
        }
    }
}

// An immutable grammar. A symbol counts as a nonterminal when its name is
// the left-hand side of at least one rule; every other symbol is treated
// as a terminal, including symbols that never appear on any left-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    name: String,
    symbols: Vec<Symbol>,
    axiom: Symbol,
    rules: Vec<Rule>,
    nonterminal_names: HashSet<String>,
}

impl Grammar {
    pub fn new(name: impl Into<String>, symbols: Vec<Symbol>, axiom: Symbol, rules: Vec<Rule>) -> Grammar {
        let nonterminal_names = rules
            .iter()
            .map(|rule| rule.lhs().name().to_string())
            .collect();

        Grammar {
            name: name.into(),
            symbols,
            axiom,
            rules,
            nonterminal_names,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn axiom(&self) -> &Symbol {
        &self.axiom
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_non_terminal(&self, symbol: &Symbol) -> bool {
        self.nonterminal_names.contains(symbol.name())
    }

    // All rules whose left-hand side has the given name
    pub fn rules_for<'a>(&'a self, lhs_name: &'a str) -> impl Iterator<Item = &'a Rule> {
        self.rules.iter().filter(move |rule| rule.lhs().name() == lhs_name)
    }

    // Mints a symbol whose name does not collide with any symbol already in
    // the grammar, by priming the proposed name until it is unique. The new
    // symbol is not registered anywhere; that is up to the caller.
    pub fn create_fresh_symbol(&self, proposed_name: &str) -> Symbol {
        let mut name = proposed_name.to_string();
        while self.symbols.iter().any(|symbol| symbol.name() == name) {
            name.push('\'');
        }
        Symbol::new(name)
    }

    // The same grammar with a different start symbol, which must already be
    // one of the grammar's symbols
    pub fn with_axiom(&self, name: &str) -> Option<Grammar> {
        let axiom = self.symbols.iter().find(|symbol| symbol.name() == name)?.clone();
        Some(Grammar {
            axiom,
            ..self.clone()
        })
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "grammar {} (axiom {})", self.name, self.axiom)?;
        for rule in &self.rules {
            writeln!(f, "  {}", rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name)
    }

    fn toy_grammar() -> Grammar {
        Grammar::new(
            "toy",
            vec![sym("s"), sym("a"), sym("s'"), sym("x")],
            sym("s"),
            vec![
                Rule::new(sym("s"), vec![sym("a"), sym("x")]),
                Rule::new(sym("s"), vec![sym("x")]),
                Rule::new(sym("a"), vec![sym("x"), sym("x")]),
            ],
        )
    }

    #[test]
    fn nonterminals_are_rule_heads() {
        let grammar = toy_grammar();

        assert!(grammar.is_non_terminal(&sym("s")));
        assert!(grammar.is_non_terminal(&sym("a")));
        // Listed as a symbol but never defines anything, so it is a terminal
        assert!(!grammar.is_non_terminal(&sym("x")));
        // Unknown symbols are terminals too
        assert!(!grammar.is_non_terminal(&sym("zzz")));
    }

    #[test]
    fn rules_for_matches_by_name() {
        let grammar = toy_grammar();

        assert_eq!(grammar.rules_for("s").count(), 2);
        assert_eq!(grammar.rules_for("a").count(), 1);
        assert_eq!(grammar.rules_for("x").count(), 0);
        assert_eq!(grammar.rules().len(), 3);
        assert_eq!(grammar.symbols().len(), 4);
    }

    #[test]
    fn fresh_symbols_avoid_collisions() {
        let grammar = toy_grammar();

        // "s" and "s'" are both taken, so the fresh name gets two primes
        assert_eq!(grammar.create_fresh_symbol("s"), sym("s''"));
        assert_eq!(grammar.create_fresh_symbol("a"), sym("a'"));
        assert_eq!(grammar.create_fresh_symbol("b"), sym("b"));
    }

    #[test]
    fn axiom_override() {
        let grammar = toy_grammar();

        assert_eq!(grammar.with_axiom("a").unwrap().axiom(), &sym("a"));
        assert_eq!(grammar.with_axiom("nope"), None);
    }

    #[test]
    fn rule_display() {
        assert_eq!(
            Rule::new(sym("s"), vec![sym("a"), sym("x")]).to_string(),
            "s -> a x"
        );
        assert_eq!(Rule::new(sym("s"), vec![]).to_string(), "s -> ε");
    }
}
