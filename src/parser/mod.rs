/*
    This module parses BNF grammar files into the grammar model
*/

mod lexer;
mod verifier;

use std::collections::HashSet;
use std::fmt::Display;
use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::error_handling::*;
use crate::grammar::{Grammar, Rule, Symbol};
use lexer::*;
use verifier::verify_rules;

#[derive(Debug)]
pub enum CompileErrorType {
    // A line which should contain a rule does not
    MissingEquals,
    // A rule has multiple equals signs
    UnexpectedEquals,
    // The user starts a rule line with something other than a nonterminal
    MissingNonterminal,
    // There is an unclosed quote
    UnmatchedQuote,
    // An unquoted name is used but never defined
    UndefinedNonterminal(String),
    // Somehow a full rewrite was parsed as a base alternative
    // This is a problem with earlybird, not the grammar
    UnsplitRewrite,
    // A blank line got too deep into the parser
    // This is a problem with earlybird, not the grammar
    EmptyRuleLine,
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CompileErrorType::FileError(a), CompileErrorType::FileError(b)) => a.kind() == b.kind(),
            (CompileErrorType::UndefinedNonterminal(a), CompileErrorType::UndefinedNonterminal(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Display for CompileErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorType::MissingEquals => write!(f, "Expected `=` after nonterminal"),
            CompileErrorType::UnexpectedEquals => write!(f, "Unexpected `=` encountered"),
            CompileErrorType::MissingNonterminal => write!(f, "Tried to define something other than a nonterminal"),
            CompileErrorType::UnmatchedQuote => write!(f, "Unmatched quotes"),
            CompileErrorType::UndefinedNonterminal(nonterminal) => write!(f, "Could not find definition for `{}`", nonterminal),
            CompileErrorType::UnsplitRewrite => write!(f, "Rewrite was not fully split (this is a problem with earlybird, not the grammar)"),
            CompileErrorType::EmptyRuleLine => write!(f, "Blank line encountered in rule parser (this is a problem with earlybird, not the grammar)"),
            CompileErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

fn io_error(error: std::io::Error, file: PathBuf) -> CompileError {
    CompileError {
        location: Location::whole_file(file),
        error: CompileErrorType::FileError(error),
    }
}

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

// A right-hand-side symbol as written in the file. Whether it was quoted
// is only remembered long enough for the verifier to check that unquoted
// names have a definition; the grammar model decides terminal-ness on its
// own afterwards.
#[derive(PartialEq, Debug)]
struct RhsSymbol {
    name: String,
    quoted: bool,
}

// One rule line: a left-hand side with all its alternatives
#[derive(PartialEq, Debug)]
struct LineRule {
    lhs: String,
    alternatives: Vec<Vec<RhsSymbol>>,
    location: Location,
}

fn parse_alternative(tokens: &[Token]) -> Result<Vec<RhsSymbol>> {
    tokens.iter().map(|t| match t {
        Token::Equals => Err(CompileErrorType::UnexpectedEquals),
        Token::Or => Err(CompileErrorType::UnsplitRewrite),
        Token::Nonterminal(name) => Ok(RhsSymbol { name: name.clone(), quoted: false }),
        Token::Terminal(name) => Ok(RhsSymbol { name: name.clone(), quoted: true }),
    }).collect()
}

// An empty token slice yields a single empty alternative, so `lhs =` and
// `lhs = a |` both produce epsilon alternatives
fn parse_rewrite(tokens: &[Token]) -> Result<Vec<Vec<RhsSymbol>>> {
    tokens.split(|t| *t == Token::Or).map(parse_alternative).collect()
}

fn parse_line(tokens: &[Token], location: Location) -> Result<LineRule> {
    // Try to get the nonterminal the rule defines. The match returns a
    // result which is then unwrapped with the ? operator
    let lhs = match tokens.first() {
        Some(Token::Nonterminal(name)) => Ok(name.clone()),
        Some(_) => Err(CompileErrorType::MissingNonterminal),
        None => Err(CompileErrorType::EmptyRuleLine),
    }?;

    if tokens.get(1) != Some(&Token::Equals) {
        return Err(CompileErrorType::MissingEquals);
    }

    let alternatives = parse_rewrite(&tokens[2..])?;

    return Ok(LineRule {
        lhs,
        alternatives,
        location,
    });
}

fn parse_lex_line(line: &str, location: Location) -> LineResult<LineRule> {
    lex_line(line)
        .and_then(|lexed_line| parse_line(&lexed_line, location.clone()))
        .map_err(|error| CompileError { location, error })
}

fn is_rule_line(line: &String) -> bool {
    !line.trim().is_empty() && !line.starts_with(';')
}

// Returns an iterator over the rule lines of a file, with the io errors
// wrapped in CompileError and the line numbers attached
fn file_line_nums<'a>(file: File, path: &'a Path) -> impl Iterator<Item = (usize, LineResult<String>)> + 'a {
    std::io::BufReader::new(file)
        .lines()
        .map(move |line| line.map_err(|e| io_error(e, path.to_path_buf())))
        .enumerate()
        .filter(|(_, line)| line.as_ref().is_ok_and(is_rule_line) || line.is_err())
        .map(|(num, line)| (num + 1, line))
}

// Flattens the per-line alternatives into the grammar's rule list. Symbols
// are listed in order of first appearance: every left-hand side first,
// then any name that only occurs on a right-hand side.
fn grammar_from_rules(path: &Path, line_rules: Vec<LineRule>) -> FileResult<Grammar> {
    verify_rules(&line_rules)?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let axiom_name = line_rules.first().map(|rule| rule.lhs.clone()).unwrap_or_default();

    let mut seen = HashSet::new();
    let mut symbols = Vec::new();
    for line_rule in &line_rules {
        if seen.insert(line_rule.lhs.clone()) {
            symbols.push(Symbol::new(line_rule.lhs.clone()));
        }
    }

    let mut rules = Vec::new();
    for line_rule in &line_rules {
        for alternative in &line_rule.alternatives {
            let mut rhs = Vec::new();
            for rhs_symbol in alternative {
                if seen.insert(rhs_symbol.name.clone()) {
                    symbols.push(Symbol::new(rhs_symbol.name.clone()));
                }
                rhs.push(Symbol::new(rhs_symbol.name.clone()));
            }
            rules.push(Rule::new(Symbol::new(line_rule.lhs.clone()), rhs));
        }
    }

    return Ok(Grammar::new(name, symbols, Symbol::new(axiom_name), rules));
}

pub fn parse_file(path: &Path) -> FileResult<Grammar> {
    let file = File::open(path).map_err(|e| vec![io_error(e, path.to_path_buf())])?;
    let lines = file_line_nums(file, path);

    let parsed_lines = lines.map(|(num, line_res)| {
        line_res.and_then(|line| parse_lex_line(&line, Location::at_line(path.to_path_buf(), num)))
    });

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition(LineResult::is_ok);
    if !errors.is_empty() {
        return Err(errors.into_iter().map(LineResult::unwrap_err).collect_vec());
    }
    let rules_unwrapped = rules.into_iter().map(LineResult::unwrap).collect_vec();

    return grammar_from_rules(path, rules_unwrapped);
}
