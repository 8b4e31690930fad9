/*
    This module recognizes words with the Earley chart algorithm.

    The chart is seeded with one item per axiom rule, then each cell is
    closed under predict/scan/complete before the engine moves to the next
    position. The chart itself is the primary artifact; `accepts` just
    inspects the final cell.
*/

mod chart;
mod item;

pub use chart::{Cell, Chart};
pub use item::Item;

use std::fmt::Display;

use crate::grammar::{Grammar, Symbol};

// Which inference produced an item. Only reported to observers; the engine
// itself never reads these back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Init,
    Predict,
    Scan,
    Complete,
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::Init => write!(f, "init"),
            Reason::Predict => write!(f, "pred"),
            Reason::Scan => write!(f, "scan"),
            Reason::Complete => write!(f, "comp"),
        }
    }
}

// Called once for every item that actually lands in the chart
type Observer<'a> = &'a mut dyn FnMut(&Item, Reason);

pub fn parse(grammar: &Grammar, word: &[String]) -> Chart {
    parse_with_observer(grammar, word, &mut |_, _| {})
}

// Runs initialization and then the fixed-point loop over every position.
// Within one cell the cursor chases the cell's growing length, so items
// appended during the pass are processed by the same pass.
pub fn parse_with_observer(grammar: &Grammar, word: &[String], observe: Observer) -> Chart {
    let mut chart = init(grammar, word.len(), observe);

    for position in 0..=word.len() {
        let mut cursor = 0;
        while cursor < chart.cell(position).len() {
            let probed = chart.cell(position).items()[cursor].clone();

            // At most one inference applies: the three cases are mutually
            // exclusive by the shape of the pending sequence
            match probed.next_pending() {
                None => complete(&probed, &mut chart, position, observe),
                Some(next) if grammar.is_non_terminal(next) => {
                    predict(grammar, next, &mut chart, position, observe)
                }
                Some(next) if position < word.len() && next.name() == word[position] => {
                    scan(&probed, &mut chart, position, observe)
                }
                // Terminal mismatch, or no input left to scan against
                Some(_) => {}
            }

            cursor += 1;
        }
    }

    return chart;
}

// True when the final cell holds a completed axiom item spanning the whole
// word. This is the sole acceptance criterion.
pub fn accepts(grammar: &Grammar, word: &[String], chart: &Chart) -> bool {
    chart.cell(word.len()).items().iter().any(|item| {
        item.origin() == 0
            && item.is_complete()
            && item.lhs().name() == grammar.axiom().name()
    })
}

// Allocates cells for positions 0..=input_len and seeds cell 0 with a
// dot-initial item for every rule that rewrites the axiom
fn init(grammar: &Grammar, input_len: usize, observe: Observer) -> Chart {
    let mut chart = Chart::with_input_len(input_len);

    for rule in grammar.rules_for(grammar.axiom().name()) {
        let item = Item::new(0, grammar.axiom().clone(), Vec::new(), rule.rhs().to_vec());
        record(&mut chart, 0, item, Reason::Init, observe);
    }

    return chart;
}

// Expands a pending nonterminal into dot-initial items for each of its
// rules. Prediction consumes no input, so everything lands in the same
// cell with the current position as origin.
fn predict(grammar: &Grammar, expected: &Symbol, chart: &mut Chart, position: usize, observe: Observer) {
    for rule in grammar.rules_for(expected.name()) {
        let item = Item::new(position, expected.clone(), Vec::new(), rule.rhs().to_vec());
        record(chart, position, item, Reason::Predict, observe);
    }
}

// Consumes the matching input token: the advanced item goes into the next
// cell. The only inference that crosses a position boundary.
fn scan(probed: &Item, chart: &mut Chart, position: usize, observe: Observer) {
    if let Some(advanced) = probed.advanced() {
        record(chart, position + 1, advanced, Reason::Scan, observe);
    }
}

// The probed item is a finished constituent of category `lhs` spanning
// [origin, position). Every item in the origin cell that was waiting for
// that category gets its dot advanced into the current cell.
fn complete(completed: &Item, chart: &mut Chart, position: usize, observe: Observer) {
    let origin = completed.origin();

    // The origin cell may be the current cell, which grows while we walk
    // it; chasing the length keeps the walk valid
    let mut cursor = 0;
    while cursor < chart.cell(origin).len() {
        let waiting = chart.cell(origin).items()[cursor].clone();
        cursor += 1;

        match waiting.next_pending() {
            // Completed items cannot be waiting for anything
            None => continue,
            Some(expected) if expected.name() == completed.lhs().name() => {
                if let Some(advanced) = waiting.advanced() {
                    record(chart, position, advanced, Reason::Complete, observe);
                }
            }
            Some(_) => {}
        }
    }
}

// Single insertion point: duplicates are dropped and the observer only
// hears about items that actually extend the chart
fn record(chart: &mut Chart, position: usize, item: Item, reason: Reason, observe: Observer) {
    if chart.cell(position).contains(&item) {
        return;
    }
    observe(&item, reason);
    chart.cell_mut(position).insert(item);
}
