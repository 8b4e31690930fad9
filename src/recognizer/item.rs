use std::fmt::Display;

use crate::grammar::Symbol;

// A dotted rule: the claim that a constituent of category `lhs`, starting
// at input position `origin`, has matched `matched` so far and still
// expects to match `pending`. Items are immutable; advancing the dot
// produces a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    origin: usize,
    lhs: Symbol,
    matched: Vec<Symbol>,
    pending: Vec<Symbol>,
}

impl Item {
    pub fn new(origin: usize, lhs: Symbol, matched: Vec<Symbol>, pending: Vec<Symbol>) -> Item {
        Item {
            origin,
            lhs,
            matched,
            pending,
        }
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn lhs(&self) -> &Symbol {
        &self.lhs
    }

    pub fn matched(&self) -> &[Symbol] {
        &self.matched
    }

    pub fn pending(&self) -> &[Symbol] {
        &self.pending
    }

    // The symbol right after the dot, if any
    pub fn next_pending(&self) -> Option<&Symbol> {
        self.pending.first()
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    // A new item with the dot advanced over the next pending symbol, or
    // None when the item is already complete
    pub fn advanced(&self) -> Option<Item> {
        let (next, rest) = self.pending.split_first()?;

        let mut matched = self.matched.clone();
        matched.push(next.clone());

        Some(Item {
            origin: self.origin,
            lhs: self.lhs.clone(),
            matched,
            pending: rest.to_vec(),
        })
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {} ->", self.origin, self.lhs)?;
        for symbol in &self.matched {
            write!(f, " {}", symbol)?;
        }
        write!(f, " •")?;
        for symbol in &self.pending {
            write!(f, " {}", symbol)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name)
    }

    #[test]
    fn advancing_moves_the_dot() {
        let item = Item::new(2, sym("np"), vec![], vec![sym("det"), sym("noun")]);

        let once = item.advanced().unwrap();
        assert_eq!(once, Item::new(2, sym("np"), vec![sym("det")], vec![sym("noun")]));
        assert_eq!(once.origin(), 2);
        assert_eq!(once.matched(), &[sym("det")]);
        assert_eq!(once.pending(), &[sym("noun")]);
        assert_eq!(once.next_pending(), Some(&sym("noun")));

        let twice = once.advanced().unwrap();
        assert_eq!(twice, Item::new(2, sym("np"), vec![sym("det"), sym("noun")], vec![]));
        assert!(twice.is_complete());
    }

    #[test]
    fn advancing_a_complete_item_is_guarded() {
        let item = Item::new(0, sym("a"), vec![], vec![]);

        assert!(item.is_complete());
        assert_eq!(item.advanced(), None);
    }

    #[test]
    fn equality_is_structural() {
        let a = Item::new(1, sym("vp"), vec![sym("v")], vec![sym("np")]);
        let b = Item::new(1, sym("vp"), vec![sym("v")], vec![sym("np")]);
        let c = Item::new(0, sym("vp"), vec![sym("v")], vec![sym("np")]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn item_display() {
        let item = Item::new(0, sym("s"), vec![sym("np")], vec![sym("vp")]);
        assert_eq!(item.to_string(), "[0, s -> np • vp]");
    }
}
