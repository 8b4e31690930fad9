use std::fmt::Display;

use super::Item;

// One cell of the chart: the items derived at a single input position, in
// the order they were derived, without duplicates.
#[derive(Debug, Default, PartialEq)]
pub struct Cell {
    items: Vec<Item>,
}

impl Cell {
    fn new() -> Cell {
        Cell { items: Vec::new() }
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    // Appends the item unless a structurally equal one is already present.
    // Reports whether the cell grew.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        return true;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

// The full parse table: one cell per input position 0..=N, allocated up
// front and populated monotonically by the engine.
#[derive(Debug, PartialEq)]
pub struct Chart {
    cells: Vec<Cell>,
}

impl Chart {
    pub fn with_input_len(input_len: usize) -> Chart {
        Chart {
            cells: (0..=input_len).map(|_| Cell::new()).collect(),
        }
    }

    pub fn positions(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, position: usize) -> &Cell {
        &self.cells[position]
    }

    pub fn cell_mut(&mut self, position: usize) -> &mut Cell {
        &mut self.cells[position]
    }
}

impl Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, cell) in self.cells.iter().enumerate() {
            writeln!(f, "chart[{}]:", position)?;
            for item in cell.items() {
                writeln!(f, "  {}", item)?;
            }
        }
        Ok(())
    }
}
