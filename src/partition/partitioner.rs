use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    /// Fewest balanced pieces covering the prefix ending here.
    cost: usize,
    /// Where the last of those pieces starts.
    start: usize,
}

/// Minimum-piece balanced partitions for every prefix of a string.
///
/// Cell `i` covers `text[..=i]`. A cell left empty means no balanced
/// partition of that prefix was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTable<'a> {
    text: &'a str,
    cells: Vec<Option<Cell>>,
}
impl<'a> PartitionTable<'a> {
    pub fn build(text: &'a str) -> Result<Self, PartitionError> {
        let bytes = validate(text)?;
        let n = bytes.len();
        let mut cells = vec![None; n];
        if n == 0 {
            return Ok(Self { text, cells });
        }
        cells[0] = Some(Cell { cost: 1, start: 0 });
        for i in 1..n {
            let mut tracker = BalanceTracker::new();
            for j in (0..=i).rev() {
                tracker.add(bytes[j]);
                if !tracker.is_balanced() {
                    continue;
                }
                let cost = if j == 0 {
                    1
                } else if let Some(prev) = cells[j - 1] {
                    prev.cost + 1
                } else {
                    continue;
                };
                // strict comparison keeps the shortest last piece on ties
                if cells[i].map_or(true, |c: Cell| cost < c.cost) {
                    cells[i] = Some(Cell { cost, start: j });
                }
            }
        }
        let table = Self { text, cells };
        tracing::trace!(
            "partitioned {} bytes into {:?} balanced pieces",
            n,
            table.min_pieces(),
        );
        Ok(table)
    }
    pub fn text(&self) -> &'a str {
        self.text
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Fewest balanced pieces covering `text[..=i]`.
    pub fn prefix_cost(&self, i: usize) -> Option<usize> {
        self.cells.get(i).copied().flatten().map(|c| c.cost)
    }
    /// Fewest balanced pieces covering the whole text, `Some(0)` for empty text.
    pub fn min_pieces(&self) -> Option<usize> {
        match self.cells.last() {
            None => Some(0),
            Some(cell) => cell.map(|c| c.cost),
        }
    }
    /// One optimal partition, in order. `None` if the text has no partition.
    pub fn pieces(&self) -> Option<Vec<&'a str>> {
        let mut out = Vec::with_capacity(self.min_pieces()?);
        let mut end = self.cells.len();
        while end > 0 {
            let cell = self.cells[end - 1]?;
            out.push(&self.text[cell.start..end]);
            end = cell.start;
        }
        out.reverse();
        Some(out)
    }
}

/// Minimum number of balanced substrings `s` can be split into.
///
/// ```
/// use balpart_rs::prelude::*;
///
/// assert_eq!(minimum_substrings_in_partition("fabccddg"), Ok(3));
/// assert_eq!(minimum_substrings_in_partition(""), Ok(0));
/// ```
pub fn minimum_substrings_in_partition(s: &str) -> Result<usize, PartitionError> {
    PartitionTable::build(s)?
        .min_pieces()
        .ok_or(PartitionError::Unpartitionable { len: s.len() })
}

/// Whether `s` as a whole is a balanced substring.
pub fn is_balanced(s: &str) -> Result<bool, PartitionError> {
    let tracker: BalanceTracker = validate(s)?.iter().copied().collect();
    Ok(tracker.is_balanced())
}
