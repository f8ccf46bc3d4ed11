//! Tile naming: name-list parsing and the positional fallback.
//!
//! Tiles are named from an optional external name list, consumed in
//! traversal order. Once the list is exhausted the namer falls back to
//! zero-padded positional names, continuing from the same running index.

/// How a name-list text is split into individual names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameListMode {
    /// Each line, whitespace-trimmed, is one name.
    Line,
    /// Each character of each trimmed line is one name.
    Char,
}

/// Ordered sequence of tile names loaded from an external source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Parse name-list text according to the given mode.
    pub fn parse(text: &str, mode: NameListMode) -> Self {
        let names = match mode {
            NameListMode::Line => {
                text.lines().map(|line| line.trim().to_string()).collect()
            }
            NameListMode::Char => text
                .lines()
                .flat_map(|line| line.trim().chars())
                .map(String::from)
                .collect(),
        };
        Self { names }
    }

    /// Get the name at the given index, if the list reaches that far.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of names in the list.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

/// Assigns names to tiles in traversal order.
///
/// Holds an explicit running index: list names are consumed first, then
/// remaining tiles get the positional fallback `tile_{index:03}` with the
/// same index, which is never reset.
#[derive(Debug)]
pub struct TileNamer {
    names: NameList,
    index: usize,
}

impl TileNamer {
    /// Create a namer over the given name list. An empty list yields
    /// positional names only.
    pub fn new(names: NameList) -> Self {
        Self { names, index: 0 }
    }

    /// Produce the name for the next tile and advance the index.
    pub fn next_name(&mut self) -> String {
        let name = match self.names.get(self.index) {
            Some(name) => name.to_string(),
            None => format!("tile_{:03}", self.index),
        };
        self.index += 1;
        name
    }

    /// Number of names handed out so far.
    pub fn assigned(&self) -> usize {
        self.index
    }
}
