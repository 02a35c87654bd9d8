use std::{collections::HashMap, fmt::Display};

use tracing::{debug, trace};

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    pub kind: TokenKind,
    /// 1-based rank of the identifier's first appearance.
    pub index: usize,
}

impl SymbolEntry {
    pub fn category(&self) -> &'static str {
        self.kind.label()
    }
}

impl Display for SymbolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{'type': '{}', 'index': {}}}", self.category(), self.index)
    }
}

/// Identifier name to entry. Indices are exactly `1..=len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Records `name` if unseen. Returns the entry either way.
    fn declare(&mut self, name: &str) -> SymbolEntry {
        if let Some(entry) = self.entries.get(name) {
            return *entry;
        }

        let entry = SymbolEntry {
            kind: TokenKind::Identifier,
            index: self.entries.len() + 1,
        };
        trace!(name, index = entry.index, "new identifier");
        self.entries.insert(name.to_string(), entry);
        entry
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolEntry)> {
        let mut entries = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .collect::<Vec<_>>();
        entries.sort_by_key(|(_, entry)| entry.index);
        entries.into_iter()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, entry) in self.iter() {
            writeln!(f, "{}: {}", name, entry)?;
        }

        Ok(())
    }
}

pub fn build_identifier_table(tokens: &[Token]) -> SymbolTable {
    let mut table = SymbolTable::new();

    for token in tokens.iter().filter(|token| token.is_identifier()) {
        table.declare(&token.value);
    }

    debug!(identifiers = table.len(), "built identifier table");
    table
}
