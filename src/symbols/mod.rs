//! Identifier table construction.
//!
//! Consumes a token stream and catalogs each distinct identifier under
//! the ordinal of its first appearance.

pub mod symbols;

#[cfg(test)]
mod tests;
