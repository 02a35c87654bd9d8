//! Unit tests for identifier table construction.

use pretty_assertions::assert_eq;

use super::symbols::{build_identifier_table, SymbolEntry};
use crate::lexer::tokens::{Token, TokenKind};

fn ident(name: &str) -> Token {
    Token::new(TokenKind::Identifier, name)
}

#[test]
fn test_empty_token_stream() {
    let table = build_identifier_table(&[]);

    assert!(table.is_empty());
    assert_eq!(table.to_string(), "");
}

#[test]
fn test_indices_follow_first_appearance() {
    let tokens = vec![ident("b"), ident("a"), ident("b"), ident("c"), ident("a")];
    let table = build_identifier_table(&tokens);

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("b").map(|entry| entry.index), Some(1));
    assert_eq!(table.get("a").map(|entry| entry.index), Some(2));
    assert_eq!(table.get("c").map(|entry| entry.index), Some(3));
}

#[test]
fn test_non_identifiers_are_skipped() {
    let tokens = vec![
        Token::new(TokenKind::Keyword, "int"),
        ident("x"),
        Token::new(TokenKind::Operator, "="),
        Token::new(TokenKind::String, "\"y\""),
        Token::new(TokenKind::Number, "5"),
        Token::new(TokenKind::SpecialCharacter, ";"),
    ];
    let table = build_identifier_table(&tokens);

    assert_eq!(table.len(), 1);
    assert!(table.contains("x"));
    assert!(!table.contains("int"));
    assert!(!table.contains("\"y\""));
}

#[test]
fn test_entry_category() {
    let table = build_identifier_table(&[ident("x")]);

    assert_eq!(
        table.get("x"),
        Some(&SymbolEntry {
            kind: TokenKind::Identifier,
            index: 1
        })
    );
    assert_eq!(table.get("x").map(SymbolEntry::category), Some("Identifier"));
}

#[test]
fn test_iter_in_index_order() {
    let names = ["zeta", "alpha", "mid", "beta"];
    let tokens = names.iter().map(|name| ident(name)).collect::<Vec<_>>();
    let table = build_identifier_table(&tokens);

    let ordered = table.iter().map(|(name, entry)| (name, entry.index)).collect::<Vec<_>>();
    assert_eq!(ordered, vec![("zeta", 1), ("alpha", 2), ("mid", 3), ("beta", 4)]);
}

#[test]
fn test_table_display() {
    let table = build_identifier_table(&[ident("x"), ident("y"), ident("x")]);

    assert_eq!(
        table.to_string(),
        "x: {'type': 'Identifier', 'index': 1}\ny: {'type': 'Identifier', 'index': 2}\n"
    );
}
