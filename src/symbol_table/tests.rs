//! Unit tests for the symbol table and register pool.

use super::{
    registers::{RegisterPool, REGISTER_COUNT},
    symbol_table::{Attributes, SymbolTable},
};
use crate::ast::types::LangType;
use crate::errors::errors::ErrorImpl;

#[test]
fn test_enter_and_lookup() {
    let mut table = SymbolTable::new();
    table.enter(Attributes::new(LangType::Int, "a"), 1).unwrap();

    let entry = table.lookup("a").unwrap();
    assert_eq!(entry.var_type, LangType::Int);
    assert_eq!(entry.register, None);
    assert!(table.lookup("b").is_none());
}

#[test]
fn test_enter_refuses_duplicates() {
    let mut table = SymbolTable::new();
    table.enter(Attributes::new(LangType::Int, "a"), 1).unwrap();

    let error = table
        .enter(Attributes::new(LangType::Float, "a"), 2)
        .unwrap_err();

    assert_eq!(error.get_message(), "variable 'a' already declared.");
    assert_eq!(error.get_row(), 2);
    // The first entry is kept
    assert_eq!(table.lookup("a").unwrap().var_type, LangType::Int);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_set_register() {
    let mut table = SymbolTable::new();
    table.enter(Attributes::new(LangType::Float, "x"), 1).unwrap();
    table.lookup_mut("x").unwrap().set_register('c');

    assert_eq!(table.lookup("x").unwrap().register, Some('c'));
}

#[test]
fn test_display_lists_sorted_entries() {
    let mut table = SymbolTable::new();
    table.enter(Attributes::new(LangType::Float, "b"), 1).unwrap();
    table.enter(Attributes::new(LangType::Int, "a"), 1).unwrap();
    table.lookup_mut("a").unwrap().set_register('a');

    let rendered = table.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[3], "│ a          │ INT        │ a          │");
    assert_eq!(lines[4], "│ b          │ FLOAT      │ -          │");
}

#[test]
fn test_registers_are_handed_out_in_order() {
    let mut pool = RegisterPool::new();

    assert_eq!(pool.remaining(), REGISTER_COUNT);
    assert_eq!(pool.new_register().unwrap(), 'a');
    assert_eq!(pool.new_register().unwrap(), 'b');
    assert_eq!(pool.remaining(), REGISTER_COUNT - 2);
}

#[test]
fn test_register_pool_exhaustion() {
    let mut pool = RegisterPool::new();
    let registers: Vec<char> = (0..REGISTER_COUNT)
        .map(|_| pool.new_register().unwrap())
        .collect();

    assert_eq!(registers.first(), Some(&'a'));
    assert_eq!(registers.last(), Some(&'z'));
    assert_eq!(pool.new_register(), Err(ErrorImpl::RegistersExhausted));
}
