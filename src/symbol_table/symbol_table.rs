use std::{collections::HashMap, fmt::Display};

use crate::{
    ast::types::LangType,
    errors::errors::{Error, ErrorImpl},
};

/// Everything known about a declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub var_type: LangType,
    pub name: String,
    /// Unset until the code generator reaches the declaration.
    pub register: Option<char>,
}

impl Attributes {
    pub fn new(var_type: LangType, name: impl Into<String>) -> Self {
        Attributes {
            var_type,
            name: name.into(),
            register: None,
        }
    }

    pub fn set_register(&mut self, register: char) {
        self.register = Some(register);
    }
}

/// Flat, single-scope mapping from identifier to its attributes.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: HashMap<String, Attributes>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            table: HashMap::new(),
        }
    }

    /// Adds a new entry, refusing to overwrite an existing one.
    pub fn enter(&mut self, attributes: Attributes, row: u32) -> Result<(), Error> {
        if self.table.contains_key(&attributes.name) {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: attributes.name,
                },
                row,
            ))
        } else {
            self.table.insert(attributes.name.clone(), attributes);
            Ok(())
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Attributes> {
        self.table.get(name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Attributes> {
        self.table.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries sorted by identifier.
    pub fn entries(&self) -> Vec<&Attributes> {
        let mut entries: Vec<&Attributes> = self.table.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌────────────┬────────────┬────────────┐")?;
        writeln!(f, "│ {:<10} │ {:<10} │ {:<10} │", "ID", "Type", "Register")?;
        writeln!(f, "├────────────┼────────────┼────────────┤")?;

        for attributes in self.entries() {
            let register = attributes
                .register
                .map(|register| register.to_string())
                .unwrap_or_else(|| String::from("-"));

            writeln!(
                f,
                "│ {:<10} │ {:<10} │ {:<10} │",
                attributes.name,
                attributes.var_type.to_string(),
                register
            )?;
        }

        write!(f, "└────────────┴────────────┴────────────┘")
    }
}
