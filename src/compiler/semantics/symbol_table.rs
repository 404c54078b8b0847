use std::{collections::BTreeMap, convert::TryFrom};

use serde::{Deserialize, Serialize};

use crate::{compiler::memory::StackLayout, result::Result};

use super::types::{Type, TypeSizeResolver};

/**
 `SymbolTable` maps names to the declarations they refer to.  SPL has two
 levels of scope, so there are two kinds of tables:

 * the global table, which holds every procedure and type definition (and the
   predefined library procedures), and
 * one local table per procedure, owned by that procedure's entry in the
   global table, which holds its parameters and local variables.

``` ignore
 type vector = array [10] of int;

 proc sum(ref v: vector, ref s: int) {
     var i: int;
     // ...
 }
```

 Here the global table contains `vector` and `sum`, and the local table of
 `sum` contains `v`, `s`, and `i`.

 The front end builds and populates the tables. Variable allocation only
 writes the stack offsets of variables and parameters and attaches a
 [`StackLayout`] to each procedure.
*/
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolTable {
    entries: BTreeMap<String, Entry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            entries: BTreeMap::new(),
        }
    }

    /// Adds a new entry to the table.  Returns an error if `name` is already
    /// declared in this table.
    pub fn enter(&mut self, name: &str, entry: Entry) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(format!("{} already declared", name));
        }
        self.entries.insert(name.into(), entry);
        Ok(())
    }

    pub(super) fn entries_mut(&mut self) -> &mut BTreeMap<String, Entry> {
        &mut self.entries
    }

    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.get_mut(name)
    }

    pub fn procedure(&self, name: &str) -> Option<&ProcedureEntry> {
        self.lookup(name).and_then(Entry::as_procedure)
    }

    pub fn procedure_mut(&mut self, name: &str) -> Option<&mut ProcedureEntry> {
        match self.lookup_mut(name)? {
            Entry::Procedure(pe) => Some(pe),
            _ => None,
        }
    }

    pub fn variable(&self, name: &str) -> Option<&VariableEntry> {
        self.lookup(name).and_then(Entry::as_variable)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut VariableEntry> {
        match self.lookup_mut(name)? {
            Entry::Variable(ve) => Some(ve),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeSizeResolver for SymbolTable {
    fn size_of(&self, ty: &Type) -> Option<i32> {
        self.size_of_within(ty, self.len())
    }
}

impl SymbolTable {
    /// Sizes of named types are found by following type definitions in this
    /// table.  Following more definitions than the table holds can only mean
    /// the definitions form a cycle, which has no size.
    fn size_of_within(&self, ty: &Type, budget: usize) -> Option<i32> {
        match ty {
            Type::Named(name) => {
                if budget == 0 {
                    return None;
                }
                let definition = &self.lookup(name)?.as_type()?.ty;
                self.size_of_within(definition, budget - 1)
            }
            Type::Array { size, base } => {
                let base = self.size_of_within(base, budget)?;
                i32::try_from(*size).ok()?.checked_mul(base)
            }
            Type::Int | Type::Bool => ty.byte_size(),
        }
    }
}

impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, entry) in self.entries.iter() {
            f.write_fmt(format_args!("{} | {}\n", name, entry))?;
        }

        Ok(())
    }
}

/// A declaration in a [`SymbolTable`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    Procedure(ProcedureEntry),
    Type(TypeEntry),
    Variable(VariableEntry),
}

impl Entry {
    pub fn as_procedure(&self) -> Option<&ProcedureEntry> {
        match self {
            Entry::Procedure(pe) => Some(pe),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeEntry> {
        match self {
            Entry::Type(te) => Some(te),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableEntry> {
        match self {
            Entry::Variable(ve) => Some(ve),
            _ => None,
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Procedure(pe) => f.write_fmt(format_args!(
                "proc ({} parameters){}",
                pe.parameter_types.len(),
                if pe.predefined { " [predefined]" } else { "" }
            )),
            Entry::Type(te) => f.write_fmt(format_args!("type {}", te.ty)),
            Entry::Variable(ve) => {
                let offset = ve
                    .offset
                    .map(|o| o.to_string())
                    .unwrap_or_else(|| "NULL".into());
                f.write_fmt(format_args!(
                    "var {}{} @ {}",
                    if ve.is_reference { "ref " } else { "" },
                    ve.ty,
                    offset
                ))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcedureEntry {
    local_table: SymbolTable,
    parameter_types: Vec<ParameterType>,
    /// Produced by variable allocation, never read from a compilation unit.
    #[serde(skip)]
    stack_layout: Option<StackLayout>,
    predefined: bool,
}

impl ProcedureEntry {
    pub fn new(local_table: SymbolTable, parameter_types: Vec<ParameterType>) -> ProcedureEntry {
        ProcedureEntry {
            local_table,
            parameter_types,
            stack_layout: None,
            predefined: false,
        }
    }

    /// A library procedure: it has a signature but no body, so it never
    /// receives a stack layout.
    pub fn predefined(parameter_types: Vec<ParameterType>) -> ProcedureEntry {
        ProcedureEntry {
            local_table: SymbolTable::new(),
            parameter_types,
            stack_layout: None,
            predefined: true,
        }
    }

    pub fn local_table(&self) -> &SymbolTable {
        &self.local_table
    }

    pub(crate) fn local_table_mut(&mut self) -> &mut SymbolTable {
        &mut self.local_table
    }

    pub fn parameter_types(&self) -> &[ParameterType] {
        &self.parameter_types
    }

    pub(crate) fn parameter_types_mut(&mut self) -> &mut [ParameterType] {
        &mut self.parameter_types
    }

    /// The layout of this procedure's stack frame.  `None` until variable
    /// allocation has run, and always `None` for predefined procedures.
    pub fn stack_layout(&self) -> Option<&StackLayout> {
        self.stack_layout.as_ref()
    }

    pub(crate) fn set_stack_layout(&mut self, layout: StackLayout) {
        self.stack_layout = Some(layout);
    }

    pub fn is_predefined(&self) -> bool {
        self.predefined
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub ty: Type,
}

impl TypeEntry {
    pub fn new(ty: Type) -> TypeEntry {
        TypeEntry { ty }
    }
}

/// A parameter or local variable of a procedure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableEntry {
    pub ty: Type,
    pub is_reference: bool,
    offset: Option<i32>,
}

impl VariableEntry {
    pub fn new(ty: Type, is_reference: bool) -> VariableEntry {
        VariableEntry {
            ty,
            is_reference,
            offset: None,
        }
    }

    /// Offset of this variable from its procedure's base register, or `None`
    /// if it has not been allocated yet.
    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: i32) {
        self.offset = Some(offset);
    }
}

/// The type of one parameter in a procedure's signature.  The list of these
/// in a [`ProcedureEntry`] is parallel to the procedure's parameter
/// declarations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterType {
    pub ty: Type,
    pub is_reference: bool,
    offset: Option<i32>,
}

impl ParameterType {
    pub fn new(ty: Type, is_reference: bool) -> ParameterType {
        ParameterType {
            ty,
            is_reference,
            offset: None,
        }
    }

    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: i32) {
        self.offset = Some(offset);
    }
}
