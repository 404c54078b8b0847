use super::{
    symbol_table::{Entry, ParameterType, ProcedureEntry, SymbolTable, TypeEntry},
    types::Type,
};

/// The library procedures every SPL program can call, with the passing mode
/// of each of their parameters (`true` for reference parameters).  All of
/// their parameters are `int`.
pub const PREDEFINED_PROCEDURES: &[(&str, &[bool])] = &[
    ("printi", &[false]),
    ("printc", &[false]),
    ("readi", &[true]),
    ("readc", &[true]),
    ("exit", &[]),
    ("time", &[true]),
    ("clearAll", &[false]),
    ("setPixel", &[false, false, false]),
    ("drawLine", &[false, false, false, false, false]),
    ("drawCircle", &[false, false, false, false]),
];

impl SymbolTable {
    /// Creates a global table that already contains the predefined types and
    /// library procedures.
    pub fn with_predefined() -> SymbolTable {
        let mut table = SymbolTable::new();
        table
            .entries_mut()
            .insert("int".into(), Entry::Type(TypeEntry::new(Type::Int)));
        for (name, params) in PREDEFINED_PROCEDURES {
            let parameter_types = params
                .iter()
                .map(|is_reference| ParameterType::new(Type::Int, *is_reference))
                .collect();
            let entry = ProcedureEntry::predefined(parameter_types);
            table
                .entries_mut()
                .insert((*name).into(), Entry::Procedure(entry));
        }
        table
    }
}
