/**
 * The parts of semantic analysis that later phases depend upon: the semantic
 * types that declarations resolve to and the symbol table that records every
 * declaration.  Building the table and checking types are done by the front
 * end; the back end only reads the table and writes storage locations into
 * it.
 */
mod predefined;
pub mod symbol_table;
pub mod types;

pub use predefined::PREDEFINED_PROCEDURES;
pub use symbol_table::{Entry, ParameterType, ProcedureEntry, SymbolTable, TypeEntry, VariableEntry};
pub use types::{Type, TypeSizeResolver};
