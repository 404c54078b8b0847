use serde::{Deserialize, Serialize};

use crate::compiler::{ast::Program, semantics::SymbolTable};

/// The input to the back end: a type checked program together with the
/// global symbol table the front end built for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub program: Program,
    pub symbols: SymbolTable,
}

impl CompilationUnit {
    pub fn new(program: Program, symbols: SymbolTable) -> CompilationUnit {
        CompilationUnit { program, symbols }
    }

    /// Reads a compilation unit serialized as YAML.
    pub fn from_yaml<R: std::io::Read>(reader: R) -> Result<CompilationUnit, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    /// Reads a compilation unit serialized as JSON.
    pub fn from_json<R: std::io::Read>(reader: R) -> Result<CompilationUnit, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
