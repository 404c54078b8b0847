use serde::{Deserialize, Serialize};

use super::{procedure::ProcedureDef, ty::TypeExpression};

/// The root of an SPL abstract syntax tree: the ordered list of every global
/// definition in the source file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub definitions: Vec<GlobalDefinition>,
}

impl Program {
    pub fn new(definitions: Vec<GlobalDefinition>) -> Program {
        Program { definitions }
    }

    /// Returns the procedure definitions of this program in declaration order,
    /// skipping type definitions.
    pub fn procedures(&self) -> impl Iterator<Item = &ProcedureDef> {
        self.definitions.iter().filter_map(|d| match d {
            GlobalDefinition::Procedure(pd) => Some(pd),
            GlobalDefinition::Type(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GlobalDefinition {
    Procedure(ProcedureDef),
    Type(TypeDef),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub line: u32,
    pub name: String,
    pub ty: TypeExpression,
}

impl TypeDef {
    pub fn new(line: u32, name: &str, ty: TypeExpression) -> TypeDef {
        TypeDef {
            line,
            name: name.into(),
            ty,
        }
    }
}
