use serde::{Deserialize, Serialize};

use super::ty::TypeExpression;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterDef {
    pub line: u32,
    pub name: String,
    pub ty: TypeExpression,
    pub is_reference: bool,
}

impl ParameterDef {
    pub fn new(line: u32, name: &str, ty: TypeExpression, is_reference: bool) -> ParameterDef {
        ParameterDef {
            line,
            name: name.into(),
            ty,
            is_reference,
        }
    }

    pub fn root_str(&self) -> String {
        if self.is_reference {
            format!("ref {}:{}", self.name, self.ty)
        } else {
            format!("{}:{}", self.name, self.ty)
        }
    }
}

impl std::fmt::Display for ParameterDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(&self.root_str())
    }
}

/// A local variable declared at the top of a procedure body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    pub line: u32,
    pub name: String,
    pub ty: TypeExpression,
}

impl VariableDef {
    pub fn new(line: u32, name: &str, ty: TypeExpression) -> VariableDef {
        VariableDef {
            line,
            name: name.into(),
            ty,
        }
    }
}

impl std::fmt::Display for VariableDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("var {}:{}", self.name, self.ty))
    }
}
