use serde::{Deserialize, Serialize};

use super::{
    node::PreOrderIter,
    parameter::{ParameterDef, VariableDef},
    statement::{CallStatement, Statement},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcedureDef {
    pub line: u32,
    pub name: String,
    pub params: Vec<ParameterDef>,
    pub variables: Vec<VariableDef>,
    pub body: Vec<Statement>,
}

impl ProcedureDef {
    pub fn new(
        line: u32,
        name: &str,
        params: Vec<ParameterDef>,
        variables: Vec<VariableDef>,
        body: Vec<Statement>,
    ) -> ProcedureDef {
        ProcedureDef {
            line,
            name: name.into(),
            params,
            variables,
            body,
        }
    }

    /// Iterates over every statement in the body of this procedure, including
    /// statements nested within `if`, `while`, and compound statements.
    pub fn iter_statements(&self) -> impl Iterator<Item = &Statement> {
        self.body.iter().flat_map(|s| PreOrderIter::new(s))
    }

    /// Every call statement in the body of this procedure, in source order.
    pub fn calls(&self) -> impl Iterator<Item = &CallStatement> {
        self.iter_statements().filter_map(|s| match s {
            Statement::Call(call) => Some(call),
            _ => None,
        })
    }
}

impl std::fmt::Display for ProcedureDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let params = self
            .params
            .iter()
            .map(|p| p.root_str())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_fmt(format_args!("proc {}({})", self.name, params))
    }
}
