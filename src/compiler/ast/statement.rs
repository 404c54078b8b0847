use serde::{Deserialize, Serialize};

use super::{
    expression::{Expression, Variable},
    node::PreOrderIter,
};

/// SPL has no call expressions: a procedure can only be invoked by a call
/// statement, so scanning statements is enough to find every call a procedure
/// makes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Empty,
    Compound(Vec<Statement>),
    Assign {
        target: Variable,
        value: Expression,
    },
    If {
        cond: Expression,
        then_part: Box<Statement>,
        else_part: Box<Statement>,
    },
    While {
        cond: Expression,
        body: Box<Statement>,
    },
    Call(CallStatement),
}

impl Statement {
    pub fn call(line: u32, procedure: &str, arguments: Vec<Expression>) -> Statement {
        Statement::Call(CallStatement::new(line, procedure, arguments))
    }

    /// The statements directly nested within this statement.
    pub fn children(&self) -> Vec<&Statement> {
        match self {
            Statement::Empty | Statement::Assign { .. } | Statement::Call(_) => vec![],
            Statement::Compound(stmts) => stmts.iter().collect(),
            Statement::If {
                then_part,
                else_part,
                ..
            } => vec![&**then_part, &**else_part],
            Statement::While { body, .. } => vec![&**body],
        }
    }

    pub fn iter_preorder(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    pub fn root_str(&self) -> String {
        match self {
            Statement::Empty => ";".into(),
            Statement::Compound(_) => "{}".into(),
            Statement::Assign { target, .. } => format!("{} :=", target.root_str()),
            Statement::If { .. } => "if".into(),
            Statement::While { .. } => "while".into(),
            Statement::Call(call) => call.root_str(),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(&self.root_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallStatement {
    pub line: u32,
    pub procedure: String,
    pub arguments: Vec<Expression>,
}

impl CallStatement {
    pub fn new(line: u32, procedure: &str, arguments: Vec<Expression>) -> CallStatement {
        CallStatement {
            line,
            procedure: procedure.into(),
            arguments,
        }
    }

    pub fn root_str(&self) -> String {
        format!("call {}", self.procedure)
    }
}
