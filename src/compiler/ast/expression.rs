use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Integer(i32),
    Variable(Box<Variable>),
    BinaryOp(BinaryOperator, Box<Expression>, Box<Expression>),
    UnaryOp(UnaryOperator, Box<Expression>),
}

impl Expression {
    pub fn int(value: i32) -> Expression {
        Expression::Integer(value)
    }

    pub fn var(name: &str) -> Expression {
        Expression::Variable(Box::new(Variable::Named(name.into())))
    }

    pub fn root_str(&self) -> String {
        match self {
            Expression::Integer(i) => format!("{}", i),
            Expression::Variable(v) => v.root_str(),
            Expression::BinaryOp(op, ..) => format!("{}", op),
            Expression::UnaryOp(op, _) => format!("{}", op),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(&self.root_str())
    }
}

/// The target of an assignment or a value read from memory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Variable {
    Named(String),
    ArrayAccess {
        array: Box<Variable>,
        index: Box<Expression>,
    },
}

impl Variable {
    pub fn named(name: &str) -> Variable {
        Variable::Named(name.into())
    }

    pub fn root_str(&self) -> String {
        match self {
            Variable::Named(name) => name.clone(),
            Variable::ArrayAccess { array, .. } => format!("{}[]", array.root_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NEq,
    Ls,
    LsEq,
    Gr,
    GrEq,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        use BinaryOperator::*;
        match self {
            Add => f.write_str("+"),
            Sub => f.write_str("-"),
            Mul => f.write_str("*"),
            Div => f.write_str("/"),
            Eq => f.write_str("="),
            NEq => f.write_str("#"),
            Ls => f.write_str("<"),
            LsEq => f.write_str("<="),
            Gr => f.write_str(">"),
            GrEq => f.write_str(">="),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Negate,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            UnaryOperator::Negate => f.write_str("-"),
        }
    }
}
