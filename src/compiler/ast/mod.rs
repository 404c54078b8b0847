mod expression;
mod node;
mod parameter;
mod procedure;
mod program;
mod statement;
mod ty;

pub use self::expression::{BinaryOperator, Expression, UnaryOperator, Variable};
pub use self::node::PreOrderIter;
pub use self::parameter::{ParameterDef, VariableDef};
pub use self::procedure::ProcedureDef;
pub use self::program::{GlobalDefinition, Program, TypeDef};
pub use self::statement::{CallStatement, Statement};
pub use self::ty::TypeExpression;
