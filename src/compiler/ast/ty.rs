use serde::{Deserialize, Serialize};

/// A type as it was written in the source code.  The type checker resolves
/// these into semantic [`crate::compiler::semantics::Type`] values, which are
/// what the symbol table stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpression {
    Named(String),
    Array {
        size: u32,
        base: Box<TypeExpression>,
    },
}

impl TypeExpression {
    pub fn named(name: &str) -> TypeExpression {
        TypeExpression::Named(name.into())
    }

    pub fn array(size: u32, base: TypeExpression) -> TypeExpression {
        TypeExpression::Array {
            size,
            base: Box::new(base),
        }
    }
}

impl std::fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            TypeExpression::Named(name) => f.write_str(name),
            TypeExpression::Array { size, base } => {
                f.write_fmt(format_args!("array [{}] of {}", size, base))
            }
        }
    }
}
