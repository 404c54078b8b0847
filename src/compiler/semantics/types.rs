use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::compiler::arch::{REFERENCE_SIZE, WORD_SIZE};

/// The type that a declaration has after type checking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Int,
    Bool,
    Array { size: u32, base: Box<Type> },

    /// A reference to a type definition in the global symbol table.
    Named(String),
}

impl Type {
    pub fn array(size: u32, base: Type) -> Type {
        Type::Array {
            size,
            base: Box::new(base),
        }
    }

    /// Returns the size of this type in bytes, if it can be determined without
    /// consulting a symbol table.
    pub fn byte_size(&self) -> Option<i32> {
        match self {
            Type::Int | Type::Bool => Some(WORD_SIZE),
            Type::Array { size, base } => {
                let base = base.byte_size()?;
                i32::try_from(*size).ok()?.checked_mul(base)
            }
            Type::Named(_) => None,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            Type::Int => f.write_str("int"),
            Type::Bool => f.write_str("boolean"),
            Type::Array { size, base } => f.write_fmt(format_args!("array [{}] of {}", size, base)),
            Type::Named(name) => f.write_str(name),
        }
    }
}

/**
 * Computes how many bytes of storage a value of a given type needs.
 *
 * Returns `None` if the size cannot be determined, e.g. because the type
 * refers to a type definition that does not exist.  After type checking this
 * should never happen.
 */
pub trait TypeSizeResolver {
    fn size_of(&self, ty: &Type) -> Option<i32>;

    /// The size of the stack slot used to pass or store a value of `ty`: a
    /// reference occupies one word no matter how large the referenced value
    /// is.
    fn slot_size(&self, ty: &Type, is_reference: bool) -> Option<i32> {
        let size = self.size_of(ty)?;
        if is_reference {
            Some(REFERENCE_SIZE)
        } else {
            Some(size)
        }
    }
}
