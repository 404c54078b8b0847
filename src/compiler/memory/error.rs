use crate::compiler::semantics::Type;

/// Errors generated while laying out stack frames.  All of them mean that an
/// earlier phase let through a program it should have rejected, so none of
/// them can be recovered from.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// A procedure definition has no procedure entry in the global table.
    ProcedureEntryMissing(String),
    /// A parameter or variable has no entry in its procedure's local table.
    VariableEntryMissing { procedure: String, symbol: String },
    /// The size of a parameter's or variable's type cannot be determined.
    UnresolvedTypeSize {
        procedure: String,
        symbol: String,
        ty: Type,
    },
    /// The signature in the global table does not have one parameter type
    /// for each declared parameter.
    ParameterCountMismatch {
        procedure: String,
        declared: usize,
        registered: usize,
    },
    /// A call targets something that is not a known procedure, so the size
    /// of its arguments, and so the outgoing area, is unknown.
    UnknownCallee { procedure: String, callee: String },
    /// A parameter of a called procedure has a type whose size cannot be
    /// determined, so the outgoing area cannot be sized.
    UnresolvedArgumentSize {
        procedure: String,
        callee: String,
        ty: Type,
    },
    /// An area of the frame, or the frame as a whole, is larger than an
    /// offset can address.
    FrameTooLarge { procedure: String, area: &'static str },
    /// The offset of a parameter in the local table differs from its offset
    /// in the procedure's signature.
    InconsistentParameterOffset {
        procedure: String,
        parameter: String,
        local: Option<i32>,
        signature: Option<i32>,
    },
}

fn fmt_offset(offset: &Option<i32>) -> String {
    offset
        .map(|o| o.to_string())
        .unwrap_or_else(|| "NULL".into())
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::ProcedureEntryMissing(name) => f.write_fmt(format_args!(
                "No procedure entry for {} in the global table",
                name
            )),
            LayoutError::VariableEntryMissing { procedure, symbol } => f.write_fmt(format_args!(
                "No entry for {} in the local table of {}",
                symbol, procedure
            )),
            LayoutError::UnresolvedTypeSize {
                procedure,
                symbol,
                ty,
            } => f.write_fmt(format_args!(
                "Cannot determine the size of type {} of {} in {}",
                ty, symbol, procedure
            )),
            LayoutError::ParameterCountMismatch {
                procedure,
                declared,
                registered,
            } => f.write_fmt(format_args!(
                "{} declares {} parameters but its signature has {}",
                procedure, declared, registered
            )),
            LayoutError::UnknownCallee { procedure, callee } => f.write_fmt(format_args!(
                "Cannot size the outgoing area of {}: {} is not a procedure",
                procedure, callee
            )),
            LayoutError::UnresolvedArgumentSize {
                procedure,
                callee,
                ty,
            } => f.write_fmt(format_args!(
                "Cannot size the outgoing area of {}: a parameter of {} has type {} of unknown size",
                procedure, callee, ty
            )),
            LayoutError::FrameTooLarge { procedure, area } => f.write_fmt(format_args!(
                "The {} of {} is too large to address",
                area, procedure
            )),
            LayoutError::InconsistentParameterOffset {
                procedure,
                parameter,
                local,
                signature,
            } => f.write_fmt(format_args!(
                "Parameter {} of {} has INCONSISTENT({}/{}) offsets",
                parameter,
                procedure,
                fmt_offset(local),
                fmt_offset(signature)
            )),
        }
    }
}
