use log::trace;

use crate::compiler::{
    ast::ProcedureDef,
    semantics::{ProcedureEntry, SymbolTable, TypeSizeResolver},
};

use super::LayoutError;

/// A procedure is a leaf if its body contains no call statements at all.
/// Recursive calls count: a procedure that calls itself needs a frame
/// pointer like any other caller.
pub fn is_leaf_procedure(procedure: &ProcedureDef) -> bool {
    procedure.calls().next().is_none()
}

/// Computes how many bytes must be reserved at the bottom of the frame of
/// `procedure` to pass arguments to the procedures it calls: the largest
/// argument area of any callee.
///
/// A callee's argument area is sized exactly as the callee sizes it for
/// itself, one slot per parameter, so a caller never reserves less than the
/// callee addresses.  The callee's signature is looked up in `globals`; a call
/// to anything that is not a procedure is an error, because the area cannot be
/// sized.
pub fn outgoing_area_size<R: TypeSizeResolver>(
    procedure: &ProcedureDef,
    globals: &SymbolTable,
    sizes: &R,
) -> Result<i32, LayoutError> {
    let mut size = 0;
    for call in procedure.calls() {
        let callee = globals
            .procedure(&call.procedure)
            .ok_or_else(|| LayoutError::UnknownCallee {
                procedure: procedure.name.clone(),
                callee: call.procedure.clone(),
            })?;
        let arguments = argument_area_size(procedure, &call.procedure, callee, sizes)?;
        trace!(
            "{}: call {} needs {} bytes of arguments",
            procedure.name,
            call.procedure,
            arguments
        );
        size = size.max(arguments);
    }

    Ok(size)
}

fn argument_area_size<R: TypeSizeResolver>(
    procedure: &ProcedureDef,
    callee_name: &str,
    callee: &ProcedureEntry,
    sizes: &R,
) -> Result<i32, LayoutError> {
    let mut area: i32 = 0;
    for param in callee.parameter_types() {
        let slot = sizes
            .slot_size(&param.ty, param.is_reference)
            .ok_or_else(|| LayoutError::UnresolvedArgumentSize {
                procedure: procedure.name.clone(),
                callee: callee_name.into(),
                ty: param.ty.clone(),
            })?;
        area = area
            .checked_add(slot)
            .ok_or_else(|| LayoutError::FrameTooLarge {
                procedure: procedure.name.clone(),
                area: "outgoing area",
            })?;
    }

    Ok(area)
}
