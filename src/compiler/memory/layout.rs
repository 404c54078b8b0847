use log::{debug, info, trace};

use crate::compiler::{
    ast::{ProcedureDef, Program},
    error::CompilerError,
    semantics::{ProcedureEntry, SymbolTable, TypeSizeResolver},
};

use super::{calls, LayoutError, StackLayout};

/**
 * Compute how every procedure will be laid out in memory: the offset within
 * the stack frame of every parameter and local variable, the size of each
 * area of the frame, and whether the frame can be leaf optimized.
 *
 * Offsets are written into the local table of each procedure, and parameter
 * offsets are also written into the procedure's signature in the global table.
 * The resulting [`StackLayout`] is attached to the procedure's global entry.
 *
 * Every procedure is planned from a shared view of the table before anything
 * is written, in program order.  The plans are then written into a copy of
 * the table, which replaces `table` only once every procedure has been laid
 * out and checked.  A failure aborts the whole pass and leaves `table`
 * untouched: the error carries the line of the procedure that could not be
 * laid out.
 */
pub fn allocate_vars(
    program: &Program,
    table: &mut SymbolTable,
) -> Result<(), CompilerError<LayoutError>> {
    info!("Allocate stack frames");
    let globals: &SymbolTable = table;
    let plans = program
        .procedures()
        .map(|procedure| {
            compute::plan_procedure(procedure, globals)
                .map(|plan| (procedure, plan))
                .map_err(|e| CompilerError::new(procedure.line, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut staged = table.clone();
    for (procedure, plan) in plans {
        compute::commit_plan(procedure, plan, &mut staged)
            .map_err(|e| CompilerError::new(procedure.line, e))?;
    }
    *table = staged;

    Ok(())
}

mod compute {
    use super::*;

    /// The offsets and layout of one procedure's frame, computed from a shared
    /// view of the symbol table before anything is written back to it.
    #[derive(Debug, PartialEq)]
    pub(in crate::compiler::memory) struct FramePlan {
        pub(in crate::compiler::memory) parameter_offsets: Vec<i32>,
        pub(in crate::compiler::memory) variable_offsets: Vec<i32>,
        pub(in crate::compiler::memory) layout: StackLayout,
    }

    pub(super) fn plan_procedure(
        procedure: &ProcedureDef,
        table: &SymbolTable,
    ) -> Result<FramePlan, LayoutError> {
        debug!("Allocate variables for {}", procedure);
        let plan = plan_frame(procedure, table, table)?;
        debug!("{}: {}", procedure.name, plan.layout);
        Ok(plan)
    }

    pub(super) fn commit_plan(
        procedure: &ProcedureDef,
        plan: FramePlan,
        table: &mut SymbolTable,
    ) -> Result<(), LayoutError> {
        let entry = table
            .procedure_mut(&procedure.name)
            .ok_or_else(|| LayoutError::ProcedureEntryMissing(procedure.name.clone()))?;
        apply_plan(procedure, &plan, entry)?;
        check_parameter_offsets(procedure, entry)?;
        entry.set_stack_layout(plan.layout);

        Ok(())
    }

    pub(in crate::compiler::memory) fn plan_frame<R: TypeSizeResolver>(
        procedure: &ProcedureDef,
        globals: &SymbolTable,
        sizes: &R,
    ) -> Result<FramePlan, LayoutError> {
        let entry = globals
            .procedure(&procedure.name)
            .ok_or_else(|| LayoutError::ProcedureEntryMissing(procedure.name.clone()))?;

        if entry.parameter_types().len() != procedure.params.len() {
            return Err(LayoutError::ParameterCountMismatch {
                procedure: procedure.name.clone(),
                declared: procedure.params.len(),
                registered: entry.parameter_types().len(),
            });
        }

        let is_leaf = calls::is_leaf_procedure(procedure);

        let (parameter_offsets, argument_area_size) =
            offsets_for_parameters(procedure, entry, sizes)?;
        let (variable_offsets, local_var_area_size) =
            offsets_for_variables(procedure, entry, sizes)?;

        let outgoing_area_size = if is_leaf {
            0
        } else {
            calls::outgoing_area_size(procedure, globals, sizes)?
        };

        let layout = StackLayout::new(
            argument_area_size,
            local_var_area_size,
            outgoing_area_size,
            is_leaf,
        )
        .ok_or_else(|| too_large(procedure, "stack frame"))?;

        Ok(FramePlan {
            parameter_offsets,
            variable_offsets,
            layout,
        })
    }

    /// Parameters sit above the base register. Each parameter's offset is the
    /// size of all parameters declared before it.
    fn offsets_for_parameters<R: TypeSizeResolver>(
        procedure: &ProcedureDef,
        entry: &ProcedureEntry,
        sizes: &R,
    ) -> Result<(Vec<i32>, i32), LayoutError> {
        let mut area: i32 = 0;
        let mut offsets = vec![];
        for param in procedure.params.iter() {
            let var = entry
                .local_table()
                .variable(&param.name)
                .ok_or_else(|| missing_variable(procedure, &param.name))?;
            let size = sizes
                .slot_size(&var.ty, var.is_reference)
                .ok_or_else(|| LayoutError::UnresolvedTypeSize {
                    procedure: procedure.name.clone(),
                    symbol: param.name.clone(),
                    ty: var.ty.clone(),
                })?;
            trace!("{}: par {} <- {}", procedure.name, param.name, area);
            offsets.push(area);
            area = area
                .checked_add(size)
                .ok_or_else(|| too_large(procedure, "argument area"))?;
        }

        Ok((offsets, area))
    }

    /// Local variables sit below the base register. The area grows by each
    /// variable's size before its offset is taken, so the first variable's
    /// lowest byte is at `-size`.
    fn offsets_for_variables<R: TypeSizeResolver>(
        procedure: &ProcedureDef,
        entry: &ProcedureEntry,
        sizes: &R,
    ) -> Result<(Vec<i32>, i32), LayoutError> {
        let mut area: i32 = 0;
        let mut offsets = vec![];
        for var_def in procedure.variables.iter() {
            let var = entry
                .local_table()
                .variable(&var_def.name)
                .ok_or_else(|| missing_variable(procedure, &var_def.name))?;
            let size = sizes
                .size_of(&var.ty)
                .ok_or_else(|| LayoutError::UnresolvedTypeSize {
                    procedure: procedure.name.clone(),
                    symbol: var_def.name.clone(),
                    ty: var.ty.clone(),
                })?;
            area = area
                .checked_add(size)
                .ok_or_else(|| too_large(procedure, "local variable area"))?;
            trace!("{}: var {} <- {}", procedure.name, var_def.name, -area);
            offsets.push(-area);
        }

        Ok((offsets, area))
    }

    pub(super) fn apply_plan(
        procedure: &ProcedureDef,
        plan: &FramePlan,
        entry: &mut ProcedureEntry,
    ) -> Result<(), LayoutError> {
        for (idx, (param, offset)) in procedure
            .params
            .iter()
            .zip(plan.parameter_offsets.iter())
            .enumerate()
        {
            entry
                .local_table_mut()
                .variable_mut(&param.name)
                .ok_or_else(|| missing_variable(procedure, &param.name))?
                .set_offset(*offset);
            entry.parameter_types_mut()[idx].set_offset(*offset);
        }

        for (var_def, offset) in procedure
            .variables
            .iter()
            .zip(plan.variable_offsets.iter())
        {
            entry
                .local_table_mut()
                .variable_mut(&var_def.name)
                .ok_or_else(|| missing_variable(procedure, &var_def.name))?
                .set_offset(*offset);
        }

        Ok(())
    }

    /// The offset of every parameter must be the same in the local table and
    /// in the procedure's signature: callers use the signature, the callee
    /// uses its local table.
    pub(in crate::compiler::memory) fn check_parameter_offsets(
        procedure: &ProcedureDef,
        entry: &ProcedureEntry,
    ) -> Result<(), LayoutError> {
        for (param, param_ty) in procedure.params.iter().zip(entry.parameter_types()) {
            let local = entry
                .local_table()
                .variable(&param.name)
                .and_then(|v| v.offset());
            if local.is_none() || local != param_ty.offset() {
                return Err(LayoutError::InconsistentParameterOffset {
                    procedure: procedure.name.clone(),
                    parameter: param.name.clone(),
                    local,
                    signature: param_ty.offset(),
                });
            }
        }

        Ok(())
    }

    fn too_large(procedure: &ProcedureDef, area: &'static str) -> LayoutError {
        LayoutError::FrameTooLarge {
            procedure: procedure.name.clone(),
            area,
        }
    }

    fn missing_variable(procedure: &ProcedureDef, symbol: &str) -> LayoutError {
        LayoutError::VariableEntryMissing {
            procedure: procedure.name.clone(),
            symbol: symbol.into(),
        }
    }
}

#[cfg(test)]
pub(super) use compute::{check_parameter_offsets, plan_frame};
