use crate::compiler::arch::{
    align_to_word, Register, SAVED_FRAME_POINTER_SIZE, SAVED_RETURN_ADDRESS_SIZE, WORD_SIZE,
};

/**
 * The shape of a single procedure's stack frame.
 *
 * ```text
 *           ...
 *   par n          <- base + offset(n)      argument area (caller's frame)
 *   par 1          <- base + 0
 *   ------------   <- base (FP, or SP if leaf optimized)
 *   var 1          <- base - size(1)        local variable area
 *   var m          <- base - sum(sizes)
 *   Old FP         <- SP + outgoing + 4     (not in leaf frames)
 *   Old Return     <- SP + outgoing         (not in leaf frames)
 *   arg k          <- SP + 4 * (k - 1)      outgoing area
 *   arg 1          <- SP + 0
 *   ------------   <- SP
 * ```
 *
 * A `StackLayout` is created by variable allocation and cannot be changed
 * afterwards.  It is only ever built by [`StackLayout::new`], which rejects
 * frames whose size does not fit in an `i32`, so every offset derived from
 * it is representable.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackLayout {
    argument_area_size: i32,
    local_var_area_size: i32,
    outgoing_area_size: i32,
    is_optimized_leaf_procedure: bool,
    frame_size: i32,
}

impl StackLayout {
    /// Returns `None` if the frame would be larger than an `i32` can
    /// address.  A leaf procedure makes no calls, so it has no outgoing area.
    pub(crate) fn new(
        argument_area_size: i32,
        local_var_area_size: i32,
        outgoing_area_size: i32,
        is_optimized_leaf_procedure: bool,
    ) -> Option<StackLayout> {
        debug_assert!(!is_optimized_leaf_procedure || outgoing_area_size == 0);
        let saved_registers_size = if is_optimized_leaf_procedure {
            0
        } else {
            SAVED_FRAME_POINTER_SIZE + SAVED_RETURN_ADDRESS_SIZE
        };
        let frame_size = align_to_word(
            local_var_area_size
                .checked_add(saved_registers_size)?
                .checked_add(outgoing_area_size)?,
        )?;

        Some(StackLayout {
            argument_area_size,
            local_var_area_size,
            outgoing_area_size,
            is_optimized_leaf_procedure,
            frame_size,
        })
    }

    /// Total bytes occupied by the procedure's incoming parameters.
    pub fn argument_area_size(&self) -> i32 {
        self.argument_area_size
    }

    /// Total bytes occupied by the procedure's local variables.
    pub fn local_var_area_size(&self) -> i32 {
        self.local_var_area_size
    }

    /// Bytes reserved for the arguments of calls made by the procedure.
    pub fn outgoing_area_size(&self) -> i32 {
        self.outgoing_area_size
    }

    pub fn is_optimized_leaf_procedure(&self) -> bool {
        self.is_optimized_leaf_procedure
    }

    /// The register that parameter and variable offsets are relative to.
    pub fn base_register(&self) -> Register {
        if self.is_optimized_leaf_procedure {
            Register::StackPointer
        } else {
            Register::FramePointer
        }
    }

    fn saved_registers_size(&self) -> i32 {
        if self.is_optimized_leaf_procedure {
            0
        } else {
            SAVED_FRAME_POINTER_SIZE + SAVED_RETURN_ADDRESS_SIZE
        }
    }

    /// Number of bytes the stack pointer is moved by on entry to the
    /// procedure.
    pub fn frame_size(&self) -> i32 {
        self.frame_size
    }

    /// Offset, relative to SP, of the slot holding the caller's frame
    /// pointer. Leaf optimized frames have no such slot.
    pub fn old_frame_pointer_offset(&self) -> Option<i32> {
        if self.is_optimized_leaf_procedure {
            None
        } else {
            Some(self.outgoing_area_size + SAVED_RETURN_ADDRESS_SIZE)
        }
    }

    /// Offset, relative to FP, of the slot holding the return address. Leaf
    /// optimized frames have no such slot.
    pub fn old_return_address_offset(&self) -> Option<i32> {
        if self.is_optimized_leaf_procedure {
            None
        } else {
            Some(-(self.local_var_area_size + self.saved_registers_size()))
        }
    }

    /// Number of words in the outgoing area.  When every parameter of the
    /// callee is a word or a reference, each word holds one argument.
    pub fn outgoing_slots(&self) -> usize {
        (self.outgoing_area_size / WORD_SIZE) as usize
    }

    /// Offset, relative to SP, of the `index`th (zero based) word of the
    /// outgoing area.
    pub fn outgoing_slot_offset(&self, index: usize) -> Option<i32> {
        if index < self.outgoing_slots() {
            Some(index as i32 * WORD_SIZE)
        } else {
            None
        }
    }
}

impl std::fmt::Display for StackLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "args: {}, locals: {}, outgoing: {}, frame: {}{}",
            self.argument_area_size,
            self.local_var_area_size,
            self.outgoing_area_size,
            self.frame_size(),
            if self.is_optimized_leaf_procedure {
                " (leaf)"
            } else {
                ""
            }
        ))
    }
}
