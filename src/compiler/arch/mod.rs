/**
 * Arch contains abstractions for general architectural concepts such as
 * registers or the stack and stack frame.  This is part of the architecture
 * independent inteface between the compiler and the actual generation of
 * assembly code.
 */
pub mod registers;

pub use registers::Register;

/// Size of a machine word in bytes. Every stack slot is a multiple of this.
pub const WORD_SIZE: i32 = 4;

/// A reference parameter is passed as an address, which occupies one word.
pub const REFERENCE_SIZE: i32 = WORD_SIZE;

/// Slot in a non-leaf frame where the caller's frame pointer is saved.
pub const SAVED_FRAME_POINTER_SIZE: i32 = WORD_SIZE;

/// Slot in a non-leaf frame where the return address is saved.
pub const SAVED_RETURN_ADDRESS_SIZE: i32 = WORD_SIZE;

/// Rounds `nbytes` up to the next multiple of [`WORD_SIZE`].  Returns `None`
/// if the result does not fit in an `i32`.
pub fn align_to_word(nbytes: i32) -> Option<i32> {
    Some(nbytes.checked_add(WORD_SIZE - 1)? / WORD_SIZE * WORD_SIZE)
}
