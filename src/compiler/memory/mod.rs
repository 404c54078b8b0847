/**
 * Variable allocation: decides where every parameter and local variable of
 * a procedure lives in its stack frame.
 *
 * The following tasks are performed by this submodule
 * 1. Decide if a procedure is a leaf (makes no calls), in which case its
 * frame is addressed from the stack pointer and the saved frame pointer and
 * return address slots are omitted.
 * 2. Assign every parameter a non-negative offset in the argument area, in
 * declaration order, growing away from the base register.
 * 3. Assign every local variable a negative offset in the local variable
 * area, in declaration order, growing away from the base register.
 * 4. Compute the size of the outgoing argument area from the largest call
 * the procedure makes.
 * 5. Attach the resulting [`StackLayout`] to the procedure's entry in the
 * global symbol table.
 */
mod calls;
mod error;
mod layout;
mod stack_frame;

#[cfg(test)]
mod tests;

pub use calls::{is_leaf_procedure, outgoing_area_size};
pub use error::LayoutError;
pub use layout::allocate_vars;
pub use stack_frame::StackLayout;
