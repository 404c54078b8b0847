/**
 * The back end of the SPL compiler that runs after semantic analysis has
 * finished.
 *
 * By the time a program reaches this module it has been parsed, every
 * declaration has been entered into the symbol table, and every statement
 * has been type checked. The only work left before instruction selection is
 * to decide where each parameter and local variable lives in its procedure's
 * stack frame. That is what the `memory` submodule does.
 *
 * Because the input has already been validated, any failure in this module
 * means an earlier phase broke one of its guarantees.  Such failures are
 * reported as a `CompilerError` and abort the compilation; there is no
 * partial layout.
 *
 * Layout Tasks:
 * 1. Decide, per procedure, whether the frame pointer can be omitted (leaf
 * optimization).
 * 2. Assign offsets to all parameters (above the base register) and local
 * variables (below the base register).
 * 3. Compute the size of the outgoing argument area from the calls each
 * procedure makes.
 * 4. Attach a `StackLayout` to every procedure entry in the global table.
 */
pub mod arch;
pub mod ast;
pub mod error;
pub mod memory;
pub mod semantics;

pub use error::CompilerError;
