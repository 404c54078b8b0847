use serde::{Deserialize, Serialize};

/**
 * The registers which a stack frame can be addressed from.  Parameters and
 * local variables are addressed relative to the frame pointer, unless the
 * procedure is leaf optimized, in which case no frame pointer is set up and
 * the stack pointer is used directly.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Register {
    FramePointer,
    StackPointer,
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            Register::FramePointer => f.write_str("FP"),
            Register::StackPointer => f.write_str("SP"),
        }
    }
}
