mod manifest;
mod unit;

pub use manifest::{LayoutManifest, ProcedureLayout, SlotOffset};
pub use unit::CompilationUnit;
