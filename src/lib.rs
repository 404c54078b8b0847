pub mod result;

pub mod cli;
pub mod compiler;
pub mod io;
pub mod project;

pub use cli::*;
pub use compiler::memory::{allocate_vars, LayoutError, StackLayout};
pub use io::{read_compilation_unit, write_manifest, Format};
pub use project::{CompilationUnit, LayoutManifest};
