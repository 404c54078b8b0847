use std::{fs::File, path::Path};

use crate::{project::CompilationUnit, project::LayoutManifest, result::Result};

/// The serialization formats understood for compilation units and layout
/// manifests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file's extension: `.json` is JSON, anything
    /// else is treated as YAML.
    pub fn from_path(path: &Path) -> Format {
        match path.extension() {
            Some(ex) if ex.to_ascii_lowercase() == "json" => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn from_name(name: &str) -> Option<Format> {
        match name {
            "yaml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Reads a serialized compilation unit (program and populated symbol table)
/// from `path`.
pub fn read_compilation_unit(path: &Path) -> Result<CompilationUnit> {
    let file = File::open(path).map_err(|e| format!("Could not open {:?}: {}", path, e))?;
    match Format::from_path(path) {
        Format::Json => CompilationUnit::from_json(file).map_err(|e| format!("{}", e)),
        Format::Yaml => CompilationUnit::from_yaml(file).map_err(|e| format!("{}", e)),
    }
}

/// Writes `manifest` to the file at `output`, or to stdout if no output is
/// given.
pub fn write_manifest(
    manifest: &LayoutManifest,
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).map_err(|e| format!("Could not create {:?}: {}", path, e))?;
            write_to(manifest, file, format)
        }
        None => write_to(manifest, std::io::stdout(), format),
    }
}

fn write_to<W: std::io::Write>(
    manifest: &LayoutManifest,
    writer: W,
    format: Format,
) -> Result<()> {
    match format {
        Format::Yaml => manifest.write(writer).map_err(|e| format!("{}", e)),
        Format::Json => manifest.write_json(writer).map_err(|e| format!("{}", e)),
    }
}
