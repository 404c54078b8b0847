extern crate log;
extern crate simplelog;

use std::{path::Path, process::exit};

use log::info;
use spl_varalloc::*;

fn main() {
    let config = configure_cli().get_matches();

    match get_log_level(&config) {
        Some(level) => configure_logging(level).expect("Failed to configure logger."),
        None => (),
    }

    let input = config
        .value_of("input")
        .expect("Expected a compilation unit to lay out");
    let mut unit = match read_compilation_unit(Path::new(input)) {
        Ok(unit) => unit,
        Err(msg) => {
            print_errs(&[msg]);
            exit(ERR_READ_INPUT)
        }
    };

    if let Err(err) = allocate_vars(&unit.program, &mut unit.symbols) {
        print_errs(&[format!("{}", err)]);
        exit(ERR_LAYOUT)
    }

    let manifest = match LayoutManifest::extract(&unit.program, &unit.symbols) {
        Ok(manifest) => manifest,
        Err(msg) => {
            print_errs(&[msg]);
            exit(ERR_MANIFEST)
        }
    };

    let output = config.value_of("output").map(Path::new);
    if let Err(msg) = write_manifest(&manifest, output, get_format(&config)) {
        print_errs(&[msg]);
        exit(ERR_WRITE_OUTPUT)
    }

    info!("Laid out {} procedures", manifest.get_procedures().len());
}
