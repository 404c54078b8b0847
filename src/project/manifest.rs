use serde::{Deserialize, Serialize};

use crate::{
    compiler::{
        arch::Register,
        ast::{ProcedureDef, Program},
        semantics::{ProcedureEntry, SymbolTable},
    },
    result::Result,
};

/// The stack layout of every procedure in a program, in a form that can be
/// written to a file and read by later phases.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct LayoutManifest {
    procedures: Vec<ProcedureLayout>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ProcedureLayout {
    pub name: String,
    pub argument_area_size: i32,
    pub local_var_area_size: i32,
    pub outgoing_area_size: i32,
    pub frame_size: i32,
    pub leaf_optimized: bool,
    pub base_register: Register,
    pub old_frame_pointer_offset: Option<i32>,
    pub old_return_address_offset: Option<i32>,
    pub parameters: Vec<SlotOffset>,
    pub variables: Vec<SlotOffset>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SlotOffset {
    pub name: String,
    pub offset: i32,
}

impl LayoutManifest {
    /// Collects the layout of every procedure defined in `program` from the
    /// symbol table.  Variable allocation must already have run.
    pub fn extract(program: &Program, table: &SymbolTable) -> Result<LayoutManifest> {
        let procedures = program
            .procedures()
            .map(|pd| {
                let entry = table
                    .procedure(&pd.name)
                    .ok_or_else(|| format!("No procedure entry for {}", pd.name))?;
                ProcedureLayout::extract(pd, entry)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(LayoutManifest { procedures })
    }

    pub fn get_procedures(&self) -> &Vec<ProcedureLayout> {
        &self.procedures
    }

    pub fn get_procedure(&self, name: &str) -> Option<&ProcedureLayout> {
        self.procedures.iter().find(|p| p.name == name)
    }

    /// Loads a manifest written by [`LayoutManifest::write`].
    pub fn read<R: std::io::Read>(
        reader: R,
    ) -> std::result::Result<LayoutManifest, serde_yaml::Error> {
        let manifest: LayoutManifest = serde_yaml::from_reader(reader)?;
        Ok(manifest)
    }

    /// Writes the manifest as YAML
    pub fn write<W: std::io::Write>(
        &self,
        writer: W,
    ) -> std::result::Result<(), serde_yaml::Error> {
        serde_yaml::to_writer(writer, self)
    }

    /// Writes the manifest as JSON
    pub fn write_json<W: std::io::Write>(
        &self,
        writer: W,
    ) -> std::result::Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }
}

impl ProcedureLayout {
    fn extract(pd: &ProcedureDef, entry: &ProcedureEntry) -> Result<ProcedureLayout> {
        let layout = entry
            .stack_layout()
            .ok_or_else(|| format!("{} has no stack layout", pd.name))?;

        let offset_of = |name: &str| -> Result<SlotOffset> {
            let offset = entry
                .local_table()
                .variable(name)
                .and_then(|v| v.offset())
                .ok_or_else(|| format!("{} in {} has no offset", name, pd.name))?;
            Ok(SlotOffset {
                name: name.into(),
                offset,
            })
        };

        let parameters = pd
            .params
            .iter()
            .map(|p| offset_of(&p.name))
            .collect::<Result<Vec<_>>>()?;
        let variables = pd
            .variables
            .iter()
            .map(|v| offset_of(&v.name))
            .collect::<Result<Vec<_>>>()?;

        Ok(ProcedureLayout {
            name: pd.name.clone(),
            argument_area_size: layout.argument_area_size(),
            local_var_area_size: layout.local_var_area_size(),
            outgoing_area_size: layout.outgoing_area_size(),
            frame_size: layout.frame_size(),
            leaf_optimized: layout.is_optimized_leaf_procedure(),
            base_register: layout.base_register(),
            old_frame_pointer_offset: layout.old_frame_pointer_offset(),
            old_return_address_offset: layout.old_return_address_offset(),
            parameters,
            variables,
        })
    }
}
