//! Scenario tests for variable allocation.  The symbol tables are built here
//! the way the front end's table builder would build them.

mod allocation;

use crate::compiler::{
    ast::{
        GlobalDefinition, ParameterDef, ProcedureDef, Program, Statement, TypeDef,
        TypeExpression, VariableDef,
    },
    semantics::{Entry, ParameterType, ProcedureEntry, SymbolTable, Type, TypeEntry, VariableEntry},
};

fn resolve(ty: &TypeExpression) -> Type {
    match ty {
        TypeExpression::Named(name) if name == "int" => Type::Int,
        TypeExpression::Named(name) if name == "boolean" => Type::Bool,
        TypeExpression::Named(name) => Type::Named(name.clone()),
        TypeExpression::Array { size, base } => Type::array(*size, resolve(base)),
    }
}

pub(super) fn build_table(program: &Program) -> SymbolTable {
    let mut globals = SymbolTable::with_predefined();
    for def in program.definitions.iter() {
        if let GlobalDefinition::Type(td) = def {
            globals
                .enter(&td.name, Entry::Type(TypeEntry::new(resolve(&td.ty))))
                .unwrap();
        }
    }

    for pd in program.procedures() {
        let mut local = SymbolTable::new();
        let mut parameter_types = vec![];
        for p in pd.params.iter() {
            let ty = resolve(&p.ty);
            parameter_types.push(ParameterType::new(ty.clone(), p.is_reference));
            local
                .enter(&p.name, Entry::Variable(VariableEntry::new(ty, p.is_reference)))
                .unwrap();
        }
        for v in pd.variables.iter() {
            local
                .enter(&v.name, Entry::Variable(VariableEntry::new(resolve(&v.ty), false)))
                .unwrap();
        }
        globals
            .enter(
                &pd.name,
                Entry::Procedure(ProcedureEntry::new(local, parameter_types)),
            )
            .unwrap();
    }

    globals
}

pub(super) fn int() -> TypeExpression {
    TypeExpression::named("int")
}

pub(super) fn param(name: &str, ty: TypeExpression) -> ParameterDef {
    ParameterDef::new(1, name, ty, false)
}

pub(super) fn ref_param(name: &str, ty: TypeExpression) -> ParameterDef {
    ParameterDef::new(1, name, ty, true)
}

pub(super) fn var(name: &str, ty: TypeExpression) -> VariableDef {
    VariableDef::new(2, name, ty)
}

pub(super) fn proc_def(
    line: u32,
    name: &str,
    params: Vec<ParameterDef>,
    variables: Vec<VariableDef>,
    body: Vec<Statement>,
) -> GlobalDefinition {
    GlobalDefinition::Procedure(ProcedureDef::new(line, name, params, variables, body))
}

pub(super) fn type_def(name: &str, ty: TypeExpression) -> GlobalDefinition {
    GlobalDefinition::Type(TypeDef::new(1, name, ty))
}

pub(super) fn param_offsets(table: &SymbolTable, procedure: &str, names: &[&str]) -> Vec<i32> {
    let entry = table.procedure(procedure).unwrap();
    names
        .iter()
        .map(|n| entry.local_table().variable(n).unwrap().offset().unwrap())
        .collect()
}
