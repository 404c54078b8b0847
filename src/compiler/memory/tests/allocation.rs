use super::*;
use crate::compiler::{
    arch::Register,
    ast::Expression,
    memory::{allocate_vars, layout::plan_frame},
    semantics::TypeSizeResolver,
};

fn allocate(program: &Program) -> SymbolTable {
    let mut table = build_table(program);
    allocate_vars(program, &mut table).unwrap();
    table
}

#[test]
fn test_two_parameters_and_one_local() {
    // proc p(a: int, b: int) { var x: int; printi(a); }
    let program = Program::new(vec![proc_def(
        1,
        "p",
        vec![param("a", int()), param("b", int())],
        vec![var("x", int())],
        vec![Statement::call(3, "printi", vec![Expression::var("a")])],
    )]);
    let table = allocate(&program);

    assert_eq!(param_offsets(&table, "p", &["a", "b"]), vec![0, 4]);
    assert_eq!(param_offsets(&table, "p", &["x"]), vec![-4]);

    let layout = table.procedure("p").unwrap().stack_layout().unwrap();
    assert_eq!(layout.argument_area_size(), 8);
    assert_eq!(layout.local_var_area_size(), 4);
    assert_eq!(layout.outgoing_area_size(), 4);
    assert!(!layout.is_optimized_leaf_procedure());
    assert_eq!(layout.frame_size(), 4 + 8 + 4);
    assert_eq!(layout.base_register(), Register::FramePointer);
}

#[test]
fn test_leaf_procedure() {
    // proc leaf(n: int) { }
    let program = Program::new(vec![proc_def(
        1,
        "leaf",
        vec![param("n", int())],
        vec![],
        vec![],
    )]);
    let table = allocate(&program);

    let layout = table.procedure("leaf").unwrap().stack_layout().unwrap();
    assert!(layout.is_optimized_leaf_procedure());
    assert_eq!(layout.outgoing_area_size(), 0);
    assert_eq!(layout.frame_size(), 0);
    assert_eq!(layout.argument_area_size(), 4);
    assert_eq!(layout.base_register(), Register::StackPointer);
    assert_eq!(param_offsets(&table, "leaf", &["n"]), vec![0]);
}

#[test]
fn test_call_with_two_word_arguments() {
    // proc callee(a: int, b: int) {}
    // proc caller() { callee(1, 2); }
    let program = Program::new(vec![
        proc_def(1, "callee", vec![param("a", int()), param("b", int())], vec![], vec![]),
        proc_def(
            2,
            "caller",
            vec![],
            vec![],
            vec![Statement::call(
                3,
                "callee",
                vec![Expression::int(1), Expression::int(2)],
            )],
        ),
    ]);
    let table = allocate(&program);

    let layout = table.procedure("caller").unwrap().stack_layout().unwrap();
    assert!(!layout.is_optimized_leaf_procedure());
    assert_eq!(layout.outgoing_area_size(), 8);
    assert_eq!(layout.frame_size(), 16);
    assert_eq!(layout.old_frame_pointer_offset(), Some(12));
    assert_eq!(layout.old_return_address_offset(), Some(-8));
}

#[test]
fn test_procedure_may_call_procedure_defined_later() {
    let program = Program::new(vec![
        proc_def(
            1,
            "first",
            vec![],
            vec![],
            vec![Statement::call(2, "second", vec![Expression::int(1)])],
        ),
        proc_def(3, "second", vec![param("x", int())], vec![], vec![]),
    ]);
    let table = allocate(&program);

    let layout = table.procedure("first").unwrap().stack_layout().unwrap();
    assert_eq!(layout.outgoing_area_size(), 4);
}

#[test]
fn test_recursive_procedure_is_not_leaf() {
    // proc fac(n: int, ref r: int) { var t: int; if (n > 0) fac(n - 1, t); }
    let program = Program::new(vec![proc_def(
        1,
        "fac",
        vec![param("n", int()), ref_param("r", int())],
        vec![var("t", int())],
        vec![Statement::If {
            cond: Expression::var("n"),
            then_part: Box::new(Statement::call(
                4,
                "fac",
                vec![Expression::var("n"), Expression::var("t")],
            )),
            else_part: Box::new(Statement::Empty),
        }],
    )]);
    let table = allocate(&program);

    let layout = table.procedure("fac").unwrap().stack_layout().unwrap();
    assert!(!layout.is_optimized_leaf_procedure());
    assert_eq!(layout.outgoing_area_size(), 8);
}

#[test]
fn test_arrays_and_reference_parameters() {
    // type vector = array [10] of int;
    // proc p(ref v: vector, n: int, ref m: array [3] of vector) {
    //     var a: vector; var i: int; var b: array [2] of int;
    // }
    let vector = TypeExpression::named("vector");
    let program = Program::new(vec![
        type_def("vector", TypeExpression::array(10, int())),
        proc_def(
            2,
            "p",
            vec![
                ref_param("v", vector.clone()),
                param("n", int()),
                ref_param("m", TypeExpression::array(3, vector.clone())),
            ],
            vec![
                var("a", vector),
                var("i", int()),
                var("b", TypeExpression::array(2, int())),
            ],
            vec![],
        ),
    ]);
    let table = allocate(&program);

    assert_eq!(param_offsets(&table, "p", &["v", "n", "m"]), vec![0, 4, 8]);
    assert_eq!(param_offsets(&table, "p", &["a", "i", "b"]), vec![-40, -44, -52]);

    let layout = table.procedure("p").unwrap().stack_layout().unwrap();
    assert_eq!(layout.argument_area_size(), 12);
    assert_eq!(layout.local_var_area_size(), 52);
    assert_eq!(layout.frame_size(), 52);
}

#[test]
fn test_value_array_parameter_uses_its_size() {
    let program = Program::new(vec![proc_def(
        1,
        "p",
        vec![param("v", TypeExpression::array(4, int())), param("n", int())],
        vec![],
        vec![],
    )]);
    let table = allocate(&program);

    assert_eq!(param_offsets(&table, "p", &["v", "n"]), vec![0, 16]);
    let layout = table.procedure("p").unwrap().stack_layout().unwrap();
    assert_eq!(layout.argument_area_size(), 20);
}

#[test]
fn test_outgoing_area_covers_callee_argument_area() {
    // proc callee(v: array [4] of int, n: int) {}
    // proc caller() { var w: array [4] of int; callee(w, 1); }
    let vector = TypeExpression::array(4, int());
    let program = Program::new(vec![
        proc_def(
            1,
            "callee",
            vec![param("v", vector.clone()), param("n", int())],
            vec![],
            vec![],
        ),
        proc_def(
            2,
            "caller",
            vec![],
            vec![var("w", vector)],
            vec![Statement::call(
                3,
                "callee",
                vec![Expression::var("w"), Expression::int(1)],
            )],
        ),
    ]);
    let table = allocate(&program);

    let callee = table.procedure("callee").unwrap().stack_layout().unwrap();
    let caller = table.procedure("caller").unwrap().stack_layout().unwrap();
    assert_eq!(callee.argument_area_size(), 20);
    assert_eq!(caller.outgoing_area_size(), callee.argument_area_size());
    assert_eq!(caller.frame_size(), 16 + 8 + 20);
}

#[test]
fn test_signature_offsets_match_local_offsets() {
    let program = Program::new(vec![proc_def(
        1,
        "p",
        vec![
            param("a", int()),
            ref_param("b", TypeExpression::array(5, int())),
            param("c", TypeExpression::array(2, int())),
            param("d", int()),
        ],
        vec![var("x", int())],
        vec![Statement::call(2, "p", vec![])],
    )]);
    let table = allocate(&program);
    let entry = table.procedure("p").unwrap();

    let local = param_offsets(&table, "p", &["a", "b", "c", "d"]);
    let signature: Vec<_> = entry
        .parameter_types()
        .iter()
        .map(|pt| pt.offset().unwrap())
        .collect();
    assert_eq!(local, signature);
    assert_eq!(local, vec![0, 4, 8, 16]);
}

#[test]
fn test_offsets_follow_cumulative_sizes() {
    let types = vec![
        int(),
        TypeExpression::array(3, int()),
        int(),
        TypeExpression::array(7, TypeExpression::array(2, int())),
        int(),
    ];
    let names = vec!["v0", "v1", "v2", "v3", "v4"];
    let params = names
        .iter()
        .zip(types.iter())
        .map(|(n, t)| param(&format!("p{}", n), t.clone()))
        .collect();
    let vars = names
        .iter()
        .zip(types.iter())
        .map(|(n, t)| var(n, t.clone()))
        .collect();
    let program = Program::new(vec![proc_def(1, "p", params, vars, vec![])]);
    let table = allocate(&program);

    let sizes = vec![4, 12, 4, 56, 4];
    let mut expected_params = vec![];
    let mut expected_vars = vec![];
    let mut sum = 0;
    for size in sizes.iter() {
        expected_params.push(sum);
        sum += size;
        expected_vars.push(-sum);
    }

    let param_names: Vec<_> = names.iter().map(|n| format!("p{}", n)).collect();
    let param_names: Vec<&str> = param_names.iter().map(|n| n.as_str()).collect();
    assert_eq!(param_offsets(&table, "p", &param_names), expected_params);
    assert_eq!(param_offsets(&table, "p", &names), expected_vars);

    let layout = table.procedure("p").unwrap().stack_layout().unwrap();
    assert_eq!(layout.argument_area_size(), sum);
    assert_eq!(layout.local_var_area_size(), sum);

    // No two variables share a slot
    let mut all = expected_params.clone();
    all.extend(expected_vars.iter());
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 10);
}

#[test]
fn test_frame_size_formula() {
    let program = Program::new(vec![
        proc_def(1, "leaf", vec![], vec![var("x", int()), var("y", int())], vec![]),
        proc_def(
            2,
            "caller",
            vec![],
            vec![var("x", int())],
            vec![Statement::call(
                3,
                "drawLine",
                vec![
                    Expression::int(0),
                    Expression::int(0),
                    Expression::int(1),
                    Expression::int(1),
                    Expression::int(0),
                ],
            )],
        ),
    ]);
    let table = allocate(&program);

    for name in &["leaf", "caller"] {
        let layout = table.procedure(name).unwrap().stack_layout().unwrap();
        let saved = if layout.is_optimized_leaf_procedure() { 0 } else { 8 };
        assert_eq!(
            layout.frame_size(),
            layout.local_var_area_size() + saved + layout.outgoing_area_size()
        );
        assert_eq!(layout.frame_size() % 4, 0);
    }

    let caller = table.procedure("caller").unwrap().stack_layout().unwrap();
    assert_eq!(caller.outgoing_area_size(), 20);
    assert_eq!(caller.frame_size(), 32);
}

#[test]
fn test_type_definitions_are_skipped() {
    let program = Program::new(vec![
        type_def("vector", TypeExpression::array(10, int())),
        proc_def(2, "main", vec![], vec![], vec![]),
    ]);
    let table = allocate(&program);

    assert!(table.procedure("main").unwrap().stack_layout().is_some());
    assert!(table.procedure("printi").unwrap().stack_layout().is_none());
}

#[test]
fn test_plan_with_custom_size_resolver() {
    struct DoubleWords;

    impl TypeSizeResolver for DoubleWords {
        fn size_of(&self, _ty: &Type) -> Option<i32> {
            Some(8)
        }
    }

    let program = Program::new(vec![proc_def(
        1,
        "p",
        vec![param("a", int()), ref_param("b", int())],
        vec![var("x", int()), var("y", int())],
        vec![],
    )]);
    let table = build_table(&program);
    let pd = program.procedures().next().unwrap();

    let plan = plan_frame(pd, &table, &DoubleWords).unwrap();
    assert_eq!(plan.parameter_offsets, vec![0, 8]);
    assert_eq!(plan.variable_offsets, vec![-8, -16]);
    assert_eq!(plan.layout.argument_area_size(), 12);

    // Planning does not write anything into the table
    assert_eq!(param_offsets_unset(&table, "p"), true);
}

fn param_offsets_unset(table: &SymbolTable, procedure: &str) -> bool {
    let entry = table.procedure(procedure).unwrap();
    entry.stack_layout().is_none()
        && entry.parameter_types().iter().all(|pt| pt.offset().is_none())
        && entry
            .local_table()
            .iter()
            .all(|(_, e)| e.as_variable().unwrap().offset().is_none())
}
