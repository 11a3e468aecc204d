//! End-to-end tests for statement construction and truth tables.
//!
//! Covers primitive and composite statements, every connective's truth
//! table, name synthesis, table enumeration, and the error taxonomy.

use num_bigint::BigUint;

use truthtable_rs::builder::StatementBuilder;
use truthtable_rs::error::Error;
use truthtable_rs::shape::{Shape, Values};
use truthtable_rs::table::TruthTable;

fn pq_shape() -> Shape {
    Shape::pair(Shape::leaf("P"), Shape::leaf("Q"))
}

// ─── Table Enumeration ─────────────────────────────────────────────────────────

#[test]
fn enumeration_two_variables() {
    let table = TruthTable::new(["A", "B"]).unwrap();
    assert_eq!(
        table.assignments(),
        &[
            vec![true, true],
            vec![true, false],
            vec![false, true],
            vec![false, false],
        ]
    );
}

#[test]
fn enumeration_bounds() {
    for n in 1..=8 {
        let names: Vec<String> = (0..n).map(|i| format!("x{}", i)).collect();
        let table = TruthTable::new(names).unwrap();
        let rows = table.assignments();
        assert_eq!(rows.len(), 1 << n);
        assert!(rows[0].iter().all(|&v| v));
        assert!(rows[rows.len() - 1].iter().all(|&v| !v));
    }
}

// ─── Primitive Statements ──────────────────────────────────────────────────────

#[test]
fn identity_primitive() {
    let builder = StatementBuilder::new();
    let q = builder.primitive("IDENTITY", Shape::leaf("Q")).unwrap();
    assert_eq!(q.compute(&true.into()).unwrap(), true);
    assert_eq!(q.compute(&false.into()).unwrap(), false);
    assert_eq!(q.name().unwrap(), "Q");
}

#[test]
fn not_primitive() {
    let builder = StatementBuilder::new();
    let not_q = builder.primitive("NOT", Shape::leaf("Q")).unwrap();
    assert_eq!(not_q.compute(&true.into()).unwrap(), false);
    assert_eq!(not_q.compute(&false.into()).unwrap(), true);
    assert_eq!(not_q.name().unwrap(), "[NOT Q]");
}

// ─── Binary Connectives ────────────────────────────────────────────────────────

fn truth_table_of(connector: &str) -> Vec<bool> {
    let builder = StatementBuilder::new();
    let p = builder.primitive("IDENTITY", Shape::leaf("P")).unwrap();
    let q = builder.primitive("IDENTITY", Shape::leaf("Q")).unwrap();
    let merged = builder.compose(&p, connector, &q, pq_shape()).unwrap();

    [(true, true), (true, false), (false, true), (false, false)]
        .iter()
        .map(|&(a, b)| {
            merged
                .compute(&Values::pair(a.into(), b.into()))
                .unwrap()
        })
        .collect()
}

#[test]
fn and_truth_table() {
    assert_eq!(truth_table_of("AND"), vec![true, false, false, false]);
}

#[test]
fn or_truth_table() {
    assert_eq!(truth_table_of("OR"), vec![true, true, true, false]);
}

#[test]
fn xor_truth_table() {
    assert_eq!(truth_table_of("XOR"), vec![false, true, true, false]);
}

#[test]
fn implies_truth_table() {
    assert_eq!(truth_table_of("->"), vec![true, false, true, true]);
}

#[test]
fn iff_truth_table() {
    assert_eq!(truth_table_of("<->"), vec![true, false, false, true]);
}

// ─── Composite Statements ──────────────────────────────────────────────────────

#[test]
fn nested_composite_compute() {
    let builder = StatementBuilder::new();
    let not_q = builder.primitive("NOT", Shape::leaf("Q")).unwrap();
    let p_or_q = builder
        .compose("IDENTITY", "OR", "IDENTITY", pq_shape())
        .unwrap();

    // (P OR Q) AND (NOT Q)
    let conjunction = builder
        .compose(&p_or_q, "AND", &not_q, Shape::pair(pq_shape(), Shape::leaf("Q")))
        .unwrap();

    let at = |p: bool, q: bool| {
        Values::pair(Values::pair(p.into(), q.into()), q.into())
    };
    assert_eq!(conjunction.compute(&at(true, true)).unwrap(), false);
    assert_eq!(conjunction.compute(&at(true, false)).unwrap(), true);
    assert_eq!(conjunction.compute(&at(false, true)).unwrap(), false);
    assert_eq!(conjunction.compute(&at(false, false)).unwrap(), false);
}

#[test]
fn composite_name_synthesis() {
    let builder = StatementBuilder::new();
    let not_q = builder.primitive("NOT", Shape::leaf("Q")).unwrap();
    let p_or_q = builder
        .compose("IDENTITY", "OR", "IDENTITY", pq_shape())
        .unwrap();
    let conjunction = builder
        .compose(&p_or_q, "AND", &not_q, Shape::pair(pq_shape(), Shape::leaf("Q")))
        .unwrap();
    assert_eq!(conjunction.name().unwrap(), "((P OR Q) AND [NOT Q])");
}

#[test]
fn implication_tautology() {
    let builder = StatementBuilder::new();
    let not_q = builder.primitive("NOT", Shape::leaf("Q")).unwrap();
    let p_or_q = builder
        .compose("IDENTITY", "OR", "IDENTITY", pq_shape())
        .unwrap();
    let conjunction = builder
        .compose(&p_or_q, "AND", &not_q, Shape::pair(pq_shape(), Shape::leaf("Q")))
        .unwrap();

    // ((P OR Q) AND [NOT Q]) -> P holds under every assignment.
    let implication = builder
        .compose(
            &conjunction,
            "->",
            "IDENTITY",
            Shape::pair(Shape::pair(pq_shape(), Shape::leaf("Q")), Shape::leaf("P")),
        )
        .unwrap();

    let at = |p: bool, q: bool| {
        Values::pair(
            Values::pair(Values::pair(p.into(), q.into()), q.into()),
            p.into(),
        )
    };
    for p in [true, false] {
        for q in [true, false] {
            assert_eq!(implication.compute(&at(p, q)).unwrap(), true);
        }
    }

    let table = TruthTable::new(["P", "Q"]).unwrap();
    assert!(table.is_tautology(&implication).unwrap());
    assert_eq!(table.sat_count(&implication).unwrap(), BigUint::from(4u32));
}

// ─── Truth Table Columns ───────────────────────────────────────────────────────

#[test]
fn full_sample_table() {
    let builder = StatementBuilder::new();
    let mut table = TruthTable::new(["P", "Q"]).unwrap();

    let not_q = builder.primitive("NOT", Shape::leaf("Q")).unwrap();
    let p_or_q = builder
        .compose("IDENTITY", "OR", "IDENTITY", pq_shape())
        .unwrap();
    let conjunction = builder
        .compose(&p_or_q, "AND", &not_q, Shape::pair(pq_shape(), Shape::leaf("Q")))
        .unwrap();
    let implication = builder
        .compose(
            &conjunction,
            "->",
            "IDENTITY",
            Shape::pair(Shape::pair(pq_shape(), Shape::leaf("Q")), Shape::leaf("P")),
        )
        .unwrap();

    table
        .add_column(&not_q)
        .unwrap()
        .add_column(&p_or_q)
        .unwrap()
        .add_column(&conjunction)
        .unwrap()
        .add_column(&implication)
        .unwrap();

    assert_eq!(table.shape(), (4, 6));
    assert_eq!(
        table.column("(P OR Q)").unwrap(),
        vec![true, true, true, false]
    );
    assert_eq!(
        table.column("((P OR Q) AND [NOT Q])").unwrap(),
        vec![false, true, false, false]
    );
    assert_eq!(
        table.column("(((P OR Q) AND [NOT Q]) -> P)").unwrap(),
        vec![true, true, true, true]
    );
}

#[test]
fn five_variable_table_shape() {
    let builder = StatementBuilder::new();
    let mut table = TruthTable::new(["P", "Q", "R", "S", "T"]).unwrap();

    // P OR S
    let statement = builder
        .compose(
            "IDENTITY",
            "OR",
            "IDENTITY",
            Shape::pair(Shape::leaf("P"), Shape::leaf("S")),
        )
        .unwrap();
    table.add_column(&statement).unwrap();

    assert_eq!(table.shape(), (32, 6));
}

#[test]
fn same_name_overwrites() {
    let builder = StatementBuilder::new();
    let mut table = TruthTable::new(["P", "Q"]).unwrap();
    let not_q = builder.primitive("NOT", Shape::leaf("Q")).unwrap();

    table.add_column(&not_q).unwrap().add_column(&not_q).unwrap();
    assert_eq!(table.shape(), (4, 3));
}

// ─── Error Taxonomy ────────────────────────────────────────────────────────────

#[test]
fn unknown_operation() {
    let builder = StatementBuilder::new();
    let err = builder.primitive("NAND", Shape::leaf("P")).unwrap_err();
    assert_eq!(err, Error::UnknownOperation("NAND".to_string()));
}

#[test]
fn invalid_primitive_arguments() {
    let builder = StatementBuilder::new();
    let p = builder.primitive("IDENTITY", Shape::leaf("P")).unwrap();
    let err = builder.build(&p, None, None, Shape::leaf("P")).unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));
}

#[test]
fn compute_shape_mismatch() {
    let builder = StatementBuilder::new();
    let p_and_q = builder
        .compose("IDENTITY", "AND", "IDENTITY", pq_shape())
        .unwrap();
    let err = p_and_q.compute(&Values::leaf(true)).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn composite_rebind_rejected() {
    let builder = StatementBuilder::new();
    let mut p_and_q = builder
        .compose("IDENTITY", "AND", "IDENTITY", pq_shape())
        .unwrap();
    let err = p_and_q.bind_shape(Shape::leaf("P")).unwrap_err();
    assert!(matches!(err, Error::InvalidState(_)));
}

#[test]
fn duplicate_variable() {
    let err = TruthTable::new(["P", "P"]).unwrap_err();
    assert_eq!(err, Error::DuplicateVariable("P".to_string()));
}

#[test]
fn unknown_variable() {
    let builder = StatementBuilder::new();
    let mut table = TruthTable::new(["P", "Q"]).unwrap();
    let not_r = builder.primitive("NOT", Shape::leaf("R")).unwrap();
    let err = table.add_column(&not_r).unwrap_err();
    assert_eq!(err, Error::UnknownVariable("R".to_string()));
}
