use std::path::PathBuf;

use super::*;

fn scratch(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_table");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_headerless_rows_and_ignores_extra_columns() {
    let path = scratch("extra_cols.csv", "0,0,1.5,9\n1.0, 0 ,2.5,9\n0,1,-3e-2,9\n");
    let table = read_table(&path).unwrap();
    assert_eq!(table.rows(), 3);
    assert_eq!(table.columns(), 4);
    assert_eq!(table.row(1), &[1.0, 0.0, 2.5, 9.0]);

    let v = VertexTable::from(&table);
    assert_eq!(v.len(), 3);
    assert_eq!(v.points[1], Point::new(1.0, 0.0));
    assert_eq!(v.values, vec![1.5, 2.5, -0.03]);
}

#[test]
fn missing_file_is_a_missing_resource() {
    let err = read_table(std::path::Path::new("target/unit_table/nope.csv")).unwrap_err();
    assert!(matches!(err, FieldError::MissingResource(_)), "{err}");
}

#[test]
fn short_rows_are_rejected() {
    let path = scratch("two_cols.csv", "0,0\n1,1\n");
    let err = read_table(&path).unwrap_err();
    assert!(matches!(err, FieldError::DataFormat(_)), "{err}");
    assert!(err.to_string().contains("need at least 3"));
}

#[test]
fn ragged_and_non_numeric_rows_are_rejected() {
    let ragged = scratch("ragged.csv", "0,0,1\n1,1\n");
    assert!(matches!(
        read_table(&ragged).unwrap_err(),
        FieldError::DataFormat(_)
    ));

    let header = scratch("header.csv", "x,y,u\n0,0,1\n");
    let err = read_table(&header).unwrap_err();
    assert!(err.to_string().contains("not a number"), "{err}");
}

#[test]
fn empty_file_is_rejected() {
    let path = scratch("empty.csv", "");
    assert!(matches!(
        read_table(&path).unwrap_err(),
        FieldError::DataFormat(_)
    ));
}

#[test]
fn connectivity_accepts_integer_castable_values() {
    let path = scratch("conn.csv", "0,1,2\n2.0,3,0\n");
    let conn = read_connectivity(&path).unwrap();
    assert_eq!(conn.triangles, vec![[0, 1, 2], [2, 3, 0]]);
    assert_eq!(conn.len(), 2);
}

#[test]
fn connectivity_rejects_negative_or_fractional_indices() {
    let neg = scratch("conn_neg.csv", "0,-1,2\n");
    assert!(matches!(
        read_connectivity(&neg).unwrap_err(),
        FieldError::DataFormat(_)
    ));

    let frac = scratch("conn_frac.csv", "0,1.5,2\n");
    assert!(matches!(
        read_connectivity(&frac).unwrap_err(),
        FieldError::DataFormat(_)
    ));
}
