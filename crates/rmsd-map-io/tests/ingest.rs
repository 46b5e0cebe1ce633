//! File-level ingestion tests: write real files, read them back, and run
//! the loaded embedding through the core path-ordering flow.

use std::fs;

use tempfile::TempDir;

use rmsd_map_core::Polyline;
use rmsd_map_io::{read_cor_file, read_embedding_csv, EmbeddingColumns, IoError};

#[test]
fn cor_file_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hexanes.cor");
    fs::write(
        &path,
        "\
* generated conformers
*
    2
    1    1 HEXA C1     0.000   0.000   0.000 HEXA 1  0.00000
    2    1 HEXA C2     1.530   0.000   0.000 HEXA 1  0.00000
    2
    1    1 HEXA C1     0.000   0.100   0.000 HEXA 1  0.00000
    2    1 HEXA C2     1.530   0.100   0.000 HEXA 1  0.00000
",
    )
    .unwrap();

    let fragments = read_cor_file(&path).unwrap();
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].atoms, vec!["C1", "C2"]);
    assert_eq!(fragments[1].coords[0], [0.0, 0.1, 0.0]);
}

#[test]
fn embedding_csv_to_ordered_walk() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("umaps.csv");
    fs::write(
        &path,
        "\
N,X,Y
20,9.0,9.0
40,3.0,0.0
40,7.0,0.0
40,1.0,0.0
40,5.0,2.0
",
    )
    .unwrap();

    let table = read_embedding_csv(&path, &EmbeddingColumns::default()).unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table.neighbor_counts(), vec![20, 40]);

    let cloud = table.with_neighbors(40).cloud().unwrap();
    assert_eq!(cloud.len(), 4);

    let path_line = Polyline::new(vec![[0.0, 0.0], [10.0, 0.0]]).unwrap();
    let order = cloud.order_along(&path_line, Some(1.0)).unwrap();
    // (5, 2) is too far from the line; the rest walk left to right.
    assert_eq!(order, vec![2, 0, 1]);
}

#[test]
fn missing_column_is_reported_by_name() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.csv");
    fs::write(&path, "X,Z\n1.0,2.0\n").unwrap();

    let err = read_embedding_csv(&path, &EmbeddingColumns::coordinates_only()).unwrap_err();
    match err {
        IoError::MissingColumn { column, .. } => assert_eq!(column, "Y"),
        other => panic!("expected MissingColumn, got {other}"),
    }
}

#[test]
fn unparseable_field_is_reported_with_row() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.csv");
    fs::write(&path, "X,Y\n1.0,2.0\n1.0,oops\n").unwrap();

    let err = read_embedding_csv(&path, &EmbeddingColumns::coordinates_only()).unwrap_err();
    match err {
        IoError::MalformedRow { row, message, .. } => {
            assert_eq!(row, 2);
            assert!(message.contains("oops"), "{message}");
        }
        other => panic!("expected MalformedRow, got {other}"),
    }
}
