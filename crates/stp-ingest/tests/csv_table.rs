use std::fs;

use stp_ingest::{IngestError, read_csv_reader, read_csv_table};

#[test]
fn reads_headers_and_missing_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("export.csv");
    fs::write(
        &path,
        " Owner 1 First Name ,Owner 1 Last Name,Mail City\nJane,Doe,\n,Smith,Springfield\n",
    )
    .expect("write file");

    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(
        table.headers(),
        ["Owner 1 First Name", "Owner 1 Last Name", "Mail City"]
    );
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 0), Some("Jane"));
    assert_eq!(table.cell(0, 2), None);
    assert_eq!(table.cell(1, 0), None);
    assert_eq!(table.cell(1, 2), Some("Springfield"));
}

#[test]
fn keeps_quoted_commas_inside_cells() {
    let csv = "NAME,ADDRESS\n\"DOE, JANE\",\"1 MAIN ST, APT 2\"\n";
    let table = read_csv_reader(csv.as_bytes(), "inline").expect("read csv");
    assert_eq!(table.cell(0, 0), Some("DOE, JANE"));
    assert_eq!(table.cell(0, 1), Some("1 MAIN ST, APT 2"));
}

#[test]
fn skips_blank_rows_and_pads_short_rows() {
    let csv = "A,B,C\n1,2,3\n,,\n\n4\n";
    let table = read_csv_reader(csv.as_bytes(), "inline").expect("read csv");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(1, 0), Some("4"));
    assert_eq!(table.cell(1, 1), None);
}

#[test]
fn null_markers_read_as_missing() {
    let csv = "UNIT,CITY,STATE\nN/A,Springfield,IL\nNULL,nan,<NA>\nAPT 4,None,NA\n";
    let table = read_csv_reader(csv.as_bytes(), "inline").expect("read csv");
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.cell(0, 0), None);
    assert_eq!(table.cell(0, 1), Some("Springfield"));
    assert_eq!(table.cell(1, 0), None);
    assert_eq!(table.cell(1, 1), None);
    assert_eq!(table.cell(1, 2), None);
    assert_eq!(table.cell(2, 0), Some("APT 4"));
    assert_eq!(table.cell(2, 1), None);
    assert_eq!(table.cell(2, 2), None);
}

#[test]
fn header_only_file_has_no_rows() {
    let table = read_csv_reader("FIRST NAME,LAST NAME\n".as_bytes(), "inline").expect("read csv");
    assert!(table.is_empty());
    assert_eq!(table.headers().len(), 2);
}

#[test]
fn empty_input_is_an_error() {
    let err = read_csv_reader("".as_bytes(), "empty.csv").unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
    assert_eq!(err.to_string(), "CSV is empty: empty.csv");
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let bytes: &[u8] = b"NAME\n\xff\xfe\xfd\n";
    let err = read_csv_reader(bytes, "latin1.csv").unwrap_err();
    assert!(matches!(err, IngestError::CsvParse { .. }));
}
