//! End-to-end cleaning of CSV files on disk.

use std::fs;
use std::path::Path;

use stp_cli::pipeline::{clean_file, default_output_path, output_path, write_output};
use stp_cli::settings::{Settings, load_settings, parse_settings};
use stp_cli::summary::{mapping_table, preview_table};
use stp_model::Role;
use stp_transform::TransformError;
use tempfile::tempdir;

const COUNTY_CSV: &str = "\
Parcel ID,Owner 1 First Name,Owner 1 Last Name,Mail House Number,Mail Street Name,Mail Street Name Suffix,Mail Unit Number,Mail City,Mail State,Mail Zip/Zip+4
0001,JANE,DOE,123,MAIN,ST,APT 4,Springfield,IL,62704
0002,,SMITH ,77,OAK,,,Dover,DE,19901
";

const EXPECTED_OUTPUT: &str = "\
OWNER NAME,MAILING ADDRESS
JANE DOE,\"123 MAIN ST APT 4, Springfield, IL 62704\"
SMITH,\"77 OAK, Dover, DE 19901\"
";

fn write_input(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write input");
    path
}

#[test]
fn cleans_a_county_export() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(dir.path(), "county.csv", COUNTY_CSV);
    let resolver = Settings::default().resolver.build_resolver().expect("resolver");

    let cleaned = clean_file(&input, &resolver).expect("clean");
    assert_eq!(cleaned.input_rows, 2);
    assert_eq!(cleaned.input_columns, 10);
    assert!(cleaned.mapping.is_complete());

    let path = output_path(&input, None).expect("output path");
    assert_eq!(path, default_output_path(&input));
    write_output(&cleaned.output, &path).expect("write");

    let written = fs::read_to_string(&path).expect("read output");
    assert_eq!(written, EXPECTED_OUTPUT);
}

#[test]
fn cleaning_twice_gives_identical_files() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(dir.path(), "county.csv", COUNTY_CSV);
    let resolver = Settings::default().resolver.build_resolver().expect("resolver");

    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    write_output(&clean_file(&input, &resolver).expect("clean").output, &first).expect("write");
    write_output(&clean_file(&input, &resolver).expect("clean").output, &second).expect("write");

    assert_eq!(fs::read(first).expect("read"), fs::read(second).expect("read"));
}

#[test]
fn missing_state_halts_before_output() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(
        dir.path(),
        "no_state.csv",
        "FIRST NAME,LAST NAME,HOUSE NUMBER,STREET NAME,CITY,ZIP\nJANE,DOE,1,MAIN,X,90001\n",
    );
    let resolver = Settings::default().resolver.build_resolver().expect("resolver");

    let err = clean_file(&input, &resolver).unwrap_err();
    match err.downcast_ref::<TransformError>() {
        Some(TransformError::MissingRequiredFields { missing }) => {
            assert_eq!(missing, &vec![Role::State]);
        }
        other => panic!("expected missing required fields, got {other:?}"),
    }
    assert!(format!("{err:#}").contains("missing required fields: state"));
    assert!(!default_output_path(&input).exists());
}

#[test]
fn null_markers_drop_out_of_the_address() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(
        dir.path(),
        "nulls.csv",
        "Owner 1 First Name,Owner 1 Last Name,Mail House Number,Mail Street Name,\
         Mail Street Name Suffix,Mail Unit Number,Mail City,Mail State,Mail Zip/Zip+4\n\
         JANE,N/A,123,MAIN,ST,N/A,Springfield,IL,62704\n\
         NULL,SMITH,9,OAK,AVE,APT 2,Dover,DE,#N/A\n",
    );
    let resolver = Settings::default().resolver.build_resolver().expect("resolver");

    let cleaned = clean_file(&input, &resolver).expect("clean");
    assert_eq!(cleaned.mapping.column(Role::Unit), Some("MAIL UNIT NUMBER"));
    let records = cleaned.output.records();
    assert_eq!(records[0].owner_name, "JANE");
    assert_eq!(
        records[0].mailing_address,
        "123 MAIN ST, Springfield, IL 62704"
    );
    assert_eq!(records[1].owner_name, "SMITH");
    assert_eq!(records[1].mailing_address, "9 OAK AVE APT 2, Dover, DE");
}

#[test]
fn explicit_settings_file_overrides_synonyms() {
    let dir = tempdir().expect("tempdir");
    let config = write_input(
        dir.path(),
        "settings.toml",
        "[apify]\nactor_id = \"me~tracer\"\ntimeout_secs = 120\n\n[resolver.synonyms]\nSTREET_SUFFIX = [\"SUFFIX\"]\nUNIT = [\"SUITE NO\"]\n",
    );
    let input = write_input(
        dir.path(),
        "suites.csv",
        "FIRST NAME,LAST NAME,HOUSE NUMBER,STREET NAME,SUITE NO,CITY,STATE,ZIP\nJANE,DOE,1,MAIN,200,Austin,TX,78701\n",
    );

    let settings = parse_settings(&fs::read_to_string(&config).expect("read settings"))
        .expect("settings")
        .with_overrides_from(|_| None);
    assert_eq!(settings.apify.actor_id.as_deref(), Some("me~tracer"));
    assert_eq!(settings.apify.timeout_secs, 120);
    assert_eq!(settings.apify.build, "latest");
    // Environment overrides only touch credentials.
    let loaded = load_settings(Some(&config)).expect("load settings");
    assert_eq!(loaded.apify.timeout_secs, 120);
    assert_eq!(loaded.resolver, settings.resolver);

    let resolver = settings.resolver.build_resolver().expect("resolver");
    let cleaned = clean_file(&input, &resolver).expect("clean");
    assert_eq!(cleaned.mapping.column(Role::Unit), Some("SUITE NO"));
    assert_eq!(cleaned.mapping.column(Role::StreetSuffix), None);
    assert_eq!(
        cleaned.output.records()[0].mailing_address,
        "1 MAIN 200, Austin, TX 78701"
    );
}

#[test]
fn unreadable_explicit_settings_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");
    assert!(load_settings(Some(&missing)).is_err());

    let broken = write_input(dir.path(), "broken.toml", "[apify\n");
    let err = load_settings(Some(&broken)).unwrap_err();
    assert!(format!("{err:#}").contains("invalid settings file"));
}

#[test]
fn terminal_tables_show_mapping_and_rows() {
    let dir = tempdir().expect("tempdir");
    let input = write_input(dir.path(), "county.csv", COUNTY_CSV);
    let resolver = Settings::default().resolver.build_resolver().expect("resolver");
    let cleaned = clean_file(&input, &resolver).expect("clean");

    let mapping = mapping_table(&cleaned.mapping).to_string();
    assert!(mapping.contains("FIRST_NAME"));
    assert!(mapping.contains("OWNER 1 FIRST NAME"));
    assert!(mapping.contains("1.000"));

    let preview = preview_table(&cleaned.output, 1).to_string();
    assert!(preview.contains("JANE DOE"));
    assert!(!preview.contains("SMITH"));
}
