//! End-to-end parsing tests exercising the full scan → build pipeline
//! through the public facade.

use kevs::ParseOptions;

#[test]
fn full_document_with_every_value_kind() {
    let src = br#"
        name = "demo";
        version = 3;
        debug = true;
        raw = `line one
line two`;
        tags = ["a"; "b"; "c";];
        server = {
            host = "localhost";
            port = 8080;
            flags = [1; 2; 3;];
        };
    "#;

    let table = kevs::parse(src, &ParseOptions::default()).expect("valid document");
    assert_eq!(table.get_string("name").unwrap(), "demo");
    assert_eq!(table.get_int("version").unwrap(), 3);
    assert!(table.get_bool("debug").unwrap());
    assert_eq!(table.get_string("raw").unwrap(), "line one\nline two");

    let tags = table.get_list("tags").unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags.get_string(0).unwrap(), "a");

    let server = table.get_table("server").unwrap();
    assert_eq!(server.get_string("host").unwrap(), "localhost");
    assert_eq!(server.get_int("port").unwrap(), 8080);
    assert_eq!(server.get_list("flags").unwrap().len(), 3);
}

#[test]
fn diagnostics_carry_the_configured_file_name() {
    let options = ParseOptions {
        file_name: "server.kevs".to_string(),
        ..ParseOptions::default()
    };
    let (_, message) = kevs::parse_reporting(b"key\n", &options).unwrap_err();
    assert_eq!(
        message.as_deref(),
        Some("server.kevs:1: error: scan: key-value pair is missing separator")
    );
}

#[test]
fn no_file_option_omits_location_prefix() {
    let options = ParseOptions {
        include_location: false,
        ..ParseOptions::default()
    };
    let (_, message) = kevs::parse_reporting(b"key\n", &options).unwrap_err();
    assert_eq!(
        message.as_deref(),
        Some("error: scan: key-value pair is missing separator")
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = b"# a top comment\na = 1; # trailing note\nb=2;\n";
    let table = kevs::parse(src, &ParseOptions::default()).expect("valid document");
    assert_eq!(table.get_int("a").unwrap(), 1);
    assert_eq!(table.get_int("b").unwrap(), 2);
}
