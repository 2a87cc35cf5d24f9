use clap::Parser;

use super::args::{CliArgs, OutputFormat};

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["annot", "--class", "App\\Home", "manifest.json"])
        .expect("minimal args should parse");

    assert_eq!(args.class, "App\\Home");
    assert_eq!(args.paths, vec![std::path::PathBuf::from("manifest.json")]);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.filter.is_none());
    assert!(args.method.is_none());
    assert!(!args.pretty);
    assert!(!args.no_color);
}

#[test]
fn parses_common_flags() {
    let args = CliArgs::try_parse_from([
        "annot",
        "-c",
        "App\\Home",
        "-f",
        "Action",
        "-m",
        "indexAction",
        "--format",
        "JSON",
        "--pretty",
        "--no-color",
        "manifests",
        "extra.json",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.filter.as_deref(), Some("Action"));
    assert_eq!(args.method.as_deref(), Some("indexAction"));
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.pretty);
    assert!(args.no_color);
    assert_eq!(
        args.paths,
        vec![
            std::path::PathBuf::from("manifests"),
            std::path::PathBuf::from("extra.json"),
        ]
    );
}

#[test]
fn requires_class_and_paths() {
    assert!(CliArgs::try_parse_from(["annot", "manifest.json"]).is_err());
    assert!(CliArgs::try_parse_from(["annot", "--class", "A"]).is_err());
}

#[test]
fn rejects_unknown_format() {
    let result =
        CliArgs::try_parse_from(["annot", "-c", "A", "--format", "yaml", "manifest.json"]);
    assert!(result.is_err());
}
