//! Library integration tests.

use adsh::AdshError;

#[test]
fn error_types_are_public() {
    let err = AdshError::UnknownAlias {
        alias: "work".into(),
    };
    assert_eq!(err.to_string(), "Could not find the registry: work");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> adsh::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use adsh::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["adsh", "status", "--json"]);

    if let Commands::Status(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Status command");
    }
}

#[test]
fn ambiguity_message_lists_candidates() {
    let err = AdshError::AmbiguousIdentifier {
        identifier: "b".into(),
        candidates: vec!["home/b".into(), "work/b".into()],
    };
    assert_eq!(
        err.to_string(),
        "Identifier conflict for b, can be one of: home/b, work/b"
    );
}
