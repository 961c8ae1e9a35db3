#![allow(clippy::expect_used)]

use clap::CommandFactory;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["components", "connected", "find", "size", "inspect"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for flag in [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--help",
        "--version",
    ] {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// The clap definition must pass clap's own consistency checks.
#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

/// `forest connected --help` must mention both element arguments.
#[test]
fn test_connected_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("connected")
        .expect("connected subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("FILE"), "connected help should mention FILE");
    assert!(help.contains('V'), "connected help should mention V");
    assert!(help.contains('W'), "connected help should mention W");
}

#[test]
fn test_dash_parses_as_stdin() {
    let cli = Cli::try_parse_from(["forest", "components", "-"]).expect("valid args");
    assert!(matches!(cli.command.file(), PathOrStdin::Stdin));
}

#[test]
fn test_negative_element_is_accepted_by_parser() {
    let cli = Cli::try_parse_from(["forest", "find", "graph.edges", "-1"]).expect("valid args");
    assert!(matches!(cli.command, Command::Find { v: -1, .. }));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let result = Cli::try_parse_from(["forest", "-q", "-v", "inspect", "x.edges"]);
    assert!(result.is_err(), "--quiet and --verbose must conflict");
}

#[test]
fn test_global_format_after_subcommand() {
    let cli = Cli::try_parse_from(["forest", "inspect", "x.edges", "--format", "json"])
        .expect("valid args");
    assert!(matches!(cli.format, OutputFormat::Json));
    assert_eq!(cli.command.file().to_string(), "x.edges");
}
