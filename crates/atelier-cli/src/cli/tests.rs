#![cfg(test)]

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn build_parses_with_defaults() {
    let cli = Cli::try_parse_from(["atelier", "build", "App.svelte"]).unwrap();
    match cli.command {
        Command::Build(args) => {
            assert_eq!(args.input.to_str(), Some("App.svelte"));
            assert!(args.output.is_none());
            assert!(args.template.is_none());
            assert!(!args.optimized);
        }
        other => panic!("expected build, got {other:?}"),
    }
}

#[test]
fn build_accepts_template_and_output() {
    let cli = Cli::try_parse_from([
        "atelier", "build", "App.jsx", "-t", "react", "-o", "public", "--optimized",
    ])
    .unwrap();
    match cli.command {
        Command::Build(args) => {
            assert_eq!(args.template.as_deref(), Some("react"));
            assert_eq!(args.output.unwrap().to_str(), Some("public"));
            assert!(args.optimized);
        }
        other => panic!("expected build, got {other:?}"),
    }
}

#[test]
fn serve_parses_port_host_and_ssl() {
    let cli = Cli::try_parse_from([
        "atelier", "serve", "App.svelte", "-p", "8443", "--host", "0.0.0.0", "--ssl",
        "--cert", "cert.pem", "--key", "key.pem",
    ])
    .unwrap();
    match cli.command {
        Command::Serve(args) => {
            assert_eq!(args.port, Some(8443));
            assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
            assert!(args.ssl);
            assert!(args.cert.is_some());
            assert!(args.key.is_some());
        }
        other => panic!("expected serve, got {other:?}"),
    }
}

#[test]
fn cert_requires_ssl() {
    assert!(Cli::try_parse_from(["atelier", "serve", "App.svelte", "--cert", "cert.pem"]).is_err());
}

#[test]
fn self_signed_conflicts_with_explicit_credentials() {
    assert!(Cli::try_parse_from([
        "atelier",
        "serve",
        "App.svelte",
        "--ssl",
        "--self-signed",
        "--cert",
        "cert.pem",
    ])
    .is_err());
}

#[test]
fn verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["atelier", "-v", "-q", "build", "App.svelte"]).is_err());
}

#[test]
fn templates_subcommand_parses() {
    let cli = Cli::try_parse_from(["atelier", "templates"]).unwrap();
    assert!(matches!(cli.command, Command::Templates(_)));
}
