//! Tests for CLI argument parsing and service wiring.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use rstest::rstest;

use bloodline::cli::args::{Cli, Commands, ConfigCommands};
use bloodline::config::Settings;
use bloodline::infrastructure::di::ServiceContainer;
use bloodline::infrastructure::traits::Pacer;

struct NoPause;

impl Pacer for NoPause {
    fn pause(&self, _duration: Duration) {}
}

#[test]
fn given_resolve_args_when_parsing_then_keeps_raw_labels() {
    let cli = Cli::try_parse_from(["bloodline", "resolve", "AB+", "O-", "--json"]).unwrap();

    match cli.command {
        Some(Commands::Resolve {
            parent1,
            parent2,
            json,
        }) => {
            assert_eq!(parent1, "AB+");
            assert_eq!(parent2, "O-");
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_reveal_with_instant_and_interval_when_parsing_then_conflict() {
    let result = Cli::try_parse_from([
        "bloodline",
        "reveal",
        "A+",
        "B+",
        "--instant",
        "--interval-ms",
        "10",
    ]);
    assert!(result.is_err());
}

#[rstest]
#[case(&["bloodline", "-vv", "table"], 2)]
#[case(&["bloodline", "table", "-v"], 1)]
#[case(&["bloodline", "table"], 0)]
fn given_verbose_flags_when_parsing_then_counts(#[case] args: &[&str], #[case] expected: u8) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.verbose, expected);
}

#[test]
fn given_config_init_when_parsing_then_flags_set() {
    let cli = Cli::try_parse_from(["bloodline", "config", "init", "--local", "--force"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Init {
                local: true,
                force: true
            }
        })
    ));
}

#[test]
fn given_settings_when_building_reveal_service_then_uses_configured_interval() {
    let mut settings = Settings::default();
    settings.reveal.interval_ms = 1500;

    let container = ServiceContainer::with_deps(settings, Arc::new(NoPause));

    assert_eq!(
        container.reveal_service().interval(),
        Duration::from_millis(1500)
    );
    let report = container.inheritance_service().resolve("B+", "O+").unwrap();
    assert_eq!(report.predicted_blood.len(), 2);
}
