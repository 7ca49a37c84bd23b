//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::RevealOutcome;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::terminal::TerminalCanvas;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let settings = Settings::load(Some(&config_dir))?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Resolve {
            parent1,
            parent2,
            json,
        }) => cmd_resolve(&settings, parent1, parent2, *json),
        Some(Commands::Tree {
            parent1,
            parent2,
            json,
        }) => cmd_tree(&settings, parent1, parent2, *json),
        Some(Commands::Reveal {
            parent1,
            parent2,
            interval_ms,
            instant,
        }) => cmd_reveal(settings, parent1, parent2, *interval_ms, *instant),
        Some(Commands::Explain { label }) => cmd_explain(&settings, label),
        Some(Commands::Table { json }) => cmd_table(&settings, *json),
        Some(Commands::Config { command }) => cmd_config(&settings, &config_dir, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|e| CliError::from(InfraError::io("print help", e))),
    }
}

fn resolve_config_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(d) if !d.is_dir() => Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            d.display()
        ))),
        Some(d) => Ok(d.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| CliError::from(InfraError::io("current directory", e))),
    }
}

fn wants_json(settings: &Settings, json_flag: bool) -> bool {
    json_flag || settings.format == OutputFormat::Json
}

fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::from(ApplicationError::operation_failed("serialize output", e)))
}

#[instrument(skip(settings))]
fn cmd_resolve(settings: &Settings, parent1: &str, parent2: &str, json: bool) -> CliResult<()> {
    let container = ServiceContainer::new(settings.clone());
    let report = container.inheritance_service().resolve(parent1, parent2)?;

    if wants_json(settings, json) {
        output::info(&report.to_json()?);
    } else {
        let children: Vec<String> = report.predicted_blood.iter().map(|g| g.to_string()).collect();
        output::info(&children.join(", "));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_tree(settings: &Settings, parent1: &str, parent2: &str, json: bool) -> CliResult<()> {
    let container = ServiceContainer::new(settings.clone());
    let tree = container.inheritance_service().tree(parent1, parent2)?;

    if wants_json(settings, json) {
        output::info(&to_json(&tree.to_document())?);
    } else {
        print!("{}", tree.render());
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_reveal(
    mut settings: Settings,
    parent1: &str,
    parent2: &str,
    interval_ms: Option<u64>,
    instant: bool,
) -> CliResult<()> {
    if instant {
        settings.reveal.interval_ms = 0;
    } else if let Some(ms) = interval_ms {
        settings.reveal.interval_ms = ms;
    }
    let container = ServiceContainer::new(settings);
    let tree = container.inheritance_service().tree(parent1, parent2)?;
    let reveal = container.reveal_service();
    debug!("reveal interval: {:?}", reveal.interval());

    let stdout = io::stdout();
    let mut canvas = TerminalCanvas::new(stdout.lock())
        .with_edges(container.settings.reveal.show_edges)
        .with_explanations(container.settings.reveal.explain);

    match reveal.present(&tree, &mut canvas)? {
        RevealOutcome::Completed { revealed } => debug!("revealed {} nodes", revealed),
        RevealOutcome::Cancelled { revealed } => {
            output::detail(&format!("cancelled after {revealed} nodes"))
        }
    }
    Ok(())
}

fn cmd_explain(settings: &Settings, label: &str) -> CliResult<()> {
    let container = ServiceContainer::new(settings.clone());
    let explanation = container.inheritance_service().explain(label);

    output::header(label);
    output::info(&explanation.by_label);
    if let Some(features) = explanation.by_feature {
        output::header("By feature");
        for feature in features {
            output::detail(&feature);
        }
    }
    Ok(())
}

fn cmd_table(settings: &Settings, json: bool) -> CliResult<()> {
    let container = ServiceContainer::new(settings.clone());
    let table = container.inheritance_service().table();

    if wants_json(settings, json) {
        output::info(&to_json(&table)?);
        return Ok(());
    }

    output::header("Parent 1  Parent 2  Children");
    for report in &table {
        let children: Vec<String> = report.predicted_blood.iter().map(|g| g.to_string()).collect();
        output::info(&format!(
            "{:<9} {:<9} {}",
            report.parent1_blood.to_string(),
            report.parent2_blood.to_string(),
            children.join(", ")
        ));
    }
    Ok(())
}

fn cmd_config(settings: &Settings, config_dir: &Path, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            let global = global_config_path();
            let local = local_config_path(config_dir);
            match &global {
                Some(p) => output::action("global", &describe_path(p)),
                None => output::action("global", &"<unavailable>"),
            }
            output::action("local", &describe_path(&local));
            Ok(())
        }
        ConfigCommands::Init { local, force } => {
            let path = if *local {
                local_config_path(config_dir)
            } else {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".into())
                })?
            };
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
            Ok(())
        }
    }
}

fn describe_path(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not present)", path.display())
    }
}

