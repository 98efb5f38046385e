use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use frontstate::config::{BuildMode, Config};
use frontstate::logging::init_tracing;
use frontstate::root::{Action, SliceName};
use frontstate::store::Store;

#[derive(Parser, Debug)]
#[command(name = "frontstate", version, about = "Inspect and drive the persisted application state")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Run without the development middleware
    #[arg(long, global = true)]
    production: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rehydrated snapshot as JSON
    Show {
        /// Print only this slice (app, auth, error)
        #[arg(long)]
        slice: Option<String>,
    },
    /// Dispatch wire actions in order, e.g. '{"type":"app/setLoading","payload":true}'
    Dispatch {
        #[arg(required = true)]
        actions: Vec<String>,
    },
    /// Delete the persisted record
    Purge,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    let mode = if cli.production {
        BuildMode::Production
    } else {
        config.mode()
    };
    init_tracing(mode);

    let store = Store::builder(config).mode(mode).build();

    match cli.command {
        Command::Show { slice } => show(&store, slice.as_deref()),
        Command::Dispatch { actions } => dispatch(&store, &actions),
        Command::Purge => {
            store
                .persistor()
                .purge()
                .context("Failed to purge persisted state")?;
            println!("Purged '{}'", store.persistor().config().key);
            Ok(())
        }
    }
}

fn show(store: &Store, slice: Option<&str>) -> Result<()> {
    let state = store.get_state();
    let value = match slice {
        Some(name) => {
            let Some(name) = SliceName::parse(name) else {
                bail!("Unknown slice '{}'", name);
            };
            state.slice_to_json(name)?
        }
        None => serde_json::to_value(&*state)?,
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn dispatch(store: &Store, actions: &[String]) -> Result<()> {
    let actions = actions
        .iter()
        .map(|raw| {
            serde_json::from_str::<Action>(raw)
                .with_context(|| format!("Not an action object: {}", raw))
        })
        .collect::<Result<Vec<_>>>()?;

    let errors_before = store.get_state().error.next_id;
    for action in actions {
        store.dispatch_wire(action);
    }
    store.flush().context("Failed to persist state")?;

    let state = store.get_state();
    for entry in state.error.entries.iter().filter(|e| e.id >= errors_before) {
        eprintln!("{}: {}", entry.source, entry.message);
    }
    println!("{}", serde_json::to_string_pretty(&*state)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_requires_at_least_one_action() {
        assert!(Cli::try_parse_from(["frontstate", "dispatch"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["frontstate", "show", "--slice", "app", "--production"])
            .unwrap();
        assert!(cli.production);
        assert!(matches!(cli.command, Command::Show { slice: Some(ref s) } if s == "app"));
    }
}
