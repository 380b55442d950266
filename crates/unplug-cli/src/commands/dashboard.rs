use std::path::PathBuf;

use clap::Subcommand;
use unplug_core::config::data_dir;
use unplug_core::{Catalog, Config, DashboardController, DashboardState};

const STATE_FILE: &str = "dashboard.json";

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Create a fresh dashboard session
    Init {
        /// Fixed RNG seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the current state snapshot as JSON
    Status,
    /// Toggle the app lock
    ToggleLock,
    /// Select a displayed alternative by id
    Select { id: String },
    /// Replace the displayed alternatives with a fresh random sample
    Shuffle {
        /// Fixed RNG seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Expand the blocked-apps detail view
    Expand,
    /// Collapse the blocked-apps detail view
    Collapse,
    /// Mark the entrance transitions as fired
    Enter,
    /// Discard the current session
    Reset,
}

fn state_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(data_dir()?.join(STATE_FILE))
}

fn load_state() -> Result<Option<DashboardState>, Box<dyn std::error::Error>> {
    let path = state_path()?;
    match std::fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str::<DashboardState>(&json) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                if std::env::var("UNPLUG_DEBUG").is_ok() {
                    eprintln!("Warning: discarding unreadable session file: {e}");
                }
                Ok(None)
            }
        },
        Err(_) => Ok(None),
    }
}

fn save_state(controller: &DashboardController) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(state) = controller.state() {
        let json = serde_json::to_string(state)?;
        std::fs::write(state_path()?, json)?;
    }
    Ok(())
}

/// Resume the persisted session, if any; the controller reports
/// NotInitialized for mutators when there is none.
fn resume(seed: Option<u64>) -> Result<DashboardController, Box<dyn std::error::Error>> {
    Ok(match load_state()? {
        Some(state) => DashboardController::from_state(state, seed),
        None => DashboardController::with_seed(seed),
    })
}

fn active_catalog(config: &Config) -> Result<Catalog, Box<dyn std::error::Error>> {
    match &config.catalog.path {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::built_in()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run(action: DashboardAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        DashboardAction::Init { seed } => {
            let catalog = active_catalog(&config)?;
            let mut controller = DashboardController::with_seed(seed.or(config.shuffle.seed));
            let event = controller.initialize(&catalog.alternatives)?;
            print_json(&event)?;
            save_state(&controller)?;
        }
        DashboardAction::Status => {
            let controller = resume(config.shuffle.seed)?;
            print_json(&controller.snapshot()?)?;
        }
        DashboardAction::ToggleLock => {
            let mut controller = resume(config.shuffle.seed)?;
            let event = controller.toggle_lock()?;
            print_json(&event)?;
            save_state(&controller)?;
        }
        DashboardAction::Select { id } => {
            let mut controller = resume(config.shuffle.seed)?;
            let event = controller.select(&id)?;
            print_json(&event)?;
            save_state(&controller)?;
        }
        DashboardAction::Shuffle { seed } => {
            let catalog = active_catalog(&config)?;
            let mut controller = resume(seed.or(config.shuffle.seed))?;
            let event = controller.shuffle(&catalog.alternatives)?;
            print_json(&event)?;
            save_state(&controller)?;
        }
        DashboardAction::Expand => {
            let mut controller = resume(config.shuffle.seed)?;
            match controller.expand()? {
                Some(event) => print_json(&event)?,
                None => print_json(&controller.snapshot()?)?,
            }
            save_state(&controller)?;
        }
        DashboardAction::Collapse => {
            let mut controller = resume(config.shuffle.seed)?;
            match controller.collapse()? {
                Some(event) => print_json(&event)?,
                None => print_json(&controller.snapshot()?)?,
            }
            save_state(&controller)?;
        }
        DashboardAction::Enter => {
            let mut controller = resume(config.shuffle.seed)?;
            match controller.mark_entered()? {
                Some(event) => print_json(&event)?,
                None => print_json(&controller.snapshot()?)?,
            }
            save_state(&controller)?;
        }
        DashboardAction::Reset => {
            let path = state_path()?;
            if path.exists() {
                std::fs::remove_file(&path)?;
            }
            println!("{{\"type\": \"dashboard_reset\"}}");
        }
    }

    Ok(())
}
