use clap::Subcommand;
use unplug_core::{Catalog, Config, UsageSummary};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Print the active catalog (blocked apps + alternatives) as JSON
    List,
    /// Print the usage metrics as JSON
    Metrics,
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::List => {
            let config = Config::load()?;
            let catalog = match &config.catalog.path {
                Some(path) => Catalog::load(path)?,
                None => Catalog::built_in(),
            };
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        CatalogAction::Metrics => {
            let summary = UsageSummary::mock();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
