use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::events::EventStore;
use crate::store::kv::LocalStore;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let store = LocalStore::open(&cfg.store)?;
        let event_store = EventStore::open(&store)?;

        ExportLogic::export(event_store.events(), format, file, *force)?;
    }
    Ok(())
}
