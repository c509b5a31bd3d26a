use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::info::print_store_info;
use crate::store::kv::LocalStore;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Store { info, vacuum } = &cli.command {
        let store = LocalStore::open(&cfg.store)?;

        if *vacuum {
            store.vacuum()?;
            success("Store optimized (VACUUM)");
        }

        if *info || !*vacuum {
            print_store_info(&store, &cfg.store)?;
        }
    }
    Ok(())
}
