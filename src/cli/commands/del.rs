use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::kv::LocalStore;
use crate::ui::messages::info;
use std::io::{Write, stdin, stdout};

/// Delete a logged event by id, asking for confirmation unless --yes.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = &cli.command {
        if !*yes && !confirm(*id)? {
            info("Delete cancelled.");
            return Ok(());
        }

        let store = LocalStore::open(&cfg.store)?;
        DeleteLogic::apply(&store, *id)?;
    }
    Ok(())
}

fn confirm(id: i64) -> AppResult<bool> {
    print!("Delete event #{}? [y/N]: ", id);
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
