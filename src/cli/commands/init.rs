use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::kv::LocalStore;
use crate::ui::messages::success;

/// Create the config directory, the config file, and an empty local store.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = Config::init_all(cli.store.clone(), cli.test)?;

    // opening the store creates the file and its schema
    let path_str = store_path.to_string_lossy().to_string();
    LocalStore::open(&path_str)?;

    success(format!("Store ready: {}", path_str));
    Ok(())
}
