use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::store::kv::LocalStore;
use crate::utils::date;
use crate::utils::time::{parse_optional_time, resolve_now};

/// Log a potty event.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        date: date_arg,
        at,
        location,
        accident,
        notes,
    } = &cli.command
    {
        //
        // 1. Parse kind (mandatory)
        //
        let kind = EventType::from_code(kind).ok_or_else(|| {
            AppError::InvalidKind(format!("'{}'. Use 'pee' or 'poop'.", kind))
        })?;

        //
        // 2. Parse optional date/time overrides
        //
        let date_parsed = match date_arg {
            Some(d) => {
                Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?)
            }
            None => None,
        };
        let at_parsed = parse_optional_time(at.as_ref())?;

        //
        // 3. Open the store and execute logic
        //
        let now = resolve_now(cli.now.as_ref())?;
        let store = LocalStore::open(&cfg.store)?;

        AddLogic::apply(
            &store,
            cfg,
            kind,
            date_parsed,
            at_parsed,
            location.clone(),
            *accident,
            notes.clone(),
            now,
        )?;
    }

    Ok(())
}
