use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::store::kv::LocalStore;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Edit a logged event: only the given fields change.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        kind,
        date: date_arg,
        at,
        location,
        accident,
        no_accident,
        notes,
    } = &cli.command
    {
        let kind_parsed = match kind {
            Some(k) => Some(EventType::from_code(k).ok_or_else(|| {
                AppError::InvalidKind(format!("'{}'. Use 'pee' or 'poop'.", k))
            })?),
            None => None,
        };

        let date_parsed = match date_arg {
            Some(d) => {
                Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?)
            }
            None => None,
        };
        let at_parsed = parse_optional_time(at.as_ref())?;

        let accident_parsed = if *accident {
            Some(true)
        } else if *no_accident {
            Some(false)
        } else {
            None
        };

        let store = LocalStore::open(&cfg.store)?;

        EditLogic::apply(
            &store,
            *id,
            kind_parsed,
            date_parsed,
            at_parsed,
            location.clone(),
            accident_parsed,
            notes.clone(),
        )?;
    }

    Ok(())
}
