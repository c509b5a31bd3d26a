use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::EventDraft;
use crate::models::event_type::EventType;
use crate::store::events::{AddOutcome, EventStore, FREE_EVENT_QUOTA};
use crate::store::kv::LocalStore;
use crate::store::subscription;
use crate::ui::messages::{info, success, warning};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

/// Start nagging about the free-plan cap a couple of events early.
const QUOTA_WARN_AT: usize = 8;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        store: &LocalStore,
        cfg: &Config,
        kind: EventType,
        date: Option<NaiveDate>,
        at: Option<NaiveTime>,
        location: Option<String>,
        accident: bool,
        notes: Option<String>,
        now: DateTime<Local>,
    ) -> AppResult<()> {
        //
        // 1. Resolve the timestamp: "now" unless date/time parts are given
        //
        let timestamp = compose_timestamp(now, date, at);

        //
        // 2. Resolve the location: explicit, or the quick-log default for
        //    the outcome (successes happen outside, accidents inside)
        //
        let location = location.unwrap_or_else(|| {
            if accident {
                cfg.default_accident_location.clone()
            } else {
                cfg.default_success_location.clone()
            }
        });

        let draft = EventDraft {
            kind,
            timestamp,
            location,
            is_accident: accident,
            notes: notes.unwrap_or_default(),
        };

        //
        // 3. Add through the quota gate
        //
        let gate = subscription::load(store)?;
        let mut events = EventStore::open(store)?;

        match events.add(draft, &gate)? {
            AddOutcome::Added(ev) => {
                let outcome = if ev.is_accident { "accident" } else { "success" };
                success(format!(
                    "Logged {} {} at {} ({})",
                    ev.kind.as_str(),
                    outcome,
                    ev.time_str(),
                    ev.location
                ));

                if !gate.is_subscribed && events.len() >= QUOTA_WARN_AT {
                    warning(format!(
                        "You've logged {}/{} events on the free plan.",
                        events.len(),
                        FREE_EVENT_QUOTA
                    ));
                }
            }
            AddOutcome::QuotaExceeded => {
                warning(format!(
                    "The free plan is limited to {} events. Upgrade to Pro for unlimited logging.",
                    FREE_EVENT_QUOTA
                ));
                info("Run: pawlogger account --upgrade");
            }
        }

        Ok(())
    }
}

/// Merge optional date/time parts over "now". Only the given parts change.
pub fn compose_timestamp(
    base: DateTime<Local>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
) -> DateTime<Local> {
    let d = date.unwrap_or_else(|| base.date_naive());
    let t = time.unwrap_or_else(|| base.time());
    Local
        .from_local_datetime(&d.and_time(t))
        .single()
        .unwrap_or(base)
}
