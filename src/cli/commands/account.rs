use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::checkout;
use crate::errors::{AppError, AppResult};
use crate::models::subscription::SubscriptionStatus;
use crate::store::kv::LocalStore;
use crate::store::subscription;
use crate::ui::messages::{info, success, warning};
use std::time::Duration;

/// Simulated processor round-trip time; skipped in test mode.
const MOCK_DELAY: Duration = Duration::from_millis(1500);

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Account {
        status: _,
        upgrade,
        cancel,
        reactivate,
    } = &cli.command
    {
        let store = LocalStore::open(&cfg.store)?;
        let current = subscription::load(&store)?;
        let delay = if cli.test { Duration::ZERO } else { MOCK_DELAY };

        if *upgrade {
            if current.is_active() {
                info("Already subscribed to Pro.");
                return Ok(());
            }

            let now = crate::utils::time::resolve_now(cli.now.as_ref())?;
            info("Contacting payment processor...");
            let task = checkout::subscribe(delay, now);
            let new_status = task
                .finish()
                .ok_or_else(|| AppError::Checkout("checkout was cancelled".to_string()))?;
            subscription::save(&store, &new_status)?;

            success("Welcome to Pro! Unlimited logging, detailed analytics, and custom reminders are unlocked.");
            return Ok(());
        }

        if *cancel {
            if !current.is_subscribed {
                warning("No active subscription to cancel.");
                return Ok(());
            }
            if current.cancel_at_period_end {
                info("Subscription is already set to cancel at the period end.");
                return Ok(());
            }

            let task = checkout::cancel_at_period_end(current.clone(), delay);
            let new_status = task
                .finish()
                .ok_or_else(|| AppError::Checkout("cancellation was aborted".to_string()))?;
            subscription::save(&store, &new_status)?;

            success("Subscription will end at the current period end.");
            return Ok(());
        }

        if *reactivate {
            if !current.cancel_at_period_end {
                info("Nothing to reactivate.");
                return Ok(());
            }

            let task = checkout::reactivate(current.clone(), delay);
            let new_status = task
                .finish()
                .ok_or_else(|| AppError::Checkout("reactivation was aborted".to_string()))?;
            subscription::save(&store, &new_status)?;

            success("Subscription reactivated.");
            return Ok(());
        }

        // default (and --status): print the current record
        print_status(&current);
    }
    Ok(())
}

fn print_status(status: &SubscriptionStatus) {
    println!("\n👑 Subscription");
    println!(
        "• Plan: {}",
        if status.is_subscribed { "Pro" } else { "Free" }
    );
    println!("• Status: {}", status.status_label());

    match status.current_period_end {
        Some(end) => {
            let label = if status.cancel_at_period_end {
                "Ends"
            } else {
                "Renews"
            };
            println!("• {}: {}", label, end.format("%B %-d, %Y"));
        }
        None => println!("• Renews: --"),
    }

    if !status.is_subscribed {
        println!("• Upgrade with: pawlogger account --upgrade");
    }
    println!();
}
