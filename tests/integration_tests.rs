use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_event, init_store, paw, setup_test_store, subscribe, temp_out};

#[test]
fn test_init_creates_store() {
    let store = setup_test_store("init");

    paw()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store ready"));

    assert!(std::path::Path::new(&store).exists());
}

#[test]
fn test_add_and_list_event() {
    let store = setup_test_store("add_list");
    init_store(&store);

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "add",
            "pee",
            "--date",
            "2025-06-10",
            "--at",
            "07:45",
        ])
        .assert()
        .success()
        .stdout(contains("Logged pee success at 07:45 (Outside)"));

    paw()
        .args(["--store", &store, "--test", "list", "--period", "2025-06-10"])
        .assert()
        .success()
        .stdout(contains("07:45"))
        .stdout(contains("pee"))
        .stdout(contains("Outside"));
}

#[test]
fn test_add_accident_defaults_to_inside() {
    let store = setup_test_store("accident_default");
    init_store(&store);

    paw()
        .args([
            "--store", &store, "--test", "add", "poop", "--accident", "--at", "06:30",
        ])
        .assert()
        .success()
        .stdout(contains("Logged poop accident"))
        .stdout(contains("Inside"));
}

#[test]
fn test_add_rejects_unknown_kind() {
    let store = setup_test_store("bad_kind");
    init_store(&store);

    paw()
        .args(["--store", &store, "--test", "add", "jump"])
        .assert()
        .failure()
        .stderr(contains("Invalid event kind"));
}

#[test]
fn test_list_rejects_invalid_period() {
    let store = setup_test_store("bad_period");
    init_store(&store);

    paw()
        .args(["--store", &store, "--test", "list", "--period", "2025-6"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_list_filters_by_period() {
    let store = setup_test_store("period_filter");
    init_store(&store);

    add_event(&store, "pee", "2025-05-31", "09:00", false);
    add_event(&store, "pee", "2025-06-15", "09:00", false);
    add_event(&store, "poop", "2025-07-01", "09:00", false);

    paw()
        .args(["--store", &store, "--test", "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Jun 15"))
        .stdout(contains("May 31").not())
        .stdout(contains("Jul 1").not());
}

#[test]
fn test_list_accidents_only() {
    let store = setup_test_store("accidents_only");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);
    add_event(&store, "poop", "2025-06-10", "09:00", true);

    paw()
        .args(["--store", &store, "--test", "list", "--accidents"])
        .assert()
        .success()
        .stdout(contains("poop"))
        .stdout(contains("08:00").not());
}

#[test]
fn test_free_plan_caps_at_ten_events() {
    let store = setup_test_store("free_cap");
    init_store(&store);

    for i in 0..10 {
        paw()
            .args([
                "--store",
                &store,
                "--test",
                "add",
                "pee",
                "--date",
                "2025-06-10",
                "--at",
                &format!("{:02}:00", 8 + i),
            ])
            .assert()
            .success()
            .stdout(contains("Logged pee"));
    }

    // the 11th add is refused with an upgrade hint, not an error
    paw()
        .args([
            "--store",
            &store,
            "--test",
            "add",
            "pee",
            "--date",
            "2025-06-10",
            "--at",
            "19:00",
        ])
        .assert()
        .success()
        .stdout(contains("free plan is limited to 10 events"))
        .stdout(contains("account --upgrade"));

    // and the collection stays at 10
    paw()
        .args(["--store", &store, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("19:00").not());
}

#[test]
fn test_upgrade_unlocks_unlimited_logging() {
    let store = setup_test_store("upgrade_unlimited");
    init_store(&store);

    for i in 0..10 {
        add_event(&store, "pee", "2025-06-10", &format!("{:02}:00", 8 + i), false);
    }

    subscribe(&store);

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "add",
            "pee",
            "--date",
            "2025-06-10",
            "--at",
            "19:00",
        ])
        .assert()
        .success()
        .stdout(contains("Logged pee"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let store = setup_test_store("edit_fields");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "edit",
            "1",
            "--location",
            "Kitchen",
            "--accident",
        ])
        .assert()
        .success()
        .stdout(contains("Updated event #1"));

    paw()
        .args(["--store", &store, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Kitchen"))
        .stdout(contains("08:00")); // time untouched
}

#[test]
fn test_edit_unknown_id_is_warned_noop() {
    let store = setup_test_store("edit_unknown");
    init_store(&store);

    paw()
        .args([
            "--store", &store, "--test", "edit", "42", "--location", "Kitchen",
        ])
        .assert()
        .success()
        .stdout(contains("No event with id 42"));
}

#[test]
fn test_delete_with_confirmation_prompt() {
    let store = setup_test_store("del_confirm");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);

    paw()
        .args(["--store", &store, "--test", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted event #1"));

    paw()
        .args(["--store", &store, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("08:00").not());
}

#[test]
fn test_delete_is_idempotent_via_cli() {
    let store = setup_test_store("del_idempotent");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);

    paw()
        .args(["--store", &store, "--test", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted event #1"));

    // same command again: warned no-op, still exit 0
    paw()
        .args(["--store", &store, "--test", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("No event with id 1"));
}

#[test]
fn test_stats_free_tier_shows_basics_and_gate() {
    let store = setup_test_store("stats_free");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);
    add_event(&store, "pee", "2025-06-10", "09:00", false);
    add_event(&store, "pee", "2025-06-10", "10:00", false);
    add_event(&store, "poop", "2025-06-10", "11:00", true);

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "stats",
            "--now",
            "2025-06-10 21:00",
        ])
        .assert()
        .success()
        .stdout(contains("Success rate: ").and(contains("75%")))
        .stdout(contains("Detailed Analytics"))
        .stdout(contains("7-day success rate").not());
}

#[test]
fn test_stats_pro_shows_daily_table_and_locations() {
    let store = setup_test_store("stats_pro");
    init_store(&store);
    subscribe(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);
    add_event(&store, "pee", "2025-06-10", "09:00", false);
    add_event(&store, "pee", "2025-06-10", "10:00", false);
    add_event(&store, "poop", "2025-06-10", "11:00", true);

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "stats",
            "--now",
            "2025-06-10 21:00",
        ])
        .assert()
        .success()
        .stdout(contains("7-day success rate"))
        .stdout(contains("75%"))
        .stdout(contains("pee 3"))
        .stdout(contains("poop 1"))
        .stdout(contains("Outside"))
        .stdout(contains("Inside"));
}

#[test]
fn test_stats_streak_stops_at_accident_day() {
    let store = setup_test_store("stats_streak");
    init_store(&store);

    // day 2 accident, days 0 and 1 clean → streak 2
    add_event(&store, "pee", "2025-06-08", "08:00", true);
    add_event(&store, "pee", "2025-06-09", "08:00", false);
    add_event(&store, "pee", "2025-06-10", "08:00", false);

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "stats",
            "--now",
            "2025-06-10 21:00",
        ])
        .assert()
        .success()
        .stdout(contains("Streak: 2 accident-free days"));
}

#[test]
fn test_stats_trend_compares_three_day_buckets() {
    let store = setup_test_store("stats_trend");
    init_store(&store);
    subscribe(&store);

    // recent bucket: 2/2 clean; previous bucket: 1/2 → trend +50
    add_event(&store, "pee", "2025-06-10", "10:00", false);
    add_event(&store, "pee", "2025-06-09", "10:00", false);
    add_event(&store, "pee", "2025-06-06", "10:00", false);
    add_event(&store, "poop", "2025-06-06", "11:00", true);

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "stats",
            "--now",
            "2025-06-10 21:00",
        ])
        .assert()
        .success()
        .stdout(contains("↑ 50%"))
        .stdout(contains("vs previous 3 days"));
}

#[test]
fn test_remind_is_gated_for_free_users() {
    let store = setup_test_store("remind_gated");
    init_store(&store);

    paw()
        .args(["--store", &store, "--test", "remind"])
        .assert()
        .success()
        .stdout(contains("Custom Reminders"))
        .stdout(contains("account --upgrade"));
}

#[test]
fn test_remind_add_keeps_times_sorted() {
    let store = setup_test_store("remind_sorted");
    init_store(&store);
    subscribe(&store);

    // start from a clean list
    for t in [
        "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00",
    ] {
        paw()
            .args(["--store", &store, "--test", "remind", "--remove", t])
            .assert()
            .success();
    }

    paw()
        .args(["--store", &store, "--test", "remind", "--add", "09:00"])
        .assert()
        .success();

    paw()
        .args(["--store", &store, "--test", "remind", "--add", "07:00"])
        .assert()
        .success()
        .stdout(contains("07:00, 09:00"));
}

#[test]
fn test_remind_caps_at_ten_times() {
    let store = setup_test_store("remind_cap");
    init_store(&store);
    subscribe(&store);

    // the default list has 7 entries; fill up to 10
    for t in ["07:00", "09:00", "11:00"] {
        paw()
            .args(["--store", &store, "--test", "remind", "--add", t])
            .assert()
            .success()
            .stdout(contains(format!("Added reminder time {}", t)));
    }

    paw()
        .args(["--store", &store, "--test", "remind", "--add", "13:00"])
        .assert()
        .success()
        .stdout(contains("At most 10 reminder times"))
        .stdout(contains("10/10"));
}

#[test]
fn test_remind_next_rolls_over_to_tomorrow() {
    let store = setup_test_store("remind_next");
    init_store(&store);
    subscribe(&store);

    // trim the default list down to 08:00 and 20:00
    for t in ["10:00", "12:00", "14:00", "16:00", "18:00"] {
        paw()
            .args(["--store", &store, "--test", "remind", "--remove", t])
            .assert()
            .success();
    }

    paw()
        .args([
            "--store",
            &store,
            "--test",
            "remind",
            "--now",
            "2025-06-10 21:00",
        ])
        .assert()
        .success()
        .stdout(contains("Next reminder: 08:00"))
        .stdout(contains("in 11h 0m"));
}

#[test]
fn test_account_status_lifecycle() {
    let store = setup_test_store("account_lifecycle");
    init_store(&store);

    paw()
        .args(["--store", &store, "--test", "account", "--status"])
        .assert()
        .success()
        .stdout(contains("Plan: Free"))
        .stdout(contains("Status: inactive"));

    subscribe(&store);

    paw()
        .args(["--store", &store, "--test", "account", "--status"])
        .assert()
        .success()
        .stdout(contains("Plan: Pro"))
        .stdout(contains("Status: active"))
        .stdout(contains("Renews"));

    paw()
        .args(["--store", &store, "--test", "account", "--cancel"])
        .assert()
        .success()
        .stdout(contains("end at the current period end"));

    paw()
        .args(["--store", &store, "--test", "account", "--status"])
        .assert()
        .success()
        .stdout(contains("Ends"));

    paw()
        .args(["--store", &store, "--test", "account", "--reactivate"])
        .assert()
        .success()
        .stdout(contains("Subscription reactivated"));
}

#[test]
fn test_export_csv_and_json() {
    let store = setup_test_store("export");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);
    add_event(&store, "poop", "2025-06-10", "09:00", true);

    let csv_file = temp_out("export_csv", "csv");
    paw()
        .args([
            "--store", &store, "--test", "export", "--format", "csv", "--file", &csv_file,
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let csv_content = std::fs::read_to_string(&csv_file).expect("read csv");
    assert!(csv_content.starts_with("id,timestamp,kind,location,accident,notes"));
    assert!(csv_content.contains("pee"));
    assert!(csv_content.contains("poop"));

    // refuses to overwrite without --force
    paw()
        .args([
            "--store", &store, "--test", "export", "--format", "csv", "--file", &csv_file,
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let json_file = temp_out("export_json", "json");
    paw()
        .args([
            "--store", &store, "--test", "export", "--format", "json", "--file", &json_file,
        ])
        .assert()
        .success();

    let json_content = std::fs::read_to_string(&json_file).expect("read json");
    assert!(json_content.contains("\"kind\": \"poop\""));
    assert!(json_content.contains("\"is_accident\": true"));
}

#[test]
fn test_store_info_reports_event_count() {
    let store = setup_test_store("store_info");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);
    add_event(&store, "pee", "2025-06-11", "08:00", false);

    paw()
        .args(["--store", &store, "--test", "store", "--info"])
        .assert()
        .success()
        .stdout(contains("Total events:"))
        .stdout(contains("2"))
        .stdout(contains("Date range"));
}

#[test]
fn test_backup_copies_store_file() {
    let store = setup_test_store("backup");
    init_store(&store);

    add_event(&store, "pee", "2025-06-10", "08:00", false);

    let backup_file = temp_out("backup_copy", "sqlite");
    paw()
        .args(["--store", &store, "--test", "backup", "--file", &backup_file])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&backup_file).exists());
}
