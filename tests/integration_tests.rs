mod common;
use common::{init_db_with_data, otl, setup_home, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let home = setup_home("init_creates_database");
    let db_path = setup_test_db("init_creates_database");

    otl(&home)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_computes_duration_and_total() {
    let home = setup_home("add_and_list");
    let db_path = setup_test_db("add_and_list");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args(["--db", &db_path, "--test", "list", "Alex Haro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("02:00"))
        .stdout(predicate::str::contains("server maintenance"))
        .stdout(predicate::str::contains("Total hours: 03:30"));
}

#[test]
fn test_list_shows_most_recent_first() {
    let home = setup_home("list_recent_first");
    let db_path = setup_test_db("list_recent_first");
    init_db_with_data(&home, &db_path);

    let output = otl(&home)
        .args(["--db", &db_path, "--test", "list", "Alex Haro"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    let later = stdout.find("2025-09-01 08:00").expect("later session shown");
    let earlier = stdout.find("2025-09-01 06:00").expect("earlier session shown");
    assert!(later < earlier, "most recent start must be listed first");
}

#[test]
fn test_list_remembers_last_technician() {
    let home = setup_home("list_remembers");
    let db_path = setup_test_db("list_remembers");
    init_db_with_data(&home, &db_path);

    // without --test the selection is remembered in the prefs file
    otl(&home)
        .args(["--db", &db_path, "list", "Carlos Cisneros"])
        .assert()
        .success();

    otl(&home)
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Records for Carlos Cisneros"));
}

#[test]
fn test_list_without_name_or_preference_fails() {
    let home = setup_home("list_no_pref");
    let db_path = setup_test_db("list_no_pref");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("none remembered"));
}

#[test]
fn test_add_rejects_inverted_time_range() {
    let home = setup_home("add_inverted_range");
    let db_path = setup_test_db("add_inverted_range");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Alex Haro",
            "--start",
            "2025-09-02T10:00",
            "--end",
            "2025-09-02T09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start time must be before end time"));

    // nothing was persisted
    otl(&home)
        .args(["--db", &db_path, "--test", "list", "Alex Haro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hours: 03:30"));
}

#[test]
fn test_add_rejects_unknown_technician() {
    let home = setup_home("add_unknown_tech");
    let db_path = setup_test_db("add_unknown_tech");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Nobody Anywhere",
            "--start",
            "2025-09-02T08:00",
            "--end",
            "2025-09-02T09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the configured roster"));
}

#[test]
fn test_add_description_length_boundary() {
    let home = setup_home("add_desc_boundary");
    let db_path = setup_test_db("add_desc_boundary");
    init_db_with_data(&home, &db_path);

    let desc_100 = "x".repeat(100);
    otl(&home)
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Alex Haro",
            "--start",
            "2025-09-03T08:00",
            "--end",
            "2025-09-03T09:00",
            "--desc",
            &desc_100,
        ])
        .assert()
        .success();

    let desc_101 = "x".repeat(101);
    otl(&home)
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Alex Haro",
            "--start",
            "2025-09-04T08:00",
            "--end",
            "2025-09-04T09:00",
            "--desc",
            &desc_101,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("longer than 100 characters"));
}

#[test]
fn test_edit_updates_in_place() {
    let home = setup_home("edit_updates");
    let db_path = setup_test_db("edit_updates");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Alex Haro",
            "--start",
            "2025-09-01T08:00",
            "--end",
            "2025-09-01T11:00",
            "--desc",
            "extended shift",
            "--edit",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 1 updated."));

    // still two records for the technician, with the new duration
    otl(&home)
        .args(["--db", &db_path, "--test", "list", "Alex Haro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extended shift"))
        .stdout(predicate::str::contains("Total hours: 04:30"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let home = setup_home("edit_unknown_id");
    let db_path = setup_test_db("edit_unknown_id");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Alex Haro",
            "--start",
            "2025-09-01T08:00",
            "--end",
            "2025-09-01T09:00",
            "--edit",
            "999",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record found with id 999"));
}

#[test]
fn test_del_removes_one_record() {
    let home = setup_home("del_one");
    let db_path = setup_test_db("del_one");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args(["--db", &db_path, "--test", "del", "2", "Alex Haro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 2 deleted."))
        .stdout(predicate::str::contains("Total hours for Alex Haro: 02:00"));
}

#[test]
fn test_roster_lists_configured_technicians() {
    let home = setup_home("roster_list");
    otl(&home)
        .args(["--test", "roster"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex Haro"))
        .stdout(predicate::str::contains("Carlos Cisneros"));
}

#[test]
fn test_config_print_shows_roster_policy() {
    let home = setup_home("config_print");
    otl(&home)
        .args(["--test", "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enforce_roster: true"))
        .stdout(predicate::str::contains("reset_code"));
}
