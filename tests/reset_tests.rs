mod common;
use common::{init_db_with_data, otl, setup_home, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_reset_with_wrong_code_deletes_nothing() {
    let home = setup_home("reset_wrong_code");
    let db_path = setup_test_db("reset_wrong_code");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args(["--db", &db_path, "--test", "reset", "--code", "22"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong confirmation code"));

    // records unchanged
    otl(&home)
        .args(["--db", &db_path, "--test", "list", "Alex Haro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hours: 03:30"));
}

#[test]
fn test_reset_with_correct_code_clears_all_technicians() {
    let home = setup_home("reset_correct_code");
    let db_path = setup_test_db("reset_correct_code");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args(["--db", &db_path, "--test", "reset", "--code", "23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All records have been deleted."));

    for tech in ["Alex Haro", "Carlos Cisneros"] {
        otl(&home)
            .args(["--db", &db_path, "--test", "list", tech])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total hours: 00:00"));
    }
}

#[test]
fn test_reset_with_empty_code_is_denied() {
    let home = setup_home("reset_empty_code");
    let db_path = setup_test_db("reset_empty_code");
    init_db_with_data(&home, &db_path);

    otl(&home)
        .args(["--db", &db_path, "--test", "reset", "--code", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong confirmation code"));
}
