use predicates::str::contains;

mod common;
use common::{setup_settings_path, trp, write_settings};

#[test]
fn report_fails_without_settings_file() {
    let settings = setup_settings_path("missing");

    trp()
        .args(["--settings", &settings, "report", "--company", "acme"])
        .assert()
        .failure()
        .stderr(contains("Settings file not found"));
}

#[test]
fn report_requires_a_company() {
    let settings = setup_settings_path("no_company");
    write_settings(&settings);

    trp()
        .args(["--settings", &settings, "report"])
        .assert()
        .failure()
        .stderr(contains("--company"));
}

#[test]
fn report_rejects_month_out_of_range() {
    let settings = setup_settings_path("bad_month");
    write_settings(&settings);

    trp()
        .args([
            "--settings",
            &settings,
            "report",
            "--company",
            "acme",
            "--month",
            "13",
        ])
        .assert()
        .failure();
}

#[test]
fn init_writes_a_settings_template() {
    let settings = setup_settings_path("init_template");

    trp()
        .args(["--settings", &settings, "init"])
        .assert()
        .success()
        .stdout(contains("Settings template"));

    let content = std::fs::read_to_string(&settings).unwrap();
    assert!(content.contains("api_key"));
    assert!(content.contains("Januar"));
    assert!(content.contains("Dezember"));
}

#[test]
fn config_check_flags_empty_api_key() {
    let settings = setup_settings_path("check_empty");

    trp()
        .args(["--settings", &settings, "init"])
        .assert()
        .success();

    trp()
        .args(["--settings", &settings, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("api_key is empty"));
}

#[test]
fn config_check_accepts_complete_settings() {
    let settings = setup_settings_path("check_ok");
    write_settings(&settings);

    trp()
        .args(["--settings", &settings, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Settings OK"));
}

#[test]
fn config_print_shows_the_file() {
    let settings = setup_settings_path("print");
    write_settings(&settings);

    trp()
        .args(["--settings", &settings, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_key"))
        .stdout(contains("list_id"));
}
