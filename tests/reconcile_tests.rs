mod common;
use common::{EXPORT_HEADER, abg, export_csv, find_report, setup_work_dir, write_csv};
use predicates::str::contains;
use std::fs;

#[test]
fn test_reconcile_reports_only_inactive_employees() {
    let dir = setup_work_dir("reconcile_inactive");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&[
            "Anfrage,Mo. 03.11.25,Käfer Messe,11:00 - 16:00h,Käfer Messe – 11:00 - 16:00h am Mo. 03.11.25,nein,\"Müller, Anna\",14655,+49 160 1111111,",
            "Keine Anfragen,Di. 04.11.25,,,Keine Anfragen am Di. 04.11.25,,\"Weber, Tom\",14002,+49 160 2222222,",
        ]),
    );
    write_csv(
        &dir,
        "dienstplaene_2025-11-03.csv",
        &export_csv(&[
            "Dienst,Mo. 03.11.25,Käfer Messe,08:00 - 12:00h,Käfer Messe – 08:00 - 12:00h am Mo. 03.11.25,bestätigt,\"Schmidt, Karl\",14001,,",
            "Keine Schichten,Di. 04.11.25,,,Keine Schichten am Di. 04.11.25,,\"Weber, Tom\",14002,+49 160 2222222,",
        ]),
    );

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success()
        .stdout(contains("1 Mitarbeitende ohne Anfragen & Dienste"));

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    assert!(content.contains("Weber, Tom"));
    assert!(!content.contains("Müller, Anna"));
    assert!(!content.contains("Schmidt, Karl"));
    // row content comes from the requests export first
    assert!(content.contains("Keine Anfragen,Di. 04.11.25"));
    assert!(content.contains("+49 160 2222222"));
}

#[test]
fn test_reconcile_keeps_existing_wording() {
    let dir = setup_work_dir("reconcile_wording");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&[
            "Anfrage,Mo. 03.11.25,,,–,ja,\"Müller, Anna\",14655,,",
        ]),
    );
    write_csv(
        &dir,
        "dienstplaene_2025-11-03.csv",
        &export_csv(&[
            "Keine Schichten,Di. 04.11.25,,,Keine Schichten am Di. 04.11.25,,\"Weber, Tom\",14002,,",
        ]),
    );

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success();

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    // populated cells pass through, no placeholder substitution
    assert!(content.contains("Keine Schichten,Di. 04.11.25,,,Keine Schichten am Di. 04.11.25"));
}

#[test]
fn test_reconcile_fills_placeholders_for_empty_cells() {
    let dir = setup_work_dir("reconcile_placeholders");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&[",,,,,,\"Vogel, Lena\",14999,,"]),
    );
    write_csv(&dir, "dienstplaene_2025-11-03.csv", &export_csv(&[]));

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success();

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    assert!(content.contains(
        "Keine Anfragen,,,,Keine Anfragen oder Dienste gefunden,,\"Vogel, Lena\",14999,,"
    ));
}

#[test]
fn test_reconcile_header_only_when_everyone_active() {
    let dir = setup_work_dir("reconcile_all_active");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&["Anfrage,Mo. 03.11.25,,,–,,\"Müller, Anna\",14655,,"]),
    );
    write_csv(
        &dir,
        "dienstplaene_2025-11-03.csv",
        &export_csv(&["Dienst,Mo. 03.11.25,,,–,,\"Schmidt, Karl\",14001,,"]),
    );

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success()
        .stdout(contains("0 Mitarbeitende ohne Anfragen & Dienste"));

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    assert_eq!(content.trim_end(), EXPORT_HEADER);
}

#[test]
fn test_reconcile_sorts_output_by_name() {
    let dir = setup_work_dir("reconcile_sorted");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&[
            "Keine Anfragen,Di. 04.11.25,,,x,,Zimmermann,3,,",
            "Keine Anfragen,Di. 04.11.25,,,x,,Albrecht,1,,",
        ]),
    );
    write_csv(
        &dir,
        "dienstplaene_2025-11-03.csv",
        &export_csv(&["Keine Schichten,Di. 04.11.25,,,x,,Meier,2,,"]),
    );

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success();

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    let albrecht = content.find("Albrecht").expect("Albrecht in report");
    let meier = content.find("Meier").expect("Meier in report");
    let zimmermann = content.find("Zimmermann").expect("Zimmermann in report");
    assert!(albrecht < meier);
    assert!(meier < zimmermann);
}

#[test]
fn test_reconcile_any_active_row_excludes_employee() {
    let dir = setup_work_dir("reconcile_any_active");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&[
            "Keine Anfragen,Di. 04.11.25,,,x,,\"Weber, Tom\",14002,,",
            "  URLAUB ,Mi. 05.11.25,,,Urlaub am Mi. 05.11.25,,\"Weber, Tom\",14002,,",
        ]),
    );
    write_csv(&dir, "dienstplaene_2025-11-03.csv", &export_csv(&[]));

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success()
        .stdout(contains("0 Mitarbeitende ohne Anfragen & Dienste"));
}

#[test]
fn test_reconcile_first_row_wins_per_employee() {
    let dir = setup_work_dir("reconcile_first_row");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&[
            "Keine Anfragen,Di. 04.11.25,,,Keine Anfragen am Di. 04.11.25,,\"Weber, Tom\",14002,,",
            "Keine Anfragen,Mi. 05.11.25,,,Keine Anfragen am Mi. 05.11.25,,\"Weber, Tom\",14002,,",
        ]),
    );
    write_csv(&dir, "dienstplaene_2025-11-03.csv", &export_csv(&[]));

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success();

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    assert!(content.contains("Di. 04.11.25"));
    assert!(!content.contains("Mi. 05.11.25"));
}

#[test]
fn test_reconcile_uses_newest_export() {
    let dir = setup_work_dir("reconcile_newest");
    write_csv(
        &dir,
        "anfragen_2025-10-01.csv",
        &export_csv(&["Keine Anfragen,Di. 04.11.25,,,x,,\"Alt, Anton\",1,,"]),
    );
    std::thread::sleep(std::time::Duration::from_millis(1100));
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&["Keine Anfragen,Di. 04.11.25,,,x,,\"Neu, Nora\",2,,"]),
    );
    write_csv(&dir, "dienstplaene_2025-11-03.csv", &export_csv(&[]));

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success()
        .stdout(contains("anfragen_2025-11-03.csv"));

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    assert!(content.contains("Neu, Nora"));
    assert!(!content.contains("Alt, Anton"));
}

#[test]
fn test_reconcile_explicit_files_override_discovery() {
    let dir = setup_work_dir("reconcile_explicit");
    let inputs = setup_work_dir("reconcile_explicit_inputs");
    let anfragen = write_csv(
        &inputs,
        "a.csv",
        &export_csv(&["Keine Anfragen,Di. 04.11.25,,,x,,\"Weber, Tom\",14002,,"]),
    );
    let dienste = write_csv(&inputs, "d.csv", &export_csv(&[]));

    abg()
        .args([
            "--export-dir",
            dir.to_str().unwrap(),
            "reconcile",
            "--anfragen",
            anfragen.to_str().unwrap(),
            "--dienste",
            dienste.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("Verglichen: a.csv vs. d.csv"));

    let report = find_report(&dir, "csv").expect("report written");
    let content = fs::read_to_string(report).expect("read report");
    assert!(content.contains("Weber, Tom"));
}

#[test]
fn test_reconcile_json_format() {
    let dir = setup_work_dir("reconcile_json");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&["Keine Anfragen,Di. 04.11.25,,,x,,\"Weber, Tom\",14002,,"]),
    );
    write_csv(&dir, "dienstplaene_2025-11-03.csv", &export_csv(&[]));

    abg()
        .args([
            "--export-dir",
            dir.to_str().unwrap(),
            "reconcile",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let report = find_report(&dir, "json").expect("json report written");
    let content = fs::read_to_string(report).expect("read report");
    assert!(content.contains("\"mitarbeiter\": \"Weber, Tom\""));
    assert!(content.contains("\"typ\": \"Keine Anfragen\""));
}

#[test]
fn test_reconcile_fails_without_inputs() {
    let dir = setup_work_dir("reconcile_missing");

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .failure()
        .stderr(contains("Keine Datei mit Präfix 'anfragen_'"));

    assert!(find_report(&dir, "csv").is_none());
}

#[test]
fn test_reconcile_prints_preview_table() {
    let dir = setup_work_dir("reconcile_preview");
    write_csv(
        &dir,
        "anfragen_2025-11-03.csv",
        &export_csv(&["Keine Anfragen,Di. 04.11.25,,,x,,\"Weber, Tom\",14002,+49 160 2222222,"]),
    );
    write_csv(&dir, "dienstplaene_2025-11-03.csv", &export_csv(&[]));

    abg()
        .args(["--export-dir", dir.to_str().unwrap(), "reconcile"])
        .assert()
        .success()
        .stdout(contains("Mitarbeiter"))
        .stdout(contains("Weber, Tom"));
}
