// SPDX-License-Identifier: MIT

//! Specs for export, merge-import, and clear.

use crate::prelude::*;

const DUMP: &str = r#"[
  {
    "id": "job-alpha000000000000001",
    "companyName": "Initech",
    "jobTitle": "Engineer",
    "jobUrl": "",
    "source": "Referral",
    "resumeUsed": "Standard Resume",
    "status": "applied",
    "dateApplied": "",
    "salary": "",
    "location": "",
    "createdAt": "2024-01-01T00:00:00Z",
    "updatedAt": "2024-01-01T00:00:00Z"
  },
  {
    "id": "job-bravo000000000000002",
    "companyName": "Hooli",
    "jobTitle": "PM",
    "source": "Recruiter",
    "resumeUsed": "Product Manager Resume",
    "status": "offer",
    "createdAt": "2024-01-02T00:00:00Z",
    "updatedAt": "2024-01-02T00:00:00Z"
  }
]"#;

#[test]
fn export_writes_a_dated_file_by_default() {
    let temp = Project::empty();
    temp.jt().args(&["add", "-c", "Acme", "-t", "Engineer"]).passes();

    let out = temp.jt().args(&["export"]).passes().stdout();
    assert!(out.contains("Exported 1 records"), "unexpected output:\n{}", out);

    let name = std::fs::read_dir(temp.path())
        .expect("list project dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .find(|n| n.starts_with("job-applications-") && n.ends_with(".json"))
        .expect("dated export file");
    let payload = temp.read(&name);
    let parsed: serde_json::Value = serde_json::from_str(&payload).expect("valid JSON");
    assert_eq!(parsed.as_array().expect("array").len(), 1);
}

#[test]
fn export_honors_an_explicit_path() {
    let temp = Project::empty();
    temp.jt().args(&["add", "-c", "Acme", "-t", "Engineer"]).passes();
    temp.jt().args(&["export", "-o", "backup.json"]).passes();
    assert!(temp.read("backup.json").contains("\"companyName\": \"Acme\""));
}

#[test]
fn import_merges_new_records_ahead_of_existing() {
    let temp = Project::empty();
    temp.jt().args(&["add", "-c", "Acme", "-t", "Engineer"]).passes();
    temp.file("dump.json", DUMP);

    temp.jt()
        .args(&["import", "dump.json", "-y"])
        .passes()
        .stdout_has("Imported 2 new records (3 total)");

    let out = temp.jt().args(&["list"]).passes();
    out.stdout_has("Acme");
    out.stdout_has("Initech");
    out.stdout_has("Hooli");
}

#[test]
fn import_keeps_existing_records_on_id_collision() {
    let temp = Project::empty();
    temp.file("dump.json", DUMP);
    temp.jt().args(&["import", "dump.json", "-y"]).passes();

    let id = temp.id_of("Initech");
    temp.jt().args(&["edit", &id, "--salary", "$200k"]).passes();

    // Same dump again: nothing new, local edit survives
    temp.jt()
        .args(&["import", "dump.json", "-y"])
        .passes()
        .stdout_has("Imported 0 new records (2 total)");
    temp.jt().args(&["show", &id]).passes().stdout_has("$200k");
}

#[test]
fn import_rejects_a_non_array_payload() {
    let temp = Project::empty();
    temp.file("bad.json", r#"{"companyName": "Acme"}"#);
    temp.jt()
        .args(&["import", "bad.json", "-y"])
        .fails()
        .stderr_has("invalid file format");
}

#[test]
fn import_rejects_malformed_json() {
    let temp = Project::empty();
    temp.file("bad.json", "not json at all");
    temp.jt().args(&["import", "bad.json", "-y"]).fails().stderr_has("invalid file format");
}

#[test]
fn failed_import_leaves_the_store_untouched() {
    let temp = Project::empty();
    temp.jt().args(&["add", "-c", "Acme", "-t", "Engineer"]).passes();
    temp.file("bad.json", "[{]");
    temp.jt().args(&["import", "bad.json", "-y"]).fails();
    temp.jt().args(&["list"]).passes().stdout_has("Acme");
}

#[test]
fn import_prompts_before_merging() {
    let temp = Project::empty();
    temp.file("dump.json", DUMP);
    temp.jt()
        .args(&["import", "dump.json"])
        .stdin("n\n")
        .passes()
        .stdout_has("Cancelled");
    temp.jt().args(&["list"]).passes().stdout_lacks("Initech");
}

#[test]
fn exported_records_reimport_cleanly() {
    let temp = Project::empty();
    temp.jt().args(&["add", "-c", "Acme", "-t", "Engineer"]).passes();
    temp.jt().args(&["export", "-o", "backup.json"]).passes();
    temp.jt().args(&["clear", "-y"]).passes();

    temp.jt()
        .args(&["import", "backup.json", "-y"])
        .passes()
        .stdout_has("Imported 1 new records (1 total)");
    temp.jt().args(&["list"]).passes().stdout_has("Acme");
}

#[test]
fn clear_prompts_and_then_empties_everything() {
    let temp = Project::empty();
    temp.jt().args(&["add", "-c", "Acme", "-t", "Engineer"]).passes();

    temp.jt().args(&["clear"]).stdin("n\n").passes().stdout_has("Cancelled");
    temp.jt().args(&["list"]).passes().stdout_has("Acme");

    temp.jt().args(&["clear", "-y"]).passes().stdout_has("Cleared 1 records");
    temp.jt().args(&["list"]).passes().stdout_lacks("Acme");

    let json = temp.jt().args(&["stats", "--format", "json"]).passes().json();
    assert_eq!(json["total"], 0);
}
