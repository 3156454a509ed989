// SPDX-License-Identifier: MIT

//! Specs for the record lifecycle: add, edit, move, delete, notes.

use crate::prelude::*;

fn add(temp: &Project, company: &str, title: &str) {
    temp.jt()
        .args(&["add", "--company", company, "--title", title])
        .passes();
}

#[test]
fn add_creates_and_persists_a_record() {
    let temp = Project::empty();
    temp.jt()
        .args(&["add", "-c", "Acme Corp", "-t", "Platform Engineer"])
        .passes()
        .stdout_has("Added Acme Corp - Platform Engineer")
        .stdout_has("to saved");

    // Survives across invocations
    temp.jt().args(&["list"]).passes().stdout_has("Acme Corp");

    // Persisted as a camelCase JSON array
    let raw = temp.read("records.json");
    assert!(raw.contains("\"companyName\""));
    assert!(raw.trim_start().starts_with('['));
}

#[test]
fn add_defaults_status_source_and_resume() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");
    temp.jt()
        .args(&["show", &id])
        .passes()
        .stdout_has("saved")
        .stdout_has("LinkedIn")
        .stdout_has("Standard Resume");
}

#[test]
fn add_rejects_blank_company() {
    let temp = Project::empty();
    temp.jt()
        .args(&["add", "-c", "   ", "-t", "Engineer"])
        .fails()
        .stderr_has("company_name");
}

#[test]
fn newest_record_lists_first_within_a_column() {
    let temp = Project::empty();
    add(&temp, "First Co", "Engineer");
    add(&temp, "Second Co", "Engineer");

    let out = temp.jt().args(&["list", "--status", "saved"]).passes().stdout();
    let first = out.find("Second Co").expect("Second Co listed");
    let second = out.find("First Co").expect("First Co listed");
    assert!(first < second, "newest record should list first:\n{}", out);
}

#[test]
fn show_resolves_a_unique_id_prefix() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");
    let prefix = &id[..4];
    temp.jt().args(&["show", prefix]).passes().stdout_has("Acme - Engineer");
}

#[test]
fn edit_changes_only_the_given_fields() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");

    temp.jt()
        .args(&["edit", &id, "--salary", "$150k", "--location", "Remote"])
        .passes()
        .stdout_has("Updated");

    temp.jt()
        .args(&["show", &id])
        .passes()
        .stdout_has("Acme")
        .stdout_has("$150k")
        .stdout_has("Remote");
}

#[test]
fn edit_with_no_flags_changes_nothing() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");
    temp.jt().args(&["edit", &id]).passes().stdout_has("Nothing to change");
}

#[test]
fn edit_unknown_id_is_a_notice_not_an_error() {
    let temp = Project::empty();
    temp.jt()
        .args(&["edit", "job-nope", "--salary", "$1"])
        .passes()
        .stdout_has("No record matching 'job-nope'");
}

#[test]
fn move_relocates_between_columns() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");

    temp.jt().args(&["move", &id, "interview"]).passes().stdout_has("to interview");

    temp.jt()
        .args(&["list", "--status", "interview"])
        .passes()
        .stdout_has("Acme");
    temp.jt()
        .args(&["list", "--status", "saved"])
        .passes()
        .stdout_lacks("Acme");
}

#[test]
fn move_accepts_any_status_transition() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");

    // No pipeline enforcement: offer straight back to saved is fine
    temp.jt().args(&["move", &id, "offer"]).passes();
    temp.jt().args(&["move", &id, "saved"]).passes();
    temp.jt().args(&["list", "--status", "saved"]).passes().stdout_has("Acme");
}

#[test]
fn move_rejects_unknown_status() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");
    temp.jt().args(&["move", &id, "hired"]).fails().stderr_has("unknown status");
}

#[test]
fn delete_prompts_and_declines_by_default() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");

    temp.jt().args(&["delete", &id]).stdin("n\n").passes().stdout_has("Aborted");
    temp.jt().args(&["list"]).passes().stdout_has("Acme");
}

#[test]
fn delete_with_yes_removes_the_record() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    add(&temp, "Globex", "Analyst");
    let id = temp.id_of("Acme");

    temp.jt().args(&["delete", &id, "-y"]).passes().stdout_has("Deleted");

    let out = temp.jt().args(&["list"]).passes();
    out.stdout_lacks("Acme");
    out.stdout_has("Globex");
}

#[test]
fn delete_unknown_id_is_a_notice_not_an_error() {
    let temp = Project::empty();
    temp.jt()
        .args(&["delete", "job-nope", "-y"])
        .passes()
        .stdout_has("No record matching");
}

#[test]
fn note_add_shows_up_newest_first() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");

    temp.jt().args(&["note", "add", &id, "Phone screen booked"]).passes();
    temp.jt().args(&["note", "add", &id, "Onsite scheduled"]).passes();

    let out = temp.jt().args(&["show", &id]).passes().stdout();
    let newest = out.find("Onsite scheduled").expect("newest note shown");
    let older = out.find("Phone screen booked").expect("older note shown");
    assert!(newest < older, "notes should list newest first:\n{}", out);
}

#[test]
fn note_add_rejects_blank_messages() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");
    temp.jt()
        .args(&["note", "add", &id, "   "])
        .fails()
        .stderr_has("must not be empty");
}

#[test]
fn note_rm_removes_exactly_one_note() {
    let temp = Project::empty();
    add(&temp, "Acme", "Engineer");
    let id = temp.id_of("Acme");

    temp.jt().args(&["note", "add", &id, "keep me"]).passes();
    let noted = temp.jt().args(&["note", "add", &id, "drop me"]).passes().stdout();
    // "Noted (<short-id>)"
    let update_id = noted
        .trim()
        .trim_start_matches("Noted (")
        .trim_end_matches(')')
        .to_string();

    temp.jt().args(&["note", "rm", &id, &update_id]).passes().stdout_has("Removed note");

    let out = temp.jt().args(&["show", &id]).passes();
    out.stdout_lacks("drop me");
    out.stdout_has("keep me");
}

#[test]
fn note_rm_ambiguous_prefix_removes_nothing() {
    let temp = Project::empty();
    temp.file(
        "records.json",
        r#"[{
            "id": "job-seed0000000000000001",
            "companyName": "Acme",
            "jobTitle": "Engineer",
            "source": "LinkedIn",
            "resumeUsed": "Standard Resume",
            "status": "saved",
            "notes": "",
            "updates": [
                {"id": "upd-aaaa1111", "date": "2024-01-02T00:00:00Z", "message": "first"},
                {"id": "upd-aaaa2222", "date": "2024-01-01T00:00:00Z", "message": "second"}
            ],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }]"#,
    );

    temp.jt()
        .args(&["note", "rm", "seed", "aaaa"])
        .passes()
        .stdout_has("No note matching 'aaaa'");

    // A prefix unique to one update still resolves
    temp.jt().args(&["note", "rm", "seed", "aaaa2"]).passes().stdout_has("Removed note");
    let out = temp.jt().args(&["show", "seed"]).passes();
    out.stdout_has("first");
    out.stdout_lacks("second");
}
