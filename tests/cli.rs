use assert_cmd::Command;

fn race_binary() -> Command {
    Command::cargo_bin("filigranadrome").unwrap()
}

#[test]
fn runs_a_full_race_from_stdin() {
    let assert = race_binary()
        .write_stdin("2\nspeedy\nturtle\n")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("*** Gran Carrera de Filigranas ***"));
    assert!(stdout.contains("* Standings:"));
    assert!(stdout.contains("crosses the finish line"));
    assert!(stdout.contains("* Detailed history:"));
}

#[test]
fn rejects_a_non_numeric_participant_count() {
    race_binary().write_stdin("lots\n").assert().failure();
}

#[test]
fn rejects_duplicate_names() {
    race_binary()
        .write_stdin("2\nSpeedy\nspeedy\n")
        .assert()
        .failure();
}
