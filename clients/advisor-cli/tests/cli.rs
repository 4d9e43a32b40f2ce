use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("advisor").unwrap();
    cmd.env_remove("ADVISOR_JSON")
        .env_remove("ADVISOR_CASHOUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn advise_double_down() {
    cmd()
        .args(["advise", "--dealer", "6", "--player", "5", "6"])
        .assert()
        .success()
        .stdout("Recommended Action: Double Down\n");
}

#[test]
fn advise_comma_separated_cards() {
    cmd()
        .args(["advise", "--dealer", "10", "--player", "9,9"])
        .assert()
        .success()
        .stdout("Recommended Action: Stand\n");
}

#[test]
fn advise_cashout_from_env() {
    cmd()
        .env("ADVISOR_CASHOUT", "true")
        .args(["advise", "--dealer", "5", "--player", "10", "6"])
        .assert()
        .success()
        .stdout("Recommended Action: Cash Out\n");
}

#[test]
fn advise_json_output() {
    cmd()
        .args(["--json", "advise", "--dealer", "5", "--player", "A", "7"])
        .assert()
        .success()
        .stdout(contains(r#""recommendation":"Double Down""#))
        .stdout(contains(r#""player_total":18"#));
}

#[test]
fn advise_unknown_dealer_warns_but_answers() {
    cmd()
        .args(["advise", "--dealer", "X", "--player", "10", "6"])
        .assert()
        .success()
        .stdout("Recommended Action: Hit\n")
        .stderr(contains("not recognized"));
}

#[test]
fn batch_from_stdin() {
    cmd()
        .arg("batch")
        .write_stdin(concat!(
            r#"{"dealer_card":"6","player_cards":["A","A"]}"#,
            "\n",
            r#"{"dealer_card":"10","player_cards":["10","K"]}"#,
            "\n"
        ))
        .assert()
        .success()
        .stdout("Recommended Action: Split\nRecommended Action: Stand\n");
}

#[test]
fn batch_warns_about_unknown_cards() {
    cmd()
        .arg("batch")
        .write_stdin(concat!(r#"{"dealer_card":"X","player_cards":["10","6"]}"#, "\n"))
        .assert()
        .success()
        .stdout("Recommended Action: Hit\n")
        .stderr(contains("Dealer card \"X\" not recognized"));
}

#[test]
fn batch_rejects_malformed_line() {
    cmd()
        .arg("batch")
        .write_stdin("{\"dealer_card\":\"6\"\n")
        .assert()
        .failure()
        .stderr(contains("line 1"));
}

#[test]
fn ranks_listing() {
    cmd()
        .arg("ranks")
        .assert()
        .success()
        .stdout(contains("A\t11"))
        .stdout(contains("K\t10"));
}
