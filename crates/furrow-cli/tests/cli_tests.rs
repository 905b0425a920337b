use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn furrow_cmd() -> Command {
    let mut cmd = Command::cargo_bin("furrow").expect("Failed to find furrow binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_prompts_for_name_and_welcomes() {
    furrow_cmd()
        .write_stdin("Robin\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter your name:\n"))
        .stdout(predicate::str::contains("Welcome to Furrow Valley, Robin!"))
        .stdout(predicate::str::contains(
            "Commands: plant <cropName>, harvest, pass, quit",
        ));
}

#[test]
fn test_cli_name_flag_skips_prompt() {
    furrow_cmd()
        .args(["--name", "Robin"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your name:").not())
        .stdout(predicate::str::contains("Player: Robin | Money: 0 | Energy: 100"));
}

#[test]
fn test_cli_initial_farm() {
    furrow_cmd()
        .write_stdin("Robin\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Crops on Farm:\n\
             Potato - 5 days to grow\n\
             Blueberry - 7 days to grow\n\
             Pumpkin - 1 days to grow\n\
             Cranberry - 6 days to grow\n\
             Winter Root - 8 days to grow\n",
        ));
}

#[test]
fn test_cli_pass_and_harvest() {
    furrow_cmd()
        .write_stdin("Robin\npass\nharvest\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A day has passed on your farm."))
        .stdout(predicate::str::contains("Pumpkin - Ready to harvest"))
        .stdout(predicate::str::contains(
            "You harvested crops and earned 50 gold.",
        ))
        .stdout(predicate::str::contains("Player: Robin | Money: 50 | Energy: 90"));
}

#[test]
fn test_cli_quit_has_no_further_output() {
    furrow_cmd()
        .write_stdin("Robin\nquit\npass\n")
        .assert()
        .code(0)
        .stdout(predicate::str::ends_with("Enter command:\n"))
        .stdout(predicate::str::contains("A day has passed").not());
}

#[test]
fn test_cli_end_of_input_exits_cleanly() {
    furrow_cmd()
        .write_stdin("Robin\npass\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Energy: 90"));
}

#[test]
fn test_cli_empty_input_exits_cleanly() {
    furrow_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Furrow Valley, !"));
}

#[test]
fn test_cli_rejected_commands() {
    furrow_cmd()
        .write_stdin("Robin\nwater\nplant\nplant Potato\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Usage: plant <cropName>"))
        .stdout(predicate::str::contains(
            "You don't have Potato in your inventory.",
        ));
}

#[test]
fn test_cli_out_of_energy() {
    let script = format!("Robin\n{}quit\n", "pass\n".repeat(10));

    furrow_cmd()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You are out of energy and cannot work anymore today.",
        ))
        .stdout(predicate::str::contains("Energy: 0\n"))
        .stdout(predicate::str::contains("Energy: -").not());
}

#[test]
fn test_cli_verbs_are_case_insensitive() {
    furrow_cmd()
        .write_stdin("Robin\nPASS\nHarvest\nQUIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You harvested crops and earned 50 gold.",
        ));
}

#[test]
fn test_cli_survives_non_utf8_input() {
    let mut script = b"Robin\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"pass\nquit\n");

    furrow_cmd()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Energy: 90"));
}
