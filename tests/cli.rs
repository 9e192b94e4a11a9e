use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("isbn")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

// Validation happens before any request is made so these never touch the network.
#[test]
fn bad_checksum_exits_with_one() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("isbn")?;

    cmd.arg("978-0-306-40615-8");
    cmd.assert()
        .code(1)
        .stdout(contains("error: not a valid SBN, ISBN-10 or ISBN-13 number"));

    Ok(())
}

#[test]
fn bare_sbn_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("isbn")?;

    cmd.arg("306406152");
    cmd.assert()
        .code(1)
        .stdout(contains("error: not a valid SBN, ISBN-10 or ISBN-13 number"));

    Ok(())
}

#[test]
fn no_digits_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("isbn")?;

    cmd.args(["--quiet", "not an isbn"]);
    cmd.assert()
        .code(1)
        .stdout(contains("error: not a valid SBN, ISBN-10 or ISBN-13 number"));

    Ok(())
}
