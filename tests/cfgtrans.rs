// Integration tests for the cfgtrans binary
//
//  Copyright (C) 2014-2022 Ryan Specialty Group, LLC.
//
//  This file is part of cfgtrans.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::{fs, path::PathBuf, process::Command};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Fresh output path,
///   removing any file left behind by a previous run.
fn dest(name: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn translate_invalid_argument() -> TestResult {
    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg("-q");
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Unrecognized option:"));

    Ok(())
}

#[test]
fn translate_missing_input() -> TestResult {
    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("INPUT"));

    Ok(())
}

#[test]
fn translate_missing_output() -> TestResult {
    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg(fixture("valid.xml"));
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("OUTPUT"));

    Ok(())
}

#[test]
fn translate_help() -> TestResult {
    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("INPUT OUTPUT"));

    Ok(())
}

#[test]
fn translate_input_file_does_not_exist() -> TestResult {
    let out = dest("does-not-exist.conf");

    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg("does-not-exist.xml").arg(&out);
    cmd.assert()
        .failure()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("does-not-exist.xml"));

    assert!(!out.exists());

    Ok(())
}

#[test]
fn translate_valid_document() -> TestResult {
    let out = dest("valid.conf");

    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg(fixture("valid.xml")).arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("translation complete"));

    assert_eq!(
        "width is 5;\n\
         greeting is @\"hello\";\n\
         area is 25;\n\
         window -> {\n\
         title -> @\"main\".\n\
         margin -> 3.\n\
         size -> {\n\
         w -> 5.\n\
         h -> -3.\n\
         }.\n\
         }",
        fs::read_to_string(&out)?,
    );

    Ok(())
}

#[test]
fn translate_invalid_key() -> TestResult {
    let out = dest("invalid-key.conf");

    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg(fixture("invalid-key.xml")).arg(&out);
    cmd.assert()
        .failure()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("error: invalid key `1bad`"));

    assert!(!out.exists());

    Ok(())
}

#[test]
fn translate_unknown_token() -> TestResult {
    let out = dest("unknown-token.conf");

    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg(fixture("unknown-token.xml")).arg(&out);
    cmd.assert()
        .failure()
        .code(exitcode::DATAERR)
        .stderr(
            predicate::str::contains("unknown token `UNKNOWN`")
                .and(predicate::str::contains("help:")),
        );

    assert!(!out.exists());

    Ok(())
}

#[test]
fn translate_malformed_xml() -> TestResult {
    let out = dest("malformed.conf");

    let mut cmd = Command::cargo_bin("cfgtrans")?;
    cmd.arg(fixture("malformed.xml")).arg(&out);
    cmd.assert()
        .failure()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("fatal: failed to translate"));

    assert!(!out.exists());

    Ok(())
}
