//! End-to-end runs of the `syntax_tour` binary with a pinned clock.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_syntax_tour"))
}

// Saturday morning, local time.
const SATURDAY_MORNING: &str = "2023-05-13 09:00:00";
// Wednesday afternoon, local time.
const WEDNESDAY_AFTERNOON: &str = "2023-05-10 15:00:00";

const FULL_TRANSCRIPT: &str = "\
hello world
golang
1+1 = 2
7.0/3.0 = 2.3333333333333335
false
true
false

CASE 3
initial
1 2
true
0
short

CASE 4 - Constant
S =  constant
M =  600000000000
M int64 =  600000000000
N math =  -0.28470407323754404

CASE 5 - FOR
1
2
3
7
8
9
loop
1
3
5

CASE 6 - IF
8 is even
8 is divisible by 4
-3 is negative

CASE 7 - switch
Write 2 as two
It's the weekend
It's before noon
I'm a bool true
I'm an int 1
Don't know type str hey

CASE 8 - arrays
emp: [0, 0, 0, 0, 0]
set: [0, 0, 0, 0, 100]
get: 100
len: 5
dcl: [1, 2, 3, 4, 5]
2d: [[0, 1, 2], [1, 2, 3]]
";

#[test]
fn shows_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("syntax_tour"));
}

#[test]
fn full_run_matches_the_transcript() {
    cmd()
        .args(["--at", SATURDAY_MORNING])
        .assert()
        .success()
        .stdout(predicate::str::diff(FULL_TRANSCRIPT));
}

#[test]
fn weekday_afternoon_flips_both_clock_branches() {
    cmd()
        .args(["--at", WEDNESDAY_AFTERNOON, "--only", "switches", "--no-headers"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Write 2 as two\n\
             It's a weekday\n\
             It's after noon\n\
             I'm a bool true\n\
             I'm an int 1\n\
             Don't know type str hey\n",
        ));
}

#[test]
fn only_subset_runs_in_canonical_order() {
    cmd()
        .args(["--only", "arrays,hello", "--no-headers"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "hello world\n\
             emp: [0, 0, 0, 0, 0]\n\
             set: [0, 0, 0, 0, 100]\n\
             get: 100\n\
             len: 5\n\
             dcl: [1, 2, 3, 4, 5]\n\
             2d: [[0, 1, 2], [1, 2, 3]]\n",
        ));
}

#[test]
fn list_names_every_demonstration() {
    let mut assert = cmd().arg("--list").assert().success();
    for name in [
        "hello",
        "values",
        "variables",
        "constants",
        "loops",
        "conditionals",
        "switches",
        "arrays",
    ] {
        assert = assert.stdout(predicate::str::contains(name));
    }
}

#[test]
fn rejects_an_unparseable_instant() {
    cmd()
        .args(["--at", "noonish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse datetime"));
}
