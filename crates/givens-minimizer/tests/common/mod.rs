#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write a fake generator that succeeds for every budget >= `floor`.
///
/// Each invocation appends its arguments to `calls.log` next to the script.
/// Successful runs print some solver chatter followed by a 13-line grid
/// whose first row mentions the budget. With `lie_on_failure`, failing runs
/// still print a full grid before exiting non-zero.
pub fn write_generator(dir: &Path, floor: i64, lie_on_failure: bool) -> PathBuf {
    let log = dir.join("calls.log");
    let grid = r#"print_grid() {
  echo "+-------+-------+-------+"
  echo "| givens $1"
  echo "|       |       |       |"
  echo "|       |       |       |"
  echo "+-------+-------+-------+"
  echo "|       |       |       |"
  echo "|       |       |       |"
  echo "|       |       |       |"
  echo "+-------+-------+-------+"
  echo "|       |       |       |"
  echo "|       |       |       |"
  echo "|       |       |       |"
  echo "+-------+-------+-------+"
}
"#;
    let on_failure = if lie_on_failure {
        "print_grid \"$givens\"\n  exit 1"
    } else {
        "echo \"s UNSATISFIABLE\"\n  exit 20"
    };
    let script = format!(
        "#!/bin/sh\n\
         echo \"$@\" >> '{log}'\n\
         {grid}\
         givens=\"\"\n\
         while [ $# -gt 0 ]; do\n\
           case \"$1\" in\n\
             --givens) givens=\"$2\"; shift 2 ;;\n\
             *) shift ;;\n\
           esac\n\
         done\n\
         echo \"c solving for $givens givens\"\n\
         echo \"c parsed formula\"\n\
         if [ \"$givens\" -lt {floor} ]; then\n  {on_failure}\nfi\n\
         echo \"s SATISFIABLE\"\n\
         print_grid \"$givens\"\n",
        log = log.display(),
        grid = grid,
        floor = floor,
        on_failure = on_failure,
    );

    let path = dir.join("generator.sh");
    fs::write(&path, script).expect("write generator script");
    path
}

/// Arguments of every recorded invocation, one entry per call
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .map(|log| log.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
