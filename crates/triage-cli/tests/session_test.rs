//! Integration tests driving the interpreter through whole sessions.

use std::fs;

use triage_cli::{Flow, Interpreter};

fn session(lines: &[&str]) -> (Interpreter<Vec<u8>>, Vec<Flow>) {
    let mut interp = Interpreter::new(Vec::new());
    let flows = lines
        .iter()
        .map(|line| interp.execute_line(line).unwrap())
        .collect();
    (interp, flows)
}

/// Serves `count` patients and returns every name announced so far.
fn served(mut interp: Interpreter<Vec<u8>>, count: usize) -> Vec<String> {
    for _ in 0..count {
        interp.execute_line("next").unwrap();
    }
    let out = String::from_utf8(interp.into_output()).unwrap();
    out.lines()
        .filter_map(|l| l.strip_prefix("This patient will now be seen: "))
        .map(String::from)
        .collect()
}

#[test]
fn test_scenario_ties_break_by_arrival() {
    let (interp, _) = session(&[
        "add emergency Bob",
        "add immediate Alice",
        "add immediate Carl",
    ]);
    assert_eq!(served(interp, 3), vec!["Alice", "Carl", "Bob"]);
}

#[test]
fn test_scenario_change_priority() {
    let (interp, _) = session(&["add minimal Dan", "add immediate Eve", "change 1 immediate"]);
    assert_eq!(served(interp, 2), vec!["Dan", "Eve"]);
}

#[test]
fn test_save_then_reload_matches_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waiting.txt");

    let commands = [
        "add urgent Ann",
        "add immediate Ben",
        "add minimal Cy",
        "add urgent Di",
        "change 3 emergency",
        "next",
        "add immediate Ed",
    ];
    let (mut original, _) = session(&commands);
    original
        .execute_line(&format!("save {}", path.display()))
        .unwrap();
    let remaining = original.queue().len();

    let (reloaded, _) = session(&[&format!("load {}", path.display())]);
    assert_eq!(reloaded.queue().len(), remaining);

    // The original already announced one patient before saving.
    let expected = served(original, remaining);
    let actual = served(reloaded, remaining);
    assert_eq!(actual, expected[1..].to_vec());
}

#[test]
fn test_saved_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    session(&[
        "add minimal Zed Z",
        "add immediate Amy",
        &format!("save {}", path.display()),
    ]);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "add minimal Zed Z\nadd immediate Amy\n"
    );
}

#[test]
fn test_errors_never_end_session() {
    let (interp, flows) = session(&[
        "bogus",
        "next",
        "change 5 urgent",
        "load /definitely/not/here.txt",
        "add urgent",
        "add urgent Fay",
    ]);
    assert!(flows.iter().all(|f| *f == Flow::Continue));
    assert_eq!(interp.queue().len(), 1);
}

#[test]
fn test_quit_ends_session() {
    let (_, flows) = session(&["add urgent Ann", "quit"]);
    assert_eq!(flows, vec![Flow::Continue, Flow::Quit]);
}
