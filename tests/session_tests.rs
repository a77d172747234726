// Interactive session tests (no terminal required)

use pnpl::ui::session::{LineKind, Session, SessionFlow};

fn lines_of(session: &Session, kind: LineKind) -> Vec<String> {
    session
        .transcript()
        .iter()
        .filter(|line| line.kind == kind)
        .map(|line| line.text.clone())
        .collect()
}

#[test]
fn test_welcome_message() {
    let session = Session::new(8).expect("Session creation failed");
    let info = lines_of(&session, LineKind::Info);

    assert!(info[0].starts_with("Welcome to the PNPL sandbox!"));
    assert_eq!(session.command_number(), 1);
}

#[test]
fn test_tape_persists_between_programs() {
    let mut session = Session::new(8).unwrap();

    assert_eq!(session.submit("216"), SessionFlow::Continue); // "++"
    assert_eq!(session.submit("216"), SessionFlow::Continue);

    assert_eq!(session.interpreter().tape().get(0), 4);
    assert_eq!(session.command_number(), 3);
}

#[test]
fn test_bf_command_prints_integer_and_runs() {
    let mut session = Session::new(8).unwrap();
    session.submit("bf ++");

    assert!(lines_of(&session, LineKind::Info).contains(&"216".to_string()));
    assert_eq!(session.interpreter().tape().get(0), 2);
}

#[test]
fn test_program_output_is_recorded() {
    let mut session = Session::new(8).unwrap();
    session.submit("bf ++++++++[>++++++++<-]>+.");

    assert_eq!(lines_of(&session, LineKind::Output), vec!["A".to_string()]);
}

#[test]
fn test_dump_and_reset() {
    let mut session = Session::new(4).unwrap();
    session.submit("bf >+++");
    session.submit("dump");

    assert_eq!(lines_of(&session, LineKind::Output), vec!["0 3 0 0".to_string()]);

    session.submit("reset");
    assert_eq!(session.interpreter().tape().cells(), &[0, 0, 0, 0]);
    assert_eq!(session.interpreter().pointer(), 0);
}

#[test]
fn test_mem_resizes_and_keeps_cells() {
    let mut session = Session::new(4).unwrap();
    session.submit("bf +>++");
    session.submit("mem 6");

    assert_eq!(session.interpreter().tape().cells(), &[1, 2, 0, 0, 0, 0]);
    assert_eq!(session.memory_size(), 6);

    // reset uses the new size
    session.submit("reset");
    assert_eq!(session.interpreter().memory_size(), 6);
}

#[test]
fn test_invalid_inputs_are_reported() {
    let mut session = Session::new(4).unwrap();
    session.submit("hello");
    session.submit("mem");
    session.submit("mem x");
    session.submit("bf");
    session.submit("0");

    let errors = lines_of(&session, LineKind::Error);
    assert_eq!(
        errors,
        vec![
            "Invalid PNPL program, not an integer.".to_string(),
            "The `mem` command requires a memory size as argument.".to_string(),
            "Invalid memory size, not an integer.".to_string(),
            "The `bf` command requires a Brainfuck program as argument.".to_string(),
            "Invalid PNPL program, not an integer.".to_string(),
        ]
    );
}

#[test]
fn test_runtime_error_is_reported_and_session_continues() {
    let mut session = Session::new(4).unwrap();
    session.submit("bf +]");

    let errors = lines_of(&session, LineKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Unbalanced loop"));

    session.submit("bf +");
    assert_eq!(session.interpreter().tape().get(0), 2);
}

#[test]
fn test_step_limit_stops_infinite_loop() {
    let mut session = Session::new(4).unwrap().with_step_limit(Some(1_000));
    session.submit("bf +[]");

    let errors = lines_of(&session, LineKind::Error);
    assert_eq!(errors, vec!["Stopped after 1000 steps.".to_string()]);
}

#[test]
fn test_blank_line_is_ignored() {
    let mut session = Session::new(4).unwrap();
    let before = session.transcript().len();
    session.submit("   ");

    assert_eq!(session.transcript().len(), before);
    assert_eq!(session.command_number(), 1);
}

#[test]
fn test_exit() {
    let mut session = Session::new(4).unwrap();
    assert_eq!(session.submit("exit"), SessionFlow::Exit);
}

#[test]
fn test_prompt_echo() {
    let mut session = Session::new(4).unwrap();
    session.submit("help");

    assert_eq!(lines_of(&session, LineKind::Prompt), vec!["[1] help".to_string()]);
}

#[test]
fn test_large_prime_program_is_rejected() {
    let mut session = Session::new(16).unwrap();
    session.submit("bf +");

    // 2^61 - 1 is prime, far past the trial division limit
    assert_eq!(session.submit("2305843009213693951"), SessionFlow::Continue);

    let errors = lines_of(&session, LineKind::Error);
    assert_eq!(
        errors,
        vec!["Invalid program encoding: program too large to factor".to_string()]
    );
    // The previous tape is untouched and the session keeps going
    assert_eq!(session.interpreter().tape().get(0), 1);
    session.submit("bf +");
    assert_eq!(session.interpreter().tape().get(0), 2);
}

#[test]
fn test_factor_limit_still_accepts_encoded_programs() {
    let mut session = Session::new(4).unwrap().with_factor_limit(100);
    session.submit("bf ++++++++[>++++++++<-]>+.");

    assert!(lines_of(&session, LineKind::Error).is_empty());
    assert_eq!(lines_of(&session, LineKind::Output), vec!["A".to_string()]);
}
