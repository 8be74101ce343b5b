//! Property tests for whole sessions.

use proptest::prelude::*;

use segee::{Outcome, Session, Variant};

fn command_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..20, -50i64..50).prop_map(|(i, v)| format!("s {} {}", i, v)),
        (0i64..20, -50i64..50).prop_map(|(i, v)| format!("a {} {}", i, v)),
        (-2i64..20, -2i64..20).prop_map(|(l, r)| format!("q {} {}", l, r)),
        Just("s 1 inf".to_string()),
        Just("a 2 -inf".to_string()),
        Just("/reset".to_string()),
        "[a-z/ 0-9]{0,12}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No sequence of input lines breaks a session.
    #[test]
    fn property_session_survives_any_script(
        lines in proptest::collection::vec(command_line(), 0..40),
    ) {
        let mut session = Session::new(Variant::Sum);
        for line in &lines {
            let outcome = session.apply(line);
            prop_assert!(matches!(
                outcome,
                Outcome::Continue | Outcome::Help | Outcome::Home | Outcome::Quit
            ));
            prop_assert_eq!(session.structure().len(), 16);
        }
    }

    /// PROPERTY: Every history entry is an echo followed by at most one reply.
    #[test]
    fn property_history_pairs_inputs_with_replies(
        lines in proptest::collection::vec(command_line(), 0..40),
    ) {
        let mut session = Session::new(Variant::Max);
        for line in &lines {
            session.apply(line);
        }
        let mut previous_was_input = false;
        for text in session.history().texts() {
            if text.starts_with("> ") {
                previous_was_input = true;
            } else {
                prop_assert!(previous_was_input, "reply without input: {}", text);
                previous_was_input = false;
            }
        }
    }
}
