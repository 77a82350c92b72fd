//! Property-based tests for the adapter state machine.
//!
//! Generates random input-method operation sequences via proptest and
//! verifies that the mirrored state and the notification stream stay
//! consistent after every action.

use proptest::prelude::*;

use imesync_core::editor::ImeAction;

use super::*;
use crate::types::key;

// ---------------------------------------------------------------------------
// Action enum: every operation an input method or owner can issue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    SetComposingText(String, i32),
    CommitText(String, i32),
    SetComposingRegion(i32, i32),
    FinishComposingText,
    DeleteSurroundingText(i32, i32),
    SetSelection(i32, i32),
    BeginBatchEdit,
    EndBatchEdit,
    Sync {
        text: String,
        sel: (i32, i32),
        comp: (i32, i32),
        require_ack: bool,
    },
    Backspace,
    ForwardDelete,
    TypeChar(char),
    Enter,
    EditorAction(ImeAction),
    RestartInput,
}

// ---------------------------------------------------------------------------
// Strategy: weighted random Action generation
// ---------------------------------------------------------------------------

fn arb_text() -> impl Strategy<Value = String> {
    "[abあ日 \u{00A0}]{0,4}"
}

fn arb_offset() -> impl Strategy<Value = i32> {
    prop_oneof![
        8 => -2..12i32,
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        12 => (arb_text(), -3..4i32).prop_map(|(t, n)| Action::SetComposingText(t, n)),
        8 => (arb_text(), -3..4i32).prop_map(|(t, n)| Action::CommitText(t, n)),
        4 => (arb_offset(), arb_offset()).prop_map(|(a, b)| Action::SetComposingRegion(a, b)),
        4 => Just(Action::FinishComposingText),
        6 => (arb_offset(), arb_offset()).prop_map(|(a, b)| Action::DeleteSurroundingText(a, b)),
        6 => (arb_offset(), arb_offset()).prop_map(|(a, b)| Action::SetSelection(a, b)),
        6 => Just(Action::BeginBatchEdit),
        6 => Just(Action::EndBatchEdit),
        5 => (arb_text(), (arb_offset(), arb_offset()), (arb_offset(), arb_offset()), any::<bool>())
            .prop_map(|(text, sel, comp, require_ack)| Action::Sync {
                text,
                sel,
                comp,
                require_ack,
            }),
        4 => Just(Action::Backspace),
        2 => Just(Action::ForwardDelete),
        4 => prop::sample::select(vec!['x', 'y', 'か', ' ']).prop_map(Action::TypeChar),
        2 => Just(Action::Enter),
        2 => prop::sample::select(vec![ImeAction::Next, ImeAction::Go, ImeAction::Done])
            .prop_map(Action::EditorAction),
        1 => Just(Action::RestartInput),
    ]
}

// ---------------------------------------------------------------------------
// Execute an Action against the connection
// ---------------------------------------------------------------------------

fn execute_action(conn: &mut TestConnection, action: &Action) {
    match action {
        Action::SetComposingText(t, n) => {
            conn.set_composing_text(t, *n);
        }
        Action::CommitText(t, n) => {
            conn.commit_text(t, *n);
        }
        Action::SetComposingRegion(a, b) => {
            conn.set_composing_region(*a, *b);
        }
        Action::FinishComposingText => {
            conn.finish_composing_text();
        }
        Action::DeleteSurroundingText(b, a) => {
            conn.delete_surrounding_text(*b, *a);
        }
        Action::SetSelection(s, e) => {
            conn.set_selection(*s, *e);
        }
        Action::BeginBatchEdit => {
            conn.begin_batch_edit();
        }
        Action::EndBatchEdit => {
            conn.end_batch_edit();
        }
        Action::Sync {
            text,
            sel,
            comp,
            require_ack,
        } => {
            let mut s = sync(text, *sel, *comp);
            s.require_ack = *require_ack;
            conn.update_state(&s);
        }
        Action::Backspace => {
            conn.send_key_event(&KeyEvent::down(key::DEL));
            conn.send_key_event(&KeyEvent::up(key::DEL));
        }
        Action::ForwardDelete => {
            conn.send_key_event(&KeyEvent::down(key::FORWARD_DEL));
            conn.send_key_event(&KeyEvent::up(key::FORWARD_DEL));
        }
        Action::TypeChar(c) => {
            conn.send_key_event(&KeyEvent::down(0).with_char(*c));
            conn.send_key_event(&KeyEvent::up(0).with_char(*c));
        }
        Action::Enter => {
            conn.send_key_event(&KeyEvent::down(key::ENTER));
        }
        Action::EditorAction(a) => {
            conn.perform_editor_action(*a);
        }
        Action::RestartInput => conn.restart_input(),
    }
}

fn restarts(action: &Action) -> bool {
    matches!(
        action,
        Action::RestartInput | Action::EditorAction(ImeAction::Next)
    )
}

// ---------------------------------------------------------------------------
// Invariant checks, run after every action
// ---------------------------------------------------------------------------

fn assert_invariants(
    conn: &TestConnection,
    action: &Action,
    depth_before: usize,
    delivered: &[SelectionUpdate],
    before: &crate::types::ImeState,
) {
    let state = conn.text_state();
    let len = state.len();

    // 1. Selection within the text
    let (s, e) = state.selection();
    assert!(
        s <= len && e <= len,
        "selection ({s}, {e}) outside text of length {len} after {action:?}",
    );

    // 2. Composition non-empty and within the text
    if let Some(c) = state.composition() {
        assert!(
            c.start < c.end && c.end <= len,
            "bad composition {c:?} for length {len} after {action:?}",
        );
    }

    // 3. Nothing is delivered while a batch stays open
    if depth_before > 0 && conn.batch_depth() > 0 && !restarts(action) {
        assert!(
            delivered.is_empty(),
            "update delivered inside a batch: {delivered:?} after {action:?}",
        );
    }

    // 4. Outside a batch the input method's last view is the current state
    if conn.batch_depth() == 0 {
        if let Some(last) = conn.last_update() {
            assert_eq!(
                last,
                SelectionUpdate::of(state),
                "input method left with a stale view after {action:?}",
            );
        }
    }

    // 5. What was delivered is what the notifier remembers
    if let Some(sent) = delivered.last() {
        assert_eq!(Some(*sent), conn.last_update(), "after {action:?}");
    }

    // 6. Echoed syncs never touch the state
    if let Action::Sync {
        require_ack: false, ..
    } = action
    {
        assert_eq!(&conn.ime_state(), before, "echo mutated state");
    }

    // 7. NBSP never survives a sync
    if matches!(action, Action::Sync { require_ack: true, .. }) {
        assert!(!state.content().contains('\u{00A0}'), "NBSP kept after {action:?}");
    }
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn connection_invariants_hold(actions in prop::collection::vec(arb_action(), 1..100)) {
        let mut conn = connection();
        let mut prev_sent: Option<SelectionUpdate> = None;
        for action in &actions {
            let depth_before = conn.batch_depth();
            let before = conn.ime_state();
            let sent_before = conn.ime().updates.len();

            execute_action(&mut conn, action);

            let delivered = conn.ime().updates[sent_before..].to_vec();
            assert_invariants(&conn, action, depth_before, &delivered, &before);

            // Consecutive deliveries differ unless a restart intervened.
            if restarts(action) {
                prev_sent = None;
            }
            for update in delivered {
                prop_assert_ne!(Some(update), prev_sent, "duplicate update after {:?}", action);
                prev_sent = Some(update);
            }
        }
    }

    #[test]
    fn balanced_batch_delivers_at_most_once(
        actions in prop::collection::vec(arb_action(), 1..40)
    ) {
        let mut conn = connection_with("seed", 4, 4);
        conn.begin_batch_edit();
        for action in &actions {
            if restarts(action) || matches!(action, Action::EndBatchEdit | Action::BeginBatchEdit) {
                continue;
            }
            execute_action(&mut conn, action);
        }
        prop_assert!(conn.ime().updates.is_empty());
        conn.end_batch_edit();
        prop_assert!(conn.ime().updates.len() <= 1);
        prop_assert_eq!(conn.batch_depth(), 0);
    }
}
