//! End-to-end meeting scenarios driven through `MeetingEngine::deliver`.

use meetingbot::{HumState, MeetingEngine};

/// Deliver a script of `(sender, body)` messages, returning the last replies.
fn run_script(engine: &mut MeetingEngine, script: &[(&str, &str)]) -> Vec<String> {
    let mut last = Vec::new();
    for (sender, body) in script {
        last = engine.deliver(body, sender);
    }
    last
}

#[test]
fn test_speaking_queue_meeting() {
    let mut engine = MeetingEngine::new();

    assert!(engine.deliver("q+", "alice").is_empty());
    assert!(engine.deliver("q+", "bob").is_empty());
    assert_eq!(
        engine.deliver("q+ remote participant", "carol"),
        vec!["remote participant has been queued."]
    );
    assert_eq!(
        engine.deliver("q+", "alice"),
        vec!["alice, you're already in the queue."]
    );
    assert_eq!(
        engine.deliver("q?", "chair"),
        vec!["The queue is currently: alice, bob, remote participant"]
    );

    // alice moves to the back
    assert!(engine.deliver("q- later", "alice").is_empty());
    assert_eq!(
        engine.deliver("ack", "chair"),
        vec!["The queue is currently: remote participant, alice"]
    );
    assert_eq!(
        engine.deliver("ack alice", "chair"),
        vec!["The queue is currently: remote participant"]
    );
    assert_eq!(
        engine.deliver("ack alice", "chair"),
        vec!["Sorry, I couldn't find alice in the queue."]
    );
    assert_eq!(
        engine.deliver("q-", "alice"),
        vec!["Sorry, alice is not in the queue."]
    );
    assert_eq!(
        engine.deliver("ack", "chair"),
        vec!["The queue is currently empty."]
    );
    assert_eq!(
        engine.deliver("ack", "chair"),
        vec!["The queue is currently empty."]
    );
}

#[test]
fn test_leave_then_query_hides_entry() {
    let mut engine = MeetingEngine::new();
    run_script(&mut engine, &[("alice", "q+"), ("bob", "q+"), ("alice", "q-")]);
    assert_eq!(
        engine.deliver("q?", "chair"),
        vec!["The queue is currently: bob"]
    );
}

#[test]
fn test_ack_removes_only_front_entry() {
    let mut engine = MeetingEngine::new();
    run_script(
        &mut engine,
        &[("a", "q+"), ("b", "q+"), ("c", "q+"), ("chair", "ack")],
    );
    assert_eq!(engine.queue().entries(), ["b", "c"]);
}

// Asymmetry kept on purpose: an explicit join is announced, a self join is not.
#[test]
fn test_join_announcement_asymmetry() {
    let mut engine = MeetingEngine::new();
    assert!(engine.deliver("q+", "alice").is_empty());
    assert_eq!(
        engine.deliver("q+ bob", "alice"),
        vec!["bob has been queued."]
    );
    assert_eq!(
        engine.deliver("q+ bob", "alice"),
        vec!["bob is already in the queue."]
    );
    assert_eq!(
        engine.deliver("q+", "bob"),
        vec!["bob, you're already in the queue."]
    );
}

#[test]
fn test_hum_round() {
    let mut engine = MeetingEngine::new();

    assert_eq!(
        engine.deliver("hum start", "chair"),
        vec!["Please set a hum topic with 'hum topic _topic_'."]
    );
    assert_eq!(
        engine.deliver("hum topic release plan", "chair"),
        vec!["Topic set."]
    );
    assert_eq!(engine.deliver("hum option A", "chair"), vec!["Option 1 recorded."]);
    assert_eq!(
        engine.deliver("hum start", "chair"),
        vec!["Please set at least two hum options with 'hum option _description_'."]
    );
    assert_eq!(engine.deliver("hum option B", "chair"), vec!["Option 2 recorded."]);

    let started = engine.deliver("hum start", "chair");
    assert_eq!(started.len(), 4);
    assert_eq!(started[0], "* Starting hum: release plan");
    assert_eq!(engine.hum().state(), HumState::Open);

    assert!(engine.deliver("hum 1", "alice").is_empty());
    assert!(engine.deliver("hum 1", "bob").is_empty());
    assert_eq!(
        engine.deliver("hum 3", "carol"),
        vec!["carol, '3' is not an option. Please try again."]
    );
    assert_eq!(engine.hum().responses().len(), 2);

    let results = engine.deliver("hum stop", "chair");
    assert_eq!(
        results,
        vec![
            "* Finishing hum. The results are:",
            "release plan",
            "  Option 1: A -- 2 hummed",
            "  Option 2: B -- 0 hummed",
        ]
    );
    assert_eq!(engine.hum().state(), HumState::Idle);
    assert_eq!(engine.deliver("hum option C", "chair"), vec!["Option 1 recorded."]);
}

#[test]
fn test_hum_edits_rejected_while_open() {
    let mut engine = MeetingEngine::new();
    run_script(
        &mut engine,
        &[
            ("chair", "hum topic lunch"),
            ("chair", "hum option pizza"),
            ("chair", "hum option salad"),
            ("chair", "hum start"),
        ],
    );

    assert_eq!(
        engine.deliver("hum topic dinner", "alice"),
        vec!["Sorry, topic can't be changed during the hum."]
    );
    assert_eq!(
        engine.deliver("hum option soup", "alice"),
        vec!["Sorry, options can't be changed during the hum."]
    );
    assert_eq!(engine.hum().topic(), "lunch");
    assert_eq!(engine.hum().options(), ["pizza", "salad"]);
}

#[test]
fn test_repeated_hum_rounds_have_no_residue() {
    let mut engine = MeetingEngine::new();

    for (round, topic) in ["first", "second", "third"].iter().enumerate() {
        run_script(
            &mut engine,
            &[
                ("chair", format!("hum topic {topic}").as_str()),
                ("chair", "hum option yes"),
                ("chair", "hum option no"),
                ("chair", "hum start"),
            ],
        );
        if round == 1 {
            engine.deliver("hum 2", "alice");
        }

        let results = engine.deliver("hum stop", "chair");
        assert_eq!(results[1], *topic);
        let expected_no = if round == 1 { 1 } else { 0 };
        assert_eq!(results[2], "  Option 1: yes -- 0 hummed");
        assert_eq!(results[3], format!("  Option 2: no -- {expected_no} hummed"));
        assert_eq!(results.len(), 4);
    }
}

#[test]
fn test_hum_outside_session() {
    let mut engine = MeetingEngine::new();
    assert_eq!(
        engine.deliver("hum stop", "alice"),
        vec!["Sorry, there isn't a hum running."]
    );
    assert_eq!(
        engine.deliver("hum 1", "alice"),
        vec!["I don't understand '1', alice."]
    );
    assert_eq!(
        engine.deliver("hum", "alice"),
        vec!["I don't understand '', alice."]
    );
}

#[test]
fn test_chatter_is_ignored() {
    let mut engine = MeetingEngine::new();
    for body in ["hi all", "I agree with q+", "queue me", "humming along", ""] {
        assert!(engine.deliver(body, "alice").is_empty(), "{body}");
    }
    assert!(engine.queue().is_empty());
    assert_eq!(engine.hum().state(), HumState::Idle);
}
