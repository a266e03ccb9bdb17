// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the subscription popup, driven through the
//! public crate API with synthesized instants - no real timers, no
//! rendering.

use iced_newsletter::ui::notifications::{Manager, Severity};
use iced_newsletter::ui::popup::{Content, Event, Message, Phase, State, Timing};
use std::time::{Duration, Instant};

const ENTRANCE: Duration = Duration::from_millis(2000);
const CLOSE: Duration = Duration::from_millis(500);

fn mounted(now: Instant) -> State {
    State::new(now, Timing::new(2000, 500))
}

/// Forwards an event to a toast manager the way the app shell does.
fn deliver(manager: &mut Manager, event: Option<Event>) {
    if let Some(Event::Notify(notification)) = event {
        manager.push(notification);
    }
}

#[test]
fn invalid_email_flow_keeps_form_open_and_raises_destructive_toast() {
    let t0 = Instant::now();
    let mut popup = mounted(t0);
    let mut toasts = Manager::new();

    // Entrance delay elapses
    deliver(&mut toasts, popup.update(Message::Tick(t0 + ENTRANCE), t0));
    assert!(popup.is_visible());

    // User types a bad address and submits
    deliver(
        &mut toasts,
        popup.update(Message::EmailChanged("not-an-email".into()), t0),
    );
    deliver(&mut toasts, popup.update(Message::SubmitPressed, t0));

    assert!(matches!(popup.phase(), Phase::Open(Content::Form { email }) if email == "not-an-email"));
    assert_eq!(toasts.visible_count(), 1);
    assert_eq!(
        toasts.visible().next().unwrap().severity(),
        Severity::Error
    );
}

#[test]
fn valid_email_flow_confirms_and_raises_success_toast() {
    let t0 = Instant::now();
    let mut popup = mounted(t0);
    let mut toasts = Manager::new();

    deliver(&mut toasts, popup.update(Message::Tick(t0 + ENTRANCE), t0));
    deliver(
        &mut toasts,
        popup.update(Message::EmailChanged("a@b.com".into()), t0),
    );
    deliver(&mut toasts, popup.update(Message::SubmitPressed, t0));

    assert_eq!(popup.phase(), &Phase::Open(Content::Confirmed));
    assert_eq!(toasts.visible_count(), 1);
    assert_eq!(
        toasts.visible().next().unwrap().severity(),
        Severity::Success
    );

    // The confirmation is terminal: another submit adds nothing
    deliver(&mut toasts, popup.update(Message::SubmitPressed, t0));
    assert_eq!(toasts.visible_count(), 1);
}

#[test]
fn close_flow_plays_exit_transition_then_hides() {
    let t0 = Instant::now();
    let mut popup = mounted(t0);

    popup.update(Message::Tick(t0 + ENTRANCE), t0);
    let shown_at = t0 + ENTRANCE;

    // Backdrop click starts the exit transition
    popup.update(Message::CloseRequested, shown_at);
    assert!(popup.is_visible());
    let (_, closing) = popup.overlay_content().expect("card still rendered");
    assert!(closing);

    // A second click during the transition changes nothing
    popup.update(Message::CloseRequested, shown_at + Duration::from_millis(100));

    // The close deadline fires exactly once
    popup.update(Message::Tick(shown_at + CLOSE), shown_at);
    assert_eq!(popup.phase(), &Phase::Closed);
    assert!(!popup.is_visible());
    assert!(!popup.has_pending_deadline());
}

#[test]
fn ticks_after_dismissal_never_reshow_the_popup() {
    let t0 = Instant::now();
    let mut popup = mounted(t0);

    popup.update(Message::Tick(t0 + ENTRANCE), t0);
    popup.update(Message::CloseRequested, t0 + ENTRANCE);
    popup.update(Message::Tick(t0 + ENTRANCE + CLOSE), t0);
    assert_eq!(popup.phase(), &Phase::Closed);

    for minutes in 1..=5u64 {
        popup.update(
            Message::Tick(t0 + Duration::from_secs(60 * minutes)),
            t0,
        );
        assert_eq!(popup.phase(), &Phase::Closed);
    }
}

#[test]
fn unmounting_before_entrance_cancels_the_deadline() {
    let t0 = Instant::now();
    let popup = mounted(t0);
    assert!(!popup.is_visible());

    // The deadline is owned by the state; dropping the widget before the
    // entrance delay elapses leaves nothing behind that could fire.
    drop(popup);
}

#[test]
fn entrance_variants_differ_only_in_configuration() {
    let t0 = Instant::now();

    let mut quick = State::new(t0, Timing::new(800, 500));
    let mut relaxed = State::new(t0, Timing::new(2000, 500));

    quick.update(Message::Tick(t0 + Duration::from_millis(800)), t0);
    relaxed.update(Message::Tick(t0 + Duration::from_millis(800)), t0);

    assert!(quick.is_visible());
    assert!(!relaxed.is_visible());

    relaxed.update(Message::Tick(t0 + Duration::from_millis(2000)), t0);
    assert!(relaxed.is_visible());
}

#[test]
fn toast_overflow_queues_beyond_three_visible() {
    let t0 = Instant::now();
    let mut popup = mounted(t0);
    let mut toasts = Manager::new();

    deliver(&mut toasts, popup.update(Message::Tick(t0 + ENTRANCE), t0));

    // Four failed submissions in a row: three toasts visible, one queued
    for _ in 0..4 {
        deliver(&mut toasts, popup.update(Message::SubmitPressed, t0));
    }

    assert_eq!(toasts.visible_count(), 3);
    assert_eq!(toasts.queued_count(), 1);
}
