// SPDX-License-Identifier: MPL-2.0
//! Popup phase machine and message handling.
//!
//! All time-based behavior runs through `Instant` deadlines stored in the
//! phase and advanced by [`Message::Tick`]; no detached timer exists, so
//! dropping the state cancels everything that was pending. Side effects are
//! limited to the [`Event`]s returned from [`State::update`].

use super::timing::Timing;
use super::validate::{self, EmailValidator};
use crate::ui::notifications::Notification;
use std::time::{Duration, Instant};

/// How long the validation-error toast stays up. The severity default for
/// errors is manual dismiss, which is too heavy for a form nit the user is
/// already looking at.
const INVALID_EMAIL_DISMISS: Duration = Duration::from_secs(5);

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The email field content changed.
    EmailChanged(String),
    /// The subscribe button was pressed or the form was submitted.
    SubmitPressed,
    /// The backdrop or the close control was clicked.
    CloseRequested,
    /// Periodic tick driving the entrance and close deadlines.
    Tick(Instant),
}

/// Effects the popup asks its host to perform.
#[derive(Debug, Clone)]
pub enum Event {
    /// Hand a notification to the transient-notification collaborator.
    Notify(Notification),
}

/// What the open popup is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// The email-capture form.
    Form { email: String },
    /// The confirmation acknowledgment. Terminal for this mount.
    Confirmed,
}

impl Content {
    fn empty_form() -> Self {
        Content::Form {
            email: String::new(),
        }
    }
}

/// Lifecycle phase of the popup.
///
/// The phase replaces the loose `visible`/`closing`/`submitted` flags of a
/// naive model; combinations like "closing while never shown" have no
/// representation here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Hidden; the entrance deadline is armed.
    Pending { due: Instant },
    /// Visible and interactive.
    Open(Content),
    /// The exit transition is playing; removal happens at the deadline.
    Closing { due: Instant, content: Content },
    /// Dismissed. Absorbing: nothing reopens the popup within one mount.
    Closed,
}

/// Popup state: the current phase plus the mount's timing parameters and
/// the injected email validator.
#[derive(Debug)]
pub struct State {
    phase: Phase,
    timing: Timing,
    validator: EmailValidator,
}

impl State {
    /// Creates the popup in its hidden phase with the entrance deadline
    /// armed at `now + entrance_delay`.
    #[must_use]
    pub fn new(now: Instant, timing: Timing) -> Self {
        Self {
            phase: Phase::Pending {
                due: now + timing.entrance_delay(),
            },
            timing,
            validator: validate::is_plausible_email,
        }
    }

    /// Replaces the email validator. Intended for tests and embedders with
    /// a different acceptance policy.
    #[must_use]
    pub fn with_validator(mut self, validator: EmailValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns true while the popup occupies the interactive layer.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Open(_) | Phase::Closing { .. })
    }

    /// Returns true while an entrance or close deadline is armed, i.e.
    /// while the popup needs ticks to make progress.
    #[must_use]
    pub fn has_pending_deadline(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. } | Phase::Closing { .. })
    }

    /// Returns the rendered content and whether the exit transition is
    /// playing, or `None` while the popup is hidden.
    #[must_use]
    pub fn overlay_content(&self) -> Option<(&Content, bool)> {
        match &self.phase {
            Phase::Open(content) => Some((content, false)),
            Phase::Closing { content, .. } => Some((content, true)),
            Phase::Pending { .. } | Phase::Closed => None,
        }
    }

    /// Applies a message at time `now` and returns the effect to perform,
    /// if any.
    pub fn update(&mut self, message: Message, now: Instant) -> Option<Event> {
        match message {
            Message::Tick(tick) => {
                self.advance(tick);
                None
            }
            Message::EmailChanged(text) => {
                if let Phase::Open(Content::Form { email }) = &mut self.phase {
                    *email = text;
                }
                None
            }
            Message::SubmitPressed => self.submit(),
            Message::CloseRequested => {
                self.request_close(now);
                None
            }
        }
    }

    /// Fires whichever deadline `now` has reached. Ticks against phases
    /// without a deadline are no-ops, so a stale tick can never resurrect
    /// a dismissed popup.
    fn advance(&mut self, now: Instant) {
        match &self.phase {
            Phase::Pending { due } if now >= *due => {
                self.phase = Phase::Open(Content::empty_form());
            }
            Phase::Closing { due, .. } if now >= *due => {
                self.phase = Phase::Closed;
            }
            _ => {}
        }
    }

    /// Validates and "submits" the form. The submission is simulated: a
    /// passing email flips the content to `Confirmed` with no other side
    /// effect. Outside `Open(Form)` this is a no-op, which also makes a
    /// repeated submit after confirmation idempotent.
    fn submit(&mut self) -> Option<Event> {
        let Phase::Open(Content::Form { email }) = &self.phase else {
            return None;
        };

        if !(self.validator)(email) {
            return Some(Event::Notify(
                Notification::error("notification-invalid-email-body")
                    .with_title("notification-invalid-email-title")
                    .auto_dismiss(INVALID_EMAIL_DISMISS),
            ));
        }

        self.phase = Phase::Open(Content::Confirmed);
        Some(Event::Notify(
            Notification::success("notification-subscribed-body")
                .with_title("notification-subscribed-title"),
        ))
    }

    /// Starts the exit transition. Idempotent: a repeated request while
    /// closing keeps the original deadline, and requests while hidden do
    /// nothing.
    fn request_close(&mut self, now: Instant) {
        if let Phase::Open(content) = &self.phase {
            self.phase = Phase::Closing {
                due: now + self.timing.close_delay(),
                content: content.clone(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use std::time::Duration;

    fn timing() -> Timing {
        Timing::new(2000, 500)
    }

    /// Builds a popup that is already open on its form.
    fn open_popup(now: Instant) -> State {
        let mut state = State::new(now, timing());
        state.update(Message::Tick(now + Duration::from_millis(2000)), now);
        assert!(state.is_visible());
        state
    }

    fn severity_of(event: &Event) -> Severity {
        let Event::Notify(notification) = event;
        notification.severity()
    }

    #[test]
    fn starts_hidden_with_entrance_deadline_armed() {
        let now = Instant::now();
        let state = State::new(now, timing());

        assert!(!state.is_visible());
        assert!(state.has_pending_deadline());
        assert!(state.overlay_content().is_none());
    }

    #[test]
    fn tick_before_entrance_deadline_keeps_popup_hidden() {
        let now = Instant::now();
        let mut state = State::new(now, timing());

        state.update(Message::Tick(now + Duration::from_millis(1999)), now);

        assert!(!state.is_visible());
    }

    #[test]
    fn tick_at_entrance_deadline_opens_the_form() {
        let now = Instant::now();
        let mut state = State::new(now, timing());

        state.update(Message::Tick(now + Duration::from_millis(2000)), now);

        assert_eq!(
            state.phase(),
            &Phase::Open(Content::Form {
                email: String::new()
            })
        );
        assert!(!state.has_pending_deadline());
    }

    #[test]
    fn email_edits_replace_the_field_without_validation() {
        let now = Instant::now();
        let mut state = open_popup(now);

        state.update(Message::EmailChanged("not-an-email".into()), now);
        state.update(Message::EmailChanged("@".into()), now);

        assert_eq!(
            state.phase(),
            &Phase::Open(Content::Form { email: "@".into() })
        );
    }

    #[test]
    fn invalid_submit_emits_one_error_and_preserves_the_form() {
        let now = Instant::now();
        let mut state = open_popup(now);
        state.update(Message::EmailChanged("not-an-email".into()), now);

        let event = state.update(Message::SubmitPressed, now);

        assert_eq!(severity_of(&event.expect("expected an event")), Severity::Error);
        assert_eq!(
            state.phase(),
            &Phase::Open(Content::Form {
                email: "not-an-email".into()
            })
        );
    }

    #[test]
    fn empty_submit_is_rejected() {
        let now = Instant::now();
        let mut state = open_popup(now);

        let event = state.update(Message::SubmitPressed, now);

        assert_eq!(severity_of(&event.expect("expected an event")), Severity::Error);
        assert!(matches!(
            state.phase(),
            Phase::Open(Content::Form { email }) if email.is_empty()
        ));
    }

    #[test]
    fn each_failed_submit_emits_exactly_one_event() {
        let now = Instant::now();
        let mut state = open_popup(now);

        for _ in 0..3 {
            let event = state.update(Message::SubmitPressed, now);
            assert!(event.is_some());
        }
    }

    #[test]
    fn valid_submit_confirms_and_emits_one_success() {
        let now = Instant::now();
        let mut state = open_popup(now);
        state.update(Message::EmailChanged("a@b.com".into()), now);

        let event = state.update(Message::SubmitPressed, now);

        assert_eq!(
            severity_of(&event.expect("expected an event")),
            Severity::Success
        );
        assert_eq!(state.phase(), &Phase::Open(Content::Confirmed));
    }

    #[test]
    fn repeated_submit_after_confirmation_is_idempotent() {
        let now = Instant::now();
        let mut state = open_popup(now);
        state.update(Message::EmailChanged("a@b.com".into()), now);
        state.update(Message::SubmitPressed, now);

        let second = state.update(Message::SubmitPressed, now);

        assert!(second.is_none());
        assert_eq!(state.phase(), &Phase::Open(Content::Confirmed));
    }

    #[test]
    fn close_request_arms_the_close_deadline() {
        let now = Instant::now();
        let mut state = open_popup(now);

        state.update(Message::CloseRequested, now);

        assert_eq!(
            state.phase(),
            &Phase::Closing {
                due: now + Duration::from_millis(500),
                content: Content::empty_form(),
            }
        );
        assert!(state.is_visible());
        assert!(state.has_pending_deadline());
    }

    #[test]
    fn close_request_is_idempotent() {
        let now = Instant::now();
        let mut state = open_popup(now);

        state.update(Message::CloseRequested, now);
        let first_phase = state.phase().clone();

        // A later repeated request must not re-arm the deadline
        state.update(Message::CloseRequested, now + Duration::from_millis(300));

        assert_eq!(state.phase(), &first_phase);
    }

    #[test]
    fn close_deadline_hides_the_popup() {
        let now = Instant::now();
        let mut state = open_popup(now);
        state.update(Message::CloseRequested, now);

        state.update(Message::Tick(now + Duration::from_millis(499)), now);
        assert!(state.is_visible());

        state.update(Message::Tick(now + Duration::from_millis(500)), now);
        assert_eq!(state.phase(), &Phase::Closed);
        assert!(!state.is_visible());
        assert!(!state.has_pending_deadline());
    }

    #[test]
    fn closing_preserves_the_confirmed_content() {
        let now = Instant::now();
        let mut state = open_popup(now);
        state.update(Message::EmailChanged("a@b.com".into()), now);
        state.update(Message::SubmitPressed, now);

        state.update(Message::CloseRequested, now);

        let (content, closing) = state.overlay_content().expect("still rendered");
        assert_eq!(content, &Content::Confirmed);
        assert!(closing);
    }

    #[test]
    fn closed_is_absorbing() {
        let now = Instant::now();
        let mut state = open_popup(now);
        state.update(Message::CloseRequested, now);
        state.update(Message::Tick(now + Duration::from_millis(500)), now);

        // No message may resurrect a dismissed popup
        state.update(Message::Tick(now + Duration::from_secs(60)), now);
        state.update(Message::EmailChanged("a@b.com".into()), now);
        let submit = state.update(Message::SubmitPressed, now);
        state.update(Message::CloseRequested, now);

        assert!(submit.is_none());
        assert_eq!(state.phase(), &Phase::Closed);
    }

    #[test]
    fn submit_and_edit_during_closing_are_no_ops() {
        let now = Instant::now();
        let mut state = open_popup(now);
        state.update(Message::EmailChanged("a@b.com".into()), now);
        state.update(Message::CloseRequested, now);
        let closing_phase = state.phase().clone();

        state.update(Message::EmailChanged("other@c".into()), now);
        let submit = state.update(Message::SubmitPressed, now);

        assert!(submit.is_none());
        assert_eq!(state.phase(), &closing_phase);
    }

    #[test]
    fn close_request_before_entrance_is_ignored() {
        let now = Instant::now();
        let mut state = State::new(now, timing());

        state.update(Message::CloseRequested, now);

        assert!(matches!(state.phase(), Phase::Pending { .. }));
        // The entrance deadline still fires afterwards
        state.update(Message::Tick(now + Duration::from_millis(2000)), now);
        assert!(state.is_visible());
    }

    #[test]
    fn dropping_the_state_cancels_pending_deadlines() {
        let now = Instant::now();
        let state = State::new(now, timing());
        assert!(state.has_pending_deadline());

        // The deadline lives inside the phase; dropping the state is the
        // cancellation. Nothing outlives this scope to fire later.
        drop(state);
    }

    #[test]
    fn injected_validator_replaces_the_default_policy() {
        fn reject_everything(_input: &str) -> bool {
            false
        }

        let now = Instant::now();
        let mut state = open_popup(now).with_validator(reject_everything);
        state.update(Message::EmailChanged("a@b.com".into()), now);

        let event = state.update(Message::SubmitPressed, now);

        assert_eq!(severity_of(&event.expect("expected an event")), Severity::Error);
        assert!(matches!(state.phase(), Phase::Open(Content::Form { .. })));
    }

    #[test]
    fn zero_entrance_delay_opens_on_first_tick() {
        let now = Instant::now();
        let mut state = State::new(now, Timing::new(0, 0));

        state.update(Message::Tick(now), now);

        assert!(state.is_visible());
    }
}
