use std::{fmt, future::Future, sync::LazyLock, time::Duration};

use futures::future::LocalBoxFuture;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::{Notification, Notifier, FAILED_MESSAGE, NOTIFICATION_DURATION, SENT_MESSAGE};

/// How long the "sent" acknowledgment stays up before the form is back to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);
/// Failure is surfaced for as long as its notification.
pub const FAILURE_DISPLAY: Duration = NOTIFICATION_DURATION;
/// Latency of the simulated send.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(2);

pub const MESSAGE_MAX: usize = 1000;
const MESSAGE_WARN_AT: usize = 900;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Fixed order; the first failing field in this order receives focus on a rejected submit.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// DOM id and wire name.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn rule(self) -> Rule {
        match self {
            Self::Name => Rule::Length { min: 2, max: 50 },
            Self::Email => Rule::Email,
            Self::Subject => Rule::Length { min: 5, max: 100 },
            Self::Message => Rule::Length {
                min: 10,
                max: MESSAGE_MAX,
            },
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl TryFrom<&str> for Field {
    type Error = UnknownField;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Field::ALL
            .into_iter()
            .find(|f| f.id() == value)
            .ok_or_else(|| UnknownField(value.to_string()))
    }
}

enum Rule {
    Length { min: usize, max: usize },
    Email,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("{field} must be less than {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Check one field's value against its rule. Depends on nothing but its arguments.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field.rule() {
        Rule::Length { min, max } => {
            let len = value.chars().count();
            if len < min {
                Err(FieldError::TooShort { field, min })
            } else if len > max {
                Err(FieldError::TooLong { field, max })
            } else {
                Ok(())
            }
        }
        Rule::Email => {
            if is_email(value) {
                Ok(())
            } else {
                Err(FieldError::InvalidEmail)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Presentation hint for a field's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Neutral,
    Invalid,
    Valid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; move keyboard focus to `focus`.
    Rejected { focus: Field },
    /// Hand the payload to the sender and report back through `finish_submit`.
    Started(ContactPayload),
    /// A send is already in flight.
    Busy,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("message service unavailable")]
    Unavailable,
}

/// Transport for a validated message. Called once per accepted submit; the returned
/// future resolves exactly once.
pub trait MessageSender {
    fn send(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SendError>>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    values: [String; 4],
    errors: [Option<FieldError>; 4],
    touched: [bool; 4],
    dirty: [bool; 4],
    submission: Submission,
    // bumped on every resolved send; a settle must quote the current value
    generation: u64,
}

/// A send outcome accepted by the form: how long to show it, and the token `settle` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub display: Duration,
    pub generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors[field.index()].as_ref()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    pub fn is_dirty(&self, field: Field) -> bool {
        self.dirty[field.index()]
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// The error as the user is allowed to see it: only once the field has been left.
    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        if self.visible_error(field).is_some() {
            FieldStatus::Invalid
        } else if self.is_dirty(field) && self.error(field).is_none() {
            FieldStatus::Valid
        } else {
            FieldStatus::Neutral
        }
    }

    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        let i = field.index();
        self.values[i] = value.into();
        self.dirty[i] = true;
        self.revalidate(field);
    }

    pub fn on_blur(&mut self, field: Field) {
        self.touched[field.index()] = true;
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: Field) {
        let i = field.index();
        self.errors[i] = validate_field(field, &self.values[i]).err();
    }

    /// Validate everything and either start a send or point at the first bad field.
    ///
    /// Only the field that receives focus is marked touched; the others keep their
    /// own history, so an unvisited field never shows an error.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }

        for field in Field::ALL {
            self.revalidate(field);
        }
        if let Some(focus) = Field::ALL.into_iter().find(|f| self.error(*f).is_some()) {
            debug!("contact submit rejected, first invalid field: {}", focus.id());
            self.touched[focus.index()] = true;
            return SubmitOutcome::Rejected { focus };
        }

        self.submission = Submission::Submitting;
        info!("contact submit started");
        SubmitOutcome::Started(self.payload())
    }

    /// Apply a send result. Returns `None` when no send was in flight.
    pub fn finish_submit(&mut self, result: Result<(), SendError>) -> Option<Resolved> {
        if !self.is_submitting() {
            warn!("send resolved while form was {:?}; ignoring", self.submission);
            return None;
        }
        let generation = self.generation + 1;
        let display = match result {
            Ok(()) => {
                info!("contact message sent");
                *self = Self {
                    submission: Submission::Success,
                    ..Self::default()
                };
                SUCCESS_DISPLAY
            }
            Err(e) => {
                warn!("contact message failed: {e}");
                self.submission = Submission::Failure;
                FAILURE_DISPLAY
            }
        };
        self.generation = generation;
        Some(Resolved {
            display,
            generation,
        })
    }

    /// End of the success/failure display window opened by `generation`.
    ///
    /// A window that has since been replaced by a newer send is left alone.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation
            || !matches!(self.submission, Submission::Success | Submission::Failure)
        {
            return false;
        }
        debug!("contact form settled from {:?}", self.submission);
        self.submission = Submission::Idle;
        true
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).to_string(),
            message: self.value(Field::Message).to_string(),
        }
    }

    pub fn message_len(&self) -> usize {
        self.value(Field::Message).chars().count()
    }

    /// Can go negative; the textarea itself is not capped.
    pub fn message_remaining(&self) -> i64 {
        MESSAGE_MAX as i64 - self.message_len() as i64
    }

    pub fn message_near_limit(&self) -> bool {
        self.message_len() > MESSAGE_WARN_AT
    }
}


/// The notification a send result produces, whether or not the form is still on screen.
pub fn send_notice(result: &Result<(), SendError>) -> Notification {
    match result {
        Ok(()) => Notification::success(SENT_MESSAGE),
        Err(_) => Notification::failure(FAILED_MESSAGE),
    }
}

/// Where a running submission finds its form.
pub trait FormSlot {
    /// `None` once the form is gone, e.g. the visitor navigated away mid-send.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

/// Carry a started submission to the end: send, report, hold the result on screen,
/// then return the form to idle.
pub async fn run_submission<S, Fut>(
    sender: &dyn MessageSender,
    payload: ContactPayload,
    form: &impl FormSlot,
    notifier: &dyn Notifier,
    sleep: S,
) where
    S: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let result = sender.send(payload).await;
    let notice = send_notice(&result);

    let resolved = match form.with_form(|f| f.finish_submit(result)) {
        Some(Some(resolved)) => resolved,
        Some(None) => return,
        None => {
            debug!("contact form gone before the send resolved");
            notifier.notify(notice);
            return;
        }
    };
    notifier.notify(notice);

    sleep(resolved.display).await;
    if form.with_form(|f| f.settle(resolved.generation)).is_none() {
        debug!("contact form gone before settling");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::{executor::block_on, future};

    use super::*;
    use crate::notify::{testing::RecordingNotifier, NotificationKind};

    struct FixedSender(Result<(), SendError>);

    impl MessageSender for FixedSender {
        fn send(&self, _payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SendError>> {
            Box::pin(future::ready(self.0.clone()))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.on_change(Field::Name, "Al");
        form.on_change(Field::Email, "al@example.com");
        form.on_change(Field::Subject, "Research collaboration");
        form.on_change(Field::Message, "Would love to chat about your thesis.");
        form
    }

    fn message(field: Field, value: &str) -> Option<String> {
        validate_field(field, value).err().map(|e| e.to_string())
    }

    #[test]
    fn test_name_rule() {
        assert_eq!(
            message(Field::Name, "A").as_deref(),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(message(Field::Name, "Al"), None);
        assert_eq!(message(Field::Name, &"a".repeat(50)), None);
        assert_eq!(
            message(Field::Name, &"a".repeat(51)).as_deref(),
            Some("Name must be less than 50 characters")
        );
        // characters, not bytes
        assert_eq!(message(Field::Name, "Zoë"), None);
        assert_eq!(
            message(Field::Name, "é").as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_subject_and_message_rules() {
        assert_eq!(
            message(Field::Subject, "Hi").as_deref(),
            Some("Subject must be at least 5 characters")
        );
        assert_eq!(message(Field::Subject, "Hello"), None);
        assert_eq!(
            message(Field::Subject, &"s".repeat(101)).as_deref(),
            Some("Subject must be less than 100 characters")
        );
        assert_eq!(
            message(Field::Message, "too short").as_deref(),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(message(Field::Message, "long enough"), None);
        assert_eq!(message(Field::Message, &"m".repeat(1000)), None);
        assert_eq!(
            message(Field::Message, &"m".repeat(1001)).as_deref(),
            Some("Message must be less than 1000 characters")
        );
    }

    #[test]
    fn test_email_rule() {
        for good in [
            "a@b.com",
            "al@example.com",
            "first.last+tag@mail.example.co.uk",
            "o'brien@example.ie",
            "x_y-z@sub-domain.example.org",
        ] {
            assert!(validate_field(Field::Email, good).is_ok(), "{good}");
        }
        for bad in [
            "",
            "not-an-email",
            "bad",
            "a@b",
            "a@b.c",
            "a@b.c0m",
            ".a@b.com",
            "a..b@b.com",
            "a.@b.com",
            "a@-b.com",
            "a@b..com",
            "a b@c.com",
            "@b.com",
        ] {
            assert_eq!(
                validate_field(Field::Email, bad),
                Err(FieldError::InvalidEmail),
                "{bad}"
            );
        }
        assert_eq!(
            message(Field::Email, "not-an-email").as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_field_names() {
        for field in Field::ALL {
            assert_eq!(Field::try_from(field.id()), Ok(field));
        }
        assert_eq!(
            Field::try_from("phone"),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut form = ContactForm::new();
        form.on_change(Field::Email, "bad");
        assert!(form.error(Field::Email).is_some());
        assert!(form.visible_error(Field::Email).is_none());
        assert_eq!(form.status(Field::Email), FieldStatus::Neutral);

        form.on_blur(Field::Email);
        assert_eq!(form.visible_error(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(form.status(Field::Email), FieldStatus::Invalid);
    }

    #[test]
    fn test_fields_are_independent() {
        let mut form = ContactForm::new();
        form.on_change(Field::Name, "A");
        form.on_change(Field::Subject, "A valid subject");
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Subject).is_none());
        assert!(form.error(Field::Email).is_none());
        assert!(!form.is_dirty(Field::Email));
        assert_eq!(form.status(Field::Subject), FieldStatus::Valid);
    }

    #[test]
    fn test_rejected_submit_focuses_first_invalid() {
        let mut form = filled();
        form.on_blur(Field::Name);
        form.on_change(Field::Email, "not-an-email");
        form.on_change(Field::Message, "short");

        assert_eq!(
            form.begin_submit(),
            SubmitOutcome::Rejected {
                focus: Field::Email
            }
        );
        assert_eq!(form.submission(), Submission::Idle);
        // the focused field shows its error, a never-visited one stays quiet
        assert!(form.visible_error(Field::Email).is_some());
        assert!(form.error(Field::Message).is_some());
        assert!(!form.is_touched(Field::Message));
        assert!(form.visible_error(Field::Message).is_none());
        assert!(form.visible_error(Field::Name).is_none());
    }

    #[test]
    fn test_empty_form_focuses_name() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.begin_submit(),
            SubmitOutcome::Rejected { focus: Field::Name }
        );
        assert!(form.is_touched(Field::Name));
        assert!(!form.is_touched(Field::Email));
    }

    #[test]
    fn test_successful_submit_lifecycle() {
        let mut form = filled();

        let payload = match form.begin_submit() {
            SubmitOutcome::Started(p) => p,
            other => panic!("expected submit to start, got {other:?}"),
        };
        assert_eq!(payload.name, "Al");
        assert_eq!(payload.email, "al@example.com");
        assert_eq!(form.submission(), Submission::Submitting);
        assert_eq!(form.begin_submit(), SubmitOutcome::Busy);

        let result = block_on(FixedSender(Ok(())).send(payload));
        let resolved = form.finish_submit(result).unwrap();
        assert_eq!(resolved.display, SUCCESS_DISPLAY);

        assert_eq!(form.submission(), Submission::Success);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_touched(field));
            assert!(!form.is_dirty(field));
            assert!(form.error(field).is_none());
        }

        assert!(form.settle(resolved.generation));
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = filled();
        let payload = match form.begin_submit() {
            SubmitOutcome::Started(p) => p,
            other => panic!("expected submit to start, got {other:?}"),
        };

        let result = block_on(FixedSender(Err(SendError::Unavailable)).send(payload.clone()));
        assert_eq!(send_notice(&result).message, FAILED_MESSAGE);
        let first = form.finish_submit(result).unwrap();
        assert_eq!(first.display, FAILURE_DISPLAY);

        assert_eq!(form.submission(), Submission::Failure);
        assert_eq!(form.payload(), payload);

        // user may resubmit straight away
        assert!(matches!(form.begin_submit(), SubmitOutcome::Started(_)));
        let second = form.finish_submit(Ok(())).unwrap();
        assert_eq!(form.submission(), Submission::Success);

        // the failure window's timer is stale now
        assert!(!form.settle(first.generation));
        assert_eq!(form.submission(), Submission::Success);
        assert!(form.settle(second.generation));
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn test_failure_settles_to_idle() {
        let mut form = filled();
        form.begin_submit();
        let resolved = form
            .finish_submit(Err(SendError::Rejected("spam".to_string())))
            .unwrap();
        assert!(form.settle(resolved.generation));
        assert_eq!(form.submission(), Submission::Idle);
        assert_eq!(form.value(Field::Name), "Al");
    }

    #[test]
    fn test_stray_resolution_is_ignored() {
        let mut form = filled();
        assert_eq!(form.finish_submit(Ok(())), None);
        assert_eq!(form.submission(), Submission::Idle);
        assert_eq!(form.value(Field::Name), "Al");

        assert!(!form.settle(0));
        assert_eq!(form.submission(), Submission::Idle);
    }

    impl FormSlot for RefCell<ContactForm> {
        fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    /// A form that was unmounted before the send came back.
    struct Unmounted;

    impl FormSlot for Unmounted {
        fn with_form<R>(&self, _f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
            None
        }
    }

    fn started(form: &RefCell<ContactForm>) -> ContactPayload {
        match form.borrow_mut().begin_submit() {
            SubmitOutcome::Started(p) => p,
            other => panic!("expected submit to start, got {other:?}"),
        }
    }

    #[test]
    fn test_run_submission_returns_to_idle_after_window() {
        let form = RefCell::new(filled());
        let notifier = RecordingNotifier::default();
        let waited = RefCell::new(Vec::new());
        let payload = started(&form);

        block_on(run_submission(
            &FixedSender(Ok(())),
            payload,
            &form,
            &notifier,
            |d| {
                // still showing the acknowledgment while the window runs
                assert_eq!(form.borrow().submission(), Submission::Success);
                waited.borrow_mut().push(d);
                future::ready(())
            },
        ));

        assert_eq!(*waited.borrow(), vec![SUCCESS_DISPLAY]);
        assert_eq!(form.borrow().submission(), Submission::Idle);
        assert_eq!(form.borrow().value(Field::Name), "");
        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, NotificationKind::Success);
        assert_eq!(sent[0].message, SENT_MESSAGE);
    }

    #[test]
    fn test_run_submission_failure_waits_notification_length() {
        let form = RefCell::new(filled());
        let notifier = RecordingNotifier::default();
        let waited = RefCell::new(Vec::new());
        let payload = started(&form);

        block_on(run_submission(
            &FixedSender(Err(SendError::Unavailable)),
            payload,
            &form,
            &notifier,
            |d| {
                waited.borrow_mut().push(d);
                future::ready(())
            },
        ));

        assert_eq!(*waited.borrow(), vec![FAILURE_DISPLAY]);
        assert_eq!(form.borrow().submission(), Submission::Idle);
        assert_eq!(form.borrow().value(Field::Name), "Al");
        assert_eq!(notifier.sent.borrow()[0].kind, NotificationKind::Failure);
    }

    #[test]
    fn test_stale_window_does_not_settle_newer_send() {
        let form = RefCell::new(filled());
        let notifier = RecordingNotifier::default();
        let payload = started(&form);

        block_on(run_submission(
            &FixedSender(Err(SendError::Unavailable)),
            payload,
            &form,
            &notifier,
            |_| {
                // visitor resubmits during the failure window and that send succeeds
                let mut f = form.borrow_mut();
                assert!(matches!(f.begin_submit(), SubmitOutcome::Started(_)));
                assert!(f.finish_submit(Ok(())).is_some());
                future::ready(())
            },
        ));

        assert_eq!(form.borrow().submission(), Submission::Success);
    }

    #[test]
    fn test_result_still_reported_after_form_is_gone() {
        let notifier = RecordingNotifier::default();
        let slept = Cell::new(false);

        block_on(run_submission(
            &FixedSender(Ok(())),
            filled().payload(),
            &Unmounted,
            &notifier,
            |_| {
                slept.set(true);
                future::ready(())
            },
        ));

        assert!(!slept.get());
        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, SENT_MESSAGE);
    }

    #[test]
    fn test_message_counter() {
        let mut form = ContactForm::new();
        assert_eq!(form.message_remaining(), 1000);
        form.on_change(Field::Message, "m".repeat(901));
        assert!(form.message_near_limit());
        assert_eq!(form.message_remaining(), 99);
        form.on_change(Field::Message, "m".repeat(1005));
        assert_eq!(form.message_remaining(), -5);
    }

    #[test]
    fn test_contact_walkthrough() {
        let mut form = ContactForm::new();

        form.on_change(Field::Name, "Al");
        form.on_blur(Field::Name);
        assert!(form.visible_error(Field::Name).is_none());

        form.on_change(Field::Email, "bad");
        form.on_blur(Field::Email);
        assert_eq!(
            form.visible_error(Field::Email).map(|e| e.to_string()).as_deref(),
            Some("Please enter a valid email address")
        );

        form.on_change(Field::Email, "al@example.com");
        form.on_blur(Field::Email);
        assert!(form.visible_error(Field::Email).is_none());

        form.on_change(Field::Subject, "Hi");
        form.on_change(Field::Message, "Hello there, long enough message.");
        assert_eq!(
            form.begin_submit(),
            SubmitOutcome::Rejected {
                focus: Field::Subject
            }
        );
        assert_eq!(form.submission(), Submission::Idle);
        assert_eq!(
            form.visible_error(Field::Subject).map(|e| e.to_string()).as_deref(),
            Some("Subject must be at least 5 characters")
        );
    }
}
