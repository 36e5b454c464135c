use std::time::Duration;

use futures::{channel::oneshot, future::LocalBoxFuture, FutureExt};
use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use leptos_meta::Title;
use log::{debug, warn};

use crate::{
    contact::{
        run_submission, ContactForm, ContactPayload, Field, FieldStatus, FormSlot, MessageSender,
        SendError, SubmitOutcome, Submission, MESSAGE_MAX, SIMULATED_LATENCY,
    },
    content::{CV_PATH, SOCIAL_LINKS},
};

use super::toast::ToastNotifier;

/// Resolves after `delay` on a browser timer.
fn timer(delay: Duration) -> oneshot::Receiver<()> {
    let (tx, rx) = oneshot::channel();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        delay,
    );
    rx
}

async fn sleep(delay: Duration) {
    let _ = timer(delay).await;
}

/// Stand-in transport: waits a moment on a browser timer and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSender;

impl MessageSender for SimulatedSender {
    fn send(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SendError>> {
        match serde_json::to_string(&payload) {
            Ok(json) => debug!("simulated send: {json}"),
            Err(e) => warn!("could not serialize contact payload: {e}"),
        }
        timer(SIMULATED_LATENCY)
            .map(|res| res.map_err(|_| SendError::Unavailable))
            .boxed_local()
    }
}

// the signal is disposed with the page; `try_update` reports that instead of panicking
impl FormSlot for RwSignal<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

fn border_class(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Invalid => "border-red-500 focus:ring-red-500",
        FieldStatus::Valid => "border-green-500 focus:ring-green-500",
        FieldStatus::Neutral => "border-border focus:ring-primary",
    }
}

fn error_id(field: Field) -> String {
    format!("{}-error", field.id())
}

#[component]
fn ErrorText(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.visible_error(field).is_some())>
            <p
                id=error_id(field)
                role="alert"
                class="absolute -bottom-5 left-0 text-sm text-red-500 flex items-center gap-1"
            >
                <span>"⚠"</span>
                {move || form.with(|f| f.visible_error(field).map(ToString::to_string))}
            </p>
        </Show>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    input_ref: NodeRef<html::Input>,
    label: &'static str,
    icon: &'static str,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let invalid = move || form.with(|f| f.visible_error(field).is_some());

    view! {
        <div class="relative">
            <label for=field.id() class="block text-sm font-medium mb-2">
                <i class=format!("{icon} inline-block mr-1") />
                {label}
            </label>
            <input
                node_ref=input_ref
                id=field.id()
                name=field.id()
                type=kind
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                aria-describedby=move || invalid().then(|| error_id(field))
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.on_change(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.on_blur(field))
                class=move || {
                    format!(
                        "w-full px-4 py-3 rounded-lg border transition-all {} focus:outline-none focus:ring-2 focus:border-transparent bg-background",
                        border_class(form.with(|f| f.status(field))),
                    )
                }
            />
            <ErrorText form field />
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let notifier = expect_context::<ToastNotifier>();

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let focus_field = move |field: Field| {
        let res = match field {
            Field::Name => name_ref.get_untracked().map(|el| el.focus()),
            Field::Email => email_ref.get_untracked().map(|el| el.focus()),
            Field::Subject => subject_ref.get_untracked().map(|el| el.focus()),
            Field::Message => message_ref.get_untracked().map(|el| el.focus()),
        };
        if !matches!(res, Some(Ok(()))) {
            debug!("could not focus {}", field.id());
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(SubmitOutcome::Rejected { focus }) => focus_field(focus),
            Some(SubmitOutcome::Started(payload)) => {
                spawn_local(async move {
                    run_submission(&SimulatedSender, payload, &form, &notifier, sleep).await;
                });
            }
            Some(SubmitOutcome::Busy) | None => {}
        }
    };

    let submission = move || form.with(ContactForm::submission);
    let message_invalid = move || form.with(|f| f.visible_error(Field::Message).is_some());

    view! {
        <div class="w-full max-w-2xl mx-auto">
            <form on:submit=on_submit class="space-y-6" novalidate>
                <TextField
                    form
                    field=Field::Name
                    input_ref=name_ref
                    label="Your Name"
                    icon="extra-user"
                    placeholder="John Doe"
                />
                <TextField
                    form
                    field=Field::Email
                    input_ref=email_ref
                    label="Email Address"
                    icon="extra-email"
                    kind="email"
                    placeholder="john@example.com"
                />
                <TextField
                    form
                    field=Field::Subject
                    input_ref=subject_ref
                    label="Subject"
                    icon="extra-file"
                    placeholder="Research Collaboration Opportunity"
                />
                <div class="relative">
                    <label for=Field::Message.id() class="block text-sm font-medium mb-2">
                        <i class="extra-message inline-block mr-1" />
                        "Message"
                        <span class="ml-2 text-xs text-muted-foreground">
                            {move || format!("({}/{MESSAGE_MAX})", form.with(ContactForm::message_len))}
                        </span>
                    </label>
                    <textarea
                        node_ref=message_ref
                        id=Field::Message.id()
                        name=Field::Message.id()
                        rows=6
                        placeholder="Tell me about your project or inquiry..."
                        aria-invalid=move || message_invalid().to_string()
                        aria-describedby=move || message_invalid().then(|| error_id(Field::Message))
                        prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.on_change(Field::Message, event_target_value(&ev)))
                        }
                        on:blur=move |_| form.update(|f| f.on_blur(Field::Message))
                        class=move || {
                            format!(
                                "w-full px-4 py-3 rounded-lg border transition-all resize-none {} focus:outline-none focus:ring-2 focus:border-transparent bg-background",
                                border_class(form.with(|f| f.status(Field::Message))),
                            )
                        }
                    ></textarea>
                    <ErrorText form field=Field::Message />
                    <div class="absolute bottom-3 right-3">
                        <span class=move || {
                            if form.with(ContactForm::message_near_limit) {
                                "text-xs text-red-500 font-semibold"
                            } else {
                                "text-xs text-muted-foreground"
                            }
                        }>
                            {move || {
                                format!(
                                    "{} characters remaining",
                                    form.with(ContactForm::message_remaining),
                                )
                            }}
                        </span>
                    </div>
                </div>
                <button
                    type="submit"
                    disabled=move || submission() == Submission::Submitting
                    class=move || {
                        if submission() == Submission::Submitting {
                            "w-full px-6 py-3 rounded-lg font-medium transition-all flex items-center justify-center gap-2 bg-muted text-muted-foreground cursor-not-allowed"
                        } else {
                            "w-full px-6 py-3 rounded-lg font-medium transition-all flex items-center justify-center gap-2 bg-primary text-primary-foreground hover:bg-primary/90 shadow-lg hover:shadow-xl"
                        }
                    }
                >
                    {move || match submission() {
                        Submission::Submitting => "Sending...",
                        Submission::Success => "Sent Successfully!",
                        Submission::Idle | Submission::Failure => "Send Message",
                    }}
                </button>
            </form>
            <Show when=move || submission() == Submission::Success>
                <div
                    aria-hidden="true"
                    class="fixed inset-0 flex items-center justify-center pointer-events-none z-50"
                >
                    <div class="bg-green-500 text-white p-8 rounded-full shadow-2xl">
                        <svg class="w-16 h-16" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M5 13l4 4L19 7"
                            />
                        </svg>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <main id="main-content" class="pt-24 pb-16">
            <section class="px-4 sm:px-6 lg:px-8 mb-16">
                <div class="max-w-4xl mx-auto text-center space-y-6">
                    <h1 class="text-5xl font-bold text-foreground">"Get In Touch"</h1>
                    <p class="text-xl text-muted-foreground leading-relaxed max-w-3xl mx-auto">
                        "I'm always interested in discussing research opportunities, academic collaborations, or potential career opportunities in engineering and technology."
                    </p>
                </div>
            </section>

            <section class="px-4 sm:px-6 lg:px-8 mb-20">
                <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div>
                        <h2 class="text-2xl font-bold text-foreground mb-6">"Send a Message"</h2>
                        <ContactFormView />
                    </div>
                    <div class="space-y-6">
                        <h2 class="text-2xl font-bold text-foreground mb-6">"Connect With Me"</h2>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="group relative flex items-center p-4 rounded-xl bg-card border border-border hover:border-primary/50 transition-all duration-300 overflow-hidden"
                                        >
                                            <div class=format!(
                                                "p-3 rounded-lg bg-gradient-to-r {} text-white mr-4",
                                                link.color,
                                            )>
                                                <i class=link.icon_class />
                                            </div>
                                            <div class="flex-1">
                                                <h3 class="text-sm font-semibold text-foreground">
                                                    {link.label}
                                                </h3>
                                                <p class="text-xs text-muted-foreground">
                                                    {link.description}
                                                </p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-8 p-6 rounded-xl bg-gradient-to-r from-primary/5 to-primary/10 border border-primary/20">
                            <h3 class="text-lg font-semibold text-foreground mb-3">
                                "Availability"
                            </h3>
                            <div class="space-y-2 text-sm text-muted-foreground">
                                <p class="flex items-center">
                                    <span class="w-2 h-2 bg-green-500 rounded-full mr-2 animate-pulse"></span>
                                    "Currently available for opportunities"
                                </p>
                                <p>
                                    <i class="extra-location mr-1" />
                                    "Chennai, Tamil Nadu, India"
                                </p>
                                <p>"Response time: Within 24 hours"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="px-4 sm:px-6 lg:px-8 mt-20">
                <div class="max-w-4xl mx-auto text-center p-12 rounded-2xl bg-hero-gradient text-primary-foreground shadow-glow">
                    <h2 class="text-3xl font-bold mb-4">"Let's Collaborate"</h2>
                    <p class="text-xl mb-8 opacity-90 max-w-2xl mx-auto">
                        "Whether you're interested in research collaboration, have exciting career opportunities, or want to discuss innovative projects in chemical engineering and machine learning."
                    </p>
                    <a
                        href=CV_PATH
                        download="AntonyRoshan_CV.pdf"
                        class="inline-flex items-center gap-2 px-6 py-3 bg-white/20 backdrop-blur-sm rounded-lg font-medium hover:bg-white/30 transition-colors"
                    >
                        <i class="extra-download" />
                        "Download CV"
                    </a>
                </div>
            </section>
        </main>
    }
}
