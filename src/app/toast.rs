use leptos::prelude::*;

use crate::notify::{Notification, NotificationKind, Notifier};

#[derive(Debug, Clone)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Context-provided queue of on-screen notifications.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastNotifier {
    pub fn provide() {
        provide_context(Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let mut id = 0;
        self.next_id.update_value(|next| {
            id = *next;
            *next += 1;
        });
        log::debug!("toast {id}: {}", notification.message);

        let duration = notification.duration;
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let this = *self;
        set_timeout(move || this.dismiss(id), duration);
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();

    view! {
        <div
            role="status"
            aria-live="polite"
            class="fixed bottom-4 right-4 z-[200] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]"
        >
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let tone = match toast.notification.kind {
                        NotificationKind::Success => "border-green-500/50 bg-green-50 text-green-900 dark:bg-green-950 dark:text-green-100",
                        NotificationKind::Failure => "border-red-500/50 bg-red-50 text-red-900 dark:bg-red-950 dark:text-red-100",
                    };
                    view! {
                        <div class=format!(
                            "flex items-start justify-between gap-3 rounded-lg border p-4 shadow-lg {tone}",
                        )>
                            <p class="text-sm">{toast.notification.message}</p>
                            <button
                                type="button"
                                class="text-sm opacity-70 hover:opacity-100"
                                aria-label="Dismiss notification"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
