use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener_with_options, use_media_query, use_window, UseEventListenerOptions,
};

use crate::scroll::{normalize_offset, ScrollState, ScrollTracker};

fn current_offset() -> u32 {
    window().scroll_y().map(normalize_offset).unwrap_or(0)
}

/// Live scroll summary for the calling component.
///
/// Each call owns its tracker and exactly one passive `scroll` listener on `window`; both
/// go away with the caller's reactive owner, so remounting (route changes) never stacks
/// listeners. The server render reports the default top-of-page state.
pub fn use_scroll_direction(threshold: u32) -> Signal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());
    let tracker = StoredValue::new(ScrollTracker::new(threshold, 0));

    // seed from the real offset once mounted (reloads can restore mid-page)
    Effect::new(move |_| {
        let seeded = ScrollTracker::new(threshold, current_offset());
        set_state.set(seeded.state());
        tracker.set_value(seeded);
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            let offset = current_offset();
            let mut changed = false;
            tracker.update_value(|t| changed = t.observe(offset));
            if changed {
                let next = tracker.with_value(ScrollTracker::state);
                log::debug!("scroll {:?}", next);
                set_state.set(next);
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    state.into()
}

/// Whether the user asked the OS to minimise motion. Only animation durations react to this.
pub fn use_prefers_reduced_motion() -> Signal<bool> {
    use_media_query("(prefers-reduced-motion: reduce)")
}
