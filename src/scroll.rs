/// Offsets below this many pixels count as the top of the page.
pub const AT_TOP_CUTOFF: u32 = 10;
/// Minimum scroll delta (px) before the direction is re-evaluated.
pub const DEFAULT_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    Down,
    /// No qualifying movement has been observed yet.
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub position: u32,
    pub direction: ScrollDirection,
    pub is_at_top: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            position: 0,
            direction: ScrollDirection::None,
            is_at_top: true,
        }
    }
}

/// Debounced, direction-aware summary of the page scroll offset.
///
/// One tracker belongs to one observer (the navigation bar owns its own); feed it every
/// scroll event in dispatch order through [`ScrollTracker::observe`].
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: u32,
    last_recorded: u32,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(threshold: u32, initial_offset: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            last_recorded: initial_offset,
            state: ScrollState {
                position: initial_offset,
                direction: ScrollDirection::None,
                is_at_top: initial_offset < AT_TOP_CUTOFF,
            },
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Record a scroll event. Returns `true` if the published state changed.
    ///
    /// Moves smaller than the threshold are dropped unless they land at the top of the
    /// page, in which case the direction is still taken from the delta.
    pub fn observe(&mut self, offset: u32) -> bool {
        let is_at_top = offset < AT_TOP_CUTOFF;
        if offset.abs_diff(self.last_recorded) < self.threshold && !is_at_top {
            return false;
        }

        let direction = if offset > self.last_recorded {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_recorded = offset;

        let next = ScrollState {
            position: offset,
            direction,
            is_at_top,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, 0)
    }
}

/// Browsers report fractional offsets, and negative ones during elastic overscroll.
pub fn normalize_offset(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    raw.round().min(u32::MAX as f64) as u32
}
