use crate::scroll::{ScrollDirection, ScrollState};

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "Home",
        href: "/",
    },
    NavLink {
        name: "About",
        href: "/about",
    },
    NavLink {
        name: "Projects",
        href: "/projects",
    },
    NavLink {
        name: "Contact",
        href: "/contact",
    },
];

/// Elements inside the drawer that take part in the focus trap.
pub const FOCUSABLE_SELECTOR: &str =
    r#"a[href], button:not([disabled]), [tabindex]:not([tabindex="-1"])"#;

pub fn is_active(href: &str, pathname: &str) -> bool {
    href == pathname
}

/// The header shows at the top of the page and while scrolling up. Before any qualifying
/// movement the direction is `None`, which also counts as visible.
pub fn is_nav_visible(scroll: &ScrollState) -> bool {
    scroll.is_at_top || scroll.direction != ScrollDirection::Down
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    Open,
    Close,
    /// Menu button.
    Toggle,
    Escape,
    BackdropClick,
    LinkClick,
    RouteChange,
}

impl DrawerState {
    pub fn apply(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (Self::Closed, DrawerEvent::Open | DrawerEvent::Toggle) => Self::Open,
            (Self::Open, DrawerEvent::Open) => Self::Open,
            (Self::Closed, _) => Self::Closed,
            (Self::Open, _) => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Tab cycling over the drawer's focusable elements, addressed by index in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    len: usize,
}

impl FocusTrap {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Where focus goes when the drawer opens.
    pub fn initial(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Handle Tab / Shift+Tab with focus currently on `active` (`None` when focus is outside
    /// the set). Returns the index to focus if the keypress has to be intercepted; `None`
    /// leaves the browser's default tab order alone.
    pub fn on_tab(&self, active: Option<usize>, shift: bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let last = self.len - 1;
        match (active, shift) {
            (Some(0), true) => Some(last),
            (Some(i), false) if i == last => Some(0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(direction: ScrollDirection, is_at_top: bool) -> ScrollState {
        ScrollState {
            position: if is_at_top { 0 } else { 400 },
            direction,
            is_at_top,
        }
    }

    #[test]
    fn test_visibility() {
        assert!(is_nav_visible(&scroll(ScrollDirection::Up, false)));
        assert!(is_nav_visible(&scroll(ScrollDirection::Up, true)));
        assert!(is_nav_visible(&scroll(ScrollDirection::Down, true)));
        assert!(!is_nav_visible(&scroll(ScrollDirection::Down, false)));
        // first render, before any scroll event
        assert!(is_nav_visible(&scroll(ScrollDirection::None, false)));
        assert!(is_nav_visible(&ScrollState::default()));
    }

    #[test]
    fn test_drawer_transitions() {
        let closed = DrawerState::default();
        assert_eq!(closed, DrawerState::Closed);
        assert_eq!(closed.apply(DrawerEvent::Open), DrawerState::Open);
        assert_eq!(closed.apply(DrawerEvent::Toggle), DrawerState::Open);

        for event in [
            DrawerEvent::Close,
            DrawerEvent::Escape,
            DrawerEvent::BackdropClick,
            DrawerEvent::LinkClick,
            DrawerEvent::RouteChange,
        ] {
            assert_eq!(closed.apply(event), DrawerState::Closed, "{event:?}");
        }

        let open = DrawerState::Open;
        assert_eq!(open.apply(DrawerEvent::Open), DrawerState::Open);
        for event in [
            DrawerEvent::Close,
            DrawerEvent::Toggle,
            DrawerEvent::Escape,
            DrawerEvent::BackdropClick,
            DrawerEvent::LinkClick,
            DrawerEvent::RouteChange,
        ] {
            assert_eq!(open.apply(event), DrawerState::Closed, "{event:?}");
        }
    }

    #[test]
    fn test_route_change_closes_open_drawer() {
        let state = DrawerState::Closed
            .apply(DrawerEvent::Toggle)
            .apply(DrawerEvent::RouteChange);
        assert!(!state.is_open());
    }

    #[test]
    fn test_focus_trap_wraps() {
        let trap = FocusTrap::new(6);
        let first = trap.initial();
        assert_eq!(first, Some(0));

        // Shift+Tab straight after opening wraps to the last element
        assert_eq!(trap.on_tab(first, true), Some(5));
        // Tab on the last wraps to the first
        assert_eq!(trap.on_tab(Some(5), false), Some(0));

        // interior moves use the default order
        assert_eq!(trap.on_tab(Some(0), false), None);
        assert_eq!(trap.on_tab(Some(3), false), None);
        assert_eq!(trap.on_tab(Some(3), true), None);
        assert_eq!(trap.on_tab(Some(5), true), None);
        assert_eq!(trap.on_tab(None, false), None);
    }

    #[test]
    fn test_focus_trap_single_element() {
        let trap = FocusTrap::new(1);
        assert_eq!(trap.initial(), Some(0));
        assert_eq!(trap.on_tab(Some(0), true), Some(0));
        assert_eq!(trap.on_tab(Some(0), false), Some(0));
    }

    #[test]
    fn test_focus_trap_empty_is_noop() {
        let trap = FocusTrap::new(0);
        assert!(trap.is_empty());
        assert_eq!(trap.initial(), None);
        assert_eq!(trap.on_tab(None, false), None);
        assert_eq!(trap.on_tab(Some(0), true), None);
    }

    #[test]
    fn test_active_link() {
        assert!(is_active("/", "/"));
        assert!(is_active("/projects", "/projects"));
        assert!(!is_active("/", "/projects"));
        assert!(!is_active("/about", "/about/"));
        assert_eq!(NAV_LINKS.len(), 4);
    }
}
