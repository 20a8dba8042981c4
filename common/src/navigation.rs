//! Back-navigation history.
//!
//! A LIFO stack of previously visited views plus the current one.
//! The stack is bounded at [`HISTORY_CAPACITY`] entries; once full, the
//! oldest entry is dropped to make room, so very long sessions forget where
//! they started rather than refusing to navigate.

use heapless::Deque;

use crate::config::HISTORY_CAPACITY;
use crate::views::View;

/// Current view plus the stack of views to return to.
#[derive(Clone, Debug)]
pub struct NavigationHistory {
    current: View,
    stack: Deque<View, HISTORY_CAPACITY>,
}

impl NavigationHistory {
    /// Start at `view` with an empty stack.
    pub const fn new(view: View) -> Self {
        Self {
            current: view,
            stack: Deque::new(),
        }
    }

    /// The view currently shown.
    #[inline]
    pub const fn current(&self) -> View { self.current }

    /// Number of views that `go_back` can return to.
    #[inline]
    pub fn depth(&self) -> usize { self.stack.len() }

    /// True when `go_back` would do nothing.
    #[inline]
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }

    /// Views on the stack, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &View> { self.stack.iter() }

    /// Switch to `view`, remembering the current one.
    ///
    /// Returns `false` (and changes nothing) if `view` is already current.
    pub fn navigate_to(
        &mut self,
        view: View,
    ) -> bool {
        if view == self.current {
            return false;
        }
        if self.stack.is_full() {
            self.stack.pop_front();
        }
        // Cannot fail: a slot was freed above.
        let _ = self.stack.push_back(self.current);
        self.current = view;
        true
    }

    /// Return to the most recent remembered view.
    ///
    /// Returns the view that was left, or `None` if the stack was empty.
    pub fn go_back(&mut self) -> Option<View> {
        let previous = self.stack.pop_back()?;
        Some(core::mem::replace(&mut self.current, previous))
    }
}

impl Default for NavigationHistory {
    fn default() -> Self { Self::new(View::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let nav = NavigationHistory::default();
        assert_eq!(nav.current(), View::Home);
        assert!(nav.is_empty());
    }

    #[test]
    fn test_navigate_to_same_view_is_noop() {
        let mut nav = NavigationHistory::new(View::PairingMenu);
        nav.navigate_to(View::PairingStatus);
        let depth = nav.depth();

        assert!(!nav.navigate_to(View::PairingStatus));
        assert_eq!(nav.depth(), depth);
        assert_eq!(nav.current(), View::PairingStatus);
    }

    #[test]
    fn test_go_back_on_empty_is_noop() {
        let mut nav = NavigationHistory::new(View::ControlRoomList);
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.current(), View::ControlRoomList);
    }

    #[test]
    fn test_push_pop_restores_previous() {
        let mut nav = NavigationHistory::default();
        nav.navigate_to(View::PairingMenu);
        nav.navigate_to(View::PairingAdd);

        assert_eq!(nav.go_back(), Some(View::PairingAdd));
        assert_eq!(nav.current(), View::PairingMenu);
        assert_eq!(nav.go_back(), Some(View::PairingMenu));
        assert_eq!(nav.current(), View::Home);
        assert_eq!(nav.go_back(), None);
    }

    #[test]
    fn test_revisits_are_stacked() {
        let mut nav = NavigationHistory::default();
        nav.navigate_to(View::PairingMenu);
        nav.navigate_to(View::ControlRoomList);
        nav.navigate_to(View::PairingMenu);

        let stacked: std::vec::Vec<View> = nav.iter().copied().collect();
        assert_eq!(stacked, [View::Home, View::PairingMenu, View::ControlRoomList]);
    }

    #[test]
    fn test_full_stack_drops_oldest() {
        let mut nav = NavigationHistory::default();
        for i in 0..HISTORY_CAPACITY + 5 {
            let next = if i % 2 == 0 { View::PairingMenu } else { View::ControlRoomList };
            assert!(nav.navigate_to(next));
        }
        assert_eq!(nav.depth(), HISTORY_CAPACITY);

        // Unwinding the whole stack never reaches the original Home entry.
        let mut last = nav.current();
        while nav.go_back().is_some() {
            last = nav.current();
        }
        assert_ne!(last, View::Home);
    }
}
