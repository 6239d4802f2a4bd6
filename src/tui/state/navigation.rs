//! Wrapping selection over a list of entries
//!
//! Used for the item list on the Crud screen and for the focus ring on the
//! credential screens.

/// Trait for types that support list navigation
///
/// Types implementing this trait only need to provide the core data accessors;
/// `next`, `previous`, `first`, `last` and `clamp` come for free.
///
/// # Example
/// ```
/// use authlist::tui::state::Navigable;
///
/// struct Focus {
///     controls: usize,
///     focused: usize,
/// }
///
/// impl Navigable for Focus {
///     fn len(&self) -> usize {
///         self.controls
///     }
///
///     fn selected(&self) -> usize {
///         self.focused
///     }
///
///     fn set_selected(&mut self, index: usize) {
///         self.focused = index;
///     }
/// }
///
/// let mut focus = Focus { controls: 3, focused: 2 };
/// focus.next();
/// assert_eq!(focus.selected(), 0);
/// focus.previous();
/// assert_eq!(focus.selected(), 2);
/// ```
pub trait Navigable {
    /// Returns the number of entries
    fn len(&self) -> usize;

    /// Returns the currently selected index
    fn selected(&self) -> usize;

    /// Sets the selected index
    fn set_selected(&mut self, index: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move selection to the next entry, wrapping to start if at end
    fn next(&mut self) {
        if !self.is_empty() {
            let current = self.selected();
            self.set_selected((current + 1) % self.len());
        }
    }

    /// Move selection to the previous entry, wrapping to end if at start
    fn previous(&mut self) {
        if !self.is_empty() {
            let current = self.selected();
            if current > 0 {
                self.set_selected(current - 1);
            } else {
                self.set_selected(self.len() - 1);
            }
        }
    }

    fn first(&mut self) {
        if !self.is_empty() {
            self.set_selected(0);
        }
    }

    fn last(&mut self) {
        let len = self.len();
        if len > 0 {
            self.set_selected(len - 1);
        }
    }

    /// Pull the selection back inside the list after it shrank
    fn clamp(&mut self) {
        let len = self.len();
        if len == 0 {
            self.set_selected(0);
        } else if self.selected() >= len {
            self.set_selected(len - 1);
        }
    }
}
