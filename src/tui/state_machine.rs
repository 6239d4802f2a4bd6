use thiserror::Error;
use tracing::{debug, info};

use crate::tui::screen_trait::ScreenId;

/// Every transition the application wires up. Crud has no way out.
const TRANSITIONS: &[(ScreenId, ScreenId)] = &[
    (ScreenId::Login, ScreenId::SignUp),
    (ScreenId::Login, ScreenId::Reset),
    (ScreenId::Login, ScreenId::Crud),
    (ScreenId::SignUp, ScreenId::Login),
    (ScreenId::Reset, ScreenId::Login),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no transition from {from} to {to}")]
    Unsupported { from: ScreenId, to: ScreenId },
}

/// Navigator tracks which screen is active
///
/// Screens are owned by the App struct; only the active screen's identity
/// lives here. There is no history: returning to an earlier screen is an
/// ordinary transition.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: ScreenId,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: ScreenId::Login,
        }
    }
}

impl Navigator {
    /// Create a new Navigator starting at the login screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current screen ID
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Overwrite the current screen without consulting the transition table
    pub fn navigate(&mut self, to: ScreenId) {
        debug!("Navigating {} -> {}", self.current, to);
        self.current = to;
    }

    pub fn can_transition(from: ScreenId, to: ScreenId) -> bool {
        TRANSITIONS.contains(&(from, to))
    }

    /// Apply a transition from the table
    ///
    /// Moving to the screen that is already active succeeds without change.
    /// Anything else not in the table is rejected and leaves state untouched.
    pub fn transition(&mut self, to: ScreenId) -> Result<(), NavigationError> {
        let from = self.current;
        if from == to {
            return Ok(());
        }
        if !Self::can_transition(from, to) {
            return Err(NavigationError::Unsupported { from, to });
        }
        info!("Screen {} -> {}", from, to);
        self.current = to;
        Ok(())
    }

    /// Screens reachable from `from`
    pub fn targets(from: ScreenId) -> impl Iterator<Item = ScreenId> {
        TRANSITIONS
            .iter()
            .filter(move |(f, _)| *f == from)
            .map(|(_, to)| *to)
    }
}
