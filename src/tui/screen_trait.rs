use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::services::AuthService;
use crate::tui::app::AppContext;

/// Screen trait defines the interface for all TUI screens
///
/// This trait formalizes the screen lifecycle and provides a consistent
/// interface for rendering, input handling, and lifecycle hooks.
///
/// Note: Methods take `&mut self` for state and `context` for app-level resources.
/// This separation allows us to borrow screen state and app context independently,
/// avoiding self-referential borrow issues.
#[async_trait]
pub trait Screen<A: AuthService>: Send {
    /// Render this screen to the terminal frame
    fn render(&self, frame: &mut Frame, context: &AppContext<A>);

    /// Handle keyboard input and return the next screen transition
    async fn handle_key(&mut self, context: &mut AppContext<A>, key: KeyEvent) -> Result<ScreenTransition>;

    /// Called when entering this screen (optional lifecycle hook)
    async fn on_enter(&mut self, context: &mut AppContext<A>) -> Result<()> {
        let _ = context;
        Ok(())
    }

    /// Called when leaving this screen (optional lifecycle hook)
    ///
    /// Screens drop any transient input here.
    async fn on_exit(&mut self, context: &mut AppContext<A>) -> Result<()> {
        let _ = context;
        Ok(())
    }

    /// Get the screen identifier
    fn id(&self) -> ScreenId;
}

/// Screen transition represents the result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen (no navigation)
    Stay,

    /// Navigate to a specific screen, subject to the transition table
    GoTo(ScreenId),

    /// Quit the application
    Quit,
}

/// Screen identifier for each screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Login,
    SignUp,
    Reset,
    Crud,
}

impl ScreenId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
            Self::Reset => "Reset Password",
            Self::Crud => "Items",
        }
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
