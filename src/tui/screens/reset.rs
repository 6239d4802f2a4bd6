use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use tracing::warn;

use crate::models::ResetForm;
use crate::services::{dispatch, AuthService};
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::{ActionButton, CredentialsPanel, FormField, PanelAction, PanelEvent, TextInput};

const EMAIL: usize = 0;

pub struct ResetState {
    pub form: ResetForm,
    pub panel: CredentialsPanel,
}

impl Default for ResetState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetState {
    pub fn new() -> Self {
        Self {
            form: ResetForm::default(),
            panel: CredentialsPanel::new(
                vec![FormField::new("Email")
                    .with_input(TextInput::new().with_placeholder("you@example.com"))
                    .with_help("We'll send a reset link to this address")],
                vec![
                    ActionButton::new("Send Reset Link", PanelAction::Submit),
                    ActionButton::new("Back to Login", PanelAction::GoTo(ScreenId::Login)),
                ],
            ),
        }
    }

    async fn submit<A: AuthService>(&mut self, context: &mut AppContext<A>) {
        let request = self.form.submit();
        match dispatch(context.auth.as_ref(), &request).await {
            Ok(_) => {
                context
                    .messages
                    .set_success(format!("Reset link sent to {}", request.email()));
            }
            Err(e) => {
                warn!("Password reset failed: {}", e);
                self.panel.field_mut(EMAIL).set_error(e.to_string());
                context.messages.set_error(e.to_string());
            }
        }
    }
}

#[async_trait]
impl<A: AuthService> Screen<A> for ResetState {
    fn render(&self, frame: &mut Frame, _context: &AppContext<A>) {
        let area = frame.area();
        self.panel.render(
            frame,
            area,
            "Reset Password",
            &[("Tab", "Next"), ("Enter", "Select"), ("Esc", "Back to Login")],
        );
    }

    async fn handle_key(&mut self, context: &mut AppContext<A>, key: KeyEvent) -> Result<ScreenTransition> {
        if key.code == KeyCode::Esc {
            return Ok(ScreenTransition::GoTo(ScreenId::Login));
        }

        let transition = match self.panel.handle_key(key) {
            PanelEvent::Edited(_) => {
                self.form.set_email(self.panel.value(EMAIL));
                ScreenTransition::Stay
            }
            PanelEvent::Activated(PanelAction::Submit) => {
                self.submit(context).await;
                ScreenTransition::Stay
            }
            PanelEvent::Activated(PanelAction::GoTo(screen)) => ScreenTransition::GoTo(screen),
            PanelEvent::FocusMoved | PanelEvent::Unhandled => ScreenTransition::Stay,
        };
        Ok(transition)
    }

    async fn on_exit(&mut self, _context: &mut AppContext<A>) -> Result<()> {
        self.form.clear();
        self.panel.reset();
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::Reset
    }
}
