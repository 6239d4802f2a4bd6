use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use tracing::{debug, warn};

use crate::models::{AuthRequest, LoginForm};
use crate::services::{dispatch, AuthService};
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::{ActionButton, CredentialsPanel, FormField, PanelAction, PanelEvent, TextInput};

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

pub struct LoginState {
    pub form: LoginForm,
    pub panel: CredentialsPanel,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            form: LoginForm::default(),
            panel: CredentialsPanel::new(
                vec![
                    FormField::new("Email").with_input(TextInput::new().with_placeholder("you@example.com")),
                    FormField::new("Password").with_input(TextInput::new().masked()),
                ],
                vec![
                    ActionButton::new("Login", PanelAction::Submit),
                    ActionButton::new("Don't have an account? Sign Up", PanelAction::GoTo(ScreenId::SignUp)),
                    ActionButton::new("Forgot Password?", PanelAction::GoTo(ScreenId::Reset)),
                ],
            ),
        }
    }

    fn sync_field(&mut self, index: usize) {
        let value = self.panel.value(index).to_string();
        match index {
            EMAIL => self.form.set_email(value),
            PASSWORD => self.form.set_password(value),
            _ => {}
        }
    }

    async fn submit<A: AuthService>(&mut self, context: &mut AppContext<A>) -> ScreenTransition {
        let request = self.form.submit();

        if !context.config.verify_login {
            // Login is not verified; reaching the list only needs the button
            debug!("Login accepted without verification");
            return ScreenTransition::GoTo(ScreenId::Crud);
        }

        match dispatch(context.auth.as_ref(), &request).await {
            Ok(_) => ScreenTransition::GoTo(ScreenId::Crud),
            Err(e) => {
                warn!("Login failed for {}: {}", request.email(), e);
                context.messages.set_error(e.to_string());
                ScreenTransition::Stay
            }
        }
    }

    /// The request a submit would send right now
    pub fn pending_request(&self) -> AuthRequest {
        self.form.submit()
    }
}

#[async_trait]
impl<A: AuthService> Screen<A> for LoginState {
    fn render(&self, frame: &mut Frame, _context: &AppContext<A>) {
        let area = frame.area();
        self.panel.render(
            frame,
            area,
            "Login",
            &[("Tab", "Next"), ("Enter", "Select"), ("Esc", "Quit")],
        );
    }

    async fn handle_key(&mut self, context: &mut AppContext<A>, key: KeyEvent) -> Result<ScreenTransition> {
        if key.code == KeyCode::Esc {
            return Ok(ScreenTransition::Quit);
        }

        let transition = match self.panel.handle_key(key) {
            PanelEvent::Edited(index) => {
                self.sync_field(index);
                ScreenTransition::Stay
            }
            PanelEvent::Activated(PanelAction::Submit) => self.submit(context).await,
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
        ScreenId::Login
    }
}
