use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use tracing::{info, warn};

use crate::models::SignUpForm;
use crate::services::{dispatch, AuthService};
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::{ActionButton, CredentialsPanel, FormField, PanelAction, PanelEvent, TextInput};

const EMAIL: usize = 0;
const PASSWORD: usize = 1;
const CONFIRM_PASSWORD: usize = 2;

pub struct SignUpState {
    pub form: SignUpForm,
    pub panel: CredentialsPanel,
}

impl Default for SignUpState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpState {
    pub fn new() -> Self {
        Self {
            form: SignUpForm::default(),
            panel: CredentialsPanel::new(
                vec![
                    FormField::new("Email").with_input(TextInput::new().with_placeholder("you@example.com")),
                    FormField::new("Password").with_input(TextInput::new().masked()),
                    FormField::new("Confirm Password").with_input(TextInput::new().masked()),
                ],
                vec![
                    ActionButton::new("Sign Up", PanelAction::Submit),
                    ActionButton::new("Already have an account? Login", PanelAction::GoTo(ScreenId::Login)),
                ],
            ),
        }
    }

    fn sync_field(&mut self, index: usize) {
        let value = self.panel.value(index).to_string();
        match index {
            EMAIL => self.form.set_email(value),
            PASSWORD => self.form.set_password(value),
            CONFIRM_PASSWORD => self.form.set_confirm_password(value),
            _ => {}
        }
    }

    async fn submit<A: AuthService>(&mut self, context: &mut AppContext<A>) {
        let request = match self.form.submit() {
            Ok(request) => {
                self.panel.field_mut(CONFIRM_PASSWORD).clear_error();
                request
            }
            Err(e) => {
                self.panel.field_mut(CONFIRM_PASSWORD).set_error(e.to_string());
                context.messages.set_error(e.to_string());
                return;
            }
        };

        match dispatch(context.auth.as_ref(), &request).await {
            Ok(_) => {
                info!("Sign-up accepted for {}", request.email());
                context
                    .messages
                    .set_success(format!("Account requested for {}", request.email()));
            }
            Err(e) => {
                warn!("Sign-up failed for {}: {}", request.email(), e);
                context.messages.set_error(e.to_string());
            }
        }
    }
}

#[async_trait]
impl<A: AuthService> Screen<A> for SignUpState {
    fn render(&self, frame: &mut Frame, _context: &AppContext<A>) {
        let area = frame.area();
        self.panel.render(
            frame,
            area,
            "Sign Up",
            &[("Tab", "Next"), ("Enter", "Select"), ("Esc", "Back to Login")],
        );
    }

    async fn handle_key(&mut self, context: &mut AppContext<A>, key: KeyEvent) -> Result<ScreenTransition> {
        if key.code == KeyCode::Esc {
            return Ok(ScreenTransition::GoTo(ScreenId::Login));
        }

        let transition = match self.panel.handle_key(key) {
            PanelEvent::Edited(index) => {
                self.sync_field(index);
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
        ScreenId::SignUp
    }
}
