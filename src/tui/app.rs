use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::screen_trait::{Screen, ScreenId, ScreenTransition};
use super::screens;
use super::state::MessageDisplay;
use super::state_machine::Navigator;
use crate::models::AppConfig;
use crate::services::AuthService;

/// Context that screens need access to (everything except screen states)
pub struct AppContext<A: AuthService> {
    pub auth: Arc<A>,
    pub config: AppConfig,
    pub should_quit: bool,
    pub messages: MessageDisplay,
    pub navigator: Navigator,
}

/// Container for all screen states
pub struct ScreenStates {
    pub login_state: screens::LoginState,
    pub sign_up_state: screens::SignUpState,
    pub reset_state: screens::ResetState,
    pub crud_state: screens::CrudState,
}

impl ScreenStates {
    fn new() -> Self {
        Self {
            login_state: screens::LoginState::new(),
            sign_up_state: screens::SignUpState::new(),
            reset_state: screens::ResetState::new(),
            crud_state: screens::CrudState::new(),
        }
    }

    fn get<A: AuthService>(&self, id: ScreenId) -> &dyn Screen<A> {
        match id {
            ScreenId::Login => &self.login_state,
            ScreenId::SignUp => &self.sign_up_state,
            ScreenId::Reset => &self.reset_state,
            ScreenId::Crud => &self.crud_state,
        }
    }

    fn get_mut<A: AuthService>(&mut self, id: ScreenId) -> &mut dyn Screen<A> {
        match id {
            ScreenId::Login => &mut self.login_state,
            ScreenId::SignUp => &mut self.sign_up_state,
            ScreenId::Reset => &mut self.reset_state,
            ScreenId::Crud => &mut self.crud_state,
        }
    }
}

pub struct App<A: AuthService> {
    pub context: AppContext<A>,
    pub states: ScreenStates,
}

impl<A: AuthService> App<A> {
    pub fn new(auth: Arc<A>, config: AppConfig) -> Self {
        Self {
            context: AppContext {
                auth,
                config,
                should_quit: false,
                messages: MessageDisplay::new(),
                navigator: Navigator::new(),
            },
            states: ScreenStates::new(),
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.context.navigator.current()
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let tick = self.context.config.tick();
        let initial = self.current_screen();
        self.states.get_mut::<A>(initial).on_enter(&mut self.context).await?;

        while !self.context.should_quit {
            terminal.draw(|frame| {
                let current = self.context.navigator.current();
                self.states.get::<A>(current).render(frame, &self.context);
                self.context.messages.render(frame, frame.area());
            })?;

            // Handle input with timeout
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await?;
                    }
                }
            }
        }

        info!("Quitting from {}", self.current_screen());
        Ok(())
    }

    /// Process one key press: global keys first, then the active screen
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.context.should_quit = true;
            return Ok(());
        }

        // Any key dismisses a popup and is consumed
        if self.context.messages.has_message() {
            self.context.messages.clear();
            return Ok(());
        }

        let current = self.current_screen();
        let transition = self
            .states
            .get_mut::<A>(current)
            .handle_key(&mut self.context, key)
            .await?;

        self.apply_transition(transition).await
    }

    async fn apply_transition(&mut self, transition: ScreenTransition) -> Result<()> {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoTo(to) => {
                let from = self.current_screen();
                if from == to {
                    return Ok(());
                }
                match self.context.navigator.transition(to) {
                    Ok(()) => self.switch_screens(from, to).await?,
                    Err(e) => warn!("Ignoring navigation request: {}", e),
                }
            }
            ScreenTransition::Quit => {
                self.context.should_quit = true;
            }
        }
        Ok(())
    }

    /// Move to `to` without consulting the transition table
    ///
    /// Lifecycle hooks still run, so the screen being left drops its state.
    pub async fn navigate(&mut self, to: ScreenId) -> Result<()> {
        let from = self.current_screen();
        if from == to {
            return Ok(());
        }
        self.context.navigator.navigate(to);
        self.switch_screens(from, to).await
    }

    async fn switch_screens(&mut self, from: ScreenId, to: ScreenId) -> Result<()> {
        self.states.get_mut::<A>(from).on_exit(&mut self.context).await?;
        let entered = self.states.get_mut::<A>(to);
        debug!("Entering {}", entered.id());
        entered.on_enter(&mut self.context).await?;
        Ok(())
    }
}
