//! Integration tests for TUI screen navigation flows
//!
//! These drive `App::handle_key` with synthetic key events against a
//! `MockAuthService` and check screen, form and list state afterwards.

#![deny(unused_must_use)]

#[cfg(test)]
mod navigation_tests {
    use crate::list_editor::EditState;
    use crate::models::AppConfig;
    use crate::services::mock_auth::{AuthCall, MockAuthService};
    use crate::services::AuthError;
    use crate::tui::app::App;
    use crate::tui::screen_trait::ScreenId;
    use crate::tui::state::Navigable;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;

    /// Helper to create an app with a default config
    fn create_app(auth: MockAuthService) -> (App<MockAuthService>, MockAuthService) {
        let app = App::new(Arc::new(auth.clone()), AppConfig::default());
        (app, auth)
    }

    /// Helper to create a KeyEvent from a KeyCode
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(app: &mut App<MockAuthService>, code: KeyCode) {
        app.handle_key(key(code)).await.expect("Failed to handle key");
    }

    async fn type_text(app: &mut App<MockAuthService>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    /// Focus the control at `index` on a credential screen
    fn focus(app: &mut App<MockAuthService>, index: usize) {
        match app.current_screen() {
            ScreenId::Login => app.states.login_state.panel.set_selected(index),
            ScreenId::SignUp => app.states.sign_up_state.panel.set_selected(index),
            ScreenId::Reset => app.states.reset_state.panel.set_selected(index),
            ScreenId::Crud => panic!("no focus ring on the item list"),
        }
    }

    #[tokio::test]
    async fn test_starts_on_login() {
        let (app, _) = create_app(MockAuthService::new());
        assert_eq!(app.current_screen(), ScreenId::Login);
        assert!(!app.context.should_quit);
    }

    #[tokio::test]
    async fn test_login_to_sign_up_and_back() {
        let (mut app, _) = create_app(MockAuthService::new());

        // Email, Password, Login, Sign Up link
        focus(&mut app, 3);
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::SignUp);

        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.current_screen(), ScreenId::Login);
    }

    #[tokio::test]
    async fn test_login_to_reset_and_back_via_button() {
        let (mut app, _) = create_app(MockAuthService::new());

        focus(&mut app, 4);
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::Reset);

        // Email, Send Reset Link, Back to Login
        focus(&mut app, 2);
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::Login);
    }

    #[tokio::test]
    async fn test_login_submit_goes_to_crud_without_auth_call() {
        let (mut app, auth) = create_app(MockAuthService::new());

        type_text(&mut app, "me@example.com").await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.current_screen(), ScreenId::Crud);
        assert!(auth.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_submit_with_empty_fields_still_navigates() {
        let (mut app, _) = create_app(MockAuthService::new());
        focus(&mut app, 2);
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::Crud);
    }

    #[tokio::test]
    async fn test_verified_login_success() {
        let auth = MockAuthService::new();
        let config = AppConfig {
            verify_login: true,
            ..AppConfig::default()
        };
        let mut app = App::new(Arc::new(auth.clone()), config);

        type_text(&mut app, "me@example.com").await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.current_screen(), ScreenId::Crud);
        assert_eq!(auth.calls(), vec![AuthCall::Login("me@example.com".to_string())]);
    }

    #[tokio::test]
    async fn test_verified_login_failure_stays_on_login() {
        let auth = MockAuthService::failing(AuthError::Rejected("bad password".to_string()));
        let config = AppConfig {
            verify_login: true,
            ..AppConfig::default()
        };
        let mut app = App::new(Arc::new(auth.clone()), config);

        type_text(&mut app, "me@example.com").await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.current_screen(), ScreenId::Login);
        assert_eq!(app.context.messages.error(), Some("Request rejected: bad password"));
    }

    #[tokio::test]
    async fn test_verified_login_retry_after_failure() {
        let auth = MockAuthService::failing(AuthError::Unavailable("offline".to_string()));
        let config = AppConfig {
            verify_login: true,
            ..AppConfig::default()
        };
        let mut app = App::new(Arc::new(auth.clone()), config);

        type_text(&mut app, "me@example.com").await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::Login);
        assert!(app.context.messages.has_message());

        auth.set_failure(None);
        press(&mut app, KeyCode::Esc).await; // dismisses the popup only
        assert!(!app.context.should_quit);
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.current_screen(), ScreenId::Crud);
        assert_eq!(
            auth.calls(),
            vec![
                AuthCall::Login("me@example.com".to_string()),
                AuthCall::Login("me@example.com".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_sign_up_matching_passwords_requests_once() {
        let (mut app, auth) = create_app(MockAuthService::new());
        app.navigate(ScreenId::SignUp).await.unwrap();

        type_text(&mut app, "new@example.com").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "secret").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "secret").await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(auth.sign_up_count(), 1);
        assert_eq!(auth.calls(), vec![AuthCall::SignUp("new@example.com".to_string())]);
        assert_eq!(app.current_screen(), ScreenId::SignUp);
        assert_eq!(
            app.context.messages.success(),
            Some("Account requested for new@example.com")
        );
    }

    #[tokio::test]
    async fn test_sign_up_mismatch_raises_validation_error() {
        let (mut app, auth) = create_app(MockAuthService::new());
        app.navigate(ScreenId::SignUp).await.unwrap();

        type_text(&mut app, "new@example.com").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "secret").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "secreT").await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(auth.sign_up_count(), 0);
        assert_eq!(app.context.messages.error(), Some("Passwords do not match"));
        assert!(!app.states.sign_up_state.panel.field(2).is_valid());
        assert_eq!(app.current_screen(), ScreenId::SignUp);
    }

    #[tokio::test]
    async fn test_fixed_mismatch_clears_confirm_error() {
        let (mut app, auth) = create_app(MockAuthService::new());
        app.navigate(ScreenId::SignUp).await.unwrap();

        type_text(&mut app, "new@example.com").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "secret").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "secreT").await;
        press(&mut app, KeyCode::Enter).await;
        assert!(!app.states.sign_up_state.panel.field(2).is_valid());

        // Dismiss the popup, then make the password match the confirmation
        press(&mut app, KeyCode::Char('x')).await;
        focus(&mut app, 1);
        for _ in 0.."secret".len() {
            press(&mut app, KeyCode::Backspace).await;
        }
        type_text(&mut app, "secreT").await;
        assert!(!app.states.sign_up_state.panel.field(2).is_valid());

        press(&mut app, KeyCode::Enter).await;

        assert_eq!(auth.sign_up_count(), 1);
        assert!(app.states.sign_up_state.panel.field(2).is_valid());
        assert_eq!(
            app.context.messages.success(),
            Some("Account requested for new@example.com")
        );
    }

    #[tokio::test]
    async fn test_sign_up_service_failure_is_shown() {
        let (mut app, auth) = create_app(MockAuthService::failing(AuthError::Unavailable(
            "offline".to_string(),
        )));
        app.navigate(ScreenId::SignUp).await.unwrap();

        press(&mut app, KeyCode::Enter).await;

        assert_eq!(auth.sign_up_count(), 1);
        assert_eq!(
            app.context.messages.error(),
            Some("Authentication service unavailable: offline")
        );
        assert_eq!(app.current_screen(), ScreenId::SignUp);
    }

    #[tokio::test]
    async fn test_reset_sends_email() {
        let (mut app, auth) = create_app(MockAuthService::new());
        app.navigate(ScreenId::Reset).await.unwrap();

        type_text(&mut app, "forgot@example.com").await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(
            auth.calls(),
            vec![AuthCall::PasswordReset("forgot@example.com".to_string())]
        );
        assert_eq!(
            app.context.messages.success(),
            Some("Reset link sent to forgot@example.com")
        );
    }

    #[tokio::test]
    async fn test_reset_failure_keeps_screen() {
        let (mut app, _) = create_app(MockAuthService::failing(AuthError::MissingEmail));
        app.navigate(ScreenId::Reset).await.unwrap();

        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.current_screen(), ScreenId::Reset);
        assert_eq!(app.context.messages.error(), Some("Email is required"));
    }

    #[tokio::test]
    async fn test_message_dismissal_consumes_key() {
        let (mut app, _) = create_app(MockAuthService::new());
        app.context.messages.set_error("Test error");

        // Enter would normally submit the login form
        press(&mut app, KeyCode::Enter).await;

        assert!(!app.context.messages.has_message());
        assert_eq!(app.current_screen(), ScreenId::Login);
    }

    #[tokio::test]
    async fn test_credentials_discarded_on_leave() {
        let (mut app, _) = create_app(MockAuthService::new());

        type_text(&mut app, "me@example.com").await;
        assert_eq!(app.states.login_state.form.email, "me@example.com");

        focus(&mut app, 3);
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::SignUp);

        assert_eq!(app.states.login_state.form.email, "");
        assert_eq!(app.states.login_state.panel.value(0), "");

        type_text(&mut app, "other@example.com").await;
        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.states.sign_up_state.form.email, "");
    }

    #[tokio::test]
    async fn test_crud_has_no_outgoing_transition() {
        let (mut app, _) = create_app(MockAuthService::new());
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::Crud);

        // Esc is not wired to anything on the list
        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.current_screen(), ScreenId::Crud);
        assert!(!app.context.should_quit);
    }

    #[tokio::test]
    async fn test_navigate_bypasses_table_and_clears_list() {
        let (mut app, _) = create_app(MockAuthService::new());
        app.navigate(ScreenId::Crud).await.unwrap();
        app.states.crud_state.editor.add("Milk");

        app.navigate(ScreenId::Login).await.unwrap();
        assert_eq!(app.current_screen(), ScreenId::Login);
        assert!(app.states.crud_state.editor.is_empty());
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (mut app, _) = create_app(MockAuthService::new());
        press(&mut app, KeyCode::Esc).await;
        assert!(app.context.should_quit);

        let (mut app, _) = create_app(MockAuthService::new());
        app.navigate(ScreenId::SignUp).await.unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(app.context.should_quit);
        assert_eq!(app.current_screen(), ScreenId::SignUp);
    }

    #[tokio::test]
    async fn test_crud_end_to_end() {
        let (mut app, _) = create_app(MockAuthService::new());
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen(), ScreenId::Crud);

        press(&mut app, KeyCode::Char('a')).await;
        type_text(&mut app, "Milk").await;
        press(&mut app, KeyCode::Enter).await;

        press(&mut app, KeyCode::Char('a')).await;
        type_text(&mut app, "Eggs").await;
        press(&mut app, KeyCode::Enter).await;

        // Edit the first row
        press(&mut app, KeyCode::Up).await;
        press(&mut app, KeyCode::Char('e')).await;
        for _ in 0.."Milk".len() {
            press(&mut app, KeyCode::Backspace).await;
        }
        type_text(&mut app, "Bread").await;
        press(&mut app, KeyCode::Enter).await;

        // Delete the second row
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Char('d')).await;

        let crud = &app.states.crud_state;
        let texts: Vec<&str> = crud.editor.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Bread"]);
        assert_eq!(crud.editor.edit_state(), EditState::Idle);
        assert_eq!(crud.selected(), 0);
    }

    #[tokio::test]
    async fn test_deleting_edited_item_resets_edit() {
        let (mut app, _) = create_app(MockAuthService::new());
        app.navigate(ScreenId::Crud).await.unwrap();

        let crud = &mut app.states.crud_state;
        crud.editor.add("a");
        crud.editor.add("b");
        crud.editor.start_edit_at(1);
        crud.editor.delete_at(1);

        assert_eq!(crud.editor.edit_state(), EditState::Idle);
        assert_eq!(crud.editor.len(), 1);
    }
}
