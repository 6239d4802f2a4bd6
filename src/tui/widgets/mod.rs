pub mod common;
pub mod credentials_panel;
pub mod form_field;
pub mod modal_dialog;
pub mod text_input;

pub use credentials_panel::{ActionButton, CredentialsPanel, PanelAction, PanelEvent};
pub use form_field::{FormField, ValidationState};
pub use modal_dialog::{DialogType, ModalDialog};
pub use text_input::TextInput;
