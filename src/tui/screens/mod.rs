pub mod crud;
pub mod login;
pub mod reset;
pub mod sign_up;

pub use crud::CrudState;
pub use login::LoginState;
pub use reset::ResetState;
pub use sign_up::SignUpState;
