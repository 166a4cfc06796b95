//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod guard;
pub mod redirect;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod token;
pub mod update_account;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use guard::require_authenticated;
pub use redirect::redirect_target;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use update_account::{UpdateAccountInput, UpdateAccountUseCase, UpdateOutcome};
