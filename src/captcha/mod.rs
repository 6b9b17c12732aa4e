pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::CaptchaError;
pub use traits::TokenVerifier;
pub use types::{CaptchaConfig, RecaptchaVerifier};
