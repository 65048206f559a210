pub mod token;

pub use token::{AuthenticationResult, Claims, TokenClass};
