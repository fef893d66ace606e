pub mod token;

pub use token::{AccessClaims, RefreshClaims, RefreshToken, TokenPair};
