//! Shared types for phone number to word translation.
//!
//! # Architecture
//!
//! - [`encoding`] -- Fixed digit-to-letters table and the [`encoding::Digit`] newtype
//! - [`character`] -- Separator handling, word normalization, index keys
//! - [`token`] -- Tokens and immutable, structurally shared token chains

pub mod character;
pub mod encoding;
pub mod token;

pub use encoding::{Digit, EncodingError};
pub use token::{Token, TokenChain};
