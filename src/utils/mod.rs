// Shared utils

pub mod browser;
pub mod constants;
pub mod validation;

pub use constants::*;
