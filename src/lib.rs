#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Shared building blocks
pub mod token;
pub mod tokens;
pub mod errors;
pub mod events;
pub mod math;

// CEP-4626: Tokenized Vault Standard
pub mod cep4626;

// xVault: CEP-4626 with linearly streamed rewards
pub mod xvault;
