//! Output Fixer Implementations

mod amd;

pub use amd::AmdModuleFixer;
