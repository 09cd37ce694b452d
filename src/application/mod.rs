//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AutomateUseCase` - Watches the asset root, compiles TypeScript, fixes
//!   output and removes orphaned artifacts

pub mod automate;

pub use automate::{AutomateOptions, AutomateUseCase, CompilerSettings};
