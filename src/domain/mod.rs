//! Domain Layer
//!
//! The core of the automator: value types, the watch set and pure rules.
//!
//! ## Structure
//!
//! - `entities/` - Directory watch set
//! - `value_objects/` - Event masks, watch handles, artifact naming, verbosity
//! - `services/` - Staleness rule, AMD module naming
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - Watching, processes, fixing and reporting go
//!    through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
