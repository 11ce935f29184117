//! Domain Layer
//!
//! The installer's configuration model and rules, free of terminal and
//! process I/O.
//!
//! ## Structure
//!
//! - `entities/` - Environment Map and Progress Record
//! - `value_objects/` - Certificate configuration and deployment profile
//! - `policies/` - Input validation rules
//! - `ports/` - Interfaces for the console and external commands

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
