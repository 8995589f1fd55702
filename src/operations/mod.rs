//! Business logic for each command
//!
//! Each operation is a struct over borrowed collaborators (project, registry,
//! template store) with an `Options` type derived from the CLI args. The
//! `commands` layer stays a thin wrapper around these.

pub mod add;
pub mod diff;
pub mod list;
pub mod remove;
pub mod update;
