//! fieldcraft application library.
//!
//! Provides the application modules (videos, suggestions) registered into
//! the kernel's module registry.

pub mod modules;
