//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the generation logic so route handlers can stay
//! focused on request parsing and status mapping.

pub mod question;
