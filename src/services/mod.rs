//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and provider concerns so route handlers
//! can stay focused on protocol translation.

pub mod contact;
pub mod mailer;
