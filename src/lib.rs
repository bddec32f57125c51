//! Personal portfolio site: a server-rendered single page, a contact relay
//! and procedurally generated decorative scenes.

pub mod config;
pub mod content;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod scene;
pub mod services;
pub mod state;
