//! Client state modules.
//!
//! DESIGN
//! ======
//! State types are plain structs with transition methods; pages wrap them in
//! `RwSignal`s so the logic stays testable outside the reactive runtime.

pub mod auth_form;
pub mod jobs;
pub mod session;
