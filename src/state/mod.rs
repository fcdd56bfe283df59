//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `enrollment`) and provided to the tree
//! as `RwSignal` contexts from the root `App`.

pub mod auth;
pub mod enrollment;
