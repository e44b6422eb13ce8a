//! Client-side state consulted during navigation.
//!
//! DESIGN
//! ======
//! Only the session accessor lives here; screen-level state belongs to the
//! screens themselves.

pub mod session;
