//! Route table, access guard, and navigation pipeline.
//!
//! ARCHITECTURE
//! ============
//! `table` declares what exists, `guard` decides whether a resolved target
//! may be shown, `navigator` strings both together per navigation and
//! remembers the route on screen.

pub mod guard;
pub mod navigator;
pub mod table;
