//! Domain-level frontend features and their shared logic. Routes and
//! components import these modules to keep view code focused.

pub(crate) mod auth;
