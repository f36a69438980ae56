//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`policy`** - static route-access classification table
//! - **`auth`** - authorization gate consulting the policy table

pub mod auth;
pub mod policy;

pub use auth::{authorization_gate, AuthUser, CurrentUser};
pub use policy::{route_access, Access};
