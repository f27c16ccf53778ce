//! Identity models.
//!
//! This module contains the user account model backing registration
//! and login.

pub mod user;
