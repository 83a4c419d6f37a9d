//! Reusable HTML components for transcript pages
//!
//! Maud component functions shared by the transcript controller and the
//! page generator.

pub mod layout;
pub mod message;
