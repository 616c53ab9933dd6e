//! Domain types, error taxonomy and pure validation logic for CoachHub.
//!
//! This crate has no internal dependencies so it can be shared by the
//! repository layer, the messaging gateway and the HTTP API.

pub mod audio_book;
pub mod content;
pub mod doubt;
pub mod error;
pub mod inquiry;
pub mod messaging;
pub mod pagination;
pub mod puzzle;
pub mod roles;
pub mod types;
