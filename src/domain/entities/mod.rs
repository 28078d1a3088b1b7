//! Core domain entities.
//!
//! - [`ShortRecord`] - A bound short code and its destination URL
//! - [`CodeBlockList`] - Codes that may never be handed out

pub mod block_list;
pub mod short_record;

pub use block_list::CodeBlockList;
pub use short_record::ShortRecord;
