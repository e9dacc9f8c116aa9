pub mod book;
pub mod error;
pub mod quiz;
pub mod slug;
