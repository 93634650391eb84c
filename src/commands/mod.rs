//! Command implementations for notesim

pub mod compare;
pub mod dispatch;
pub mod keywords;
pub mod sections;
