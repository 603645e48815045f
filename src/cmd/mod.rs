pub mod layout;
pub mod replay;
