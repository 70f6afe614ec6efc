pub mod catalog;
pub mod interactive;
pub mod preview;
pub mod receipt;
pub mod status;
