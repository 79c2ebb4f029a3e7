pub mod advisory;
pub mod knowledge;
