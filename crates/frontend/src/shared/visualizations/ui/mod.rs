pub mod error_message;
pub mod filter_controls;
pub mod renderer;
