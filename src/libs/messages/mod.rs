pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

// Convenience functions for embedding layers that render text themselves
// instead of going through the macros.
pub fn warning(msg: Message) -> String {
    format!("⚠️  {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️  {}", msg)
}
