pub mod logging;
pub mod pacing;
pub mod text;

pub use pacing::wait_with_countdown;
pub use text::html_to_text;
