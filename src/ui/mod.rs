pub mod messages;
pub mod pager;
pub mod prompt;

pub use prompt::Prompt;
