mod actor;
mod handle;
pub mod models;
pub mod parser;
pub mod retriever;
mod scheduler;
pub mod selector;

pub use handle::FeedHandle;
pub use models::{CalendarEvent, EventTime, FeedStatus};
pub use scheduler::start_scheduler;
