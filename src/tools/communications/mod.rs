pub mod reply;
pub mod tool_router;

pub use tool_router::{CommunicationsRouter, CommunicationsSvc};
