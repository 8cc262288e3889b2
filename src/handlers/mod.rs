// Handlers module

pub mod execute_tool;
pub mod health;
pub mod list_tools;
pub mod rejection;

pub use execute_tool::execute_tool_handler;
pub use health::health_handler;
pub use list_tools::list_tools_handler;
pub use rejection::body_rejection_handler;
