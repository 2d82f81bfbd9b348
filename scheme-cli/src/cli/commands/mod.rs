pub mod sql;
pub mod template;

pub use sql::SqlCommands;
pub use template::TemplateCommands;
