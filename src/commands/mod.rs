//! CLI command handlers

mod download;
mod renderer;
mod upload;

pub use download::handle_download_command;
pub use renderer::ProgressRenderer;
pub use upload::handle_upload_command;
