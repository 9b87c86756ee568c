pub mod export_files;
pub mod session_file;

pub use export_files::*;
pub use session_file::*;
