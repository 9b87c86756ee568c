pub mod command_tree;

pub use command_tree::*;
