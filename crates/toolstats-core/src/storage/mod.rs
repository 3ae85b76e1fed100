mod item_file;

pub use item_file::*;
