pub mod reader;
pub mod writer;

pub use reader::{read_image, read_name_list};
pub use writer::{convert_image, write_tiles};
