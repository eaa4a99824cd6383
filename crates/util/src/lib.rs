pub mod path_processing;

pub use path_processing::*;
