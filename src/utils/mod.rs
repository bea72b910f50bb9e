pub mod colors;
pub mod path;
pub mod table;

pub use path::expand_tilde;
pub use table::Table;
