pub mod entry_name;
pub mod path_ext;
pub mod xxhash;
