pub mod dict_loader;

pub use dict_loader::load_dictionary;
