mod string_catalog;

pub use string_catalog::StringCatalog;
