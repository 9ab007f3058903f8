mod object_store_mysql;

pub use object_store_mysql::*;
