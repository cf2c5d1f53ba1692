pub mod customer;
pub mod dims;
pub mod items;
pub mod quote;
pub mod spec;
