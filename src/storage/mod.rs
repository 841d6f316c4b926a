// storage/mod.rs
// Relational persistence for the cleaned book table

mod books;
mod pool;

pub use books::BookStore;
