mod analysis;
mod common;
mod summary;
