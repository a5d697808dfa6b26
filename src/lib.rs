// Library crate exposing modules for integration tests

pub mod cli;
pub mod graph;
pub mod input;
pub mod model;
pub mod repository;
pub mod util;
pub mod view;
pub mod viewmodel;
