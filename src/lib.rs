#![warn(rust_2018_idioms)]

//! Checking graph colourings: decide bipartiteness
//! of a graph by 2-colouring it, and generate and
//! verify certificates for k-colourings.

pub mod debug;
pub use debug::Error;

pub mod graph;
pub mod parser;
pub mod input;
pub mod metric;
pub mod coloring;
pub mod certificate;
pub mod settings;
pub mod cli;
