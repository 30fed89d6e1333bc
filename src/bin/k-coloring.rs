#![warn(rust_2018_idioms)]

use graph_coloring::{cli::run_k_coloring, Error};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Error> {
    run_k_coloring()
}
