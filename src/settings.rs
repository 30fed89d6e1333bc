//! Settings for the command line tools,
//! filled from the parsed arguments.
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct TwoColoringSettings {
    /// File with the adjacency lists of the graph.
    pub instance: PathBuf,
    /// Print the table of the colouring if one exists.
    pub print_coloring: bool,
}

#[derive(Debug, Default)]
pub struct GenerateSettings {
    /// k-colouring instance the certificate is generated for.
    pub instance: PathBuf,
    /// File the certificate is written to. Overwritten if it exists.
    pub output: PathBuf,
    /// Seed for reproducible certificates. Seeded by the OS otherwise.
    pub seed: Option<u64>,
}

#[derive(Debug, Default)]
pub struct VerifySettings {
    /// k-colouring instance.
    pub instance: PathBuf,
    /// Certificate that is checked against the instance.
    pub certificate: PathBuf,
}
