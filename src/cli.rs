//! Command line interfaces of the two-colouring
//! checker and the k-colouring certificate tools.

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    io::{self, Write},
    path::PathBuf,
};

use crate::{
    certificate::{generate, verify},
    coloring::two_colour,
    debug::{coloring_pretty, verdict},
    input::{read_certificate, read_graph, read_instance, save_certificate},
    metric::{count_edges, count_vertices, max_degree_vertex},
    settings::{GenerateSettings, TwoColoringSettings, VerifySettings},
    Error,
};

/// Runs the 2-colouring algorithm on a graph.
#[derive(Parser, Debug)]
#[command(name = "two-coloring")]
#[command(about = "Decides if a graph is 2-colourable and prints a 2-colouring")]
pub struct TwoColoringCli {
    /// File with the instance, line i lists the neighbours of vertex i
    pub path: PathBuf,

    /// Don't print the table of the colouring
    #[arg(long)]
    pub no_table: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Generates and verifies certificates of the graph colouring problem.
#[derive(Parser, Debug)]
#[command(name = "k-coloring")]
#[command(about = "Generates and verifies certificates for k-colourings of graphs")]
pub struct KColoringCli {
    #[command(subcommand)]
    pub command: KColoringCommands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum KColoringCommands {
    /// Generate a random certificate for an instance
    #[command(name = "generar", alias = "generate")]
    Generate {
        /// File with the instance, the first line holds k
        path: PathBuf,
        /// File the certificate is written to
        gen: PathBuf,
        /// Seed for the random colours
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Verify a certificate against an instance
    #[command(name = "verificar", alias = "verify")]
    Verify {
        /// File with the instance, the first line holds k
        path_ejemplar: PathBuf,
        /// File with one colour per line
        path_certificado: PathBuf,
    },
}

impl From<&TwoColoringCli> for TwoColoringSettings {
    fn from(cli: &TwoColoringCli) -> Self {
        TwoColoringSettings {
            instance: cli.path.clone(),
            print_coloring: !cli.no_table,
        }
    }
}

/// Install the logger. Logs go to stderr to keep stdout for the results.
pub fn init_logging(verbose: bool) -> Result<(), Error> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn run_two_coloring() -> Result<(), Error> {
    let cli = TwoColoringCli::parse();
    init_logging(cli.verbose)?;

    let stdout = io::stdout();
    two_coloring(&TwoColoringSettings::from(&cli), &mut stdout.lock())
}

#[cfg(not(tarpaulin_include))]
pub fn run_k_coloring() -> Result<(), Error> {
    let cli = KColoringCli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        KColoringCommands::Generate { path, gen, seed } => generate_certificate(&GenerateSettings {
            instance: path,
            output: gen,
            seed,
        }),
        KColoringCommands::Verify {
            path_ejemplar,
            path_certificado,
        } => {
            let stdout = io::stdout();
            verify_certificate(
                &VerifySettings {
                    instance: path_ejemplar,
                    certificate: path_certificado,
                },
                &mut stdout.lock(),
            )
        }
    }
}

/// Print the size of the graph, its vertex of maximum degree
/// and whether it is 2-colourable (with a colouring if so).
pub fn two_coloring<W: Write>(settings: &TwoColoringSettings, out: &mut W) -> Result<(), Error> {
    crate::log_time!("reading the graph", graph, read_graph(&settings.instance)?);

    writeln!(out, "Número de Vértices: {}", count_vertices(&graph))?;
    writeln!(out, "Número de Aristas {}", count_edges(&graph))?;
    match max_degree_vertex(&graph) {
        Some((vertex, degree)) => writeln!(
            out,
            "El vértice de grado máximo es {} y tiene grado {}",
            vertex, degree
        )?,
        None => writeln!(out, "El ejemplar no tiene vértices")?,
    }

    crate::time!(colouring_time, coloring, two_colour(&graph));
    tracing::debug!("two-colouring took {:?}", colouring_time);

    writeln!(
        out,
        "¿La gráfica del ejemplar es 2-coloreable?: {}",
        verdict(coloring.is_some())
    )?;

    if let Some(coloring) = coloring {
        debug_assert!(verify(&graph, &coloring.to_certificate(), 2));
        if settings.print_coloring {
            writeln!(out, "{}", coloring_pretty(&coloring))?;
        }
    }

    out.flush().map_err(Error::from)
}

/// Write a random candidate colouring for the instance.
pub fn generate_certificate(settings: &GenerateSettings) -> Result<(), Error> {
    // Only the number of vertices and k are needed.
    let instance = read_instance(&settings.instance)?;
    let size = count_vertices(&instance.graph);

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let certificate = generate(size, instance.k, &mut rng)?;
    save_certificate(&settings.output, &certificate)?;

    tracing::info!(
        "wrote certificate with {} colours from [1, {}] to {:?}",
        certificate.len(),
        instance.k,
        settings.output
    );
    Ok(())
}

/// Print the size of the instance, k, the colours used by the
/// certificate and whether it is a valid k-colouring.
pub fn verify_certificate<W: Write>(settings: &VerifySettings, out: &mut W) -> Result<(), Error> {
    let instance = read_instance(&settings.instance)?;
    let certificate = read_certificate(&settings.certificate)?;
    let graph = &instance.graph;
    let k = instance.k;

    if certificate.len() != graph.size() {
        tracing::warn!(
            "certificate has {} colours for {} vertices",
            certificate.len(),
            graph.size()
        );
    }

    writeln!(out, "Número de Vértices: {}", count_vertices(graph))?;
    writeln!(out, "Número de Aristas: {}", count_edges(graph))?;
    writeln!(out, "Entero K: {}", k)?;
    writeln!(
        out,
        "Número colores utilizados (certificado): {}",
        certificate.max_colour().unwrap_or(0)
    )?;

    crate::time!(verify_time, valid, verify(graph, &certificate, k));
    tracing::debug!("verification took {:?}", verify_time);

    writeln!(
        out,
        "¿El ejemplar, con el certificado dado, es K={} coloreable? {}",
        k,
        verdict(valid)
    )?;

    out.flush().map_err(Error::from)
}
