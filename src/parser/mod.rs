//! Line oriented parsers for colouring instances
//! (adjacency lists) and certificates.
mod adjacency_parser;
mod certificate_parser;

pub use adjacency_parser::{parse_adjacency_input, parse_k_coloring_input, Instance};
pub use certificate_parser::parse_certificate_input;

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;
