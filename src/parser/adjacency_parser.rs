//! Parser for colouring instances.
//! Line `i` of an instance lists the ids of the vertices
//! adjacent to vertex `i`, separated by blanks. The k-colouring
//! variant starts with an extra line that holds the number of colours.

use std::io::{self, BufRead};

use crate::{
    graph::{Colour, Graph},
    parse_single_line, Error,
};

use super::{Input, ParseResult};

/// A graph together with the number of colours
/// a k-colouring of it may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub graph: Graph,
    pub k: Colour,
}

/// Parse a single one based vertex id.
fn parse_vertex_id(input: Input<'_>) -> ParseResult<'_, i64> {
    use nom::{character::complete::i64, error::context};

    context("vertex id", i64)(input)
}

/// Parse the neighbours of one vertex from `n1 n2 ... nm`.
/// An empty line is a vertex without neighbours.
fn parse_adjacency_line(input: Input<'_>) -> ParseResult<'_, Vec<i64>> {
    use nom::{
        character::complete::{multispace0, multispace1},
        error::context,
        multi::separated_list0,
        sequence::delimited,
    };

    context(
        "List of neighbours of this vertex",
        delimited(
            multispace0,
            separated_list0(multispace1, parse_vertex_id),
            multispace0,
        ),
    )(input)
}

/// Parse the line that holds the number of colours `k`.
fn parse_colour_bound(input: Input<'_>) -> ParseResult<'_, Colour> {
    use nom::{
        character::complete::{i64, multispace0},
        error::context,
        sequence::delimited,
    };

    context("colour bound k", delimited(multispace0, i64, multispace0))(input)
}

fn parse_adjacency_list(line: &str) -> Result<Vec<i64>, Error> {
    use nom::combinator::eof;

    parse_single_line!(neighbours, parse_adjacency_line(line));
    Ok(neighbours)
}

fn parse_colour_bound_line(line: &str) -> Result<Colour, Error> {
    use nom::combinator::eof;

    parse_single_line!(k, parse_colour_bound(line));
    Ok(k)
}

/// Collect the adjacency lists of the remaining lines. `first_line`
/// is the (one based) line number of the first vertex.
fn parse_adjacency_lines<I>(lines: I, first_line: usize) -> Result<Graph, Error>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut adjacency_lists = Vec::new();

    for (offset, line) in lines.enumerate() {
        let line = line?;
        let neighbours =
            parse_adjacency_list(&line).map_err(|error| error.at_line(first_line + offset))?;
        adjacency_lists.push(neighbours);
    }

    Ok(Graph::from_adjacency_lists(&adjacency_lists)?)
}

/// Parse a two-colouring instance, i.e. one adjacency list per line.
pub fn parse_adjacency_input<B: BufRead>(input: B) -> Result<Graph, Error> {
    parse_adjacency_lines(input.lines(), 1)
}

/// Parse a k-colouring instance, i.e. the number of
/// colours followed by one adjacency list per line.
pub fn parse_k_coloring_input<B: BufRead>(input: B) -> Result<Instance, Error> {
    let mut lines = input.lines();

    // A missing first line is reported like a malformed one.
    let first_line = lines.next().transpose()?.unwrap_or_default();
    let k = parse_colour_bound_line(&first_line).map_err(|error| error.at_line(1))?;

    let graph = parse_adjacency_lines(lines, 2)?;

    Ok(Instance { graph, k })
}

#[cfg(test)]
mod test {
    use std::io::BufReader;

    use crate::graph::GraphError;

    use super::*;

    #[test]
    fn test_parse_adjacency_line() -> Result<(), Error> {
        assert_eq!(vec![2, 3, 10], parse_adjacency_line("2 3 10")?.1);
        assert_eq!(vec![2, 3], parse_adjacency_line("  2\t3 \r")?.1);
        assert_eq!(Vec::<i64>::new(), parse_adjacency_line("")?.1);

        Ok(())
    }

    #[test]
    fn test_parse_adjacency_list_rejects_garbage() {
        assert!(matches!(
            parse_adjacency_list("1 a 3"),
            Err(Error::ParseError { .. })
        ));
        assert!(matches!(
            parse_adjacency_list("1.5"),
            Err(Error::ParseError { .. })
        ));
        assert!(matches!(
            parse_adjacency_list("12abc"),
            Err(Error::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_colour_bound() -> Result<(), Error> {
        assert_eq!(3, parse_colour_bound("3")?.1);
        assert_eq!(12, parse_colour_bound(" 12 ")?.1);
        assert!(parse_colour_bound("k").is_err());

        Ok(())
    }

    #[test]
    fn test_parse_adjacency_input() -> Result<(), Error> {
        let txt = "2 3
1

1
";
        let buf = BufReader::new(txt.as_bytes());
        let parsed = parse_adjacency_input(buf)?;

        let mut graph = Graph::new_ordered(4);
        graph.add_arc(0, 1)?;
        graph.add_arc(0, 2)?;
        graph.add_arc(1, 0)?;
        graph.add_arc(3, 0)?;

        assert_eq!(graph, parsed);

        Ok(())
    }

    #[test]
    fn test_parse_adjacency_input_line_number() {
        let txt = "2\n1 x\n";
        let buf = BufReader::new(txt.as_bytes());
        match parse_adjacency_input(buf) {
            Err(Error::ParseError { line, .. }) => assert_eq!(2, line),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_adjacency_input_unknown_vertex() {
        let txt = "2\n1 3\n";
        let buf = BufReader::new(txt.as_bytes());
        assert!(matches!(
            parse_adjacency_input(buf),
            Err(Error::GraphError(GraphError(3)))
        ));
    }

    #[test]
    fn test_parse_empty_input() -> Result<(), Error> {
        let parsed = parse_adjacency_input(BufReader::new("".as_bytes()))?;
        assert_eq!(0, parsed.size());

        Ok(())
    }

    #[test]
    fn test_parse_k_coloring_input() -> Result<(), Error> {
        let txt = "3
2 3
1 3
1 2
";
        let buf = BufReader::new(txt.as_bytes());
        let instance = parse_k_coloring_input(buf)?;

        let mut graph = Graph::new_ordered(3);
        graph.add_edge(0, 1)?;
        graph.add_edge(0, 2)?;
        graph.add_edge(1, 2)?;

        assert_eq!(3, instance.k);
        assert_eq!(graph, instance.graph);

        Ok(())
    }

    #[test]
    fn test_parse_k_coloring_input_errors() {
        let missing_k = BufReader::new("".as_bytes());
        assert!(matches!(
            parse_k_coloring_input(missing_k),
            Err(Error::ParseError { line: 1, .. })
        ));

        let bad_k = BufReader::new("three\n2\n1\n".as_bytes());
        assert!(matches!(
            parse_k_coloring_input(bad_k),
            Err(Error::ParseError { line: 1, .. })
        ));

        let bad_vertex = BufReader::new("2\n2\n1 ?\n".as_bytes());
        assert!(matches!(
            parse_k_coloring_input(bad_vertex),
            Err(Error::ParseError { line: 3, .. })
        ));
    }
}
