//! Parser for certificates, i.e. one colour per line in vertex order.

use std::io::BufRead;

use crate::{certificate::Certificate, graph::Colour, parse_single_line, Error};

use super::{Input, ParseResult};

fn parse_colour(input: Input<'_>) -> ParseResult<'_, Colour> {
    use nom::{
        character::complete::{i64, multispace0},
        error::context,
        sequence::delimited,
    };

    context("colour", delimited(multispace0, i64, multispace0))(input)
}

fn parse_colour_line(line: &str) -> Result<Colour, Error> {
    use nom::combinator::eof;

    parse_single_line!(colour, parse_colour(line));
    Ok(colour)
}

pub fn parse_certificate_input<B: BufRead>(input: B) -> Result<Certificate, Error> {
    let mut colours = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        colours.push(parse_colour_line(&line).map_err(|error| error.at_line(index + 1))?);
    }

    Ok(Certificate::from(colours))
}

#[cfg(test)]
mod test {
    use std::io::BufReader;

    use super::*;

    #[test]
    fn test_parse_colour() -> Result<(), Error> {
        assert_eq!(4, parse_colour("4")?.1);
        assert_eq!(-1, parse_colour(" -1\r")?.1);

        Ok(())
    }

    #[test]
    fn test_parse_certificate_input() -> Result<(), Error> {
        let txt = "1
2
1
3
";
        let buf = BufReader::new(txt.as_bytes());
        let certificate = parse_certificate_input(buf)?;

        assert_eq!(&[1, 2, 1, 3], certificate.colours());

        Ok(())
    }

    #[test]
    fn test_parse_certificate_input_errors() {
        let two_per_line = BufReader::new("1\n2 3\n".as_bytes());
        assert!(matches!(
            parse_certificate_input(two_per_line),
            Err(Error::ParseError { line: 2, .. })
        ));

        let blank_line = BufReader::new("1\n\n2\n".as_bytes());
        assert!(matches!(
            parse_certificate_input(blank_line),
            Err(Error::ParseError { line: 2, .. })
        ));

        let not_a_colour = BufReader::new("red\n".as_bytes());
        assert!(matches!(
            parse_certificate_input(not_a_colour),
            Err(Error::ParseError { line: 1, .. })
        ));
    }
}
