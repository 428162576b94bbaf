use crate::types::geometry::{Length, Unit};
use crate::types::grid::Track;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, tuple},
};

/// Parse a floating point or integer number (e.g., "8", "1.5", ".5").
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, rem, %, fr).
fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("px"), |_| Unit::Px),
        map(tag("rem"), |_| Unit::Rem),
        map(tag("em"), |_| Unit::Em),
        map(tag("fr"), |_| Unit::Fraction),
        map(char('%'), |_| Unit::Percent),
    ))(input)
}

/// Parse a single length (e.g., "8px", "50%", "auto").
///
/// A bare number is only accepted when it is zero.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();

    if let Ok((remaining, _)) = tag::<&str, &str, nom::error::Error<&str>>("auto")(input) {
        return Ok((remaining, Length::AUTO));
    }

    let (rest, value) = parse_number(input)?;
    let (rest, unit) = opt(parse_unit_suffix)(rest)?;

    match unit {
        Some(unit) => Ok((rest, Length { value, unit })),
        None if value == 0.0 => Ok((rest, Length::ZERO)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Parse `repeat(<count>, <length>+)`.
fn parse_repeat(input: &str) -> IResult<&str, Track> {
    let (input, _) = tag("repeat")(input)?;
    let (input, (count, sizes)) = delimited(
        pair(char('('), multispace0),
        pair(
            map_res(digit1, |s: &str| s.parse::<u16>()),
            preceded(
                tuple((multispace0, char(','), multispace0)),
                separated_list1(multispace1, parse_length),
            ),
        ),
        pair(multispace0, char(')')),
    )(input)?;
    Ok((input, Track::Repeat(count, sizes)))
}

/// Parse one track: a repeat expression or a single length.
fn parse_track(input: &str) -> IResult<&str, Track> {
    alt((parse_repeat, map(parse_length, Track::Size)))(input)
}

/// Parse a whitespace-separated track list.
pub fn parse_track_list(input: &str) -> IResult<&str, Vec<Track>> {
    preceded(multispace0, separated_list1(multispace1, parse_track))(input)
}

/// Parse a `@media (min-width: <length>)` guard.
pub fn parse_min_width_query(input: &str) -> IResult<&str, Length> {
    preceded(
        tuple((tag("@media"), multispace0, char('('), multispace0)),
        delimited(
            tuple((tag("min-width"), multispace0, char(':'))),
            parse_length,
            pair(multispace0, char(')')),
        ),
    )(input)
}
