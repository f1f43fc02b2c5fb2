//! Textual encoding of a record's object reference.
//!
//! A reference is one of three shapes: the empty string (no object), a bare
//! name literal (one object), or a bracketed list of quoted names (several).
//! The leading `[` is the only discriminator, so a bare name must never start
//! with one.

use nom::{
    branch::alt,
    bytes::complete::take_till,
    character::complete::{char, multispace0},
    multi::separated_list0,
    IResult, Parser,
};

/// Decode a stored reference into its ordered name sequence.
///
/// Accepts single- or double-quoted names inside a list so that references
/// written by older sessions still read back. Order is preserved and
/// duplicates are kept.
pub fn decode(text: &str) -> Result<Vec<String>, String> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if !text.starts_with('[') {
        return Ok(vec![text.to_string()]);
    }
    match name_list(text) {
        Ok(("", names)) => Ok(names),
        Ok((_, _)) | Err(_) => Err(format!("Malformed object list: {}", text)),
    }
}

/// Encode an ordered name sequence, mirroring the decode rule exactly:
/// empty in, empty string out; one name in, bare literal out; more names in,
/// bracketed double-quoted list out.
pub fn encode(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [single] => single.clone(),
        _ => {
            let quoted: Vec<String> = names.iter().map(|name| format!("\"{}\"", name)).collect();
            format!("[{}]", quoted.join(", "))
        }
    }
}

fn name_list(input: &str) -> IResult<&str, Vec<String>> {
    let (input, _) = char('[')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, names) = separated_list0((multispace0, char(','), multispace0), quoted_name)
        .parse(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(']')(input)?;
    Ok((input, names))
}

fn quoted_name(input: &str) -> IResult<&str, String> {
    let (input, quote) = alt((char('\''), char('"'))).parse(input)?;
    let (input, name) = take_till(move |c| c == quote)(input)?;
    let (input, _) = char(quote)(input)?;
    Ok((input, name.to_string()))
}
