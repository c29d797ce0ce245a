//! Command grammar parser.
//!
//! One argument token is one grammar unit `<char>:<param>[:<param>...]`.
//! Parameter resolution happens here, so a fully parsed [`Command`] carries
//! only protocol codes and can be encoded without further validation.

use crate::error::Error;
use crate::tables::{parse_code, Axis, Lookup, REGION_LEFT, REGION_MIDDLE, REGION_RIGHT};

/// A fully resolved backlight command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    SetMode { mode: u8 },
    SetColorPreset { regions: Vec<u8>, color: u8, intensity: u8 },
    SetColor { regions: Vec<u8>, r: u8, g: u8, b: u8 },
}

/// Outcome of parsing one token.
///
/// An axis `"?"` query is not an error but still short-circuits the run, so
/// it is an explicit variant rather than a process exit buried inside
/// resolution.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Command(Command),
    /// Name listing to print before terminating with status 0.
    AxisNames(String),
}

/// Resolve a parameter, short-circuiting the surrounding parse on a `"?"`
/// listing. The first `"?"` in textual order wins.
macro_rules! code {
    ($lookup:expr) => {
        match $lookup? {
            Lookup::Code(code) => code,
            Lookup::Listing(names) => return Ok(Step::AxisNames(names)),
        }
    };
}

/// Parse one argument token into a command or a name listing.
pub(crate) fn parse_token(token: &str) -> Result<Step, Error> {
    let mut chars = token.chars();
    let cmd = match (chars.next(), chars.next()) {
        (Some(cmd), Some(':')) => cmd,
        _ => return Err(Error::MalformedCommand(token.into())),
    };
    let params: Vec<&str> = chars.as_str().split(':').collect();

    match cmd {
        'm' => {
            if params.len() != 1 {
                return Err(Error::MalformedCommand(token.into()));
            }
            let mode = code!(Axis::Mode.resolve(params[0]));
            Ok(Step::Command(Command::SetMode { mode }))
        },
        'p' => {
            if params.len() != 3 {
                return Err(Error::MalformedCommand(token.into()));
            }
            let regions = match regions(params[0])? {
                RegionList::Codes(regions) => regions,
                RegionList::Listing(names) => return Ok(Step::AxisNames(names)),
            };
            let color = code!(Axis::Color.resolve(params[1]));
            let intensity = code!(Axis::Intensity.resolve(params[2]));
            Ok(Step::Command(Command::SetColorPreset { regions, color, intensity }))
        },
        'c' => {
            if params.len() != 4 {
                return Err(Error::MalformedCommand(token.into()));
            }
            let regions = match regions(params[0])? {
                RegionList::Codes(regions) => regions,
                RegionList::Listing(names) => return Ok(Step::AxisNames(names)),
            };
            let r = rgb(params[1])?;
            let g = rgb(params[2])?;
            let b = rgb(params[3])?;
            Ok(Step::Command(Command::SetColor { regions, r, g, b }))
        },
        cmd => Err(Error::UnknownCommand(cmd)),
    }
}

enum RegionList {
    Codes(Vec<u8>),
    Listing(String),
}

/// Expand a region list. `"all"` is the full left-to-right set; otherwise
/// every comma-separated element resolves independently, preserving order
/// and duplicates.
fn regions(list: &str) -> Result<RegionList, Error> {
    if list == "all" {
        return Ok(RegionList::Codes(vec![REGION_LEFT, REGION_MIDDLE, REGION_RIGHT]));
    }

    let mut codes = Vec::new();
    for region in list.split(',') {
        match Axis::Region.resolve(region)? {
            Lookup::Code(code) => codes.push(code),
            Lookup::Listing(names) => return Ok(RegionList::Listing(names)),
        }
    }
    Ok(RegionList::Codes(codes))
}

/// Raw 8-bit color channel: integer only, no name table, no `"?"` query.
fn rgb(token: &str) -> Result<u8, Error> {
    parse_code(token).ok_or_else(|| Error::InvalidName { axis: "rgb", token: token.into() })
}
