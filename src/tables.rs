//! Name-to-code tables for the four command axes.
//!
//! The codes come from the MSI SteelSeries HID protocol and must be
//! preserved exactly. Each axis is a flat ordered list of (name, code)
//! pairs; single-letter aliases are ordinary entries resolved first-match
//! in table order.

use crate::error::Error;

/// Backlight modes. Code 0 carries no name, so codes start at 1 and 0 is
/// only reachable through the numeric fallback.
const MODES: &[(&str, u8)] = &[
    ("normal", 1),
    ("gaming", 2),
    ("breathe", 3),
    ("demo", 4),
    ("wave", 5),
];

pub(crate) const REGION_LEFT: u8 = 1;
pub(crate) const REGION_MIDDLE: u8 = 2;
pub(crate) const REGION_RIGHT: u8 = 3;

/// Keyboard zones, long names before their aliases.
const REGIONS: &[(&str, u8)] = &[
    ("left", REGION_LEFT),
    ("middle", REGION_MIDDLE),
    ("right", REGION_RIGHT),
    ("l", REGION_LEFT),
    ("m", REGION_MIDDLE),
    ("r", REGION_RIGHT),
];

/// Preset colors.
const COLORS: &[(&str, u8)] = &[
    ("off", 0),
    ("red", 1),
    ("orange", 2),
    ("yellow", 3),
    ("green", 4),
    ("sky", 5),
    ("blue", 6),
    ("purple", 7),
    ("white", 8),
];

/// Preset brightness levels, long names before their aliases.
const INTENSITIES: &[(&str, u8)] = &[
    ("high", 0),
    ("medium", 1),
    ("low", 2),
    ("light", 3),
    ("h", 0),
    ("m", 1),
    ("l", 2),
];

/// One independent attribute category with its own name table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Axis {
    Mode,
    Region,
    Color,
    Intensity,
}

/// Result of resolving one parameter against an axis.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// The resolved 8-bit protocol code.
    Code(u8),
    /// The `"?"` sentinel was queried: the comma-joined name listing to
    /// print before terminating successfully.
    Listing(String),
}

impl Axis {
    fn entries(self) -> &'static [(&'static str, u8)] {
        match self {
            Axis::Mode => MODES,
            Axis::Region => REGIONS,
            Axis::Color => COLORS,
            Axis::Intensity => INTENSITIES,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Axis::Mode => "mode",
            Axis::Region => "region",
            Axis::Color => "color",
            Axis::Intensity => "intensity",
        }
    }

    /// All registered names, comma-joined in table order.
    pub(crate) fn listing(self) -> String {
        let names: Vec<_> = self.entries().iter().map(|(name, _)| *name).collect();
        names.join(", ")
    }

    /// Resolve one parameter token to its protocol code.
    ///
    /// `"?"` yields the axis listing instead of a code. Names are matched
    /// exactly, case-sensitively, in table order; unmatched tokens fall
    /// back to whole-string integer parsing, truncated to 8 bits. Empty
    /// tokens are rejected before the numeric fallback.
    pub(crate) fn resolve(self, token: &str) -> Result<Lookup, Error> {
        if token == "?" {
            return Ok(Lookup::Listing(self.listing()));
        }

        for (name, code) in self.entries() {
            if *name == token {
                return Ok(Lookup::Code(*code));
            }
        }

        if token.is_empty() {
            return Err(self.invalid(token));
        }

        parse_code(token).map(Lookup::Code).ok_or_else(|| self.invalid(token))
    }

    fn invalid(self, token: &str) -> Error {
        Error::InvalidName { axis: self.name(), token: token.into() }
    }
}

/// Parse an integer literal consuming the whole token, truncated to 8 bits.
///
/// Accepts `0x`/`0o`/`0b` prefixes or plain decimal; empty or partially
/// numeric tokens yield `None`. Also used for the raw R/G/B parameters,
/// which have no name table.
pub(crate) fn parse_code(token: &str) -> Option<u8> {
    if token.is_empty() {
        return None;
    }

    let value = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(oct) = token.strip_prefix("0o") {
        u32::from_str_radix(oct, 8)
    } else if let Some(bin) = token.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        token.parse::<u32>()
    };

    value.ok().map(|value| value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_documented_codes() {
        assert_eq!(Axis::Mode.resolve("normal"), Ok(Lookup::Code(1)));
        assert_eq!(Axis::Mode.resolve("wave"), Ok(Lookup::Code(5)));
        assert_eq!(Axis::Region.resolve("left"), Ok(Lookup::Code(1)));
        assert_eq!(Axis::Region.resolve("m"), Ok(Lookup::Code(2)));
        assert_eq!(Axis::Color.resolve("off"), Ok(Lookup::Code(0)));
        assert_eq!(Axis::Color.resolve("white"), Ok(Lookup::Code(8)));
        assert_eq!(Axis::Intensity.resolve("light"), Ok(Lookup::Code(3)));
    }

    #[test]
    fn every_code_has_a_name_that_round_trips() {
        for axis in [Axis::Mode, Axis::Region, Axis::Color, Axis::Intensity] {
            for (name, code) in axis.entries() {
                assert_eq!(axis.resolve(name), Ok(Lookup::Code(*code)));
            }
        }
    }

    #[test]
    fn intensity_long_names_resolve() {
        // The original C lookup skipped the first table entry, making
        // "high" resolvable only through its alias.
        assert_eq!(Axis::Intensity.resolve("high"), Ok(Lookup::Code(0)));
        assert_eq!(Axis::Intensity.resolve("h"), Ok(Lookup::Code(0)));
    }

    #[test]
    fn aliases_match_their_long_names() {
        for (long, alias) in [("left", "l"), ("middle", "m"), ("right", "r")] {
            assert_eq!(Axis::Region.resolve(long), Axis::Region.resolve(alias));
        }
    }

    #[test]
    fn question_mark_lists_names_in_table_order() {
        assert_eq!(
            Axis::Mode.resolve("?"),
            Ok(Lookup::Listing("normal, gaming, breathe, demo, wave".into()))
        );
        assert_eq!(
            Axis::Region.resolve("?"),
            Ok(Lookup::Listing("left, middle, right, l, m, r".into()))
        );
        assert_eq!(
            Axis::Intensity.resolve("?"),
            Ok(Lookup::Listing("high, medium, low, light, h, m, l".into()))
        );
    }

    #[test]
    fn empty_token_is_invalid_not_zero() {
        for axis in [Axis::Mode, Axis::Region, Axis::Color, Axis::Intensity] {
            assert_eq!(
                axis.resolve(""),
                Err(Error::InvalidName { axis: axis.name(), token: String::new() })
            );
        }
    }

    #[test]
    fn numeric_fallback_truncates_to_u8() {
        assert_eq!(Axis::Mode.resolve("123"), Ok(Lookup::Code(123)));
        assert_eq!(Axis::Region.resolve("300"), Ok(Lookup::Code(44)));
        assert_eq!(Axis::Color.resolve("0x21"), Ok(Lookup::Code(0x21)));
        assert_eq!(Axis::Color.resolve("0x100"), Ok(Lookup::Code(0)));
        assert_eq!(Axis::Intensity.resolve("0b101"), Ok(Lookup::Code(5)));
    }

    #[test]
    fn partial_numeric_tokens_are_rejected() {
        assert_eq!(
            Axis::Mode.resolve("12x"),
            Err(Error::InvalidName { axis: "mode", token: "12x".into() })
        );
        assert!(parse_code("0x").is_none());
        assert!(parse_code("10 ").is_none());
        assert!(parse_code("").is_none());
        assert!(parse_code("-1").is_none());
    }
}
