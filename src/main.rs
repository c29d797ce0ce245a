//! MSI SteelSeries keyboard backlight CLI tool.
//!
//! The HID protocol is derived from
//! https://github.com/bparker06/msi-keyboard.

use std::process;

use clap::{crate_description, crate_name, crate_version, Arg, Command};

use crate::command::Step;
use crate::error::Error;
use crate::tables::Axis;
use crate::transport::HidTransport;

mod command;
mod error;
mod protocol;
mod tables;
mod transport;

fn main() {
    env_logger::init();

    let matches = cli().get_matches();

    let tokens: Vec<String> = matches
        .get_many::<String>("command")
        .map(|tokens| tokens.cloned().collect())
        .unwrap_or_default();

    if let Err(err) = run(&tokens) {
        eprintln!("{}: {}", crate_name!(), err);
        process::exit(1);
    }
}

/// Apply all command tokens in input order.
///
/// Each token is parsed and sent before the next one is looked at, so a
/// failing token never rolls back frames of earlier tokens. An axis `"?"`
/// query prints its name listing and ends the run successfully, regardless
/// of pending tokens.
fn run(tokens: &[String]) -> Result<(), Error> {
    let mut keyboard = HidTransport::open()?;

    for token in tokens {
        match command::parse_token(token)? {
            Step::Command(command) => protocol::send_command(&mut keyboard, &command)?,
            Step::AxisNames(names) => {
                println!("{}", names);
                return Ok(());
            },
        }
    }

    Ok(())
}

/// Get clap CLI parameters.
fn cli() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .override_usage(format!("{} COMMAND [COMMAND] [...]", crate_name!()))
        .after_help(grammar_help())
        .arg(
            Arg::new("command")
                .help("Backlight commands, applied in order")
                .value_name("COMMAND")
                .num_args(0..),
        )
}

/// Command grammar reference shown by `--help`, with the name listings
/// generated from the axis tables so help and resolution cannot drift.
fn grammar_help() -> String {
    format!(
        "COMMAND:\n\
         \tm:MODE\n\
         \tp:REGIONS:COLOR:INTENSITY\n\
         \tc:REGIONS:R:G:B\n\
         MODE:      {}\n\
         REGIONS:   all | REGION[,...]\n\
         REGION:    {}\n\
         COLOR:     {}\n\
         INTENSITY: {}\n\
         R/G/B:     <Integer value>\n\
         example: '{} m:normal p:all:green:h' (all-green keyboard)",
        Axis::Mode.listing(),
        Axis::Region.listing(),
        Axis::Color.listing(),
        Axis::Intensity.listing(),
        crate_name!(),
    )
}
