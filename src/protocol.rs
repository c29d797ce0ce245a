//! MSI SteelSeries feature report encoding.
//!
//! Every operation is an 8-byte feature report
//! `[1, 2, opcode, p0, p1, p2, p3, 236]` with unused payload bytes zero.

use bytes::{BufMut, Bytes, BytesMut};
use log::debug;

use crate::command::Command;
use crate::error::Error;
use crate::transport::Transport;

/// Total feature report size, report ID included.
const REPORT_LEN: usize = 8;
/// Report ID plus the fixed protocol preamble.
const PREAMBLE: [u8; 2] = [1, 2];
/// Fixed trailing byte of every report.
const TERMINATOR: u8 = 236;

/// Set a region's color from raw RGB channels.
const OP_SET_COLOR: u8 = 64;
/// Select the backlight mode.
const OP_SET_MODE: u8 = 65;
/// Set a region's color from the preset palette.
const OP_SET_COLOR_PRESET: u8 = 66;

/// Build one feature report. `payload` fills bytes 3..7, zero-padded.
fn feature_report(opcode: u8, payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(REPORT_LEN);
    buf.put_slice(&PREAMBLE);
    buf.put_u8(opcode);
    buf.put_slice(payload);
    buf.put_bytes(0, REPORT_LEN - 1 - PREAMBLE.len() - 1 - payload.len());
    buf.put_u8(TERMINATOR);
    buf.freeze()
}

impl Command {
    /// All feature reports for this command, in send order. Multi-region
    /// commands yield one report per region, in region-list order.
    pub(crate) fn feature_reports(&self) -> Vec<Bytes> {
        match self {
            Command::SetMode { mode } => vec![feature_report(OP_SET_MODE, &[*mode])],
            Command::SetColorPreset { regions, color, intensity } => regions
                .iter()
                .map(|region| feature_report(OP_SET_COLOR_PRESET, &[*region, *color, *intensity]))
                .collect(),
            Command::SetColor { regions, r, g, b } => regions
                .iter()
                .map(|region| feature_report(OP_SET_COLOR, &[*region, *r, *g, *b]))
                .collect(),
        }
    }
}

/// Send a command's reports synchronously and in order. The first transport
/// failure aborts the command's remaining reports.
pub(crate) fn send_command(transport: &mut dyn Transport, command: &Command) -> Result<(), Error> {
    for report in command.feature_reports() {
        debug!("sending feature report {:02x?}", &report[..]);
        transport.send_feature_report(&report)?;
    }
    Ok(())
}
