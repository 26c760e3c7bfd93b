//! The audio-cue sink: a terminal bell on "food eaten".
use std::io::{self, Write};

/// Ring the terminal bell.  Fire-and-forget: write errors are swallowed,
/// since a missed cue must never stall the tick loop.
pub(crate) fn food_eaten() {
    let mut out = io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}
