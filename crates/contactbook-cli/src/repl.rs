use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use contactbook_config::ReplConfig;
use contactbook_core::AddressBook;
use tracing::debug;

use crate::commands::{dispatch, Context, Reply, FAREWELL};

/// Reads commands line by line until `close`/`exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    ctx: &Context,
    repl: &ReplConfig,
) -> Result<()> {
    let mut book = AddressBook::new();
    writeln!(output, "{}", repl.greeting)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", repl.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).context("read command")? == 0 {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        // Invalid UTF-8 is replaced with U+FFFD.
        let line = String::from_utf8_lossy(&buf);
        match dispatch(&line, &mut book, ctx) {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
            Reply::Silent => {}
        }
    }

    debug!(contacts = book.len(), "session finished");
    Ok(())
}
