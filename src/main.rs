//! Finds the best gifts for a group of game characters.

use gift_rank::{Host, run};
use std::io::{Write, stderr, stdout};

/// Host writing to the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

fn main() {
    run(&mut RealHost, std::env::args_os());
}
