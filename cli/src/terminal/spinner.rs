use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Shows a spinner with `msg` until [`stop`] is called.
///
/// Nothing is drawn when stdout is not a terminal, e.g. when run from a scheduler.
pub fn start(msg: String) {
    if !console::Term::stdout().is_term() {
        return;
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);
    pb.set_style(style);
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut active) = ACTIVE.lock() {
        if let Some(previous) = active.replace(pb) {
            previous.finish_and_clear();
        }
    }
}

pub fn stop() {
    if let Ok(mut active) = ACTIVE.lock() {
        if let Some(pb) = active.take() {
            pb.finish_and_clear();
        }
    }
}

/// Stdout writer that keeps log lines from being drawn over by a running spinner.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active = ACTIVE.lock().ok().and_then(|active| active.clone());
        match active {
            Some(pb) => pb.suspend(|| io::stdout().write_all(buf))?,
            None => io::stdout().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
