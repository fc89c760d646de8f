//! Colored console output for the per-request lines and the summary.

use anstyle::{AnsiColor, Color, Style};
use reqtimer_core::fetch::FetchError;
use reqtimer_core::stats::Metrics;
use reqtimer_core::timer::{self, Reporter, TimedRequest};
use std::io::{self, IsTerminal, Write};

const COLOR_GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const COLOR_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
const COLOR_CYAN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const COLOR_BLUE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));

/// Line-oriented reporter. Write errors (e.g. a closed pipe) are dropped so a
/// run is never cut short by its own output.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Stdout, colored only when it is a terminal and `no_color` is unset.
    pub fn stdout(no_color: bool) -> Self {
        let out = io::stdout();
        let color = !no_color && out.is_terminal();
        Self::new(out, color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, style: Style, text: &str) {
        let _ = if self.color {
            writeln!(self.out, "{}{}{}", style.render(), text, style.render_reset())
        } else {
            writeln!(self.out, "{}", text)
        };
    }

    pub fn banner(&mut self) {
        self.line(COLOR_BLUE, "Request Timer CLI");
    }

    pub fn error(&mut self, msg: &str) {
        self.line(COLOR_RED, msg);
    }
}

impl<W: Write> Reporter for Console<W> {
    fn request_succeeded(&mut self, timed: &TimedRequest) {
        self.line(COLOR_GREEN, &timer::success_line(timed));
    }

    fn request_failed(&mut self, err: &FetchError) {
        self.error(&timer::failure_line(err));
    }

    fn metrics(&mut self, metrics: &Metrics) {
        self.line(COLOR_CYAN, &timer::metrics_line(metrics));
    }
}
