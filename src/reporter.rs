//! State reporting for the scheduler.
//!
//! The scheduler never prints on its own; it is handed a [`Reporter`] and
//! emits informational lines and table snapshots through it. [`ConsoleReporter`]
//! reproduces the classic `[INFO]` console trace, [`TracingReporter`] routes the
//! same output into `tracing`, and [`Recorder`] keeps everything in memory.

use std::io;
use std::io::Write;

pub const INFO_PREFIX: &str = "[INFO] ";
pub const SEPARATOR: &str = "--------------------------------";

pub trait Reporter {
    fn line(&mut self, message: &str);
    fn table(&mut self, header: &[&str], rows: &[Vec<String>]);
}

/// Renders a table as `[INFO] `-prefixed lines, one per header/row.
///
/// Every column is padded to the widest cell in it (header included) and each
/// cell is followed by a single space. Short rows are padded with empty cells.
pub fn format_table(header: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for (i, cell) in header.iter().enumerate() {
        widths[i] = widths[i].max(cell.chars().count());
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| {
        let mut out = String::from(INFO_PREFIX);
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            out.push_str(&format!("{cell:<width$} "));
        }
        out
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render(header.to_vec()));
    for row in rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines
}

/// Writes reports to any `io::Write`, each followed by a separator line.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, lines: &[String]) {
        let result = lines
            .iter()
            .try_for_each(|l| writeln!(self.out, "{l}"))
            .and_then(|_| writeln!(self.out, "{SEPARATOR}"));
        if let Err(e) = result {
            tracing::warn!("failed to write report: {e}");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn line(&mut self, message: &str) {
        self.emit(&[format!("{INFO_PREFIX}{message}")]);
    }

    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) {
        self.emit(&format_table(header, rows));
    }
}

/// Sends every report line to `tracing` at info level, each report followed by
/// a separator event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    fn emit<'a>(&self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            tracing::info!(target: "look_elevator::report", "{line}");
        }
        tracing::info!(target: "look_elevator::report", "{SEPARATOR}");
    }
}

impl Reporter for TracingReporter {
    fn line(&mut self, message: &str) {
        self.emit([message]);
    }

    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) {
        let lines = format_table(header, rows);
        self.emit(lines.iter().map(String::as_str).map(bare));
    }
}

fn bare(line: &str) -> &str {
    line.strip_prefix(INFO_PREFIX).unwrap_or(line).trim_end()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Line(String),
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Keeps reports in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    reports: Vec<Report>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().filter_map(|r| match r {
            Report::Line(l) => Some(l.as_str()),
            Report::Table { .. } => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = (&[String], &[Vec<String>])> {
        self.reports.iter().filter_map(|r| match r {
            Report::Table { header, rows } => Some((header.as_slice(), rows.as_slice())),
            Report::Line(_) => None,
        })
    }
}

impl Reporter for Recorder {
    fn line(&mut self, message: &str) {
        self.reports.push(Report::Line(message.to_string()));
    }

    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) {
        self.reports.push(Report::Table {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: rows.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn columns_pad_to_widest_cell() {
        let lines = format_table(
            &["Queue", "Pickup Floor"],
            &[row(&["UP", "7"]), row(&["DOWN", "12"])],
        );
        assert_eq!(
            lines,
            vec![
                "[INFO] Queue Pickup Floor ",
                "[INFO] UP    7            ",
                "[INFO] DOWN  12           ",
            ]
        );
    }

    #[test]
    fn row_wider_than_header_widens_column() {
        let lines = format_table(&["A"], &[row(&["Passenger 1"])]);
        assert_eq!(lines, vec!["[INFO] A           ", "[INFO] Passenger 1 "]);
    }

    #[test]
    fn short_rows_are_padded() {
        let lines = format_table(&["A", "B"], &[row(&["x"])]);
        assert_eq!(lines, vec!["[INFO] A B ", "[INFO] x   "]);
    }

    #[test]
    fn console_writes_separator_after_each_report() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.line("hello");
        reporter.table(&["H"], &[row(&["1"])]);

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            out,
            format!("[INFO] hello\n{SEPARATOR}\n[INFO] H \n[INFO] 1 \n{SEPARATOR}\n")
        );
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_reporter_separates_each_report() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut reporter = TracingReporter;
            reporter.line("hello");
            reporter.table(&["Queue", "Pickup Floor"], &[row(&["UP", "7"])]);
        });

        let bytes = captured.0.lock().unwrap().clone();
        let out = String::from_utf8(bytes).unwrap();
        let messages: Vec<_> = out
            .lines()
            .map(|l| l.trim_start().trim_start_matches("INFO").trim())
            .collect();
        assert_eq!(
            messages,
            vec![
                "hello",
                SEPARATOR,
                "Queue Pickup Floor",
                "UP    7",
                SEPARATOR,
            ]
        );
    }

    #[test]
    fn recorder_keeps_order() {
        let mut recorder = Recorder::new();
        recorder.line("one");
        recorder.table(&["H"], &[row(&["x"])]);
        recorder.line("two");

        assert_eq!(recorder.lines().collect::<Vec<_>>(), vec!["one", "two"]);
        assert_eq!(recorder.tables().count(), 1);
        assert_eq!(
            recorder.reports()[1],
            Report::Table {
                header: vec!["H".to_string()],
                rows: vec![row(&["x"])],
            }
        );
    }
}
