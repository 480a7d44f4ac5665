use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// A blocking, line based input stream for the input operator.
///
/// The parser calls [`LineSource::read_line`] each time it reaches an input
/// token and parses the returned line in its place.
pub trait LineSource {
    /// Reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` once the stream is closed.
    ///
    /// # Errors
    /// Returns any I/O error of the underlying stream.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Receives the characters emitted by the output operator.
pub trait OutputSink {
    /// Emits a single character.
    ///
    /// # Errors
    /// Returns any I/O error of the underlying stream.
    fn emit(&mut self, ch: char) -> io::Result<()>;
}

/// Reads lines from standard input, optionally printing a prompt first.
#[derive(Debug, Default)]
pub struct StdinLines {
    prompt: Option<String>,
}

impl StdinLines {
    /// Creates a source that prints `prompt` to standard output before every
    /// read.
    #[must_use]
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self { prompt: Some(prompt.into()) }
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(prompt) = &self.prompt {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Serves a fixed list of lines, then reports a closed stream.
///
/// # Example
/// ```
/// use treecalc::interpreter::io::{LineSource, ScriptedLines};
///
/// let mut lines = ScriptedLines::new(["1+1"]);
/// assert_eq!(lines.read_line().unwrap(), Some("1+1".to_string()));
/// assert_eq!(lines.read_line().unwrap(), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    /// Creates a source serving `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }

    /// Number of lines not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Writes characters to standard output, flushing after each one.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, ch: char) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{ch}")?;
        stdout.flush()
    }
}

/// Discards every character. Used to evaluate without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _ch: char) -> io::Result<()> {
        Ok(())
    }
}

/// Collects emitted characters in memory.
///
/// # Example
/// ```
/// use treecalc::interpreter::io::{OutputSink, StringSink};
///
/// let mut sink = StringSink::default();
/// sink.emit('h').unwrap();
/// sink.emit('i').unwrap();
/// assert_eq!(sink.as_str(), "hi");
/// ```
#[derive(Debug, Default, Clone)]
pub struct StringSink {
    buffer: String,
}

impl StringSink {
    /// Everything emitted so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the sink and returns everything emitted.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl OutputSink for StringSink {
    fn emit(&mut self, ch: char) -> io::Result<()> {
        self.buffer.push(ch);
        Ok(())
    }
}
