/*
 * Copyright (c) 2026. Mikhail Kulik.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fmt::Write as _;
use std::io;

/// Label number. `0` is never emitted and stands for "fall through".
pub type Label = u32;

/// Destination for three-address instructions.
pub trait Sink {
    /// One instruction: a tab, the text, a newline.
    fn emit(&mut self, instruction: &str);

    /// `L<n>:` with no line break, so it prefixes the next instruction.
    fn emit_label(&mut self, label: Label);

    /// A framing line written as-is, followed by a newline.
    fn emit_raw(&mut self, line: &str);
}

/// Collects the output in memory.
#[derive(Debug, Default)]
pub struct TextSink {
    out: String,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Sink for TextSink {
    fn emit(&mut self, instruction: &str) {
        self.out.push('\t');
        self.out.push_str(instruction);
        self.out.push('\n');
    }

    fn emit_label(&mut self, label: Label) {
        let _ = write!(self.out, "L{}:", label);
    }

    fn emit_raw(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }
}

/// Streams the output to any writer.
///
/// Emission itself cannot fail; the first I/O error is kept, later writes
/// are dropped, and the error surfaces from [`WriteSink::finish`].
pub struct WriteSink<W: io::Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_fmt(args) {
            self.error = Some(err);
        }
    }

    /// Flush and hand the writer back, or report the first failed write.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: io::Write> Sink for WriteSink<W> {
    fn emit(&mut self, instruction: &str) {
        self.write(format_args!("\t{}\n", instruction));
    }

    fn emit_label(&mut self, label: Label) {
        self.write(format_args!("L{}:", label));
    }

    fn emit_raw(&mut self, line: &str) {
        self.write(format_args!("{}\n", line));
    }
}
