use std::io::Write;

use crate::error::Result;
use crate::plan::OutputFormat;

/// Sink for rendered output.
///
/// One renderer instance spans a whole render pass; the JSON variant uses
/// that lifetime to delimit its array. Variants share nothing beyond this
/// interface.
pub trait Renderer {
    /// One entry of a dictionary listing.
    fn list_item(&mut self, short_name: &str, name: &str) -> Result<()>;

    /// One word/definition pair. `definition` may be empty; it is still
    /// rendered.
    fn word(&mut self, short_name: &str, name: &str, word: &str, definition: &str) -> Result<()>;
}

/// Picks the renderer for the requested format.
pub fn for_format<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Renderer + 'a> {
    match format {
        OutputFormat::Plain => Box::new(PlainRenderer::new(out)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out)),
    }
}

/// Human-readable output: one line per list entry, one blank-line
/// separated block per word.
pub struct PlainRenderer<W: Write> {
    out: W,
    first_block: bool,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            first_block: true,
        }
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn list_item(&mut self, short_name: &str, name: &str) -> Result<()> {
        writeln!(self.out, "{} / {}", short_name, name)?;
        Ok(())
    }

    fn word(&mut self, short_name: &str, name: &str, word: &str, definition: &str) -> Result<()> {
        if !self.first_block {
            writeln!(self.out)?;
        }
        self.first_block = false;
        writeln!(self.out, "word: {}", word)?;
        writeln!(self.out, "from: {} ({})", name, short_name)?;
        writeln!(self.out, "{}", definition)?;
        Ok(())
    }
}

/// Streams one compact top-level JSON array: `[` is written on
/// construction, `]` when the renderer is dropped.
pub struct JsonRenderer<W: Write> {
    out: W,
    first_element: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(mut out: W) -> Self {
        // A failed bracket write resurfaces on the first element write.
        let _ = out.write_all(b"[");
        Self {
            out,
            first_element: true,
        }
    }

    fn element(&mut self, body: &str) -> Result<()> {
        if !self.first_element {
            self.out.write_all(b",")?;
        }
        self.first_element = false;
        self.out.write_all(body.as_bytes())?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn list_item(&mut self, short_name: &str, name: &str) -> Result<()> {
        self.element(&format!(
            "{{\"name\":\"{}\",\"short name\":\"{}\"}}",
            escape(name),
            escape(short_name)
        ))
    }

    fn word(&mut self, short_name: &str, name: &str, word: &str, definition: &str) -> Result<()> {
        self.element(&format!(
            "{{\"word\":\"{}\",\"name\":\"{}\",\"short name\":\"{}\",\"definition\":\"{}\"}}",
            escape(word),
            escape(name),
            escape(short_name),
            escape(definition)
        ))
    }
}

impl<W: Write> Drop for JsonRenderer<W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(b"]\n");
        let _ = self.out.flush();
    }
}

/// Escapes a string for embedding in a JSON document. Beyond the
/// RFC 8259 mandatory set, `/` is emitted as `\/` and every control
/// character (0x00-0x1F plus 0x7F) as `\u00XX`.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}
