/// Display sink abstraction.
///
/// The pipeline never writes to an output device directly — it hands the
/// finished markup to a `DisplaySink`. The one-shot binary uses
/// `StdoutSink`; tests capture output with `BufferSink`. Sinks receive a
/// string unconditionally: failures upstream arrive as rendered error
/// markup, never as a panic or an `Err`.

pub trait DisplaySink {
    fn render(&mut self, content: &str);
}

/// Writes the fragment to stdout, for one-shot CLI runs.
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn render(&mut self, content: &str) {
        println!("{}", content);
    }
}

/// Captures the last rendered fragment in memory.
#[derive(Default)]
pub struct BufferSink {
    pub content: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for BufferSink {
    fn render(&mut self, content: &str) {
        self.content = content.to_string();
    }
}
