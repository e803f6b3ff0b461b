//! Serial console notification adapter.
//!
//! Implements [`NotificationSink`] over any byte writer: each notice goes
//! out as its literal text followed by CRLF.  On target the writer is the
//! UART-backed stdout; tests pass a `Vec<u8>`.

use std::io::Write;

use log::warn;

use crate::app::ports::NotificationSink;
use crate::fsm::Notice;

pub struct SerialNotifier<W: Write> {
    out: W,
}

impl<W: Write> SerialNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\r\n")?;
        self.out.flush()
    }
}

impl<W: Write> NotificationSink for SerialNotifier<W> {
    fn notify(&mut self, notice: Notice) {
        if let Err(e) = self.write_line(notice.text()) {
            warn!("notice '{}' not written: {}", notice, e);
        }
    }
}
