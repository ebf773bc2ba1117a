//! Result emission to standard output.

use std::io::Write;

use crate::error::SiftResult;
use crate::traits::ReportEmitter;

/// Emitter that writes pretty-printed JSON to standard output.
#[derive(Debug, Clone, Default)]
pub struct StdoutEmitter;

impl StdoutEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportEmitter for StdoutEmitter {
    fn emit(&self, value: &serde_json::Value) -> SiftResult<()> {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, value)?;
        writeln!(stdout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_does_not_fail_on_plain_value() {
        let emitter = StdoutEmitter::new();
        let value = serde_json::json!({ "status": "ok" });
        assert!(emitter.emit(&value).is_ok());
    }
}
