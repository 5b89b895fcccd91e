//! Console notices

use std::io::Write;

use crate::award::{NoticeLevel, Notifier};

/// Prints notices to the terminal and mirrors them to the log
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl ConsoleNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => log::info!("{}", message),
            NoticeLevel::Warn => log::warn!("{}", message),
            NoticeLevel::Error => log::error!("{}", message),
        }
        if let Err(e) = writeln!(self.out, "[{}] {}", level.name(), message) {
            log::warn!("Failed to print notice: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_format() {
        let mut notifier = ConsoleNotifier::new(Vec::new());
        notifier.info("Awarded 80 XP");
        notifier.warn("Invalid XP value.");

        let out = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(out, "[info] Awarded 80 XP\n[warn] Invalid XP value.\n");
    }
}
