//! Adapter for the embedded discovery component's unstructured log interface.

use std::fmt::{self, Write as _};
use std::process;

use parking_lot::Mutex;

use crate::logging::{Field, Logger, Severity, Value};

/// The unstructured logging interface the embedded discovery scrapers expect:
/// leveled variadic calls, `*ln` and `*f` variants, and key/value forking.
///
/// `set_format` and `set_level` are accepted and ignored; the structured core
/// owns both concerns, and the knobs exist only for interface compatibility.
pub trait DiscoveryLog: Send + Sync {
    fn debug(&self, args: &[&dyn fmt::Display]);
    fn debugln(&self, args: &[&dyn fmt::Display]);
    fn debugf(&self, args: fmt::Arguments<'_>);

    fn info(&self, args: &[&dyn fmt::Display]);
    fn infoln(&self, args: &[&dyn fmt::Display]);
    fn infof(&self, args: fmt::Arguments<'_>);

    fn warn(&self, args: &[&dyn fmt::Display]);
    fn warnln(&self, args: &[&dyn fmt::Display]);
    fn warnf(&self, args: fmt::Arguments<'_>);

    fn error(&self, args: &[&dyn fmt::Display]);
    fn errorln(&self, args: &[&dyn fmt::Display]);
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Terminates the process after the record is emitted. Not an error
    /// return; there is no coming back from this call.
    fn fatal(&self, args: &[&dyn fmt::Display]) -> !;
    fn fatalln(&self, args: &[&dyn fmt::Display]) -> !;
    fn fatalf(&self, args: fmt::Arguments<'_>) -> !;

    /// Fork with one additional field.
    fn with(&self, key: &str, value: Value) -> Box<dyn DiscoveryLog>;

    fn set_format(&self, format: &str);
    fn set_level(&self, level: &str);
}

/// Concurrency-safe adapter from the structured logger to [`DiscoveryLog`].
///
/// The plain and `*ln` variants render their arguments into one reusable
/// buffer guarded by a mutex, so concurrent scrapers can never interleave
/// partial text; the buffer is emptied before the lock is released on every
/// path. The `*f` variants format eagerly into a throwaway string and skip
/// the lock entirely, since format-string rendering allocates regardless.
pub struct ScraperHandler {
    logger: Logger,
    buf: Mutex<String>,
}

impl ScraperHandler {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            logger,
            buf: Mutex::new(String::new()),
        }
    }

    /// Fork with one additional field, dispatching the value into its
    /// narrowest scalar representation. Total: anything displayable fits via
    /// [`Value::Str`].
    pub fn with_field(&self, key: &str, value: impl Into<Value>) -> ScraperHandler {
        ScraperHandler::new(self.logger.with_field(Field::new(key, value)))
    }

    fn print(&self, severity: Severity, args: &[&dyn fmt::Display], newline: bool) {
        let mut buf = self.buf.lock();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            let _ = write!(buf, "{arg}");
        }
        if newline {
            buf.push('\n');
        }

        self.logger.log(severity, &buf, None, &[]);
        buf.clear();
    }

    fn printf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.logger.log(severity, &args.to_string(), None, &[]);
    }
}

impl DiscoveryLog for ScraperHandler {
    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Debug, args, false);
    }

    fn debugln(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Debug, args, true);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Debug, args);
    }

    fn info(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Info, args, false);
    }

    fn infoln(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Info, args, true);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Info, args);
    }

    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Warn, args, false);
    }

    fn warnln(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Warn, args, true);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Warn, args);
    }

    fn error(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Error, args, false);
    }

    fn errorln(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Error, args, true);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Error, args);
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        self.print(Severity::Fatal, args, false);
        process::exit(1);
    }

    fn fatalln(&self, args: &[&dyn fmt::Display]) -> ! {
        self.print(Severity::Fatal, args, true);
        process::exit(1);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.printf(Severity::Fatal, args);
        process::exit(1);
    }

    fn with(&self, key: &str, value: Value) -> Box<dyn DiscoveryLog> {
        Box::new(self.with_field(key, value))
    }

    fn set_format(&self, _format: &str) {}

    fn set_level(&self, _level: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::logger::Core;
    use crate::logging::Sink;
    use std::io;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl Buf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl io::Write for Buf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn scraper() -> (ScraperHandler, Buf) {
        let buf = Buf::default();
        let sink = Sink::stream(Box::new(buf.clone()));
        let core = Arc::new(Core::new(sink, Severity::Debug));
        (ScraperHandler::new(Logger::new(core)), buf)
    }

    #[test]
    fn test_plain_variant_space_joins_arguments() {
        let (handler, buf) = scraper();
        handler.info(&[&"refreshing" as &dyn fmt::Display, &3, &"targets"]);

        let out = buf.contents();
        assert!(out.contains("\tinfo\trefreshing 3 targets"));
    }

    #[test]
    fn test_ln_variant_folds_newline_into_record_terminator() {
        let (handler, buf) = scraper();
        handler.warnln(&[&"stale" as &dyn fmt::Display, &"target"]);

        let out = buf.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("\twarn\tstale target"));
    }

    #[test]
    fn test_f_variant_formats_eagerly() {
        let (handler, buf) = scraper();
        handler.errorf(format_args!("lookup of {} failed after {} tries", "node-1", 3));

        let out = buf.contents();
        assert!(out.contains("\terror\tlookup of node-1 failed after 3 tries"));
    }

    #[test]
    fn test_buffer_is_empty_after_each_call() {
        let (handler, buf) = scraper();
        handler.debug(&[&"first" as &dyn fmt::Display]);
        handler.debug(&[&"second" as &dyn fmt::Display]);

        let out = buf.contents();
        assert!(out.contains("\tdebug\tfirst"));
        assert!(!out.contains("firstsecond"));
        assert!(out.contains("\tdebug\tsecond"));
        assert!(handler.buf.lock().is_empty());
    }

    #[test]
    fn test_with_dispatches_value_types() {
        let (handler, buf) = scraper();
        handler
            .with_field("port", 9100)
            .with_field("ratio", 0.5)
            .with_field("timeout", Duration::from_secs(2))
            .with_field("region", "us-east")
            .debug(&[&"probe" as &dyn fmt::Display]);

        let out = buf.contents();
        assert!(out.contains("port=9100 ratio=0.5 timeout=2s region=us-east"));
    }

    #[test]
    fn test_boxed_with_matches_inherent_fork() {
        let (handler, buf) = scraper();
        let boxed = handler.with("shard", Value::Int(4));
        boxed.info(&[&"rebalancing" as &dyn fmt::Display]);

        let out = buf.contents();
        assert!(out.contains("shard=4"));
        assert!(out.contains("rebalancing"));
    }

    #[test]
    fn test_config_knobs_are_accepted_and_ignored() {
        let (handler, buf) = scraper();
        handler.set_format("json");
        handler.set_level("error");

        // still emits at debug: the knobs do not rebind anything
        handler.debug(&[&"still-here" as &dyn fmt::Display]);
        assert!(buf.contents().contains("still-here"));
    }
}
