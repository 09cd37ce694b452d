//! Automate Use Case implementation

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::domain::ports::{AutomatorEvent, AutomatorEventSink, OutputFixer, ProcessRunner, WatchFacility};
use crate::domain::services::ReconcileSummary;
use crate::error::{PlaisioError, PlaisioResult};
use crate::infrastructure::fs::normalize;

use super::build::Builder;
use super::options::AutomateOptions;
use super::reactor::Session;

/// Automate Use Case
///
/// Keeps compiled JavaScript in step with the TypeScript sources under the
/// asset root. This is the main entry point for the
/// `plaisio type-script-automator` command.
pub struct AutomateUseCase<R, X>
where
    R: ProcessRunner,
    X: OutputFixer,
{
    runner: R,
    fixer: X,
    options: AutomateOptions,
}

impl<R, X> AutomateUseCase<R, X>
where
    R: ProcessRunner,
    X: OutputFixer,
{
    pub fn new(runner: R, fixer: X, options: AutomateOptions) -> Self {
        let mut options = options;
        options.root = normalize(&options.root);
        Self {
            runner,
            fixer,
            options,
        }
    }

    pub fn options(&self) -> &AutomateOptions {
        &self.options
    }

    /// Watch the asset root and rebuild on change (blocking)
    ///
    /// Registers a watch on every directory, reconciles stale outputs, then
    /// dispatches events until the facility closes or `running` is cleared.
    pub fn start(
        &self,
        facility: &mut dyn WatchFacility,
        running: Arc<AtomicBool>,
        sink: &dyn AutomatorEventSink,
    ) -> PlaisioResult<()> {
        self.ensure_root()?;

        let mut session = Session::new(self.builder(sink, false), facility);
        session.watch_tree(&self.options.root);

        sink.on_event(AutomatorEvent::Started {
            root: self.options.root.clone(),
            directories: session.watches.len(),
            force: self.options.force,
        });

        session.build.reconcile(self.options.force);
        session.run(&running, self.options.poll_interval);

        sink.on_event(AutomatorEvent::Stopped);
        Ok(())
    }

    /// Compile stale sources once without watching
    pub fn reconcile(&self, sink: &dyn AutomatorEventSink) -> PlaisioResult<ReconcileSummary> {
        self.ensure_root()?;
        Ok(self.builder(sink, true).reconcile(self.options.force))
    }

    fn ensure_root(&self) -> PlaisioResult<()> {
        if self.options.root.is_dir() {
            Ok(())
        } else {
            Err(PlaisioError::DirectoryNotFound {
                path: self.options.root.clone(),
            })
        }
    }

    fn builder<'a>(&'a self, sink: &'a dyn AutomatorEventSink, fix_after_compile: bool) -> Builder<'a> {
        Builder {
            options: &self.options,
            runner: &self.runner,
            fixer: &self.fixer,
            sink,
            fix_after_compile,
        }
    }
}
