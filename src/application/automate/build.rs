//! Build actions: compile, fix output, remove artifacts, reconcile

use std::path::Path;

use crate::domain::ports::{
    AutomatorEvent, AutomatorEventSink, FixOutcome, OutputFixer, ProcessRunner,
};
use crate::domain::services::{needs_compile, ReconcileSummary};
use crate::error::PlaisioResult;
use crate::infrastructure::fs::{list_source_files, modified, remove_if_present};

use super::options::AutomateOptions;

/// Everything a build action needs, borrowed from the use case
pub(super) struct Builder<'a> {
    pub(super) options: &'a AutomateOptions,
    pub(super) runner: &'a dyn ProcessRunner,
    pub(super) fixer: &'a dyn OutputFixer,
    pub(super) sink: &'a dyn AutomatorEventSink,
    /// Fix output right after a successful compile. Without a watch loop no
    /// close-after-write event will come back for the output file.
    pub(super) fix_after_compile: bool,
}

impl Builder<'_> {
    pub(super) fn emit(&self, event: AutomatorEvent) {
        self.sink.on_event(event);
    }

    /// Compile one source file; `Ok(false)` when the compiler failed
    pub(super) fn compile(&self, source: &Path) -> PlaisioResult<bool> {
        let command = self.options.compiler.command_for(source);
        self.emit(AutomatorEvent::Compiling {
            command: command.to_string(),
        });

        let output = self.runner.run(&command)?;
        let compiled = self.options.extensions.output_for(source);

        if output.success() {
            if self.fix_after_compile && compiled.is_file() {
                self.fix_output(&compiled)?;
            }
            return Ok(true);
        }

        self.emit(AutomatorEvent::CompileFailed {
            source: source.to_path_buf(),
            status: output.status,
            output: output.lines,
        });
        if remove_if_present(&compiled)? {
            self.emit(AutomatorEvent::FileRemoved { path: compiled });
        }
        Ok(false)
    }

    pub(super) fn fix_output(&self, output: &Path) -> PlaisioResult<()> {
        if !self.options.fix_output {
            return Ok(());
        }

        let outcome = self.fixer.fix(output, &self.options.root)?;
        self.emit(AutomatorEvent::OutputFixed {
            path: output.to_path_buf(),
            rewritten: outcome == FixOutcome::Rewritten,
        });
        Ok(())
    }

    /// Delete the compiled output and map file of a source file
    pub(super) fn remove_artifacts(&self, source: &Path) -> PlaisioResult<()> {
        let extensions = &self.options.extensions;
        for artifact in [extensions.output_for(source), extensions.map_for(source)] {
            if remove_if_present(&artifact)? {
                self.emit(AutomatorEvent::FileRemoved { path: artifact });
            }
        }
        Ok(())
    }

    /// Compile every source file whose output is missing or not newer than it
    pub(super) fn reconcile(&self, force: bool) -> ReconcileSummary {
        let scan = list_source_files(&self.options.root, &self.options.extensions.source);
        for message in scan.skipped {
            self.emit(AutomatorEvent::ScanSkipped { message });
        }

        let mut summary = ReconcileSummary::default();
        for source in &scan.paths {
            summary.scanned += 1;
            match self.reconcile_one(source, force) {
                Ok(None) => {}
                Ok(Some(true)) => summary.compiled += 1,
                Ok(Some(false)) => summary.failed += 1,
                Err(err) => {
                    summary.failed += 1;
                    self.emit(AutomatorEvent::failure(source.clone(), &err));
                }
            }
        }

        self.emit(AutomatorEvent::ReconcileComplete {
            scanned: summary.scanned,
            compiled: summary.compiled,
            failed: summary.failed,
        });
        summary
    }

    /// `None` when the output is fresh, otherwise whether the compile succeeded
    fn reconcile_one(&self, source: &Path, force: bool) -> PlaisioResult<Option<bool>> {
        let Some(source_time) = modified(source)? else {
            // Gone since the walk.
            return Ok(None);
        };
        let output_time = modified(&self.options.extensions.output_for(source))?;

        if !needs_compile(force, source_time, output_time) {
            return Ok(None);
        }
        self.compile(source).map(Some)
    }
}
