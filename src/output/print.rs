//! Print-style export driver.
//!
//! Printing is the one stateful operation in the engine: it flips shared
//! presentation state (control visibility, print styling) around the
//! platform print call. The toggles are acquired and restored as a scoped
//! resource; restoration runs on every exit path, including a failing
//! print call. A user cancelling the platform dialog is indistinguishable
//! from a successful print, so restore is unconditional.
//!
//! Concurrent exports are unsupported: a single in-flight gate rejects a
//! second export started before the first one restored.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::{FunnelError, FunnelResult};

/// Seam to the platform presentation layer the export operates on.
///
/// The engine never renders anything itself; it only drives toggles and
/// the print call on an already rendered report.
pub trait PrintSurface {
    /// Hide or restore interactive controls around the report.
    fn set_controls_hidden(&mut self, hidden: bool);

    /// Mark or unmark the document for print styling.
    fn set_print_styling(&mut self, on: bool);

    /// Invoke the platform print mechanism.
    fn invoke_print(&mut self) -> anyhow::Result<()>;

    /// Short delay letting presentation styling settle. No timeout is
    /// enforced beyond this.
    fn settle(&mut self);
}

/// Restores the presentation toggles when dropped, whatever the exit path.
struct RestoreGuard<'a> {
    surface: &'a mut dyn PrintSurface,
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        self.surface.set_print_styling(false);
        self.surface.set_controls_hidden(false);
    }
}

/// Releases the in-flight gate when dropped.
struct GateGuard<'a>(&'a AtomicBool);

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives print-style exports with a single-in-flight guarantee.
#[derive(Debug, Default)]
pub struct PrintExporter {
    in_flight: AtomicBool,
}

impl PrintExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one print-style export against the given surface.
    ///
    /// Returns [`FunnelError::ExportInProgress`] when another export has
    /// not yet finished restoring.
    pub fn export(&self, surface: &mut dyn PrintSurface) -> FunnelResult<()> {
        if self.in_flight.swap(true, Ordering::Acquire) {
            return Err(FunnelError::ExportInProgress);
        }
        let _gate = GateGuard(&self.in_flight);

        log::info!("starting print-style export");

        surface.set_controls_hidden(true);
        surface.set_print_styling(true);
        let mut guard = RestoreGuard { surface };

        guard.surface.settle();
        let printed = guard.surface.invoke_print();
        guard.surface.settle();

        drop(guard);
        printed.map_err(|e| FunnelError::Print(format!("{e:#}")))?;

        log::info!("print-style export finished");
        Ok(())
    }
}
