//! Transit observer trait for snapshot delivery.

use crate::TransitSnapshot;

/// Callbacks invoked as a run progresses.
///
/// Both methods have default no-op implementations so implementors only
/// override what they care about.
///
/// Delivery contract for one run:
/// - `on_update` calls are strictly ordered by non-decreasing
///   `elapsed_secs`; the terminal `completed: true` snapshot is always the
///   last one delivered.
/// - `on_complete` fires exactly once, immediately after the terminal
///   `on_update`, and only on natural arrival — never after cancellation.
///
/// # Example — marker driver
///
/// ```rust,ignore
/// struct MarkerDriver { map: MapSurface }
///
/// impl TransitObserver for MarkerDriver {
///     fn on_update(&mut self, snapshot: &TransitSnapshot) {
///         self.map.move_marker(snapshot.position, snapshot.heading_deg);
///     }
/// }
/// ```
pub trait TransitObserver {
    /// Called for every published snapshot, including the immediate
    /// departure state and the terminal state.
    fn on_update(&mut self, _snapshot: &TransitSnapshot) {}

    /// Called once, after the terminal snapshot, on natural arrival.
    fn on_complete(&mut self) {}
}

/// A [`TransitObserver`] that does nothing.  Use when you only care about
/// driving the run, not watching it.
pub struct NoopObserver;

impl TransitObserver for NoopObserver {}
