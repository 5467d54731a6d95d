//! The dashboard controller: validated event handling over one selection
//! session.

use std::sync::Arc;

use tracing::debug;

use launchboard_common::{PayloadRange, SelectionError, SelectionState, SiteSelector};
use launchboard_engine::{
    filter_by_payload, filter_by_site, pie_title, project, scatter_title, OutcomeTally,
};
use launchboard_store::LaunchRecordStore;

use crate::outputs::{DashboardOutputs, PieOutput, ScatterOutput};

/// Composes the two filters per input event, runs the aggregator and the
/// projector, and holds the resulting datasets.
///
/// Event handling is synchronous and runs to completion; a rejected event
/// leaves both the selection and the outputs exactly as they were. Replaying
/// an accepted event is idempotent: recomputation is pure over the store and
/// the current selection.
pub struct DashboardController {
    store: Arc<LaunchRecordStore>,
    selection: SelectionState,
    outputs: DashboardOutputs,
}

impl DashboardController {
    /// Build a controller with the session-default selection (all sites,
    /// observed payload bounds clamped into the slider range) and eagerly
    /// computed outputs.
    pub fn new(store: Arc<LaunchRecordStore>) -> Self {
        let selection = store.default_selection();
        // the default selection always validates: ALL needs no site check
        // and clamped bounds are ordered and in range
        let outputs = compute_outputs(&store, &selection)
            .unwrap_or_else(|_| DashboardOutputs::empty(&selection));
        Self {
            store,
            selection,
            outputs,
        }
    }

    /// Site-changed input event. On acceptance both outputs are recomputed
    /// together; on rejection nothing changes and the error is returned for
    /// user feedback.
    pub fn on_site_changed(
        &mut self,
        selector: SiteSelector,
    ) -> Result<&DashboardOutputs, SelectionError> {
        let candidate = SelectionState {
            site: selector,
            payload: self.selection.payload,
        };
        let outputs = compute_outputs(&self.store, &candidate)?;
        debug!(
            "Site changed to {:?}: {} records selected",
            candidate.site.label(),
            outputs.scatter.points.len()
        );
        self.selection = candidate;
        self.outputs = outputs;
        Ok(&self.outputs)
    }

    /// Payload-range-changed input event. Same accept/reject contract as
    /// [`Self::on_site_changed`].
    pub fn on_payload_range_changed(
        &mut self,
        low: f64,
        high: f64,
    ) -> Result<&DashboardOutputs, SelectionError> {
        let payload = PayloadRange::new(low, high)?;
        let candidate = SelectionState {
            site: self.selection.site.clone(),
            payload,
        };
        let outputs = compute_outputs(&self.store, &candidate)?;
        debug!(
            "Payload range changed to [{}, {}]: {} records selected",
            low,
            high,
            outputs.scatter.points.len()
        );
        self.selection = candidate;
        self.outputs = outputs;
        Ok(&self.outputs)
    }

    /// Current pie + scatter datasets, mutually consistent.
    pub fn outputs(&self) -> &DashboardOutputs {
        &self.outputs
    }

    /// Current selection, for echoing back to the UI.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn store(&self) -> &LaunchRecordStore {
        &self.store
    }
}

/// Recompute both datasets from scratch: site filter, then payload filter,
/// then tally and projection over the same filtered set.
fn compute_outputs(
    store: &LaunchRecordStore,
    selection: &SelectionState,
) -> Result<DashboardOutputs, SelectionError> {
    let by_site = filter_by_site(store.records(), &selection.site, store.sites())?;
    let filtered = filter_by_payload(&by_site, &selection.payload);

    let tally = OutcomeTally::from_records(&filtered);
    let points = project(&filtered);

    Ok(DashboardOutputs {
        pie: PieOutput {
            success_count: tally.success,
            failure_count: tally.failure,
            title: pie_title(&selection.site),
        },
        scatter: ScatterOutput {
            title: scatter_title(&selection.site),
            points,
        },
    })
}
