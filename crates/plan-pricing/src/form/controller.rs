//! Plan Price Form Controller

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::config::PricingConfig;
use crate::error::PricingError;
use crate::model::{
    DisplayState, Notice, PlanId, PlanSelection, PricingLookup, SelectionOutcome,
};
use crate::source::{self, PricingSource};

use super::FormView;

/// Keeps the total display and subscribe button in sync with the selection.
///
/// Every selection change takes a sequence number; a lookup that completes
/// after a newer change has started is dropped, so the latest selection
/// always determines what is shown.
///
/// Invariant: submission is enabled iff the latest lookup for the current
/// selection returned a price.
pub struct PlanPriceFormController<S, V> {
    source: S,
    view: V,
    config: PricingConfig,
    sequence: AtomicU64,
    state: Mutex<DisplayState>,
}

impl<S, V> PlanPriceFormController<S, V>
where
    S: PricingSource,
    V: FormView,
{
    /// Create the controller; the form starts with submission disabled
    pub fn new(source: S, view: V, config: PricingConfig) -> Self {
        let controller = Self {
            source,
            view,
            state: Mutex::new(DisplayState::unavailable(&config)),
            config,
            sequence: AtomicU64::new(0),
        };
        controller.apply(DisplayState::unavailable(&controller.config));
        controller
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Snapshot of what the form currently shows
    pub fn display_state(&self) -> DisplayState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Handle a change of the plan or period selector.
    ///
    /// Never fails: lookup failures end up as a placeholder total with
    /// submission disabled. A returned [`Notice`] is for the host to present.
    pub async fn on_selection_changed(&self) -> SelectionOutcome {
        let token = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        // Nothing is priced for the new selection until its lookup lands
        self.apply(DisplayState::unavailable(&self.config));

        let selection = match PlanSelection::parse(&self.view.plan_id(), &self.view.period()) {
            Ok(selection) => selection,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unusable plan selection");
                return SelectionOutcome::InvalidSelection;
            }
        };

        let lookup = self.fetch_plan_pricing(&selection.plan_id).await;

        if self.sequence.load(Ordering::SeqCst) != token {
            tracing::debug!(plan = %selection.plan_id, token, "dropping superseded plan lookup");
            return SelectionOutcome::Superseded;
        }

        match lookup {
            PricingLookup::Priced(pricing) => match pricing.total_for(selection.period_count) {
                Ok(total) => {
                    tracing::debug!(
                        plan = %selection.plan_id,
                        price = %pricing.price,
                        periods = selection.period_count,
                        %total,
                        "plan total updated"
                    );
                    self.apply(DisplayState::priced(total, &self.config));
                    SelectionOutcome::Priced { total }
                }
                Err(err) => self.unavailable(&err),
            },
            PricingLookup::NotConfigured => {
                self.apply(DisplayState::unavailable(&self.config));
                SelectionOutcome::NoPrice(Notice::complete_profile(&self.config))
            }
            PricingLookup::Failed(err) => self.unavailable(&err),
        }
    }

    /// Look up the price of a plan. Failures come back as
    /// [`PricingLookup::Failed`], never as an error.
    pub async fn fetch_plan_pricing(&self, plan: &PlanId) -> PricingLookup {
        source::lookup(&self.source, plan).await
    }

    fn unavailable(&self, err: &PricingError) -> SelectionOutcome {
        tracing::warn!(error = %err, "plan total unavailable");
        self.apply(DisplayState::unavailable(&self.config));
        SelectionOutcome::Unavailable { kind: err.kind() }
    }

    fn apply(&self, next: DisplayState) {
        self.view.set_total_text(&next.total_text);
        self.view.set_submit_enabled(next.submit_enabled);
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
