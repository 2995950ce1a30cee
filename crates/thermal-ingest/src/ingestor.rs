use chrono::{Duration, Utc};
use tracing::{debug, info};

use thermal_core::config::{BoostPolicy, CoolingPolicy, IngestConfig};
use thermal_core::errors::{IngestError, ThermalResult};
use thermal_core::intent::Intent;
use thermal_core::models::{CoolingInterval, HeatSignal, SignalDisposition, SignalOutcome};
use thermal_core::traits::{IIntentClassifier, IMessageStore};

/// Evaluates recent heat signals against new user text.
///
/// Each signal is classified independently — one user message may
/// validate one prior highlight and poison another in the same call.
/// Nothing is persisted between calls; this is per-call classification,
/// not a stateful machine.
pub struct SignalIngestor<'a> {
    classifier: &'a dyn IIntentClassifier,
    store: &'a dyn IMessageStore,
    config: IngestConfig,
}

impl<'a> SignalIngestor<'a> {
    pub fn new(
        classifier: &'a dyn IIntentClassifier,
        store: &'a dyn IMessageStore,
        config: IngestConfig,
    ) -> Self {
        Self {
            classifier,
            store,
            config,
        }
    }

    /// Process one batch of recent signals against the user's new text.
    ///
    /// A signal is only evaluated when its snippet reappears verbatim in
    /// `user_text`; otherwise it is left untouched. Classifier failures
    /// fail the whole call — retry policy belongs to the caller.
    pub fn ingest(
        &self,
        user_text: &str,
        recent_signals: &[HeatSignal],
    ) -> ThermalResult<Vec<SignalDisposition>> {
        let mut dispositions = Vec::with_capacity(recent_signals.len());

        for signal in recent_signals {
            let outcome = self.evaluate(user_text, signal)?;
            debug!(
                message_id = %signal.message_id,
                kind = signal.kind.as_str(),
                ?outcome,
                "signal evaluated"
            );
            dispositions.push(SignalDisposition {
                message_id: signal.message_id.clone(),
                start: signal.start,
                end: signal.end,
                outcome,
            });
        }

        info!(
            signals = recent_signals.len(),
            applied = dispositions
                .iter()
                .filter(|d| d.outcome == SignalOutcome::Applied)
                .count(),
            suppressed = dispositions
                .iter()
                .filter(|d| d.outcome == SignalOutcome::Suppressed)
                .count(),
            "ingestion complete"
        );
        Ok(dispositions)
    }

    fn evaluate(&self, user_text: &str, signal: &HeatSignal) -> ThermalResult<SignalOutcome> {
        // Trigger: did the user paste/quote the signaled snippet?
        if !user_text.contains(&signal.snippet) {
            return Ok(SignalOutcome::NotTriggered);
        }

        // Resolve the target before spending a classifier call on it.
        if self.store.get(&signal.message_id)?.is_none() {
            return Err(IngestError::UnknownSignalTarget {
                message_id: signal.message_id.clone(),
            }
            .into());
        }

        let label = self.classifier.classify(user_text, &signal.snippet)?;
        // Unrecognized labels are neutral here, by contract — the
        // classifier itself never has to know the label set.
        match Intent::from_label(&label) {
            Intent::Correction => {
                self.suppress(signal)?;
                Ok(SignalOutcome::Suppressed)
            }
            Intent::Validation => {
                self.apply_heat(signal)?;
                Ok(SignalOutcome::Applied)
            }
            Intent::Neutral => Ok(SignalOutcome::Neutral),
        }
    }

    /// Poison pill: suppress the signal's heat contribution.
    fn suppress(&self, signal: &HeatSignal) -> ThermalResult<()> {
        match self.config.cooling_policy {
            CoolingPolicy::Drop => Ok(()),
            CoolingPolicy::TimedExclusion { secs } => {
                let interval = CoolingInterval::new(
                    signal.start,
                    signal.end,
                    Utc::now() + Duration::seconds(secs as i64),
                );
                self.store.register_cooling(&signal.message_id, interval)
            }
        }
    }

    /// Confirmed signal: apply its heat to the message.
    fn apply_heat(&self, signal: &HeatSignal) -> ThermalResult<()> {
        match self.config.boost_policy {
            BoostPolicy::AppendSignalRange => {
                self.store
                    .append_heat_range(&signal.message_id, signal.start, signal.end)
            }
        }
    }
}
