use tracing::{info, warn};

use super::backoff::Backoff;
use super::suspend::SuspendHandle;
use super::types::{CycleReport, FetchOutcome, LoopExit};
use crate::bootstrap::TypeListing;
use crate::config::BeetleConfig;
use crate::events::{Event, Observer, Observers};
use crate::models::{DeviceState, StripRecord};
use crate::records::{DeviceSlot, RecordsView, StripSet};
use crate::source::{FetchError, HttpSource, RecordSource};

/// Polls the device-state and strip collections in sequence.
///
/// The loop owns everything it mutates: both record sets, the backoff and
/// the observer list. Only the suspend flag is shared, through
/// [`SuspendHandle`].
pub struct RefreshLoop<D, S> {
    device_source: D,
    strip_source: S,
    device: DeviceSlot,
    strips: StripSet,
    backoff: Backoff,
    suspend: SuspendHandle,
    observers: Observers,
    cycles: u64,
}

/// The loop as wired against a real device server.
pub type HttpRefreshLoop = RefreshLoop<HttpSource<DeviceState>, HttpSource<StripRecord>>;

impl HttpRefreshLoop {
    pub fn from_config(client: reqwest::Client, config: &BeetleConfig) -> Self {
        let server = &config.server;
        RefreshLoop::new(
            HttpSource::new(client.clone(), server.base_url(), server.device_collection()),
            HttpSource::new(client, server.base_url(), server.strip_collection()),
            Backoff::from_config(&config.refresh),
        )
    }
}

impl<D, S> RefreshLoop<D, S>
where
    D: RecordSource<Record = DeviceState>,
    S: RecordSource<Record = StripRecord>,
{
    pub fn new(device_source: D, strip_source: S, backoff: Backoff) -> Self {
        Self {
            device_source,
            strip_source,
            device: DeviceSlot::new(),
            strips: StripSet::new(),
            backoff,
            suspend: SuspendHandle::new(),
            observers: Observers::new(),
            cycles: 0,
        }
    }

    pub fn subscribe(&mut self, observer: impl Observer + Send + 'static) {
        self.observers.subscribe(observer);
    }

    /// Handle for suspending the loop from another task.
    pub fn suspend_handle(&self) -> SuspendHandle {
        self.suspend.clone()
    }

    pub fn device(&self) -> Option<&DeviceState> {
        self.device.get()
    }

    pub fn strips(&self) -> &StripSet {
        &self.strips
    }

    pub fn backoff(&self) -> &Backoff {
        &self.backoff
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Tell observers that bootstrap finished; call once before [`Self::run`].
    pub fn announce_types(&mut self, listing: &TypeListing) {
        self.emit(Event::TypesLoaded {
            collections: listing.names.clone(),
        });
    }

    /// Run cycles until the suspend flag is found set at a cycle boundary.
    ///
    /// Each completed cycle is followed by a sleep of the delay it reported.
    /// Calling `run` again after it returned starts a new cycle immediately.
    pub async fn run(&mut self) -> LoopExit {
        info!(
            event = "core.refresh.loop_started",
            backoff_ms = self.backoff.current().as_millis() as u64
        );

        loop {
            if self.suspend.is_suspended() {
                info!(event = "core.refresh.loop_suspended", cycles = self.cycles);
                return LoopExit::Suspended {
                    cycles: self.cycles,
                };
            }

            let report = self.run_cycle().await;
            tokio::time::sleep(report.next_delay).await;
        }
    }

    /// Fetch device state, then strips, then pick the next delay.
    ///
    /// A failed fetch never skips the rest of the cycle.
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.cycles += 1;
        let cycle = self.cycles;
        let mut escalated = false;

        info!(
            event = "core.refresh.cycle_started",
            cycle = cycle,
            backoff_ms = self.backoff.current().as_millis() as u64
        );
        self.emit(Event::DoRefresh { cycle });

        let device = match self.fetch_device().await {
            Ok(state) => {
                let fields = self.device.replace(state);
                if !fields.is_empty() {
                    self.emit(Event::DeviceChanged { fields });
                }
                FetchOutcome::Updated
            }
            Err(e) => {
                let location = self.device_source.location().to_string();
                self.record_failure(&mut escalated, location, &e);
                FetchOutcome::Failed(e)
            }
        };

        let strips = match self.strip_source.fetch().await {
            Ok(records) => {
                let changes = self.strips.apply(records);
                if !changes.is_empty() {
                    self.emit(Event::StripsChanged { changes });
                }
                FetchOutcome::Updated
            }
            Err(e) => {
                let location = self.strip_source.location().to_string();
                self.record_failure(&mut escalated, location, &e);
                FetchOutcome::Failed(e)
            }
        };

        if !escalated {
            self.backoff.record_success();
        }
        let next_delay = self.backoff.current();

        self.emit(Event::Refreshed {
            cycle,
            next_delay_ms: next_delay.as_millis() as u64,
        });

        info!(
            event = "core.refresh.cycle_completed",
            cycle = cycle,
            device_ok = !device.is_failed(),
            strips_ok = !strips.is_failed(),
            next_delay_ms = next_delay.as_millis() as u64
        );

        CycleReport {
            cycle,
            device,
            strips,
            next_delay,
        }
    }

    async fn fetch_device(&self) -> Result<DeviceState, FetchError> {
        let records = self.device_source.fetch().await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::EmptyCollection {
                url: self.device_source.location().to_string(),
            })
    }

    /// Double the delay once per cycle, however many fetches fail in it.
    fn record_failure(&mut self, escalated: &mut bool, url: String, error: &FetchError) {
        if !*escalated {
            self.backoff.escalate();
            *escalated = true;
        }
        let retry_in_ms = self.backoff.current().as_millis() as u64;

        warn!(
            event = "core.refresh.fetch_failed",
            url = %url,
            error = %error,
            retry_in_ms = retry_in_ms
        );

        self.emit(Event::LostConnection {
            url,
            error: error.to_string(),
            retry_in_ms,
        });
    }

    fn emit(&mut self, event: Event) {
        let records = RecordsView::new(&self.device, &self.strips);
        self.observers.emit(&event, &records);
    }
}
