//! ViewModel for the overview dashboard

use std::sync::Arc;

use contracts::dashboards::d100_overview::{DashboardSnapshot, Referral, SalesHistory, StatCard};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::charts;
use crate::shared::chart::{ChartConfig, ChartHandle, DrawingSurface};
use crate::shared::data::DataGateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    Idle,
    Loading,
    /// Terminal. Reached with live or built-in data alike.
    Ready,
}

/// Loads the dashboard snapshot and owns the two charts drawn from it.
///
/// Charts exist only while the phase is `Ready` and a surface is attached.
#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    gateway: StoredValue<DataGateway>,
    /// Whether this environment can ever attach a surface. Fixed at construction.
    surface_available: bool,
    surface: StoredValue<Option<Arc<dyn DrawingSurface>>>,
    trend: StoredValue<Option<ChartHandle>>,
    breakdown: StoredValue<Option<ChartHandle>>,

    pub phase: RwSignal<DashboardPhase>,
    pub stats: RwSignal<Vec<StatCard>>,
    pub sales_history: RwSignal<SalesHistory>,
    pub referrals: RwSignal<Vec<Referral>>,
    pub loading: RwSignal<bool>,
}

impl DashboardViewModel {
    pub fn new(gateway: DataGateway, surface_available: bool) -> Self {
        Self {
            gateway: StoredValue::new(gateway),
            surface_available,
            surface: StoredValue::new(None),
            trend: StoredValue::new(None),
            breakdown: StoredValue::new(None),
            phase: RwSignal::new(DashboardPhase::Idle),
            stats: RwSignal::new(Vec::new()),
            sales_history: RwSignal::new(SalesHistory::default()),
            referrals: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
        }
    }

    /// Fetch the snapshot once and move to `Ready`.
    ///
    /// Concurrent calls are not deduplicated; mount the view once.
    pub async fn initialize(&self) {
        log::debug!("d100: loading dashboard");
        self.phase.set(DashboardPhase::Loading);
        self.loading.set(true);

        let gateway = self.gateway.get_value();
        let snapshot = gateway.dashboard().await;

        // The owning view may have been dropped while the fetch was in flight.
        if self.loading.is_disposed() {
            log::debug!("d100: view gone before data arrived");
            return;
        }
        self.apply(snapshot);
    }

    /// Run `initialize` on the local executor
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move { vm.initialize().await });
    }

    fn apply(&self, snapshot: DashboardSnapshot) {
        let DashboardSnapshot {
            stats,
            sales_history,
            referrals,
        } = snapshot;
        self.stats.set(stats);
        self.sales_history.set(sales_history);
        self.referrals.set(referrals);
        self.loading.set(false);
        self.phase.set(DashboardPhase::Ready);
        log::debug!("d100: ready");
        self.sync_charts();
    }

    pub fn surface_available(&self) -> bool {
        self.surface_available
    }

    pub fn is_surface_attached(&self) -> bool {
        self.surface.with_value(Option::is_some)
    }

    pub fn has_trend_chart(&self) -> bool {
        self.trend.with_value(Option::is_some)
    }

    pub fn has_breakdown_chart(&self) -> bool {
        self.breakdown.with_value(Option::is_some)
    }

    /// Signal that a drawing surface is now mounted for this view.
    ///
    /// Ignored when the environment has no drawing capability.
    pub fn attach_surface(&self, surface: Arc<dyn DrawingSurface>) {
        if !self.surface_available {
            log::debug!("d100: no drawing capability, surface ignored");
            return;
        }
        self.release_charts();
        self.surface.set_value(Some(surface));
        self.sync_charts();
    }

    /// Release both charts and forget the surface
    pub fn detach_surface(&self) {
        self.release_charts();
        self.surface.set_value(None);
    }

    /// Safe to call at any point, any number of times.
    pub fn teardown(&self) {
        if self.surface.is_disposed() {
            return;
        }
        self.detach_surface();
    }

    /// (Re)create both charts if, and only if, data is ready and a surface is attached
    fn sync_charts(&self) {
        if self.phase.get_untracked() != DashboardPhase::Ready {
            return;
        }
        let Some(surface) = self.surface.get_value() else {
            return;
        };
        let history = self.sales_history.get_untracked();
        replace_chart(self.trend, surface.as_ref(), charts::trend_config(&history.weekly));
        replace_chart(
            self.breakdown,
            surface.as_ref(),
            charts::breakdown_config(&history.periods),
        );
    }

    fn release_charts(&self) {
        let Some(surface) = self.surface.get_value() else {
            return;
        };
        for slot in [self.trend, self.breakdown] {
            if let Some(handle) = slot.try_update_value(Option::take).flatten() {
                surface.dispose(handle);
            }
        }
    }
}

fn replace_chart(slot: StoredValue<Option<ChartHandle>>, surface: &dyn DrawingSurface, config: ChartConfig) {
    if let Some(previous) = slot.try_update_value(Option::take).flatten() {
        surface.dispose(previous);
    }
    let handle = surface.create(config);
    slot.set_value(Some(handle));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::chart::ChartKind;
    use crate::shared::data::gateway::tests::FailingSource;
    use crate::shared::data::{DatasetSource, FetchError};
    use async_trait::async_trait;
    use contracts::shared::datasets::DatasetKind;
    use contracts::shared::fixtures;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceEvent {
        Created(ChartHandle, ChartKind),
        Disposed(ChartHandle),
    }

    #[derive(Default)]
    struct RecordingSurface {
        next: AtomicU64,
        events: Mutex<Vec<SurfaceEvent>>,
        configs: Mutex<Vec<ChartConfig>>,
    }

    impl RecordingSurface {
        fn events(&self) -> Vec<SurfaceEvent> {
            self.events.lock().unwrap().clone()
        }

        fn created(&self) -> usize {
            self.events()
                .iter()
                .filter(|e| matches!(e, SurfaceEvent::Created(..)))
                .count()
        }

        fn live(&self) -> Vec<ChartHandle> {
            let mut live = Vec::new();
            for event in self.events() {
                match event {
                    SurfaceEvent::Created(handle, _) => live.push(handle),
                    SurfaceEvent::Disposed(handle) => live.retain(|h| *h != handle),
                }
            }
            live
        }
    }

    impl DrawingSurface for RecordingSurface {
        fn create(&self, config: ChartConfig) -> ChartHandle {
            let handle = ChartHandle(self.next.fetch_add(1, Ordering::SeqCst));
            self.events
                .lock()
                .unwrap()
                .push(SurfaceEvent::Created(handle, config.kind));
            self.configs.lock().unwrap().push(config);
            handle
        }

        fn dispose(&self, handle: ChartHandle) {
            self.events
                .lock()
                .unwrap()
                .push(SurfaceEvent::Disposed(handle));
        }
    }

    /// Holds the fetch open until the sender fires
    struct GatedSource {
        gate: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl DatasetSource for GatedSource {
        async fn fetch(&self, _kind: DatasetKind) -> Result<serde_json::Value, FetchError> {
            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Err(FetchError::Status(503))
        }
    }

    fn failing_vm(surface_available: bool) -> DashboardViewModel {
        DashboardViewModel::new(DataGateway::new(FailingSource), surface_available)
    }

    #[test]
    fn test_failed_fetch_still_reaches_ready() {
        let vm = failing_vm(true);
        assert_eq!(vm.phase.get_untracked(), DashboardPhase::Idle);
        block_on(vm.initialize());
        assert_eq!(vm.phase.get_untracked(), DashboardPhase::Ready);
        assert!(!vm.loading.get_untracked());
        let expected = fixtures::fallback_dashboard();
        assert!(vm.stats.get_untracked().iter().any(|s| s.title == "Ingresos"));
        assert_eq!(vm.sales_history.get_untracked(), expected.sales_history);
        assert_eq!(vm.referrals.get_untracked(), expected.referrals);
    }

    #[test]
    fn test_charts_created_when_surface_attached_before_data() {
        let vm = failing_vm(true);
        let surface = Arc::new(RecordingSurface::default());
        vm.attach_surface(surface.clone());
        assert_eq!(surface.created(), 0);

        block_on(vm.initialize());
        assert_eq!(surface.created(), 2);
        assert!(vm.has_trend_chart());
        assert!(vm.has_breakdown_chart());

        let configs = surface.configs.lock().unwrap().clone();
        let trend = configs.iter().find(|c| c.kind == ChartKind::Line).unwrap();
        assert_eq!(trend.series, vec![65.0, 85.0, 75.0, 95.0, 45.0, 70.0, 90.0]);
    }

    #[test]
    fn test_charts_created_when_surface_attached_after_data() {
        let vm = failing_vm(true);
        block_on(vm.initialize());
        assert!(!vm.has_trend_chart());

        let surface = Arc::new(RecordingSurface::default());
        vm.attach_surface(surface.clone());
        assert_eq!(surface.live().len(), 2);
    }

    #[test]
    fn test_reattach_disposes_before_recreating() {
        let vm = failing_vm(true);
        let surface = Arc::new(RecordingSurface::default());
        block_on(vm.initialize());
        vm.attach_surface(surface.clone());
        vm.attach_surface(surface.clone());

        let events = surface.events();
        assert_eq!(events.len(), 6);
        assert!(matches!(events[2], SurfaceEvent::Disposed(_)));
        assert!(matches!(events[3], SurfaceEvent::Disposed(_)));
        // never more than one live chart per kind
        assert_eq!(surface.live().len(), 2);
    }

    #[test]
    fn test_no_surface_capability_never_draws() {
        let vm = failing_vm(false);
        let surface = Arc::new(RecordingSurface::default());
        vm.attach_surface(surface.clone());
        block_on(vm.initialize());
        assert!(!vm.is_surface_attached());
        assert_eq!(surface.created(), 0);
        assert_eq!(vm.phase.get_untracked(), DashboardPhase::Ready);
    }

    #[test]
    fn test_teardown_without_charts_is_noop() {
        let vm = failing_vm(true);
        vm.teardown();
        vm.teardown();
        assert!(!vm.has_trend_chart());
    }

    #[test]
    fn test_teardown_disposes_once() {
        let vm = failing_vm(true);
        let surface = Arc::new(RecordingSurface::default());
        vm.attach_surface(surface.clone());
        block_on(vm.initialize());
        vm.teardown();
        vm.teardown();

        let disposed = surface
            .events()
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Disposed(_)))
            .count();
        assert_eq!(disposed, 2);
        assert!(surface.live().is_empty());
        assert!(!vm.is_surface_attached());
    }

    #[test]
    fn test_teardown_mid_fetch_prevents_late_charts() {
        let (release, gate) = oneshot::channel();
        let vm = DashboardViewModel::new(
            DataGateway::new(GatedSource {
                gate: Mutex::new(Some(gate)),
            }),
            true,
        );
        let surface = Arc::new(RecordingSurface::default());
        vm.attach_surface(surface.clone());

        block_on(join(vm.initialize(), async {
            assert_eq!(vm.phase.get_untracked(), DashboardPhase::Loading);
            vm.teardown();
            let _ = release.send(());
        }));

        assert_eq!(vm.phase.get_untracked(), DashboardPhase::Ready);
        assert!(!vm.loading.get_untracked());
        assert_eq!(surface.created(), 0);
        assert!(!vm.has_trend_chart());
    }
}
