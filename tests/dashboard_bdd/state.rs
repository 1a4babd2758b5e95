//! Scenario state for the dashboard BDD tests.

use std::sync::Arc;

use bubbletea_rs::Cmd;
use cutline::assets::LogoResolver;
use cutline::records::gateway::memory::InMemoryRecordStore;
use cutline::records::{DashboardService, RecordStore};
use cutline::route::Route;
use cutline::tui::messages::AppMsg;
use cutline::tui::{DashboardApp, DashboardContext};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;

use super::harness::StepResult;

#[derive(ScenarioState, Default)]
pub(crate) struct DashboardState {
    pub(crate) store: Slot<Arc<InMemoryRecordStore>>,
    pub(crate) app: Slot<DashboardApp>,
    pub(crate) calls_before: Slot<usize>,
}

impl DashboardState {
    /// Builds a dashboard over `seeded` sized to a roomy terminal.
    pub(crate) fn start(&self, seeded: InMemoryRecordStore) {
        let store = Arc::new(seeded);
        let context = DashboardContext {
            service: DashboardService::new(Arc::clone(&store) as Arc<dyn RecordStore>),
            logos: Arc::new(LogoResolver::new("/nonexistent/logos")),
            initial_route: Route::Picker,
        };
        let mut app = DashboardApp::new(context);
        app.handle_message(&AppMsg::WindowResized {
            width: 120,
            height: 40,
        });
        self.app.set(app);
        self.store.set(store);
    }

    /// Runs `update` against the app and returns its result.
    pub(crate) fn with_app<T>(
        &self,
        update: impl FnOnce(&mut DashboardApp) -> T,
    ) -> Result<T, Box<dyn std::error::Error>> {
        self.app
            .with_mut(update)
            .ok_or_else(|| "dashboard should be started first".into())
    }

    /// Opens `route` and applies every response it triggers.
    pub(crate) fn open(&self, route: &Route) -> StepResult {
        let cmd = self.with_app(|app| app.open_route(route))?;
        self.settle(cmd)
    }

    /// Applies `message` and every response it triggers.
    pub(crate) fn send(&self, message: &AppMsg) -> StepResult {
        let cmd = self.with_app(|app| app.handle_message(message))?;
        self.settle(cmd)
    }

    /// Executes `cmd` and its follow-ups until nothing is pending.
    pub(crate) fn settle(&self, cmd: Option<Cmd>) -> StepResult {
        let runtime = Runtime::new()?;
        let mut pending = cmd;
        while let Some(next) = pending {
            let Some(message) = runtime.block_on(next) else {
                break;
            };
            let app_msg = message
                .downcast::<AppMsg>()
                .map_err(|_| "command returned a non-AppMsg value")?;
            pending = self.with_app(|app| app.handle_message(&app_msg))?;
        }
        Ok(())
    }

    /// Backend calls recorded by the store so far.
    pub(crate) fn call_count(&self) -> Result<usize, Box<dyn std::error::Error>> {
        self.store
            .with_ref(|store| store.call_count())
            .ok_or_else(|| "store should be seeded first".into())
    }
}
