//! Planner session
//!
//! Owns the bed group list and the overlay, loads them from the key-value
//! store and writes every change back. Writes run in the background so a
//! new gesture never waits on storage; [`PlannerSession::flush`] awaits the
//! ones still outstanding.

use std::sync::Arc;

use gardenkit_core::{BedGroup, GeoPosition, GuiPositions, LocationData, Result};
use gardenkit_designer::{
    render_overlay, BedGroupList, BedOverlay, CanvasSurface, OverlayEvent, PointerId,
    PointerInput,
};
use gardenkit_settings::keys::{
    BED_GROUPS, BED_GROUPS_GUI, ELEVATION, LOCATION, RAW_TEMPERATURE_DATA, TIMEZONE,
};
use gardenkit_settings::{KeyValueStore, PersistedState, PlannerConfig, StoreResult};
use gardenkit_weather::{
    locate_site, refresh_temperature_history, RawWeatherDataCache, RiskThresholds,
    SiteInfoProvider, TemperatureHistory, WeatherDataProvider,
};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

pub struct PlannerSession {
    config: PlannerConfig,
    bed_groups: PersistedState<Vec<BedGroup>>,
    gui_positions: PersistedState<GuiPositions>,
    location: PersistedState<Option<LocationData>>,
    elevation: PersistedState<f64>,
    timezone: PersistedState<String>,
    temperature_data: PersistedState<Option<RawWeatherDataCache>>,
    list: BedGroupList,
    overlay: BedOverlay,
    pending: Vec<JoinHandle<StoreResult<()>>>,
}

impl PlannerSession {
    /// Loads the stored plan. Missing or unreadable keys start out empty.
    pub async fn open(store: Arc<dyn KeyValueStore>, config: PlannerConfig) -> Self {
        let bed_groups: PersistedState<Vec<BedGroup>> =
            PersistedState::load(Arc::clone(&store), BED_GROUPS, Vec::new()).await;
        let gui_positions: PersistedState<GuiPositions> =
            PersistedState::load(Arc::clone(&store), BED_GROUPS_GUI, GuiPositions::new()).await;
        let location: PersistedState<Option<LocationData>> =
            PersistedState::load(Arc::clone(&store), LOCATION, None).await;
        let elevation: PersistedState<f64> =
            PersistedState::load(Arc::clone(&store), ELEVATION, 0.0).await;
        let timezone: PersistedState<String> =
            PersistedState::load(Arc::clone(&store), TIMEZONE, String::new()).await;
        let temperature_data: PersistedState<Option<RawWeatherDataCache>> =
            PersistedState::load(store, RAW_TEMPERATURE_DATA, None).await;

        let list = BedGroupList::from_groups(bed_groups.get().clone());
        let size = site_size(location.get().as_ref(), &config);
        let mut overlay = BedOverlay::with_groups(size, list.groups(), gui_positions.get().clone());
        overlay.set_selected(list.selected_id());
        info!(
            "Opened plan with {} bed groups on a {:.1}m site",
            list.len(),
            size
        );

        Self {
            config,
            bed_groups,
            gui_positions,
            location,
            elevation,
            timezone,
            temperature_data,
            list,
            overlay,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn bed_groups(&self) -> &BedGroupList {
        &self.list
    }

    pub fn overlay(&self) -> &BedOverlay {
        &self.overlay
    }

    pub fn location(&self) -> Option<&LocationData> {
        self.location.get().as_ref()
    }

    pub fn elevation(&self) -> f64 {
        *self.elevation.get()
    }

    pub fn timezone(&self) -> &str {
        self.timezone.get()
    }

    /// Forwards a pointer event to the overlay and persists what it commits.
    pub fn handle_pointer(
        &mut self,
        input: &PointerInput,
        surface: &mut dyn CanvasSurface,
    ) -> Vec<OverlayEvent> {
        let events = self.overlay.handle_pointer(input, surface);
        self.apply_overlay_events(&events);
        events
    }

    pub fn handle_lost_pointer_capture(&mut self, pointer_id: PointerId) -> Vec<OverlayEvent> {
        let events = self.overlay.handle_lost_pointer_capture(pointer_id);
        self.apply_overlay_events(&events);
        events
    }

    /// Selects a bed group, e.g. from the list next to the map.
    pub fn select(&mut self, id: &str) -> bool {
        let changed = self.list.select(id);
        self.overlay.set_selected(self.list.selected_id());
        changed
    }

    pub fn add_bed_group(&mut self, group: BedGroup) -> Result<()> {
        self.list.add(group)?;
        self.groups_changed();
        Ok(())
    }

    pub fn update_bed_group(&mut self, group: BedGroup) -> Result<bool> {
        let updated = self.list.update(group)?;
        if updated {
            self.groups_changed();
        }
        Ok(updated)
    }

    /// Removes a bed group. Its placement entry is pruned on the next
    /// placement write.
    pub fn delete_bed_group(&mut self, id: &str) -> Option<BedGroup> {
        let removed = self.list.delete(id)?;
        self.groups_changed();
        Some(removed)
    }

    /// Looks up the picked position and stores it as the site.
    pub async fn locate(
        &mut self,
        provider: &dyn SiteInfoProvider,
        position: GeoPosition,
        zoom: f64,
    ) -> gardenkit_weather::Result<()> {
        let site = locate_site(provider, position, zoom).await?;
        let size = site_size(Some(&site.location), &self.config);
        let handles = [
            self.location.set(Some(site.location)),
            self.elevation.set(site.elevation),
            self.timezone.set(site.timezone),
        ];
        for handle in handles {
            self.track(handle);
        }
        self.overlay.set_size_in_meters(size);
        Ok(())
    }

    /// Fetches the temperature history of the site unless the cached one is
    /// current. Returns whether new data was fetched.
    pub async fn refresh_weather(
        &mut self,
        provider: &dyn WeatherDataProvider,
    ) -> gardenkit_weather::Result<bool> {
        let position = self.location().map(LocationData::position);
        let fetched = refresh_temperature_history(
            provider,
            position.as_ref(),
            *self.elevation.get(),
            self.timezone.get(),
            self.temperature_data.get().as_ref(),
        )
        .await?;

        match fetched {
            Some(cache) => {
                let handle = self.temperature_data.set(Some(cache));
                self.track(handle);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Statistics and frost probabilities of the cached temperature history.
    pub fn temperature_history(&self) -> Option<TemperatureHistory> {
        self.temperature_data
            .get()
            .as_ref()
            .map(|cache| TemperatureHistory::from_cache(cache, self.config.weather.frost_temperature))
    }

    pub fn risk_thresholds(&self) -> RiskThresholds {
        let weather = &self.config.weather;
        RiskThresholds {
            low_risk: weather.low_risk_threshold,
            high_risk: weather.high_risk_threshold,
            min_days: weather.min_window_days,
        }
    }

    pub fn render_svg(&self) -> String {
        render_overlay(&self.overlay)
    }

    /// Waits for all background writes. Returns the first failure.
    pub async fn flush(&mut self) -> StoreResult<()> {
        let mut result = Ok(());
        for handle in self.pending.drain(..) {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if result.is_ok() {
                        result = Err(e);
                    }
                }
                Err(e) => error!("Persist task failed: {}", e),
            }
        }
        result
    }

    fn apply_overlay_events(&mut self, events: &[OverlayEvent]) {
        for event in events {
            match event {
                OverlayEvent::GuiPositionsChanged(positions) => {
                    debug!("Persisting placement of {} bed groups", positions.len());
                    let handle = self.gui_positions.set(positions.clone());
                    self.track(handle);
                }
                OverlayEvent::Selected(id) => {
                    self.list.select(id);
                }
            }
        }
    }

    fn groups_changed(&mut self) {
        let handle = self.bed_groups.set(self.list.groups().to_vec());
        self.track(handle);
        let gui = self.overlay.gui_positions().clone();
        self.overlay.sync(self.list.groups(), gui);
        self.overlay.set_selected(self.list.selected_id());
    }

    fn track(&mut self, handle: JoinHandle<StoreResult<()>>) {
        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }
}

fn site_size(location: Option<&LocationData>, config: &PlannerConfig) -> f64 {
    location
        .and_then(|l| l.total_size_in_meters)
        .unwrap_or(config.overlay.default_site_size_in_meters)
}
