use hrd_model::{City, CityId, CountryId, State, StateId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directory::GeoDirectory;

/// The country/state/city choice of one in-progress form edit.
///
/// Owned by a single editing session; concurrent editors each hold their own
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoSelection {
    pub country: Option<CountryId>,
    pub state: Option<StateId>,
    pub city: Option<CityId>,
}

impl GeoSelection {
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.state.is_none() && self.city.is_none()
    }
}

/// Maintains a cascading country → state → city selection against a
/// [`GeoDirectory`], clearing downstream choices whenever an upstream one
/// changes.
///
/// The setters are deliberately permissive: `set_state` accepts a state that
/// does not belong to the selected country (and likewise `set_city`). The
/// form layer is expected to offer only options produced by
/// [`state_options`](Self::state_options) / [`city_options`](Self::city_options);
/// stored records are audited for consistency out-of-band.
#[derive(Debug)]
pub struct SelectionResolver<'d, D: GeoDirectory + ?Sized> {
    directory: &'d D,
    selection: GeoSelection,
}

impl<'d, D: GeoDirectory + ?Sized> SelectionResolver<'d, D> {
    pub fn new(directory: &'d D) -> Self {
        Self {
            directory,
            selection: GeoSelection::default(),
        }
    }

    /// Resume from a previously stored selection, e.g. when editing an
    /// existing record.
    pub fn with_selection(directory: &'d D, selection: GeoSelection) -> Self {
        Self {
            directory,
            selection,
        }
    }

    pub fn selection(&self) -> GeoSelection {
        self.selection
    }

    /// Choose a country (or clear it). State and city are cleared
    /// unconditionally, even when the new country still contains the
    /// previously selected state.
    pub fn set_country(&mut self, country: Option<CountryId>) {
        if self.selection.state.is_some() || self.selection.city.is_some() {
            debug!(
                country = ?country.map(CountryId::get),
                "country changed, clearing state and city"
            );
        }
        self.selection.country = country;
        self.selection.state = None;
        self.selection.city = None;
    }

    /// Choose a state (or clear it). City is cleared unconditionally. The
    /// value is not checked against the selected country.
    pub fn set_state(&mut self, state: Option<StateId>) {
        if self.selection.city.is_some() {
            debug!(state = ?state.map(StateId::get), "state changed, clearing city");
        }
        self.selection.state = state;
        self.selection.city = None;
    }

    /// Choose a city (or clear it). No further cascade.
    pub fn set_city(&mut self, city: Option<CityId>) {
        self.selection.city = city;
    }

    /// Valid state options for the current selection. Empty when no country
    /// is chosen or the chosen country has no states.
    pub fn state_options(&self) -> Box<dyn Iterator<Item = &'d State> + 'd> {
        match self.selection.country {
            Some(country_id) => self.directory.states_by_country(country_id),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Valid city options for the current selection. Empty when no state is
    /// chosen or the chosen state has no cities.
    pub fn city_options(&self) -> Box<dyn Iterator<Item = &'d City> + 'd> {
        match self.selection.state {
            Some(state_id) => self.directory.cities_by_state(state_id),
            None => Box::new(std::iter::empty()),
        }
    }
}
