use hrd_model::{City, CityId, Country, CountryId, Employee, State, StateId};
use hrd_refdata::GeoRegistry;

use crate::filter::EmployeePredicate;
use crate::page::{Page, PageRequest};

/// Read side of the geographic reference data consumed by the selection
/// resolver. Implementations are expected to be cheap to query repeatedly;
/// option lists are produced lazily.
pub trait GeoDirectory {
    fn country(&self, id: CountryId) -> Option<&Country>;

    fn state(&self, id: StateId) -> Option<&State>;

    fn city(&self, id: CityId) -> Option<&City>;

    /// States belonging to one country. Unknown ids yield an empty sequence.
    fn states_by_country(&self, country_id: CountryId) -> Box<dyn Iterator<Item = &State> + '_>;

    /// Cities belonging to one state. Unknown ids yield an empty sequence.
    fn cities_by_state(&self, state_id: StateId) -> Box<dyn Iterator<Item = &City> + '_>;

    /// One page of a state's cities, defaulting to [`crate::page::CITY_PAGE_LIMIT`]
    /// rows, with the true total always reported.
    fn cities_page(&self, state_id: StateId, request: PageRequest) -> Page<&City> {
        let mut items = Vec::new();
        let mut total = 0usize;
        for city in self.cities_by_state(state_id) {
            if total >= request.offset && items.len() < request.limit {
                items.push(city);
            }
            total += 1;
        }
        Page {
            items,
            total,
            offset: request.offset,
            limit: request.limit,
        }
    }
}

/// Read side of the employee records. The predicate is produced by
/// [`crate::filter::EmployeeFilter::build`]; execution stays with the data
/// layer.
pub trait EmployeeStore {
    fn find_employees<'a>(
        &'a self,
        predicate: &'a EmployeePredicate,
    ) -> Box<dyn Iterator<Item = &'a Employee> + 'a>;
}

/// Plain in-memory geography, for tests and small single-process deployments.
#[derive(Debug, Clone, Default)]
pub struct GeoSnapshot {
    countries: Vec<Country>,
    states: Vec<State>,
    cities: Vec<City>,
}

impl GeoSnapshot {
    pub fn new(countries: Vec<Country>, states: Vec<State>, cities: Vec<City>) -> Self {
        Self {
            countries,
            states,
            cities,
        }
    }
}

impl GeoDirectory for GeoSnapshot {
    fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.iter().find(|country| country.id == id)
    }

    fn state(&self, id: StateId) -> Option<&State> {
        self.states.iter().find(|state| state.id == id)
    }

    fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    fn states_by_country(&self, country_id: CountryId) -> Box<dyn Iterator<Item = &State> + '_> {
        Box::new(
            self.states
                .iter()
                .filter(move |state| state.country_id == country_id),
        )
    }

    fn cities_by_state(&self, state_id: StateId) -> Box<dyn Iterator<Item = &City> + '_> {
        Box::new(
            self.cities
                .iter()
                .filter(move |city| city.state_id == state_id),
        )
    }
}

impl GeoDirectory for GeoRegistry {
    fn country(&self, id: CountryId) -> Option<&Country> {
        GeoRegistry::country(self, id)
    }

    fn state(&self, id: StateId) -> Option<&State> {
        GeoRegistry::state(self, id)
    }

    fn city(&self, id: CityId) -> Option<&City> {
        GeoRegistry::city(self, id)
    }

    fn states_by_country(&self, country_id: CountryId) -> Box<dyn Iterator<Item = &State> + '_> {
        Box::new(self.states_in_country(country_id))
    }

    fn cities_by_state(&self, state_id: StateId) -> Box<dyn Iterator<Item = &City> + '_> {
        Box::new(self.cities_in_state(state_id))
    }
}

/// In-memory employee store applying predicates on iteration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployees {
    employees: Vec<Employee>,
}

impl InMemoryEmployees {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn push(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }
}

impl EmployeeStore for InMemoryEmployees {
    fn find_employees<'a>(
        &'a self,
        predicate: &'a EmployeePredicate,
    ) -> Box<dyn Iterator<Item = &'a Employee> + 'a> {
        Box::new(
            self.employees
                .iter()
                .filter(move |employee| predicate.matches(employee)),
        )
    }
}
