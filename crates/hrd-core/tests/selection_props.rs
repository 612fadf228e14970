//! Property tests pinning the cascade transitions to a reference model.

use hrd_core::{GeoSnapshot, SelectionResolver};
use hrd_model::{City, CityId, Country, CountryId, State, StateId};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Country(Option<u64>),
    State(Option<u64>),
    City(Option<u64>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::option::of(0u64..6).prop_map(Op::Country),
        proptest::option::of(0u64..12).prop_map(Op::State),
        proptest::option::of(0u64..24).prop_map(Op::City),
    ]
}

fn geo() -> GeoSnapshot {
    let countries = (1..=3)
        .map(|id| Country::new(CountryId::new(id), format!("Country {id}"), "AA", "1").unwrap())
        .collect();
    let states = (1..=9)
        .map(|id| State {
            id: StateId::new(id),
            name: format!("State {id}"),
            country_id: CountryId::new(id % 3 + 1),
        })
        .collect();
    let cities = (1..=18)
        .map(|id| City {
            id: CityId::new(id),
            name: format!("City {id}"),
            state_id: StateId::new(id % 9 + 1),
        })
        .collect();
    GeoSnapshot::new(countries, states, cities)
}

proptest! {
    /// Whatever the call sequence, the resolver behaves exactly like the
    /// documented transition rules: country writes reset state and city,
    /// state writes reset city and never touch country, city writes cascade
    /// nowhere.
    #[test]
    fn cascade_matches_reference_model(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let snapshot = geo();
        let mut resolver = SelectionResolver::new(&snapshot);
        let mut expected: (Option<u64>, Option<u64>, Option<u64>) = (None, None, None);

        for op in ops {
            match op {
                Op::Country(country) => {
                    expected = (country, None, None);
                    resolver.set_country(country.map(CountryId::new));
                }
                Op::State(state) => {
                    expected.1 = state;
                    expected.2 = None;
                    resolver.set_state(state.map(StateId::new));
                }
                Op::City(city) => {
                    expected.2 = city;
                    resolver.set_city(city.map(CityId::new));
                }
            }

            let selection = resolver.selection();
            prop_assert_eq!(selection.country.map(CountryId::get), expected.0);
            prop_assert_eq!(selection.state.map(StateId::get), expected.1);
            prop_assert_eq!(selection.city.map(CityId::get), expected.2);
        }
    }

    /// Option queries never leak rows from outside the selected ancestor.
    #[test]
    fn options_always_belong_to_the_selected_ancestor(
        ops in proptest::collection::vec(op_strategy(), 0..40)
    ) {
        let snapshot = geo();
        let mut resolver = SelectionResolver::new(&snapshot);

        for op in ops {
            match op {
                Op::Country(country) => resolver.set_country(country.map(CountryId::new)),
                Op::State(state) => resolver.set_state(state.map(StateId::new)),
                Op::City(city) => resolver.set_city(city.map(CityId::new)),
            }

            let selection = resolver.selection();
            for state in resolver.state_options() {
                prop_assert_eq!(Some(state.country_id), selection.country);
            }
            for city in resolver.city_options() {
                prop_assert_eq!(Some(city.state_id), selection.state);
            }
            if selection.country.is_none() {
                prop_assert_eq!(resolver.state_options().count(), 0);
            }
            if selection.state.is_none() {
                prop_assert_eq!(resolver.city_options().count(), 0);
            }
        }
    }
}
