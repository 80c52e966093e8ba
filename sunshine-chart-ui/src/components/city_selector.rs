//! Inline checklist for choosing which cities are shown.

use crate::state::AppState;
use dioxus::prelude::*;

/// City checklist.
/// Lists every dataset city and keeps `selected_cities` in dataset order.
#[component]
pub fn CitySelector() -> Element {
    let state = use_context::<AppState>();
    let cities = state
        .dataset
        .read()
        .as_ref()
        .map(|d| d.cities())
        .unwrap_or_default();
    let selected = state.selected_cities.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0; text-align: center;",
            h3 { style: "text-align: center;", "Select cities:" }
            div {
                style: "display: inline-block; width: 100%; text-align: center;",
                for city in cities.iter() {
                    CityCheckbox {
                        key: "{city}",
                        city: city.clone(),
                        all_cities: cities.clone(),
                        checked: selected.contains(city),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CityCheckboxProps {
    city: String,
    /// Option order, used to keep the selection sorted like the checklist
    all_cities: Vec<String>,
    checked: bool,
}

#[component]
fn CityCheckbox(props: CityCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let id = format!("city-{}", props.city.replace(' ', "-"));
    let city = props.city.clone();
    let all_cities = props.all_cities.clone();

    let on_change = move |evt: Event<FormData>| {
        let checked = evt.checked();
        let mut current = state.selected_cities.read().clone();
        if checked {
            if !current.contains(&city) {
                current.push(city.clone());
            }
        } else {
            current.retain(|c| c != &city);
        }
        current.sort_by_key(|c| all_cities.iter().position(|o| o == c));
        state.selected_cities.set(current);
    };

    rsx! {
        label {
            r#for: "{id}",
            style: "margin-right: 12px; white-space: nowrap;",
            input {
                id: "{id}",
                r#type: "checkbox",
                value: "{props.city}",
                checked: props.checked,
                onchange: on_change,
            }
            " {props.city}"
        }
    }
}
