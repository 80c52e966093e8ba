//! Radio group for choosing the month.

use crate::state::AppState;
use dioxus::prelude::*;

/// Month radio buttons.
/// Offers the months present in the dataset; nothing is selected initially.
#[component]
pub fn MonthSelector() -> Element {
    let mut state = use_context::<AppState>();
    let months: Vec<(&'static str, &'static str)> = state
        .dataset
        .read()
        .as_ref()
        .map(|d| d.months())
        .unwrap_or_default()
        .iter()
        .map(|m| (m.abbreviation(), m.display_name()))
        .collect();
    let selected = (state.selected_month)();

    rsx! {
        div {
            style: "margin: 8px 0; text-align: center;",
            h3 { style: "text-align: center;", "Choose month:" }
            div {
                style: "display: inline-block; width: 100%; text-align: center; font-size: 20px;",
                for (abbr, name) in months.into_iter() {
                    label {
                        key: "{abbr}",
                        style: "margin-right: 12px; white-space: nowrap;",
                        input {
                            r#type: "radio",
                            name: "month",
                            value: "{abbr}",
                            checked: selected == abbr,
                            onchange: move |_| state.selected_month.set(abbr.to_string()),
                        }
                        " {name}"
                    }
                }
            }
        }
    }
}
