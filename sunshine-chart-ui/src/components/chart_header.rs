//! Page header with the dashboard title and an optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Optional line under the title (e.g., the current caption)
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered header for the dashboard page.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            div {
                style: "text-align: center; font-size: 50px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 14px; color: #666; text-align: center;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
