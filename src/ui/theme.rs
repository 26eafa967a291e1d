//! Class helpers shared across pages so markup stays consistent with `main.css`.

pub const PANEL: &str = "panel";
pub const LABEL: &str = "label";
pub const INPUT: &str = "input";
pub const BTN_PRIMARY: &str = "btn btn-primary";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

/// Toggle-style button used for plan and car pickers.
pub fn choice_button(selected: bool) -> &'static str {
    if selected {
        "btn btn-selected"
    } else {
        "btn"
    }
}

pub fn signed_amount(value: f64) -> &'static str {
    if value < 0.0 {
        "negative"
    } else if value > 0.0 {
        "positive"
    } else {
        ""
    }
}
