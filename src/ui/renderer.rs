//! Text rendering of the search form and its request state.
//!
//! Every function here is pure: the same inputs always produce the same text.

use std::fmt::Write as _;

use crate::config::types::UiConfig;
use crate::domain::hotel::{Diagnostics, SearchResult, format_price};
use crate::domain::request_state::RequestState;
use crate::domain::search_query::{FormField, SearchForm};

pub const TITLE: &str = "Hotel Rate Comparator";
pub const SUBMIT_LABEL: &str = "Search";
pub const LOADING_LABEL: &str = "Searching...";
const EMPTY_LIST: &str = "No hotels found.";

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub currency_symbol: String,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for RenderOptions {
    fn from(config: &UiConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            color: config.color,
        }
    }
}

/// Title, the three fields and the submit control.
pub fn render_form(form: &SearchForm, state: &RequestState) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "== {TITLE} ==");
    for field in FormField::ALL {
        let value = form.get(field);
        let shown = if value.is_empty() { "<required>" } else { value };
        let _ = writeln!(text, "{:<10} {shown}", format!("{}:", field.label()));
    }
    if state.is_loading() {
        let _ = writeln!(text, "[ {LOADING_LABEL} ] (disabled)");
    } else {
        let _ = writeln!(text, "[ {SUBMIT_LABEL} ]");
    }
    text
}

/// The area below the form: nothing, a loading line, an error, or results.
pub fn render_state(state: &RequestState, options: &RenderOptions) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading => format!("{LOADING_LABEL}\n"),
        RequestState::Error(message) => {
            if options.color {
                format!("{RED}! {message}{RESET}\n")
            } else {
                format!("! {message}\n")
            }
        }
        RequestState::Success(result) => render_result(result, options),
    }
}

pub fn render(form: &SearchForm, state: &RequestState, options: &RenderOptions) -> String {
    let mut text = render_form(form, state);
    let below = render_state(state, options);
    if !below.is_empty() {
        text.push('\n');
        text.push_str(&below);
    }
    text
}

fn render_result(result: &SearchResult, options: &RenderOptions) -> String {
    let mut text = String::new();
    if result.hotels.is_empty() {
        let _ = writeln!(text, "{EMPTY_LIST}");
    } else {
        let _ = writeln!(text, "Cheapest Hotels");
        for (i, hotel) in result.hotels.iter().enumerate() {
            let _ = writeln!(
                text,
                "{}. {} — {}{} ({})",
                i + 1,
                hotel.name,
                options.currency_symbol,
                format_price(hotel.price),
                hotel.city,
            );
        }
    }
    if let Some(ref diagnostics) = result.diagnostics {
        text.push('\n');
        text.push_str(&render_diagnostics(diagnostics));
    }
    text
}

fn render_diagnostics(diagnostics: &Diagnostics) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Diagnostics");
    let _ = writeln!(text, "  Supplier A: {}", diagnostics.supplier_a);
    let _ = writeln!(text, "  Supplier B: {}", diagnostics.supplier_b);
    let _ = writeln!(text, "  Best price from: {}", diagnostics.label());
    text
}
