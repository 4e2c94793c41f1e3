//! Plain-text rendering of the directory page

use munchies_client::{ClientConfig, FacetOption, PageState, RestaurantCard, Storefront};

pub const TITLE: &str = "🍜 Munchies";
pub const LOADING: &str = "Loading...";
pub const NO_RESULTS: &str = "No restaurants available.";

/// Render the whole page for the current state
pub fn render_page(storefront: &Storefront, config: &ClientConfig) -> String {
    let mut out = format!("{}\n\n", TITLE);

    match storefront.state() {
        PageState::Loading => out.push_str(&format!("{}\n", LOADING)),
        PageState::Error(message) => out.push_str(&format!("Error: {}\n", message)),
        PageState::Ready(_) => {
            if let Some(controls) = storefront.facet_controls(config) {
                out.push_str(&render_facet("Filters", &controls.categories));
                out.push_str(&render_facet("Price", &controls.price_ranges));
                out.push_str(&render_facet("Delivery", &controls.delivery_times));
                out.push('\n');
            }

            let cards = storefront.cards(config);
            if cards.is_empty() {
                out.push_str(&format!("{}\n", NO_RESULTS));
            }
            for card in &cards {
                out.push_str(&render_card(card));
            }
        }
    }

    out
}

fn render_facet<K>(title: &str, options: &[FacetOption<K>]) -> String {
    let mut line = format!("{:<9}", format!("{}:", title));
    if options.is_empty() {
        line.push_str(" -");
    }
    for option in options {
        let mark = if option.selected { 'x' } else { ' ' };
        line.push_str(&format!(" [{}] {}", mark, option.label));
    }
    line.push('\n');
    line
}

fn render_card(card: &RestaurantCard) -> String {
    let mut chips = format!("[{}]", card.status_label);
    if let Some(delivery) = &card.delivery_label {
        chips.push_str(&format!(" [{}]", delivery));
    }

    let mut out = format!("+ {}  ({:.1})\n| {}\n", card.name, card.rating, chips);
    if let Some(notice) = card.closed_notice {
        out.push_str(&format!("| {}\n", notice));
    }
    out.push_str(&format!("| {}\n\n", card.image_url));
    out
}
