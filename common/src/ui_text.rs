//! Built-in UI strings. Czech is the store's default language.

use std::borrow::Cow;

use crate::{sort_param::SortParam, storefront_model::ProductBadge};

#[derive(Debug, PartialEq, Eq)]
pub struct UiText {
    pub sort_by: &'static str,
    pub filter_by: &'static str,
    pub applied_filters: &'static str,
    pub toggle_filters: &'static str,
    pub price: &'static str,
    pub availability: &'static str,
    pub price_from: &'static str,
    pub price_to: &'static str,
    pub load_more: &'static str,
    pub loading: &'static str,
    pub load_more_failed: &'static str,
    pub retry: &'static str,
    pub previous_products: &'static str,
    pub next_products: &'static str,
    pub no_products: &'static str,
    pub all_products: &'static str,
    pub country: &'static str,
    pub follow_us: &'static str,
    pub privacy_policy: &'static str,
    pub newsletter_title: &'static str,
    pub email_placeholder: &'static str,
    pub subscribe: &'static str,
    pub not_found: &'static str,
    pub back_home: &'static str,
    pub home_heading: &'static str,
    pub browse_catalog: &'static str,
    sort_labels: [&'static str; 5],
}

static CS: UiText = UiText {
    sort_by: "Seřadit podle:",
    filter_by: "Filtrovat podle",
    applied_filters: "Použité filtry",
    toggle_filters: "Zobrazit filtry",
    price: "Cena",
    availability: "Dostupnost",
    price_from: "od",
    price_to: "do",
    load_more: "Načíst další produkty",
    loading: "Načítání...",
    load_more_failed: "Načtení dalších produktů selhalo.",
    retry: "Zkusit znovu",
    previous_products: "Předchozí produkty",
    next_products: "Další produkty",
    no_products: "Žádné produkty neodpovídají zvoleným filtrům.",
    all_products: "Všechny produkty",
    country: "Země",
    follow_us: "Sledujte nás",
    privacy_policy: "Zásady ochrany osobních údajů",
    newsletter_title: "Přihlaste se k odběru novinek",
    email_placeholder: "Váš email",
    subscribe: "Přihlásit se",
    not_found: "Stránka nebyla nalezena",
    back_home: "Zpět na úvodní stránku",
    home_heading: "Vítejte v našem obchodě",
    browse_catalog: "Prohlédnout produkty",
    sort_labels: ["Doporučené", "Cena: Od nejnižší", "Cena: Od nejvyšší", "Nejprodávanější", "Nejnovější"],
};

static EN: UiText = UiText {
    sort_by: "Sort by:",
    filter_by: "Filter by",
    applied_filters: "Applied filters",
    toggle_filters: "Show filters",
    price: "Price",
    availability: "Availability",
    price_from: "From",
    price_to: "To",
    load_more: "Load more products",
    loading: "Loading...",
    load_more_failed: "Loading more products failed.",
    retry: "Try again",
    previous_products: "Previous products",
    next_products: "Next products",
    no_products: "No products match the selected filters.",
    all_products: "All products",
    country: "Country",
    follow_us: "Follow us",
    privacy_policy: "Privacy policy",
    newsletter_title: "Sign up for our newsletter",
    email_placeholder: "Your email",
    subscribe: "Subscribe",
    not_found: "Page not found",
    back_home: "Back to the home page",
    home_heading: "Welcome to our store",
    browse_catalog: "Browse products",
    sort_labels: ["Featured", "Price: Low - High", "Price: High - Low", "Best Selling", "Newest"],
};

impl UiText {
    pub fn for_language(language: &str) -> &'static UiText {
        if language.eq_ignore_ascii_case("cs") { &CS } else { &EN }
    }

    pub fn sort_label(&self, sort: SortParam) -> &'static str {
        let index = SortParam::ALL.iter().position(|s| *s == sort).unwrap_or(0);
        self.sort_labels[index]
    }

    /// Facet labels come from the API in the shop's admin language; the
    /// two built-in facets get translated.
    pub fn filter_label<'a>(&self, label: &'a str) -> Cow<'a, str> {
        match label.to_lowercase().as_str() {
            "availability" => Cow::Borrowed(self.availability),
            "price" => Cow::Borrowed(self.price),
            _ => Cow::Borrowed(label),
        }
    }

    pub fn badge_label(&self, badge: ProductBadge) -> &'static str {
        match badge {
            ProductBadge::Sale => "Sale",
            ProductBadge::New => "New",
        }
    }
}
