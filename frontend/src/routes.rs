use common::{localization::I18nLocale, query_params::SearchParams, storefront_model::ListingSource};
use dioxus::prelude::*;

use crate::components::layout::StorefrontLayout;
use crate::pages::all_products_page::{AllProductsPage, LocalizedAllProductsPage};
use crate::pages::collection_page::{CollectionPage, LocalizedCollectionPage};
use crate::pages::home_page::{HomePage, LocalizedHomePage};
use crate::pages::not_found_page::PageNotFound;

/// Every page exists unprefixed for the default locale and under a
/// `/:locale` prefix (`/en-us/...`) for the others.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StorefrontLayout)]

    #[route("/")]
    HomePage {},

    #[route("/products?:..params")]
    AllProductsPage { params: SearchParams },

    #[route("/collections/:handle?:..params")]
    CollectionPage { handle: String, params: SearchParams },


    #[route("/:locale")]
    LocalizedHomePage { locale: I18nLocale },

    #[route("/:locale/products?:..params")]
    LocalizedAllProductsPage { locale: I18nLocale, params: SearchParams },

    #[route("/:locale/collections/:handle?:..params")]
    LocalizedCollectionPage { locale: I18nLocale, handle: String, params: SearchParams },


    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    pub fn home(locale: &I18nLocale) -> Self {
        if locale.is_default() {
            Self::HomePage {}
        } else {
            Self::LocalizedHomePage { locale: locale.clone() }
        }
    }

    pub fn listing(source: &ListingSource, locale: &I18nLocale, params: SearchParams) -> Self {
        match (source, locale.is_default()) {
            (ListingSource::AllProducts, true) => Self::AllProductsPage { params },
            (ListingSource::AllProducts, false) => Self::LocalizedAllProductsPage { locale: locale.clone(), params },
            (ListingSource::Collection { handle }, true) => Self::CollectionPage { handle: handle.clone(), params },
            (ListingSource::Collection { handle }, false) => {
                Self::LocalizedCollectionPage { locale: locale.clone(), handle: handle.clone(), params }
            }
        }
    }

    pub fn locale(&self) -> I18nLocale {
        match self {
            Self::LocalizedHomePage { locale }
            | Self::LocalizedAllProductsPage { locale, .. }
            | Self::LocalizedCollectionPage { locale, .. } => locale.clone(),
            _ => I18nLocale::default(),
        }
    }

    /// The same page and query under another locale.
    pub fn with_locale(&self, locale: &I18nLocale) -> Self {
        match self {
            Self::HomePage {} | Self::LocalizedHomePage { .. } => Self::home(locale),
            Self::AllProductsPage { params } | Self::LocalizedAllProductsPage { params, .. } => {
                Self::listing(&ListingSource::AllProducts, locale, params.clone())
            }
            Self::CollectionPage { handle, params } | Self::LocalizedCollectionPage { handle, params, .. } => {
                Self::listing(&ListingSource::Collection { handle: handle.clone() }, locale, params.clone())
            }
            Self::PageNotFound { .. } => self.clone(),
        }
    }
}
