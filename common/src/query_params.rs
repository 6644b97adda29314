//! URL query parameters and the filter/sort codec built on top of them.
//!
//! Every codec function takes the current parameters by reference and returns
//! a new set; nothing here touches the network or the browser.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    collection_query::PageCursor,
    product_filter::{FilterParseError, PriceRange, ProductFilter},
    sort_param::SortParam,
    storefront_const::{CURSOR_PARAM, DIRECTION_PARAM, FILTER_URL_PREFIX, SORT_PARAM},
};

/// Ordered multimap of query parameters with `URLSearchParams` semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchParams(Vec<(String, String)>);

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a form-urlencoded query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self(pairs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().filter(move |(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn has_value(&self, key: &str, value: &str) -> bool {
        self.0.iter().any(|(k, v)| k == key && v == value)
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Replaces the first value under `key` in place and drops the others,
    /// or appends when the key is absent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.0[first].1 = value;
                let mut index = 0;
                self.0.retain(|(k, _)| {
                    let keep = *k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.0.push((key, value)),
        }
    }

    pub fn delete(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn delete_value(&mut self, key: &str, value: &str) {
        self.0.retain(|(k, v)| !(k == key && v == value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same pairs regardless of order.
    pub fn is_equivalent(&self, other: &SearchParams) -> bool {
        let mut ours = self.0.clone();
        let mut theirs = other.0.clone();
        ours.sort();
        theirs.sort();
        ours == theirs
    }
}

impl Display for SearchParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

impl From<&str> for SearchParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl FromStr for SearchParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned(),
    }
}

pub fn filter_param_key(dimension: &str) -> String {
    format!("{FILTER_URL_PREFIX}{dimension}")
}

/// Adds `filter` under `filter.<dimension>`.
///
/// An identical value already present is left alone. `price` is overwritten
/// since only one price range can be active; every other dimension appends.
pub fn add_filter(params: &SearchParams, filter: &ProductFilter) -> SearchParams {
    let mut params = params.clone();
    let key = filter_param_key(filter.dimension());
    let value = filter.value_json();
    if params.get_all(&key).any(|existing| encodes_filter(filter, existing)) {
        return params;
    }
    match filter {
        ProductFilter::Price(_) => params.set(key, value),
        _ => params.append(key, value),
    }
    params
}

/// [`add_filter`] for a facet value's raw `input` payload.
pub fn add_filter_input(params: &SearchParams, raw_input: &str) -> Result<SearchParams, FilterParseError> {
    let filter = ProductFilter::from_input(raw_input)?;
    Ok(add_filter(params, &filter))
}

/// Deletes every value under the filter's key that decodes to `filter`,
/// whatever its spelling in the URL (key order, whitespace, quoted numbers).
/// The key goes away with its last value.
pub fn remove_filter(params: &SearchParams, filter: &ProductFilter) -> SearchParams {
    let key = filter_param_key(filter.dimension());
    params
        .iter()
        .filter(|(k, v)| *k != key || !encodes_filter(filter, v))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn encodes_filter(filter: &ProductFilter, value_json: &str) -> bool {
    value_json == filter.value_json()
        || ProductFilter::from_param(filter.dimension(), value_json).is_ok_and(|decoded| &decoded == filter)
}

pub fn set_sort(params: &SearchParams, sort: SortParam) -> SearchParams {
    let mut params = params.clone();
    params.set(SORT_PARAM, sort.key());
    params
}

/// Commits the price range inputs. Clearing both bounds removes the filter.
pub fn apply_price_range(params: &SearchParams, min: Option<f64>, max: Option<f64>) -> SearchParams {
    let range = PriceRange::new(min, max);
    if range.is_empty() {
        let mut params = params.clone();
        params.delete(&filter_param_key("price"));
        return params;
    }
    add_filter(params, &ProductFilter::Price(range))
}

/// All filters encoded in `params`, in URL order. Entries that do not parse
/// are skipped.
pub fn decode_filters(params: &SearchParams) -> Vec<ProductFilter> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let dimension = key.strip_prefix(FILTER_URL_PREFIX)?;
            match ProductFilter::from_param(dimension, value) {
                Ok(filter) => Some(filter),
                Err(err) => {
                    tracing::debug!("skipping filter parameter {key}={value}: {err}");
                    None
                }
            }
        })
        .collect()
}

pub fn without_pagination(params: &SearchParams) -> SearchParams {
    let mut params = params.clone();
    params.delete(CURSOR_PARAM);
    params.delete(DIRECTION_PARAM);
    params
}

pub fn set_page_cursor(params: &SearchParams, page: &PageCursor) -> SearchParams {
    let mut params = params.clone();
    params.set(CURSOR_PARAM, page.cursor.clone());
    params.set(DIRECTION_PARAM, page.direction.key());
    params
}
