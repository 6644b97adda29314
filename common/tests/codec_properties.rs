use common::{
    collection_query::CollectionQuery,
    product_filter::{PriceRange, ProductFilter, VariantOptionFilter},
    query_params::{SearchParams, add_filter, filter_param_key, remove_filter, set_sort},
    sort_param::SortParam,
};
use proptest::prelude::*;

fn non_price_filter() -> impl Strategy<Value = ProductFilter> {
    prop_oneof![
        "[a-z ]{1,8}".prop_map(ProductFilter::Tag),
        "[A-Za-zé&]{1,8}".prop_map(ProductFilter::ProductVendor),
        any::<bool>().prop_map(ProductFilter::Available),
        ("[A-Z][a-z]{0,5}", "[a-z0-9]{1,5}")
            .prop_map(|(name, value)| ProductFilter::VariantOption(VariantOptionFilter { name, value })),
    ]
}

fn price_filter() -> impl Strategy<Value = ProductFilter> {
    (proptest::option::of(0u32..10_000), proptest::option::of(0u32..10_000))
        .prop_filter("at least one bound", |(min, max)| min.is_some() || max.is_some())
        .prop_map(|(min, max)| ProductFilter::Price(PriceRange::new(min.map(f64::from), max.map(f64::from))))
}

fn any_filter() -> impl Strategy<Value = ProductFilter> {
    prop_oneof![non_price_filter(), price_filter()]
}

fn non_default_sort() -> impl Strategy<Value = SortParam> {
    proptest::sample::select(SortParam::ALL[1..].to_vec())
}

/// Parameters as the codec produces them: an optional sort and some non-price filters.
fn base_params() -> impl Strategy<Value = SearchParams> {
    (proptest::option::of(non_default_sort()), proptest::collection::vec(non_price_filter(), 0..6)).prop_map(
        |(sort, filters)| {
            let mut params = SearchParams::new();
            if let Some(sort) = sort {
                params = set_sort(&params, sort);
            }
            filters.iter().fold(params, |params, filter| add_filter(&params, filter))
        },
    )
}

proptest! {
    #[test]
    fn removing_an_added_filter_restores_the_params(base in base_params(), filter in any_filter()) {
        prop_assume!(!base.has_value(&filter_param_key(filter.dimension()), &filter.value_json()));
        let restored = remove_filter(&add_filter(&base, &filter), &filter);
        prop_assert!(restored.is_equivalent(&base), "{} vs {}", restored, base);
    }

    #[test]
    fn at_most_one_price_filter(base in base_params(), first in price_filter(), second in price_filter()) {
        let params = add_filter(&add_filter(&base, &first), &second);
        let prices = params.get_all("filter.price").collect::<Vec<_>>();
        prop_assert_eq!(prices, vec![second.value_json()]);
    }

    #[test]
    fn decoding_then_encoding_is_equivalent(base in base_params()) {
        let encoded = CollectionQuery::from_params(&base).to_params();
        prop_assert!(encoded.is_equivalent(&base), "{} vs {}", encoded, base);
    }

    #[test]
    fn query_strings_parse_back(base in base_params()) {
        prop_assert_eq!(SearchParams::parse(&base.to_string()), base);
    }

    #[test]
    fn unknown_sort_values_decode_to_featured(raw in "[a-z-]{0,16}") {
        prop_assume!(SortParam::from_key(&raw).is_none());
        let params = SearchParams::parse(&format!("sort={raw}"));
        prop_assert_eq!(CollectionQuery::from_params(&params).sort, SortParam::Featured);
    }
}
