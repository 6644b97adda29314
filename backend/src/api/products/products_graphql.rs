//! GraphQL documents for product listings.

pub const PRODUCT_CARD_FRAGMENT: &str = "
  fragment ProductCard on Product {
    id
    title
    publishedAt
    handle
    vendor
    variants(first: 1) {
      nodes {
        id
        availableForSale
        image {
          url
          altText
          width
          height
        }
        price {
          amount
          currencyCode
        }
        compareAtPrice {
          amount
          currencyCode
        }
      }
    }
  }
";

const PRODUCT_CONNECTION_FIELDS: &str = "
        filters {
          id
          label
          type
          values {
            id
            label
            count
            input
          }
        }
        nodes {
          ...ProductCard
        }
        pageInfo {
          hasPreviousPage
          hasNextPage
          startCursor
          endCursor
        }
";

pub fn collection_query() -> String {
    format!(
        "
  query CollectionDetails(
    $handle: String!
    $country: CountryCode
    $language: LanguageCode
    $filters: [ProductFilter!]
    $sortKey: ProductCollectionSortKeys!
    $reverse: Boolean
    $first: Int
    $last: Int
    $startCursor: String
    $endCursor: String
  ) @inContext(country: $country, language: $language) {{
    collection(handle: $handle) {{
      id
      handle
      title
      description
      products(
        first: $first,
        last: $last,
        before: $startCursor,
        after: $endCursor,
        filters: $filters,
        sortKey: $sortKey,
        reverse: $reverse
      ) {{
        {PRODUCT_CONNECTION_FIELDS}
      }}
    }}
  }}
  {PRODUCT_CARD_FRAGMENT}"
    )
}

/// The root `products` connection takes no filters and returns no facets.
pub fn all_products_query() -> String {
    format!(
        "
  query AllProducts(
    $country: CountryCode
    $language: LanguageCode
    $sortKey: ProductSortKeys
    $reverse: Boolean
    $first: Int
    $last: Int
    $startCursor: String
    $endCursor: String
  ) @inContext(country: $country, language: $language) {{
    products(
      first: $first,
      last: $last,
      before: $startCursor,
      after: $endCursor,
      sortKey: $sortKey,
      reverse: $reverse
    ) {{
      nodes {{
        ...ProductCard
      }}
      pageInfo {{
        hasPreviousPage
        hasNextPage
        startCursor
        endCursor
      }}
    }}
  }}
  {PRODUCT_CARD_FRAGMENT}"
    )
}

pub const COLLECTION_EXISTS_QUERY: &str = "
  query CollectionExists($handle: String!) {
    collection(handle: $handle) {
      id
    }
  }
";
