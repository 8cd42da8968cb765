//! Tests for the fixture driving ports.

use rstest::rstest;

use super::*;
use crate::domain::{ErrorCode, OrderId, ProductId, SizeId, UserId};

#[tokio::test]
async fn fixture_products_are_ordered_by_id() {
    let products = FixtureProductQuery.find_all().await.expect("fixture products");
    let ids: Vec<i64> = products.iter().map(|product| product.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
#[case("road", vec![1])]
#[case("mtb", vec![2, 3])]
#[case("gravel", vec![])]
#[tokio::test]
async fn fixture_type_filter_matches_exactly(
    #[case] product_type: &str,
    #[case] expected: Vec<i64>,
) {
    let products = FixtureProductQuery
        .find_all_by_type(product_type)
        .await
        .expect("fixture products");
    let ids: Vec<i64> = products.iter().map(|product| product.id.get()).collect();
    assert_eq!(ids, expected);
}

#[rstest]
#[case("Meth", 3)]
#[case("meth", 3)]
#[case("XTR", 1)]
#[case("carbon", 0)]
#[tokio::test]
async fn fixture_name_search_ignores_case(#[case] needle: &str, #[case] expected: usize) {
    let products = FixtureProductQuery
        .find_all_by_name(needle)
        .await
        .expect("fixture products");
    assert_eq!(products.len(), expected);
}

#[tokio::test]
async fn fixture_favourites_reject_unknown_user() {
    let err = FixtureProductQuery
        .find_all_favourites_by_user(UserId::new(198))
        .await
        .expect_err("unknown user");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "The user does not exist");
}

#[tokio::test]
async fn fixture_favourites_list_liked_products() {
    let products = FixtureProductQuery
        .find_all_favourites_by_user(UserId::new(1))
        .await
        .expect("favourites");
    let ids: Vec<i64> = products.iter().map(|product| product.id.get()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[rstest]
#[case(3, 2, true)]
#[case(3, 3, false)]
#[tokio::test]
async fn fixture_like_lookup(#[case] product: i64, #[case] user: i64, #[case] found: bool) {
    let result = FixtureLikeQuery
        .get_like(ProductId::new(product), UserId::new(user))
        .await;
    assert_eq!(result.is_ok(), found);
}

#[tokio::test]
async fn fixture_orders_and_sizes_resolve_seeded_rows() {
    let order = FixtureOrderQuery
        .find_by_id(OrderId::new(1))
        .await
        .expect("order 1");
    assert_eq!(order.address, "C/Muro n3");

    let size = FixtureSizeQuery
        .find_by_id(SizeId::new(2))
        .await
        .expect("size 2");
    assert_eq!(size.size, "S");

    let missing = FixtureSizeQuery
        .find_by_id(SizeId::new(9))
        .await
        .expect_err("size 9");
    assert_eq!(missing.message(), "The size does not exist");
}
