use quartermaster_test_utils::prelude::*;

use crate::data::market::MarketPriceRepository;

/// Expect quotes scoped to the requested region and type ids
#[tokio::test]
async fn gets_quotes_for_one_region() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::MarketPrice)?;
    let db = &test.state.db;

    factory::insert_market_price(db, 34, 10000002, Some(4.0), Some(5.0)).await?;
    factory::insert_market_price(db, 34, 10000043, Some(9.0), Some(9.5)).await?;
    factory::insert_market_price(db, 35, 10000002, Some(8.0), None).await?;

    let repo = MarketPriceRepository::new(db);
    let mut quotes = repo.get_quotes_by_region(10000002, &[34, 35]).await?;
    quotes.sort_by_key(|(type_id, _)| *type_id);

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].1.buy_price, Some(4.0));
    assert_eq!(quotes[0].1.sell_price, Some(5.0));
    assert_eq!(quotes[1].1.sell_price, None);

    Ok(())
}

/// Expect upsert to insert new rows and overwrite existing quotes in place
#[tokio::test]
async fn upsert_overwrites_existing_quotes() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::MarketPrice)?;
    test.with_indexes(vec![market_price_type_region_index()])
        .await?;
    let db = &test.state.db;

    let repo = MarketPriceRepository::new(db);
    repo.upsert_many(10000002, vec![(34, Some(4.0), Some(5.0), Some(1000))])
        .await?;
    repo.upsert_many(
        10000002,
        vec![
            (34, Some(4.5), Some(5.5), Some(1100)),
            (35, Some(8.0), None, None),
        ],
    )
    .await?;

    let mut quotes = repo.get_quotes_by_region(10000002, &[34, 35]).await?;
    quotes.sort_by_key(|(type_id, _)| *type_id);

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].1.buy_price, Some(4.5));
    assert_eq!(quotes[1].1.buy_price, Some(8.0));

    Ok(())
}

/// Expect an empty upsert batch to be a no-op
#[tokio::test]
async fn empty_upsert_is_noop() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::MarketPrice)?;
    let db = &test.state.db;

    let repo = MarketPriceRepository::new(db);
    repo.upsert_many(10000002, Vec::new()).await?;

    let quotes = repo.get_quotes_by_region(10000002, &[34]).await?;
    assert!(quotes.is_empty());

    Ok(())
}
