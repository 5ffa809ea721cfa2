//! Exchange adapters against a local HTTP stub.

mod support;

use std::time::Duration;

use spreadcalc::adapter::outbound::exchange::{
    create_http_client, Binance, Bitstamp, Coinbase, HttpQuoteSource, Kraken, Kucoin,
};
use spreadcalc::domain::{ExchangeId, Symbol};
use spreadcalc::error::QuoteError;
use spreadcalc::port::QuoteSource;
use support::stub::{Route, StubServer};

fn http() -> reqwest::Client {
    create_http_client(Duration::from_secs(2), "spreadcalc-tests").unwrap()
}

fn btc() -> Symbol {
    Symbol::default()
}

#[tokio::test]
async fn binance_reads_string_price() {
    let stub = StubServer::start(vec![Route::ok(
        "/api/v3/ticker/price?symbol=BTCUSDT",
        r#"{"symbol":"BTCUSDT","price":"50000.50000000"}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Binance>::new(http(), stub.url());

    assert_eq!(source.exchange(), ExchangeId::Binance);
    assert_eq!(source.quote(&btc()).await.unwrap(), 50_000.5);
}

#[tokio::test]
async fn coinbase_reads_nested_amount() {
    let stub = StubServer::start(vec![Route::ok(
        "/v2/prices/ETH-USD/spot",
        r#"{"data":{"base":"ETH","currency":"USD","amount":"3001.25"}}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Coinbase>::new(http(), stub.url());

    let price = source.quote(&Symbol::new("eth").unwrap()).await.unwrap();
    assert_eq!(price, 3_001.25);
}

#[tokio::test]
async fn kraken_uses_xbt_alias_and_first_result() {
    let stub = StubServer::start(vec![Route::ok(
        "/0/public/Ticker?pair=XBTUSD",
        r#"{"error":[],"result":{"XXBTZUSD":{"a":["50010.0","1","1.000"],"c":["50005.1","0.01"]}}}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Kraken>::new(http(), stub.url());

    assert_eq!(source.quote(&btc()).await.unwrap(), 50_005.1);
}

#[tokio::test]
async fn bitstamp_accepts_numeric_last() {
    let stub = StubServer::start(vec![Route::ok(
        "/api/v2/ticker/btcusd/",
        r#"{"last":49999.9,"volume":"12.3"}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Bitstamp>::new(http(), stub.url());

    assert_eq!(source.quote(&btc()).await.unwrap(), 49_999.9);
}

#[tokio::test]
async fn kucoin_reads_level1_price() {
    let stub = StubServer::start(vec![Route::ok(
        "/api/v1/market/orderbook/level1?symbol=BTC-USDT",
        r#"{"code":"200000","data":{"sequence":"1","price":"50020.3","size":"0.1"}}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Kucoin>::new(http(), format!("{}/", stub.url()));

    assert_eq!(source.quote(&btc()).await.unwrap(), 50_020.3);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let stub = StubServer::start(vec![Route::status(
        "/api/v3/ticker/price?symbol=BTCUSDT",
        429,
        r#"{"code":-1003,"msg":"Too many requests"}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Binance>::new(http(), stub.url());

    let err = source.quote(&btc()).await.unwrap_err();
    assert!(matches!(err, QuoteError::Status { status: 429 }), "{err:?}");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let stub = StubServer::start(vec![Route::ok(
        "/v2/prices/BTC-USD/spot",
        "<html>maintenance</html>",
    )])
    .await;
    let source = HttpQuoteSource::<Coinbase>::new(http(), stub.url());

    let err = source.quote(&btc()).await.unwrap_err();
    assert!(matches!(err, QuoteError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unknown_pair_has_no_price() {
    let stub = StubServer::start(vec![Route::ok(
        "/api/v1/market/orderbook/level1?symbol=NOPE-USDT",
        r#"{"code":"200000","data":null}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Kucoin>::new(http(), stub.url());

    let err = source.quote(&Symbol::new("nope").unwrap()).await.unwrap_err();
    assert!(matches!(err, QuoteError::NoPrice), "{err:?}");
}

#[tokio::test]
async fn kraken_error_payload_has_no_price() {
    let stub = StubServer::start(vec![Route::ok(
        "/0/public/Ticker?pair=FOOUSD",
        r#"{"error":["EQuery:Unknown asset pair"]}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Kraken>::new(http(), stub.url());

    let err = source.quote(&Symbol::new("foo").unwrap()).await.unwrap_err();
    assert!(matches!(err, QuoteError::NoPrice), "{err:?}");
}

#[tokio::test]
async fn empty_price_string_has_no_price() {
    let stub = StubServer::start(vec![Route::ok(
        "/api/v2/ticker/btcusd/",
        r#"{"last":""}"#,
    )])
    .await;
    let source = HttpQuoteSource::<Bitstamp>::new(http(), stub.url());

    let err = source.quote(&btc()).await.unwrap_err();
    assert!(matches!(err, QuoteError::NoPrice), "{err:?}");
}
