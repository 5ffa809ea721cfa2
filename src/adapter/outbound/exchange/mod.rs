//! Public REST ticker adapters for the supported spot exchanges.
//!
//! Each exchange contributes a [`TickerEndpoint`]: how to turn a symbol
//! into a request URL, and how to pull a price out of the response body.
//! The HTTP round trip is written once, in [`HttpQuoteSource`].

mod binance;
mod bitstamp;
mod coinbase;
mod endpoint;
mod http;
mod kraken;
mod kucoin;
mod price;

pub use binance::Binance;
pub use bitstamp::Bitstamp;
pub use coinbase::Coinbase;
pub use endpoint::TickerEndpoint;
pub use http::{create_http_client, HttpQuoteSource};
pub use kraken::Kraken;
pub use kucoin::Kucoin;
