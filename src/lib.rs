// Copyright 2015-2020 nostr-proto Developers
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according to those terms.

//! This crate fetches and normalizes nostr relay information documents (NIP-11).
//!
//! A relay address such as `wss://relay.example.com` is turned into the matching
//! HTTP(S) endpoint with [`resolve`], then [`RelayInfoFetcher`] requests the document
//! with `Accept: application/nostr+json` and parses it into a [`RelayInformation`].
//! Failures are classified into a [`FetchError`].

#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    unused_lifetimes,
    unused_labels,
    unused_extern_crates,
    non_ascii_idents,
    keyword_idents,
    deprecated_in_future,
    unstable_features,
    single_use_lifetimes,
    unsafe_code,
    unreachable_pub,
    missing_docs,
    missing_copy_implementations
)]
#![deny(clippy::string_slice)]

mod error;
pub use error::{Error, FetchError};

#[cfg(test)]
macro_rules! test_serde {
    ($t:ty, $fnname:ident) => {
        #[test]
        fn $fnname() {
            let a = <$t>::mock();
            let x = serde_json::to_string(&a).unwrap();
            println!("{}", x);
            let b = serde_json::from_str(&x).unwrap();
            assert_eq!(a, b);
        }
    };
}

mod types;
pub use types::{
    nip_links, pad_nip_id, EffectiveLimitation, Fee, MilliSatoshi, NipLink, PublicKeyHex,
    RelayFees, RelayInformation, RelayLimitation, UncheckedUrl, Url, NIP_REGISTRY_BASE,
};

mod versioned;
pub use versioned::{FeeV1, RelayFeesV1, RelayInformationV1, RelayLimitationV1};

mod client;
pub use client::{
    fetch_relay_information, resolve, FetchConfig, HttpResponse, HttpTransport, RelayInfoFetcher, ReqwestTransport,
    NOSTR_JSON_MEDIA_TYPE,
};
