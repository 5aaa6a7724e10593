use nostr_relay_info::{FetchConfig, RelayInfoFetcher};
use std::env;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut args = env::args();
    let _ = args.next(); // program name
    let address = match args.next() {
        Some(u) => u,
        None => panic!("Usage: fetch_relay_info <RelayURL>"),
    };

    let config = FetchConfig::default()
        .with_timeout(Duration::from_secs(30))
        .with_user_agent("fetch_relay_info");
    let fetcher = RelayInfoFetcher::with_config(&config).expect("Could not build HTTP client");

    let rid = match fetcher.fetch(&address).await {
        Ok(rid) => rid,
        Err(e) => {
            eprintln!("{}", e);
            if let Some(body) = e.body() {
                eprintln!("{}", body);
            }
            std::process::exit(1);
        }
    };

    println!("{}", rid);
    println!();

    if let Some(software) = rid.software_url() {
        println!("software: {}", software);
    }
    if let Some(owner) = rid.owner() {
        println!("owner: {}", owner);
    }
    for label in rid.admission_fee_labels() {
        println!("admission fee: {}", label);
    }
    if let Some(limitation) = &rid.limitation {
        println!("{:?}", limitation.effective());
    }
    for link in rid.nip_links() {
        println!("{}", link);
    }
}
