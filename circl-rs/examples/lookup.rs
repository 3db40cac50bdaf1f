use circl_rs::Circl;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let circl = Circl::init(None);

    let ip = std::env::args().nth(1).unwrap_or_else(|| "8.8.8.8".to_string());

    match circl.geolookup(&ip).await {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body).unwrap()),
        Err(e) => eprintln!("lookup for {} failed: {}", ip, e),
    }
}
