use cbepm::installer;

#[tokio::main]
async fn main() {
    if let Err(e) = installer::install_libraries().await {
        eprintln!("Install failed: {}", e);
        std::process::exit(1);
    }
}
