pub async fn fetch_archive(url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    println!("Downloading {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("Failed to download {}: {}", url, e))?
        .error_for_status()?;

    let content = response.bytes().await?;
    Ok(content.to_vec())
}
