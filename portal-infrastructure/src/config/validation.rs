use anyhow::{anyhow, Result};

pub const MAX_PAGE_SIZE: u32 = 200;

pub fn validate_base_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("api_base_url must not be empty"));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!("api_base_url must start with http:// or https://"));
    }
    Ok(())
}

pub fn validate_page_size(name: &str, value: u32) -> Result<()> {
    if value == 0 || value > MAX_PAGE_SIZE {
        return Err(anyhow!(
            "{} must be between 1 and {}, got {}",
            name,
            MAX_PAGE_SIZE,
            value
        ));
    }
    Ok(())
}
