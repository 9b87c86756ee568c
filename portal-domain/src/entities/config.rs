// Runtime configuration handed to the application layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub admin_page_size: u32,
    pub events_page_size: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_seconds: 15,
            admin_page_size: 20,
            events_page_size: 50,
        }
    }
}
