use std::time::Duration;

use reqwest::{
    blocking::{
        Client,
        Response,
    },
    header::USER_AGENT,
};

use crate::core::FlashdeckError;

const MAX_ATTEMPTS: usize = 2;

pub fn http_client() -> Result<Client, FlashdeckError> {
    Client::builder().timeout(Duration::from_secs(15)).build().map_err(|e| {
        FlashdeckError::ResourceUnavailable(format!("HTTP client build failed: {e}"))
    })
}

pub fn fetch_text(client: &Client, url: &str) -> Result<String, FlashdeckError> {
    let mut attempts: usize = 0;
    loop {
        attempts += 1;

        let resp = client.get(url).header(USER_AGENT, "flashdeck/0.1 (+reqwest)").send();

        let resp = match resp {
            Ok(r) => r,
            Err(e) => {
                if attempts < MAX_ATTEMPTS {
                    tracing::debug!("GET {} failed ({}), retrying", url, e);
                    std::thread::sleep(Duration::from_millis(500 * attempts as u64));
                    continue;
                }
                return Err(FlashdeckError::ResourceUnavailable(format!(
                    "Failed HTTP GET {}: {}",
                    url, e
                )));
            }
        };

        ensure_success(&resp)?;
        return Ok(resp.text()?);
    }
}

fn ensure_success(resp: &Response) -> Result<(), FlashdeckError> {
    if !resp.status().is_success() {
        return Err(FlashdeckError::ResourceUnavailable(format!(
            "HTTP error {} from {}",
            resp.status(),
            resp.url()
        )));
    }
    Ok(())
}
