//! libcurl-backed fetcher.
//!
//! One `Easy` handle is reused for every request, so libcurl keeps
//! connections alive between requests to the same host. The handle is
//! released when the fetcher is dropped. No transfer timeout is set: a hung
//! server blocks the run.

use curl::easy::{Easy, List};

use super::{FetchError, FetchResponse, Fetcher};
use crate::config::ReqtimerConfig;

pub struct CurlFetcher {
    easy: Easy,
}

impl CurlFetcher {
    /// Builds a GET handle from the redirect, user agent and header settings
    /// in `cfg`.
    pub fn new(cfg: &ReqtimerConfig) -> Result<Self, curl::Error> {
        let mut easy = Easy::new();
        easy.get(true)?;
        easy.follow_location(cfg.follow_redirects)?;
        easy.max_redirections(cfg.max_redirections)?;
        easy.useragent(&cfg.user_agent())?;

        if !cfg.headers.is_empty() {
            let mut list = List::new();
            for (k, v) in &cfg.headers {
                list.append(&format!("{}: {}", k.trim(), v.trim()))?;
            }
            easy.http_headers(list)?;
        }

        Ok(Self { easy })
    }
}

impl Fetcher for CurlFetcher {
    fn get(&mut self, url: &str) -> Result<FetchResponse, FetchError> {
        let curl_err = |e| FetchError::from_curl(url, e);

        self.easy.url(url).map_err(curl_err)?;

        let mut body_bytes = 0u64;
        {
            let mut transfer = self.easy.transfer();
            transfer
                .write_function(|data| {
                    body_bytes += data.len() as u64;
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let status = self.easy.response_code().map_err(curl_err)?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(FetchResponse { status, body_bytes })
    }
}
