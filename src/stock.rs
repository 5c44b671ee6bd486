//! Random stock backgrounds from a prompt-based image generator

use rand::seq::IndexedRandom;
use rand::Rng;
use reqwest::blocking::Client;

use crate::fields::ImageRef;
use crate::images::{sniff_mime, to_data_uri};
use crate::{Error, Result, StudioConfig};

/// Prompts safe to show behind scripture and greeting cards.
pub const PROMPTS: [&str; 8] = [
    "beautiful mosque interior cinematic lighting 4k",
    "serene nature landscape mountains sunset 4k",
    "islamic geometric pattern gold and black 4k",
    "open holy quran book on wooden stand soft lighting 4k",
    "macro flower photography soft bokeh 4k",
    "soft clouds blue sky cinematic 4k",
    "abstract islamic art background 4k",
    "minimalist desert landscape sunset 4k",
];

pub struct StockImageClient {
    client: Client,
    base_url: String,
}

impl StockImageClient {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        Ok(Self {
            client: crate::http::client(config)?,
            base_url: config.stock_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Image URL for `prompt` and `seed`.
    pub fn url_for(&self, prompt: &str, seed: u32) -> Result<String> {
        let mut url = url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("bad stock image url {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("stock image url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push("prompt")
            .push(prompt);
        url.query_pairs_mut()
            .append_pair("width", "1080")
            .append_pair("height", "1080")
            .append_pair("nologo", "true")
            .append_pair("seed", &seed.to_string());
        Ok(url.into())
    }

    /// Fetch one image for a random prompt and seed, as a data URI.
    pub fn fetch_random(&self) -> Result<ImageRef> {
        let mut rng = rand::rng();
        let prompt = PROMPTS.choose(&mut rng).copied().unwrap_or(PROMPTS[0]);
        let seed = rng.random_range(0..10000);
        self.fetch(prompt, seed)
    }

    pub fn fetch(&self, prompt: &str, seed: u32) -> Result<ImageRef> {
        let url = self.url_for(prompt, seed)?;
        log::info!("fetching stock image '{}' (seed {})", prompt, seed);
        let (bytes, declared) = crate::http::fetch_bytes(&self.client, &url)?;
        if bytes.is_empty() {
            return Err(Error::Remote("empty stock image".into()));
        }
        let mime = sniff_mime(&bytes)
            .map(str::to_string)
            .or(declared)
            .unwrap_or_else(|| "image/jpeg".to_string());
        Ok(to_data_uri(&bytes, &mime))
    }
}
