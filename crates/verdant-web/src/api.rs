use gloo::net::http::Request;
use verdant_core::FetchError;
use verdant_core::fields::PhaseSource;
use verdant_shared::GrowthPhaseDto;

/// Reads growth phases from the backend JSON endpoint.
pub struct HttpPhaseSource {
  url: String
}

impl HttpPhaseSource {
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }
}

impl PhaseSource for HttpPhaseSource {
  async fn fetch_phases(
    &self
  ) -> Result<Vec<GrowthPhaseDto>, FetchError>
  {
    let response = Request::get(&self.url)
      .send()
      .await
      .map_err(|e| FetchError::Request {
        url:    self.url.clone(),
        reason: e.to_string()
      })?;

    if !response.ok() {
      return Err(FetchError::Status {
        url:    self.url.clone(),
        status: response.status()
      });
    }

    response
      .json::<Vec<GrowthPhaseDto>>()
      .await
      .map_err(|e| FetchError::Decode {
        url:    self.url.clone(),
        reason: e.to_string()
      })
  }
}
