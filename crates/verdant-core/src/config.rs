use serde::Deserialize;
use tracing::{
  debug,
  info,
  warn
};

use crate::error::ConfigError;
use crate::locale::Locale;

pub const DEFAULT_TOAST_DELAY_MS: u32 =
  3_000;

/// Everything a page can tune: element ids the glue looks up, backend
/// paths, toast timing and the string table.
///
/// A page overrides defaults by embedding a TOML block, e.g.
///
/// ```toml
/// locale = "ru"
///
/// [elements]
/// toast_container = "notifications"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
  pub locale:         Locale,
  pub toast_delay_ms: u32,
  pub elements:       ElementIds,
  pub endpoints:      Endpoints
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
  pub toast_container:      String,
  pub event_type:           String,
  pub phase_field:          String,
  pub fertilization_fields: String,
  pub phase_select:         String,
  pub note_photo_field:     String,
  pub event_date:           String,
  pub flash_messages:       String
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
  pub growth_phases:   String,
  pub delete_plant:    String,
  pub delete_location: String
}

impl Default for PageConfig {
  fn default() -> Self {
    Self {
      locale:         Locale::default(),
      toast_delay_ms:
        DEFAULT_TOAST_DELAY_MS,
      elements:       ElementIds::default(),
      endpoints:      Endpoints::default()
    }
  }
}

impl Default for ElementIds {
  fn default() -> Self {
    Self {
      toast_container:      "toast-container"
        .to_string(),
      event_type:           "event_type"
        .to_string(),
      phase_field:          "phase_field"
        .to_string(),
      fertilization_fields:
        "fertilization_fields".to_string(),
      phase_select:         "phase_id"
        .to_string(),
      note_photo_field:
        "note_photo_field".to_string(),
      event_date:           "event_date"
        .to_string(),
      flash_messages:       "flash-messages"
        .to_string()
    }
  }
}

impl Default for Endpoints {
  fn default() -> Self {
    Self {
      growth_phases:   "/api/growth_phases"
        .to_string(),
      delete_plant:    "/delete_plant/"
        .to_string(),
      delete_location: "/delete_location/"
        .to_string()
    }
  }
}

impl PageConfig {
  pub fn from_toml_str(
    text: &str
  ) -> Result<Self, ConfigError> {
    Ok(toml::from_str(text)?)
  }

  /// Resolves the config from an optional embedded TOML block. Invalid
  /// TOML is logged and the defaults are used instead.
  #[tracing::instrument(skip(embedded))]
  pub fn load(
    embedded: Option<&str>
  ) -> Self {
    let Some(text) = embedded
      .map(str::trim)
      .filter(|text| !text.is_empty())
    else {
      debug!(
        "no embedded page config; using \
         defaults"
      );
      return Self::default();
    };

    match Self::from_toml_str(text) {
      | Ok(cfg) => {
        info!(
          locale = ?cfg.locale,
          toast_delay_ms = cfg.toast_delay_ms,
          "loaded embedded page config"
        );
        cfg
      }
      | Err(error) => {
        warn!(
          %error,
          "ignoring embedded page config"
        );
        Self::default()
      }
    }
  }
}

impl Endpoints {
  pub fn delete_plant_url(
    &self,
    id: u64
  ) -> String {
    join_id(&self.delete_plant, id)
  }

  pub fn delete_location_url(
    &self,
    id: u64
  ) -> String {
    join_id(&self.delete_location, id)
  }
}

fn join_id(prefix: &str, id: u64) -> String {
  format!(
    "{}/{id}",
    prefix.trim_end_matches('/')
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_page_templates() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.toast_delay_ms, 3_000);
    assert_eq!(cfg.locale, Locale::En);
    assert_eq!(
      cfg.elements.phase_select,
      "phase_id"
    );
    assert_eq!(
      cfg.endpoints.growth_phases,
      "/api/growth_phases"
    );
  }

  #[test]
  fn partial_toml_keeps_other_defaults() {
    let cfg = PageConfig::from_toml_str(
      r#"
        locale = "ru"

        [elements]
        toast_container = "notifications"
      "#
    )
    .expect("parse config");

    assert_eq!(cfg.locale, Locale::Ru);
    assert_eq!(
      cfg.elements.toast_container,
      "notifications"
    );
    assert_eq!(
      cfg.elements.event_date,
      "event_date"
    );
    assert_eq!(cfg.toast_delay_ms, 3_000);
    assert_eq!(
      cfg.endpoints,
      Endpoints::default()
    );
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let err = PageConfig::from_toml_str(
      "toast_delay = 5000"
    )
    .expect_err("typo must not parse");
    assert!(
      err
        .to_string()
        .contains("invalid page config")
    );
  }

  #[test]
  fn load_falls_back_on_bad_toml() {
    let cfg = PageConfig::load(Some(
      "locale = [unterminated"
    ));
    assert_eq!(cfg, PageConfig::default());
  }

  #[test]
  fn load_treats_blank_block_as_absent() {
    assert_eq!(
      PageConfig::load(Some("  \n ")),
      PageConfig::default()
    );
    assert_eq!(
      PageConfig::load(None),
      PageConfig::default()
    );
  }

  #[test]
  fn delete_urls_join_prefix_and_id() {
    let mut endpoints = Endpoints::default();
    assert_eq!(
      endpoints.delete_plant_url(42),
      "/delete_plant/42"
    );
    assert_eq!(
      endpoints.delete_location_url(7),
      "/delete_location/7"
    );

    endpoints.delete_plant =
      "/admin/delete_plant".to_string();
    assert_eq!(
      endpoints.delete_plant_url(42),
      "/admin/delete_plant/42"
    );
  }
}
