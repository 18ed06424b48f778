//! Browser entry points for the plant tracker pages.
//!
//! Templates load this module and call the exported functions from
//! inline handlers, e.g. `onclick="confirmDeletePlant(12)"`.

mod api;
mod dom;
mod page;
pub mod toast;

use std::cell::OnceCell;

use verdant_core::PageConfig;
use verdant_core::delete::{
  EntityKind,
  confirm_delete,
  entity_id
};
use verdant_core::notify::Notifier;
use wasm_bindgen::prelude::wasm_bindgen;

thread_local! {
  static CONFIG: OnceCell<PageConfig> =
    const { OnceCell::new() };
}

fn page_config() -> PageConfig {
  CONFIG.with(|cell| {
    cell
      .get_or_init(|| {
        PageConfig::load(
          dom::embedded_config().as_deref()
        )
      })
      .clone()
  })
}

#[wasm_bindgen(start)]
pub fn start() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting verdant page glue"
  );

  page::when_ready(|| {
    page::setup(&page_config());
  });
}

/// Shows a toast; `category` is one of info, success, error, warning.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(
  message: &str,
  category: Option<String>
) {
  let config = page_config();
  let mut notifier = Notifier::new(
    toast::dom_toast_host(&config),
    &config
  );
  notifier.notify_named(
    message,
    category.as_deref()
  );
}

#[wasm_bindgen(js_name = confirmDeletePlant)]
pub fn confirm_delete_plant(plant_id: f64) {
  request_delete(
    EntityKind::Plant,
    plant_id
  );
}

#[wasm_bindgen(js_name = confirmDeleteLocation)]
pub fn confirm_delete_location(
  location_id: f64
) {
  request_delete(
    EntityKind::Location,
    location_id
  );
}

fn request_delete(
  kind: EntityKind,
  raw_id: f64
) {
  let Some(id) = entity_id(raw_id) else {
    tracing::warn!(
      kind = kind.as_str(),
      raw_id,
      "refusing delete with invalid id"
    );
    return;
  };

  confirm_delete(
    &page_config(),
    &dom::BrowserDialog,
    &dom::FormPost,
    kind,
    id
  );
}
