use chrono::Local;
use gloo::events::EventListener;
use tracing::{
  debug,
  info,
  warn
};
use verdant_core::PageConfig;
use verdant_core::fields::{
  apply_event_type,
  init_event_date,
  load_phase_options
};
use verdant_core::flash::replay_flash_messages;
use verdant_core::notify::Notifier;
use web_sys::{
  Element,
  HtmlSelectElement
};

use crate::api::HttpPhaseSource;
use crate::dom::{
  self,
  EventForm
};
use crate::toast::dom_toast_host;

/// Runs `f` once the document has been parsed.
pub fn when_ready<F>(f: F)
where
  F: FnOnce() + 'static
{
  let Some(document) = dom::document() else {
    warn!(
      "no document; page setup skipped"
    );
    return;
  };

  if document.ready_state() == "loading" {
    EventListener::once(
      &document,
      "DOMContentLoaded",
      move |_| f()
    )
    .forget();
  } else {
    f();
  }
}

#[tracing::instrument(skip_all)]
pub fn setup(config: &PageConfig) {
  replay_flash(config);
  wire_event_form(config);
}

fn replay_flash(config: &PageConfig) {
  let Some(raw) =
    dom::element_by_id::<Element>(
      &config.elements.flash_messages
    )
    .and_then(|element| {
      element.get_attribute("data-messages")
    })
  else {
    return;
  };

  let mut notifier = Notifier::new(
    dom_toast_host(config),
    config
  );
  replay_flash_messages(&mut notifier, &raw);
}

fn wire_event_form(config: &PageConfig) {
  let Some(event_type) =
    dom::element_by_id::<HtmlSelectElement>(
      &config.elements.event_type
    )
  else {
    debug!(
      "no event form on this page"
    );
    return;
  };
  let Some(mut form) =
    EventForm::locate(&config.elements)
  else {
    return;
  };

  {
    let mut form = form.clone();
    let select = event_type.clone();
    EventListener::new(
      &event_type,
      "change",
      move |_| {
        apply_event_type(
          &mut form,
          &select.value()
        );
      }
    )
    .forget();
  }

  init_event_date(
    &mut form,
    Local::now().date_naive()
  );

  let source = HttpPhaseSource::new(
    config.endpoints.growth_phases.clone()
  );
  let placeholder =
    config.locale.phase_placeholder();
  wasm_bindgen_futures::spawn_local(
    async move {
      // The selector keeps its placeholder on failure.
      if let Err(error) = load_phase_options(
        &source,
        &mut form,
        placeholder
      )
      .await
      {
        debug!(
          %error,
          "event form left without phases"
        );
      }
    }
  );

  info!("event form wired");
}
