use tracing::{
  error,
  warn
};
use verdant_core::config::ElementIds;
use verdant_core::delete::{
  ConfirmDialog,
  FormNavigator
};
use verdant_core::fields::{
  FieldGroup,
  FieldView,
  SelectOption
};
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Document,
  HtmlElement,
  HtmlFormElement,
  HtmlInputElement,
  HtmlOptionElement,
  HtmlSelectElement
};

/// Id of the optional `<script type="application/toml">` block holding
/// page config overrides.
pub const CONFIG_ELEMENT_ID: &str =
  "verdant-config";

pub fn document() -> Option<Document> {
  web_sys::window()
    .and_then(|window| window.document())
}

pub fn element_by_id<T: JsCast>(
  id: &str
) -> Option<T> {
  document()
    .and_then(|document| {
      document.get_element_by_id(id)
    })
    .and_then(|element| {
      element.dyn_into::<T>().ok()
    })
}

pub fn embedded_config() -> Option<String> {
  element_by_id::<web_sys::Element>(
    CONFIG_ELEMENT_ID
  )
  .and_then(|element| element.text_content())
}

/// The event form on the plant detail page.
#[derive(Clone)]
pub struct EventForm {
  phase_field:          HtmlElement,
  fertilization_fields: HtmlElement,
  note_photo_field:     HtmlElement,
  phase_select:         HtmlSelectElement,
  event_date:           HtmlInputElement
}

impl EventForm {
  /// `None` when any of the form's elements is missing from the page.
  pub fn locate(
    ids: &ElementIds
  ) -> Option<Self> {
    Some(Self {
      phase_field:          required(
        &ids.phase_field
      )?,
      fertilization_fields: required(
        &ids.fertilization_fields
      )?,
      note_photo_field:     required(
        &ids.note_photo_field
      )?,
      phase_select:         required(
        &ids.phase_select
      )?,
      event_date:           required(
        &ids.event_date
      )?
    })
  }

  fn group(
    &self,
    group: FieldGroup
  ) -> &HtmlElement {
    match group {
      | FieldGroup::Phase => &self.phase_field,
      | FieldGroup::Fertilization => {
        &self.fertilization_fields
      }
      | FieldGroup::Photo => {
        &self.note_photo_field
      }
    }
  }
}

fn required<T: JsCast>(
  id: &str
) -> Option<T> {
  let found = element_by_id::<T>(id);
  if found.is_none() {
    warn!(
      %id,
      "event form element missing"
    );
  }
  found
}

impl FieldView for EventForm {
  fn set_visible(
    &mut self,
    group: FieldGroup,
    visible: bool
  ) {
    let display =
      if visible { "block" } else { "none" };
    if let Err(err) = self
      .group(group)
      .style()
      .set_property("display", display)
    {
      error!(
        ?group,
        error = ?err,
        "failed toggling field group"
      );
    }
  }

  fn set_phase_options(
    &mut self,
    options: &[SelectOption]
  ) {
    self.phase_select.set_inner_html("");
    for option in options {
      if let Err(err) =
        append_option(&self.phase_select, option)
      {
        error!(
          value = %option.value,
          error = ?err,
          "failed adding phase option"
        );
      }
    }
  }

  fn set_event_date(&mut self, iso: &str) {
    self.event_date.set_value(iso);
  }
}

fn append_option(
  select: &HtmlSelectElement,
  option: &SelectOption
) -> Result<(), JsValue> {
  let element =
    HtmlOptionElement::new_with_text_and_value(
      &option.label,
      &option.value
    )?;
  if let Some(title) = &option.title {
    element.set_title(title);
  }
  select.append_child(&element)?;
  Ok(())
}

/// `window.confirm`.
pub struct BrowserDialog;

impl ConfirmDialog for BrowserDialog {
  fn confirm(&self, message: &str) -> bool {
    let Some(window) = web_sys::window()
    else {
      return false;
    };
    window
      .confirm_with_message(message)
      .unwrap_or_else(|err| {
        error!(
          error = ?err,
          "confirm dialog unavailable"
        );
        false
      })
  }
}

/// Submits a throwaway `<form method="POST">` so the browser navigates
/// to the response.
pub struct FormPost;

impl FormNavigator for FormPost {
  fn submit_post(&self, action: &str) {
    if let Err(err) = submit_form(action) {
      error!(
        %action,
        error = ?err,
        "failed submitting form"
      );
    }
  }
}

fn submit_form(
  action: &str
) -> Result<(), JsValue> {
  let document = document().ok_or_else(
    || JsValue::from_str("no document")
  )?;
  let body = document.body().ok_or_else(
    || JsValue::from_str("no body")
  )?;

  let form: HtmlFormElement = document
    .create_element("form")?
    .dyn_into()
    .map_err(JsValue::from)?;
  form.set_method("POST");
  form.set_action(action);

  body.append_child(&form)?;
  form.submit()
}
