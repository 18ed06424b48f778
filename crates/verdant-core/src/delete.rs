use tracing::{
  debug,
  info
};

use crate::config::PageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
  Plant,
  Location
}

impl EntityKind {
  pub fn as_str(self) -> &'static str {
    match self {
      | EntityKind::Plant => "plant",
      | EntityKind::Location => "location"
    }
  }
}

/// Largest integer a JS number carries exactly.
const MAX_SAFE_ID: f64 = 9_007_199_254_740_991.0;

/// Accepts a JS number as an entity id only when it is a non-negative
/// integer within the exactly-representable range.
pub fn entity_id(raw: f64) -> Option<u64> {
  let valid = raw.is_finite()
    && raw >= 0.0
    && raw.fract() == 0.0
    && raw <= MAX_SAFE_ID;
  valid.then_some(raw as u64)
}

/// Blocking yes/no prompt.
pub trait ConfirmDialog {
  /// `false` when the user declines or no prompt could be shown.
  fn confirm(&self, message: &str) -> bool;
}

/// Performs a full-page POST navigation.
pub trait FormNavigator {
  fn submit_post(&self, action: &str);
}

/// The POST target for deleting `id`.
pub fn delete_action(
  config: &PageConfig,
  kind: EntityKind,
  id: u64
) -> String {
  match kind {
    | EntityKind::Plant => {
      config.endpoints.delete_plant_url(id)
    }
    | EntityKind::Location => {
      config
        .endpoints
        .delete_location_url(id)
    }
  }
}

pub fn delete_prompt(
  config: &PageConfig,
  kind: EntityKind
) -> &'static str {
  match kind {
    | EntityKind::Plant => {
      config.locale.confirm_delete_plant()
    }
    | EntityKind::Location => {
      config
        .locale
        .confirm_delete_location()
    }
  }
}

/// Asks before deleting and navigates to the delete endpoint on yes.
///
/// Returns whether the navigation was issued.
#[tracing::instrument(skip(
  config, dialog, navigator
))]
pub fn confirm_delete<D, N>(
  config: &PageConfig,
  dialog: &D,
  navigator: &N,
  kind: EntityKind,
  id: u64
) -> bool
where
  D: ConfirmDialog,
  N: FormNavigator
{
  if !dialog
    .confirm(delete_prompt(config, kind))
  {
    debug!(
      kind = kind.as_str(),
      id,
      "deletion declined"
    );
    return false;
  }

  let action =
    delete_action(config, kind, id);
  info!(
    kind = kind.as_str(),
    id,
    %action,
    "submitting deletion"
  );
  navigator.submit_post(&action);
  true
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::*;
  use crate::locale::Locale;

  struct Scripted {
    answer: bool,
    asked:  RefCell<Vec<String>>
  }

  impl Scripted {
    fn answering(answer: bool) -> Self {
      Self {
        answer,
        asked: RefCell::new(vec![])
      }
    }
  }

  impl ConfirmDialog for Scripted {
    fn confirm(&self, message: &str) -> bool {
      self
        .asked
        .borrow_mut()
        .push(message.to_string());
      self.answer
    }
  }

  #[derive(Default)]
  struct Recorder {
    posts: RefCell<Vec<String>>
  }

  impl FormNavigator for Recorder {
    fn submit_post(&self, action: &str) {
      self
        .posts
        .borrow_mut()
        .push(action.to_string());
    }
  }

  #[test]
  fn declined_plant_delete_does_nothing() {
    let dialog = Scripted::answering(false);
    let nav = Recorder::default();

    let sent = confirm_delete(
      &PageConfig::default(),
      &dialog,
      &nav,
      EntityKind::Plant,
      42
    );

    assert!(!sent);
    assert!(nav.posts.borrow().is_empty());
    assert_eq!(dialog.asked.borrow().len(), 1);
  }

  #[test]
  fn confirmed_plant_delete_posts_to_plant_endpoint()
  {
    let dialog = Scripted::answering(true);
    let nav = Recorder::default();

    assert!(confirm_delete(
      &PageConfig::default(),
      &dialog,
      &nav,
      EntityKind::Plant,
      42
    ));
    assert_eq!(
      *nav.posts.borrow(),
      vec!["/delete_plant/42".to_string()]
    );
    assert!(
      dialog.asked.borrow()[0]
        .contains("data will be lost")
    );
  }

  #[test]
  fn location_prompt_mentions_reassignment()
  {
    let dialog = Scripted::answering(true);
    let nav = Recorder::default();

    confirm_delete(
      &PageConfig::default(),
      &dialog,
      &nav,
      EntityKind::Location,
      3
    );

    assert!(
      dialog.asked.borrow()[0]
        .contains("No location")
    );
    assert_eq!(
      *nav.posts.borrow(),
      vec!["/delete_location/3".to_string()]
    );
  }

  #[test]
  fn entity_id_accepts_whole_numbers() {
    assert_eq!(entity_id(0.0), Some(0));
    assert_eq!(entity_id(42.0), Some(42));
    assert_eq!(
      entity_id(9_007_199_254_740_991.0),
      Some(9_007_199_254_740_991)
    );
  }

  #[test]
  fn entity_id_rejects_values_that_would_wrap()
  {
    for raw in [
      -1.0,
      -0.5,
      4.2,
      4_294_967_296.5,
      9_007_199_254_740_992.0,
      f64::NAN,
      f64::INFINITY
    ] {
      assert_eq!(
        entity_id(raw),
        None,
        "raw {raw}"
      );
    }
  }

  #[test]
  fn ids_above_u32_keep_their_value() {
    let endpoints =
      PageConfig::default().endpoints;
    let id = entity_id(4_294_967_297.0)
      .expect("valid id");
    assert_eq!(
      endpoints.delete_plant_url(id),
      "/delete_plant/4294967297"
    );
  }

  #[test]
  fn russian_prompts_follow_locale() {
    let cfg = PageConfig {
      locale: Locale::Ru,
      ..PageConfig::default()
    };
    assert!(
      delete_prompt(&cfg, EntityKind::Location)
        .contains("Без локации")
    );
    assert!(
      delete_prompt(&cfg, EntityKind::Plant)
        .contains("растение")
    );
  }
}
