use chrono::NaiveDate;
use tracing::{
  debug,
  error,
  info
};
use verdant_shared::GrowthPhaseDto;

use crate::error::FetchError;

/// What the `event_type` selector currently asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
  Empty,
  GrowthPhase,
  Fertilization,
  Other(String)
}

impl EventKind {
  pub fn from_value(value: &str) -> Self {
    match value {
      | "" => EventKind::Empty,
      | "growth_phase" => {
        EventKind::GrowthPhase
      }
      | "fertilization" => {
        EventKind::Fertilization
      }
      | other => {
        EventKind::Other(other.to_string())
      }
    }
  }
}

/// Form sections that are toggled by the event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
  Phase,
  Fertilization,
  Photo
}

impl FieldGroup {
  pub const ALL: [FieldGroup; 3] = [
    FieldGroup::Phase,
    FieldGroup::Fertilization,
    FieldGroup::Photo
  ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
  pub phase:         bool,
  pub fertilization: bool,
  pub photo:         bool
}

impl Visibility {
  pub fn shows(
    &self,
    group: FieldGroup
  ) -> bool {
    match group {
      | FieldGroup::Phase => self.phase,
      | FieldGroup::Fertilization => {
        self.fertilization
      }
      | FieldGroup::Photo => self.photo
    }
  }
}

/// Which groups are visible for a selector value. Depends on nothing
/// but the value.
///
/// The photo field follows any non-empty selection, including values
/// that map to neither group.
pub fn visibility_for(
  value: &str
) -> Visibility {
  let kind = EventKind::from_value(value);
  Visibility {
    phase:         kind
      == EventKind::GrowthPhase,
    fertilization: kind
      == EventKind::Fertilization,
    photo:         kind != EventKind::Empty
  }
}

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
  pub value: String,
  pub label: String,
  pub title: Option<String>
}

impl SelectOption {
  pub fn placeholder(label: &str) -> Self {
    Self {
      value: String::new(),
      label: label.to_string(),
      title: None
    }
  }
}

impl From<&GrowthPhaseDto> for SelectOption {
  fn from(phase: &GrowthPhaseDto) -> Self {
    Self {
      value: phase.id.to_string(),
      label: phase.name.clone(),
      title: phase
        .description
        .clone()
        .filter(|text| {
          !text.trim().is_empty()
        })
    }
  }
}

/// The parts of the event form the controller writes to.
pub trait FieldView {
  fn set_visible(
    &mut self,
    group: FieldGroup,
    visible: bool
  );

  /// Replaces every option of the phase selector.
  fn set_phase_options(
    &mut self,
    options: &[SelectOption]
  );

  fn set_event_date(&mut self, iso: &str);
}

/// Backend that lists growth phases.
#[allow(async_fn_in_trait)]
pub trait PhaseSource {
  async fn fetch_phases(
    &self
  ) -> Result<Vec<GrowthPhaseDto>, FetchError>;
}

/// Hides every conditional group, then shows the ones the value selects.
pub fn apply_event_type<V: FieldView>(
  view: &mut V,
  value: &str
) {
  for group in FieldGroup::ALL {
    view.set_visible(group, false);
  }

  let visibility = visibility_for(value);
  debug!(
    value,
    ?visibility,
    "event type changed"
  );
  for group in FieldGroup::ALL {
    if visibility.shows(group) {
      view.set_visible(group, true);
    }
  }
}

/// Placeholder followed by the phases in server order.
pub fn phase_options(
  placeholder: &str,
  phases: &[GrowthPhaseDto]
) -> Vec<SelectOption> {
  std::iter::once(
    SelectOption::placeholder(placeholder)
  )
  .chain(phases.iter().map(SelectOption::from))
  .collect()
}

/// Fetches the phase list and fills the selector.
///
/// On failure the selector is left with only the placeholder; the error
/// is logged and handed back for callers that want to observe it.
#[tracing::instrument(skip_all)]
pub async fn load_phase_options<S, V>(
  source: &S,
  view: &mut V,
  placeholder: &str
) -> Result<usize, FetchError>
where
  S: PhaseSource,
  V: FieldView
{
  match source.fetch_phases().await {
    | Ok(phases) => {
      view.set_phase_options(
        &phase_options(
          placeholder,
          &phases
        )
      );
      info!(
        total = phases.len(),
        "loaded growth phases"
      );
      Ok(phases.len())
    }
    | Err(err) => {
      view.set_phase_options(&[
        SelectOption::placeholder(
          placeholder
        )
      ]);
      error!(
        error = %err,
        "error loading growth phases"
      );
      Err(err)
    }
  }
}

pub fn iso_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

/// Presets the event date to `today`.
pub fn init_event_date<V: FieldView>(
  view: &mut V,
  today: NaiveDate
) {
  view.set_event_date(&iso_date(today));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn growth_phase_shows_phase_and_photo() {
    assert_eq!(
      visibility_for("growth_phase"),
      Visibility {
        phase:         true,
        fertilization: false,
        photo:         true
      }
    );
  }

  #[test]
  fn fertilization_shows_its_group_and_photo()
  {
    assert_eq!(
      visibility_for("fertilization"),
      Visibility {
        phase:         false,
        fertilization: true,
        photo:         true
      }
    );
  }

  #[test]
  fn empty_value_hides_everything() {
    assert_eq!(
      visibility_for(""),
      Visibility::default()
    );
  }

  #[test]
  fn other_values_only_show_photo() {
    for value in
      ["watering", "repotting", "note"]
    {
      assert_eq!(
        visibility_for(value),
        Visibility {
          phase:         false,
          fertilization: false,
          photo:         true
        },
        "value {value}"
      );
    }
  }

  #[test]
  fn phase_option_drops_blank_description()
  {
    let option =
      SelectOption::from(&GrowthPhaseDto {
        id:          9,
        name:        "Rooting".to_string(),
        description: Some(
          "   ".to_string()
        )
      });
    assert_eq!(option.value, "9");
    assert_eq!(option.label, "Rooting");
    assert_eq!(option.title, None);
  }

  #[test]
  fn iso_date_has_no_time_component() {
    let date =
      NaiveDate::from_ymd_opt(2026, 3, 5)
        .expect("valid date");
    assert_eq!(iso_date(date), "2026-03-05");
  }
}
