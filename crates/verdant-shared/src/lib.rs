use serde::{
  Deserialize,
  Serialize
};

/// Notification category as the server names it in flashed messages
/// and as templates pass it to `showToast`.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  #[default]
  Info,
  Success,
  Error,
  Warning
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::Info,
    Category::Success,
    Category::Error,
    Category::Warning
  ];

  /// Maps a free-form category name, falling back to `Info` for
  /// anything unrecognized.
  pub fn from_name(name: &str) -> Self {
    match name {
      | "success" => Category::Success,
      | "error" => Category::Error,
      | "warning" => Category::Warning,
      | _ => Category::Info
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      | Category::Info => "info",
      | Category::Success => "success",
      | Category::Error => "error",
      | Category::Warning => "warning"
    }
  }
}

/// One row of `GET /api/growth_phases`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct GrowthPhaseDto {
  pub id:          u64,
  pub name:        String,
  #[serde(default)]
  pub description: Option<String>
}

/// A flashed server message embedded into the page by the template.
///
/// The category stays a plain string: Flask lets handlers flash with any
/// category and the page must still render those.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct FlashMessage {
  #[serde(default = "default_flash_category")]
  pub category: String,
  pub message:  String
}

impl FlashMessage {
  pub fn category(&self) -> Category {
    Category::from_name(&self.category)
  }
}

fn default_flash_category() -> String {
  Category::Info.as_str().to_string()
}
