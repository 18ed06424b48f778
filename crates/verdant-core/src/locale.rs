use serde::Deserialize;
use verdant_shared::Category;

/// Language of the user-facing strings.
#[derive(
  Debug,
  Clone,
  Copy,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Ru
}

impl Locale {
  pub fn toast_title(
    self,
    category: Category
  ) -> &'static str {
    match (self, category) {
      | (Locale::En, Category::Info) => {
        "Information"
      }
      | (Locale::En, Category::Success) => {
        "Success"
      }
      | (Locale::En, Category::Error) => {
        "Error"
      }
      | (Locale::En, Category::Warning) => {
        "Warning"
      }
      | (Locale::Ru, Category::Info) => {
        "Информация"
      }
      | (Locale::Ru, Category::Success) => {
        "Успешно"
      }
      | (Locale::Ru, Category::Error) => {
        "Ошибка"
      }
      | (Locale::Ru, Category::Warning) => {
        "Предупреждение"
      }
    }
  }

  pub fn close_label(self) -> &'static str {
    match self {
      | Locale::En => "Close",
      | Locale::Ru => "Закрыть"
    }
  }

  pub fn phase_placeholder(
    self
  ) -> &'static str {
    match self {
      | Locale::En => "Select a phase",
      | Locale::Ru => "Выберите этап"
    }
  }

  pub fn confirm_delete_plant(
    self
  ) -> &'static str {
    match self {
      | Locale::En => {
        "Are you sure you want to delete \
         this plant? All of its data will \
         be lost."
      }
      | Locale::Ru => {
        "Вы уверены, что хотите удалить \
         это растение? Все данные будут \
         потеряны."
      }
    }
  }

  pub fn confirm_delete_location(
    self
  ) -> &'static str {
    match self {
      | Locale::En => {
        "Are you sure you want to delete \
         this location? All plants in it \
         will be moved to \"No location\"."
      }
      | Locale::Ru => {
        "Вы уверены, что хотите удалить \
         эту локацию? Все растения в этой \
         локации будут перемещены в \"Без \
         локации\"."
      }
    }
  }
}
