use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;
use verdant_shared::Category;

use crate::config::PageConfig;
use crate::locale::Locale;

/// Header text and background class for one toast category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
  pub title: &'static str,
  pub class: &'static str
}

pub fn style_for(
  category: Category,
  locale: Locale
) -> ToastStyle {
  let class = match category {
    | Category::Info => "bg-toast-info",
    | Category::Success => {
      "bg-toast-success"
    }
    | Category::Error => "bg-toast-error",
    | Category::Warning => {
      "bg-toast-warning"
    }
  };

  ToastStyle {
    title: locale.toast_title(category),
    class
  }
}

/// A fully resolved toast, ready for a host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
  pub style:       ToastStyle,
  pub message:     String,
  pub close_label: &'static str,
  pub delay_ms:    u32
}

/// Renders toasts and owns their lifetime once presented.
///
/// Implementations must remove the rendered toast after `delay_ms` or on
/// user dismissal, whichever happens first.
pub trait ToastHost {
  fn present(&mut self, toast: Toast);
}

pub struct Notifier<H> {
  host:     H,
  locale:   Locale,
  delay_ms: u32
}

impl<H: ToastHost> Notifier<H> {
  pub fn new(
    host: H,
    config: &PageConfig
  ) -> Self {
    Self {
      host,
      locale: config.locale,
      delay_ms: config.toast_delay_ms
    }
  }

  pub fn notify(
    &mut self,
    message: &str,
    category: Category
  ) {
    let toast = Toast {
      style:       style_for(
        category,
        self.locale
      ),
      message:     message.to_string(),
      close_label: self
        .locale
        .close_label(),
      delay_ms:    self.delay_ms
    };

    debug!(
      category = category.as_str(),
      delay_ms = self.delay_ms,
      "presenting toast"
    );
    self.host.present(toast);
  }

  /// Same as [`Notifier::notify`] for callers holding a raw category
  /// name; missing or unknown names render as info.
  pub fn notify_named(
    &mut self,
    message: &str,
    category: Option<&str>
  ) {
    self.notify(
      message,
      category
        .map(Category::from_name)
        .unwrap_or_default()
    );
  }

  #[cfg(test)]
  fn host(&self) -> &H {
    &self.host
  }
}

/// Draws and removes toast nodes on a page.
pub trait ToastSurface {
  type Node: 'static;

  /// `None` when there is nowhere to draw the toast.
  fn render(
    &self,
    toast: &Toast
  ) -> Option<Self::Node>;

  /// Runs `close` whenever the user dismisses `node`. The registration
  /// lives as long as the node value.
  fn on_close(
    &self,
    node: &Self::Node,
    close: Box<dyn Fn()>
  );

  fn remove(&self, node: &Self::Node);
}

/// Runs a task once after a delay on the page's event loop.
pub trait Timer {
  fn after(
    &self,
    delay_ms: u32,
    task: Box<dyn FnOnce()>
  );
}

/// Once-only latch shared between a toast's close button and its
/// expiry timer.
#[derive(Debug, Default)]
struct Dismissal {
  dismissed: Cell<bool>
}

impl Dismissal {
  /// Returns `true` for the first caller only; that caller removes the
  /// toast.
  fn claim(&self) -> bool {
    !self.dismissed.replace(true)
  }
}

struct LiveToast<S: ToastSurface> {
  surface:   Rc<S>,
  node:      S::Node,
  dismissal: Dismissal
}

impl<S: ToastSurface> LiveToast<S> {
  fn dismiss(&self) {
    if self.dismissal.claim() {
      self.surface.remove(&self.node);
    }
  }
}

/// [`ToastHost`] that renders on a surface and removes each toast after
/// its delay or on close, whichever comes first.
///
/// The expiry task owns the toast; the close hook only holds a weak
/// reference, so nothing outlives the timer.
pub struct TimedToasts<S, T> {
  surface: Rc<S>,
  timer:   T
}

impl<S, T> TimedToasts<S, T> {
  pub fn new(
    surface: Rc<S>,
    timer: T
  ) -> Self {
    Self { surface, timer }
  }
}

impl<S, T> ToastHost for TimedToasts<S, T>
where
  S: ToastSurface + 'static,
  T: Timer
{
  fn present(&mut self, toast: Toast) {
    let Some(node) =
      self.surface.render(&toast)
    else {
      return;
    };

    let live = Rc::new(LiveToast {
      surface: self.surface.clone(),
      node,
      dismissal: Dismissal::default()
    });

    let closing = Rc::downgrade(&live);
    self.surface.on_close(
      &live.node,
      Box::new(move || {
        if let Some(live) = closing.upgrade()
        {
          live.dismiss();
        }
      })
    );

    self.timer.after(
      toast.delay_ms,
      Box::new(move || live.dismiss())
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct RecordingHost {
    presented: Vec<Toast>
  }

  impl ToastHost for RecordingHost {
    fn present(&mut self, toast: Toast) {
      self.presented.push(toast);
    }
  }

  #[test]
  fn each_category_has_its_own_style() {
    let expected = [
      (
        Category::Info,
        "Information",
        "bg-toast-info"
      ),
      (
        Category::Success,
        "Success",
        "bg-toast-success"
      ),
      (
        Category::Error,
        "Error",
        "bg-toast-error"
      ),
      (
        Category::Warning,
        "Warning",
        "bg-toast-warning"
      ),
    ];

    for (category, title, class) in expected
    {
      let style =
        style_for(category, Locale::En);
      assert_eq!(style.title, title);
      assert_eq!(style.class, class);
    }
  }

  #[test]
  fn unrecognized_names_use_info_style() {
    let mut notifier = Notifier::new(
      RecordingHost::default(),
      &PageConfig::default()
    );
    notifier.notify_named(
      "hello",
      Some("critical")
    );
    notifier.notify_named("hello", None);

    let info =
      style_for(Category::Info, Locale::En);
    for toast in &notifier.host().presented {
      assert_eq!(toast.style, info);
    }
    assert_eq!(
      notifier.host().presented.len(),
      2
    );
  }

  #[test]
  fn toast_carries_configured_delay_and_locale()
  {
    let cfg = PageConfig {
      locale: Locale::Ru,
      toast_delay_ms: 1_500,
      ..PageConfig::default()
    };
    let mut notifier = Notifier::new(
      RecordingHost::default(),
      &cfg
    );
    notifier.notify(
      "Фото успешно удалено!",
      Category::Success
    );

    let toast =
      &notifier.host().presented[0];
    assert_eq!(toast.delay_ms, 1_500);
    assert_eq!(toast.style.title, "Успешно");
    assert_eq!(toast.close_label, "Закрыть");
    assert_eq!(
      toast.message,
      "Фото успешно удалено!"
    );
  }

  #[test]
  fn dismissal_is_claimed_once() {
    let dismissal = Dismissal::default();
    assert!(dismissal.claim());
    assert!(!dismissal.claim());
    assert!(!dismissal.claim());
  }
}
