use tracing::{
  debug,
  warn
};
use verdant_shared::FlashMessage;

use crate::notify::{
  Notifier,
  ToastHost
};

/// Decodes the `data-messages` payload a template embeds for flashed
/// messages.
pub fn parse_flash_messages(
  raw: &str
) -> serde_json::Result<Vec<FlashMessage>> {
  serde_json::from_str(raw)
}

/// Shows every flashed message in order. Malformed payloads are logged
/// and skipped; returns how many toasts were shown.
pub fn replay_flash_messages<H: ToastHost>(
  notifier: &mut Notifier<H>,
  raw: &str
) -> usize {
  let raw = raw.trim();
  if raw.is_empty() {
    return 0;
  }

  let messages =
    match parse_flash_messages(raw) {
      | Ok(messages) => messages,
      | Err(error) => {
        warn!(
          %error,
          "ignoring malformed flash \
           messages"
        );
        return 0;
      }
    };

  debug!(
    total = messages.len(),
    "replaying flash messages"
  );
  for flash in &messages {
    notifier.notify(
      &flash.message,
      flash.category()
    );
  }
  messages.len()
}
