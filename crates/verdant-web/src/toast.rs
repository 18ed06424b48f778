use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use tracing::{
  error,
  warn
};
use verdant_core::PageConfig;
use verdant_core::notify::{
  TimedToasts,
  Timer,
  Toast,
  ToastSurface
};
use wasm_bindgen::JsValue;
use web_sys::{
  Document,
  Element
};

pub type DomToastHost =
  TimedToasts<DomSurface, BrowserTimer>;

pub fn dom_toast_host(
  config: &PageConfig
) -> DomToastHost {
  TimedToasts::new(
    Rc::new(DomSurface::new(
      &config.elements.toast_container
    )),
    BrowserTimer
  )
}

/// Draws toasts into the page's toast container.
pub struct DomSurface {
  container_id: String
}

/// A rendered toast; dropping it unregisters the close listener.
pub struct ToastNode {
  pub root:       Element,
  pub close:      Element,
  close_listener: RefCell<Option<EventListener>>
}

impl DomSurface {
  pub fn new(container_id: &str) -> Self {
    Self {
      container_id: container_id.to_string()
    }
  }
}

impl ToastSurface for DomSurface {
  type Node = ToastNode;

  fn render(
    &self,
    toast: &Toast
  ) -> Option<ToastNode> {
    let document = crate::dom::document()?;
    let Some(container) = document
      .get_element_by_id(&self.container_id)
    else {
      warn!(
        container = %self.container_id,
        "toast container missing; dropping \
         toast"
      );
      return None;
    };

    build(&document, &container, toast)
      .map_err(|err| {
        error!(
          error = ?err,
          "failed rendering toast"
        );
      })
      .ok()
  }

  fn on_close(
    &self,
    node: &ToastNode,
    close: Box<dyn Fn()>
  ) {
    let listener = EventListener::new(
      &node.close,
      "click",
      move |_| close()
    );
    node
      .close_listener
      .replace(Some(listener));
  }

  fn remove(&self, node: &ToastNode) {
    node.root.remove();
  }
}

fn build(
  document: &Document,
  container: &Element,
  toast: &Toast
) -> Result<ToastNode, JsValue> {
  let root = document.create_element("div")?;
  root.set_class_name(&format!(
    "toast {}",
    toast.style.class
  ));
  root.set_attribute("role", "alert")?;

  let header =
    document.create_element("div")?;
  header.set_class_name("toast-header");

  let title =
    document.create_element("strong")?;
  title.set_class_name("me-auto");
  title
    .set_text_content(Some(toast.style.title));

  let close =
    document.create_element("button")?;
  close.set_attribute("type", "button")?;
  close.set_class_name("btn-close");
  close.set_attribute(
    "aria-label",
    toast.close_label
  )?;

  header.append_child(&title)?;
  header.append_child(&close)?;

  let body = document.create_element("div")?;
  body.set_class_name("toast-body");
  body.set_text_content(Some(&toast.message));

  root.append_child(&header)?;
  root.append_child(&body)?;
  container.append_child(&root)?;
  root.class_list().add_1("show")?;

  Ok(ToastNode {
    root,
    close,
    close_listener: RefCell::new(None)
  })
}

/// `setTimeout` through gloo, on the page's event loop.
pub struct BrowserTimer;

impl Timer for BrowserTimer {
  fn after(
    &self,
    delay_ms: u32,
    task: Box<dyn FnOnce()>
  ) {
    wasm_bindgen_futures::spawn_local(
      async move {
        TimeoutFuture::new(delay_ms).await;
        task();
      }
    );
  }
}
