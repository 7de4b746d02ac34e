use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::ErrorKind;

/// Write-only access to the system clipboard.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    /// Write `text` unchanged. Failures are `ErrorKind::ClipboardFailure`.
    async fn write_text(&self, text: &str) -> Result<(), ErrorKind>;
}

/// `navigator.clipboard` in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl BrowserClipboard {
    // Looked up dynamically: the property is absent outside secure contexts.
    fn handle() -> Result<web_sys::Clipboard, ErrorKind> {
        let window = web_sys::window()
            .ok_or_else(|| ErrorKind::ClipboardFailure("no browser window".to_string()))?;
        js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
            .ok()
            .and_then(|value| value.dyn_into::<web_sys::Clipboard>().ok())
            .ok_or_else(|| {
                ErrorKind::ClipboardFailure("clipboard access is not available here".to_string())
            })
    }
}

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ErrorKind> {
        let promise = Self::handle()?.write_text(text);
        JsFuture::from(promise).await.map(|_| ()).map_err(|e| {
            ErrorKind::ClipboardFailure(
                e.as_string()
                    .unwrap_or_else(|| "permission denied".to_string()),
            )
        })
    }
}
