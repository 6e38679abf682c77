//! Expose the `revision-diff` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

pub use types::*;

use crate::RenderOptions;

mod types;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::compute_diff`. `null` and `undefined` compare
/// as empty text.
#[wasm_bindgen(js_name = computeDiff)]
#[must_use]
pub fn compute_diff(original: Option<String>, current: Option<String>) -> Vec<JsDiffSegment> {
    set_panic_hook();

    crate::compute_diff(&original.unwrap_or_default(), &current.unwrap_or_default())
        .into_iter()
        .map(Into::into)
        .collect()
}

/// WASM wrapper around `crate::compute_list_diff` for list fields such as
/// essential functions.
#[wasm_bindgen(js_name = computeListDiff)]
#[must_use]
pub fn compute_list_diff(original: Vec<String>, current: Vec<String>) -> Vec<JsDiffSegment> {
    set_panic_hook();

    crate::compute_list_diff(&original, &current)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Diff `original` and `current` and return the spans to draw on `pane`.
#[wasm_bindgen(js_name = renderPane)]
#[must_use]
pub fn render_pane(
    original: Option<String>,
    current: Option<String>,
    pane: JsPane,
    differences_only: bool,
) -> Vec<JsRenderedSpan> {
    set_panic_hook();

    let segments = crate::compute_diff(&original.unwrap_or_default(), &current.unwrap_or_default());
    crate::render_pane(&segments, pane.into(), RenderOptions { differences_only })
        .into_iter()
        .map(Into::into)
        .collect()
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
