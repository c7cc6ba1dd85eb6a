//! Filter catalog bindings.
//!
//! Lists the built-in filters so the page can build its menu and label the
//! thumbnail grid.

use tintlab_core::filters;
use wasm_bindgen::prelude::*;

/// All filters in display order, as `[{ id, name, transform }, ...]`.
///
/// # Example (TypeScript)
/// ```typescript
/// for (const { id, name } of list_filters()) {
///   select.add(new Option(name, id));
/// }
/// ```
#[wasm_bindgen]
pub fn list_filters() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(filters::list()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Filter ids in display order.
#[wasm_bindgen]
pub fn filter_ids() -> js_sys::Array {
    filters::list()
        .iter()
        .map(|f| JsValue::from_str(f.id))
        .collect()
}

/// Display name for `id`. Unknown ids give the `original` filter's name.
#[wasm_bindgen]
pub fn filter_name(id: &str) -> String {
    filters::lookup(id).name.to_string()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_filter_ids_in_order() {
        let ids = filter_ids();
        assert_eq!(ids.length(), 12);
        assert_eq!(ids.get(0).as_string().unwrap(), "original");
        assert_eq!(ids.get(11).as_string().unwrap(), "slumber");
    }

    #[wasm_bindgen_test]
    fn test_list_filters_is_array() {
        let value = list_filters().unwrap();
        assert!(js_sys::Array::is_array(&value));
        assert_eq!(js_sys::Array::from(&value).length(), 12);
    }
}
