//! Google Identity Services Bindings
//!
//! Frontend bindings to the `google.accounts.id` global loaded from the GIS
//! script tag. The OAuth handshake itself happens inside the provider; all we
//! see is the credential handed to the configured callback.

use wasm_bindgen::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gis_initialize(config: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gis_render_button(parent: &web_sys::Element, options: &JsValue);
}

/// True when the GIS script has made its global available
pub fn is_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &JsValue::from_str("google")).unwrap_or(false)
}

/// Initialize GIS with the configured client id and render the sign-in
/// button into `parent`. `on_credential` receives the raw JWT credential
/// from the provider callback.
pub fn mount_button(parent: &web_sys::Element, on_credential: impl Fn(String) + 'static) {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|v| v.as_string());
        if let Some(credential) = credential {
            on_credential(credential);
        }
    });

    let gis_config = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &gis_config,
        &JsValue::from_str("client_id"),
        &JsValue::from_str(config::google_client_id()),
    );
    let _ = js_sys::Reflect::set(
        &gis_config,
        &JsValue::from_str("callback"),
        callback.as_ref(),
    );
    gis_initialize(&gis_config);
    // The callback must outlive this call; GIS keeps invoking it
    callback.forget();

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("theme"),
        &JsValue::from_str("outline"),
    );
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("size"),
        &JsValue::from_str("large"),
    );
    gis_render_button(parent, &options);
}
