//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js map functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed the map JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SUNSHINE_MAP_JS: &str = include_str!("../assets/js/sunshine-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Sunshine JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("js eval failed: {:?}", e);
    }
}

/// Quote a string as a JS string literal.
///
/// JSON string syntax is valid JS, so serde_json does the escaping.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the map scripts with a wait-for-D3 polling loop.
///
/// The map JS files define functions like `renderSunshineMap(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once D3 is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, SUNSHINE_MAP_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    call_js(&format!(
        "window.__sunshineMapScripts = {};",
        js_string_literal(&all_js)
    ));

    let init_js = r#"
        (function() {
            if (window.__sunshineMapReady || window.__sunshineMapInitializing) return;
            window.__sunshineMapInitializing = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__sunshineMapScripts);
                    delete window.__sunshineMapScripts;
                    if (typeof renderSunshineMap !== 'undefined') window.renderSunshineMap = renderSunshineMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__sunshineMapReady = true;
                    console.log('Sunshine map initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Render the sunshine map from a serialized `FigureSnapshot`.
///
/// Uses a polling loop to wait for D3.js to load, the map scripts to
/// initialize, and the container DOM element to exist before rendering.
/// Each call replaces whatever was drawn before.
pub fn render_sunshine_map(container_id: &str, figure_json: &str, config_json: &str) {
    let id = js_string_literal(container_id);
    let figure = js_string_literal(figure_json);
    let config = js_string_literal(config_json);
    call_js(&format!(
        r#"
        (function() {{
            if (window.__sunshineMapPoll) clearInterval(window.__sunshineMapPoll);
            window.__sunshineMapPoll = setInterval(function() {{
                if (window.__sunshineMapReady &&
                    typeof window.renderSunshineMap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(window.__sunshineMapPoll);
                    window.__sunshineMapPoll = null;
                    try {{
                        window.renderSunshineMap({id}, {figure}, {config});
                    }} catch(e) {{ console.error('[Sunshine] renderSunshineMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up the map in the given container.
///
/// Bumps the render generation so a draw still waiting on the state
/// outlines does not repaint the cleared container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "window.__sunshineRenderGen = (window.__sunshineRenderGen || 0) + 1; \
         var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string_literal(container_id)
    ));
}
