use billboard_core::PanelState;
use web_sys as web;

/// Text for the status line under the canvas.
pub fn status_text(count: usize, max: usize, panel: PanelState, loading: bool) -> String {
    let panel_text = match panel {
        PanelState::Visible => "Buttons: shown",
        PanelState::Hidden => "Buttons: hidden (B to show)",
    };
    let mut text = format!("Models: {}/{} • {}", count, max, panel_text);
    if loading {
        text.push_str(" • Loading…");
    }
    text
}

/// Update the hint overlay with current scene state
pub fn update_status(
    document: &web::Document,
    count: usize,
    max: usize,
    panel: PanelState,
    loading: bool,
) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{}</div>",
            status_text(count, max, panel, loading)
        );
        el.set_inner_html(&hint_html);
        _ = el.set_attribute("style", "");
    }
}

pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        el.set_inner_html(&format!(
            "<div style='color: #ffb4b4; font: 13px system-ui; background: rgba(40, 10, 14, 0.85); padding: 8px 12px; border-radius: 6px;'>{}</div>",
            message
        ));
        _ = el.set_attribute("style", "");
    }
}
