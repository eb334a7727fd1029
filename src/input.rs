use glam::Vec2;
use web_sys as web;

/// Orbit drag bookkeeping between pointerdown and pointerup.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

/// Convert a point relative to the canvas' top-left corner into normalized
/// device coordinates (x right, y up, both in -1..1).
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(x / width * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    client_to_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Zoom factor for a wheel delta; scrolling down moves away.
#[inline]
pub fn wheel_zoom_factor(delta_y: f32, per_pixel: f32) -> f32 {
    (1.0 + delta_y * per_pixel).clamp(0.5, 2.0)
}

/// Scene commands reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    AddModel,
    RemoveModel,
    TogglePanel,
    ResetView,
    Fullscreen,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "+" | "=" | "ArrowRight" => Some(KeyCommand::AddModel),
        "-" | "_" | "ArrowLeft" => Some(KeyCommand::RemoveModel),
        "b" | "B" => Some(KeyCommand::TogglePanel),
        "r" | "R" => Some(KeyCommand::ResetView),
        "Enter" => Some(KeyCommand::Fullscreen),
        _ => None,
    }
}

/// Whether a keydown aimed at an element with this tag should drive the
/// scene. Focused form controls keep their own keys (Enter on a button).
#[inline]
pub fn scene_handles_keys_for(target_tag: Option<&str>) -> bool {
    !matches!(
        target_tag.map(str::to_ascii_uppercase).as_deref(),
        Some("BUTTON" | "INPUT" | "TEXTAREA" | "SELECT")
    )
}
