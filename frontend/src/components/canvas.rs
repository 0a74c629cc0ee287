//! Canvas presenter: a schematic band list of the scene breakdown.
//!
//! One fixed-height band per record, alternating two fill colors by index
//! parity, labeled with the scene number and location. Drawing happens in
//! `rendered`, after the `<canvas>` node exists.

use common::model::record::Record;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub const CANVAS_WIDTH: u32 = 600;
pub const BAND_PITCH: f64 = 60.0;

const EVEN_BAND_COLOR: &str = "#FFAE52";
const ODD_BAND_COLOR: &str = "#FF841C";

/// Canvas height for `n` bands, with a floor so an almost-empty breakdown
/// still gets a visible drawing surface.
pub fn canvas_height(bands: usize) -> u32 {
    (bands as u32 * BAND_PITCH as u32).max(200)
}

/// Band caption. Mirrors the loose original behavior: a record without the
/// expected fields shows the literal text "undefined" instead of failing.
pub fn band_label(record: &Record) -> String {
    format!(
        "Scene {}: {}",
        field_text(record, "scene_number"),
        field_text(record, "location")
    )
}

fn field_text(record: &Record, key: &str) -> String {
    record
        .get(key)
        .map(|value| value.to_string())
        .unwrap_or_else(|| "undefined".to_string())
}

#[derive(Properties, PartialEq)]
pub struct CanvasDisplayProps {
    pub rows: Vec<Record>,
}

pub struct CanvasDisplay {
    canvas_ref: NodeRef,
}

impl Component for CanvasDisplay {
    type Message = ();
    type Properties = CanvasDisplayProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CanvasDisplay {
            canvas_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().rows.is_empty() {
            return html! { <p class="empty-notice">{"No data to display."}</p> };
        }
        html! {
            <div class="canvas-wrap">
                <canvas ref={self.canvas_ref.clone()} />
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().rows);
    }
}

impl CanvasDisplay {
    fn draw(&self, rows: &[Record]) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        let Some(context) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(canvas_height(rows.len()));
        context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

        for (idx, record) in rows.iter().enumerate() {
            let y = idx as f64 * BAND_PITCH;
            let fill = if idx % 2 == 0 {
                EVEN_BAND_COLOR
            } else {
                ODD_BAND_COLOR
            };
            context.set_fill_style_str(fill);
            context.fill_rect(10.0, y + 10.0, CANVAS_WIDTH as f64 - 20.0, 40.0);
            context.set_fill_style_str("#000000");
            context.set_font("16px sans-serif");
            let _ = context.fill_text(&band_label(record), 20.0, y + 35.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_scene_number_and_location() {
        let record = Record::new()
            .with("scene_number", 1i64)
            .with("location", "INT. HOUSE");
        assert_eq!(band_label(&record), "Scene 1: INT. HOUSE");
    }

    #[test]
    fn unexpected_record_shape_degrades_to_undefined() {
        let record = Record::new().with("title", "Opening");
        assert_eq!(band_label(&record), "Scene undefined: undefined");
    }

    #[test]
    fn height_has_a_floor_and_grows_per_band() {
        assert_eq!(canvas_height(0), 200);
        assert_eq!(canvas_height(3), 200);
        assert_eq!(canvas_height(4), 240);
        assert_eq!(canvas_height(10), 600);
    }
}
