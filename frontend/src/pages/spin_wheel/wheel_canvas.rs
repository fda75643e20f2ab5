use std::f64::consts::PI;

use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use shared::shared_wheel_game::{
    segment_center_angle, segment_start_angle, segment_under_pointer, POINTER_ANGLE, SEGMENT_ANGLE,
    WHEEL_SEGMENTS,
};

const SEGMENT_COLORS: [&str; 2] = ["#3b82f6", "#6366f1"]; // blue-500, indigo-500
const HIGHLIGHT_COLOR: &str = "#facc15";
const LABEL_RADIUS: f64 = 0.7;
const CANVAS_SIZE: u32 = 400;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub chosen: Option<u8>,
    pub highlight: bool,
    pub is_spinning: bool,
}

#[derive(Clone, Copy, PartialEq)]
struct WheelPose {
    rotation: f64,
    chosen: Option<u8>,
    highlight: bool,
    is_spinning: bool,
}

fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Segment drawn under the pointer once the wheel has stopped.
fn landed_segment(pose: &WheelPose) -> Option<u8> {
    if pose.is_spinning || pose.chosen.is_none() {
        return None;
    }
    Some(segment_under_pointer(pose.rotation))
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let pose = WheelPose {
            rotation: props.rotation,
            chosen: props.chosen,
            highlight: props.highlight,
            is_spinning: props.is_spinning,
        };

        use_effect_with(pose, move |pose| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                match context_2d(&canvas) {
                    Some(context) => {
                        draw_wheel(&context, canvas.width() as f64, canvas.height() as f64, pose)
                    }
                    None => log::warn!("Canvas 2d context unavailable"),
                }
            }
            if let Some(landed) = landed_segment(pose) {
                if pose.chosen != Some(landed) {
                    log::debug!("Pointer rests on {} but {:?} was drawn", landed, pose.chosen);
                }
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="w-64 h-64 md:w-80 md:h-80"
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw_wheel(context: &CanvasRenderingContext2d, width: f64, height: f64, pose: &WheelPose) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 24.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Soft rim behind the wheel, brighter while spinning
    context.begin_path();
    context.set_fill_style_str(if pose.is_spinning {
        "rgba(255, 255, 255, 0.2)"
    } else {
        "rgba(255, 255, 255, 0.1)"
    });
    let _ = context.arc(center_x, center_y, radius + 10.0, 0.0, 2.0 * PI);
    context.fill();

    // Wedges and labels turn with the wheel
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(to_radians(pose.rotation));

    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_font("bold 24px 'Segoe UI', Roboto, system-ui, sans-serif");

    for segment in 1..=WHEEL_SEGMENTS {
        let is_lit = pose.highlight && pose.chosen == Some(segment);
        let start = to_radians(segment_start_angle(segment));
        let end = start + to_radians(SEGMENT_ANGLE);

        context.begin_path();
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.set_fill_style_str(if is_lit {
            HIGHLIGHT_COLOR
        } else {
            SEGMENT_COLORS[usize::from(segment - 1) % SEGMENT_COLORS.len()]
        });
        context.fill();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
        context.set_line_width(2.0);
        context.stroke();

        let label_angle = to_radians(segment_center_angle(segment));
        let label_radius = radius * LABEL_RADIUS;
        context.set_fill_style_str(if is_lit { "#000000" } else { "#ffffff" });
        let _ = context.fill_text(
            &segment.to_string(),
            label_radius * label_angle.cos(),
            label_radius * label_angle.sin(),
        );
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(0.0, 0.0, radius * 0.15, 0.0, 2.0 * PI);
    context.fill();

    context.restore();

    draw_pointer(context, center_x, center_y, radius, pose.is_spinning);
}

/// Fixed pointer at `POINTER_ANGLE`, tip pointing at the hub.
fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64, is_spinning: bool) {
    let angle = to_radians(POINTER_ANGLE);
    let (dir_x, dir_y) = (angle.cos(), angle.sin());
    let (perp_x, perp_y) = (-dir_y, dir_x);
    let tip = radius - 12.0;
    let base = radius + 18.0;
    let half_width = 14.0;

    context.begin_path();
    context.move_to(center_x + dir_x * tip, center_y + dir_y * tip);
    context.line_to(
        center_x + dir_x * base + perp_x * half_width,
        center_y + dir_y * base + perp_y * half_width,
    );
    context.line_to(
        center_x + dir_x * base - perp_x * half_width,
        center_y + dir_y * base - perp_y * half_width,
    );
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#f87171" } else { "#ef4444" });
    context.fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::shared_wheel_game::compute_rotation;

    fn pose(rotation: f64, chosen: Option<u8>, is_spinning: bool) -> WheelPose {
        WheelPose { rotation, chosen, highlight: false, is_spinning }
    }

    #[test]
    fn test_landed_segment_matches_chosen() {
        for chosen in 1..=WHEEL_SEGMENTS {
            let resting = pose(compute_rotation(chosen), Some(chosen), false);
            assert_eq!(landed_segment(&resting), Some(chosen));
        }
        assert_eq!(landed_segment(&pose(compute_rotation(5), Some(5), true)), None);
        assert_eq!(landed_segment(&pose(0.0, None, false)), None);
    }
}
