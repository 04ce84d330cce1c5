use bullet_trajectory::core::ballistics::TrajectorySample;
use bullet_trajectory::core::window::AxisWindow;
use macroquad::prelude::*;

use crate::constants::{LABEL_COLOR, TITLE_Y, X_GRID_LINES, Y_GRID_LINES};

/// Screen-space rectangle the data is drawn inside.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotFrame {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotFrame {
    fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }

    pub(crate) fn aspect_ratio(&self) -> f64 {
        f64::from(self.width() / self.height())
    }
}

pub(crate) fn world_to_screen(x: f64, y: f64, window: &AxisWindow, frame: &PlotFrame) -> Vec2 {
    let (u, v) = window.to_unit(x, y);
    vec2(
        frame.left + u as f32 * frame.width(),
        frame.bottom - v as f32 * frame.height(),
    )
}

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(frame: &PlotFrame, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = frame.left + t * frame.width();
        draw_line(x, frame.top, x, frame.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = frame.bottom - t * frame.height();
        draw_line(frame.left, y, frame.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(frame: &PlotFrame, window: &AxisWindow) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = frame.left + t * frame.width();
        let value = window.x_min + f64::from(t) * window.x_span();
        let label = format_axis_value(value, window.x_span());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            frame.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = frame.bottom - t * frame.height();
        let value = window.y_min + f64::from(t) * window.y_span();
        let label = format_axis_value(value, window.y_span());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (frame.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
        );
    }
}

pub(crate) fn draw_axis_labels(frame: &PlotFrame, x_label: &str, y_label: &str) {
    let size = measure_text(x_label, None, 20, 1.0);
    draw_ui_text(
        x_label,
        frame.left + (frame.width() - size.width) * 0.5,
        frame.bottom + 56.0,
        20,
        LABEL_COLOR,
    );
    draw_ui_text(y_label, frame.left - 100.0, frame.top - 16.0, 20, LABEL_COLOR);
}

pub(crate) fn draw_title(title: &str, screen_w: f32) {
    let size = measure_text(title, None, 30, 1.0);
    draw_ui_text(title, (screen_w - size.width) * 0.5, TITLE_Y, 30, DARKGRAY);
}

pub(crate) fn draw_path(
    points: &[(f64, f64)],
    window: &AxisWindow,
    frame: &PlotFrame,
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let mut prev = world_to_screen(points[0].0, points[0].1, window, frame);
    for &(x, y) in points.iter().skip(1) {
        let cur = world_to_screen(x, y, window, frame);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_apex_marker(apex: TrajectorySample, window: &AxisWindow, frame: &PlotFrame) {
    let p = world_to_screen(apex.x_m, apex.y_m, window, frame);
    draw_circle(p.x, p.y, 5.0, RED);
    draw_circle_lines(p.x, p.y, 5.0, 1.5, MAROON);
    let label = format!("apex {:.1} m at {:.2} s", apex.y_m, apex.t_s);
    draw_ui_text(&label, p.x + 10.0, p.y - 10.0, 18, LABEL_COLOR);
}

pub(crate) fn draw_empty_notice(frame: &PlotFrame) {
    let text = "No trajectory: the projectile never rises above launch height";
    let size = measure_text(text, None, 22, 1.0);
    draw_ui_text(
        text,
        frame.left + (frame.width() - size.width) * 0.5,
        frame.top + frame.height() * 0.5,
        22,
        LABEL_COLOR,
    );
}
