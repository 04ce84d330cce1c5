use bullet_trajectory::core::ballistics::{TrajectoryResult, TrajectorySample};
use bullet_trajectory::core::plot::ChartOptions;
use bullet_trajectory::core::window::AxisWindow;
use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, PATH_COLOR, RIGHT_MARGIN, TOP_MARGIN,
};
use crate::render::{
    PlotFrame, draw_apex_marker, draw_axis_labels, draw_axis_tick_labels, draw_empty_notice,
    draw_grid, draw_path, draw_title,
};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Bullet Trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

/// Everything drawn each frame, computed once up front.
pub(crate) struct Scene {
    chart: ChartOptions,
    window: AxisWindow,
    points: Vec<(f64, f64)>,
    apex: Option<TrajectorySample>,
}

impl Scene {
    pub(crate) fn new(result: TrajectoryResult, chart: ChartOptions) -> Self {
        Self {
            window: AxisWindow::fit(&result),
            points: result.points(),
            apex: result.apex(),
            chart,
        }
    }
}

pub(crate) async fn run(scene: Scene) {
    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let frame = PlotFrame {
            left: LEFT_MARGIN,
            right: screen_width() - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_height() - BOTTOM_MARGIN,
        };

        // one metre spans the same number of pixels on both axes
        let window = scene.window.with_aspect_ratio(frame.aspect_ratio());

        clear_background(BACKGROUND);
        if scene.chart.grid {
            draw_grid(&frame, GRID_COLOR);
        }
        draw_line(frame.left, frame.bottom, frame.right, frame.bottom, 2.0, DARKGRAY);
        draw_line(frame.left, frame.top, frame.left, frame.bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(&frame, &window);
        draw_axis_labels(&frame, &scene.chart.x_label, &scene.chart.y_label);
        draw_title(&scene.chart.title, screen_width());

        if scene.points.is_empty() {
            draw_empty_notice(&frame);
        } else {
            draw_path(&scene.points, &window, &frame, 2.5, PATH_COLOR);
            if let Some(apex) = scene.apex {
                draw_apex_marker(apex, &window, &frame);
            }
        }

        next_frame().await;
    }
}
