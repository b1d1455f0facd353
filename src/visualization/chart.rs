//! Line-chart viewer for sampled trajectories
//!
//! Each [`Chart`] is one tab drawn with gizmo line strips, x1(t) and x2(t)
//! against time inside a fixed frame. [`ChartLayout`] does the data-to-screen
//! mapping and has no bevy state, so it can be used on its own.

use bevy::prelude::*;
use log::info;

use crate::simulation::states::TimeSample;

/// Plot frame size in screen units
const FRAME_WIDTH: f32 = 1000.0;
const FRAME_HEIGHT: f32 = 400.0;

/// Series colours for x1(t) and x2(t)
const X1_COLOR: Color = Color::srgb(0x88 as f32 / 255.0, 0x84 as f32 / 255.0, 0xd8 as f32 / 255.0);
const X2_COLOR: Color = Color::srgb(0x82 as f32 / 255.0, 0xca as f32 / 255.0, 0x9d as f32 / 255.0);
const AXIS_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);

/// One tab of the viewer: a titled trajectory
pub struct Chart {
    pub title: String,
    pub samples: Vec<TimeSample>,
}

/// All loaded charts and the one currently shown
#[derive(Resource)]
struct ChartTabs {
    charts: Vec<Chart>,
    active: usize,
}

#[derive(Component)]
struct ChartTitle;

/// Maps `(t, x)` data coordinates into a frame centred on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub t_min: f64,
    pub t_max: f64,
    pub v_min: f64,
    pub v_max: f64,
    pub width: f32,
    pub height: f32,
}

impl ChartLayout {
    /// Fit both series into a `width` x `height` frame with a 5% value margin.
    /// Flat or empty data gets a unit range so nothing divides by zero.
    pub fn fit(samples: &[TimeSample], width: f32, height: f32) -> Self {
        let (mut t_min, mut t_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut v_min, mut v_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in samples {
            t_min = t_min.min(s.t);
            t_max = t_max.max(s.t);
            v_min = v_min.min(s.x1.min(s.x2));
            v_max = v_max.max(s.x1.max(s.x2));
        }

        if samples.is_empty() {
            (t_min, t_max, v_min, v_max) = (0.0, 1.0, -1.0, 1.0);
        }
        if t_max - t_min <= 0.0 {
            t_max = t_min + 1.0;
        }
        if v_max - v_min <= f64::EPSILON * v_max.abs().max(1.0) {
            v_min -= 1.0;
            v_max += 1.0;
        } else {
            let margin = 0.05 * (v_max - v_min);
            v_min -= margin;
            v_max += margin;
        }

        Self { t_min, t_max, v_min, v_max, width, height }
    }

    pub fn to_screen(&self, t: f64, v: f64) -> Vec2 {
        let u = (t - self.t_min) / (self.t_max - self.t_min);
        let w = (v - self.v_min) / (self.v_max - self.v_min);
        Vec2::new(
            (u as f32 - 0.5) * self.width,
            (w as f32 - 0.5) * self.height,
        )
    }
}

/// Open a window showing `charts`; Tab or 1-9 switches between them
pub fn run_charts(charts: Vec<Chart>) {
    info!("run_charts: starting Bevy chart viewer with {} chart(s)", charts.len());

    App::new()
        .insert_resource(ChartTabs { charts, active: 0 })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_chart_system)
        .add_systems(Update, (switch_tab_system, update_title_system, draw_chart_system).chain())
        .run();
}

fn setup_chart_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());

    let top = FRAME_HEIGHT / 2.0;
    let bottom = -FRAME_HEIGHT / 2.0;

    commands.spawn((
        Text2dBundle {
            text: Text::from_section("", TextStyle { font_size: 28.0, color: Color::WHITE, ..default() }),
            transform: Transform::from_xyz(0.0, top + 40.0, 0.0),
            ..default()
        },
        ChartTitle,
    ));

    // Legend
    for (label, color, x) in [("x1(t)", X1_COLOR, -60.0), ("x2(t)", X2_COLOR, 60.0)] {
        commands.spawn(Text2dBundle {
            text: Text::from_section(label, TextStyle { font_size: 20.0, color, ..default() }),
            transform: Transform::from_xyz(x, bottom - 30.0, 0.0),
            ..default()
        });
    }

    commands.spawn(Text2dBundle {
        text: Text::from_section("Tab / 1-9: switch chart", TextStyle { font_size: 14.0, color: AXIS_COLOR, ..default() }),
        transform: Transform::from_xyz(0.0, bottom - 60.0, 0.0),
        ..default()
    });
}

fn switch_tab_system(keys: Res<ButtonInput<KeyCode>>, mut tabs: ResMut<ChartTabs>) {
    let n = tabs.charts.len();
    if n == 0 {
        return;
    }

    if keys.just_pressed(KeyCode::Tab) {
        tabs.active = (tabs.active + 1) % n;
    }

    let digits = [
        KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3,
        KeyCode::Digit4, KeyCode::Digit5, KeyCode::Digit6,
        KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
    ];
    for (i, key) in digits.iter().enumerate() {
        if i < n && keys.just_pressed(*key) {
            tabs.active = i;
        }
    }
}

fn update_title_system(tabs: Res<ChartTabs>, mut query: Query<&mut Text, With<ChartTitle>>) {
    if !tabs.is_changed() {
        return;
    }
    let Some(chart) = tabs.charts.get(tabs.active) else {
        return;
    };
    for mut text in &mut query {
        text.sections[0].value = chart.title.clone();
    }
}

fn draw_chart_system(tabs: Res<ChartTabs>, mut gizmos: Gizmos) {
    let Some(chart) = tabs.charts.get(tabs.active) else {
        return;
    };
    let layout = ChartLayout::fit(&chart.samples, FRAME_WIDTH, FRAME_HEIGHT);

    // Frame
    let (hw, hh) = (FRAME_WIDTH / 2.0, FRAME_HEIGHT / 2.0);
    gizmos.line_2d(Vec2::new(-hw, -hh), Vec2::new(hw, -hh), AXIS_COLOR);
    gizmos.line_2d(Vec2::new(hw, -hh), Vec2::new(hw, hh), AXIS_COLOR);
    gizmos.line_2d(Vec2::new(hw, hh), Vec2::new(-hw, hh), AXIS_COLOR);
    gizmos.line_2d(Vec2::new(-hw, hh), Vec2::new(-hw, -hh), AXIS_COLOR);

    // Zero line when it is in range
    if layout.v_min < 0.0 && layout.v_max > 0.0 {
        let y = layout.to_screen(layout.t_min, 0.0).y;
        gizmos.line_2d(Vec2::new(-hw, y), Vec2::new(hw, y), AXIS_COLOR);
    }

    gizmos.linestrip_2d(chart.samples.iter().map(|s| layout.to_screen(s.t, s.x1)), X1_COLOR);
    gizmos.linestrip_2d(chart.samples.iter().map(|s| layout.to_screen(s.t, s.x2)), X2_COLOR);
}
