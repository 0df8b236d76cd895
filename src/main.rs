//! Demo scene: power lines between poles and a fence along a spline.
//!
//! Run with: `cargo run`

use bevy::prelude::*;
use bevy_spline_wires::prelude::*;

/// Marker for the wire poles that Space lifts and lowers.
#[derive(Component)]
struct Pole;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(CatenaryPlugin)
        .add_plugins(SplinePlacementPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (bob_poles, show_help))
        .add_systems(PostUpdate, draw_scene.after(update_catenary_wires))
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 2500.0, 6000.0).looking_at(Vec3::new(0.0, 300.0, 0.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // A row of poles carrying two wires, the second one looping back.
    let poles: Vec<Entity> = [
        Vec3::new(-3000.0, 800.0, -1500.0),
        Vec3::new(-1000.0, 850.0, -1500.0),
        Vec3::new(1000.0, 700.0, -1200.0),
        Vec3::new(3000.0, 900.0, -1500.0),
    ]
    .into_iter()
    .map(|position| commands.spawn((Pole, Transform::from_translation(position))).id())
    .collect();

    commands.spawn(CatenaryWire::new(poles.clone()).with_settings(
        CatenarySettings::default()
            .with_slack(150.0)
            .with_slack_variation(60.0)
            .with_resolution(24),
    ));
    commands.spawn(CatenaryWire::new(poles).closed().with_settings(
        CatenarySettings::default()
            .with_slack(400.0)
            .with_solver(CatenarySolver::Fixed),
    ));

    // A fence along a winding path.
    let path = commands
        .spawn(Spline::new(
            SplineType::CatmullRom,
            vec![
                Vec3::new(-3500.0, 0.0, 1000.0),
                Vec3::new(-2500.0, 0.0, 800.0),
                Vec3::new(-800.0, 200.0, 1500.0),
                Vec3::new(800.0, 400.0, 600.0),
                Vec3::new(2500.0, 100.0, 1200.0),
                Vec3::new(3500.0, 0.0, 1000.0),
            ],
        ))
        .id();
    commands.spawn(SplinePlacement::new(path, 250.0).facing_up());
    commands.spawn(SplineTiling::new(path, TileLength::Fixed(400.0)).with_start_offset(125.0));
}

fn bob_poles(keyboard: Res<ButtonInput<KeyCode>>, mut poles: Query<&mut Transform, With<Pole>>) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    for (i, mut transform) in poles.iter_mut().enumerate() {
        transform.translation.y += if i % 2 == 0 { 150.0 } else { -150.0 };
    }
}

fn draw_scene(
    mut gizmos: Gizmos,
    wires: Query<&WireCurve>,
    placements: Query<&PlacementTransforms>,
    tilings: Query<&TileSpans>,
) {
    for wire in &wires {
        gizmos.linestrip(wire.points.iter().copied(), Color::srgb(0.9, 0.8, 0.2));
    }

    for placement in &placements {
        for transform in &placement.0 {
            gizmos.axes(*transform, 80.0);
        }
    }

    for tiles in &tilings {
        for span in &tiles.0 {
            gizmos.line(span.start_position, span.end_position, Color::srgb(0.3, 0.6, 1.0));
            gizmos.arrow(
                span.start_position,
                span.start_position + span.start_tangent * 0.5,
                Color::srgb(1.0, 0.3, 0.3),
            );
        }
    }
}

fn show_help(keyboard: Res<ButtonInput<KeyCode>>, mut shown: Local<bool>) {
    if keyboard.just_pressed(KeyCode::KeyH) {
        *shown = !*shown;
        if *shown {
            println!("\n=== Wires Demo ===");
            println!("  H     - Toggle this help");
            println!("  Space - Move the poles and resample the wires");
            println!("==================\n");
        }
    }
}
