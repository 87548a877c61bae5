use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Triangle2d};
use bevy::window::WindowResolution;

use crate::game::session::{ControlInput, GameSession, SessionState};
use crate::simulation::states::{BodyId, NVec2};
use crate::visualization::projection::ScreenProjection;

/// Bevy resource wrapping the session the frame loop advances
#[derive(Resource)]
struct Game(GameSession);

/// Component tagging each mesh with the handle of the body it draws
#[derive(Component)]
struct BodyTag(BodyId);

#[derive(Component)]
struct PlayerShip;

#[derive(Resource)]
struct Palette {
    player: Handle<ColorMaterial>,
    player_eating: Handle<ColorMaterial>,
}

/// Smallest on-screen radius so tiny planets stay visible
const MIN_RADIUS_PX: f32 = 2.0;

/// Player marker size in pixels
const SHIP_SIZE_PX: f32 = 10.0;

pub fn run_game(session: GameSession) {
    let projection = session.projection();
    let resolution = WindowResolution::new(projection.width() as f32, projection.height() as f32);
    info!("run_game: starting with {} bodies", session.system().len());

    App::new()
        .insert_resource(Game(session))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Asteroid Rage".into(),
                resolution,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (game_tick_system, sync_transforms_system).chain())
        .run();
}

fn setup_bodies_system(mut commands: Commands, game: Res<Game>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let palette = Palette {
        player: materials.add(ColorMaterial::from(Color::srgb(0.3, 0.9, 0.4))),
        player_eating: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.3, 0.2))),
    };

    let unit_circle = Mesh2dHandle(meshes.add(Circle::new(1.0)));
    let ship = Mesh2dHandle(meshes.add(Triangle2d::new(
        Vec2::new(0.0, 1.0),
        Vec2::new(-0.6, -0.8),
        Vec2::new(0.6, -0.8),
    )));
    let star = materials.add(ColorMaterial::from(Color::srgb(1.0, 0.85, 0.3)));
    let planet = materials.add(ColorMaterial::from(Color::WHITE));

    let session = &game.0;
    for (i, body) in session.system().bodies().iter().enumerate() {
        let transform = body_transform(session.projection(), &body.x, body.radius);

        if i == 0 {
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: ship.clone(),
                    material: palette.player.clone(),
                    transform: transform.with_scale(Vec3::splat(SHIP_SIZE_PX)),
                    ..default()
                },
                BodyTag(body.id),
                PlayerShip,
            ));
            continue;
        }

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: unit_circle.clone(),
                material: if i == 1 { star.clone() } else { planet.clone() },
                transform,
                ..default()
            },
            BodyTag(body.id),
        ));
    }

    commands.insert_resource(palette);
}

fn game_tick_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<Game>,
    palette: Res<Palette>,
    tags: Query<(Entity, &BodyTag)>,
    mut ship: Query<&mut Handle<ColorMaterial>, With<PlayerShip>>,
    mut exit: EventWriter<AppExit>,
) {
    let input = ControlInput {
        boost: keys.pressed(KeyCode::KeyW),
        rotate_cw: keys.pressed(KeyCode::KeyD),
        rotate_ccw: keys.pressed(KeyCode::KeyA),
        consume: keys.pressed(KeyCode::Space),
        zoom_in: keys.pressed(KeyCode::ArrowUp),
        zoom_out: keys.pressed(KeyCode::ArrowDown),
        speed_up: keys.pressed(KeyCode::Period),
        slow_down: keys.pressed(KeyCode::Comma),
    };

    let outcome = match game.0.tick(&input) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("simulation error: {e}");
            exit.send(AppExit::error());
            return;
        }
    };

    if let Some(id) = outcome.consumed {
        for (entity, tag) in &tags {
            if tag.0 == id {
                commands.entity(entity).despawn();
            }
        }
    }

    if let Ok(mut material) = ship.get_single_mut() {
        *material = if outcome.in_range {
            palette.player_eating.clone()
        } else {
            palette.player.clone()
        };
    }

    match outcome.state {
        SessionState::Playing => {}
        SessionState::Destroyed => {
            info!("game over: collision");
            exit.send(AppExit::Success);
        }
        SessionState::Victory => {
            let (consumed, total) = game.0.progress();
            info!("victory: {consumed}/{total} objects consumed");
            exit.send(AppExit::Success);
        }
    }
}

fn sync_transforms_system(game: Res<Game>, mut query: Query<(&BodyTag, &mut Transform, Option<&PlayerShip>)>) {
    let session = &game.0;
    for (BodyTag(id), mut transform, ship) in &mut query {
        let Some(b) = session.system().get(*id) else {
            continue;
        };
        if ship.is_some() {
            let t = body_transform(session.projection(), &b.x, b.radius);
            transform.translation = t.translation;
            // heading is clockwise from +y
            transform.rotation = Quat::from_rotation_z(-(session.heading().to_radians() as f32));
        } else {
            *transform = body_transform(session.projection(), &b.x, b.radius);
        }
    }
}

/// Place a body in bevy's centred, y-up world space and scale a unit mesh to its radius
fn body_transform(projection: &ScreenProjection, x: &NVec2, radius: f64) -> Transform {
    let screen = projection.project(x) - projection.center();
    let radius_px = (projection.project_length(radius) as f32).max(MIN_RADIUS_PX);
    Transform::from_xyz(screen.x as f32, screen.y as f32, 0.0).with_scale(Vec3::splat(radius_px))
}
