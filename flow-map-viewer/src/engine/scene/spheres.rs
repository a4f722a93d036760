use bevy::prelude::*;
use constants::render_settings::{SPHERE_COLOUR, SPHERE_SECTORS, SPHERE_STACKS};

use crate::engine::core::settings::FlowMaps;
use crate::engine::systems::playback::ShowTimestep;
use crate::timeline::TimeSlider;

#[derive(Component)]
pub struct FlowMapSphere;

/// Sphere entities reused across timesteps. Entity `i` shows point `i`;
/// entities past the current point count are hidden.
#[derive(Resource, Debug)]
pub struct SpherePool {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    entities: Vec<Entity>,
    shown: Option<usize>,
}

impl SpherePool {
    pub fn new(mesh: Handle<Mesh>, material: Handle<StandardMaterial>) -> Self {
        Self {
            mesh,
            material,
            entities: Vec::new(),
            shown: None,
        }
    }

    /// Timestep index currently on screen.
    pub fn shown(&self) -> Option<usize> {
        self.shown
    }

    pub fn capacity(&self) -> usize {
        self.entities.len()
    }
}

pub fn create_sphere_pool(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    radius: f32,
) {
    let mesh = meshes.add(Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
    let material = materials.add(StandardMaterial {
        base_color: SPHERE_COLOUR,
        perceptual_roughness: 0.6,
        ..default()
    });
    commands.insert_resource(SpherePool::new(mesh, material));
}

/// Move the pooled spheres onto the points of the requested timestep.
/// Only the last request of a frame is applied; the first run shows the
/// slider position.
pub fn apply_timestep(
    mut commands: Commands,
    mut pool: ResMut<SpherePool>,
    mut requests: EventReader<ShowTimestep>,
    slider: Res<TimeSlider>,
    flow_maps: Res<FlowMaps>,
    mut spheres: Query<(&mut Transform, &mut Visibility), With<FlowMapSphere>>,
) {
    let requested = requests
        .read()
        .last()
        .map(|request| request.index)
        .or_else(|| pool.shown.is_none().then(|| slider.current()));
    let Some(index) = requested else {
        return;
    };
    if pool.shown == Some(index) {
        return;
    }
    let Some(flow_map) = flow_maps.get(index) else {
        warn!("No flow map at index {index}, keeping current scene");
        return;
    };

    let existing = pool.entities.len();
    for (i, &entity) in pool.entities.iter().enumerate() {
        let Ok((mut transform, mut visibility)) = spheres.get_mut(entity) else {
            continue;
        };
        match flow_map.points.get(i) {
            Some(&point) => {
                transform.translation = Vec3::from_array(point);
                visibility.set_if_neq(Visibility::Inherited);
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }

    if flow_map.points.len() > existing {
        let (mesh, material) = (pool.mesh.clone(), pool.material.clone());
        let spawned: Vec<Entity> = flow_map.points[existing..]
            .iter()
            .map(|&point| {
                commands
                    .spawn((
                        FlowMapSphere,
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_translation(Vec3::from_array(point)),
                        Visibility::Inherited,
                    ))
                    .id()
            })
            .collect();
        pool.entities.extend(spawned);
    }

    pool.shown = Some(index);
    info!(
        "Showing flow map {} (t = {}, {} points, {} spheres pooled)",
        index,
        flow_map.time,
        flow_map.len(),
        pool.capacity()
    );
}
