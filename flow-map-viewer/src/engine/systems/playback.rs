use bevy::prelude::*;

use crate::engine::core::settings::{FlowMaps, ViewerSettings};
use crate::timeline::{AnimationClock, AnimationStep, TimeSlider};

/// Request to put the timestep at `index` on screen.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowTimestep {
    pub index: usize,
}

/// Animation in progress, if any.
#[derive(Resource, Debug, Default)]
pub struct Playback {
    clock: Option<AnimationClock>,
}

impl Playback {
    pub fn is_running(&self) -> bool {
        self.clock.is_some()
    }

    /// Frame the running animation is on.
    pub fn frame(&self) -> Option<usize> {
        self.clock.as_ref().map(AnimationClock::frame)
    }
}

/// Commit slider moves once per frame. While animating the move is recorded
/// but the scene keeps following the animation.
pub fn commit_time_slider(
    mut slider: ResMut<TimeSlider>,
    playback: Res<Playback>,
    mut show: EventWriter<ShowTimestep>,
) {
    // Committing touches bookkeeping only; widgets react to real moves.
    slider.bypass_change_detection().draw();
    if !slider.changed() {
        return;
    }
    info!("Time slider at {}", slider.current());
    if !playback.is_running() {
        show.write(ShowTimestep {
            index: slider.current(),
        });
    }
}

/// Start, step and stop the animation walk through every timestep.
pub fn advance_animation(
    mut slider: ResMut<TimeSlider>,
    mut playback: ResMut<Playback>,
    flow_maps: Res<FlowMaps>,
    settings: Res<ViewerSettings>,
    time: Res<Time>,
    mut show: EventWriter<ShowTimestep>,
) {
    match (slider.animation(), playback.is_running()) {
        (false, false) => {}
        (true, false) => {
            playback.clock = Some(AnimationClock::new(flow_maps.len(), settings.dwell_secs));
            info!(
                "Animation started: {} flow maps, {:.1}s each",
                flow_maps.len(),
                settings.dwell_secs
            );
            show.write(ShowTimestep { index: 0 });
        }
        (false, true) => {
            playback.clock = None;
            info!("Animation stopped");
            show.write(ShowTimestep {
                index: slider.current(),
            });
        }
        (true, true) => {
            let step = playback
                .clock
                .as_mut()
                .map_or(AnimationStep::Finished, |clock| clock.tick(time.delta_secs()));
            match step {
                AnimationStep::Hold => {}
                AnimationStep::Show(index) => {
                    show.write(ShowTimestep { index });
                }
                AnimationStep::Finished => {
                    playback.clock = None;
                    slider.set_animation(false);
                    info!("Animation finished");
                    show.write(ShowTimestep {
                        index: slider.current(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use flow_map_loader::{FlowMap, FlowMapSequence};
    use std::time::Duration;

    fn world_with_timesteps(count: usize) -> World {
        let maps = (0..count)
            .map(|t| FlowMap::new(t as i64, vec![[t as f32, 0.0, 0.0]]))
            .collect();
        let mut world = World::new();
        world.init_resource::<Events<ShowTimestep>>();
        world.init_resource::<Playback>();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(TimeSlider::new(0, count - 1, 0));
        world.insert_resource(FlowMaps(FlowMapSequence::from_flow_maps(maps)));
        world.insert_resource(ViewerSettings {
            sphere_radius: 0.01,
            dwell_secs: 3.0,
        });
        world
    }

    fn drain_requests(world: &mut World) -> Vec<usize> {
        let mut events = world.resource_mut::<Events<ShowTimestep>>();
        let indices = events.iter_current_update_events().map(|e| e.index).collect();
        events.clear();
        indices
    }

    fn advance(world: &mut World, secs: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        world.run_system_once(advance_animation).unwrap();
    }

    #[test]
    fn slider_move_requests_timestep_once() {
        let mut world = world_with_timesteps(5);
        world.run_system_once(commit_time_slider).unwrap();
        assert!(drain_requests(&mut world).is_empty());

        world.resource_mut::<TimeSlider>().set_current(2);
        world.resource_mut::<TimeSlider>().set_current(3);
        world.run_system_once(commit_time_slider).unwrap();
        world.run_system_once(commit_time_slider).unwrap();
        assert_eq!(drain_requests(&mut world), vec![3]);
    }

    #[test]
    fn slider_move_during_animation_is_committed_silently() {
        let mut world = world_with_timesteps(5);
        world.resource_mut::<TimeSlider>().set_animation(true);
        world.run_system_once(advance_animation).unwrap();
        assert_eq!(drain_requests(&mut world), vec![0]);

        world.resource_mut::<TimeSlider>().set_current(4);
        world.run_system_once(commit_time_slider).unwrap();
        assert!(drain_requests(&mut world).is_empty());
        assert_eq!(world.resource::<TimeSlider>().previous(), 4);
    }

    #[test]
    fn animation_walks_every_frame_then_returns_to_slider() {
        let mut world = world_with_timesteps(3);
        world.resource_mut::<TimeSlider>().set_current(1);
        world.run_system_once(commit_time_slider).unwrap();
        drain_requests(&mut world);

        world.resource_mut::<TimeSlider>().set_animation(true);
        advance(&mut world, 0.0);
        assert_eq!(drain_requests(&mut world), vec![0]);
        assert_eq!(world.resource::<Playback>().frame(), Some(0));

        advance(&mut world, 1.0);
        assert!(drain_requests(&mut world).is_empty());
        advance(&mut world, 2.5);
        assert_eq!(drain_requests(&mut world), vec![1]);
        advance(&mut world, 3.0);
        assert_eq!(drain_requests(&mut world), vec![2]);
        advance(&mut world, 3.0);
        assert_eq!(drain_requests(&mut world), vec![1]);

        assert!(!world.resource::<Playback>().is_running());
        assert!(!world.resource::<TimeSlider>().animation());
    }

    #[test]
    fn clearing_the_flag_stops_at_once() {
        let mut world = world_with_timesteps(4);
        world.resource_mut::<TimeSlider>().set_animation(true);
        advance(&mut world, 0.0);
        advance(&mut world, 3.5);
        assert_eq!(drain_requests(&mut world), vec![0, 1]);

        world.resource_mut::<TimeSlider>().set_animation(false);
        advance(&mut world, 0.1);
        assert_eq!(drain_requests(&mut world), vec![0]);
        assert!(!world.resource::<Playback>().is_running());
    }
}
