use bevy::prelude::*;
use constants::ui_palette::*;
use constants::window_settings::CONTROL_PANEL_HEIGHT;

use crate::engine::core::settings::FlowMaps;
use crate::engine::scene::spheres::SpherePool;
use crate::engine::systems::playback::Playback;
use crate::timeline::TimeSlider;

#[derive(Component)]
pub struct ControlPanelRoot;

/// Track segment selecting the timestep at this index.
#[derive(Component, Debug, Clone, Copy)]
pub struct SliderSegment(pub usize);

#[derive(Component)]
pub struct AnimationToggle;

#[derive(Component)]
pub struct AnimationLabel;

#[derive(Component)]
pub struct TimeLabel;

// Spawns the control panel with the time slider track and animation toggle
pub fn spawn_control_panel(mut commands: Commands, slider: Res<TimeSlider>) {
    commands
        .spawn((
            ControlPanelRoot,
            Name::new("ControlPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(CONTROL_PANEL_HEIGHT),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel
                .spawn((
                    Name::new("Header"),
                    BackgroundColor(HEADER_BACKGROUND),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::horizontal(Val::Px(6.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        Name::new("Title"),
                        Text::new("Control Panel"),
                        TextFont {
                            font_size: TITLE_FONT_SIZE,
                            ..default()
                        },
                        TextColor(TEXT),
                    ));
                    header.spawn((
                        TimeLabel,
                        Name::new("TimeLabel"),
                        Text::new(""),
                        TextFont {
                            font_size: LABEL_FONT_SIZE,
                            ..default()
                        },
                        TextColor(TEXT),
                    ));
                });

            panel
                .spawn((
                    Name::new("SliderRow"),
                    Node {
                        width: Val::Percent(100.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(10.0),
                        ..default()
                    },
                ))
                .with_children(|row| {
                    row.spawn((
                        Text::new("Time Slider"),
                        TextFont {
                            font_size: LABEL_FONT_SIZE,
                            ..default()
                        },
                        TextColor(TEXT),
                    ));

                    row.spawn((
                        Name::new("Track"),
                        BackgroundColor(TRACK_BACKGROUND),
                        BorderColor(BORDER),
                        Node {
                            flex_grow: 1.0,
                            height: Val::Px(18.0),
                            display: Display::Flex,
                            flex_direction: FlexDirection::Row,
                            border: UiRect::all(Val::Px(1.0)),
                            overflow: Overflow::clip(),
                            ..default()
                        },
                    ))
                    .with_children(|track| {
                        for index in slider.start()..=slider.end() {
                            track.spawn((
                                SliderSegment(index),
                                Button,
                                BackgroundColor(segment_colour(index, slider.current())),
                                Node {
                                    flex_grow: 1.0,
                                    flex_basis: Val::Px(0.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                            ));
                        }
                    });

                    row.spawn((
                        AnimationToggle,
                        Button,
                        Name::new("AnimationToggle"),
                        BackgroundColor(BUTTON_IDLE),
                        BorderColor(BORDER),
                        Node {
                            width: Val::Px(120.0),
                            height: Val::Px(24.0),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            AnimationLabel,
                            Text::new(animation_label(false)),
                            TextFont {
                                font_size: LABEL_FONT_SIZE,
                                ..default()
                            },
                            TextColor(TEXT),
                        ));
                    });
                });
        });
}

/// Fill up to the marker, highlight the marker itself.
pub fn segment_colour(index: usize, marker: usize) -> Color {
    if index == marker {
        TRACK_HANDLE
    } else if index < marker {
        TRACK_FILLED
    } else {
        Color::NONE
    }
}

pub fn animation_label(on: bool) -> &'static str {
    if on { "[x] Animation" } else { "[ ] Animation" }
}

/// Drag state carried between frames by [`slider_input`].
#[derive(Debug, Default)]
pub struct Scrub {
    active: bool,
    last: Option<usize>,
}

/// Scrub with the mouse along the track, or step with the keyboard.
pub fn slider_input(
    segments: Query<(&Interaction, &SliderSegment)>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut slider: ResMut<TimeSlider>,
    mut scrub: Local<Scrub>,
) {
    let find = |wanted: Interaction| {
        segments
            .iter()
            .find(|(interaction, _)| **interaction == wanted)
            .map(|(_, segment)| segment.0)
    };

    if mouse.just_pressed(MouseButton::Left) {
        // The pressed segment keeps Interaction::Pressed for the whole drag,
        // so it only counts on the frame the button goes down.
        let grabbed = find(Interaction::Pressed).or_else(|| find(Interaction::Hovered));
        scrub.active = grabbed.is_some();
        scrub.last = grabbed;
    } else if !mouse.pressed(MouseButton::Left) {
        *scrub = Scrub::default();
    } else if scrub.active {
        // Off the track the slider stays on the last segment under the cursor.
        if let Some(index) = find(Interaction::Hovered) {
            scrub.last = Some(index);
        }
    }

    if scrub.active {
        if let Some(index) = scrub.last.filter(|&index| index != slider.current()) {
            slider.set_current(index);
        }
    }

    if keyboard.just_pressed(KeyCode::ArrowRight) {
        slider.step(1);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        slider.step(-1);
    }
    if keyboard.just_pressed(KeyCode::Home) {
        let start = slider.start();
        slider.set_current(start);
    }
    if keyboard.just_pressed(KeyCode::End) {
        let end = slider.end();
        slider.set_current(end);
    }
}

pub fn animation_toggle_input(
    toggles: Query<&Interaction, (Changed<Interaction>, With<AnimationToggle>)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut slider: ResMut<TimeSlider>,
) {
    let clicked = toggles.iter().any(|i| *i == Interaction::Pressed);
    if clicked || keyboard.just_pressed(KeyCode::Space) {
        let on = slider.toggle_animation();
        info!("Animation {}", if on { "on" } else { "off" });
    }
}

pub fn refresh_control_panel(
    slider: Res<TimeSlider>,
    playback: Res<Playback>,
    pool: Res<SpherePool>,
    flow_maps: Res<FlowMaps>,
    mut segments: Query<(&SliderSegment, &mut BackgroundColor), Without<AnimationToggle>>,
    mut toggles: Query<&mut BackgroundColor, (With<AnimationToggle>, Without<SliderSegment>)>,
    mut labels: ParamSet<(
        Query<&mut Text, With<TimeLabel>>,
        Query<&mut Text, With<AnimationLabel>>,
    )>,
) {
    if !(slider.is_changed() || playback.is_changed() || pool.is_changed()) {
        return;
    }

    // While animating the track follows the animated frame.
    let marker = playback.frame().unwrap_or(slider.previous());
    for (segment, mut background) in &mut segments {
        background.set_if_neq(BackgroundColor(segment_colour(segment.0, marker)));
    }

    let shown = pool.shown().unwrap_or(marker);
    let time = flow_maps.get(shown).map_or(0, |map| map.time);
    let label = format!(
        "{} / {}   t = {}{}",
        shown,
        slider.end(),
        time,
        if playback.is_running() { "   (animating)" } else { "" }
    );
    for mut text in labels.p0().iter_mut() {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
    for mut text in labels.p1().iter_mut() {
        text.0 = animation_label(slider.animation()).to_string();
    }
    for mut background in &mut toggles {
        background.set_if_neq(BackgroundColor(if slider.animation() {
            BUTTON_ACTIVE
        } else {
            BUTTON_IDLE
        }));
    }
}
