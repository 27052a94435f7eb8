//! Audio domain: playback channels and volume application.

use bevy::audio::{AudioSink, AudioSinkPlayback, PlaybackMode, PlaybackSettings, Volume};
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::audio::events::{PlayMusic, PlaySfx, PlaySfxOneShot, PlayUiSfx};
use crate::audio::mixer::{Mixer, MixerParam, db_to_linear, linear_to_db};
use crate::settings::{Settings, SettingsChanged};

/// Marker for the looping music channel entity.
#[derive(Component)]
pub struct MusicChannel;

/// Marker for the primary sfx channel entity (single slot, each request
/// replaces it).
#[derive(Component)]
pub struct SfxChannel;

/// Clip currently looping on the music channel.
#[derive(Resource, Debug, Default)]
pub struct ActiveMusic {
    pub clip: Option<Handle<AudioSource>>,
}

/// Handles for the shared ui clips, loaded at startup. The session
/// coordinator requests `level_complete` when a level ends; menu
/// collaborators request `click`.
#[derive(Resource, Debug, Default)]
pub struct UiSounds {
    pub click: Option<Handle<AudioSource>>,
    pub level_complete: Option<Handle<AudioSource>>,
}

pub(crate) fn load_ui_sounds(asset_server: Res<AssetServer>, mut sounds: ResMut<UiSounds>) {
    sounds.click = Some(asset_server.load("audio/ui_click.ogg"));
    sounds.level_complete = Some(asset_server.load("audio/level_complete.ogg"));
}

/// Pushes the saved sliders to the mixer. The sfx slider drives both the
/// sfx and ui parameters; a single slider controls two channels.
pub(crate) fn push_volumes(settings: &Settings, mixer: &mut Mixer) {
    mixer.set_db(MixerParam::Master, linear_to_db(settings.master_volume()));
    mixer.set_db(MixerParam::Music, linear_to_db(settings.music_volume()));
    let sfx_db = linear_to_db(settings.sfx_volume());
    mixer.set_db(MixerParam::Sfx, sfx_db);
    mixer.set_db(MixerParam::UiSfx, sfx_db);
}

pub(crate) fn apply_volumes_on_startup(settings: Res<Settings>, mut mixer: ResMut<Mixer>) {
    push_volumes(&settings, &mut mixer);
}

pub(crate) fn apply_volumes_on_change(
    mut changes: MessageReader<SettingsChanged>,
    settings: Res<Settings>,
    mut mixer: ResMut<Mixer>,
) {
    if changes.read().next().is_none() {
        return;
    }
    push_volumes(&settings, &mut mixer);
}

pub(crate) fn handle_play_music(
    mut commands: Commands,
    mut requests: MessageReader<PlayMusic>,
    mut active: ResMut<ActiveMusic>,
    mixer: Res<Mixer>,
    channel: Query<Entity, With<MusicChannel>>,
) {
    for request in requests.read() {
        let Some(clip) = request.clip.clone() else {
            continue;
        };
        // Same track already looping: leave it alone
        if active.clip.as_ref() == Some(&clip) && !channel.is_empty() {
            continue;
        }
        for entity in &channel {
            commands.entity(entity).despawn();
        }
        commands.spawn((
            MusicChannel,
            AudioPlayer(clip.clone()),
            PlaybackSettings {
                mode: PlaybackMode::Loop,
                volume: Volume::Decibels(mixer.channel_db(MixerParam::Music)),
                ..default()
            },
        ));
        active.clip = Some(clip);
    }
}

pub(crate) fn handle_play_sfx(
    mut commands: Commands,
    mut requests: MessageReader<PlaySfx>,
    mixer: Res<Mixer>,
    channel: Query<Entity, With<SfxChannel>>,
) {
    for request in requests.read() {
        let Some(clip) = request.clip.clone() else {
            continue;
        };
        // Single slot: a new request always interrupts the previous sfx
        for entity in &channel {
            commands.entity(entity).despawn();
        }
        commands.spawn((
            SfxChannel,
            AudioPlayer(clip),
            PlaybackSettings {
                mode: PlaybackMode::Once,
                volume: Volume::Decibels(mixer.channel_db(MixerParam::Sfx)),
                ..default()
            },
        ));
    }
}

pub(crate) fn handle_play_sfx_one_shot(
    mut commands: Commands,
    mut requests: MessageReader<PlaySfxOneShot>,
    mixer: Res<Mixer>,
) {
    for request in requests.read() {
        let Some(clip) = request.clip.clone() else {
            continue;
        };
        let gain = one_shot_gain(&mixer, MixerParam::Sfx, request.volume_scale);
        spawn_one_shot(&mut commands, clip, gain);
    }
}

pub(crate) fn handle_play_ui_sfx(
    mut commands: Commands,
    mut requests: MessageReader<PlayUiSfx>,
    mixer: Res<Mixer>,
) {
    for request in requests.read() {
        let Some(clip) = request.clip.clone() else {
            continue;
        };
        let gain = one_shot_gain(&mixer, MixerParam::UiSfx, request.volume_scale);
        spawn_one_shot(&mut commands, clip, gain);
    }
}

/// Linear gain for a one-shot: channel gain scaled by the request's
/// `volume_scale`, clamped to `[0,4]`.
pub(crate) fn one_shot_gain(mixer: &Mixer, param: MixerParam, volume_scale: f32) -> f32 {
    db_to_linear(mixer.channel_db(param)) * volume_scale.clamp(0.0, 4.0)
}

fn spawn_one_shot(commands: &mut Commands, clip: Handle<AudioSource>, gain: f32) {
    commands.spawn((
        AudioPlayer(clip),
        PlaybackSettings {
            mode: PlaybackMode::Despawn,
            volume: Volume::Linear(gain),
            ..default()
        },
    ));
}

/// Keeps the long-lived channel sinks in step with the mixer when a
/// settings change moves the sliders mid-playback.
pub(crate) fn sync_channel_volumes(
    mixer: Res<Mixer>,
    mut music: Query<&mut AudioSink, (With<MusicChannel>, Without<SfxChannel>)>,
    mut sfx: Query<&mut AudioSink, (With<SfxChannel>, Without<MusicChannel>)>,
) {
    if !mixer.is_changed() {
        return;
    }
    for mut sink in &mut music {
        sink.set_volume(Volume::Decibels(mixer.channel_db(MixerParam::Music)));
    }
    for mut sink in &mut sfx {
        sink.set_volume(Volume::Decibels(mixer.channel_db(MixerParam::Sfx)));
    }
}
