//! Audio domain: categorized playback request messages.

use bevy::asset::Handle;
use bevy::audio::AudioSource;
use bevy::ecs::message::Message;

/// Starts looping background music. A request for the clip that is already
/// looping is a no-op, so scene music never restarts on a same-track load.
#[derive(Debug)]
pub struct PlayMusic {
    pub clip: Option<Handle<AudioSource>>,
}

impl Message for PlayMusic {}

/// Plays on the primary sfx channel, interrupting whatever it was playing.
#[derive(Debug)]
pub struct PlaySfx {
    pub clip: Option<Handle<AudioSource>>,
}

impl Message for PlaySfx {}

/// Plays an effect without disturbing the primary sfx channel (overlapping
/// sounds such as footsteps).
#[derive(Debug)]
pub struct PlaySfxOneShot {
    pub clip: Option<Handle<AudioSource>>,
    pub volume_scale: f32,
}

impl Message for PlaySfxOneShot {}

/// One-shot on the dedicated ui channel; ui sounds never compete with or
/// cancel gameplay sfx.
#[derive(Debug)]
pub struct PlayUiSfx {
    pub clip: Option<Handle<AudioSource>>,
    pub volume_scale: f32,
}

impl Message for PlayUiSfx {}
