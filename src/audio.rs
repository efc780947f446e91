//! Sound cues
//!
//! Three short wav clips, loaded once at startup. If any of them is missing
//! or unplayable (or there is no output device) the game runs silently:
//! one warning is logged and every cue becomes a no-op.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Logged once when cues are unavailable
pub const MISSING_SOUNDS_NOTICE: &str = "Sound files not found. Playing without sound effects.";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits the floor or a wall hard enough to hear
    Bounce,
    /// Ball drops through the hoop
    Swish,
    /// Round timer ran out
    Buzzer,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Bounce, SoundEffect::Swish, SoundEffect::Buzzer];

    /// Clip file name inside the sound directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Bounce => "bounce.wav",
            SoundEffect::Swish => "swish.wav",
            SoundEffect::Buzzer => "buzzer.wav",
        }
    }

    fn index(&self) -> usize {
        match self {
            SoundEffect::Bounce => 0,
            SoundEffect::Swish => 1,
            SoundEffect::Buzzer => 2,
        }
    }

    /// The cue a game event raises, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Bounce { .. } => Some(SoundEffect::Bounce),
            GameEvent::Scored { .. } => Some(SoundEffect::Swish),
            GameEvent::TimeUp { .. } => Some(SoundEffect::Buzzer),
            _ => None,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<backend::Backend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    /// Load the clips from `settings.sound_dir`; falls back to silence
    pub fn load(settings: &Settings) -> Self {
        let backend = match backend::Backend::open(&settings.sound_dir) {
            Ok(backend) => Some(backend),
            Err(err) => {
                log::warn!("{MISSING_SOUNDS_NOTICE}");
                log::debug!("Audio unavailable: {err:#}");
                None
            }
        };
        Self {
            backend,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// A manager that never plays anything
    pub fn disabled() -> Self {
        let settings = Settings::default();
        Self {
            backend: None,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: settings.muted,
        }
    }

    /// Whether clips were loaded
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect (fire and forget)
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        if let Some(backend) = &self.backend {
            backend.play(effect, vol);
        }
    }

    /// Play whatever cue `event` raises
    pub fn handle_event(&self, event: &GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    use anyhow::Context;
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::SoundEffect;

    pub struct Backend {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        clips: [Arc<[u8]>; 3],
    }

    fn read_clip(dir: &Path, effect: SoundEffect) -> anyhow::Result<Arc<[u8]>> {
        let path = dir.join(effect.file_name());
        let bytes = std::fs::read(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let clip: Arc<[u8]> = bytes.into();
        Decoder::new(Cursor::new(clip.clone()))
            .with_context(|| format!("{} is not a playable sound", path.display()))?;
        Ok(clip)
    }

    impl Backend {
        pub fn open(dir: &Path) -> anyhow::Result<Self> {
            // Files first, so a missing clip is reported even without a device
            let clips = [
                read_clip(dir, SoundEffect::Bounce)?,
                read_clip(dir, SoundEffect::Swish)?,
                read_clip(dir, SoundEffect::Buzzer)?,
            ];
            let (stream, handle) =
                OutputStream::try_default().context("no audio output device")?;
            log::info!("Sound effects loaded from {}", dir.display());
            Ok(Self {
                _stream: stream,
                handle,
                clips,
            })
        }

        pub fn play(&self, effect: SoundEffect, volume: f32) {
            let Ok(sink) = Sink::try_new(&self.handle) else {
                return;
            };
            sink.set_volume(volume);

            let clip = self.clips[effect.index()].clone();
            let Ok(source) = Decoder::new(Cursor::new(clip)) else {
                return;
            };
            sink.append(source);
            sink.detach();
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use std::cell::Cell;
    use std::path::Path;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlAudioElement;

    use super::{MISSING_SOUNDS_NOTICE, SoundEffect};

    pub struct Backend {
        clips: Vec<HtmlAudioElement>,
        /// Set by the first clip that fails to load
        failed: Rc<Cell<bool>>,
    }

    impl Backend {
        pub fn open(dir: &Path) -> anyhow::Result<Self> {
            let failed = Rc::new(Cell::new(false));
            let mut clips = Vec::with_capacity(SoundEffect::ALL.len());

            for effect in SoundEffect::ALL {
                let url = format!("{}/{}", dir.display(), effect.file_name());
                let audio = HtmlAudioElement::new_with_src(&url)
                    .map_err(|e| anyhow::anyhow!("failed to create audio for {url}: {e:?}"))?;

                // Loading is async in the browser; a 404 shows up later as an error event
                let flag = failed.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    if !flag.replace(true) {
                        log::warn!("{MISSING_SOUNDS_NOTICE}");
                    }
                });
                audio
                    .add_event_listener_with_callback("error", closure.as_ref().unchecked_ref())
                    .map_err(|e| anyhow::anyhow!("failed to watch {url}: {e:?}"))?;
                closure.forget();

                clips.push(audio);
            }

            // Success is only known once the browser fetches the clips
            log::debug!("Sound effects requested from {}", dir.display());
            Ok(Self { clips, failed })
        }

        pub fn play(&self, effect: SoundEffect, volume: f32) {
            if self.failed.get() {
                return;
            }
            let Some(clip) = self.clips.get(effect.index()) else {
                return;
            };
            clip.set_volume(volume as f64);
            clip.set_current_time(0.0);
            let Ok(promise) = clip.play() else {
                return;
            };
            // Autoplay policy or a late load failure rejects the promise
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::debug!("Sound cue not played: {:?}", e);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Surface;
    use std::path::PathBuf;

    #[test]
    fn test_event_cues() {
        let bounce = GameEvent::Bounce {
            surface: Surface::Floor,
            speed: 5.0,
        };
        assert_eq!(SoundEffect::for_event(&bounce), Some(SoundEffect::Bounce));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Scored { score: 1 }),
            Some(SoundEffect::Swish)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::TimeUp {
                score: 0,
                attempts: 0
            }),
            Some(SoundEffect::Buzzer)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::Launched { attempts: 1 }), None);
    }

    #[test]
    fn test_missing_sound_dir_disables_audio() {
        let settings = Settings {
            sound_dir: PathBuf::from("/definitely/not/a/sound/dir"),
            ..Default::default()
        };
        let audio = AudioManager::load(&settings);
        assert!(!audio.is_enabled());
        // Cues are silently skipped
        audio.play(SoundEffect::Swish);
        audio.handle_event(&GameEvent::Scored { score: 1 });
    }

    #[test]
    fn test_effective_volume_respects_mute() {
        assert!((AudioManager::disabled().effective_volume() - 0.8).abs() < 1e-6);
        let settings = Settings {
            muted: true,
            sound_dir: PathBuf::from("/definitely/not/a/sound/dir"),
            ..Default::default()
        };
        assert_eq!(AudioManager::load(&settings).effective_volume(), 0.0);
    }
}
