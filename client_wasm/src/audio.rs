//! Audio through the page's `<audio>` elements
//!
//! Playback is best-effort: a missing element or a rejected `play()` promise
//! (autoplay policy, missing file) is logged and otherwise ignored.

use game_core::{Audio, SoundEffect};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAudioElement};

const BG_AUDIO_ID: &str = "bgAudio";
const EFFECT_AUDIO_ID: &str = "effectAudio";
const BG_VOLUME: f64 = 0.25;
const EFFECT_VOLUME: f64 = 0.3;

/// Indexed by [`SoundEffect::index`]
const EFFECT_SOUNDS: [&str; 2] = ["media/ball_hit.wav", "media/goal.wav"];

pub struct HtmlAudio {
    bg: Option<HtmlAudioElement>,
    effect: Option<HtmlAudioElement>,
}

impl HtmlAudio {
    pub fn new(document: &Document) -> Self {
        let bg = find_audio(document, BG_AUDIO_ID);
        let effect = find_audio(document, EFFECT_AUDIO_ID);

        if let Some(bg) = &bg {
            bg.set_volume(BG_VOLUME);
        }
        if let Some(effect) = &effect {
            effect.set_volume(EFFECT_VOLUME);
        }

        Self { bg, effect }
    }
}

fn find_audio(document: &Document, id: &'static str) -> Option<HtmlAudioElement> {
    let element = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
    if element.is_none() {
        log::warn!("No <audio id=\"{}\"> element, audio disabled", id);
    }
    element
}

/// Start playback and log if the browser refuses it
fn play(element: &HtmlAudioElement) {
    match element.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Audio playback failed: {:?}", e);
            }
        }),
        Err(e) => log::warn!("Audio playback failed: {:?}", e),
    }
}

impl Audio for HtmlAudio {
    fn play_effect(&mut self, effect: SoundEffect) {
        let Some(element) = &self.effect else {
            return;
        };
        element.set_src(EFFECT_SOUNDS[effect.index()]);
        play(element);
    }

    fn play_bg_audio(&mut self) {
        if let Some(bg) = &self.bg {
            play(bg);
        }
    }

    fn stop_bg_audio(&mut self) {
        if let Some(bg) = &self.bg {
            let _ = bg.pause();
            bg.set_current_time(0.0);
        }
    }
}
