//! Browser side of the teleport and game-over signals.
//!
//! The page is expected to contain a hidden element with id `gameover`; the
//! teleport cue is a detached `<audio>` element so it can be restarted on
//! every portal hit.

use cgmath::Vector3;
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlElement};

use crate::{
    data_structures::scene_graph::NodeId,
    physics::signal::{GameOverSignal, TeleportSignal},
};

const GAME_OVER_ID: &str = "gameover";

/// Plays the teleport sound from the start each time it fires.
pub struct TeleportSound {
    audio: HtmlAudioElement,
}

impl TeleportSound {
    pub fn new(src: &str) -> Result<Self, JsValue> {
        let audio = HtmlAudioElement::new_with_src(src)?;
        Ok(Self { audio })
    }
}

impl TeleportSignal for TeleportSound {
    fn emit(&mut self, _: NodeId, _: Option<Vector3<f32>>) {
        self.audio.set_current_time(0.0);
        match self.audio.play() {
            // Blocked autoplay rejects the promise, it does not fail the call.
            Ok(playback) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(playback).await {
                    log::warn!("Teleport cue could not be played: {:?}", e);
                }
            }),
            Err(e) => log::warn!("Teleport cue could not be started: {:?}", e),
        }
    }
}

/// Reveals the `#gameover` overlay.
pub struct GameOverMessage {
    element: HtmlElement,
}

impl GameOverMessage {
    pub fn from_document() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let element = document
            .get_element_by_id(GAME_OVER_ID)
            .ok_or_else(|| JsValue::from_str("missing #gameover element"))?
            .dyn_into::<HtmlElement>()?;
        Ok(Self { element })
    }
}

impl GameOverSignal for GameOverMessage {
    fn emit(&mut self, _: NodeId) {
        if let Err(e) = self.element.style().set_property("display", "block") {
            log::error!("Could not show the game over message: {:?}", e);
        }
    }
}
