use memomatch_core::{Cue, SoundError, SoundGateway};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

/// One preloaded `<audio>` element per cue.
#[derive(Debug, Default)]
pub(crate) struct HtmlAudioSounds {
    clips: [Option<HtmlAudioElement>; 4],
}

impl HtmlAudioSounds {
    pub(crate) const BASE_PATH: &'static str = "sounds";

    pub(crate) fn load() -> Self {
        let clips = Cue::ALL.map(|cue| {
            let src = clip_path(cue);
            match HtmlAudioElement::new_with_src(&src) {
                Ok(clip) => {
                    clip.load();
                    Some(clip)
                }
                Err(err) => {
                    log::warn!("failed to create audio for {}: {:?}", src, err);
                    None
                }
            }
        });
        Self { clips }
    }
}

impl SoundGateway for HtmlAudioSounds {
    fn play(&mut self, cue: Cue) -> Result<(), SoundError> {
        let clip = self.clips[slot(cue)]
            .as_ref()
            .ok_or(SoundError::Missing(cue))?;

        clip.set_current_time(0.0);
        let promise = clip.play().map_err(|_| SoundError::Refused(cue))?;

        // rejected when autoplay is blocked or the clip can't be decoded
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("{} cue rejected: {:?}", cue.name(), err);
            }
        });
        Ok(())
    }
}

pub(crate) fn clip_path(cue: Cue) -> String {
    format!("{}/{}.mp3", HtmlAudioSounds::BASE_PATH, cue.name())
}

const fn slot(cue: Cue) -> usize {
    match cue {
        Cue::Flip => 0,
        Cue::Match => 1,
        Cue::Win => 2,
        Cue::Lose => 3,
    }
}
