use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audio feedback events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Flip,
    Match,
    Win,
    Lose,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Flip, Cue::Match, Cue::Win, Cue::Lose];

    pub const fn name(self) -> &'static str {
        use Cue::*;
        match self {
            Flip => "flip",
            Match => "match",
            Win => "win",
            Lose => "lose",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundError {
    #[error("No clip loaded for the {0:?} cue")]
    Missing(Cue),
    #[error("Playback of the {0:?} cue was refused")]
    Refused(Cue),
}

/// Plays cues on some output device.
pub trait SoundGateway {
    fn play(&mut self, cue: Cue) -> Result<(), SoundError>;
}

/// Gateway for headless runs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Silent;

impl SoundGateway for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Applies the autoplay rule in front of a gateway.
///
/// Cues are dropped until [`CuePlayer::unlock`] is called, and playback
/// failures never reach the caller.
#[derive(Clone, Debug, Default)]
pub struct CuePlayer<S> {
    gateway: S,
    unlocked: bool,
}

impl<S: SoundGateway> CuePlayer<S> {
    pub fn new(gateway: S) -> Self {
        Self {
            gateway,
            unlocked: false,
        }
    }

    pub fn unlock(&mut self) {
        if !self.unlocked {
            log::debug!("audio unlocked");
            self.unlocked = true;
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn play(&mut self, cue: Cue) {
        if !self.unlocked {
            log::trace!("cue {:?} dropped, no interaction yet", cue);
            return;
        }
        if let Err(err) = self.gateway.play(cue) {
            log::debug!("cue {:?} not played: {}", cue, err);
        }
    }

    pub fn gateway(&self) -> &S {
        &self.gateway
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Flaky {
        played: Vec<Cue>,
    }

    impl SoundGateway for Flaky {
        fn play(&mut self, cue: Cue) -> Result<(), SoundError> {
            if cue == Cue::Lose {
                return Err(SoundError::Missing(cue));
            }
            self.played.push(cue);
            Ok(())
        }
    }

    #[test]
    fn cues_before_unlock_are_dropped() {
        let mut player = CuePlayer::new(Flaky::default());

        player.play(Cue::Flip);
        assert!(player.gateway().played.is_empty());

        player.unlock();
        player.play(Cue::Flip);
        assert_eq!(player.gateway().played, [Cue::Flip]);
    }

    #[test]
    fn playback_errors_are_swallowed() {
        let mut player = CuePlayer::new(Flaky::default());
        player.unlock();

        player.play(Cue::Lose);
        player.play(Cue::Win);

        assert_eq!(player.gateway().played, [Cue::Win]);
    }

    #[test]
    fn cue_names_match_clip_files() {
        let names: Vec<_> = Cue::ALL.iter().map(|cue| cue.name()).collect();
        assert_eq!(names, ["flip", "match", "win", "lose"]);
    }
}
