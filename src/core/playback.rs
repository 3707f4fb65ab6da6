// Pure half of the BGM controller: preference encoding, offset hygiene and
// the play/pause session state machine. No media element in sight, so the
// whole file runs host-side under a plain #[test].

/// Save cadence for the playback offset while audio is playing.
pub const SAVE_INTERVAL_MS: i32 = 700;

/// Seeking closer than this to the end of the track risks an immediate loop
/// wrap, so restores back off by a quarter second.
pub const END_SAFETY_MARGIN_SECS: f64 = 0.25;

/// A restore only applies when the element is still at (or nearly at) the
/// start; past this point the user already heard something.
pub const NEAR_ZERO_SECS: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundPref {
    On,
    Off,
}

impl SoundPref {
    /// Anything other than a literal "on" (including a missing key) is Off.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("on") => SoundPref::On,
            _ => SoundPref::Off,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SoundPref::On => "on",
            SoundPref::Off => "off",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SoundPref::On => SoundPref::Off,
            SoundPref::Off => SoundPref::On,
        }
    }
}

/// Decode a stored offset. Unparseable, non-finite or negative values are
/// treated as absent rather than propagated.
pub fn sanitize_offset(raw: Option<&str>) -> f64 {
    let t = raw.and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0);
    if t.is_finite() && t >= 0.0 {
        t
    } else {
        0.0
    }
}

/// Gate for offset writes: a non-finite or negative current time is never
/// persisted, leaving the store at its previous value.
pub fn persistable_offset(t: f64) -> Option<f64> {
    if t.is_finite() && t >= 0.0 {
        Some(t)
    } else {
        None
    }
}

/// Where to seek when restoring. With a known duration the target is clamped
/// a safety margin short of the end; without one the raw saved value is
/// trusted and the media element clamps on its own.
pub fn restore_seek(saved: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d.is_finite() && d > 0.0 => {
            saved.min((d - END_SAFETY_MARGIN_SECS).max(0.0))
        }
        _ => saved,
    }
}

/// Timer transitions the session asks its host to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTimer {
    Start,
    Stop,
}

/// Play/pause session state, media-backend-free. The host feeds it element
/// lifecycle events and carries out the returned timer/seek actions.
#[derive(Debug, Default)]
pub struct PlaybackSession {
    playing: bool,
    restored: bool,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Element entered "playing": the periodic offset save starts (replacing
    /// any timer already running).
    pub fn on_play(&mut self) -> SaveTimer {
        self.playing = true;
        SaveTimer::Start
    }

    /// Element entered "paused": the offset is persisted immediately by the
    /// host and the periodic save stops.
    pub fn on_pause(&mut self) -> SaveTimer {
        self.playing = false;
        SaveTimer::Stop
    }

    /// Metadata became available. Yields the one-time restore seek position,
    /// only on the first call and only when there is something to restore.
    pub fn on_metadata(&mut self, saved: f64, duration: Option<f64>) -> Option<f64> {
        if self.restored || saved <= 0.0 {
            return None;
        }
        self.restored = true;
        Some(restore_seek(saved, duration))
    }

    /// Pre-play restore path: if a saved offset exists and the element never
    /// moved off the start, seek there before calling play.
    pub fn seek_before_play(&self, saved: f64, current: f64) -> Option<f64> {
        if saved > 0.0 && current.is_finite() && current < NEAR_ZERO_SECS {
            Some(saved)
        } else {
            None
        }
    }
}
