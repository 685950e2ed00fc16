//! Score to audio rendering.
//!
//! This is the one canonical mapping from symbolic events to samples. Gains,
//! envelope shapes, drum voices and the normalization target all live here;
//! anything else that plays a score back must match it.

use seedsound_backend_music::midi_to_freq;
use seedsound_spec::{DrumKind, MusicData, StreamRng, RELEASE_TAIL_SECONDS};
use tracing::debug;

use crate::error::{AudioError, AudioResult, Track};
use crate::mixer::{self, Mixer};
use crate::pcm::Pcm16;
use crate::rng::hit_rng;
use crate::synthesis::{Kick, NoiseBurst, Synthesizer, Tone};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Peak level after normalization.
pub const TARGET_PEAK: f64 = 0.9;

/// Melody amplitude per unit of velocity.
pub const MELODY_GAIN: f64 = 0.3;

/// Fixed bass amplitude.
pub const BASS_GAIN: f64 = 0.35;

/// Longest score accepted, in milliseconds.
pub const MAX_DURATION_MS: u32 = 10 * 60 * 1000;

/// Drum voice settings: length in seconds and gain per unit of velocity.
const KICK: (f64, f64) = (0.2, 0.6);
const SNARE: (f64, f64) = (0.1, 0.4);
const HIHAT: (f64, f64) = (0.05, 0.15);

/// A rendered, normalized mono buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedAudio {
    /// Samples in `[-TARGET_PEAK, TARGET_PEAK]`.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl RenderedAudio {
    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        mixer::peak(&self.samples)
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Quantizes to 16-bit PCM.
    pub fn to_pcm16(&self) -> Pcm16 {
        Pcm16::from_samples(&self.samples, self.sample_rate)
    }
}

/// Buffer length for a score: `round(duration_ms / 1000 * 44100)`.
pub fn sample_count(duration_ms: u32) -> usize {
    // 44.1 samples per millisecond, rounded half up in integer arithmetic.
    ((duration_ms as u64 * 441 + 5) / 10) as usize
}

/// Renders a score to a normalized buffer.
///
/// Every event is validated before any sample is written; the first
/// malformed event fails the whole render with
/// [`AudioError::InvalidComposition`]. Events must end within
/// `duration_ms` plus [`RELEASE_TAIL_SECONDS`]; samples that ring past the
/// end of the buffer inside that tail are dropped.
///
/// Velocity 0 is valid. A score whose events are all silent renders to an
/// all-zero buffer with peak 0, exactly like an empty score.
pub fn render(music: &MusicData) -> AudioResult<RenderedAudio> {
    validate(music)?;

    let mut mixer = Mixer::new(sample_count(music.duration_ms));
    // Tones ignore the stream; one shared instance keeps the trait uniform.
    let mut silent_rng = StreamRng::new(0);

    for note in &music.notes {
        let tone = Tone::new(
            midi_to_freq(note.note),
            note.velocity * MELODY_GAIN,
            note.duration,
        );
        mix(&mut mixer, &tone, note.time, note.duration, &mut silent_rng);
    }

    for note in &music.bass {
        let tone = Tone::new(midi_to_freq(note.note), BASS_GAIN, note.duration);
        mix(&mut mixer, &tone, note.time, note.duration, &mut silent_rng);
    }

    for hit in &music.drums {
        let mut rng = hit_rng(hit.time, hit.kind);
        match hit.kind {
            DrumKind::Kick => {
                let (length, gain) = KICK;
                mix(&mut mixer, &Kick::new(gain * hit.velocity), hit.time, length, &mut rng);
            }
            DrumKind::Snare => {
                let (length, gain) = SNARE;
                let voice = NoiseBurst::snare(gain * hit.velocity);
                mix(&mut mixer, &voice, hit.time, length, &mut rng);
            }
            DrumKind::HiHat => {
                let (length, gain) = HIHAT;
                let voice = NoiseBurst::hihat(gain * hit.velocity);
                mix(&mut mixer, &voice, hit.time, length, &mut rng);
            }
        }
    }

    let mut samples = mixer.into_samples();
    mixer::normalize(&mut samples, TARGET_PEAK);

    debug!(
        samples = samples.len(),
        events = music.event_count(),
        tempo = music.tempo,
        "rendered score"
    );

    Ok(RenderedAudio {
        samples,
        sample_rate: SAMPLE_RATE,
    })
}

/// Renders straight to 16-bit PCM.
pub fn render_pcm16(music: &MusicData) -> AudioResult<Pcm16> {
    render(music).map(|audio| audio.to_pcm16())
}

fn mix(
    mixer: &mut Mixer,
    voice: &impl Synthesizer,
    time: f64,
    length: f64,
    rng: &mut StreamRng,
) {
    let sample_rate = SAMPLE_RATE as f64;
    let offset = (time * sample_rate).round() as usize;
    if offset >= mixer.len() {
        return;
    }
    let num_samples = ((length * sample_rate).round() as usize).min(mixer.len() - offset);
    let samples = voice.synthesize(num_samples, sample_rate, rng);
    mixer.add_at(offset, &samples);
}

/// Checks every event of a score.
pub fn validate(music: &MusicData) -> AudioResult<()> {
    if music.duration_ms > MAX_DURATION_MS {
        return Err(AudioError::invalid_composition(
            Track::Score,
            0,
            format!(
                "duration {} ms exceeds the {} ms limit",
                music.duration_ms, MAX_DURATION_MS
            ),
        ));
    }

    let limit = music.duration_seconds() + RELEASE_TAIL_SECONDS;
    for (index, note) in music.notes.iter().enumerate() {
        check_time(Track::Melody, index, note.time)?;
        check_duration(Track::Melody, index, note.duration)?;
        check_velocity(Track::Melody, index, note.velocity)?;
        check_end(Track::Melody, index, note.time + note.duration, limit)?;
    }
    for (index, hit) in music.drums.iter().enumerate() {
        check_time(Track::Drums, index, hit.time)?;
        check_velocity(Track::Drums, index, hit.velocity)?;
        check_end(Track::Drums, index, hit.time, limit)?;
    }
    for (index, note) in music.bass.iter().enumerate() {
        check_time(Track::Bass, index, note.time)?;
        check_duration(Track::Bass, index, note.duration)?;
        check_end(Track::Bass, index, note.time + note.duration, limit)?;
    }
    Ok(())
}

fn check_end(track: Track, index: usize, end: f64, limit: f64) -> AudioResult<()> {
    if end > limit {
        return Err(AudioError::invalid_composition(
            track,
            index,
            format!("event ends at {end} s, past the {limit} s limit"),
        ));
    }
    Ok(())
}

fn check_time(track: Track, index: usize, time: f64) -> AudioResult<()> {
    if !time.is_finite() || time < 0.0 {
        return Err(AudioError::invalid_composition(
            track,
            index,
            format!("time must be finite and >= 0, got {time}"),
        ));
    }
    Ok(())
}

fn check_duration(track: Track, index: usize, duration: f64) -> AudioResult<()> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(AudioError::invalid_composition(
            track,
            index,
            format!("duration must be finite and > 0, got {duration}"),
        ));
    }
    Ok(())
}

fn check_velocity(track: Track, index: usize, velocity: f64) -> AudioResult<()> {
    if !(0.0..=1.0).contains(&velocity) {
        return Err(AudioError::invalid_composition(
            track,
            index,
            format!("velocity must be within [0, 1], got {velocity}"),
        ));
    }
    Ok(())
}
