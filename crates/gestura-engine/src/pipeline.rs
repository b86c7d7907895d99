//! Pipeline facade
//!
//! One call per utterance. Everything is created fresh inside the call
//! and handed back as a [`GesturePlan`]; only the catalog outlives it.

use std::sync::Arc;

use rand::Rng;

use gestura_catalog::GestureCatalog;
use gestura_core::{GestureResult, Language, TrackTime};

use crate::{
    assign_gestures, compile_track, complete_frames, sanitize, select_stress_words,
    CompilerConfig, FrameTrack, SelectorConfig, StressCandidate, Utterance,
};

/// Output of one synchronization call, ready for the playback
/// collaborator.
#[derive(Clone, Debug)]
pub struct GesturePlan {
    pub track: FrameTrack,
    /// How long the speech itself runs; motion never extends past it.
    pub speech_duration: TrackTime,
}

/// The gesture synchronization engine.
///
/// Holds the shared read-only catalog plus tuning; each
/// [`synchronize`](Self::synchronize) call is an independent, pure
/// transform.
#[derive(Clone, Debug)]
pub struct GestureEngine {
    catalog: Arc<GestureCatalog>,
    selector: SelectorConfig,
    compiler: CompilerConfig,
}

impl GestureEngine {
    pub fn new(catalog: Arc<GestureCatalog>) -> Self {
        GestureEngine {
            catalog,
            selector: SelectorConfig::default(),
            compiler: CompilerConfig::default(),
        }
    }

    pub fn with_configs(
        catalog: Arc<GestureCatalog>,
        selector: SelectorConfig,
        compiler: CompilerConfig,
    ) -> Self {
        GestureEngine {
            catalog,
            selector,
            compiler,
        }
    }

    pub fn catalog(&self) -> &GestureCatalog {
        &self.catalog
    }

    /// Compile one utterance into a keyframe track.
    ///
    /// Both candidate lists must already be fully materialized. Empty
    /// lists are fine: the utterance stays speakable, the track is just
    /// empty. The `rng` drives the per-utterance beat-pool shuffle.
    pub fn synchronize<R: Rng + ?Sized>(
        &self,
        text: &str,
        language: Language,
        semantic: Vec<StressCandidate>,
        grammatical: Vec<StressCandidate>,
        rng: &mut R,
    ) -> GestureResult<GesturePlan> {
        let utterance = Utterance::analyze(text, language);

        let semantic = sanitize(semantic, utterance.word_count());
        let grammatical = sanitize(grammatical, utterance.word_count());

        let selections =
            select_stress_words(language, &semantic, &grammatical, &self.selector);
        tracing::debug!(
            words = utterance.word_count(),
            selected = selections.len(),
            "stress selection done"
        );

        let scheduled = assign_gestures(&selections, &self.catalog, rng)?;
        let partial = compile_track(&scheduled, &utterance, self.catalog.rest(), &self.compiler)?;
        let track = complete_frames(&partial, self.catalog.rest());

        Ok(GesturePlan {
            track,
            speech_duration: utterance.speech_duration(),
        })
    }
}
