//! Playback orchestration
//!
//! The engine's work is done before either speech or motion starts; the
//! two then run concurrently and the call resolves when both have. The
//! sink does not report motion success or failure back here, and
//! cancellation is simply dropping the future.

use rand::SeedableRng;

use gestura_core::{GestureResult, Language};
use gestura_engine::{FrameTrack, GestureEngine, Utterance};

use crate::{grammatical_candidates, semantic_candidates, GrammaticalSource, SemanticOracle};

/// Robot-facing speech and motion executor.
pub trait MotionSink {
    /// Speak `text`; resolves when speech completes.
    async fn say(&self, text: &str);
    /// Play a keyframe track; resolves when motion completes.
    async fn perform(&self, track: &FrameTrack);
}

/// Speak `text` with synchronized gestures.
///
/// Resolves both candidate channels, compiles the plan, then speaks and
/// moves together. A plan with no frames degrades to plain speech; an
/// unsupported language tag fails the whole call before anything is
/// spoken.
pub async fn say_animated<O, G, S>(
    engine: &GestureEngine,
    oracle: &O,
    tagger: &G,
    sink: &S,
    text: &str,
    language_tag: &str,
) -> GestureResult<()>
where
    O: SemanticOracle,
    G: GrammaticalSource,
    S: MotionSink,
{
    let language: Language = language_tag.parse()?;
    let utterance = Utterance::analyze(text, language);

    let semantic = semantic_candidates(oracle, &utterance).await;
    let grammatical = grammatical_candidates(tagger, &utterance).await;

    let mut rng = rand::rngs::StdRng::from_entropy();
    let plan = engine.synchronize(text, language, semantic, grammatical, &mut rng)?;

    if plan.track.is_empty() {
        tracing::debug!("no gestures fit this utterance, speaking plainly");
        sink.say(text).await;
        return Ok(());
    }

    tracing::debug!(
        frames = plan.track.len(),
        speech_ms = plan.speech_duration.as_millis(),
        "speaking with gestures"
    );
    tokio::join!(sink.say(text), sink.perform(&plan.track));
    Ok(())
}
