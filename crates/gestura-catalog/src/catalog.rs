//! Gesture catalog - the process-wide template registry

use gestura_core::{GestureError, GestureResult, Language, Pose};

use crate::{builtin, GestureTemplate, IconicKind};

/// Static registry of gesture templates plus the neutral pose.
///
/// Built once at startup and shared read-only across utterances (wrap in
/// `Arc` to share). The beat pool must not be empty; everything else is
/// free-form.
#[derive(Clone, Debug)]
pub struct GestureCatalog {
    beats: Vec<GestureTemplate>,
    greeting: GestureTemplate,
    self_reference: GestureTemplate,
    addressee: GestureTemplate,
    rest: Pose,
}

impl GestureCatalog {
    /// The stock catalog with the builtin gesture library.
    pub fn builtin() -> Self {
        GestureCatalog {
            beats: builtin::beat_pool(),
            greeting: builtin::hello_iconic(),
            self_reference: builtin::i_iconic(),
            addressee: builtin::you_iconic(),
            rest: Pose::rest(),
        }
    }

    /// A custom catalog. Fails with [`GestureError::EmptyGesturePool`]
    /// when no beat templates are supplied.
    pub fn new(
        beats: Vec<GestureTemplate>,
        greeting: GestureTemplate,
        self_reference: GestureTemplate,
        addressee: GestureTemplate,
        rest: Pose,
    ) -> GestureResult<Self> {
        if beats.is_empty() {
            return Err(GestureError::EmptyGesturePool);
        }
        Ok(GestureCatalog {
            beats,
            greeting,
            self_reference,
            addressee,
            rest,
        })
    }

    /// The beat pool, unordered.
    pub fn beats(&self) -> &[GestureTemplate] {
        &self.beats
    }

    /// The fixed template for an iconic family.
    pub fn iconic(&self, kind: IconicKind) -> &GestureTemplate {
        match kind {
            IconicKind::Greeting => &self.greeting,
            IconicKind::SelfReference => &self.self_reference,
            IconicKind::Addressee => &self.addressee,
        }
    }

    /// The neutral pose every track settles back to.
    pub fn rest(&self) -> &Pose {
        &self.rest
    }

    /// Classify a lower-cased word against the trigger vocabularies.
    pub fn classify(&self, word: &str, language: Language) -> Option<IconicKind> {
        IconicKind::for_word(word, language)
    }
}
