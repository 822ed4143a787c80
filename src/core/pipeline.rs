use crate::core::extract::Extractor;
use crate::core::translate;
use crate::domain::model::{AtisSnapshot, RawAtis};
use crate::domain::ports::AtisSource;
use crate::utils::error::Result;

/// One-shot fetch → extract → translate run, executed per request.
pub struct AtisPipeline<S: AtisSource> {
    source: S,
    extractor: Extractor,
}

impl<S: AtisSource> AtisPipeline<S> {
    pub fn new(source: S) -> Result<Self> {
        Ok(Self {
            source,
            extractor: Extractor::new()?,
        })
    }

    pub async fn run(&self) -> Result<AtisSnapshot> {
        let html = self.source.fetch().await?;
        let raw = self.extractor.extract(&html);
        tracing::debug!("Extracted raw fields: {:?}", raw);
        translate_raw(raw)
    }
}

fn translate_raw(raw: RawAtis) -> Result<AtisSnapshot> {
    Ok(AtisSnapshot {
        time: raw.time.as_deref().map(translate::speak_time).transpose()?,
        information: raw
            .information
            .as_deref()
            .map(translate::speak_letter)
            .transpose()?,
        runway: raw
            .runway
            .as_deref()
            .map(translate::speak_runway)
            .transpose()?,
        circuit: raw
            .circuit
            .as_deref()
            .map(translate::speak_circuit)
            .transpose()?,
        qnh: raw.qnh.as_deref().map(translate::speak_pressure).transpose()?,
        qfe: raw.qfe.as_deref().map(translate::speak_pressure).transpose()?,
    })
}
