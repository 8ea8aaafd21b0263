use chrono::Utc;
use eloview_engine::{
    align_api_with, build_baseview, check_truncation_with, participant_roster,
};
use eloview_providers::{parse_log_bytes, parse_match_detail};
use eloview_types::Baseview;

use crate::config::Config;
use crate::lease::Lease;
use crate::messages::{AdvancedStatsIngest, ConvertRequest};
use crate::queue::MessageQueue;
use crate::storage::FileStore;
use crate::Result;

/// What a handled request produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOutcome {
    pub baseview_path: String,
    /// False when an existing baseview was re-announced
    pub converted: bool,
    pub published: usize,
}

/// Handles conversion requests against a file store and message queue.
pub struct Converter<S, Q> {
    store: S,
    queue: Q,
    config: Config,
}

impl<S: FileStore, Q: MessageQueue> Converter<S, Q> {
    pub fn new(store: S, queue: Q, config: Config) -> Self {
        Self {
            store,
            queue,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Convert one match and announce the result.
    ///
    /// Either the baseview is written and announced for every participant,
    /// or an error is returned. A lease that expires after the write leaves
    /// the baseview unannounced; the next attempt finds it and announces it.
    pub fn handle(&self, request: &ConvertRequest, lease: &dyn Lease) -> Result<ConvertOutcome> {
        request.validate()?;
        let baseview_path = request.baseview_path(&self.config.output_dir);

        if self.store.exists(&baseview_path)? {
            tracing::info!(
                match_id = request.match_id,
                platform_id = %request.platform_id,
                override_existing = request.override_existing,
                "baseview already exists"
            );
            if !request.override_existing {
                let bytes = self.store.fetch(&baseview_path)?;
                let baseview: Baseview = serde_json::from_slice(&bytes)?;
                let published = self.publish(&baseview, &baseview_path, request)?;
                return Ok(ConvertOutcome {
                    baseview_path,
                    converted: false,
                    published,
                });
            }
        }

        let baseview = self.convert(request, lease)?;

        let bytes = serde_json::to_vec(&baseview)?;
        self.store.write(&baseview_path, &bytes)?;
        lease.check("upload")?;

        let published = self.publish(&baseview, &baseview_path, request)?;
        tracing::info!(
            match_id = request.match_id,
            platform_id = %request.platform_id,
            events = baseview.events.len(),
            published,
            "converted match"
        );

        Ok(ConvertOutcome {
            baseview_path,
            converted: true,
            published,
        })
    }

    fn convert(&self, request: &ConvertRequest, lease: &dyn Lease) -> Result<Baseview> {
        let tolerances = self.config.tolerances();

        let log = self.store.fetch(&request.elo_data_path)?;
        let mut events = parse_log_bytes(&log)?;
        tracing::debug!(events = events.len(), "parsed capture log");
        lease.check("parse")?;

        let detail_bytes = self.store.fetch(&request.match_details_path)?;
        let detail = parse_match_detail(&detail_bytes)?;

        align_api_with(&mut events, &detail, tolerances.offset_warning_secs)?;
        check_truncation_with(&events, detail.match_duration, tolerances.truncation_secs)
            .map_err(eloview_engine::Error::from)?;
        lease.check("calibrate")?;

        let participants = participant_roster(&detail).map_err(eloview_engine::Error::from)?;
        let baseview = build_baseview(&events, &participants, Utc::now())?;
        lease.check("build")?;

        Ok(baseview)
    }

    fn publish(
        &self,
        baseview: &Baseview,
        baseview_path: &str,
        request: &ConvertRequest,
    ) -> Result<usize> {
        for participant in &baseview.participants {
            let message = AdvancedStatsIngest {
                baseview_path: baseview_path.to_string(),
                baseview_type: self.config.baseview_type.clone(),
                match_id: request.match_id,
                platform_id: request.platform_id.clone(),
                summoner_id: participant.summoner_id,
            };
            self.queue.enqueue(serde_json::to_vec(&message)?)?;
        }
        Ok(baseview.participants.len())
    }
}
