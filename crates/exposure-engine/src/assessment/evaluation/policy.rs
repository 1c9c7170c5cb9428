use serde::{Deserialize, Serialize};

use super::super::domain::MarketProfile;
use super::vector::{ScoreVector, SCORE_CEILING, SCORE_FLOOR};

const NO_VIDEO_MULTIPLIER: f64 = 0.6;
const SPAM_CONTACT_THRESHOLD: u32 = 20;
const SPAM_RESPONSE_RATE: f64 = 0.05;
const TALENT_GAP_RESPONSES: u32 = 5;

/// Outreach pattern that triggered a visibility penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutreachTag {
    Invisible,
    Spamming,
    #[serde(rename = "Talent Gap")]
    TalentGap,
}

impl OutreachTag {
    pub const fn label(self) -> &'static str {
        match self {
            OutreachTag::Invisible => "Invisible",
            OutreachTag::Spamming => "Spamming",
            OutreachTag::TalentGap => "Talent Gap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutreachAssessment {
    pub multiplier: f64,
    pub tag: Option<OutreachTag>,
}

pub fn video_multiplier(has_video: bool) -> f64 {
    if has_video {
        1.0
    } else {
        NO_VIDEO_MULTIPLIER
    }
}

/// First matching rule wins.
pub fn outreach_multiplier(market: &MarketProfile) -> OutreachAssessment {
    let MarketProfile {
        coaches_contacted,
        responses_received,
        offers_received,
        ..
    } = *market;

    if coaches_contacted == 0 {
        return OutreachAssessment {
            multiplier: 0.7,
            tag: Some(OutreachTag::Invisible),
        };
    }

    let response_rate = f64::from(responses_received) / f64::from(coaches_contacted);
    if coaches_contacted >= SPAM_CONTACT_THRESHOLD && response_rate < SPAM_RESPONSE_RATE {
        return OutreachAssessment {
            multiplier: 0.8,
            tag: Some(OutreachTag::Spamming),
        };
    }

    if responses_received >= TALENT_GAP_RESPONSES && offers_received == 0 {
        return OutreachAssessment {
            multiplier: 0.9,
            tag: Some(OutreachTag::TalentGap),
        };
    }

    OutreachAssessment {
        multiplier: 1.0,
        tag: None,
    }
}

/// Scales every tier by both multipliers, rounding half up.
pub fn apply_multipliers(on_paper: ScoreVector, video: f64, outreach: f64) -> ScoreVector {
    on_paper.map(|score| {
        let scaled = (f64::from(score) * video * outreach).round() as i32;
        scaled.clamp(SCORE_FLOOR, SCORE_CEILING)
    })
}
