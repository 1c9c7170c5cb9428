use serde::{Deserialize, Serialize};

use super::super::domain::MarketProfile;

const CLOSING_OFFERS: u32 = 3;

/// Where the coach-outreach process currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunnelStage {
    Invisible,
    Outreach,
    Conversation,
    Evaluation,
    Closing,
}

impl FunnelStage {
    pub const fn label(self) -> &'static str {
        match self {
            FunnelStage::Invisible => "Invisible",
            FunnelStage::Outreach => "Outreach",
            FunnelStage::Conversation => "Conversation",
            FunnelStage::Evaluation => "Evaluation",
            FunnelStage::Closing => "Closing",
        }
    }

    pub fn classify(contacted: u32, responses: u32, offers: u32) -> Self {
        if contacted == 0 {
            FunnelStage::Invisible
        } else if responses == 0 {
            FunnelStage::Outreach
        } else if offers == 0 {
            FunnelStage::Conversation
        } else if offers >= CLOSING_OFFERS {
            FunnelStage::Closing
        } else {
            FunnelStage::Evaluation
        }
    }

    pub const fn bottleneck(self) -> &'static str {
        match self {
            FunnelStage::Invisible => "No outreach started",
            FunnelStage::Outreach => "No responses yet",
            FunnelStage::Conversation => "Conversations not converting to offers",
            FunnelStage::Evaluation => "Limited offer options",
            FunnelStage::Closing => "Decision time",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            FunnelStage::Invisible => {
                "Begin contacting coaches - even 10 quality emails can generate responses"
            }
            FunnelStage::Outreach => {
                "Review email content, subject lines, and video quality. Consider targeting fit-appropriate programs"
            }
            FunnelStage::Conversation => {
                "Focus on building relationships with interested coaches. Attend their camps/events"
            }
            FunnelStage::Evaluation => {
                "Continue conversations while evaluating current offers. Request official visits"
            }
            FunnelStage::Closing => {
                "Compare offers, visit campuses, and make your commitment decision"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelAnalysis {
    pub stage: FunnelStage,
    pub conversion_rate: String,
    pub bottleneck: String,
    pub advice: String,
}

/// Reply rate as a percentage string, e.g. `"12.5% Reply Rate"`.
fn reply_rate(contacted: u32, responses: u32) -> String {
    if contacted == 0 {
        return "0% Reply Rate".to_string();
    }
    let rate = f64::from(responses) / f64::from(contacted) * 100.0;
    format!("{rate:.1}% Reply Rate")
}

pub fn compute_funnel(market: &MarketProfile) -> FunnelAnalysis {
    let stage = FunnelStage::classify(
        market.coaches_contacted,
        market.responses_received,
        market.offers_received,
    );

    FunnelAnalysis {
        stage,
        conversion_rate: reply_rate(market.coaches_contacted, market.responses_received),
        bottleneck: stage.bottleneck().to_string(),
        advice: stage.advice().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_follow_counter_progression() {
        assert_eq!(FunnelStage::classify(0, 4, 2), FunnelStage::Invisible);
        assert_eq!(FunnelStage::classify(12, 0, 0), FunnelStage::Outreach);
        assert_eq!(FunnelStage::classify(12, 3, 0), FunnelStage::Conversation);
        assert_eq!(FunnelStage::classify(12, 3, 1), FunnelStage::Evaluation);
        assert_eq!(FunnelStage::classify(12, 3, 3), FunnelStage::Closing);
    }

    #[test]
    fn reply_rate_formats_one_decimal() {
        assert_eq!(reply_rate(0, 0), "0% Reply Rate");
        assert_eq!(reply_rate(8, 1), "12.5% Reply Rate");
        assert_eq!(reply_rate(15, 3), "20.0% Reply Rate");
    }
}
