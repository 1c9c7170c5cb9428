use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Athlete intake profile as submitted by the form. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    pub experience_level: ExperienceLevel,
    pub position: Position,
    #[serde(default)]
    pub secondary_positions: Vec<Position>,
    pub grad_year: u16,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub seasons: Vec<SeasonRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athletic_profile: Option<AthleticProfile>,
    #[serde(flatten)]
    pub market: MarketProfile,
}

impl Profile {
    /// Season with the highest year. When several seasons share that year the
    /// last one in input order wins.
    pub fn latest_season(&self) -> Option<&SeasonRecord> {
        self.seasons.iter().max_by_key(|season| season.year)
    }

    /// Age in fractional years on `as_of`, using 365.25-day years.
    pub fn age_on(&self, as_of: NaiveDate) -> Option<f64> {
        self.date_of_birth
            .map(|dob| (as_of - dob).num_days() as f64 / 365.25)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// One season of club or school play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub year: u16,
    #[serde(default)]
    pub team_name: String,
    #[serde(
        rename = "league",
        alias = "leagues",
        deserialize_with = "one_or_many_leagues"
    )]
    pub leagues: Vec<YouthLeague>,
    #[serde(default)]
    pub main_role: SeasonRole,
    #[serde(default)]
    pub minutes_played_percent: f64,
    #[serde(default)]
    pub goals: u16,
    #[serde(default)]
    pub assists: u16,
    #[serde(default)]
    pub honors: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(YouthLeague),
    Many(Vec<YouthLeague>),
}

fn one_or_many_leagues<'de, D>(deserializer: D) -> Result<Vec<YouthLeague>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(league) => vec![league],
        OneOrMany::Many(leagues) => leagues,
    })
}

/// Youth leagues ranked by college visibility. Unrecognised names fold into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YouthLeague {
    #[serde(rename = "MLS_NEXT")]
    MlsNext,
    #[serde(rename = "ECNL")]
    Ecnl,
    #[serde(rename = "Girls_Academy")]
    GirlsAcademy,
    #[serde(rename = "USL_Academy")]
    UslAcademy,
    #[serde(rename = "USYS_National")]
    UsysNational,
    #[serde(rename = "USYS_National_League")]
    UsysNationalLeague,
    #[serde(rename = "ECNL_RL")]
    EcnlRegional,
    #[serde(rename = "NPL")]
    Npl,
    #[serde(rename = "High_School")]
    HighSchool,
    #[serde(rename = "Elite_Local")]
    EliteLocal,
    #[serde(rename = "Club_Local")]
    ClubLocal,
    #[serde(rename = "Rec")]
    Recreational,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeasonRole {
    #[serde(rename = "Key_Starter")]
    KeyStarter,
    #[default]
    Rotation,
    Bench,
    Injured,
}

/// Highest level of play reached. Unknown tags deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "elite")]
    Elite,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "developing")]
    Developing,
    #[serde(rename = "Youth_Club_Only")]
    YouthClubOnly,
    #[serde(rename = "High_School_Varsity")]
    HighSchoolVarsity,
    #[serde(rename = "Adult_Amateur_League")]
    AdultAmateurLeague,
    #[serde(rename = "Semi_Pro_UPSL_NPSL_WPSL")]
    SemiPro,
    #[serde(rename = "International_Academy_U19")]
    InternationalAcademyU19,
    #[serde(rename = "Pro_Academy_Reserve")]
    ProAcademyReserve,
    #[serde(other)]
    Unknown,
}

impl ExperienceLevel {
    /// Professional or semi-professional adult football.
    pub const fn is_professional(self) -> bool {
        matches!(
            self,
            ExperienceLevel::SemiPro | ExperienceLevel::ProAcademyReserve
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    CB,
    LB,
    RB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    ST,
    CF,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::RB => "RB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::ST => "ST",
            Position::CF => "CF",
        }
    }
}

/// Five-level self-assessment scale, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AthleticRating {
    #[serde(rename = "Below_Average")]
    BelowAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Above_Average")]
    AboveAverage,
    #[serde(rename = "Top_10_Percent")]
    Top10Percent,
    #[serde(rename = "Elite")]
    Elite,
}

impl AthleticRating {
    pub const fn is_elite(self) -> bool {
        matches!(self, AthleticRating::Elite | AthleticRating::Top10Percent)
    }

    pub const fn is_weak(self) -> bool {
        matches!(self, AthleticRating::BelowAverage)
    }

    /// 0-100 readiness points for the rating.
    pub const fn points(self) -> u8 {
        match self {
            AthleticRating::BelowAverage => 30,
            AthleticRating::Average => 50,
            AthleticRating::AboveAverage => 70,
            AthleticRating::Top10Percent => 85,
            AthleticRating::Elite => 95,
        }
    }
}

/// Six-axis athletic self-assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleticProfile {
    pub speed: AthleticRating,
    pub strength: AthleticRating,
    pub endurance: AthleticRating,
    pub work_rate: AthleticRating,
    pub technical: AthleticRating,
    pub tactical: AthleticRating,
}

impl AthleticProfile {
    pub fn ratings(&self) -> [AthleticRating; 6] {
        [
            self.speed,
            self.strength,
            self.endurance,
            self.work_rate,
            self.technical,
            self.tactical,
        ]
    }
}

/// Coach outreach state and video presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketProfile {
    #[serde(default, alias = "videoLink")]
    pub has_video: bool,
    #[serde(default)]
    pub coaches_contacted: u32,
    #[serde(default)]
    pub responses_received: u32,
    #[serde(default)]
    pub offers_received: u32,
}

/// The five target tiers, most competitive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CollegeLevel {
    D1,
    D2,
    D3,
    #[serde(rename = "NAIA")]
    Naia,
    #[serde(rename = "JUCO")]
    Juco,
}

impl CollegeLevel {
    pub const ALL: [CollegeLevel; 5] = [
        CollegeLevel::D1,
        CollegeLevel::D2,
        CollegeLevel::D3,
        CollegeLevel::Naia,
        CollegeLevel::Juco,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CollegeLevel::D1 => "D1",
            CollegeLevel::D2 => "D2",
            CollegeLevel::D3 => "D3",
            CollegeLevel::Naia => "NAIA",
            CollegeLevel::Juco => "JUCO",
        }
    }
}
