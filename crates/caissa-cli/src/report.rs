//! Report rendering for scored profiles.

use caissa_model::TraitProfile;
use caissa_profile::batch::PlayerProfile;
use caissa_stats::descriptive::DescriptiveStats;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON report envelope for downstream consumers.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    pub generated_at: DateTime<Utc>,
    pub player_id: String,
    #[serde(flatten)]
    pub profile: TraitProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centipawn_loss: Option<LossSummary>,
}

/// Descriptive summary of the player's centipawn-loss distribution.
#[derive(Debug, Serialize)]
pub struct LossSummary {
    pub mean: f32,
    pub median: f32,
    pub std_dev: f32,
    pub min: f32,
    pub max: f32,
}

impl From<&DescriptiveStats> for LossSummary {
    fn from(stats: &DescriptiveStats) -> Self {
        Self {
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
        }
    }
}

impl ProfileReport {
    pub fn new(player_id: String, profile: TraitProfile, losses: &[f32]) -> Self {
        Self {
            generated_at: Utc::now(),
            player_id,
            profile,
            centipawn_loss: DescriptiveStats::new(losses.iter().copied())
                .as_ref()
                .map(LossSummary::from),
        }
    }
}

/// Renders a profile as an aligned text table with score bars.
pub fn render_text(scored: &PlayerProfile) -> String {
    let profile = &scored.profile;
    let mut out = String::new();
    out.push_str(&format!("Player: {}\n", scored.player_id));
    out.push_str(&format!(
        "History: {} games, {} analyzed moves (confidence {:.0}%)\n\n",
        profile.games_analyzed,
        profile.moves_analyzed,
        profile.confidence * 100.0
    ));
    for (name, score) in profile.traits() {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = (score / 5.0).round() as usize;
        out.push_str(&format!(
            "  {name:<10} {score:>5.1}  {}{}\n",
            "#".repeat(filled),
            "-".repeat(20 - filled.min(20)),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_contains_all_traits() {
        let scored = PlayerProfile {
            player_id: "test".to_string(),
            profile: TraitProfile::neutral(),
        };
        let text = render_text(&scored);
        for name in [
            "tactical",
            "positional",
            "aggressive",
            "patient",
            "novelty",
            "staleness",
        ] {
            assert!(text.contains(name), "missing trait {name}");
        }
    }

    #[test]
    fn test_loss_summary_omitted_for_empty_history() {
        let report = ProfileReport::new("p".to_string(), TraitProfile::neutral(), &[]);
        assert!(report.centipawn_loss.is_none());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("centipawn_loss").is_none());
        assert_eq!(json["tactical"], 50.0);
    }
}
