use serde::{Deserialize, Serialize};

/// Game result from the profiled player's perspective.
///
/// Carried alongside the opening label for downstream consumers; the
/// scoring core itself only reads the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_representation() {
        assert_eq!(serde_json::to_string(&GameOutcome::Win).unwrap(), r#""win""#);
        let outcome: GameOutcome = serde_json::from_str(r#""draw""#).unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
    }
}
