//! Scored suggestions of what to pick up next.

use questforge_domain::{Difficulty, Priority, Quest};

use super::planner::{CompletionPlanner, PlanningError};

/// An eligible quest with its score and what contributed to it.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub quest: Quest,
    pub score: i32,
    pub reasons: Vec<String>,
}

impl CompletionPlanner {
    /// Rank eligible quests, best first.
    ///
    /// Ties keep catalog order. At most `recommendation_limit` entries are
    /// returned.
    pub fn recommend(
        &self,
        preferred_locations: &[String],
    ) -> Result<Vec<Recommendation>, PlanningError> {
        let analyzer = self.analyzer()?;

        let mut scored: Vec<(usize, Recommendation)> = analyzer
            .quests()
            .into_iter()
            .filter(|quest| analyzer.is_eligible(quest.id()))
            .map(|quest| {
                let position = analyzer.graph().position(quest.id()).unwrap_or(usize::MAX);
                (position, score(quest, preferred_locations))
            })
            .collect();

        scored.sort_by(|(pa, a), (pb, b)| {
            b.score
                .cmp(&a.score)
                .then(pa.cmp(pb))
                .then_with(|| a.quest.id().cmp(b.quest.id()))
        });

        let limit = self.settings().recommendation_limit;
        let recommendations: Vec<Recommendation> = scored
            .into_iter()
            .take(limit)
            .map(|(_, recommendation)| recommendation)
            .collect();

        tracing::debug!(
            count = recommendations.len(),
            preferred_locations = preferred_locations.len(),
            "Recommendations ranked"
        );
        Ok(recommendations)
    }
}

fn score(quest: &Quest, preferred_locations: &[String]) -> Recommendation {
    let mut score = 0;
    let mut reasons = Vec::new();

    let experience_points = match quest.experience() {
        1000.. => 3,
        500.. => 2,
        100.. => 1,
        _ => 0,
    };
    if experience_points > 0 {
        score += experience_points;
        reasons.push(format!("{} experience", quest.experience()));
    }

    let credit_points = match quest.credits() {
        500.. => 2,
        100.. => 1,
        _ => 0,
    };
    if credit_points > 0 {
        score += credit_points;
        reasons.push(format!("{} credits", quest.credits()));
    }

    if let Some(location) = quest.location() {
        if preferred_locations.iter().any(|preferred| preferred == location) {
            score += 2;
            reasons.push(format!("at preferred location {location}"));
        }
    }

    let priority_points = match quest.priority() {
        Priority::Critical => 3,
        Priority::High => 2,
        Priority::Medium => 1,
        Priority::Low => 0,
    };
    if priority_points > 0 {
        score += priority_points;
        reasons.push(format!("{} priority", quest.priority()));
    }

    match quest.difficulty() {
        Difficulty::Easy => {
            score += 1;
            reasons.push("easy".to_string());
        }
        Difficulty::Hard => {
            score -= 1;
            reasons.push("hard".to_string());
        }
        Difficulty::Medium => {}
    }

    Recommendation {
        quest: quest.clone(),
        score,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use questforge_domain::QuestStatus;

    use super::*;
    use crate::infrastructure::app_settings::PlannerSettings;
    use crate::test_fixtures::{catalog_over, planner_over, quest, town_catalog};

    fn ranked(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations
            .iter()
            .map(|r| r.quest.id().as_str())
            .collect()
    }

    #[test]
    fn scores_follow_reward_tiers() {
        let drake = quest("drake", &[])
            .with_rewards(1200, 800)
            .with_priority(Priority::Critical)
            .with_difficulty(Difficulty::Hard);
        // 3 xp + 2 credits + 3 priority - 1 hard
        assert_eq!(score(&drake, &[]).score, 7);

        let errand = quest("errand", &[])
            .with_rewards(99, 99)
            .with_priority(Priority::Low);
        let scored = score(&errand, &[]);
        assert_eq!(scored.score, 0);
        assert!(scored.reasons.is_empty());
    }

    #[test]
    fn preferred_location_adds_two() {
        let herbs = quest("herbs", &[]).with_location("mountain");
        let base = score(&herbs, &[]).score;
        let preferred = score(&herbs, &["mountain".to_string()]);
        assert_eq!(preferred.score, base + 2);
        assert!(preferred.reasons.iter().any(|r| r.contains("mountain")));
    }

    #[test]
    fn easy_ranks_at_least_as_high_as_hard() {
        let quests = vec![
            quest("hard", &[])
                .with_rewards(300, 300)
                .with_difficulty(Difficulty::Hard),
            quest("easy", &[])
                .with_rewards(300, 300)
                .with_difficulty(Difficulty::Easy),
        ];
        let recommendations = planner_over(quests).recommend(&[]).unwrap();
        assert_eq!(ranked(&recommendations), vec!["easy", "hard"]);
    }

    #[test]
    fn only_eligible_quests_are_recommended() {
        let quests = vec![
            quest("done", &[]).with_status(QuestStatus::Completed),
            quest("skipped", &[]).with_status(QuestStatus::Skipped),
            quest("next", &["done"]),
            quest("locked", &["next"]),
        ];
        let recommendations = planner_over(quests).recommend(&[]).unwrap();
        assert_eq!(ranked(&recommendations), vec!["next"]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let quests = vec![quest("zeta", &[]), quest("alpha", &[]), quest("mid", &[])];
        let recommendations = planner_over(quests).recommend(&[]).unwrap();
        assert_eq!(ranked(&recommendations), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn results_are_capped_by_limit() {
        let quests = (0..25).map(|i| quest(&format!("q{i}"), &[])).collect();
        let recommendations = planner_over(quests).recommend(&[]).unwrap();
        assert_eq!(recommendations.len(), 10);

        let settings = PlannerSettings {
            recommendation_limit: 3,
            ..PlannerSettings::default()
        };
        let quests = (0..25).map(|i| quest(&format!("q{i}"), &[])).collect();
        let planner = CompletionPlanner::new(catalog_over(quests), settings);
        assert_eq!(planner.recommend(&[]).unwrap().len(), 3);
    }

    #[test]
    fn town_ranking_puts_drake_first() {
        let recommendations = planner_over(town_catalog())
            .recommend(&["village".to_string()])
            .unwrap();
        assert_eq!(recommendations[0].quest.id().as_str(), "slay_drake");
        assert!(recommendations.iter().all(|r| r.quest.id().as_str() != "guard_gate"));
    }
}
