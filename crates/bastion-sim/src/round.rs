//! Round and score state machine.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities. Systems receive a
//! `&mut GameState` and report score changes through [`GameState::award`],
//! which is the single place the win threshold is checked.

use tracing::info;

use bastion_core::constants::FIRST_ROUND;
use bastion_core::enums::GamePhase;
use bastion_core::events::GameEvent;
use bastion_core::rules::GameRules;
use bastion_core::state::RoundView;

/// Spawner budget and counters for the round in progress.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    pub round: u32,
    /// Enemies spawned so far.
    pub spawned: u32,
    /// Enemies to spawn before the round can complete.
    pub quota: u32,
    /// Nominal frames accumulated since the last spawn.
    pub spawn_timer: f64,
    pub destroyed: u32,
    pub impacts: u32,
    pub interceptors_launched: u32,
    pub bonus: u32,
}

impl RoundState {
    pub fn new(round: u32, rules: &GameRules) -> Self {
        Self {
            round,
            quota: rules.enemy_quota(round),
            ..Default::default()
        }
    }

    pub fn quota_met(&self) -> bool {
        self.spawned >= self.quota
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            spawned: self.spawned,
            quota: self.quota,
            destroyed: self.destroyed,
            impacts: self.impacts,
            interceptors_launched: self.interceptors_launched,
            bonus: self.bonus,
        }
    }
}

/// Phase, score and round of one playthrough.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub round: RoundState,
}

impl GameState {
    /// Fresh playthrough: round one, zero score, playing.
    pub fn new_game(rules: &GameRules) -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0,
            round: RoundState::new(FIRST_ROUND, rules),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Add points and move to `Win` the moment the threshold is reached.
    ///
    /// Points keep accumulating after a win inside the same pass; only the
    /// transition is one-shot.
    pub fn award(&mut self, points: u32, rules: &GameRules, events: &mut Vec<GameEvent>) {
        self.score = self.score.saturating_add(points);
        if self.is_playing() && self.score >= rules.win_score {
            self.phase = GamePhase::Win;
            info!(score = self.score, round = self.round.round, "Victory");
            events.push(GameEvent::Victory { score: self.score });
        }
    }

    /// Move to `GameOver`. Only a playing game can be lost.
    pub fn defeat(&mut self, events: &mut Vec<GameEvent>) {
        if !self.is_playing() {
            return;
        }
        self.phase = GamePhase::GameOver;
        info!(score = self.score, round = self.round.round, "All turrets destroyed");
        events.push(GameEvent::Defeat {
            round: self.round.round,
            score: self.score,
        });
    }

    /// Close the round: award the bonus, then enter `RoundEnd` unless the
    /// bonus pushed the score over the win threshold.
    pub fn complete_round(&mut self, bonus: u32, rules: &GameRules, events: &mut Vec<GameEvent>) {
        if !self.is_playing() {
            return;
        }
        self.round.bonus = bonus;
        self.award(bonus, rules, events);
        if self.is_playing() {
            self.phase = GamePhase::RoundEnd;
            info!(
                round = self.round.round,
                bonus,
                score = self.score,
                destroyed = self.round.destroyed,
                impacts = self.round.impacts,
                "Round complete"
            );
            events.push(GameEvent::RoundComplete {
                round: self.round.round,
                bonus,
            });
        }
    }

    /// Begin the next round with a fresh spawner budget. Score carries over.
    pub fn next_round(&mut self, rules: &GameRules) {
        self.round = RoundState::new(self.round.round + 1, rules);
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_round_one() {
        let rules = GameRules::default();
        let state = GameState::new_game(&rules);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.round.round, 1);
        assert_eq!(state.round.quota, 15);
    }

    #[test]
    fn award_crossing_threshold_wins_once() {
        let rules = GameRules::default();
        let mut state = GameState::new_game(&rules);
        let mut events = Vec::new();
        state.score = 990;

        state.award(20, &rules, &mut events);
        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(state.score, 1010);

        // Later kills in the same pass still count, without a second victory.
        state.award(20, &rules, &mut events);
        assert_eq!(state.score, 1030);
        let victories = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Victory { .. }))
            .count();
        assert_eq!(victories, 1);
    }

    #[test]
    fn exact_threshold_wins() {
        let rules = GameRules::default();
        let mut state = GameState::new_game(&rules);
        state.score = 980;
        state.award(20, &rules, &mut Vec::new());
        assert_eq!(state.phase, GamePhase::Win);
    }

    #[test]
    fn round_bonus_can_win() {
        let rules = GameRules::default();
        let mut state = GameState::new_game(&rules);
        let mut events = Vec::new();
        state.score = 900;

        state.complete_round(175, &rules, &mut events);
        assert_eq!(state.phase, GamePhase::Win);
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::RoundComplete { .. })));
    }

    #[test]
    fn round_bonus_below_threshold_ends_round() {
        let rules = GameRules::default();
        let mut state = GameState::new_game(&rules);
        let mut events = Vec::new();
        state.score = 100;

        state.complete_round(50, &rules, &mut events);
        assert_eq!(state.phase, GamePhase::RoundEnd);
        assert_eq!(state.score, 150);
        assert_eq!(state.round.bonus, 50);
        assert_eq!(events, vec![GameEvent::RoundComplete { round: 1, bonus: 50 }]);
    }

    #[test]
    fn defeat_is_ignored_outside_play() {
        let rules = GameRules::default();
        let mut state = GameState::new_game(&rules);
        state.phase = GamePhase::Win;
        state.defeat(&mut Vec::new());
        assert_eq!(state.phase, GamePhase::Win);
    }

    #[test]
    fn next_round_resets_budget_and_keeps_score() {
        let rules = GameRules::default();
        let mut state = GameState::new_game(&rules);
        state.score = 340;
        state.round.spawned = 15;
        state.round.destroyed = 9;
        state.round.spawn_timer = 33.0;
        state.phase = GamePhase::RoundEnd;

        state.next_round(&rules);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 340);
        assert_eq!(state.round.round, 2);
        assert_eq!(state.round.quota, 20);
        assert_eq!(state.round.spawned, 0);
        assert_eq!(state.round.destroyed, 0);
        assert_eq!(state.round.spawn_timer, 0.0);
    }
}
