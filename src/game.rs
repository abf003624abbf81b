//! Session driver
//!
//! Runs the menu → round → game-over loop on top of a `Platform`. Each round
//! gets a fresh `GameState`; only the leaderboard survives between rounds.

use std::time::Duration;

use crate::error::{ConfigError, ShapeError};
use crate::highscores::HighScores;
use crate::menu::DifficultyMenu;
use crate::platform::{MusicTrack, Platform};
use crate::renderer::{game_over_frame, menu_frame, round_frame};
use crate::settings::{Difficulty, GameConfig};
use crate::sim::{GameState, tick};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// An enemy reached the ship
    Over { score: u64, frames: u64 },
    /// The platform asked to stop mid-round
    Quit,
}

pub struct Game<P: Platform> {
    platform: P,
    config: GameConfig,
    scores: HighScores,
    /// Session seed; round `n` plays with `seed + n`
    seed: u64,
    rounds_played: u64,
    round_limit: Option<u64>,
}

impl<P: Platform> Game<P> {
    /// Fails on a config that could never produce a playable round
    pub fn new(platform: P, config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            platform,
            config,
            scores: HighScores::new(),
            seed,
            rounds_played: 0,
            round_limit: None,
        })
    }

    /// Stop after this many rounds instead of restarting forever
    pub fn with_round_limit(mut self, rounds: Option<u64>) -> Self {
        self.round_limit = rounds;
        self
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Play rounds until the platform quits or the round limit is reached
    pub fn run(&mut self) -> Result<(), ShapeError> {
        log::info!("Session started with seed {}", self.seed);
        loop {
            if self.round_limit.is_some_and(|limit| self.rounds_played >= limit) {
                log::info!("Round limit of {} reached", self.rounds_played);
                return Ok(());
            }

            let Some(difficulty) = self.select_difficulty() else {
                log::info!("Quit from menu");
                return Ok(());
            };

            match self.play_round(difficulty)? {
                RoundOutcome::Quit => {
                    log::info!("Quit during round {}", self.rounds_played);
                    return Ok(());
                }
                RoundOutcome::Over { score, frames } => {
                    if let Some(rank) = self.scores.add_score(score, difficulty, frames) {
                        log::info!("New high score #{}: {}", rank, score);
                    }
                    self.show_game_over(score);
                }
            }
        }
    }

    /// Show the menu until a label is clicked. `None` means quit.
    pub fn select_difficulty(&mut self) -> Option<Difficulty> {
        self.platform.play_music(MusicTrack::Menu);
        let menu = DifficultyMenu::new(&self.config);
        let frame = menu_frame(&menu);

        loop {
            let input = self.platform.poll();
            if input.quit {
                return None;
            }
            if let Some(difficulty) = input.clicks.iter().find_map(|&click| menu.select(click)) {
                log::info!("Difficulty selected: {}", difficulty.as_str());
                return Some(difficulty);
            }
            self.platform.present(&frame);
            self.platform.wait_frame(self.config.fps);
        }
    }

    /// Play one round to its end
    pub fn play_round(&mut self, difficulty: Difficulty) -> Result<RoundOutcome, ShapeError> {
        let seed = self.seed.wrapping_add(self.rounds_played);
        let mut state = GameState::new(&self.config, difficulty, seed)?;
        self.rounds_played += 1;
        self.platform.play_music(MusicTrack::Battle);
        log::info!(
            "Round {} started ({}, seed {})",
            self.rounds_played,
            difficulty.as_str(),
            seed
        );

        let dt = self.config.frame_dt();
        loop {
            let input = self.platform.poll();
            if input.quit {
                return Ok(RoundOutcome::Quit);
            }

            match tick(&mut state, &input.keys, dt) {
                Ok(events) => {
                    for event in &events {
                        log::debug!("{:?}", event);
                    }
                }
                Err(err) => {
                    log::warn!("Frame {} skipped: {}", state.time_ticks, err);
                    self.platform.wait_frame(self.config.fps);
                    continue;
                }
            }

            self.platform.present(&round_frame(&state));
            if state.is_over() {
                return Ok(RoundOutcome::Over {
                    score: state.score,
                    frames: state.time_ticks,
                });
            }
            self.platform.wait_frame(self.config.fps);
        }
    }

    /// Game-over screen, held for `game_over_delay_ms`
    pub fn show_game_over(&mut self, score: u64) {
        let best = self.scores.best().max(score);
        self.platform
            .present(&game_over_frame(score, best, &self.config));
        self.platform
            .delay(Duration::from_millis(self.config.game_over_delay_ms));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::Point;
    use crate::platform::PlatformInput;
    use crate::renderer::{DrawCommand, Frame};

    /// Replays scripted inputs, then repeats `fallback` forever
    struct ScriptedPlatform {
        script: VecDeque<PlatformInput>,
        fallback: PlatformInput,
        frames: Vec<Frame>,
        delays: Vec<Duration>,
        music: Vec<MusicTrack>,
    }

    impl ScriptedPlatform {
        fn new(script: Vec<PlatformInput>, fallback: PlatformInput) -> Self {
            Self {
                script: script.into(),
                fallback,
                frames: Vec::new(),
                delays: Vec::new(),
                music: Vec::new(),
            }
        }
    }

    impl Platform for ScriptedPlatform {
        fn poll(&mut self) -> PlatformInput {
            self.script.pop_front().unwrap_or_else(|| self.fallback.clone())
        }

        fn present(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }

        fn wait_frame(&mut self, _fps: u32) {}

        fn delay(&mut self, duration: Duration) {
            self.delays.push(duration);
        }

        fn play_music(&mut self, track: MusicTrack) {
            self.music.push(track);
        }
    }

    /// Every spawn x in [40, 50] puts an enemy right above the ship at x = 45
    fn narrow_config() -> GameConfig {
        GameConfig {
            screen_width: 90.0,
            ..GameConfig::default()
        }
    }

    fn click(config: &GameConfig, difficulty: Difficulty) -> PlatformInput {
        PlatformInput {
            clicks: vec![DifficultyMenu::new(config).label_center(difficulty)],
            ..Default::default()
        }
    }

    fn quit() -> PlatformInput {
        PlatformInput {
            quit: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_rounds_end_in_game_over_and_restart() {
        let config = narrow_config();
        let platform = ScriptedPlatform::new(Vec::new(), click(&config, Difficulty::Easy));
        let mut game = Game::new(platform, config, 42).unwrap().with_round_limit(Some(2));

        game.run().unwrap();

        assert_eq!(game.rounds_played(), 2);
        let platform = game.platform();
        assert_eq!(
            platform.music,
            [MusicTrack::Menu, MusicTrack::Battle, MusicTrack::Menu, MusicTrack::Battle]
        );
        assert_eq!(platform.delays, [Duration::from_millis(2000); 2]);

        let last = platform.frames.last().unwrap();
        assert_eq!(
            last.texts().collect::<Vec<_>>(),
            ["GAME OVER", "Score: 0", "Best Score: 0"]
        );
        // Zero scores stay off the board
        assert!(game.high_scores().is_empty());
    }

    #[test]
    fn test_rejects_unplayable_config() {
        let config = GameConfig {
            enemy_shape: vec![Point::new(1.0, 1.0)],
            ..GameConfig::default()
        };
        let platform = ScriptedPlatform::new(Vec::new(), PlatformInput::default());
        assert!(matches!(
            Game::new(platform, config, 1),
            Err(ConfigError::InvalidShape { name: "enemy", .. })
        ));
    }

    #[test]
    fn test_quit_from_menu() {
        let config = GameConfig::default();
        let platform = ScriptedPlatform::new(
            vec![PlatformInput::default(), quit()],
            click(&config, Difficulty::Hard),
        );
        let mut game = Game::new(platform, config, 1).unwrap();

        game.run().unwrap();

        assert_eq!(game.rounds_played(), 0);
        // One menu frame for the poll that didn't click anything
        assert_eq!(game.platform().frames.len(), 1);
        assert_eq!(game.platform().music, [MusicTrack::Menu]);
    }

    #[test]
    fn test_quit_mid_round() {
        let config = GameConfig::default();
        let script = vec![
            click(&config, Difficulty::Hard),
            PlatformInput::default(),
            PlatformInput::default(),
            quit(),
        ];
        let platform = ScriptedPlatform::new(script, PlatformInput::default());
        let mut game = Game::new(platform, config, 1).unwrap();

        game.run().unwrap();

        assert_eq!(game.rounds_played(), 1);
        let platform = game.platform();
        assert_eq!(platform.frames.len(), 2);
        assert!(platform.delays.is_empty());
        assert_eq!(platform.frames[1].texts().collect::<Vec<_>>(), ["Score: 0"]);
    }

    #[test]
    fn test_play_round_reports_score_and_frames() {
        let config = narrow_config();
        let platform = ScriptedPlatform::new(Vec::new(), PlatformInput::default());
        let mut game = Game::new(platform, config, 9).unwrap();

        let outcome = game.play_round(Difficulty::Easy).unwrap();

        match outcome {
            RoundOutcome::Over { score, frames } => {
                assert_eq!(score, 0);
                assert!(frames > 0);
                assert_eq!(game.platform().frames.len() as u64, frames);
            }
            RoundOutcome::Quit => panic!("round should end on contact"),
        }
    }

    #[test]
    fn test_game_over_shows_session_best() {
        let platform = ScriptedPlatform::new(Vec::new(), PlatformInput::default());
        let mut game = Game::new(platform, GameConfig::default(), 3).unwrap();
        game.scores.add_score(7, Difficulty::Hard, 500);

        game.show_game_over(2);

        let frame = game.platform().frames.last().unwrap();
        assert_eq!(
            frame.texts().collect::<Vec<_>>(),
            ["GAME OVER", "Score: 2", "Best Score: 7"]
        );
        assert!(matches!(
            &frame.commands[1],
            DrawCommand::Text { position, .. } if *position == Point::new(250.0, 300.0)
        ));
    }
}
