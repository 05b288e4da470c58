//! Ball records and the population that owns them
//!
//! Leaders are indices into the population's ball vector, never references.
//! The population size never changes after construction.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::pursuit::{Board, integrate_position, pursuit_velocity};
use super::random::{RandomSource, nonzero_step};
use crate::config::{LeaderView, SimConfig};
use crate::error::PopulationError;
use crate::palette::NamedColor;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: IVec2,
    /// Direction of the last step
    pub velocity: IVec2,
    pub radius: i32,
    pub color: NamedColor,
    /// Index of the ball this one follows
    pub leader: usize,
}

impl Ball {
    /// Draw a ball with random state and a random leader other than `index`.
    ///
    /// Draw order: x, y, vx, vy, radius, color, leader.
    pub fn random<R: RandomSource + ?Sized>(index: usize, config: &SimConfig, rng: &mut R) -> Self {
        let x = rng.uniform_int(0, config.width - 1);
        let y = rng.uniform_int(0, config.height - 1);
        let vx = nonzero_step(rng, config.velocity_max);
        let vy = nonzero_step(rng, config.velocity_max);
        let radius = rng.uniform_int(config.radius_min, config.radius_max);
        let color = config.palette[rng.uniform_index(config.palette.len())];

        let mut leader = index;
        while leader == index {
            leader = rng.uniform_index(config.count);
        }

        Self {
            position: IVec2::new(x, y),
            velocity: IVec2::new(vx, vy),
            radius,
            color,
            leader,
        }
    }

    /// Point the velocity one unit toward the leader on each axis
    pub fn update_pursuit_velocity(&mut self, leader_position: IVec2) {
        self.velocity = pursuit_velocity(self.position, leader_position);
    }

    /// Step by the current velocity with toroidal wrap
    pub fn integrate_position(&mut self, board: Board) {
        self.position = integrate_position(self.position, self.velocity, board);
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_filled_circle(self.position, self.radius, self.color);
    }
}

/// The fixed population of balls (the entity store)
#[derive(Debug, Clone, Serialize)]
pub struct Population {
    board: Board,
    leader_view: LeaderView,
    balls: Vec<Ball>,
    /// Frame-start positions, only filled for `LeaderView::PreviousFrame`
    #[serde(skip)]
    snapshot: Vec<IVec2>,
}

impl Population {
    /// Create `config.count` random balls. The config must already have
    /// passed `SimConfig::validate`.
    pub fn random<R: RandomSource + ?Sized>(config: &SimConfig, rng: &mut R) -> Self {
        let balls: Vec<Ball> = (0..config.count)
            .map(|index| Ball::random(index, config, rng))
            .collect();
        log::debug!(
            "Initialized {} balls on a {}x{} board",
            balls.len(),
            config.width,
            config.height
        );

        Self {
            board: Board::new(config.width, config.height),
            leader_view: config.leader_view,
            balls,
            snapshot: Vec::new(),
        }
    }

    /// Build a population from explicit balls, checking the store invariants
    pub fn from_balls(
        board: Board,
        balls: Vec<Ball>,
        leader_view: LeaderView,
    ) -> Result<Self, PopulationError> {
        if balls.len() < 2 {
            return Err(PopulationError::TooSmall(balls.len()));
        }
        for (index, ball) in balls.iter().enumerate() {
            if ball.leader >= balls.len() {
                return Err(PopulationError::LeaderOutOfRange {
                    ball: index,
                    leader: ball.leader,
                });
            }
            if ball.leader == index {
                return Err(PopulationError::SelfLeader(index));
            }
            if !board.contains(ball.position) {
                return Err(PopulationError::OutOfBounds {
                    ball: index,
                    x: ball.position.x,
                    y: ball.position.y,
                });
            }
        }

        Ok(Self {
            board,
            leader_view,
            balls,
            snapshot: Vec::new(),
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn leader_view(&self) -> LeaderView {
        self.leader_view
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// How many balls follow each ball
    pub fn follower_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.balls.len()];
        for ball in &self.balls {
            counts[ball.leader] += 1;
        }
        counts
    }

    /// Index and follower count of the most followed ball (lowest index on ties)
    pub fn most_admired(&self) -> Option<(usize, usize)> {
        self.follower_counts()
            .into_iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
    }

    /// Draw every ball where it stands, in index order
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for ball in &self.balls {
            ball.render(canvas);
        }
    }

    /// Pursuit, integration, and render for every ball in ascending index
    /// order. Each ball is drawn at its new position.
    pub fn step<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let board = self.board;
        match self.leader_view {
            LeaderView::Live => {
                for index in 0..self.balls.len() {
                    let leader_position = self.balls[self.balls[index].leader].position;
                    let ball = &mut self.balls[index];
                    ball.update_pursuit_velocity(leader_position);
                    ball.integrate_position(board);
                    ball.render(canvas);
                }
            }
            LeaderView::PreviousFrame => {
                self.snapshot.clear();
                self.snapshot.extend(self.balls.iter().map(|b| b.position));
                for ball in self.balls.iter_mut() {
                    ball.update_pursuit_velocity(self.snapshot[ball.leader]);
                    ball.integrate_position(board);
                    ball.render(canvas);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::canvas::RecordingCanvas;
    use crate::sim::random::RngState;
    use std::collections::VecDeque;

    /// Replays a fixed list of draws
    struct ScriptedSource {
        values: VecDeque<i64>,
    }

    impl ScriptedSource {
        fn new(values: &[i64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }

        fn next(&mut self) -> i64 {
            self.values.pop_front().expect("script exhausted")
        }
    }

    impl RandomSource for ScriptedSource {
        fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
            let v = self.next() as i32;
            assert!((low..=high).contains(&v));
            v
        }

        fn uniform_index(&mut self, len: usize) -> usize {
            let v = self.next() as usize;
            assert!(v < len);
            v
        }
    }

    fn ball(x: i32, y: i32, leader: usize) -> Ball {
        Ball {
            position: IVec2::new(x, y),
            velocity: IVec2::ZERO,
            radius: 5,
            color: NamedColor::Red,
            leader,
        }
    }

    #[test]
    fn test_random_population_invariants() {
        let config = SimConfig::default();
        let mut rng = RngState::new(2024).to_rng();
        let population = Population::random(&config, &mut rng);

        assert_eq!(population.len(), config.count);
        for (index, ball) in population.balls().iter().enumerate() {
            assert!(population.board().contains(ball.position));
            assert!((config.radius_min..=config.radius_max).contains(&ball.radius));
            assert_ne!(ball.leader, index);
            assert!(ball.leader < config.count);
            assert!(config.palette.contains(&ball.color));
            assert_ne!(ball.velocity.x, 0);
            assert_ne!(ball.velocity.y, 0);
            assert!(ball.velocity.abs().max_element() <= config.velocity_max);
        }
    }

    #[test]
    fn test_population_of_two_follow_each_other() {
        let config = SimConfig {
            count: 2,
            ..Default::default()
        };
        for seed in 0..20 {
            let mut rng = RngState::new(seed).to_rng();
            let population = Population::random(&config, &mut rng);
            assert_eq!(population.balls()[0].leader, 1);
            assert_eq!(population.balls()[1].leader, 0);
        }
    }

    #[test]
    fn test_leader_resampled_until_not_self() {
        let config = SimConfig {
            count: 3,
            palette: vec![NamedColor::Red, NamedColor::Blue],
            ..Default::default()
        };
        // x, y, vx (0 resampled), vy, radius, color, leader (1 is self, then 2)
        let mut rng = ScriptedSource::new(&[7, 9, 0, 0, -3, 2, 11, 1, 1, 1, 2]);
        let ball = Ball::random(1, &config, &mut rng);
        assert_eq!(ball.position, IVec2::new(7, 9));
        assert_eq!(ball.velocity, IVec2::new(-3, 2));
        assert_eq!(ball.radius, 11);
        assert_eq!(ball.color, NamedColor::Blue);
        assert_eq!(ball.leader, 2);
    }

    #[test]
    fn test_same_seed_same_population() {
        let config = SimConfig::default();
        let a = Population::random(&config, &mut RngState::new(5).to_rng());
        let b = Population::random(&config, &mut RngState::new(5).to_rng());
        assert_eq!(a.balls(), b.balls());
    }

    #[test]
    fn test_from_balls_rejects_bad_leaders() {
        let board = Board::new(100, 100);
        let build = |balls: Vec<Ball>| {
            Population::from_balls(board, balls, LeaderView::Live).unwrap_err()
        };

        let err = build(vec![ball(1, 1, 0), ball(2, 2, 0)]);
        assert_eq!(err, PopulationError::SelfLeader(0));

        let err = build(vec![ball(1, 1, 5), ball(2, 2, 0)]);
        assert_eq!(err, PopulationError::LeaderOutOfRange { ball: 0, leader: 5 });

        let err = build(vec![ball(1, 1, 1)]);
        assert_eq!(err, PopulationError::TooSmall(1));

        let err = build(vec![ball(1, 100, 1), ball(2, 2, 0)]);
        assert_eq!(err, PopulationError::OutOfBounds { ball: 0, x: 1, y: 100 });
    }

    #[test]
    fn test_convergence_on_stationary_leader() {
        let board = Board::new(400, 400);
        let mut follower = ball(10, 10, 1);
        let leader_position = IVec2::new(13, 10);

        for _ in 0..3 {
            follower.update_pursuit_velocity(leader_position);
            follower.integrate_position(board);
        }
        assert_eq!(follower.position, IVec2::new(13, 10));

        follower.update_pursuit_velocity(leader_position);
        assert_eq!(follower.velocity, IVec2::ZERO);
    }

    #[test]
    fn test_pursuit_update_is_idempotent() {
        let mut follower = ball(50, 20, 1);
        follower.update_pursuit_velocity(IVec2::new(10, 90));
        let first = follower.velocity;
        follower.update_pursuit_velocity(IVec2::new(10, 90));
        assert_eq!(follower.velocity, first);
        assert_eq!(first, IVec2::new(-1, 1));
    }

    #[test]
    fn test_follower_counts_and_most_admired() {
        let board = Board::new(100, 100);
        let population = Population::from_balls(
            board,
            vec![ball(1, 1, 2), ball(2, 2, 2), ball(3, 3, 0), ball(4, 4, 0)],
            LeaderView::Live,
        )
        .unwrap();
        assert_eq!(population.follower_counts(), vec![2, 0, 2, 0]);
        assert_eq!(population.most_admired(), Some((0, 2)));
    }

    #[test]
    fn test_leaders_stay_fixed_and_valid_while_stepping() {
        let config = SimConfig {
            count: 30,
            ..Default::default()
        };
        let mut population = Population::random(&config, &mut RngState::new(9).to_rng());
        let leaders: Vec<usize> = population.balls().iter().map(|b| b.leader).collect();

        let mut canvas = RecordingCanvas::new();
        for _ in 0..50 {
            population.step(&mut canvas);
        }
        for (index, ball) in population.balls().iter().enumerate() {
            assert_eq!(ball.leader, leaders[index]);
            assert_ne!(ball.leader, index);
            assert!(ball.leader < population.len());
        }
        // Re-validating the stepped store still succeeds
        let rebuilt = Population::from_balls(
            population.board(),
            population.balls().to_vec(),
            population.leader_view(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_render_draws_without_moving() {
        let board = Board::new(100, 100);
        let population =
            Population::from_balls(board, vec![ball(1, 1, 1), ball(9, 4, 0)], LeaderView::Live)
                .unwrap();
        let mut canvas = RecordingCanvas::new();
        population.render(&mut canvas);
        let centers: Vec<IVec2> = canvas.calls.iter().map(|c| c.center).collect();
        assert_eq!(centers, vec![IVec2::new(1, 1), IVec2::new(9, 4)]);
        assert_eq!(population.balls()[0].position, IVec2::new(1, 1));
    }
}
