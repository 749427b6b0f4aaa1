use monopoly_core::GameConfig;

/// Settings for one simulated game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Rounds played before the game is called.
    pub max_rounds: u32,
    /// Seed for dice and shuffles; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub game: GameConfig,
}

impl SimulationConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;

    pub fn new(game: GameConfig) -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            seed: None,
            game,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// The configured seed, or a fresh one from the thread RNG.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
