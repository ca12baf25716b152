//! Dependency injection container
//!
//! The container is the composition root: it owns cross-cutting defaults
//! and builds games, search engines, and sessions wired together. Embedding
//! hosts construct one [`App`] and hand the pieces to their input and
//! presentation layers; nothing in the crate reaches for ambient state.

use crate::{
    Result,
    app::{config::GameConfig, session::GameSession},
    game::Game,
    search::SearchEngine,
    types::{Color, PlayerKind},
};

/// Application composition root.
///
/// # Examples
///
/// ```
/// use corral::app::{App, GameConfig};
///
/// let app = App::for_testing().with_default_seed(42).build();
/// let session = app.create_session(GameConfig::default())?;
/// assert!(!session.game().is_over());
/// # Ok::<(), corral::Error>(())
/// ```
pub struct App {
    /// Seed applied to engines whose config does not set one.
    default_seed: Option<u64>,
}

impl App {
    /// Create an app with production defaults.
    pub fn new() -> Self {
        App { default_seed: None }
    }

    /// Builder for an app with custom defaults, mainly for tests.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Create a bare game from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid.
    pub fn create_game(&self, config: GameConfig) -> Result<Game> {
        Game::new(config)
    }

    /// Create the search engine for `color` under `config`.
    ///
    /// The config seed wins over the app default; with neither set the
    /// engine falls back to its own fixed seed.
    pub fn create_search(&self, config: &GameConfig, color: Color) -> Result<SearchEngine> {
        let level = config.ai_level(color);
        match config.seed.or(self.default_seed) {
            Some(seed) => SearchEngine::with_seed(level, seed),
            None => SearchEngine::new(level),
        }
    }

    /// Create a full session: a game plus one engine per AI-controlled
    /// color.
    pub fn create_session(&self, config: GameConfig) -> Result<GameSession> {
        let black = match config.black_player {
            PlayerKind::Ai => Some(self.create_search(&config, Color::Black)?),
            PlayerKind::Human => None,
        };
        let white = match config.white_player {
            PlayerKind::Ai => Some(self.create_search(&config, Color::White)?),
            PlayerKind::Human => None,
        };
        let game = Game::new(config)?;
        Ok(GameSession::new(game, black, white))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`App`] with custom defaults.
pub struct AppBuilder {
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        AppBuilder { default_seed: None }
    }

    /// Seed every engine created by this app unless its config overrides.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        App {
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
