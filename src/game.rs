//! Driver-facing facade.
//!
//! A `Game` owns the registry, the scene manager, the starfield and the
//! simulation context. The driver builds one, polls `all_ready` while sprites
//! load, then calls `update_tick` once per display frame.

use glam::Vec2;
use log::info;
use rand::Rng;

use crate::config::Config;
use crate::context::{InputSnapshot, SimulationContext};
use crate::entities::BossMode;
use crate::error::GameError;
use crate::registry::EntityRegistry;
use crate::render::{Color, SpriteSource, Surface};
use crate::scene::{SceneCommand, SceneManager, SceneState, SceneView, BANNER_TEXT};
use crate::starfield::Starfield;

/// Where the score counter sits.
const HUD_POS: Vec2 = Vec2::new(30.0, 50.0);
const HUD_WIDTH: f32 = 100.0;

pub struct Game {
    config: Config,
    ctx: SimulationContext,
    registry: EntityRegistry,
    scenes: SceneManager,
    starfield: Starfield,
}

impl Game {
    /// Validate `config`, allocate every pool and start the intro with the
    /// player's entrance under way.
    pub fn new<R: Rng + ?Sized>(config: Config, now_ms: u64, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let registry = EntityRegistry::new(&config, now_ms);
        let starfield = Starfield::new(&config.starfield, &config.viewport, rng);
        info!(
            "game initialised: {}x{} viewport",
            config.viewport.width, config.viewport.height
        );
        Ok(Self {
            ctx: SimulationContext::new(now_ms),
            registry,
            scenes: SceneManager::new(SceneState::Intro, now_ms),
            starfield,
            config,
        })
    }

    pub fn load_sprites(&mut self, source: &dyn SpriteSource) {
        self.registry.load_sprites(source);
    }

    pub fn all_ready(&self) -> bool {
        self.registry.all_ready()
    }

    /// Advance the scene and every pool by one tick and issue this tick's
    /// draw calls.
    pub fn update_tick<R: Rng + ?Sized>(
        &mut self,
        input: InputSnapshot,
        now_ms: u64,
        rng: &mut R,
        surface: &mut dyn Surface,
    ) {
        self.ctx.input = input;
        self.ctx.now_ms = now_ms;
        if input.restart && !self.registry.player.body.is_alive() {
            self.ctx.restart_requested = true;
        }

        let viewport = self.config.viewport;
        surface.set_alpha(1.0);
        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(viewport.width, viewport.height),
            Color::BACKDROP,
        );
        surface.draw_text(
            &format!("{:05}", self.ctx.score()),
            HUD_POS,
            Color::WHITE,
            HUD_WIDTH,
        );

        let view = SceneView {
            viewport,
            player_alive: self.registry.player.body.is_alive(),
            boss_alive: self.registry.boss.body.is_alive(),
            restart_requested: self.ctx.restart_requested,
        };
        for command in self.scenes.update(&view, now_ms) {
            self.apply(command, surface);
        }

        self.starfield.update(&viewport);
        self.registry.update(&mut self.ctx, rng);

        self.starfield.draw(surface);
        self.registry.draw(surface, now_ms);
    }

    fn apply(&mut self, command: SceneCommand, surface: &mut dyn Surface) {
        match command {
            SceneCommand::SpawnEnemy {
                class,
                pos,
                life,
                behavior,
                heading_angle,
            } => {
                self.registry
                    .spawn_enemy(class, pos, life, behavior, heading_angle);
            }
            SceneCommand::PlaceBoss { pos, life } => self.registry.spawn_boss(pos, life),
            SceneCommand::BossEscape => self.registry.boss.set_mode(BossMode::Escape),
            SceneCommand::Restart => {
                info!("restart after game over at score {}", self.ctx.score());
                self.ctx.restart_requested = false;
                self.ctx.reset_score();
                self.registry.restart_player(self.ctx.now_ms);
            }
            SceneCommand::ShowBanner { pos, max_width } => {
                surface.draw_text(BANNER_TEXT, pos, Color::RED, max_width);
            }
        }
    }

    pub fn score(&self) -> u32 {
        self.ctx.score()
    }

    pub fn player_life(&self) -> i32 {
        self.registry.player.body.life
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimulationContext {
        &mut self.ctx
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    pub fn scene(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scene_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }
}
