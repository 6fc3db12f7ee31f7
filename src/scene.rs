//! Mission timeline.
//!
//! Each scene is a `SceneState`. `advance` is a pure function from the
//! current scene, a read-only view of the world and the frames since entry
//! to the next scene plus a list of commands; `SceneManager` owns the
//! bookkeeping (frame counter, entry time) and `Game` applies the commands.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use log::{debug, info};

use crate::config::Viewport;
use crate::consts::INTRO_SECONDS;
use crate::entities::{Boss, Enemy, EnemyBehavior};
use crate::registry::EnemyClass;
use crate::vector::deg_to_rad;

pub const BANNER_TEXT: &str = "GAME OVER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneState {
    #[default]
    Intro,
    InvadeDefault,
    Blank,
    InvadeWave,
    InvadeLarge,
    InvadeBoss,
    GameOver,
}

impl SceneState {
    pub const ALL: [SceneState; 7] = [
        SceneState::Intro,
        SceneState::InvadeDefault,
        SceneState::Blank,
        SceneState::InvadeWave,
        SceneState::InvadeLarge,
        SceneState::InvadeBoss,
        SceneState::GameOver,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SceneState::Intro => "intro",
            SceneState::InvadeDefault => "invade_default_type",
            SceneState::Blank => "blank",
            SceneState::InvadeWave => "invade_wave_move_type",
            SceneState::InvadeLarge => "invade_large_type",
            SceneState::InvadeBoss => "invade_boss",
            SceneState::GameOver => "gameover",
        }
    }
}

impl fmt::Display for SceneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScene(pub String);

impl FromStr for SceneState {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneState::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}

/// What a scene may look at when deciding its next step.
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    pub viewport: Viewport,
    pub player_alive: bool,
    pub boss_alive: bool,
    pub restart_requested: bool,
}

/// Side effects requested by a scene for `Game` to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    SpawnEnemy {
        class: EnemyClass,
        pos: Vec2,
        life: i32,
        behavior: EnemyBehavior,
        /// Travel direction override, in radians.
        heading_angle: Option<f32>,
    },
    PlaceBoss {
        pos: Vec2,
        life: i32,
    },
    BossEscape,
    /// Clear the restart flag, reset the score and replay the entrance.
    Restart,
    /// Draw the scrolling banner with its left edge at `pos`.
    ShowBanner {
        pos: Vec2,
        max_width: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneStep {
    /// Scene to switch to, if the current one ended this frame.
    pub next: Option<SceneState>,
    pub commands: Vec<SceneCommand>,
}

impl SceneStep {
    fn switch(&mut self, state: SceneState) {
        self.next = Some(state);
    }

    fn push(&mut self, command: SceneCommand) {
        self.commands.push(command);
    }
}

/// Horizontal position of the game-over banner at `frame`.
///
/// The banner is half the viewport wide and scrolls left two units per
/// frame, wrapping once it has fully left the screen.
pub fn banner_x(frame: i64, width: f32) -> f32 {
    let loop_width = width + width / 2.0;
    width - (frame as f32 * 2.0).rem_euclid(loop_width)
}

/// One frame of the current scene.
///
/// Later switches override earlier ones, so a boss defeat wins over a
/// simultaneous player death.
pub fn advance(state: SceneState, view: &SceneView, frame: i64, elapsed_secs: f32) -> SceneStep {
    let mut step = SceneStep::default();
    let w = view.viewport.width;
    let small = Enemy::SMALL_SIZE;

    match state {
        SceneState::Intro => {
            if elapsed_secs > INTRO_SECONDS {
                step.switch(SceneState::InvadeDefault);
            }
        }
        SceneState::InvadeDefault => {
            if frame % 30 == 0 {
                let (pos, degrees) = if frame % 60 == 0 {
                    (Vec2::new(-small, 30.0), 30.0)
                } else {
                    (Vec2::new(w + small, -small), 150.0)
                };
                step.push(SceneCommand::SpawnEnemy {
                    class: EnemyClass::Small,
                    pos,
                    life: 2,
                    behavior: EnemyBehavior::Default,
                    heading_angle: Some(deg_to_rad(degrees)),
                });
            }
            if frame == 270 {
                step.switch(SceneState::Blank);
            }
        }
        SceneState::Blank => {
            if frame == 150 {
                step.switch(SceneState::InvadeWave);
            }
        }
        SceneState::InvadeWave => {
            if frame % 50 == 0 {
                let x = if frame <= 200 { w * 0.2 } else { w * 0.8 };
                step.push(SceneCommand::SpawnEnemy {
                    class: EnemyClass::Small,
                    pos: Vec2::new(x, -small),
                    life: 2,
                    behavior: EnemyBehavior::Wave,
                    heading_angle: None,
                });
            }
            if frame == 450 {
                step.switch(SceneState::InvadeLarge);
            }
        }
        SceneState::InvadeLarge => {
            if frame % 100 == 0 {
                step.push(SceneCommand::SpawnEnemy {
                    class: EnemyClass::Large,
                    pos: Vec2::new(w / 2.0, -Enemy::LARGE_SIZE),
                    life: 50,
                    behavior: EnemyBehavior::Large,
                    heading_angle: None,
                });
            }
            if frame == 500 {
                step.switch(SceneState::InvadeBoss);
            }
        }
        SceneState::InvadeBoss => {
            let placing = frame == 0;
            if placing {
                step.push(SceneCommand::PlaceBoss {
                    pos: Vec2::new(w / 2.0, -Boss::SIZE),
                    life: 250,
                });
            }
            if !view.player_alive {
                step.switch(SceneState::GameOver);
                step.push(SceneCommand::BossEscape);
            }
            // A boss placed this frame has full life regardless of the view.
            if !placing && !view.boss_alive {
                step.switch(SceneState::Intro);
            }
            return step;
        }
        SceneState::GameOver => {
            step.push(SceneCommand::ShowBanner {
                pos: Vec2::new(banner_x(frame, w), view.viewport.height / 2.0),
                max_width: w / 2.0,
            });
            if view.restart_requested {
                step.push(SceneCommand::Restart);
                step.switch(SceneState::Intro);
            }
            return step;
        }
    }

    if state != SceneState::Intro && !view.player_alive {
        step.switch(SceneState::GameOver);
    }
    step
}

/// Tracks the active scene and how long it has been running.
#[derive(Debug, Clone)]
pub struct SceneManager {
    active: SceneState,
    entered_ms: u64,
    frame: i64,
}

impl SceneManager {
    pub fn new(initial: SceneState, now_ms: u64) -> Self {
        let mut manager = Self {
            active: initial,
            entered_ms: now_ms,
            frame: 0,
        };
        manager.switch_to(initial, now_ms);
        manager
    }

    pub fn active(&self) -> SceneState {
        self.active
    }

    /// Frames since the active scene was entered. Reads -1 between a switch
    /// and the next `update`.
    pub fn frame(&self) -> i64 {
        self.frame
    }

    pub fn switch_to(&mut self, state: SceneState, now_ms: u64) {
        info!("scene -> {state}");
        self.active = state;
        self.entered_ms = now_ms;
        self.frame = -1;
    }

    /// Switch by name; unknown names leave the manager untouched.
    pub fn switch_to_named(&mut self, name: &str, now_ms: u64) -> bool {
        match name.parse::<SceneState>() {
            Ok(state) => {
                self.switch_to(state, now_ms);
                true
            }
            Err(UnknownScene(name)) => {
                debug!("ignoring switch to unknown scene {name:?}");
                false
            }
        }
    }

    /// Run one frame of the active scene and return its commands.
    pub fn update(&mut self, view: &SceneView, now_ms: u64) -> Vec<SceneCommand> {
        let elapsed_secs = now_ms.saturating_sub(self.entered_ms) as f32 / 1000.0;
        let step = advance(self.active, view, self.frame, elapsed_secs);
        if let Some(next) = step.next {
            self.switch_to(next, now_ms);
        }
        self.frame += 1;
        step.commands
    }
}
