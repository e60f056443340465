//! Fixed-step frame loop.
//!
//! Each frame runs to completion in a fixed order: drain input, dispatch every
//! event, update the active screen, record the scene, present it. The async
//! [`Runtime::run`] only paces frames; [`Runtime::step`] is the whole frame
//! and can be driven synchronously.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::app::Application;
use crate::config::RuntimeConfig;
use crate::events::{AppMode, GameEvent};
use crate::input::InputSource;
use crate::render::Scene;
use crate::{Result, RuntimeError};

/// Counts frames at a fixed cadence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameClock {
    frame_duration: Duration,
    frames: u64,
}

impl FrameClock {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            frame_duration,
            frames: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn advance(&mut self) {
        self.frames += 1;
    }
}

/// Configuration and clock owned by the frame loop.
#[derive(Clone, Debug)]
pub struct RuntimeContext {
    pub config: RuntimeConfig,
    pub clock: FrameClock,
}

impl RuntimeContext {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        if config.frames_per_second == 0 {
            return Err(RuntimeError::InvalidFrameRate);
        }
        let clock = FrameClock::new(config.frame_duration());
        Ok(Self { config, clock })
    }
}

/// A finished frame handed to the presenter.
#[derive(Clone, Copy, Debug)]
pub struct RenderedFrame<'a> {
    pub index: u64,
    pub mode: AppMode,
    pub scene: &'a Scene,
    /// Events emitted while producing this frame.
    pub events: &'a [GameEvent],
}

/// Shows finished frames to the user.
pub trait Presenter {
    fn present(&mut self, frame: RenderedFrame<'_>) -> Result<()>;
}

/// Drives an [`Application`] with input from `I` and output to `P`.
pub struct Runtime<I, P> {
    context: RuntimeContext,
    app: Application,
    input: I,
    presenter: P,
    scene: Scene,
}

impl<I, P> Runtime<I, P>
where
    I: InputSource,
    P: Presenter,
{
    pub fn new(config: RuntimeConfig, input: I, presenter: P) -> Result<Self> {
        let app = Application::new(&config)?;
        Ok(Self {
            context: RuntimeContext::new(config)?,
            app,
            input,
            presenter,
            scene: Scene::new(),
        })
    }

    pub fn application(&self) -> &Application {
        &self.app
    }

    pub fn context(&self) -> &RuntimeContext {
        &self.context
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Scene recorded by the most recent frame.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Runs one complete frame. Returns false once the application has quit.
    pub fn step(&mut self) -> Result<bool> {
        let input = self.input.poll()?;
        for event in input.events {
            self.app.handle_input(event);
        }
        self.app.update(input.held);

        self.scene.clear();
        self.app.draw(&mut self.scene);

        let events = self.app.drain_events();
        let frame = RenderedFrame {
            index: self.context.clock.frames(),
            mode: self.app.mode(),
            scene: &self.scene,
            events: &events,
        };
        self.presenter.present(frame)?;
        self.context.clock.advance();

        Ok(self.app.is_running())
    }

    /// Steps frames at the configured cadence until the application quits.
    ///
    /// Late frames are not caught up; the loop resumes at the next tick.
    pub async fn run(&mut self) -> Result<()> {
        let frame_duration = self.context.clock.frame_duration();
        let mut interval = time::interval(frame_duration);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            fps = self.context.config.frames_per_second,
            "frame loop started"
        );
        loop {
            interval.tick().await;
            let started = Instant::now();

            if !self.step()? {
                break;
            }

            let elapsed = started.elapsed();
            if elapsed > frame_duration {
                warn!(?elapsed, budget = ?frame_duration, "frame overran its budget");
            }
        }
        debug!(frames = self.context.clock.frames(), "frame loop finished");

        Ok(())
    }
}
