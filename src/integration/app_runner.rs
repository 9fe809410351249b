use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd_executor::CmdExecutor,
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::{
        config::Config,
        tui::{Event, Frame, TuiLike},
    },
    presentation::components::Components,
};

/// Drives the Elm loop on top of a terminal
///
/// Terminal events become raw messages, raw messages become domain messages,
/// and every `Tick` advances the ticker by the real time that passed since the
/// previous one. The element tree of each rendered frame is stored back into
/// the state so the next click is resolved against what is on screen.
pub struct AppRunner {
    state: AppState,
    tui: Arc<Mutex<dyn TuiLike>>,
    components: Components,
    executor: CmdExecutor,
    feedback_rx: mpsc::UnboundedReceiver<Msg>,
    last_tick: Instant,
}

impl AppRunner {
    pub async fn new(config: Config, tui: Arc<Mutex<dyn TuiLike>>) -> Result<Self> {
        let area = tui.lock().await.size()?;
        let state = AppState::new(config, area.width, area.height);
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state,
            tui,
            components: Components::new(),
            executor: CmdExecutor::with_feedback(feedback_tx),
            feedback_rx,
            last_tick: Instant::now(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run until quit is requested or the terminal closes its event stream
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.last_tick = Instant::now();
        self.render().await?;

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let Some(event) = event else {
                log::info!("terminal event stream ended");
                break;
            };
            self.handle_event(event).await?;

            if self.state.system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Process one terminal event
    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Tick => {
                let now = Instant::now();
                let elapsed = now.duration_since(self.last_tick);
                self.last_tick = now;
                self.advance(elapsed);
            }
            Event::Render => self.render().await?,
            Event::Resize(width, height) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.send_raw_msg(RawMsg::Resize(width, height));
                self.render().await?;
            }
            Event::Key(key) => self.send_raw_msg(RawMsg::Key(key)),
            Event::Mouse(mouse) => self.send_raw_msg(RawMsg::Mouse(mouse)),
            Event::Quit | Event::Closed => self.send_raw_msg(RawMsg::Quit),
            Event::Error => self.send_raw_msg(RawMsg::Error("terminal input error".to_string())),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }

        while let Ok(msg) = self.feedback_rx.try_recv() {
            self.dispatch(msg);
        }
        Ok(())
    }

    /// Move the virtual clock and feed every due timer through `update`
    pub fn advance(&mut self, elapsed: Duration) {
        let fired = self.state.ticker.advance(elapsed);
        for msg in fired {
            self.dispatch(msg);
        }
    }

    pub fn send_raw_msg(&mut self, raw: RawMsg) {
        for msg in translate_raw_to_domain(raw, &self.state) {
            self.dispatch(msg);
        }
    }

    /// Draw the current state and keep the frame's element tree
    pub async fn render(&mut self) -> Result<()> {
        let mut scene = None;
        {
            let state = &self.state;
            let components = &self.components;
            let mut tui = self.tui.lock().await;
            let mut draw = |frame: &mut Frame<'_>| scene = Some(components.render(frame, state));
            tui.draw(&mut draw)?;
        }
        if let Some(scene) = scene {
            self.state.scene = scene;
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        let commands = update(msg, &mut self.state);
        if commands.is_empty() {
            return;
        }
        match self.executor.execute_commands(&commands) {
            Ok(log) => {
                for line in log {
                    log::trace!("{line}");
                }
            }
            Err(e) => {
                log::error!("command execution failed: {e}");
                update(
                    Msg::System(SystemMsg::ShowError(e.to_string())),
                    &mut self.state,
                );
            }
        }
    }
}
