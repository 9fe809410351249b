use chrono::{DateTime, Local};

use super::WidgetScope;
use crate::core::{
    msg::{timer::TimerMsg, Msg},
    scope::Listeners,
    ticker::Ticker,
    widget::WidgetId,
};
use crate::infrastructure::config::TimingConfig;

/// Live clock card
#[derive(Debug)]
pub struct ClockState {
    now: DateTime<Local>,
    _scope: WidgetScope,
}

impl ClockState {
    pub fn mount(
        now: DateTime<Local>,
        ticker: &Ticker<Msg>,
        listeners: &Listeners<WidgetId>,
        timing: &TimingConfig,
    ) -> Self {
        let mut scope = WidgetScope::new(WidgetId::Clock, ticker, listeners);
        scope.every(timing.clock_interval(), Msg::Timer(TimerMsg::ClockTick));
        Self { now, _scope: scope }
    }

    pub fn tick(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// `HH:MM:SS`, 24-hour
    pub fn time(&self) -> String {
        self.now.format("%H:%M:%S").to_string()
    }

    pub fn weekday(&self) -> String {
        self.now.format("%A").to_string()
    }

    /// `DD Month YYYY`
    pub fn date(&self) -> String {
        self.now.format("%d %B %Y").to_string()
    }
}
