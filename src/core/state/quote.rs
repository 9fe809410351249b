use color_eyre::eyre::Result;

use super::WidgetScope;
use crate::content::QUOTES;
use crate::core::{
    msg::{timer::TimerMsg, Msg},
    scope::Listeners,
    ticker::Ticker,
    widget::WidgetId,
};
use crate::domain::rotation::RotationState;
use crate::infrastructure::config::TimingConfig;

#[derive(Debug)]
pub struct QuoteState {
    quotes: RotationState<&'static str>,
    _scope: WidgetScope,
}

impl QuoteState {
    pub fn mount(
        ticker: &Ticker<Msg>,
        listeners: &Listeners<WidgetId>,
        timing: &TimingConfig,
    ) -> Result<Self> {
        let quotes = RotationState::new(QUOTES.iter().copied())?;
        let mut scope = WidgetScope::new(WidgetId::Quote, ticker, listeners);
        scope.every(timing.quote_interval(), Msg::Timer(TimerMsg::RotateQuote));
        Ok(Self {
            quotes,
            _scope: scope,
        })
    }

    pub fn quote(&self) -> &'static str {
        self.quotes.selected()
    }

    pub fn index(&self) -> usize {
        self.quotes.index()
    }

    pub fn rotate(&mut self) {
        self.quotes.advance();
    }
}
